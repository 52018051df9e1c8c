use crate::cli::parser::{Commands, HistoryFilterArgs};
use crate::config::Config;
use crate::core::history_filter::filter_history;
use crate::errors::AppResult;
use crate::models::dataset::Dataset;
use crate::models::history::HistoryFilterCriteria;
use crate::ui::messages::{header, info, warning};
use crate::utils::grams;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { filter } = cmd {
        let criteria = criteria_from_args(filter)?;
        let dataset = Dataset::resolve(cfg.data_path().as_deref())?;

        header("Production history");

        let mut table = Table::new(&[
            "date", "shift", "product", "weight", "target", "produced", "progress",
        ]);
        for e in filter_history(&dataset.history, &criteria) {
            table.add_row(vec![
                e.date.clone(),
                e.shift.to_string(),
                e.product.clone(),
                grams(e.weight),
                e.target.to_string(),
                e.produced.to_string(),
                format!("{}%", e.progress()?),
            ]);
        }

        if table.is_empty() {
            warning("No history entries match the selected filters.");
            return Ok(());
        }

        println!("{}", table.render());
        info(format!(
            "{} of {} entries",
            filter_history(&dataset.history, &criteria).count(),
            dataset.history.len()
        ));
    }
    Ok(())
}

pub(crate) fn criteria_from_args(args: &HistoryFilterArgs) -> AppResult<HistoryFilterCriteria> {
    HistoryFilterCriteria::from_raw(
        args.date.as_deref(),
        args.shift.as_deref(),
        args.product.as_deref(),
        args.weight.as_deref(),
    )
}
