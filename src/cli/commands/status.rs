use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::{Core, RecordSummary};
use crate::errors::AppResult;
use crate::models::dataset::Dataset;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{paint, severity_colour, status_colour};
use crate::utils::table::Table;
use crate::utils::{grams, progress_bar, schedule_strip};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { shift, threshold } = cmd {
        let mut engine = cfg.engine()?;
        if let Some(t) = threshold {
            engine.alert_threshold = *t;
        }

        let shift = shift
            .as_deref()
            .map(|s| engine.resolve_shift(s))
            .transpose()?;

        let dataset = Dataset::resolve(cfg.data_path().as_deref())?;
        let rows = Core::build_dashboard(&dataset.records, &engine, shift)?;

        match shift {
            Some(s) => header(format!("Production (shift {s})")),
            None => header("Production (all shifts)"),
        }

        if rows.is_empty() {
            warning("No production runs to show.");
            return Ok(());
        }

        let color = colour_enabled();
        println!("{}", render_table(&rows, color));
        print_alerts(&rows, color);
    }
    Ok(())
}

fn colour_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn render_table(rows: &[RecordSummary<'_>], color: bool) -> String {
    let mut table = Table::new(&[
        "id", "product", "weight", "produced", "progress", "", "status", "pallets", "current",
        "shifts",
    ]);

    for s in rows {
        let r = s.record;
        table.add_row(vec![
            r.id.to_string(),
            r.product.clone(),
            grams(r.weight),
            format!("{}/{}", r.produced, r.target),
            format!("{}%", s.progress),
            progress_bar(s.display_progress(), 10),
            paint(status_colour(s.status), s.status.label(), color),
            format!(
                "{}/{} ({} left)",
                s.pallets.completed, s.pallets.total, s.pallets.remaining
            ),
            s.pallets.fill_label(),
            schedule_strip(&s.schedule),
        ]);
    }

    table.render()
}

fn print_alerts(rows: &[RecordSummary<'_>], color: bool) {
    for s in rows.iter().filter(|s| !s.alerts.is_empty()) {
        println!("{}:", s.record.product);
        for a in &s.alerts {
            println!("  {}", paint(severity_colour(a.severity()), &a.message(), color));
        }
    }
}
