use super::history::criteria_from_args;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportKind, ExportLogic, ExportRequest};
use crate::models::dataset::Dataset;
use crate::ui::messages::warning;
use crate::utils::date::resolve_date;
use std::path::PathBuf;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        history,
        for_shift,
        for_date,
        filter,
        dir,
        file,
        force,
    } = cmd
    {
        let engine = cfg.engine()?;
        let criteria = criteria_from_args(filter)?;

        if !*history && !criteria.is_empty() {
            warning("History filters are ignored without --history.");
        }

        let req = ExportRequest {
            format: *format,
            kind: if *history {
                ExportKind::History
            } else {
                ExportKind::Production
            },
            date: resolve_date(for_date.as_deref())?,
            shift: engine.resolve_shift(for_shift)?,
            criteria,
            dir: PathBuf::from(dir.as_deref().unwrap_or(cfg.export_dir.as_str())),
            file: file.as_ref().map(PathBuf::from),
            force: *force,
        };

        let dataset = Dataset::resolve(cfg.data_path().as_deref())?;
        ExportLogic::export(&dataset, cfg, &req)?;
    }
    Ok(())
}
