use std::path::{Path, PathBuf};

use anyhow::Context;
use nutriplan_report::{Export, HtmlRenderer, PdfReport, ReportRenderer, to_csv};

use crate::config::Config;

/// Writes an export into `dir`, creating it when needed.
pub fn write_export(export: &Export, dir: &Path) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let path = dir.join(&export.file_name);
    std::fs::write(&path, &export.content)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), bytes = export.content.len(), "export written");

    Ok(path)
}

fn output_dir(config: &Config, out: Option<PathBuf>) -> PathBuf {
    out.unwrap_or_else(|| PathBuf::from(&config.report.output_dir))
}

pub fn export_csv(config: &Config, plan: &Path, out: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    let foods = super::load_foods(config)?;
    let plan = super::load_plan(plan)?;

    let export = to_csv(&plan, &foods, &config.report_options()?)?;

    write_export(&export, &output_dir(config, out))
}

pub fn export_report(
    config: &Config,
    plan: &Path,
    out: Option<PathBuf>,
    locale: Option<String>,
) -> anyhow::Result<PathBuf> {
    let foods = super::load_foods(config)?;
    let plan = super::load_plan(plan)?;

    let mut options = config.report_options()?;
    if let Some(locale) = locale {
        options = options.with_locale(locale)?;
    }

    let report = PdfReport::build(&plan, &foods, &options)?;
    let export = HtmlRenderer.render(&report)?;

    write_export(&export, &output_dir(config, out))
}
