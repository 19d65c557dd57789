use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::OutputFormat;
use crate::core::parsing::FillPolicy;
use crate::io::output::{create_writer, RenderOptions, ReportSection};
use crate::reports::Dashboard;

use super::{apply_color_mode, load_records, report_options};

pub struct ReportConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub sections: Option<Vec<ReportSection>>,
    pub top: Option<usize>,
    pub fill: FillPolicy,
    pub plain: bool,
}

pub fn handle_report(config: ReportConfig) -> Result<()> {
    // Colors never belong in a file destination.
    apply_color_mode(config.plain || config.output.is_some());

    let records = load_records(&config.path, config.fill);
    let dashboard = Dashboard::compute(&records, &report_options());
    let render = RenderOptions {
        sections: config.sections,
        top: config.top,
    };

    let destination: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(std::fs::File::create(path).with_context(|| {
            format!("failed to create output file {}", path.display())
        })?),
        None => Box::new(std::io::stdout()),
    };

    create_writer(config.format, destination).write_dashboard(&dashboard, &render)
}
