pub mod output;
pub mod source;

// Re-export I/O traits for convenient access
pub use output::{
    create_writer, JsonWriter, MarkdownWriter, OutputWriter, RenderOptions, ReportSection,
    TerminalWriter,
};
pub use source::{source_for, FileSource, SourceError, StdinSource, TextSource};

use anyhow::Result;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)?;
    Ok(())
}
