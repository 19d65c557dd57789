//! Retrieval of the raw export text.
//!
//! The aggregation core never performs I/O; a [`TextSource`] is the seam
//! where the already-fetched blob comes from. The command layer maps a
//! failed read to an empty record set — "no data" is a data state, not a
//! fault the core ever sees.

use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read from stdin: {0}")]
    Stdin(#[from] std::io::Error),
}

/// Provider of the complete raw export text.
pub trait TextSource {
    fn read_text(&self) -> Result<String, SourceError>;

    /// Human-readable origin, for log messages.
    fn describe(&self) -> String;
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TextSource for FileSource {
    fn read_text(&self) -> Result<String, SourceError> {
        std::fs::read_to_string(&self.path).map_err(|source| SourceError::File {
            path: self.path.clone(),
            source,
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

pub struct StdinSource;

impl TextSource for StdinSource {
    fn read_text(&self) -> Result<String, SourceError> {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    }

    fn describe(&self) -> String {
        "stdin".to_string()
    }
}

/// `-` selects stdin, anything else is a file path.
pub fn source_for(path: &Path) -> Box<dyn TextSource> {
    if path == Path::new("-") {
        Box::new(StdinSource)
    } else {
        Box::new(FileSource::new(path))
    }
}
