use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use pz_messages::{msg, MESSAGES};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PzError {
    /// The config file named on the command line does not exist.
    FileNotFound {
        path: PathBuf,
    },
    /// The file exists but is not a single-section key/value list.
    ConfigFormat {
        source_desc: String,
        line: usize,
        reason: String,
    },
    Io(#[from] std::io::Error),
    /// Wrong argument count or shape.
    Usage,
}

impl Display for PzError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            PzError::FileNotFound { path } => write!(
                f,
                "{}",
                msg!(
                    MESSAGES.config.file_not_found,
                    path = path.display().to_string()
                )
            ),
            PzError::ConfigFormat {
                source_desc,
                line,
                reason,
            } => write!(
                f,
                "Config file is invalid: {}, line {}: {}",
                source_desc, line, reason
            ),
            PzError::Io(e) => write!(f, "I/O error: {}", e),
            PzError::Usage => write!(f, "Invalid arguments"),
        }
    }
}

impl PzError {
    /// Shorthand for building a [`PzError::ConfigFormat`].
    pub fn format(source_desc: impl Into<String>, line: usize, reason: impl Into<String>) -> Self {
        PzError::ConfigFormat {
            source_desc: source_desc.into(),
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PzError>;
