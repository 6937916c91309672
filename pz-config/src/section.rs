//! Section header normalization.
//!
//! The game server only reads the file when its first line is the
//! `[ServerConfig]` marker. Files written by hand or by the server itself
//! often lack it.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use pz_core::error::Result;
use tracing::debug;

/// Name of the one section the file holds.
pub const SECTION_NAME: &str = "ServerConfig";

/// Literal first line of a normalized file.
pub const SECTION_MARKER: &str = "[ServerConfig]";

/// What [`ensure_section_header`] had to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    /// The file did not exist and was created with only the marker.
    Created,
    /// The file was empty; the marker was appended.
    Appended,
    /// The marker was written in front of the existing lines.
    Prepended,
    /// The first line already was the marker.
    Unchanged,
}

/// Guarantee that `path` exists and its first line is [`SECTION_MARKER`].
///
/// Existing lines are never dropped: a missing marker is prepended and the
/// original bytes follow unchanged. Running this on an already normalized
/// file performs no write at all.
pub fn ensure_section_header(path: &Path) -> Result<HeaderAction> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            fs::write(path, format!("{SECTION_MARKER}\n"))?;
            debug!(path = %path.display(), "created config file with section header");
            return Ok(HeaderAction::Created);
        }
        Err(e) => return Err(e.into()),
    };

    if content.is_empty() {
        let mut file = OpenOptions::new().append(true).open(path)?;
        file.write_all(format!("{SECTION_MARKER}\n").as_bytes())?;
        debug!(path = %path.display(), "wrote section header into empty file");
        return Ok(HeaderAction::Appended);
    }

    let first_line = content.lines().next().unwrap_or_default();
    if first_line.trim() == SECTION_MARKER {
        return Ok(HeaderAction::Unchanged);
    }

    fs::write(path, format!("{SECTION_MARKER}\n{content}"))?;
    debug!(path = %path.display(), "prepended missing section header");
    Ok(HeaderAction::Prepended)
}
