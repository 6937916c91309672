//! Ordered, case-sensitive key/value store for the `[ServerConfig]` section.
//!
//! Typical INI readers fold key case; the server treats `Password` and
//! `password` as different settings, so keys are stored verbatim in an
//! [`IndexMap`]. Overwriting a key keeps its position, new keys go last.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use pz_core::error::{PzError, Result};
use tracing::info;

use crate::section::{SECTION_MARKER, SECTION_NAME};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigStore {
    entries: IndexMap<String, String>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and parse a file whose header has already been normalized.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Parse INI text holding at most the one `[ServerConfig]` section.
    ///
    /// `source_desc` only feeds error messages.
    ///
    /// Rules:
    /// - `key=value` or `key:value`, split at the first delimiter, both
    ///   sides trimmed
    /// - lines starting with `#` or `;` are comments
    /// - a line indented deeper than the entry above it continues that
    ///   entry's value
    /// - a repeated `[ServerConfig]` header is folded into the section;
    ///   any other header, a duplicate key, an empty key or a line with no
    ///   delimiter is a format error
    pub fn parse(content: &str, source_desc: &str) -> Result<Self> {
        let mut entries: IndexMap<String, String> = IndexMap::new();
        // Key of the last entry and the indent width of its line.
        let mut current_key: Option<(String, usize)> = None;
        let mut pending_blank = 0usize;

        for (idx, raw) in content.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();

            if line.is_empty() {
                if current_key.is_some() {
                    pending_blank += 1;
                }
                continue;
            }
            if line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            let indent = raw.len() - raw.trim_start().len();
            if let Some((key, key_indent)) = &current_key {
                if indent > *key_indent {
                    let Some(value) = entries.get_mut(key) else {
                        continue;
                    };
                    for _ in 0..pending_blank {
                        value.push('\n');
                    }
                    value.push('\n');
                    value.push_str(line);
                    pending_blank = 0;
                    continue;
                }
            }
            pending_blank = 0;

            if let Some(name) = section_name(line) {
                if name != SECTION_NAME {
                    return Err(PzError::format(
                        source_desc,
                        line_no,
                        format!("unsupported section [{name}], only [{SECTION_NAME}] is allowed"),
                    ));
                }
                current_key = None;
                continue;
            }

            let Some((key, value)) = split_entry(line) else {
                return Err(PzError::format(
                    source_desc,
                    line_no,
                    format!("expected 'key=value', found '{line}'"),
                ));
            };
            if key.is_empty() {
                return Err(PzError::format(source_desc, line_no, "empty key"));
            }
            if entries.contains_key(key) {
                return Err(PzError::format(
                    source_desc,
                    line_no,
                    format!("duplicate key '{key}'"),
                ));
            }

            entries.insert(key.to_string(), value.to_string());
            current_key = Some((key.to_string(), indent));
        }

        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Insert or overwrite `key`. An existing key keeps its position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize to the on-disk format: marker line, one unpadded
    /// `key=value` line per entry, then a blank line closing the section.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(SECTION_MARKER.len() + 2 + self.entries.len() * 24);
        out.push_str(SECTION_MARKER);
        out.push('\n');
        for (key, value) in &self.entries {
            out.push_str(key);
            out.push('=');
            out.push_str(&value.replace('\n', "\n\t"));
            out.push('\n');
        }
        out.push('\n');
        out
    }

    /// Rewrite `path` entirely with [`ConfigStore::render`].
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render())?;
        info!(path = %path.display(), entries = self.entries.len(), "saved config");
        Ok(())
    }
}

fn section_name(line: &str) -> Option<&str> {
    line.strip_prefix('[')?.strip_suffix(']')
}

fn split_entry(line: &str) -> Option<(&str, &str)> {
    let pos = line.find(&['=', ':'][..])?;
    Some((line[..pos].trim(), line[pos + 1..].trim()))
}
