//! Bulk merge of prefixed environment variables into the config file.
//!
//! Every variable named `<prefix><KEY>` becomes `<KEY>=<value>`. The
//! environment is passed in as pairs so the merge can be driven from tests
//! without touching the process environment.

use std::path::Path;

use pz_core::error::Result;
use tracing::{debug, info_span, warn};

use crate::ops::ConfigOps;
use crate::store::ConfigStore;

/// Prefix used by the CLI for bulk merges.
pub const DEFAULT_ENV_PREFIX: &str = "PZ_";

/// Result of a bulk merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkOutcome {
    /// At least one variable matched and the file was rewritten.
    Updated { applied: usize },
    /// Nothing matched; the file was left as loaded.
    Unchanged,
}

/// Apply every `prefix`-named variable to `store` and return how many were
/// applied.
///
/// A variable named exactly `prefix` has no key and is skipped. If two
/// variables strip to the same key the one iterated last wins.
pub fn merge_prefixed<I, K, V>(store: &mut ConfigStore, prefix: &str, vars: I) -> usize
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let mut applied = 0;
    for (name, value) in vars {
        let Some(key) = name.as_ref().strip_prefix(prefix) else {
            continue;
        };
        if key.is_empty() {
            continue;
        }
        debug!(key, "merging environment variable");
        store.set(key, value);
        applied += 1;
    }
    applied
}

/// Normalize and load `path`, merge `vars` into it and save only when
/// something matched.
pub fn bulk_update_from_env<I, K, V>(path: &Path, prefix: &str, vars: I) -> Result<BulkOutcome>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let span = info_span!("bulk_update", path = %path.display(), prefix);
    let _enter = span.enter();

    let mut store = ConfigOps::load(path)?;
    let applied = merge_prefixed(&mut store, prefix, vars);

    if applied == 0 {
        return Ok(BulkOutcome::Unchanged);
    }

    store.save(path)?;
    Ok(BulkOutcome::Updated { applied })
}

/// Snapshot of the process environment as UTF-8 pairs.
///
/// Variables whose name or value is not valid UTF-8 are skipped with a
/// warning.
pub fn process_env() -> Vec<(String, String)> {
    std::env::vars_os()
        .filter_map(|(name, value)| match (name.into_string(), value.into_string()) {
            (Ok(name), Ok(value)) => Some((name, value)),
            (Ok(name), Err(_)) => {
                warn!(name = %name, "skipping environment variable with non-UTF-8 value");
                None
            }
            (Err(name), _) => {
                warn!(name = ?name, "skipping environment variable with non-UTF-8 name");
                None
            }
        })
        .collect()
}
