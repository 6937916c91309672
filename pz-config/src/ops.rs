//! Command-level config operations.
//!
//! Each call is one self-contained edit of the file: normalize the header,
//! load, read or mutate, save if anything changed. No state is kept between
//! calls and the file is not locked.

use std::path::Path;

use pz_core::error::{PzError, Result};

use crate::env_merge::{self, BulkOutcome};
use crate::section::ensure_section_header;
use crate::store::ConfigStore;

/// Config file operations used by the CLI.
pub struct ConfigOps;

impl ConfigOps {
    /// Fail with [`PzError::FileNotFound`] unless `path` exists.
    pub fn check_config_file(path: &Path) -> Result<()> {
        if path.exists() {
            Ok(())
        } else {
            Err(PzError::FileNotFound {
                path: path.to_path_buf(),
            })
        }
    }

    /// Normalize the section header, then load the store.
    pub fn load(path: &Path) -> Result<ConfigStore> {
        ensure_section_header(path)?;
        ConfigStore::load(path)
    }

    /// Look up `key` in an existing config file.
    ///
    /// A missing key is `Ok(None)`, not an error.
    pub fn get(path: &Path, key: &str) -> Result<Option<String>> {
        Self::check_config_file(path)?;
        let store = Self::load(path)?;
        Ok(store.get(key).map(str::to_string))
    }

    /// Set `key` to `value` in an existing config file and save it.
    pub fn set(path: &Path, key: &str, value: &str) -> Result<()> {
        Self::check_config_file(path)?;
        let mut store = Self::load(path)?;
        store.set(key, value);
        store.save(path)
    }

    /// Merge `prefix`-named variables from `vars` into `path`, creating the
    /// file when it does not exist.
    pub fn bulk_from_env<I, K, V>(path: &Path, prefix: &str, vars: I) -> Result<BulkOutcome>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        env_merge::bulk_update_from_env(path, prefix, vars)
    }
}
