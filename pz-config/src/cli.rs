//! Positional command line surface.
//!
//! ```text
//! pz-config <config_file> <key>            print the value, or nothing
//! pz-config <config_file> <key> <value>    set and save
//! pz-config --bulk-from-env <config_file>  merge PZ_* variables
//! ```
//!
//! clap only collects the raw arguments; its help and error output are
//! disabled so every malformed invocation prints the same usage text on
//! stdout and exits with status 1.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use pz_core::error::PzError;
use pz_core::{pz_error, pz_println};
use pz_messages::{msg, MESSAGES};

use crate::env_merge::{self, BulkOutcome, DEFAULT_ENV_PREFIX};
use crate::ops::ConfigOps;

pub const PROGRAM_NAME: &str = "pz-config";
pub const BULK_FLAG: &str = "--bulk-from-env";

#[derive(Parser, Debug)]
#[command(name = "pz-config")]
#[command(about = "Edit a Project Zomboid server config file")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    #[arg(num_args = 0.., allow_hyphen_values = true, trailing_var_arg = true)]
    pub args: Vec<String>,
}

/// A well-formed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Get { config_file: PathBuf, key: String },
    Set {
        config_file: PathBuf,
        key: String,
        value: String,
    },
    BulkFromEnv { config_file: PathBuf },
}

impl TryFrom<Args> for Invocation {
    type Error = PzError;

    fn try_from(args: Args) -> std::result::Result<Self, Self::Error> {
        let mut args = args.args.into_iter();
        let first = args.next().ok_or(PzError::Usage)?;
        let rest: Vec<String> = args.collect();

        if first == BULK_FLAG {
            return match <[String; 1]>::try_from(rest) {
                Ok([config_file]) => Ok(Invocation::BulkFromEnv {
                    config_file: PathBuf::from(config_file),
                }),
                Err(_) => Err(PzError::Usage),
            };
        }

        let config_file = PathBuf::from(first);
        let mut rest = rest.into_iter();
        match (rest.next(), rest.next(), rest.next()) {
            (Some(key), None, None) => Ok(Invocation::Get { config_file, key }),
            (Some(key), Some(value), None) => Ok(Invocation::Set {
                config_file,
                key,
                value,
            }),
            _ => Err(PzError::Usage),
        }
    }
}

impl Invocation {
    /// Parse the invocation from an argument list that includes the program
    /// name, mapping every clap or shape error to [`PzError::Usage`].
    pub fn from_args<I, T>(itr: I) -> std::result::Result<Self, PzError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let args = Args::try_parse_from(itr).map_err(|_| PzError::Usage)?;
        Invocation::try_from(args)
    }
}

pub fn print_usage() {
    pz_println!("{}", msg!(MESSAGES.cli.usage, prog = PROGRAM_NAME));
}

/// Run one invocation against the live process environment.
///
/// Expected failures (missing file in single-key mode) are reported here and
/// turned into an exit code; anything else is returned for `main` to report.
pub fn execute(invocation: Invocation) -> Result<ExitCode> {
    match invocation {
        Invocation::Get { config_file, key } => match ConfigOps::get(&config_file, &key) {
            Ok(Some(value)) => {
                pz_println!("{}", value);
                Ok(ExitCode::SUCCESS)
            }
            Ok(None) => Ok(ExitCode::SUCCESS),
            Err(e @ PzError::FileNotFound { .. }) => {
                pz_error!("{}", e);
                Ok(ExitCode::from(1))
            }
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!("Failed to read {}", config_file.display()))),
        },
        Invocation::Set {
            config_file,
            key,
            value,
        } => match ConfigOps::set(&config_file, &key, &value) {
            Ok(()) => Ok(ExitCode::SUCCESS),
            Err(e @ PzError::FileNotFound { .. }) => {
                pz_error!("{}", e);
                Ok(ExitCode::from(1))
            }
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!("Failed to update {}", config_file.display()))),
        },
        Invocation::BulkFromEnv { config_file } => {
            if let Err(e) = ConfigOps::check_config_file(&config_file) {
                pz_error!("{}", e);
            }

            let outcome = ConfigOps::bulk_from_env(
                &config_file,
                DEFAULT_ENV_PREFIX,
                env_merge::process_env(),
            )
            .with_context(|| format!("Failed to update {}", config_file.display()))?;

            let message = match outcome {
                BulkOutcome::Updated { .. } => msg!(
                    MESSAGES.config.bulk_updated,
                    path = config_file.display().to_string(),
                    prefix = DEFAULT_ENV_PREFIX
                ),
                BulkOutcome::Unchanged => msg!(
                    MESSAGES.config.bulk_nothing_to_update,
                    prefix = DEFAULT_ENV_PREFIX
                ),
            };
            pz_println!("{}", message);
            Ok(ExitCode::SUCCESS)
        }
    }
}
