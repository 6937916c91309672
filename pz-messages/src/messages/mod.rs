//! Central registry for all user-facing message templates.
//!
//! - `cli` - Invocation and usage text
//! - `config` - Config file operations (lookup, bulk merge)
//!
//! Templates use `{variable}` syntax for runtime values, which are
//! substituted by the `MessageBuilder`.
//!
//! ```rust
//! use pz_messages::{msg, MESSAGES};
//!
//! let text = msg!(MESSAGES.config.file_not_found, path = "servertest.ini");
//! assert_eq!(text, "servertest.ini not found!");
//! ```

mod cli;
mod config;

pub use cli::{CliMessages, CLI_MESSAGES};
pub use config::{ConfigMessages, CONFIG_MESSAGES};

pub struct Messages {
    pub cli: CliMessages,
    pub config: ConfigMessages,
}

/// Global messages constant - main entry point for all message templates
pub const MESSAGES: Messages = Messages {
    cli: CLI_MESSAGES,
    config: CONFIG_MESSAGES,
};
