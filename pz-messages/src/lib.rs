//! pz-messages
//!
//! Centralized user-facing text for the pz-config CLI.
//! Provides the message templates and a small builder that fills in
//! `{variable}` placeholders.

pub mod builder;
pub mod macros;
pub mod messages;

pub use messages::MESSAGES;
