//! Server config editing library.
//!
//! Edits a single-section INI file (`[ServerConfig]`) the way a game server
//! expects it: case-preserving keys, `key=value` lines with no padding, and
//! stable key order across edits.
//!
//! ## Main Features
//! - Section header normalization (`section`)
//! - Ordered, case-sensitive key/value store with load/save (`store`)
//! - Bulk merge of `PZ_*` environment variables (`env_merge`)
//! - Command-level operations used by the CLI (`ops`, `cli`)

pub mod cli;
pub mod env_merge;
pub mod ops;
pub mod section;
pub mod store;
