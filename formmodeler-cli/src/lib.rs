//! FormModeler command-line front end.
//!
//! Builds a field registry from the layered configuration and answers
//! questions about it, printing JSON:
//!
//! - `formmodeler types` - every registered field kind
//! - `formmodeler field <CODE>` - the default field of a kind
//! - `formmodeler resolve <TYPE> [--list]` - the kind picked for a value type
//! - `formmodeler compatible-types <TYPE>` - basic kinds able to edit a type
//! - `formmodeler compatible <CODE> <TYPE> [--list] [--standalone]` - kinds a field can switch to
//! - `formmodeler create <TYPE> [--code CODE] [--list]` - build a field
//!
//! Lookups that find nothing print `null`.

pub mod cli;
pub mod commands;
pub mod error;

pub use cli::{Cli, Commands};
pub use commands::{execute, run};
pub use error::CliError;
