//! Command-line driver for [`hashgoat_core`].
//!
//! Parses flags, picks bulk (`--sync`) or streaming mode, and reports the
//! outcome on stdout. Logs and the progress spinner go to stderr.

pub mod cli;
pub mod error;
pub mod logging;
pub mod report;

pub use cli::Args;
pub use error::Error;
