//! CLI commands

pub mod clean;
pub mod init;
pub mod like;
pub mod list;
pub mod new;
pub mod query;
pub mod show;
pub mod stats;
pub mod validate;

use anyhow::Result;
use serde::Serialize;

/// Print a value as pretty JSON on stdout
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
