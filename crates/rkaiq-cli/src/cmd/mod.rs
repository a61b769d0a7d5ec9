pub mod list_boards;
pub mod load;
pub mod resolve;
pub mod table;

use std::path::Path;

use anyhow::{Context, Result};
use rkaiq_build::{MacroTable, ProcessEnv, MACRO_TABLE_ENV};

/// The table at `path`, else the one named by `RKAIQ_MACRO_TABLE`, else the
/// built-in one. An empty `RKAIQ_MACRO_TABLE` counts as unset.
pub fn load_table(path: Option<&Path>) -> Result<MacroTable> {
    match path {
        Some(path) => MacroTable::from_path(path)
            .with_context(|| format!("loading macro table {}", path.display())),
        None => MacroTable::from_env(&ProcessEnv)
            .with_context(|| format!("loading macro table from {}", MACRO_TABLE_ENV)),
    }
}
