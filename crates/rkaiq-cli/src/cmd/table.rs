use std::path::Path;

use anyhow::{Context, Result};
use rkaiq_build::{platform::is_known_board, MacroTable};

pub fn run_check(path: &Path) -> Result<()> {
    let table = MacroTable::from_path(path)
        .with_context(|| format!("checking macro table {}", path.display()))?;

    for board in table.boards.keys() {
        if !is_known_board(board) {
            tracing::warn!(board = %board, "board has no ISP hardware flag");
        }
    }

    println!(
        "{}: {} algorithms, {} boards",
        path.display(),
        table.algos.len(),
        table.boards.len()
    );

    Ok(())
}

pub fn run_dump() -> Result<()> {
    let rendered = MacroTable::builtin()
        .to_toml_string()
        .context("rendering built-in macro table")?;

    print!("{}", rendered);
    Ok(())
}
