use anyhow::Result;
use rkaiq_build::{platform::BOARD_FLAGS, MacroTable};

pub fn run() -> Result<()> {
    let table = MacroTable::builtin();

    println!("Known boards:\n");
    println!("  {:<12} {:<20} ALGORITHMS", "BOARD", "ISP FLAG");
    println!("  {}", "-".repeat(44));

    for (board, flag) in BOARD_FLAGS {
        println!(
            "  {:<12} {:<20} {}",
            board,
            flag,
            table.macro_switch(board).len()
        );
    }

    println!();
    Ok(())
}
