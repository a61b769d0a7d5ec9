/// ISP hardware flag for each supported board.
///
/// Every entry is matched on its own; nothing stops two entries from naming
/// the same board, in which case both flags apply.
pub const BOARD_FLAGS: &[(&str, &str)] = &[
    ("rv1126", "-DISP_HW_V20"),
    ("rk356x", "-DISP_HW_V21"),
    ("rk3588", "-DISP_HW_V30"),
    ("rv1106", "-DISP_HW_V32"),
    ("rk3562", "-DISP_HW_V32_LITE"),
];

/// Compiler flags for `board`, looked up in [`BOARD_FLAGS`].
pub fn board_flags(board: &str) -> Vec<String> {
    flags_from_table(BOARD_FLAGS, board)
}

/// Appends the flag of every entry in `table` whose board equals `board`.
pub fn flags_from_table(table: &[(&str, &str)], board: &str) -> Vec<String> {
    let mut cflags = vec![];

    for (name, flag) in table {
        if *name == board {
            cflags.push(flag.to_string());
        }
    }

    cflags
}

/// Boards with a known ISP flag, in table order.
pub fn known_boards() -> impl Iterator<Item = &'static str> {
    BOARD_FLAGS.iter().map(|(board, _)| *board)
}

/// Whether `board` has an ISP flag.
pub fn is_known_board(board: &str) -> bool {
    known_boards().any(|b| b == board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_board_flags() {
        assert_eq!(board_flags("rk3588"), vec!["-DISP_HW_V30"]);
        assert_eq!(board_flags("rv1126"), vec!["-DISP_HW_V20"]);
        assert_eq!(board_flags("rk356x"), vec!["-DISP_HW_V21"]);
        assert_eq!(board_flags("rv1106"), vec!["-DISP_HW_V32"]);
        assert_eq!(board_flags("rk3562"), vec!["-DISP_HW_V32_LITE"]);
    }

    #[test]
    fn test_unknown_board_is_empty() {
        assert!(board_flags("").is_empty());
        assert!(board_flags("unknown_board").is_empty());
        assert!(board_flags("RK3588").is_empty());
        assert!(board_flags(" rk3588").is_empty());
    }

    #[test]
    fn test_overlapping_entries_append() {
        let table = [("rk3588", "-DISP_HW_V30"), ("rk3588", "-DRK3588_DUAL")];

        assert_eq!(
            flags_from_table(&table, "rk3588"),
            vec!["-DISP_HW_V30", "-DRK3588_DUAL"]
        );
    }

    #[test]
    fn test_known_boards() {
        let boards: Vec<_> = known_boards().collect();

        assert_eq!(boards, ["rv1126", "rk356x", "rk3588", "rv1106", "rk3562"]);
        assert!(is_known_board("rv1106"));
        assert!(!is_known_board("rk3399"));
    }
}
