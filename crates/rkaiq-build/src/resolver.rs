use serde::Serialize;

use crate::{
    macro_table::{extend_unique, MacroTable},
    platform::board_flags,
};

/// Everything a board contributes to the rkaiq build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub board: String,
    /// `-DISP_HW_*` flags from the board table.
    pub board_flags: Vec<String>,
    /// `-DRKAIQ_HAVE_*=1` flags from the macro table.
    pub macro_flags: Vec<String>,
    /// Sources of the shared engine library.
    pub srcs: Vec<String>,
    /// Algorithm static libraries the shared engine links.
    pub static_libs: Vec<String>,
}

impl Resolution {
    /// Macro flags followed by board flags.
    pub fn cflags(&self) -> Vec<String> {
        let mut cflags = self.macro_flags.clone();
        cflags.extend(self.board_flags.iter().cloned());
        cflags
    }

    /// Whether the board produced anything at all.
    pub fn is_empty(&self) -> bool {
        self.board_flags.is_empty()
            && self.macro_flags.is_empty()
            && self.srcs.is_empty()
            && self.static_libs.is_empty()
    }
}

/// Resolves flags, sources and static libraries for `board`.
///
/// Unknown boards resolve to an empty [`Resolution`]. Neither `board` nor
/// `table` is modified.
pub fn resolve(board: &str, table: &MacroTable) -> Resolution {
    let macros = table.macro_switch(board);

    let resolution = Resolution {
        board: board.to_owned(),
        board_flags: board_flags(board),
        macro_flags: macros.cflags(),
        srcs: shared_srcs(board, table),
        static_libs: macros.static_libs(),
    };

    if resolution.is_empty() {
        tracing::debug!(board, "no rkaiq configuration for board");
    } else {
        tracing::debug!(
            board,
            cflags = resolution.board_flags.len() + resolution.macro_flags.len(),
            srcs = resolution.srcs.len(),
            static_libs = resolution.static_libs.len(),
            "resolved rkaiq configuration"
        );
    }

    resolution
}

/// Compiler flags for the defaults module: macro flags, then board flags.
pub fn defaults_cflags(board: &str, table: &MacroTable) -> Vec<String> {
    let mut cflags = table.macro_switch(board).cflags();
    cflags.extend(board_flags(board));
    cflags
}

/// Shared engine sources: common sources, the board's own sources, then the
/// handlers of every enabled algorithm.
pub fn shared_srcs(board: &str, table: &MacroTable) -> Vec<String> {
    let entry = match table.board(board) {
        Some(entry) => entry,
        None => return vec![],
    };

    let mut srcs = vec![];
    extend_unique(&mut srcs, &table.common_srcs);
    extend_unique(&mut srcs, &entry.srcs);
    extend_unique(&mut srcs, &table.macro_switch(board).handler_srcs());

    srcs
}

/// Sources of the static library module `module_name` on `board`.
pub fn static_lib_srcs(module_name: &str, board: &str, table: &MacroTable) -> Vec<String> {
    table.macro_switch(board).static_lib_srcs(module_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARDS: [(&str, &str); 5] = [
        ("rk3588", "-DISP_HW_V30"),
        ("rv1126", "-DISP_HW_V20"),
        ("rk356x", "-DISP_HW_V21"),
        ("rv1106", "-DISP_HW_V32"),
        ("rk3562", "-DISP_HW_V32_LITE"),
    ];

    #[test]
    fn test_board_flag_per_known_board() {
        let table = MacroTable::builtin();

        for (board, flag) in BOARDS.iter() {
            let resolution = resolve(board, table);

            assert_eq!(resolution.board_flags, vec![flag.to_string()]);
            assert_eq!(resolution.cflags().last(), Some(&flag.to_string()));
        }
    }

    #[test]
    fn test_unknown_board_resolves_empty() {
        let table = MacroTable::builtin();

        for board in ["", "unknown_board"].iter() {
            let resolution = resolve(board, table);

            assert!(resolution.is_empty(), "{:?}", resolution);
            assert!(resolution.cflags().is_empty());
        }
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let table = MacroTable::builtin();
        let before = table.clone();

        let first = resolve("rk3588", table);
        let second = resolve("rk3588", table);

        assert_eq!(first, second);
        assert_eq!(first.cflags(), second.cflags());
        assert_eq!(table, &before);
    }

    #[test]
    fn test_rk3588_contents() {
        let resolution = resolve("rk3588", MacroTable::builtin());

        assert_eq!(resolution.macro_flags.first().unwrap(), "-DRKAIQ_HAVE_AE_V1=1");
        assert!(resolution
            .macro_flags
            .contains(&"-DRKAIQ_HAVE_MULTIISP=1".to_string()));
        assert!(!resolution
            .macro_flags
            .contains(&"-DRKAIQ_HAVE_SHARP_V33=1".to_string()));
        assert!(resolution.srcs.contains(&"hwi/isp3x/CamHwIsp3x.cpp".to_string()));
        assert_eq!(resolution.srcs.first().unwrap(), "aiq_core/RkAiqCore.cpp");
        assert!(resolution.static_libs.contains(&"librkaiq_acac".to_string()));
    }

    #[test]
    fn test_lite_board_uses_lite_algorithms() {
        let resolution = resolve("rk3562", MacroTable::builtin());

        assert!(resolution
            .macro_flags
            .contains(&"-DRKAIQ_HAVE_SHARP_V33_LITE=1".to_string()));
        assert!(!resolution
            .macro_flags
            .contains(&"-DRKAIQ_HAVE_SHARP_V33=1".to_string()));
    }

    #[test]
    fn test_defaults_cflags_order() {
        let table = MacroTable::builtin();
        let resolution = resolve("rv1106", table);

        assert_eq!(defaults_cflags("rv1106", table), resolution.cflags());
        assert_eq!(
            defaults_cflags("rv1106", table).last().unwrap(),
            "-DISP_HW_V32"
        );
    }

    #[test]
    fn test_static_lib_srcs() {
        let table = MacroTable::builtin();

        assert_eq!(
            static_lib_srcs("librkaiq_accm", "rk3588", table),
            [
                "algos/accm/rk_aiq_algo_accm_itf.cpp",
                "algos/accm/rk_aiq_accm_algo_com.cpp",
                "algos/accm/rk_aiq_accm_algo_v1.cpp"
            ]
        );
        assert_eq!(
            static_lib_srcs("librkaiq_accm", "rv1106", table),
            [
                "algos/accm/rk_aiq_algo_accm_itf.cpp",
                "algos/accm/rk_aiq_accm_algo_com.cpp",
                "algos/accm/rk_aiq_accm_algo_v2.cpp"
            ]
        );
        assert!(static_lib_srcs("librkaiq_accm", "unknown_board", table).is_empty());
        assert!(static_lib_srcs("librkaiq_nope", "rk3588", table).is_empty());
    }

    #[test]
    fn test_board_only_in_macro_table() {
        let table =
            MacroTable::from_toml_str("[boards.rk3399]\nsrcs = [\"hwi/isp1/CamHwIsp1.cpp\"]\n")
                .unwrap();
        let resolution = resolve("rk3399", &table);

        assert!(resolution.board_flags.is_empty());
        assert_eq!(resolution.srcs, ["hwi/isp1/CamHwIsp1.cpp"]);
    }
}
