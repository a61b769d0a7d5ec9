use std::path::Path;

use anyhow::Result;
use clap::ValueEnum;
use rkaiq_build::{resolve, utils::shelljoin, Resolution};

use super::load_table;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human readable sections
    Text,
    /// A JSON object
    Json,
    /// `RKAIQ_*=...` shell assignments
    Shell,
    /// Cargo build script directives
    Cargo,
}

pub fn run(board: &str, table: Option<&Path>, format: Format) -> Result<()> {
    let table = load_table(table)?;
    let resolution = resolve(board, &table);

    if resolution.is_empty() {
        tracing::info!(board, "board contributes no rkaiq configuration");
    }

    print!("{}", render(&resolution, format)?);
    Ok(())
}

pub fn render(resolution: &Resolution, format: Format) -> Result<String> {
    let out = match format {
        Format::Text => render_text(resolution),
        Format::Json => format!("{}\n", serde_json::to_string_pretty(resolution)?),
        Format::Shell => render_shell(resolution),
        Format::Cargo => {
            let mut out = String::new();
            for arg in resolution.cargo_args() {
                out.push_str(&arg);
                out.push('\n');
            }
            out
        }
    };

    Ok(out)
}

fn render_text(resolution: &Resolution) -> String {
    let mut out = format!("board: {}\n", resolution.board);

    let sections = [
        ("cflags", resolution.cflags()),
        ("srcs", resolution.srcs.clone()),
        ("static_libs", resolution.static_libs.clone()),
    ];

    for (name, items) in sections.iter() {
        out.push_str(&format!("{}:\n", name));
        for item in items {
            out.push_str(&format!("  {}\n", item));
        }
    }

    out
}

fn render_shell(resolution: &Resolution) -> String {
    let vars = [
        ("RKAIQ_BOARD", resolution.board.clone()),
        ("RKAIQ_CFLAGS", shelljoin(&resolution.cflags())),
        ("RKAIQ_SRCS", shelljoin(&resolution.srcs)),
        ("RKAIQ_STATIC_LIBS", shelljoin(&resolution.static_libs)),
    ];

    vars.iter()
        .map(|(key, value)| format!("{}={}\n", key, shell_words::quote(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Resolution {
        Resolution {
            board: "rk3588".into(),
            board_flags: vec!["-DISP_HW_V30".into()],
            macro_flags: vec!["-DRKAIQ_HAVE_AE_V1=1".into()],
            srcs: vec!["aiq_core/RkAiqCore.cpp".into()],
            static_libs: vec!["librkaiq_ae".into()],
        }
    }

    #[test]
    fn test_render_text() {
        let out = render(&sample(), Format::Text).unwrap();

        assert_eq!(
            out,
            "board: rk3588\n\
             cflags:\n  -DRKAIQ_HAVE_AE_V1=1\n  -DISP_HW_V30\n\
             srcs:\n  aiq_core/RkAiqCore.cpp\n\
             static_libs:\n  librkaiq_ae\n"
        );
    }

    #[test]
    fn test_render_text_empty_board() {
        let out = render(&Resolution::default(), Format::Text).unwrap();

        assert_eq!(out, "board: \ncflags:\nsrcs:\nstatic_libs:\n");
    }

    #[test]
    fn test_render_json() {
        let out = render(&sample(), Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["board"], "rk3588");
        assert_eq!(value["board_flags"][0], "-DISP_HW_V30");
        assert_eq!(value["static_libs"][0], "librkaiq_ae");
    }

    #[test]
    fn test_render_shell() {
        let out = render(&sample(), Format::Shell).unwrap();

        assert!(out.starts_with("RKAIQ_BOARD=rk3588\n"));
        assert!(out.contains("RKAIQ_SRCS=aiq_core/RkAiqCore.cpp\n"));
        assert!(out.contains("RKAIQ_STATIC_LIBS=librkaiq_ae\n"));
    }

    #[test]
    fn test_render_cargo() {
        let out = render(&sample(), Format::Cargo).unwrap();

        assert!(out.contains("cargo:rustc-cfg=isp_hw_v30\n"));
        assert!(out.ends_with("cargo:rustc-link-lib=static=rkaiq_ae\n"));
    }
}
