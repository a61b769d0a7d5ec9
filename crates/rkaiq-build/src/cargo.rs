//! Cargo build script integration.
//!
//! ```no_run
//! // In your crate's build.rs
//! pub fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let resolution = rkaiq_build::activate()?;
//!
//!     if resolution.board_flags.is_empty() {
//!         println!("cargo:warning=building without an ISP hardware flag");
//!     }
//!
//!     Ok(())
//! }
//!
//! // In your crate's lib.rs
//! pub fn has_isp32() -> bool {
//!     cfg!(isp_hw_v32)
//! }
//! ```

mod library;

pub use library::StaticLibrary;

use crate::{
    env::{BuildEnv, ConfigAccessor, BOARD_ENV, MACRO_TABLE_ENV},
    error::Result,
    macro_table::MacroTable,
    resolver::{resolve, Resolution},
};

/// Resolves the board named by `TARGET_BOARD_PLATFORM` and prints the Cargo
/// directives for it.
pub fn activate() -> Result<Resolution> {
    activate_with(&BuildEnv::capture())
}

/// Like [`activate`], reading configuration from `env`.
pub fn activate_with(env: &dyn ConfigAccessor) -> Result<Resolution> {
    let table = MacroTable::from_env(env)?;
    let resolution = resolve(&env.board(), &table);

    print_cargo_rerun_if_changed();
    resolution.print_cargo_args();

    Ok(resolution)
}

/// Prints directives for re-runs (i.e. `cargo:rerun-if-env-changed=...`)
pub fn print_cargo_rerun_if_changed() {
    println!("cargo:rerun-if-env-changed={}", BOARD_ENV);
    println!("cargo:rerun-if-env-changed={}", MACRO_TABLE_ENV);
}

/// Turns a `-D` flag into a `rustc-cfg` name (`-DISP_HW_V30` becomes
/// `isp_hw_v30`). Anything that is not a plain define yields `None`.
pub fn cfg_name(flag: &str) -> Option<String> {
    let define = flag.strip_prefix("-D")?;
    let name = define.split('=').next().unwrap_or_default();

    let valid = !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid {
        Some(name.to_ascii_lowercase())
    } else {
        None
    }
}

impl Resolution {
    /// The Cargo directives for this resolution.
    pub fn cargo_args(&self) -> Vec<String> {
        let mut result = vec![];

        for flag in self.cflags() {
            if let Some(name) = cfg_name(&flag) {
                result.push(format!("cargo:rustc-check-cfg=cfg({})", name));
                result.push(format!("cargo:rustc-cfg={}", name));
            }
        }

        for lib in &self.static_libs {
            result.push(format!(
                "cargo:rustc-link-lib={}",
                StaticLibrary::from(lib.as_str())
            ));
        }

        result
    }

    /// Prints [`Resolution::cargo_args`].
    pub fn print_cargo_args(&self) {
        for arg in self.cargo_args() {
            println!("{}", arg);
        }
    }
}
