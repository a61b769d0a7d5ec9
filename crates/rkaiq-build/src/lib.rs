//! # `rkaiq-build`
//!
//! Board specific build configuration for the rkaiq camera engine.
//!
//! The target board is read from `TARGET_BOARD_PLATFORM`. For a known board
//! this crate selects:
//!
//! - the ISP hardware flag (`-DISP_HW_V20`, `-DISP_HW_V30`, ...)
//! - the `RKAIQ_HAVE_*` algorithm macros enabled on that board
//! - the engine sources and algorithm static libraries those macros imply
//!
//! Unknown or unset boards are not an error; they simply contribute nothing.
//!
//! ## Usage
//!
//! ```no_run
//! use rkaiq_build::{resolve, MacroTable};
//!
//! let resolution = resolve("rk3588", MacroTable::builtin());
//! assert_eq!(resolution.board_flags, ["-DISP_HW_V30"]);
//! ```
//!
//! Build systems that work in terms of module types call
//! [`register_module_types`] once and then load modules through the
//! [`ModuleTypeRegistry`]. Cargo build scripts call [`activate`].

mod cargo;
mod env;
mod error;
pub mod hooks;
mod macro_table;
pub mod platform;
mod properties;
mod resolver;
pub mod utils;

pub use cargo::{activate, activate_with, cfg_name, print_cargo_rerun_if_changed, StaticLibrary};
pub use env::{BuildEnv, ConfigAccessor, ProcessEnv, BOARD_ENV, MACRO_TABLE_ENV};
pub use error::{Error, Result};
pub use hooks::{register_module_types, LoadHookContext, Module, ModuleKind, ModuleTypeRegistry};
pub use macro_table::{AlgoEntry, BoardEntry, MacroSet, MacroTable};
pub use platform::board_flags;
pub use properties::{ModuleProperties, PropertySet, TargetScope};
pub use resolver::{defaults_cflags, resolve, shared_srcs, static_lib_srcs, Resolution};
