use std::path::PathBuf;

/// Errors raised while loading macro tables or wiring module types.
///
/// Resolving a board never fails; these only cover the configuration around
/// it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The macro table file could not be read.
    #[error("failed to read macro table {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The macro table is not valid TOML for the expected layout.
    #[error("failed to parse macro table: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to render macro table: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// An algorithm macro does not look like `RKAIQ_HAVE_*`.
    #[error("invalid algorithm macro name: {0:?}")]
    InvalidMacro(String),

    /// The same algorithm macro was declared twice.
    #[error("algorithm macro declared more than once: {0}")]
    DuplicateMacro(String),

    /// A board enables a macro that no algorithm declares.
    #[error("board {board:?} enables unknown macro {macro_name}")]
    UnknownMacro { board: String, macro_name: String },

    /// A module type name was registered twice.
    #[error("module type already registered: {0}")]
    DuplicateModuleType(String),

    /// No factory is registered under this module type name.
    #[error("unknown module type: {0}")]
    UnknownModuleType(String),
}

pub type Result<T> = std::result::Result<T, Error>;
