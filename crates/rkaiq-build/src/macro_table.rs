use std::{
    collections::{BTreeMap, HashSet},
    path::Path,
};

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    env::{ConfigAccessor, MACRO_TABLE_ENV},
    error::{Error, Result},
};

const BUILTIN_TABLE: &str = include_str!("../data/rkaiq_macros.toml");

lazy_static! {
    static ref MACRO_NAME_REGEX: Regex = Regex::new(r"^RKAIQ_HAVE_[A-Z0-9_]+$").unwrap();
    static ref BUILTIN: MacroTable =
        MacroTable::from_toml_str(BUILTIN_TABLE).expect("built-in macro table is invalid");
}

/// One switchable ISP algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlgoEntry {
    /// The `RKAIQ_HAVE_*` macro guarding the algorithm.
    #[serde(rename = "macro")]
    pub macro_name: String,
    /// Static library the algorithm is packaged in, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library: Option<String>,
    /// Sources compiled into `library`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub srcs: Vec<String>,
    /// Sources compiled into the shared engine when the algorithm is on.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub handler_srcs: Vec<String>,
}

/// What a single board turns on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoardEntry {
    #[serde(default)]
    pub macros: Vec<String>,
    /// Board specific sources for the shared engine.
    #[serde(default)]
    pub srcs: Vec<String>,
}

/// Maps boards to the algorithm macros they enable, along with the sources
/// and static libraries each algorithm brings in.
///
/// A table is plain data passed to the resolver; it is never changed while
/// resolving.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MacroTable {
    #[serde(default)]
    pub common_srcs: Vec<String>,
    #[serde(default)]
    pub algos: Vec<AlgoEntry>,
    #[serde(default)]
    pub boards: BTreeMap<String, BoardEntry>,
}

impl MacroTable {
    /// The table shipped with this crate.
    pub fn builtin() -> &'static MacroTable {
        &BUILTIN
    }

    /// Parses and validates a TOML table.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let table: MacroTable = toml::from_str(input)?;
        table.validate()?;

        Ok(table)
    }

    /// Reads a TOML table from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_toml_str(&contents)?;

        tracing::info!(
            path = %path.display(),
            algos = table.algos.len(),
            boards = table.boards.len(),
            "loaded rkaiq macro table"
        );

        Ok(table)
    }

    /// Loads the table named by `RKAIQ_MACRO_TABLE`, falling back to the
    /// built-in table when it is unset or empty.
    pub fn from_env(env: &dyn ConfigAccessor) -> Result<Self> {
        match env.getenv(MACRO_TABLE_ENV) {
            Some(path) if !path.is_empty() => Self::from_path(Path::new(&path)),
            _ => Ok(Self::builtin().clone()),
        }
    }

    /// Renders the table back to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks macro names, duplicate algorithms and board references.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for algo in &self.algos {
            if !MACRO_NAME_REGEX.is_match(&algo.macro_name) {
                return Err(Error::InvalidMacro(algo.macro_name.clone()));
            }

            if !seen.insert(algo.macro_name.as_str()) {
                return Err(Error::DuplicateMacro(algo.macro_name.clone()));
            }
        }

        for (board, entry) in &self.boards {
            if let Some(name) = entry.macros.iter().find(|m| !seen.contains(m.as_str())) {
                return Err(Error::UnknownMacro {
                    board: board.clone(),
                    macro_name: name.clone(),
                });
            }
        }

        Ok(())
    }

    /// The entry for `board`, if the table lists it.
    pub fn board(&self, board: &str) -> Option<&BoardEntry> {
        self.boards.get(board)
    }

    /// The algorithms enabled on `board`. Unknown boards enable nothing.
    pub fn macro_switch(&self, board: &str) -> MacroSet<'_> {
        let algos = match self.board(board) {
            Some(entry) => self
                .algos
                .iter()
                .filter(|algo| entry.macros.contains(&algo.macro_name))
                .collect(),
            None => vec![],
        };

        MacroSet { algos }
    }
}

/// The algorithms switched on for one board, in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroSet<'a> {
    algos: Vec<&'a AlgoEntry>,
}

impl<'a> MacroSet<'a> {
    pub fn macros(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.algos.iter().map(|algo| algo.macro_name.as_str())
    }

    pub fn contains(&self, macro_name: &str) -> bool {
        self.macros().any(|m| m == macro_name)
    }

    pub fn is_empty(&self) -> bool {
        self.algos.is_empty()
    }

    pub fn len(&self) -> usize {
        self.algos.len()
    }

    /// `-D<MACRO>=1` for each enabled algorithm.
    pub fn cflags(&self) -> Vec<String> {
        self.macros().map(|m| format!("-D{}=1", m)).collect()
    }

    /// Static libraries of the enabled algorithms, without repeats.
    pub fn static_libs(&self) -> Vec<String> {
        let mut libs: Vec<String> = vec![];

        for lib in self.algos.iter().filter_map(|algo| algo.library.as_ref()) {
            if !libs.contains(lib) {
                libs.push(lib.clone());
            }
        }

        libs
    }

    /// Shared engine sources of the enabled algorithms, without repeats.
    pub fn handler_srcs(&self) -> Vec<String> {
        let mut srcs = vec![];

        for algo in &self.algos {
            extend_unique(&mut srcs, &algo.handler_srcs);
        }

        srcs
    }

    /// Sources of the static library named `module_name`, gathered from every
    /// enabled algorithm packaged in it.
    pub fn static_lib_srcs(&self, module_name: &str) -> Vec<String> {
        let mut srcs = vec![];

        for algo in &self.algos {
            if algo.library.as_deref() == Some(module_name) {
                extend_unique(&mut srcs, &algo.srcs);
            }
        }

        srcs
    }
}

pub(crate) fn extend_unique(dest: &mut Vec<String>, items: &[String]) {
    for item in items {
        if !dest.contains(item) {
            dest.push(item.clone());
        }
    }
}
