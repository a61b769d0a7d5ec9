use std::{collections::HashMap, sync::Arc};

/// The variable naming the target board.
pub const BOARD_ENV: &str = "TARGET_BOARD_PLATFORM";

/// Optional path to a TOML macro table that replaces the built-in one.
pub const MACRO_TABLE_ENV: &str = "RKAIQ_MACRO_TABLE";

/// Read access to the host's build configuration.
pub trait ConfigAccessor {
    /// Looks up a configuration variable.
    fn getenv(&self, key: &str) -> Option<String>;

    /// The target board identifier. An unset variable reads as `""`.
    fn board(&self) -> String {
        self.getenv(BOARD_ENV).unwrap_or_default()
    }
}

/// The live process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl ConfigAccessor for ProcessEnv {
    fn getenv(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// A frozen copy of build configuration variables.
#[derive(Debug, Clone, Default)]
pub struct BuildEnv {
    vars: Arc<HashMap<String, String>>,
}

impl BuildEnv {
    /// Snapshots the variables this crate reads from the process environment.
    pub fn capture() -> Self {
        let vars = std::env::vars();
        let vars = vars.filter(|(key, _)| key == BOARD_ENV || key == MACRO_TABLE_ENV);

        vars.collect()
    }

    /// Returns a copy with `key` set to `value`.
    pub fn with_var(&self, key: &str, value: &str) -> Self {
        let mut vars = (*self.vars).clone();
        vars.insert(key.to_owned(), value.to_owned());

        Self {
            vars: Arc::new(vars),
        }
    }
}

impl ConfigAccessor for BuildEnv {
    fn getenv(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<K, V> std::iter::FromIterator<(K, V)> for BuildEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let vars: HashMap<String, String> = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        Self {
            vars: Arc::new(vars),
        }
    }
}

impl ConfigAccessor for HashMap<String, String> {
    fn getenv(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_board_reads_empty() {
        let env = BuildEnv::default();

        assert_eq!(env.board(), "");
    }

    #[test]
    fn test_board_from_snapshot() {
        let env: BuildEnv = vec![(BOARD_ENV, "rk3588")].into_iter().collect();

        assert_eq!(env.board(), "rk3588");
        assert_eq!(env.getenv("OTHER"), None);
    }

    #[test]
    fn test_with_var_returns_a_copy() {
        let env: BuildEnv = vec![(BOARD_ENV, "rv1126")].into_iter().collect();
        let other = env.with_var(BOARD_ENV, "rk3562");

        assert_eq!(env.board(), "rv1126");
        assert_eq!(other.board(), "rk3562");
    }

    #[test]
    fn test_process_env_reads_live_variables() {
        std::env::set_var("RKAIQ_BUILD_TEST_PROCESS_ENV", "rk3588");

        assert_eq!(
            ProcessEnv.getenv("RKAIQ_BUILD_TEST_PROCESS_ENV").as_deref(),
            Some("rk3588")
        );
        assert_eq!(ProcessEnv.getenv("RKAIQ_BUILD_TEST_UNSET_VAR"), None);
    }

    #[test]
    fn test_hash_map_accessor() {
        let mut vars = HashMap::new();
        vars.insert(BOARD_ENV.to_string(), "rk356x".to_string());

        assert_eq!(vars.board(), "rk356x");
    }
}
