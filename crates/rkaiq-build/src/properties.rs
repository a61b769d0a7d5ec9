use serde::Serialize;

use crate::macro_table::extend_unique;

/// Build inputs for one target scope of a module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PropertySet {
    /// Order matters: later flags take precedence.
    pub cflags: Vec<String>,
    pub srcs: Vec<String>,
    pub static_libs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl PropertySet {
    /// Appends every sequence of `other`; a set `enabled` replaces ours.
    pub fn append(&mut self, other: PropertySet) {
        self.cflags.extend(other.cflags);
        self.srcs.extend(other.srcs);
        self.static_libs.extend(other.static_libs);

        if other.enabled.is_some() {
            self.enabled = other.enabled;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cflags.is_empty()
            && self.srcs.is_empty()
            && self.static_libs.is_empty()
            && self.enabled.is_none()
    }

    /// Adds `srcs` that are not already listed.
    pub fn push_srcs(&mut self, srcs: &[String]) -> &mut Self {
        extend_unique(&mut self.srcs, srcs);
        self
    }
}

/// Where a [`PropertySet`] applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetScope {
    /// Every target.
    Common,
    /// Device builds.
    Android,
    /// Host builds.
    Host,
    /// Any target that is not Windows.
    NotWindows,
}

impl TargetScope {
    pub const ALL: [TargetScope; 4] = [
        TargetScope::Common,
        TargetScope::Android,
        TargetScope::Host,
        TargetScope::NotWindows,
    ];
}

impl std::fmt::Display for TargetScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TargetScope::Common => "common",
            TargetScope::Android => "target.android",
            TargetScope::Host => "target.host",
            TargetScope::NotWindows => "target.not_windows",
        };

        f.write_str(name)
    }
}

/// The properties of one module definition, as handed back to the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModuleProperties {
    pub common: PropertySet,
    pub android: PropertySet,
    pub host: PropertySet,
    pub not_windows: PropertySet,
}

impl ModuleProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scope(&self, scope: TargetScope) -> &PropertySet {
        match scope {
            TargetScope::Common => &self.common,
            TargetScope::Android => &self.android,
            TargetScope::Host => &self.host,
            TargetScope::NotWindows => &self.not_windows,
        }
    }

    pub fn scope_mut(&mut self, scope: TargetScope) -> &mut PropertySet {
        match scope {
            TargetScope::Common => &mut self.common,
            TargetScope::Android => &mut self.android,
            TargetScope::Host => &mut self.host,
            TargetScope::NotWindows => &mut self.not_windows,
        }
    }

    /// Merges `other` into `self`, scope by scope.
    pub fn append(&mut self, other: ModuleProperties) {
        self.common.append(other.common);
        self.android.append(other.android);
        self.host.append(other.host);
        self.not_windows.append(other.not_windows);
    }

    /// Non-empty scopes, in [`TargetScope::ALL`] order.
    pub fn scopes(&self) -> impl Iterator<Item = (TargetScope, &PropertySet)> {
        TargetScope::ALL
            .iter()
            .map(move |scope| (*scope, self.scope(*scope)))
            .filter(|(_, set)| !set.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.scopes().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_append_keeps_order() {
        let mut props = ModuleProperties::new();
        props.android.cflags = strings(&["-DA"]);

        let mut other = ModuleProperties::new();
        other.android.cflags = strings(&["-DB", "-DA"]);
        props.append(other);

        assert_eq!(props.android.cflags, ["-DA", "-DB", "-DA"]);
    }

    #[test]
    fn test_append_enabled_overrides_only_when_set() {
        let mut set = PropertySet {
            enabled: Some(true),
            ..Default::default()
        };

        set.append(PropertySet::default());
        assert_eq!(set.enabled, Some(true));

        set.append(PropertySet {
            enabled: Some(false),
            ..Default::default()
        });
        assert_eq!(set.enabled, Some(false));
    }

    #[test]
    fn test_push_srcs_skips_repeats() {
        let mut set = PropertySet::default();
        set.push_srcs(&strings(&["a.cpp", "b.cpp"]))
            .push_srcs(&strings(&["b.cpp", "c.cpp"]));

        assert_eq!(set.srcs, ["a.cpp", "b.cpp", "c.cpp"]);
    }

    #[test]
    fn test_scopes_skip_empty_sets() {
        let mut props = ModuleProperties::new();
        assert!(props.is_empty());

        props.scope_mut(TargetScope::NotWindows).cflags = strings(&["-fPIC"]);
        let scopes: Vec<_> = props.scopes().map(|(scope, _)| scope).collect();

        assert_eq!(scopes, [TargetScope::NotWindows]);
        assert_eq!(TargetScope::NotWindows.to_string(), "target.not_windows");
    }
}
