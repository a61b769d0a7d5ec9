/// A static library that Cargo can link.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct StaticLibrary {
    pub name: String,
}

impl From<&str> for StaticLibrary {
    fn from(s: &str) -> Self {
        Self {
            name: sanitize_library_name(s).to_string(),
        }
    }
}

// `librkaiq_ae.a` links as `rkaiq_ae`
fn sanitize_library_name(name: &str) -> &str {
    let name = name.trim_end_matches(".a");

    match name.strip_prefix("lib") {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => name,
    }
}

impl std::fmt::Display for StaticLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "static={}", self.name)
    }
}
