//! Version information for the create-verb CLI

/// Semantic version of this build
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version line printed by `--version`
pub fn display() -> String {
    format!("create-verb v{}", VERSION)
}
