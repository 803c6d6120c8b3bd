//! Project name validation

use crate::error::{Error, Result};
use std::fmt;

/// Rules shown to the user when a name is rejected
pub const NAME_RULES: &[&str] = &[
    "Start with a letter or number",
    "Contain only letters, numbers, hyphens, and underscores",
    "Not contain spaces",
    "Not start with a hyphen",
];

/// Check whether `name` is usable as a project name.
///
/// The first character must be an ASCII letter or digit; the rest may also
/// contain `-` and `_`. Non-ASCII letters are rejected.
pub fn is_valid_project_name(name: &str) -> bool {
    if name.is_empty() || name.starts_with('-') || name.contains(' ') {
        return false;
    }

    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphanumeric() => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// A project name that has passed [`is_valid_project_name`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate and wrap a project name
    pub fn parse(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if !is_valid_project_name(&name) {
            return Err(Error::invalid_name(name));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
