//! Error types for create-verb-scaffold

use thiserror::Error;

/// Result type alias using create-verb-scaffold's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Project name fails the naming rules
    #[error("Invalid project name: \"{name}\"")]
    InvalidName { name: String },

    /// Target directory already present
    #[error("Directory \"{name}\" already exists")]
    DirectoryExists { name: String },

    /// Required external tool not installed
    #[error("{tool} is required but not found")]
    MissingDependency { tool: String },

    /// Boilerplate clone failed
    #[error("Failed to clone boilerplate repository: {message}")]
    CloneFailed { message: String },

    /// Dependency installation failed
    #[error("Failed to install dependencies: {message}")]
    InstallFailed { message: String },

    /// Metadata file could not be rewritten
    #[error("Invalid metadata file {path}: {message}")]
    InvalidMetadata { path: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of [`Error`], used for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidName,
    DirectoryExists,
    MissingDependency,
    CloneFailed,
    InstallFailed,
    Unexpected,
}

impl Error {
    /// Create an invalid name error
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName { name: name.into() }
    }

    /// Create a directory exists error
    pub fn directory_exists(name: impl Into<String>) -> Self {
        Self::DirectoryExists { name: name.into() }
    }

    /// Create a missing dependency error
    pub fn missing_dependency(tool: impl Into<String>) -> Self {
        Self::MissingDependency { tool: tool.into() }
    }

    /// Create a clone failed error
    pub fn clone_failed(message: impl Into<String>) -> Self {
        Self::CloneFailed {
            message: message.into(),
        }
    }

    /// Create an install failed error
    pub fn install_failed(message: impl Into<String>) -> Self {
        Self::InstallFailed {
            message: message.into(),
        }
    }

    /// Create an invalid metadata error
    pub fn invalid_metadata(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidMetadata {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidName { .. } => ErrorKind::InvalidName,
            Self::DirectoryExists { .. } => ErrorKind::DirectoryExists,
            Self::MissingDependency { .. } => ErrorKind::MissingDependency,
            Self::CloneFailed { .. } => ErrorKind::CloneFailed,
            Self::InstallFailed { .. } => ErrorKind::InstallFailed,
            Self::InvalidMetadata { .. } | Self::Io(_) => ErrorKind::Unexpected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(Error::invalid_name("-x").kind(), ErrorKind::InvalidName);
        assert_eq!(Error::clone_failed("boom").kind(), ErrorKind::CloneFailed);
        assert_eq!(Error::install_failed("boom").kind(), ErrorKind::InstallFailed);
        assert_eq!(
            Error::invalid_metadata("package.json", "not an object").kind(),
            ErrorKind::Unexpected
        );

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(Error::from(io).kind(), ErrorKind::Unexpected);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::directory_exists("my-app").to_string(),
            "Directory \"my-app\" already exists"
        );
        assert_eq!(
            Error::missing_dependency("git").to_string(),
            "git is required but not found"
        );
    }
}
