//! Scaffolding configuration

use crate::error::Result;
use camino::Utf8PathBuf;

/// Boilerplate repository cloned for every new project
pub const BOILERPLATE_REPO: &str = "https://github.com/verbjs/boilerplate";

/// Version-control client used for cloning
pub const DEFAULT_VCS: &str = "git";

/// Package manager used to install dependencies
pub const DEFAULT_PACKAGE_MANAGER: &str = "bun";

/// Directory holding version-control history in a fresh clone
pub const HISTORY_DIR: &str = ".git";

/// Project metadata file whose `name` gets rewritten
pub const METADATA_FILE: &str = "package.json";

/// Read-only settings handed to [`crate::ProjectCreator`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    /// Repository URL to clone
    pub boilerplate_repo: String,
    /// Version-control program
    pub vcs: String,
    /// Package manager program
    pub package_manager: String,
    /// Arguments passed to the package manager
    pub install_args: Vec<String>,
    /// Directory new projects are created in
    pub working_dir: Utf8PathBuf,
}

impl ScaffoldConfig {
    /// Default settings rooted at `working_dir`
    pub fn new(working_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            boilerplate_repo: BOILERPLATE_REPO.to_string(),
            vcs: DEFAULT_VCS.to_string(),
            package_manager: DEFAULT_PACKAGE_MANAGER.to_string(),
            install_args: vec!["install".to_string()],
            working_dir: working_dir.into(),
        }
    }

    /// Default settings rooted at the process's current directory
    pub fn from_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let cwd = Utf8PathBuf::try_from(cwd)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(Self::new(cwd))
    }

    /// Override the boilerplate repository
    pub fn with_boilerplate_repo(mut self, repo: impl Into<String>) -> Self {
        self.boilerplate_repo = repo.into();
        self
    }

    /// Override the package manager
    pub fn with_package_manager(mut self, package_manager: impl Into<String>) -> Self {
        self.package_manager = package_manager.into();
        self
    }

    /// Path a project named `name` will be created at
    pub fn target_dir(&self, name: &str) -> Utf8PathBuf {
        self.working_dir.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScaffoldConfig::new("/tmp/work");
        assert_eq!(config.boilerplate_repo, BOILERPLATE_REPO);
        assert_eq!(config.vcs, "git");
        assert_eq!(config.package_manager, "bun");
        assert_eq!(config.install_args, vec!["install".to_string()]);
        assert_eq!(config.target_dir("my-app"), Utf8PathBuf::from("/tmp/work/my-app"));
    }

    #[test]
    fn test_overrides() {
        let config = ScaffoldConfig::new("/tmp/work")
            .with_boilerplate_repo("https://example.com/fork.git")
            .with_package_manager("npm");
        assert_eq!(config.boilerplate_repo, "https://example.com/fork.git");
        assert_eq!(config.package_manager, "npm");
        assert_eq!(config.vcs, DEFAULT_VCS);
    }
}
