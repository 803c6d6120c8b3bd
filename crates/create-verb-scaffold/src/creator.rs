//! Project creation from the boilerplate repository

use crate::config::{ScaffoldConfig, HISTORY_DIR, METADATA_FILE};
use crate::error::{Error, Result};
use crate::metadata;
use crate::name::ProjectName;
use crate::process::{ProcessRunner, SystemRunner};
use camino::{Utf8Path, Utf8PathBuf};
use std::fmt;
use tracing::{debug, info, warn};

/// Stages of project creation, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Clone the boilerplate repository
    Clone,
    /// Remove version-control history from the clone
    StripHistory,
    /// Write the project name into the metadata file
    RewriteMetadata,
    /// Install dependencies with the package manager
    Install,
}

impl Step {
    /// Progress message for this step
    pub fn description(&self) -> &'static str {
        match self {
            Self::Clone => "Downloading boilerplate",
            Self::StripHistory => "Cleaning up",
            Self::RewriteMetadata => "Updating package.json",
            Self::Install => "Installing dependencies",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Receives progress notifications from [`ProjectCreator`]
///
/// All methods default to doing nothing.
pub trait ScaffoldObserver: Send + Sync {
    /// A step is about to run
    fn step_started(&self, _step: Step) {}

    /// A step completed successfully
    fn step_finished(&self, _step: Step) {}

    /// A step failed with `error`
    fn step_failed(&self, _step: Step, _error: &Error) {}

    /// A partially created project at `path` is being removed
    fn cleanup_started(&self, _path: &Utf8Path) {}
}

/// Observer that ignores every notification
#[derive(Debug, Default)]
pub struct NoopObserver;

impl ScaffoldObserver for NoopObserver {}

/// A successfully scaffolded project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedProject {
    pub name: ProjectName,
    pub path: Utf8PathBuf,
    /// Whether a metadata file was found and renamed
    pub metadata_updated: bool,
}

/// Creates new projects from the boilerplate repository
pub struct ProjectCreator<R = SystemRunner> {
    config: ScaffoldConfig,
    runner: R,
    observer: Box<dyn ScaffoldObserver>,
}

impl ProjectCreator<SystemRunner> {
    /// Creator that runs real git and package-manager processes
    pub fn new(config: ScaffoldConfig) -> Self {
        Self::with_runner(config, SystemRunner)
    }
}

impl<R: ProcessRunner> ProjectCreator<R> {
    /// Creator using a custom process runner
    pub fn with_runner(config: ScaffoldConfig, runner: R) -> Self {
        Self {
            config,
            runner,
            observer: Box::new(NoopObserver),
        }
    }

    /// Attach a progress observer
    pub fn with_observer(mut self, observer: impl ScaffoldObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    pub fn config(&self) -> &ScaffoldConfig {
        &self.config
    }

    /// Verify the version-control client is installed
    ///
    /// # Errors
    /// Returns [`Error::MissingDependency`] if `<vcs> --version` cannot be run
    /// or exits unsuccessfully.
    pub async fn check_prerequisites(&self) -> Result<()> {
        let vcs = self.config.vcs.as_str();
        match self.runner.run(vcs, &["--version"], None).await {
            Ok(output) if output.success => {
                debug!("{} is available", vcs);
                Ok(())
            }
            Ok(output) => {
                debug!("{} --version failed: {}", vcs, output.failure_reason());
                Err(Error::missing_dependency(vcs))
            }
            Err(e) => {
                debug!("{} --version could not run: {}", vcs, e);
                Err(Error::missing_dependency(vcs))
            }
        }
    }

    /// Create a new project named `name` under the configured working directory
    ///
    /// Clones the boilerplate, strips its history, renames it in
    /// `package.json`, and installs dependencies. If any of those steps fail,
    /// or the returned future is dropped before completing, the new directory
    /// is removed again.
    ///
    /// # Errors
    /// - [`Error::DirectoryExists`] if the target directory is already present
    /// - [`Error::CloneFailed`] if the clone does not succeed
    /// - [`Error::InstallFailed`] if dependency installation does not succeed
    /// - [`Error::InvalidMetadata`] or [`Error::Io`] for anything else
    pub async fn create(&self, name: &ProjectName) -> Result<CreatedProject> {
        let target = self.config.target_dir(name.as_str());

        if tokio::fs::try_exists(&target).await? {
            return Err(Error::directory_exists(name.as_str()));
        }

        info!("Creating project {} at {}", name, target);

        let guard = CleanupGuard::new(&target, &*self.observer);
        let metadata_updated = self.scaffold(name, &target).await?;
        guard.disarm();

        info!("Project {} created", name);
        Ok(CreatedProject {
            name: name.clone(),
            path: target,
            metadata_updated,
        })
    }

    async fn scaffold(&self, name: &ProjectName, target: &Utf8Path) -> Result<bool> {
        self.step(Step::Clone, self.clone_boilerplate(target)).await?;
        self.step(Step::StripHistory, strip_history(target)).await?;
        let metadata_updated = self
            .step(
                Step::RewriteMetadata,
                metadata::rewrite_name(&target.join(METADATA_FILE), name.as_str()),
            )
            .await?;
        self.step(Step::Install, self.install_dependencies(target)).await?;
        Ok(metadata_updated)
    }

    async fn step<T>(
        &self,
        step: Step,
        fut: impl std::future::Future<Output = Result<T>>,
    ) -> Result<T> {
        self.observer.step_started(step);
        match fut.await {
            Ok(value) => {
                self.observer.step_finished(step);
                Ok(value)
            }
            Err(e) => {
                self.observer.step_failed(step, &e);
                Err(e)
            }
        }
    }

    async fn clone_boilerplate(&self, target: &Utf8Path) -> Result<()> {
        let repo = self.config.boilerplate_repo.as_str();
        info!("Cloning {} -> {}", repo, target);

        let output = self
            .runner
            .run(&self.config.vcs, &["clone", repo, target.as_str()], None)
            .await
            .map_err(|e| Error::clone_failed(e.to_string()))?;

        if !output.success {
            return Err(Error::clone_failed(output.failure_reason()));
        }
        Ok(())
    }

    async fn install_dependencies(&self, target: &Utf8Path) -> Result<()> {
        let pm = self.config.package_manager.as_str();
        let args: Vec<&str> = self.config.install_args.iter().map(String::as_str).collect();
        info!("Running {} {} in {}", pm, args.join(" "), target);

        let output = self
            .runner
            .run(pm, &args, Some(target))
            .await
            .map_err(|e| Error::install_failed(e.to_string()))?;

        if !output.success {
            return Err(Error::install_failed(output.failure_reason()));
        }
        Ok(())
    }
}

/// Remove the clone's version-control directory, if present
async fn strip_history(target: &Utf8Path) -> Result<()> {
    let history = target.join(HISTORY_DIR);
    if tokio::fs::try_exists(&history).await? {
        debug!("Removing {}", history);
        tokio::fs::remove_dir_all(&history).await?;
    }
    Ok(())
}

/// Removes the target directory on drop unless disarmed.
///
/// Runs on error returns and when the creation future is cancelled. Removal
/// failures are logged and swallowed so the original error reaches the caller.
struct CleanupGuard<'a> {
    path: &'a Utf8Path,
    observer: &'a dyn ScaffoldObserver,
    armed: bool,
}

impl<'a> CleanupGuard<'a> {
    fn new(path: &'a Utf8Path, observer: &'a dyn ScaffoldObserver) -> Self {
        Self {
            path,
            observer,
            armed: true,
        }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for CleanupGuard<'_> {
    fn drop(&mut self) {
        if !self.armed || !self.path.exists() {
            return;
        }

        self.observer.cleanup_started(self.path);
        // Drop cannot await, and a cancelled future gets no later chance to
        // clean up, so the removal blocks this worker once on the failure path.
        match std::fs::remove_dir_all(self.path) {
            Ok(()) => info!("Removed partially created project at {}", self.path),
            Err(e) => warn!("Failed to clean up {}: {}", self.path, e),
        }
    }
}
