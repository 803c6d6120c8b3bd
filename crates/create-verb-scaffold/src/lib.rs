//! # create-verb-scaffold
//!
//! Scaffolding library behind the `create-verb` CLI:
//! - Project name validation
//! - Cloning the Verb boilerplate into a fresh directory
//! - Renaming the project in `package.json`
//! - Installing dependencies, with cleanup on failure
//!
//! # Examples
//!
//! ```no_run
//! use create_verb_scaffold::{ProjectCreator, ProjectName, ScaffoldConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let name = ProjectName::parse("my-app")?;
//! let creator = ProjectCreator::new(ScaffoldConfig::from_current_dir()?);
//!
//! creator.check_prerequisites().await?;
//! let project = creator.create(&name).await?;
//! println!("Created {}", project.path);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod creator;
pub mod error;
pub mod metadata;
pub mod name;
pub mod process;

pub use config::ScaffoldConfig;
pub use creator::{CreatedProject, NoopObserver, ProjectCreator, ScaffoldObserver, Step};
pub use error::{Error, ErrorKind, Result};
pub use name::{is_valid_project_name, ProjectName, NAME_RULES};
pub use process::{CommandOutput, ProcessRunner, SystemRunner};
