//! `create-verb <project-name>` command handler

use anyhow::Result;
use create_verb_scaffold::{
    CreatedProject, ErrorKind, ProjectCreator, ProjectName, ScaffoldConfig, NAME_RULES,
};
use std::process::ExitCode;

use crate::cli::Cli;
use crate::output;

/// Exit code used when the user interrupts creation
const INTERRUPTED: u8 = 130;

/// Validate the requested name and scaffold the project
pub async fn run(cli: Cli) -> Result<ExitCode> {
    let Some(raw_name) = cli.name else {
        output::error("Please provide a project name");
        eprintln!();
        output::hint("Usage: create-verb <project-name>");
        output::hint("Example: create-verb my-app");
        eprintln!();
        output::hint("For more help: create-verb --help");
        return Ok(ExitCode::FAILURE);
    };

    if !cli.rest.is_empty() {
        tracing::debug!("Ignoring extra arguments: {:?}", cli.rest);
    }

    let name = match ProjectName::parse(raw_name) {
        Ok(name) => name,
        Err(e) => {
            output::error(&e.to_string());
            eprintln!("Project name must:");
            for rule in NAME_RULES {
                output::hint(&format!("• {}", rule));
            }
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut config = ScaffoldConfig::from_current_dir()?;
    if let Some(repo) = cli.repo {
        config = config.with_boilerplate_repo(repo);
    }
    if let Some(pm) = cli.package_manager {
        config = config.with_package_manager(pm);
    }

    let creator = ProjectCreator::new(config).with_observer(output::SpinnerObserver::new());

    if let Err(e) = creator.check_prerequisites().await {
        tracing::debug!("Prerequisite check failed: {}", e);
        output::error("Git is required but not found");
        output::hint("Please install Git: https://git-scm.com/");
        return Ok(ExitCode::FAILURE);
    }

    println!("🚀 Creating Verb application \"{}\"...", name);
    println!();

    let result = tokio::select! {
        result = creator.create(&name) => result,
        _ = tokio::signal::ctrl_c() => {
            output::warning("Interrupted, project was not created");
            return Ok(ExitCode::from(INTERRUPTED));
        }
    };

    match result {
        Ok(project) => {
            print_summary(&project);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.kind() == ErrorKind::DirectoryExists => {
            output::error(&e.to_string());
            output::hint("Choose a different name or remove the existing directory");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            output::error(&format!("Failed to create project: {}", e));
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Print next steps after a successful creation
fn print_summary(project: &CreatedProject) {
    println!();
    output::success(&format!("Successfully created \"{}\"!", project.name));
    output::kv("Location", project.path.as_str());

    output::header("Next steps:");
    println!("  cd {}", project.name);
    println!("  bun run dev");

    output::header("Your app will be running at:");
    println!("  🌐 Frontend: http://localhost:3001");
    println!("  🔧 API Demo: http://localhost:3001/api-demo");

    output::header("Commands:");
    println!("  bun run dev    Start development server");
    println!("  bun run build  Build for production");
    println!("  bun run start  Start production server");

    output::header("Documentation:");
    println!("  📖 README.md in your project");
    println!("  🌟 GitHub: https://github.com/verbjs/verb");

    println!();
    println!("Happy coding! 🎉");
}
