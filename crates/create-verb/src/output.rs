//! Terminal output utilities

use console::style;
use create_verb_scaffold::{Error, ScaffoldObserver, Step};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Print a warning message
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Print a header
pub fn header(msg: &str) {
    println!("\n{}", style(msg).bold().underlined());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Print an indented hint line to stderr
pub fn hint(msg: &str) {
    eprintln!("  {}", msg);
}

/// Create a spinner
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    pb.set_style(style);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Shows a spinner per creation step
#[derive(Default)]
pub struct SpinnerObserver {
    current: Mutex<Option<ProgressBar>>,
}

impl SpinnerObserver {
    pub fn new() -> Self {
        Self::default()
    }

    fn take(&self) -> Option<ProgressBar> {
        self.current.lock().ok().and_then(|mut pb| pb.take())
    }
}

impl ScaffoldObserver for SpinnerObserver {
    fn step_started(&self, step: Step) {
        let pb = spinner(&format!("{}...", step));
        if let Ok(mut current) = self.current.lock() {
            if let Some(previous) = current.replace(pb) {
                previous.finish_and_clear();
            }
        }
    }

    fn step_finished(&self, step: Step) {
        if let Some(pb) = self.take() {
            pb.finish_and_clear();
        }
        success(step.description());
    }

    fn step_failed(&self, _step: Step, _error: &Error) {
        if let Some(pb) = self.take() {
            pb.finish_and_clear();
        }
    }

    fn cleanup_started(&self, path: &camino::Utf8Path) {
        info(&format!("Cleaning up {}...", path));
    }
}
