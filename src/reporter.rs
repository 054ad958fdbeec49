//! User-facing status reporting for Sprout.
//! Purely observational: prints stage transitions and the final next-steps
//! summary. No state, no return values, no side effects beyond process
//! output.

use crate::catalog::CatalogSource;
use crate::error::Error;
use crate::materializer::MaterializationResult;
use console::style;
use std::path::Path;

/// Announces which catalog source is being read.
pub fn loading_catalog(source: &CatalogSource) {
    println!("Loading template catalog from the {}", source);
}

/// Warns that the remote catalog was unusable and the bundled descriptor
/// file is used instead.
pub fn catalog_fallback(err: &Error) {
    eprintln!(
        "{} could not use the remote catalog: {}",
        style("warning:").yellow().bold(),
        err
    );
    eprintln!("Falling back to the bundled catalog.");
}

/// Announces the start of materialization.
pub fn creating_project(name: &str) {
    println!("Creating project '{}'...", name);
}

/// Confirms the destination directory was written.
pub fn project_created(path: &Path) {
    println!("{}", style(format!("Project created at '{}'.", path.display())).green());
}

/// Announces the dependency-installation subprocess.
pub fn installing_dependencies() {
    println!("Installing dependencies...");
}

/// Confirms the install subprocess exited successfully.
pub fn dependencies_installed() {
    println!("{}", style("Dependencies installed.").green());
}

/// Install failures are warnings: the scaffolded directory is usable.
pub fn install_failed(err: &Error) {
    eprintln!("{} {}", style("warning:").yellow().bold(), err);
    eprintln!("You can install dependencies later by running 'npm install' inside the project.");
}

/// Farewell for the exit selection; the run still counts as a success.
pub fn farewell() {
    println!("Goodbye!");
}

/// Final summary naming the project directory.
pub fn next_steps(project_name: &str, result: &MaterializationResult) {
    println!();
    println!(
        "{}",
        style(format!(
            "Project '{}' is ready at '{}'.",
            project_name,
            result.destination_path.display()
        ))
        .green()
        .bold()
    );
    println!("Next steps:");
    println!("  cd {}", project_name);
    println!("  npm run dev");
}
