//! Sprout's main application entry point and orchestration logic.
//! Handles command-line argument parsing and wires the interactive prompt
//! and package-installation collaborators into the create pipeline.

use sprout::{
    cli::{get_args, Args, Command},
    constants::HOME_ENV_VAR,
    error::{default_error_handler, Result},
    installer::NpmInstaller,
    selector::DialoguerPrompter,
};
use std::path::{Path, PathBuf};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Resolves the directory the tool is installed under: the SPROUT_HOME
/// environment variable when set, otherwise the executable's directory.
/// Templates and the bundled catalog live beneath it.
fn install_root() -> PathBuf {
    if let Ok(home) = std::env::var(HOME_ENV_VAR) {
        return PathBuf::from(home);
    }

    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the install root and the destination root
/// 2. Wires the dialoguer prompter and the npm installer
/// 3. Hands off to the create pipeline
fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Create(cmd) => {
            let install_root = install_root();
            let destination_root = std::env::current_dir()?;
            let prompter = DialoguerPrompter::new();
            let installer = NpmInstaller::new();

            cmd.execute(&install_root, &destination_root, &prompter, &installer)?;
            Ok(())
        }
    }
}
