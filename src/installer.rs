//! Dependency installation for Sprout.
//! Detects whether a materialized project declares dependencies and, if so,
//! invokes the external package-installation process against it.

use crate::error::{Error, Result};
use crate::reporter;
use log::debug;
use std::path::Path;
use std::process::Command;

/// Dependency manifest whose presence is the sole install trigger
pub const MANIFEST_FILE: &str = "package.json";

const INSTALL_PROGRAM: &str = "npm";
const INSTALL_ARGUMENT: &str = "install";

/// Trait for the external package-installation process.
pub trait Installer {
    /// Installs dependencies inside the project directory, blocking until
    /// the process completes.
    fn install(&self, project_dir: &Path) -> Result<()>;
}

/// Installer that spawns `npm install` with the project directory as its
/// working directory.
pub struct NpmInstaller;

impl NpmInstaller {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NpmInstaller {
    fn default() -> Self {
        NpmInstaller::new()
    }
}

impl Installer for NpmInstaller {
    fn install(&self, project_dir: &Path) -> Result<()> {
        let status = Command::new(INSTALL_PROGRAM)
            .arg(INSTALL_ARGUMENT)
            .current_dir(project_dir)
            .status()
            .map_err(|e| {
                Error::DependencyInstallError(format!(
                    "could not run '{} {}': {}",
                    INSTALL_PROGRAM, INSTALL_ARGUMENT, e
                ))
            })?;

        if !status.success() {
            return Err(Error::DependencyInstallError(format!(
                "'{} {}' exited with {}",
                INSTALL_PROGRAM, INSTALL_ARGUMENT, status
            )));
        }

        Ok(())
    }
}

/// Checks for the dependency manifest and installs when it is present.
///
/// # Arguments
/// * `installer` - The external installation process
/// * `destination` - Root of the materialized project
///
/// # Returns
/// * `Ok(false)` - no manifest directly under the destination; no process
///   is spawned
/// * `Ok(true)` - manifest present and installation succeeded
///
/// # Errors
/// * `Error::DependencyInstallError` on spawn failure or non-zero exit; the
///   pipeline downgrades this to a warning because the scaffolded directory
///   is already usable
pub fn install_if_needed(installer: &dyn Installer, destination: &Path) -> Result<bool> {
    let manifest = destination.join(MANIFEST_FILE);
    if !manifest.exists() {
        debug!(
            "No {} in '{}', skipping dependency installation",
            MANIFEST_FILE,
            destination.display()
        );
        return Ok(false);
    }

    reporter::installing_dependencies();
    installer.install(destination)?;
    Ok(true)
}
