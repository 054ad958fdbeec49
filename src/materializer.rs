//! Project materialization for Sprout.
//! Creates the destination directory and copies the chosen template's files
//! into it, preserving relative structure and contents byte for byte.

use crate::constants::TEMPLATES_DIR;
use crate::error::{Error, Result};
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Everything the materializer needs for one project, constructed once per
/// invocation after selection and immutable afterwards.
#[derive(Debug, Clone)]
pub struct ProjectRequest {
    /// Name of the project; also the destination directory name
    pub project_name: String,
    /// Identifier of the selected template
    pub template_identifier: String,
    /// Selected ref, when the template's descriptor listed any
    pub template_ref: Option<String>,
    /// Directory under which the project directory is created
    pub destination_root: PathBuf,
}

impl ProjectRequest {
    /// Resolves the directory the project will be created in.
    pub fn destination_path(&self) -> PathBuf {
        self.destination_root.join(&self.project_name)
    }

    /// Name of the template directory under the templates root: the chosen
    /// ref when one exists, the identifier otherwise.
    pub fn template_dir_name(&self) -> &str {
        self.template_ref.as_deref().unwrap_or(&self.template_identifier)
    }
}

/// Outcome of the materializer/installer pair, consumed by the reporter.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterializationResult {
    pub destination_path: PathBuf,
    pub succeeded: bool,
    pub dependencies_installed: bool,
}

/// Creates the destination directory and copies the template into it.
///
/// # Arguments
/// * `request` - The project to materialize
/// * `install_root` - Root directory the templates live under
///
/// # Returns
/// * `Result<MaterializationResult>` - Destination path with
///   `dependencies_installed` still unset; the caller flips it after a
///   successful install
///
/// # Errors
/// * `Error::DestinationExistsError` if the destination already exists;
///   nothing is modified in that case
/// * `Error::DirectoryCreateError` on permission or filesystem errors
/// * `Error::TemplateNotFoundError` if the template directory is missing
///   or is not a directory
/// * `Error::CopyFailed` if copying fails partway
///
/// A destination created by this call is removed again on a best-effort
/// basis when the template is missing or the copy fails; if that cleanup
/// itself fails, partially copied files remain behind.
pub fn materialize(
    request: &ProjectRequest,
    install_root: &Path,
) -> Result<MaterializationResult> {
    let destination = request.destination_path();
    create_destination(&destination)?;

    let template_dir =
        install_root.join(TEMPLATES_DIR).join(request.template_dir_name());
    if !template_dir.is_dir() {
        rollback(&destination);
        return Err(Error::TemplateNotFoundError {
            template_dir: template_dir.display().to_string(),
        });
    }

    debug!(
        "Copying template '{}' into '{}'",
        template_dir.display(),
        destination.display()
    );

    if let Err(err) = copy_tree(&template_dir, &destination) {
        rollback(&destination);
        return Err(err);
    }

    Ok(MaterializationResult {
        destination_path: destination,
        succeeded: true,
        dependencies_installed: false,
    })
}

/// Creates the destination as a new directory. The single creation call is
/// also the existence check; there is no check-then-create window.
fn create_destination(destination: &Path) -> Result<()> {
    match fs::create_dir(destination) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            Err(Error::DestinationExistsError {
                destination: destination.display().to_string(),
            })
        }
        Err(err) => Err(Error::DirectoryCreateError {
            destination: destination.display().to_string(),
            source: err,
        }),
    }
}

/// Recursively copies every file and subdirectory from `source` into
/// `destination`, preserving relative structure. Directories are visited
/// before their contents, so parents always exist when files copy.
fn copy_tree(source: &Path, destination: &Path) -> Result<()> {
    for dir_entry in WalkDir::new(source).min_depth(1) {
        let entry = dir_entry.map_err(|e| Error::CopyFailed(e.to_string()))?;
        let relative = entry.path().strip_prefix(source).map_err(|e| {
            Error::CopyFailed(format!("'{}': {}", entry.path().display(), e))
        })?;
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| {
                Error::CopyFailed(format!("'{}': {}", target.display(), e))
            })?;
        } else {
            fs::copy(entry.path(), &target).map(|_| ()).map_err(|e| {
                Error::CopyFailed(format!("'{}': {}", entry.path().display(), e))
            })?;
        }

        debug!("Copied '{}'", relative.display());
    }

    Ok(())
}

// Best-effort only; the original error always wins.
fn rollback(destination: &Path) {
    if let Err(err) = fs::remove_dir_all(destination) {
        warn!("Could not clean up '{}': {}", destination.display(), err);
    }
}
