//! Error handling for the Sprout application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for Sprout operations.
///
/// This enum represents all possible errors that can occur while creating
/// a project. It implements the standard Error trait through thiserror's
/// derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The catalog document could not be read or fetched
    #[error("Catalog unavailable: {0}.")]
    CatalogUnavailable(String),

    /// The catalog document was read but its shape is invalid
    #[error("Catalog malformed: {0}.")]
    CatalogMalformed(String),

    /// The destination directory already exists; nothing is overwritten
    #[error("Directory '{destination}' already exists.")]
    DestinationExistsError { destination: String },

    /// The destination directory could not be created
    #[error("Could not create directory '{destination}': {source}.")]
    DirectoryCreateError { destination: String, source: io::Error },

    /// The selected template has no directory under the templates root
    #[error("Template not found: '{template_dir}'.")]
    TemplateNotFoundError { template_dir: String },

    /// Copying the template into the destination failed partway
    #[error("Copy failed: {0}.")]
    CopyFailed(String),

    /// The dependency installation subprocess failed or exited non-zero
    #[error("Dependency installation failed: {0}.")]
    DependencyInstallError(String),

    /// A template named on the command line is not in the catalog
    #[error("Template '{name}' is not in the catalog.")]
    UnknownTemplateError { name: String },

    /// Represents failures at the interactive prompt boundary
    #[error("Prompt error: {0}.")]
    PromptError(String),
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
