//! Sprout is a starter-kit project generator.
//! Given a project name and a selected template it creates a directory,
//! copies the template's files into it, and optionally installs
//! dependencies through an external package manager.

/// Template catalog loading and validation
/// Supports a local descriptor file and a remote descriptor endpoint
pub mod catalog;

/// Command-line interface module for the Sprout application
pub mod cli;

/// Common constants shared across modules
pub mod constants;

/// The `create` subcommand pipeline
/// Combines all components to scaffold the final project
pub mod create;

/// Error types and handling for the Sprout application
pub mod error;

/// Dependency-manifest detection and the external install process
pub mod installer;

/// Destination creation and recursive template copying
pub mod materializer;

/// User-facing status lines and the next-steps summary
pub mod reporter;

/// Template selection and user interaction handling
pub mod selector;
