//! The `create` subcommand: one linear pipeline from catalog load to the
//! final report. Stages run strictly in sequence and the selector's exit
//! choice short-circuits everything after it.

use crate::catalog::{self, CatalogSource};
use crate::error::Result;
use crate::installer::{self, Installer};
use crate::materializer::{self, MaterializationResult, ProjectRequest};
use crate::reporter;
use crate::selector::{self, Prompter, Selection};
use std::path::Path;

/// Arguments of the `create` subcommand.
#[derive(clap::Args, Debug)]
pub struct CreateCommand {
    /// Name of the project directory to create
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: String,

    /// Template identifier to use, skipping the selection prompt
    #[arg(short, long, value_name = "NAME")]
    pub template: Option<String>,

    /// Catalog source override: a descriptor file path or an HTTP(S) URL
    #[arg(long, value_name = "SOURCE")]
    pub catalog: Option<String>,
}

/// Outcome of one `create` invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    /// A project directory was materialized
    Created(MaterializationResult),
    /// The operator chose the exit entry; nothing was created
    Exited,
}

impl CreateCommand {
    /// Runs the pipeline: catalog load, selection, materialization,
    /// optional dependency installation, report.
    ///
    /// The prompt component and the package-installation process are
    /// injected so the pipeline also runs without a terminal or a
    /// subprocess.
    ///
    /// # Arguments
    /// * `install_root` - Directory the templates and bundled catalog live
    ///   under
    /// * `destination_root` - Directory the project directory is created in
    /// * `prompter` - Interactive single-choice prompt component
    /// * `installer` - External package-installation process
    pub fn execute(
        &self,
        install_root: &Path,
        destination_root: &Path,
        prompter: &dyn Prompter,
        installer: &dyn Installer,
    ) -> Result<CreateOutcome> {
        // An explicit --catalog source is authoritative: no remote fallback.
        let catalog = match &self.catalog {
            Some(source) => catalog::load_catalog(&CatalogSource::from_string(source))?,
            None => catalog::load_default(install_root)?,
        };

        let selection = match &self.template {
            Some(name) => selector::resolve(&catalog, name, prompter)?,
            None => selector::select(&catalog, prompter)?,
        };

        let chosen = match selection {
            Selection::Exit => {
                reporter::farewell();
                return Ok(CreateOutcome::Exited);
            }
            Selection::Template(chosen) => chosen,
        };

        let request = ProjectRequest {
            project_name: self.project_name.clone(),
            template_identifier: chosen.identifier,
            template_ref: chosen.template_ref,
            destination_root: destination_root.to_path_buf(),
        };

        reporter::creating_project(&request.project_name);
        let mut result = materializer::materialize(&request, install_root)?;
        reporter::project_created(&result.destination_path);

        match installer::install_if_needed(installer, &result.destination_path) {
            Ok(installed) => {
                result.dependencies_installed = installed;
                if installed {
                    reporter::dependencies_installed();
                }
            }
            // Install failures never fail the run; the directory is usable.
            Err(err) => reporter::install_failed(&err),
        }

        reporter::next_steps(&request.project_name, &result);
        Ok(CreateOutcome::Created(result))
    }
}
