//! Template selection for Sprout.
//! Presents the catalog to the operator and resolves a single chosen
//! template, an optional ref, or an explicit exit signal.

use crate::catalog::TemplateDescriptor;
use crate::error::{Error, Result};
use dialoguer::Select;

/// Label of the exit row appended when the catalog does not model one
pub const EXIT_LABEL: &str = "Exit";

/// Identifier of a catalog entry that models the exit choice itself
pub const EXIT_IDENTIFIER: &str = "exit";

/// Outcome of the selection stage.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// The operator picked a template (and a ref when the descriptor lists any)
    Template(ChosenTemplate),
    /// The operator picked the exit entry; the pipeline stops without
    /// touching disk and the run still succeeds
    Exit,
}

/// A resolved template choice ready for materialization.
#[derive(Debug, Clone, PartialEq)]
pub struct ChosenTemplate {
    pub identifier: String,
    pub template_ref: Option<String>,
}

/// Trait for single-choice prompting.
///
/// Given a list of labeled options the implementation blocks until exactly
/// one is chosen and returns its index. The call suspends indefinitely:
/// there is no default answer and no timeout.
pub trait Prompter {
    fn choose(&self, prompt: &str, items: &[String]) -> Result<usize>;
}

/// Prompter backed by dialoguer's select widget.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn choose(&self, prompt: &str, items: &[String]) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}

/// Presents the catalog and resolves the operator's choice.
///
/// Catalog order is preserved. An exit row is appended unless the catalog
/// already models exit as a descriptor; choosing either yields
/// `Selection::Exit`. When the chosen descriptor carries a non-empty ref
/// list, a second prompt picks the ref.
pub fn select(
    catalog: &[TemplateDescriptor],
    prompter: &dyn Prompter,
) -> Result<Selection> {
    let mut items: Vec<String> = catalog.iter().map(display_label).collect();
    let has_exit_entry = catalog.iter().any(|d| d.identifier == EXIT_IDENTIFIER);
    if !has_exit_entry {
        items.push(EXIT_LABEL.to_string());
    }

    let index = prompter.choose("Select a project template", &items)?;
    if index >= catalog.len() {
        return Ok(Selection::Exit);
    }

    let descriptor = &catalog[index];
    if descriptor.identifier == EXIT_IDENTIFIER {
        return Ok(Selection::Exit);
    }

    finish_selection(descriptor, prompter)
}

/// Resolves a template named on the command line, bypassing the first
/// prompt entirely. The exit identifier always resolves to the exit
/// selection, whether or not the catalog models it, mirroring the row
/// `select` always offers. A descriptor with refs still runs the ref
/// prompt.
///
/// # Errors
/// * `Error::UnknownTemplateError` if no catalog entry carries the name
pub fn resolve(
    catalog: &[TemplateDescriptor],
    name: &str,
    prompter: &dyn Prompter,
) -> Result<Selection> {
    if name == EXIT_IDENTIFIER {
        return Ok(Selection::Exit);
    }

    let descriptor = catalog.iter().find(|d| d.identifier == name).ok_or_else(|| {
        Error::UnknownTemplateError { name: name.to_string() }
    })?;

    finish_selection(descriptor, prompter)
}

fn finish_selection(
    descriptor: &TemplateDescriptor,
    prompter: &dyn Prompter,
) -> Result<Selection> {
    let template_ref = match &descriptor.refs {
        Some(refs) if !refs.is_empty() => {
            let index = prompter.choose("Select a version", refs)?;
            Some(refs[index].clone())
        }
        _ => None,
    };

    Ok(Selection::Template(ChosenTemplate {
        identifier: descriptor.identifier.clone(),
        template_ref,
    }))
}

// List label: name, version, then description and recommendation when present.
fn display_label(descriptor: &TemplateDescriptor) -> String {
    let mut label = descriptor.display_name.clone();
    if !descriptor.version.is_empty() {
        label.push_str(&format!(" (v{})", descriptor.version));
    }
    if !descriptor.description.is_empty() {
        label.push_str(&format!(" - {}", descriptor.description));
    }
    if !descriptor.recommendation.is_empty() {
        label.push_str(&format!(" [{}]", descriptor.recommendation));
    }
    label
}
