//! Template catalog loading for Sprout.
//! Obtains the list of available project templates from a local descriptor
//! file or a remote descriptor endpoint and validates its shape.

use crate::constants::TEMPLATES_DIR;
use crate::error::{Error, Result};
use crate::reporter;
use log::debug;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Catalog descriptor file bundled under the templates directory
pub const CATALOG_FILE: &str = "templates.json";

/// Remote catalog endpoint tried before the bundled descriptor file
pub const DEFAULT_CATALOG_URL: &str =
    "https://raw.githubusercontent.com/sprout-cli/templates/master/templates.json";

/// Total time budget for one remote catalog fetch
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection budget for one remote catalog fetch
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// A single entry of the template catalog.
///
/// Loaded fresh on every invocation and never persisted; the catalog lives
/// only for the duration of one run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemplateDescriptor {
    /// Human-readable template name shown in the selection list
    #[serde(rename = "name")]
    pub display_name: String,

    /// Identifier naming the template directory under the templates root
    #[serde(rename = "value")]
    pub identifier: String,

    /// Template version shown next to the name
    #[serde(default)]
    pub version: String,

    /// Short description of what the template scaffolds
    #[serde(default)]
    pub description: String,

    /// Maintainer recommendation, e.g. "recommended" or "legacy"
    #[serde(default)]
    pub recommendation: String,

    /// Selectable refs; when non-empty, one must be chosen before
    /// materialization and names the template directory instead of the
    /// identifier
    pub refs: Option<Vec<String>>,
}

/// Wire shape of the catalog document.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    choices: Vec<TemplateDescriptor>,
}

/// Represents the source location of a template catalog.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    /// Local descriptor file
    File(PathBuf),
    /// Remote descriptor endpoint (HTTP or HTTPS)
    Remote(String),
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogSource::File(path) => {
                write!(f, "local file: '{}'", path.display())
            }
            CatalogSource::Remote(url) => write!(f, "remote endpoint: '{url}'"),
        }
    }
}

impl CatalogSource {
    /// Creates a CatalogSource from a string path or URL.
    ///
    /// # Arguments
    /// * `s` - String containing a filesystem path or an HTTP(S) URL
    pub fn from_string(s: &str) -> Self {
        if let Ok(url) = Url::parse(s) {
            if url.scheme() == "http" || url.scheme() == "https" {
                return Self::Remote(s.to_string());
            }
        }

        Self::File(PathBuf::from(s))
    }
}

/// Loads and validates the template catalog from the given source.
///
/// # Arguments
/// * `source` - Location of the catalog document
///
/// # Returns
/// * `Result<Vec<TemplateDescriptor>>` - Catalog entries in document order
///
/// # Errors
/// * `Error::CatalogUnavailable` if the local file cannot be read or the
///   remote request does not succeed (network failure or non-2xx)
/// * `Error::CatalogMalformed` if the document shape is invalid
pub fn load_catalog(source: &CatalogSource) -> Result<Vec<TemplateDescriptor>> {
    reporter::loading_catalog(source);

    match source {
        CatalogSource::File(path) => load_local(path),
        CatalogSource::Remote(url) => fetch_remote(url),
    }
}

/// Loads the catalog for a default invocation: one bounded fetch of the
/// remote endpoint, falling back to the descriptor file bundled under the
/// install root so project creation never depends on network availability.
pub fn load_default(install_root: &Path) -> Result<Vec<TemplateDescriptor>> {
    let fallback = install_root.join(TEMPLATES_DIR).join(CATALOG_FILE);
    load_with_fallback(DEFAULT_CATALOG_URL, &fallback)
}

/// Tries the remote endpoint once; on any failure reports a warning and
/// loads the local descriptor file instead. Only the fallback's error
/// surfaces to the caller.
pub fn load_with_fallback(
    url: &str,
    fallback_file: &Path,
) -> Result<Vec<TemplateDescriptor>> {
    match load_catalog(&CatalogSource::Remote(url.to_string())) {
        Ok(catalog) => Ok(catalog),
        Err(err) => {
            reporter::catalog_fallback(&err);
            load_catalog(&CatalogSource::File(fallback_file.to_path_buf()))
        }
    }
}

fn load_local(path: &Path) -> Result<Vec<TemplateDescriptor>> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::CatalogUnavailable(format!("could not read '{}': {}", path.display(), e))
    })?;

    parse_catalog(&content)
}

fn fetch_remote(url: &str) -> Result<Vec<TemplateDescriptor>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .connect_timeout(CONNECT_TIMEOUT)
        .user_agent(format!("sprout/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| Error::CatalogUnavailable(e.to_string()))?;

    let response = client.get(url).send().map_err(|e| {
        Error::CatalogUnavailable(format!("request to '{}' failed: {}", url, e))
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::CatalogUnavailable(format!(
            "'{}' answered HTTP {}",
            url,
            status.as_u16()
        )));
    }

    let body = response.text().map_err(|e| {
        Error::CatalogUnavailable(format!("could not read response body: {}", e))
    })?;

    parse_catalog(&body)
}

/// Parses a catalog document and checks its invariants.
///
/// The document must carry a `choices` list whose entries each name a
/// template (`name`) and its identifier (`value`); identifiers must be
/// unique within one load.
///
/// # Errors
/// * `Error::CatalogMalformed` if parsing fails, the `choices` list is
///   missing, an entry lacks a required field, or an identifier repeats
pub fn parse_catalog(content: &str) -> Result<Vec<TemplateDescriptor>> {
    let document: CatalogDocument =
        serde_json::from_str(content).map_err(|e| Error::CatalogMalformed(e.to_string()))?;

    let mut seen = HashSet::new();
    for descriptor in &document.choices {
        if !seen.insert(descriptor.identifier.as_str()) {
            return Err(Error::CatalogMalformed(format!(
                "duplicate template identifier '{}'",
                descriptor.identifier
            )));
        }
    }

    debug!("Loaded {} template descriptor(s)", document.choices.len());
    Ok(document.choices)
}
