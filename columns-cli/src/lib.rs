//! Commands behind the `columns` binary, kept here so they can be tested
//! without a process.

use anyhow::{Context, Result};
use columns_config::store::initial_configuration;
use columns_model::{sort_by_name, validate, Configuration, ContentType, ValidationIssue};
use std::{fs, path::Path};
use tracing::{debug, info};

/// Parses `id` or `id=Name` as given to `--content-type`.
pub fn parse_content_type(raw: &str) -> Result<ContentType> {
    let (id, name) = match raw.split_once('=') {
        Some((id, name)) => (id.trim(), name.trim()),
        None => (raw.trim(), raw.trim()),
    };
    anyhow::ensure!(!id.is_empty(), "content type id is empty in {raw:?}");
    Ok(ContentType::new(id, if name.is_empty() { id } else { name }))
}

/// Reads an installation parameter document from disk.
pub fn load_document(path: &Path) -> Result<Configuration> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let value: serde_json::Value =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    let config = Configuration::from_json(value).context("not an installation parameter document")?;
    debug!(
        "Loaded {} presets and {} breakpoint sets from {}",
        config.presets.len(),
        config.breakpoints.len(),
        path.display()
    );
    Ok(config)
}

/// Loads `path` and returns every issue found in it.
pub fn validate_file(path: &Path) -> Result<Vec<ValidationIssue>> {
    let config = load_document(path)?;
    let issues = validate(&config);
    info!("{} issues in {}", issues.len(), path.display());
    Ok(issues)
}

/// The document a fresh installation would persist for `catalog`.
pub fn init_document(mut catalog: Vec<ContentType>) -> Result<String> {
    sort_by_name(&mut catalog);
    let config = initial_configuration(&catalog);
    let value = config.to_json().context("serializing configuration")?;
    Ok(serde_json::to_string_pretty(&value)?)
}
