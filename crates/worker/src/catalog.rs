use std::path::Path;

use anyhow::Context;
use herald_dispatch::Catalog;

/// Read template overrides from a `{locale: {key: template}}` JSON file.
pub fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read messages file {}", path.display()))?;
    let catalog: Catalog = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid messages file {}", path.display()))?;

    let templates: usize = catalog.values().map(|bundle| bundle.len()).sum();
    tracing::info!(path = %path.display(), locales = catalog.len(), templates, "Message overrides loaded");
    Ok(catalog)
}
