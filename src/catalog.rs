//! Menu catalog loading
//!
//! The built-in catalog ships inside the binary. A copy placed at
//! `~/.whisk-bliss/catalog.yaml` replaces it for the whole run; the file is
//! read once at startup and never reloaded.

use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CATALOG_FILE_NAME, CONFIG_DIR_NAME, DEFAULT_CATALOG_YAML};
use crate::models::MenuCatalog;

/// Where the catalog in use came from
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogSource {
    BuiltIn,
    File(PathBuf),
}

/// Default override location, if a home directory can be resolved
pub fn override_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CATALOG_FILE_NAME))
}

/// Parse and validate a catalog from YAML text
pub fn parse_catalog(content: &str) -> Result<MenuCatalog> {
    let catalog: MenuCatalog =
        serde_yaml::from_str(content).context("catalog is not valid YAML")?;
    validate(&catalog)?;
    Ok(catalog)
}

/// The catalog compiled into the binary
pub fn built_in() -> Result<MenuCatalog> {
    parse_catalog(DEFAULT_CATALOG_YAML).context("built-in catalog is invalid")
}

/// Read a catalog file from disk
pub fn load_from_path(path: &Path) -> Result<MenuCatalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_catalog(&content).with_context(|| format!("failed to load {}", path.display()))
}

/// Load the catalog for this run.
///
/// Uses the override at `path` when it exists and is valid. A broken override
/// is logged and the built-in catalog is used instead.
pub fn load(path: Option<&Path>) -> Result<(MenuCatalog, CatalogSource)> {
    if let Some(path) = path.filter(|p| p.exists()) {
        match load_from_path(path) {
            Ok(catalog) => {
                tracing::info!(
                    path = %path.display(),
                    categories = catalog.len(),
                    "Loaded catalog override"
                );
                return Ok((catalog, CatalogSource::File(path.to_path_buf())));
            }
            Err(err) => {
                let reason = format!("{:#}", err);
                tracing::warn!(
                    path = %path.display(),
                    error = %reason,
                    "Ignoring catalog override"
                );
            }
        }
    }

    Ok((built_in()?, CatalogSource::BuiltIn))
}

/// Check the catalog invariants: at least one category, unique names,
/// no empty categories.
pub fn validate(catalog: &MenuCatalog) -> Result<()> {
    if catalog.is_empty() {
        bail!("catalog has no categories");
    }

    let mut seen = HashSet::new();
    for category in &catalog.categories {
        if category.name.trim().is_empty() {
            bail!("catalog has a category with an empty name");
        }
        if !seen.insert(category.name.as_str()) {
            bail!("duplicate category '{}'", category.name);
        }
        if category.items.is_empty() {
            bail!("category '{}' has no items", category.name);
        }
    }

    Ok(())
}
