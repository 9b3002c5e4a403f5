//! Catalog manifests
//!
//! A manifest file adds an embedding tool's vocabulary to the catalog:
//! extra rule definitions, presets, plugin namespaces, parsers, and
//! environments. Shipping one lets configs be validated against the host
//! tool without recompiling this crate.

use super::{Environment, Plugin, Preset, RuleCatalog, RuleDefinition};
use crate::error::LintrcError;
use crate::result::Result;
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Serde model for a catalog manifest file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct CatalogManifest {
    /// Extra core (unnamespaced) rule definitions
    #[serde(default)]
    pub rules: IndexMap<String, RuleDefinition>,
    #[serde(default)]
    pub presets: IndexMap<String, Preset>,
    #[serde(default)]
    pub plugins: IndexMap<String, Plugin>,
    #[serde(default)]
    pub parsers: Vec<String>,
    #[serde(default)]
    pub environments: IndexMap<String, Environment>,
}

impl CatalogManifest {
    /// Read a manifest from a JSON/JSONC, YAML, or TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| LintrcError::io_error(path, e))?;

        let extension = path.extension().and_then(|ext| ext.to_str());
        match extension {
            Some("json") => json5::from_str(&content)
                .map_err(|e| LintrcError::manifest_error(path, e.to_string())),
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .map_err(|e| LintrcError::manifest_error(path, e.to_string())),
            Some("toml") => {
                toml::from_str(&content).map_err(|e| LintrcError::manifest_error(path, e.to_string()))
            }
            _ => Err(LintrcError::manifest_error(
                path,
                "unsupported extension (expected .json, .yaml, .yml, or .toml)",
            )),
        }
    }
}

impl RuleCatalog {
    /// Merge manifest entries into this catalog
    ///
    /// Manifest entries win on name collisions, so a host tool can replace a
    /// built-in preset wholesale.
    pub fn apply_manifest(&mut self, manifest: CatalogManifest) {
        for (id, definition) in manifest.rules {
            self.add_rule(id, definition);
        }
        for (name, preset) in manifest.presets {
            self.add_preset(name, preset);
        }
        for (name, plugin) in manifest.plugins {
            self.add_plugin(name, plugin);
        }
        for parser in manifest.parsers {
            self.add_parser(parser);
        }
        for (name, environment) in manifest.environments {
            self.add_environment(name, environment);
        }
    }

    /// Load a manifest file and apply it to this catalog
    pub fn load_manifest_file(&mut self, path: &Path) -> Result<()> {
        let manifest = CatalogManifest::from_file(path)?;
        tracing::debug!("Applying catalog manifest from: {}", path.display());
        self.apply_manifest(manifest);
        Ok(())
    }
}
