//! Rule catalog: the universe a descriptor is validated against
//!
//! A descriptor only names things. The catalog defines them: which rule ids
//! exist, which presets can be extended, which plugins contribute namespaced
//! rules, which parsers are installable, and which environments pre-declare
//! globals. The built-in catalog covers the stock vocabulary; embedding tools
//! extend it through the registration methods or a [`CatalogManifest`] file.

mod builtin;
mod environments;
mod manifest;

pub use manifest::CatalogManifest;

use crate::config::RuleEntry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Definition of a single rule: metadata only, no executable behavior
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RuleDefinition {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
        }
    }
}

/// A named, reusable bundle of rule activations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Preset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Activations applied when the preset is extended, in listed order
    #[serde(default)]
    pub rules: IndexMap<String, RuleEntry>,
}

/// A plugin namespace: rule definitions plus optional defaults and presets
///
/// Keys in `rules` and `defaults` are bare names; descriptors address them as
/// `namespace/name`. Plugin presets are addressed the same way from `extends`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Plugin {
    #[serde(default)]
    pub rules: IndexMap<String, RuleDefinition>,
    /// Activations applied automatically when the plugin is loaded
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub defaults: IndexMap<String, RuleEntry>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub presets: IndexMap<String, Preset>,
}

/// Definition of an environment: the globals it pre-declares
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Environment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub globals: Vec<String>,
}

impl Environment {
    pub fn new(description: impl Into<String>, globals: Vec<String>) -> Self {
        Self {
            description: Some(description.into()),
            globals,
        }
    }
}

/// The full set of identifiers a configuration may reference
#[derive(Debug, Clone, Default)]
pub struct RuleCatalog {
    rules: IndexMap<String, RuleDefinition>,
    presets: IndexMap<String, Preset>,
    plugins: IndexMap<String, Plugin>,
    parsers: Vec<String>,
    environments: IndexMap<String, Environment>,
}

impl RuleCatalog {
    /// An empty catalog; nothing resolves against it
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock catalog: core rules, standard presets, bundled parsers,
    /// and the environment tables
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    pub fn add_rule(&mut self, id: impl Into<String>, definition: RuleDefinition) {
        self.rules.insert(id.into(), definition);
    }

    pub fn add_preset(&mut self, name: impl Into<String>, preset: Preset) {
        self.presets.insert(name.into(), preset);
    }

    pub fn add_plugin(&mut self, name: impl Into<String>, plugin: Plugin) {
        self.plugins.insert(name.into(), plugin);
    }

    pub fn add_parser(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.parsers.contains(&id) {
            self.parsers.push(id);
        }
    }

    pub fn add_environment(&mut self, name: impl Into<String>, environment: Environment) {
        self.environments.insert(name.into(), environment);
    }

    /// Look up a preset by name, including plugin presets as `plugin/preset`
    pub fn preset(&self, name: &str) -> Option<&Preset> {
        match name.split_once('/') {
            Some((namespace, preset)) => self
                .plugins
                .get(namespace)
                .and_then(|plugin| plugin.presets.get(preset)),
            None => self.presets.get(name),
        }
    }

    pub fn plugin(&self, name: &str) -> Option<&Plugin> {
        self.plugins.get(name)
    }

    pub fn has_parser(&self, id: &str) -> bool {
        self.parsers.iter().any(|parser| parser == id)
    }

    pub fn environment(&self, name: &str) -> Option<&Environment> {
        self.environments.get(name)
    }

    /// Resolve a rule key against core rules and the given loaded plugins
    ///
    /// A bare key resolves among core rules. A `namespace/name` key resolves
    /// only when `namespace` appears in `loaded_plugins`; a plugin that is
    /// registered in the catalog but not loaded by the descriptor contributes
    /// nothing.
    pub fn rule_definition(
        &self,
        key: &str,
        loaded_plugins: &[String],
    ) -> Option<&RuleDefinition> {
        match key.split_once('/') {
            Some((namespace, rule)) => {
                if !loaded_plugins.iter().any(|plugin| plugin == namespace) {
                    return None;
                }
                self.plugins
                    .get(namespace)
                    .and_then(|plugin| plugin.rules.get(rule))
            }
            None => self.rules.get(key),
        }
    }

    pub fn core_rules(&self) -> &IndexMap<String, RuleDefinition> {
        &self.rules
    }

    pub fn presets(&self) -> &IndexMap<String, Preset> {
        &self.presets
    }

    pub fn plugins(&self) -> &IndexMap<String, Plugin> {
        &self.plugins
    }

    pub fn parsers(&self) -> &[String] {
        &self.parsers
    }

    pub fn environments(&self) -> &IndexMap<String, Environment> {
        &self.environments
    }
}
