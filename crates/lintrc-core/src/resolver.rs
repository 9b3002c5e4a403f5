//! Per-file configuration resolution
//!
//! Building a [`Resolver`] validates every identifier a descriptor names
//! against the catalog and precompiles its override globs; a bad name or
//! pattern fails construction before any file is consulted. After that,
//! [`Resolver::resolve`] is infallible and pure: the base layer (extends
//! presets left to right, then plugin defaults, then the file's own rules)
//! plus every matching override block in listed order, later entries
//! shadowing earlier ones per rule key.

use crate::catalog::RuleCatalog;
use crate::config::{ConfigDescriptor, LoadedConfig, OverrideBlock, RuleEntry, Severity};
use crate::error::LintrcError;
use crate::result::Result;
use glob::{MatchOptions, Pattern};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Parser assumed when a descriptor never sets one
pub const DEFAULT_PARSER: &str = "default";

/// Fully resolved configuration for one target file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectiveConfig {
    /// Parser assigned to the file
    pub parser: String,
    /// Every activation by rule key, including `off` entries
    pub rules: IndexMap<String, RuleEntry>,
    /// Environment toggles after override merging
    pub env: IndexMap<String, bool>,
    /// Union of globals from enabled environments, sorted
    pub globals: BTreeSet<String>,
}

impl EffectiveConfig {
    pub fn severity_of(&self, rule: &str) -> Option<Severity> {
        self.rules.get(rule).map(|entry| entry.severity)
    }

    /// Whether the rule would produce diagnostics for this file
    pub fn is_active(&self, rule: &str) -> bool {
        self.severity_of(rule)
            .is_some_and(|severity| severity.is_active())
    }

    /// Activations that are not `off`, in resolution order
    pub fn active_rules(&self) -> impl Iterator<Item = (&str, &RuleEntry)> {
        self.rules
            .iter()
            .filter(|(_, entry)| entry.is_active())
            .map(|(key, entry)| (key.as_str(), entry))
    }
}

fn match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: true,
        // A single `*` must not cross directory boundaries; `**` still does
        require_literal_separator: true,
        require_literal_leading_dot: false,
    }
}

/// A glob from `files`/`excludedFiles` with its matching mode baked in
#[derive(Debug, Clone)]
struct CompiledGlob {
    pattern: Pattern,
    /// Patterns without `/` match against the file name alone
    match_basename: bool,
}

impl CompiledGlob {
    fn compile(raw: &str, source: &Path) -> Result<Self> {
        let pattern = Pattern::new(raw).map_err(|e| LintrcError::InvalidGlob {
            pattern: raw.to_string(),
            path: source.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(Self {
            pattern,
            match_basename: !raw.contains('/'),
        })
    }

    fn matches(&self, relative: &Path) -> bool {
        if self.match_basename {
            relative
                .file_name()
                .and_then(|name| name.to_str())
                .map(|name| self.pattern.matches_with(name, match_options()))
                .unwrap_or(false)
        } else {
            self.pattern.matches_path_with(relative, match_options())
        }
    }
}

/// One override block, validated and ready to apply
#[derive(Debug, Clone)]
struct Layer {
    files: Vec<CompiledGlob>,
    excluded: Vec<CompiledGlob>,
    parser: Option<String>,
    env: IndexMap<String, bool>,
    rules: IndexMap<String, RuleEntry>,
}

impl Layer {
    fn applies_to(&self, relative: &Path) -> bool {
        self.files.iter().any(|glob| glob.matches(relative))
            && !self.excluded.iter().any(|glob| glob.matches(relative))
    }
}

/// Validated descriptor bound to a catalog, ready to answer per-file queries
pub struct Resolver<'a> {
    catalog: &'a RuleCatalog,
    /// Directory of the config file; override globs are relative to it
    base_dir: PathBuf,
    base_parser: String,
    base_env: IndexMap<String, bool>,
    base_rules: IndexMap<String, RuleEntry>,
    layers: Vec<Layer>,
}

impl<'a> Resolver<'a> {
    /// Validate a loaded config against the catalog
    pub fn new(catalog: &'a RuleCatalog, config: &LoadedConfig) -> Result<Self> {
        Self::with_source(catalog, &config.descriptor, &config.path)
    }

    /// Validate a descriptor read from `source`
    ///
    /// Fails fast on the first unknown preset, plugin, parser, environment,
    /// or rule key, and on any malformed override glob; `source` is cited in
    /// the error.
    pub fn with_source(
        catalog: &'a RuleCatalog,
        descriptor: &ConfigDescriptor,
        source: &Path,
    ) -> Result<Self> {
        let base_dir = source.parent().unwrap_or(Path::new(".")).to_path_buf();

        check_plugins(catalog, &descriptor.plugins, source)?;
        check_parser(catalog, descriptor.parser.as_deref(), source)?;
        check_environments(catalog, descriptor.env.keys(), source)?;

        let mut base_rules = IndexMap::new();
        apply_presets(
            catalog,
            &descriptor.extends,
            &descriptor.plugins,
            source,
            &mut base_rules,
        )?;
        apply_plugin_defaults(catalog, &descriptor.plugins, source, &mut base_rules)?;
        apply_activations(
            catalog,
            &descriptor.rules,
            &descriptor.plugins,
            source,
            &mut base_rules,
        )?;

        let mut layers = Vec::with_capacity(descriptor.overrides.len());
        for block in &descriptor.overrides {
            layers.push(compile_override(catalog, block, &descriptor.plugins, source)?);
        }

        tracing::debug!(
            "Validated config from {}: {} base rules, {} overrides",
            source.display(),
            base_rules.len(),
            layers.len()
        );

        Ok(Self {
            catalog,
            base_dir,
            base_parser: descriptor
                .parser
                .clone()
                .unwrap_or_else(|| DEFAULT_PARSER.to_string()),
            base_env: descriptor.env.clone(),
            base_rules,
            layers,
        })
    }

    /// Resolve the effective configuration for one target file
    ///
    /// Deterministic: the same file always yields the same result. The file
    /// does not need to exist; matching is purely textual. Absolute paths are
    /// taken relative to the config directory, other paths are matched as
    /// given.
    pub fn resolve(&self, file: &Path) -> EffectiveConfig {
        let relative = file.strip_prefix(&self.base_dir).unwrap_or(file);

        let mut rules = self.base_rules.clone();
        let mut env = self.base_env.clone();
        let mut parser = self.base_parser.clone();

        for layer in &self.layers {
            if !layer.applies_to(relative) {
                continue;
            }
            for (key, entry) in &layer.rules {
                rules.insert(key.clone(), entry.clone());
            }
            for (name, enabled) in &layer.env {
                env.insert(name.clone(), *enabled);
            }
            if let Some(layer_parser) = &layer.parser {
                parser = layer_parser.clone();
            }
        }

        let globals = self.collect_globals(&env);
        EffectiveConfig {
            parser,
            rules,
            env,
            globals,
        }
    }

    /// The configuration files get when no override matches
    pub fn base(&self) -> EffectiveConfig {
        EffectiveConfig {
            parser: self.base_parser.clone(),
            rules: self.base_rules.clone(),
            env: self.base_env.clone(),
            globals: self.collect_globals(&self.base_env),
        }
    }

    fn collect_globals(&self, env: &IndexMap<String, bool>) -> BTreeSet<String> {
        let mut globals = BTreeSet::new();
        for (name, enabled) in env {
            if !enabled {
                continue;
            }
            if let Some(environment) = self.catalog.environment(name) {
                globals.extend(environment.globals.iter().cloned());
            }
        }
        globals
    }
}

fn check_plugins(catalog: &RuleCatalog, plugins: &[String], source: &Path) -> Result<()> {
    for name in plugins {
        if catalog.plugin(name).is_none() {
            return Err(LintrcError::UnknownPlugin {
                name: name.clone(),
                path: source.to_path_buf(),
            });
        }
    }
    Ok(())
}

fn check_parser(catalog: &RuleCatalog, parser: Option<&str>, source: &Path) -> Result<()> {
    if let Some(name) = parser {
        if !catalog.has_parser(name) {
            return Err(LintrcError::UnknownParser {
                name: name.to_string(),
                path: source.to_path_buf(),
            });
        }
    }
    Ok(())
}

fn check_environments<'k>(
    catalog: &RuleCatalog,
    names: impl Iterator<Item = &'k String>,
    source: &Path,
) -> Result<()> {
    for name in names {
        if catalog.environment(name).is_none() {
            return Err(LintrcError::UnknownEnvironment {
                name: name.clone(),
                path: source.to_path_buf(),
            });
        }
    }
    Ok(())
}

/// Apply presets left to right; later presets shadow earlier ones per key
fn apply_presets(
    catalog: &RuleCatalog,
    names: &[String],
    loaded_plugins: &[String],
    source: &Path,
    acc: &mut IndexMap<String, RuleEntry>,
) -> Result<()> {
    for name in names {
        let preset = catalog
            .preset(name)
            .ok_or_else(|| LintrcError::UnknownPreset {
                name: name.clone(),
                path: source.to_path_buf(),
            })?;
        for (key, entry) in &preset.rules {
            if catalog.rule_definition(key, loaded_plugins).is_none() {
                return Err(LintrcError::RuleNotFound {
                    rule: key.clone(),
                    path: source.to_path_buf(),
                });
            }
            acc.insert(key.clone(), entry.clone());
        }
    }
    Ok(())
}

/// Apply the default activations each loaded plugin ships with
fn apply_plugin_defaults(
    catalog: &RuleCatalog,
    plugins: &[String],
    source: &Path,
    acc: &mut IndexMap<String, RuleEntry>,
) -> Result<()> {
    for name in plugins {
        // Plugins were checked up front; a miss here cannot happen
        let Some(plugin) = catalog.plugin(name) else {
            continue;
        };
        for (bare, entry) in &plugin.defaults {
            let key = format!("{name}/{bare}");
            if !plugin.rules.contains_key(bare) {
                return Err(LintrcError::RuleNotFound {
                    rule: key,
                    path: source.to_path_buf(),
                });
            }
            acc.insert(key, entry.clone());
        }
    }
    Ok(())
}

fn apply_activations(
    catalog: &RuleCatalog,
    rules: &IndexMap<String, RuleEntry>,
    loaded_plugins: &[String],
    source: &Path,
    acc: &mut IndexMap<String, RuleEntry>,
) -> Result<()> {
    for (key, entry) in rules {
        if catalog.rule_definition(key, loaded_plugins).is_none() {
            return Err(LintrcError::RuleNotFound {
                rule: key.clone(),
                path: source.to_path_buf(),
            });
        }
        acc.insert(key.clone(), entry.clone());
    }
    Ok(())
}

fn compile_override(
    catalog: &RuleCatalog,
    block: &OverrideBlock,
    base_plugins: &[String],
    source: &Path,
) -> Result<Layer> {
    if block.files.is_empty() {
        return Err(LintrcError::config_error(format!(
            "override block with empty files list in '{}'",
            source.display()
        )));
    }
    let files = compile_globs(&block.files, source)?;
    let excluded = compile_globs(&block.excluded_files, source)?;

    check_plugins(catalog, &block.plugins, source)?;
    check_parser(catalog, block.parser.as_deref(), source)?;
    check_environments(catalog, block.env.keys(), source)?;

    // Rule keys inside the block see base plugins plus the block's own
    let mut scoped_plugins = base_plugins.to_vec();
    for plugin in &block.plugins {
        if !scoped_plugins.contains(plugin) {
            scoped_plugins.push(plugin.clone());
        }
    }

    let mut rules = IndexMap::new();
    apply_presets(catalog, &block.extends, &scoped_plugins, source, &mut rules)?;
    apply_plugin_defaults(catalog, &block.plugins, source, &mut rules)?;
    apply_activations(catalog, &block.rules, &scoped_plugins, source, &mut rules)?;

    Ok(Layer {
        files,
        excluded,
        parser: block.parser.clone(),
        env: block.env.clone(),
        rules,
    })
}

fn compile_globs(patterns: &[String], source: &Path) -> Result<Vec<CompiledGlob>> {
    patterns
        .iter()
        .map(|raw| CompiledGlob::compile(raw, source))
        .collect()
}
