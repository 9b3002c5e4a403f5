//! CLI command implementations
//!
//! Every command loads or builds what it needs and delegates rendering to
//! [`crate::output`]. Failures propagate to `main`, which prints them and
//! exits non-zero.

use lintrc_core::{
    ConfigLoader, LintrcError, Resolver, Result, RuleCatalog, SCHEMA_URL, descriptor_schema,
};
use std::path::PathBuf;
use tracing::debug;

use crate::output;
use crate::{ConfigFormat, OutputFormat};

/// Create a starter configuration file in the current directory
pub fn init_command(format: ConfigFormat, force: bool, with_examples: bool) -> Result<()> {
    debug!("Initializing configuration file with format: {:?}", format);

    let filename = match format {
        ConfigFormat::Json => ".lintrc.json",
        ConfigFormat::Yaml => ".lintrc.yaml",
        ConfigFormat::Toml => ".lintrc.toml",
    };

    let config_path = PathBuf::from(filename);

    if config_path.exists() && !force {
        return Err(LintrcError::ConfigError {
            message: format!(
                "Configuration file '{filename}' already exists. Use --force to overwrite."
            ),
        });
    }

    let starter = if with_examples {
        example_config()
    } else {
        minimal_config()
    };

    let content = match format {
        ConfigFormat::Json => {
            serde_json::to_string_pretty(&starter).map_err(|e| LintrcError::ConfigError {
                message: format!("Failed to serialize JSON: {e}"),
            })?
        }
        ConfigFormat::Yaml => {
            serde_yaml::to_string(&starter).map_err(|e| LintrcError::ConfigError {
                message: format!("Failed to serialize YAML: {e}"),
            })?
        }
        ConfigFormat::Toml => {
            toml::to_string_pretty(&starter).map_err(|e| LintrcError::ConfigError {
                message: format!("Failed to serialize TOML: {e}"),
            })?
        }
    };

    std::fs::write(&config_path, content)?;

    println!("✅ Created configuration file: {filename}");
    if with_examples {
        println!("   The file includes example rules and an override block.");
    }
    println!("   Edit the file to customize your linting rules.");

    Ok(())
}

/// Validate a config file (or the discovered cascade) against the catalog
pub fn validate_command(path: Option<PathBuf>, catalog: &RuleCatalog) -> Result<()> {
    debug!("Validating configuration file: {:?}", path);

    let loaded = ConfigLoader::load(path.as_deref(), None)?;
    let resolver = Resolver::new(catalog, &loaded)?;
    let base = resolver.base();

    println!("✅ Configuration is valid: {}", loaded.path.display());
    println!("   Rules configured: {}", base.rules.len());
    println!("   Override blocks: {}", loaded.descriptor.overrides.len());
    if !loaded.ancestors.is_empty() {
        println!("   Cascaded ancestors: {}", loaded.ancestors.len());
    }

    Ok(())
}

/// Show the loaded descriptor, or the effective configuration for one file
pub fn show_command(
    path: Option<PathBuf>,
    file: Option<PathBuf>,
    format: OutputFormat,
    catalog: &RuleCatalog,
) -> Result<()> {
    debug!("Showing configuration (target file: {:?})", file);

    let loaded = ConfigLoader::load(path.as_deref(), None)?;
    let resolver = Resolver::new(catalog, &loaded)?;

    match file {
        Some(target) => {
            let effective = resolver.resolve(&target);
            output::print_effective(&target, &effective, format)
        }
        None => output::print_loaded(&loaded, format),
    }
}

/// List everything the catalog knows
pub fn catalog_command(detailed: bool, catalog: &RuleCatalog) -> Result<()> {
    debug!("Listing catalog (detailed: {})", detailed);
    output::print_catalog(catalog, detailed);
    Ok(())
}

/// Print the JSON Schema for configuration descriptors
pub fn schema_command() -> Result<()> {
    let schema = descriptor_schema();
    let rendered =
        serde_json::to_string_pretty(&schema).map_err(|e| LintrcError::ConfigError {
            message: format!("Failed to serialize schema: {e}"),
        })?;
    println!("{rendered}");
    Ok(())
}

/// Minimal starter configuration
fn minimal_config() -> serde_json::Value {
    serde_json::json!({
        "root": true,
        "extends": ["recommended"],
        "env": {
            "browser": true,
            "node": true,
            "es6": true
        }
    })
}

/// Starter configuration with example rules and an override block
fn example_config() -> serde_json::Value {
    serde_json::json!({
        "$schema": SCHEMA_URL,
        "root": true,
        "extends": ["recommended"],
        "parser": "typescript",
        "env": {
            "browser": true,
            "node": true,
            "es6": true
        },
        "rules": {
            "no-unused-vars": "error",
            "no-console": "warn",
            "eqeqeq": ["error", "always"]
        },
        "overrides": [
            {
                "files": ["*.config.js", "*.config.ts"],
                "rules": {
                    "no-console": "off"
                }
            }
        ]
    })
}
