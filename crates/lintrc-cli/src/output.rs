//! Output formatting for configuration reports
//!
//! Human-readable rendering with colors plus plain JSON for scripting. All
//! human output goes through here so the commands stay free of layout code.

use colored::*;
use lintrc_core::{EffectiveConfig, LintrcError, LoadedConfig, Result, RuleCatalog, Severity};
use std::path::Path;

use crate::OutputFormat;

fn to_pretty<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| LintrcError::ConfigError {
        message: format!("Failed to serialize output: {e}"),
    })
}

fn severity_cell(severity: Severity) -> ColoredString {
    match severity {
        Severity::Error => severity.as_str().red(),
        Severity::Warn => severity.as_str().yellow(),
        Severity::Off => severity.as_str().dimmed(),
    }
}

/// Print a loaded config: its source, its cascade, and the merged descriptor
pub fn print_loaded(loaded: &LoadedConfig, format: OutputFormat) -> Result<()> {
    let rendered = to_pretty(&loaded.descriptor)?;
    match format {
        OutputFormat::Json => println!("{rendered}"),
        OutputFormat::Human => {
            println!(
                "{}",
                format!("Configuration: {}", loaded.path.display()).bold()
            );
            if !loaded.ancestors.is_empty() {
                println!("Cascaded from:");
                for ancestor in &loaded.ancestors {
                    println!("  {}", ancestor.display());
                }
            }
            println!("{rendered}");
        }
    }
    Ok(())
}

/// Print the effective configuration one target file would get
pub fn print_effective(
    target: &Path,
    effective: &EffectiveConfig,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", to_pretty(effective)?),
        OutputFormat::Human => {
            println!(
                "{}",
                format!("Effective configuration for {}", target.display()).bold()
            );
            println!("  Parser: {}", effective.parser);

            let enabled: Vec<&str> = effective
                .env
                .iter()
                .filter(|(_, on)| **on)
                .map(|(name, _)| name.as_str())
                .collect();
            if enabled.is_empty() {
                println!("  Environments: (none)");
            } else {
                println!("  Environments: {}", enabled.join(", "));
            }
            println!("  Globals: {}", effective.globals.len());

            println!("{}", "Rules:".bold());
            if effective.rules.is_empty() {
                println!("  (none configured)");
            }
            for (key, entry) in &effective.rules {
                if entry.options.is_empty() {
                    println!("  {:<32} {}", key, severity_cell(entry.severity));
                } else {
                    let options =
                        serde_json::to_string(&entry.options).unwrap_or_else(|_| "[]".to_string());
                    println!(
                        "  {:<32} {}  {}",
                        key,
                        severity_cell(entry.severity),
                        options.dimmed()
                    );
                }
            }
        }
    }
    Ok(())
}

/// List everything a catalog knows, optionally with descriptions
pub fn print_catalog(catalog: &RuleCatalog, detailed: bool) {
    println!("{}", "Rule catalog".bold());

    println!();
    println!(
        "{}",
        format!("Core rules ({}):", catalog.core_rules().len()).bold()
    );
    for (id, definition) in catalog.core_rules() {
        if detailed {
            let description = definition.description.as_deref().unwrap_or("");
            println!("  {id:<28} {description}");
        } else {
            println!("  {id}");
        }
    }

    println!();
    println!(
        "{}",
        format!("Presets ({}):", catalog.presets().len()).bold()
    );
    for (name, preset) in catalog.presets() {
        if detailed {
            let description = preset.description.as_deref().unwrap_or("");
            println!("  {:<28} {} rules  {}", name, preset.rules.len(), description);
        } else {
            println!("  {name}");
        }
    }

    if !catalog.plugins().is_empty() {
        println!();
        println!(
            "{}",
            format!("Plugins ({}):", catalog.plugins().len()).bold()
        );
        for (name, plugin) in catalog.plugins() {
            println!("  {:<28} {} rules", name, plugin.rules.len());
        }
    }

    println!();
    println!("{}", "Parsers:".bold());
    println!("  {}", catalog.parsers().join(", "));

    println!();
    println!(
        "{}",
        format!("Environments ({}):", catalog.environments().len()).bold()
    );
    for (name, environment) in catalog.environments() {
        if detailed {
            let description = environment.description.as_deref().unwrap_or("");
            println!(
                "  {:<28} {} globals  {}",
                name,
                environment.globals.len(),
                description
            );
        } else {
            println!("  {name}");
        }
    }
}
