//! Configuration file discovery and loading

use super::descriptor::ConfigDescriptor;
use crate::error::LintrcError;
use crate::result::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names probed in each directory, in priority order
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".lintrc.json",
    ".lintrc.yaml",
    ".lintrc.yml",
    ".lintrc.toml",
    "lintrc.json",
];

/// A cascaded descriptor together with where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// Fully merged descriptor, nearest file taking precedence
    pub descriptor: ConfigDescriptor,
    /// The nearest (primary) config file; error messages cite this path
    pub path: PathBuf,
    /// Ancestor config files merged underneath, nearest first
    pub ancestors: Vec<PathBuf>,
}

impl LoadedConfig {
    /// Directory override globs are matched against
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new("."))
    }
}

/// Configuration loader for discovering and loading config files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Auto-discover a config file by traversing upward from start_path
    ///
    /// Each directory is probed for the names in [`CONFIG_FILE_NAMES`], dotfile
    /// forms first. The search moves up the directory tree until a config is
    /// found or the filesystem root is reached.
    pub fn auto_discover(start_path: &Path) -> Result<Option<PathBuf>> {
        let mut current = start_path
            .canonicalize()
            .map_err(|e| LintrcError::ConfigError {
                message: format!("Invalid path: {e}"),
            })?;

        loop {
            for filename in CONFIG_FILE_NAMES {
                let config_path = current.join(filename);
                if config_path.exists() && config_path.is_file() {
                    tracing::debug!("Found config: {}", config_path.display());
                    return Ok(Some(config_path));
                }
            }

            // Move up to parent directory
            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                // Reached filesystem root
                break;
            }
        }

        Ok(None)
    }

    /// Load a descriptor from a specific file
    ///
    /// The extension picks the parser: `.json` (parsed as JSONC, so comments
    /// and trailing commas are fine), `.yaml`/`.yml`, or `.toml`.
    pub fn load_from_file(path: &Path) -> Result<ConfigDescriptor> {
        let content = fs::read_to_string(path).map_err(|e| LintrcError::io_error(path, e))?;

        let extension = path.extension().and_then(|ext| ext.to_str());
        let descriptor = match extension {
            Some("json") => json5::from_str(&content)
                .map_err(|e| LintrcError::parse_error(path, e.to_string()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .map_err(|e| LintrcError::parse_error(path, e.to_string()))?,
            Some("toml") => toml::from_str(&content)
                .map_err(|e| LintrcError::parse_error(path, e.to_string()))?,
            _ => {
                return Err(LintrcError::config_error(format!(
                    "Unsupported config extension for '{}' (expected .json, .yaml, .yml, or .toml)",
                    path.display()
                )));
            }
        };

        tracing::debug!("Loaded config from: {}", path.display());
        Ok(descriptor)
    }

    /// Load config from an explicit path or by auto-discovery
    ///
    /// An explicit path loads exactly that file. Otherwise discovery starts
    /// from `start_dir` (or the current directory) and the result cascades
    /// with ancestor configs via [`ConfigLoader::load_cascade`].
    pub fn load(custom_path: Option<&Path>, start_dir: Option<&Path>) -> Result<LoadedConfig> {
        if let Some(path) = custom_path {
            if !path.exists() {
                return Err(LintrcError::ConfigError {
                    message: format!("Config file not found: {}", path.display()),
                });
            }
            let descriptor = Self::load_from_file(path)?;
            return Ok(LoadedConfig {
                descriptor,
                path: path.to_path_buf(),
                ancestors: Vec::new(),
            });
        }

        let search_dir = start_dir.unwrap_or_else(|| Path::new("."));
        let current_dir = search_dir
            .canonicalize()
            .map_err(|e| LintrcError::ConfigError {
                message: format!("Failed to resolve directory: {e}"),
            })?;

        let nearest = Self::auto_discover(&current_dir)?.ok_or_else(|| LintrcError::ConfigError {
            message: format!(
                "No config file found ({}). Run 'lintrc init' to create one.",
                CONFIG_FILE_NAMES.join(", ")
            ),
        })?;

        Self::load_cascade(&nearest)
    }

    /// Load a config file and merge in ancestor configs from outer directories
    ///
    /// Ancestors are consulted until a file with `root: true` is reached (the
    /// nearest file itself counting first) or the directory tree runs out.
    /// Each nearer file takes precedence over the ones above it.
    pub fn load_cascade(path: &Path) -> Result<LoadedConfig> {
        let path = path
            .canonicalize()
            .map_err(|e| LintrcError::io_error(path, e))?;
        let mut descriptor = Self::load_from_file(&path)?;
        let mut ancestors = Vec::new();

        if !descriptor.is_root() {
            let mut cursor = path.parent().and_then(Path::parent).map(Path::to_path_buf);
            while let Some(dir) = cursor {
                let Some(parent_path) = Self::auto_discover(&dir)? else {
                    break;
                };
                let parent = Self::load_from_file(&parent_path)?;
                let parent_is_root = parent.is_root();
                tracing::debug!("Cascading config from: {}", parent_path.display());
                descriptor.merge_from_parent(parent);
                cursor = parent_path
                    .parent()
                    .and_then(Path::parent)
                    .map(Path::to_path_buf);
                ancestors.push(parent_path);
                if parent_is_root {
                    break;
                }
            }
        }

        Ok(LoadedConfig {
            descriptor,
            path,
            ancestors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::descriptor::{RuleEntry, Severity};
    use std::fs;
    use tempfile::TempDir;

    fn create_temp_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
        let path = dir.join(filename);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_from_file_json() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_temp_config(
            temp_dir.path(),
            ".lintrc.json",
            r#"{
                "root": true,
                "extends": ["recommended"],
                "rules": { "no-console": "warn" }
            }"#,
        );

        let descriptor = ConfigLoader::load_from_file(&config_path).unwrap();
        assert!(descriptor.is_root());
        assert_eq!(descriptor.extends, vec!["recommended"]);
        assert_eq!(
            descriptor.rules.get("no-console"),
            Some(&RuleEntry::new(Severity::Warn))
        );
    }

    #[test]
    fn test_load_from_file_jsonc() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_temp_config(
            temp_dir.path(),
            ".lintrc.json",
            r#"{
                // project baseline
                "root": true,
                "rules": {
                    "eqeqeq": "error", // keep strict equality
                },
            }"#,
        );

        let descriptor = ConfigLoader::load_from_file(&config_path).unwrap();
        assert_eq!(
            descriptor.rules.get("eqeqeq"),
            Some(&RuleEntry::new(Severity::Error))
        );
    }

    #[test]
    fn test_load_from_file_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_temp_config(
            temp_dir.path(),
            ".lintrc.yaml",
            "root: true\nextends:\n  - recommended\nenv:\n  node: true\nrules:\n  no-console: warn\n",
        );

        let descriptor = ConfigLoader::load_from_file(&config_path).unwrap();
        assert!(descriptor.is_root());
        assert_eq!(descriptor.env.get("node"), Some(&true));
    }

    #[test]
    fn test_load_from_file_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_temp_config(
            temp_dir.path(),
            ".lintrc.toml",
            r#"
root = true
extends = ["recommended"]

[rules]
semi = "warn"
eqeqeq = ["error", "always"]
"#,
        );

        let descriptor = ConfigLoader::load_from_file(&config_path).unwrap();
        assert_eq!(
            descriptor.rules.get("semi"),
            Some(&RuleEntry::new(Severity::Warn))
        );
        let eqeqeq = descriptor.rules.get("eqeqeq").unwrap();
        assert_eq!(eqeqeq.severity, Severity::Error);
        assert_eq!(eqeqeq.options, vec![serde_json::json!("always")]);
    }

    #[test]
    fn test_load_unsupported_extension() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_temp_config(temp_dir.path(), "lintrc.ini", "root = true");

        let result = ConfigLoader::load_from_file(&config_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let config_path =
            create_temp_config(temp_dir.path(), ".lintrc.json", r#"{ invalid json }"#);

        let result = ConfigLoader::load_from_file(&config_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_nonexistent_custom_path() {
        let result = ConfigLoader::load(Some(Path::new("no-such-.lintrc.json")), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_auto_discover_from_nested_dir() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("src/nested");
        fs::create_dir_all(&nested).unwrap();

        create_temp_config(temp_dir.path(), ".lintrc.json", r#"{"root": true}"#);

        let found = ConfigLoader::auto_discover(&nested).unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().file_name().unwrap(), ".lintrc.json");
    }

    #[test]
    fn test_auto_discover_priority() {
        let temp_dir = TempDir::new().unwrap();

        create_temp_config(temp_dir.path(), ".lintrc.json", r#"{"root": true}"#);
        create_temp_config(temp_dir.path(), ".lintrc.yaml", "root: true\n");
        create_temp_config(temp_dir.path(), "lintrc.json", r#"{"root": true}"#);

        // Dotfile JSON wins over the other forms
        let found = ConfigLoader::auto_discover(temp_dir.path()).unwrap();
        assert_eq!(found.unwrap().file_name().unwrap(), ".lintrc.json");
    }

    #[test]
    fn test_cascade_merges_parent() {
        let temp_dir = TempDir::new().unwrap();
        let app = temp_dir.path().join("app");
        fs::create_dir_all(&app).unwrap();

        create_temp_config(
            temp_dir.path(),
            ".lintrc.json",
            r#"{
                "root": true,
                "extends": ["recommended"],
                "rules": { "no-console": "warn" }
            }"#,
        );
        create_temp_config(
            &app,
            ".lintrc.json",
            r#"{ "rules": { "no-console": "off", "semi": "warn" } }"#,
        );

        let loaded = ConfigLoader::load(None, Some(app.as_path())).unwrap();
        assert_eq!(loaded.ancestors.len(), 1);
        assert_eq!(loaded.descriptor.extends, vec!["recommended"]);
        // Nearer file wins for the shared key, parent fills the rest
        assert_eq!(
            loaded.descriptor.rules.get("no-console"),
            Some(&RuleEntry::new(Severity::Off))
        );
        assert_eq!(
            loaded.descriptor.rules.get("semi"),
            Some(&RuleEntry::new(Severity::Warn))
        );
    }

    #[test]
    fn test_cascade_stops_at_root() {
        let temp_dir = TempDir::new().unwrap();
        let mid = temp_dir.path().join("mid");
        let leaf = mid.join("leaf");
        fs::create_dir_all(&leaf).unwrap();

        create_temp_config(
            temp_dir.path(),
            ".lintrc.json",
            r#"{ "root": true, "rules": { "no-var": "error" } }"#,
        );
        create_temp_config(
            &mid,
            ".lintrc.json",
            r#"{ "root": true, "rules": { "semi": "warn" } }"#,
        );
        create_temp_config(&leaf, ".lintrc.json", r#"{ "rules": { "eqeqeq": "error" } }"#);

        let loaded = ConfigLoader::load(None, Some(leaf.as_path())).unwrap();
        assert_eq!(loaded.ancestors.len(), 1);
        assert!(loaded.descriptor.rules.contains_key("eqeqeq"));
        assert!(loaded.descriptor.rules.contains_key("semi"));
        // The config above the root marker is never consulted
        assert!(!loaded.descriptor.rules.contains_key("no-var"));
    }

    #[test]
    fn test_explicit_path_skips_cascade() {
        let temp_dir = TempDir::new().unwrap();
        let app = temp_dir.path().join("app");
        fs::create_dir_all(&app).unwrap();

        create_temp_config(
            temp_dir.path(),
            ".lintrc.json",
            r#"{ "rules": { "no-console": "warn" } }"#,
        );
        let child = create_temp_config(&app, ".lintrc.json", r#"{ "rules": { "semi": "warn" } }"#);

        let loaded = ConfigLoader::load(Some(child.as_path()), None).unwrap();
        assert!(loaded.ancestors.is_empty());
        assert!(!loaded.descriptor.rules.contains_key("no-console"));
    }
}
