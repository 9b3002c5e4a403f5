//! Configuration system for lintrc
//!
//! This module owns the descriptor dialect and how files carrying it are
//! found and combined:
//! - JSON/JSONC, YAML, and TOML configuration file support
//! - Auto-discovery by traversing up directories, stopping at `root: true`
//! - Cascade merging where the nearest file wins per key
//! - Hand-written JSON Schema for editor validation
//!
//! ## Configuration Files
//!
//! Discovery probes each directory for, in order: `.lintrc.json`,
//! `.lintrc.yaml`, `.lintrc.yml`, `.lintrc.toml`, `lintrc.json`. The `.json`
//! forms are parsed as JSONC, so comments and trailing commas are fine.
//!
//! ## Example Configuration
//!
//! ```jsonc
//! {
//!   "$schema": "https://lintrc.dev/schema/v1.json",
//!   "root": true,
//!   "extends": ["recommended", "formatter-compat"],
//!   "parser": "typescript",
//!   "plugins": ["import"],
//!   "env": { "browser": true, "node": true, "es6": true },
//!   "rules": {
//!     "no-console": "warn",
//!     "eqeqeq": ["error", "always"]
//!   },
//!   "overrides": [
//!     {
//!       "files": ["*.test.js"],
//!       "env": { "jest": true },
//!       "rules": { "no-console": "off" }
//!     }
//!   ]
//! }
//! ```
//!
//! What those names mean is not decided here: the descriptor only refers to
//! presets, plugins, parsers, and environments, and [`crate::catalog`]
//! defines them. [`crate::resolver`] joins the two.

mod descriptor;
mod loader;
mod merge;
mod schema;

// Re-export main types
pub use descriptor::{ConfigDescriptor, OverrideBlock, RuleEntry, Severity};
pub use loader::{CONFIG_FILE_NAMES, ConfigLoader, LoadedConfig};
pub use schema::{SCHEMA_URL, descriptor_schema};
