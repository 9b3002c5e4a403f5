//! lintrc Core
//!
//! Loading, validation, and per-file resolution of lintrc configuration
//! descriptors. The linting itself belongs to the embedding tool; this crate
//! owns the configuration contract: which config files apply to a project,
//! which presets and plugins they pull in, and what the effective rule set,
//! parser, and globals are for any given file.

pub mod catalog;
pub mod config;
pub mod error;
pub mod resolver;
pub mod result;

// Re-export commonly used types
pub use catalog::{CatalogManifest, Environment, Plugin, Preset, RuleCatalog, RuleDefinition};
pub use config::{
    CONFIG_FILE_NAMES, ConfigDescriptor, ConfigLoader, LoadedConfig, OverrideBlock, RuleEntry,
    SCHEMA_URL, Severity, descriptor_schema,
};
pub use error::{ErrorKind, LintrcError};
pub use resolver::{DEFAULT_PARSER, EffectiveConfig, Resolver};
pub use result::Result;

/// Initialize the tracing subscriber for logging
pub fn init_tracing() {
    init_tracing_with("lintrc_core=info,lintrc_cli=info");
}

/// Initialize tracing with fallback filter directives
///
/// `RUST_LOG` wins when set; otherwise `default_directives` applies.
pub fn init_tracing_with(default_directives: &str) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
