//! Error types and handling for configuration operations

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for configuration loading and resolution
#[derive(Debug, Error)]
pub enum LintrcError {
    /// Syntax errors from the JSON/JSONC/YAML/TOML parsers
    #[error("Failed to parse '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An `extends` entry names a preset the catalog does not define
    #[error("Unknown preset '{name}' referenced in extends ({path})")]
    UnknownPreset { name: String, path: PathBuf },

    /// A `plugins` entry names a plugin the catalog does not define
    #[error("Unknown plugin '{name}' ({path})")]
    UnknownPlugin { name: String, path: PathBuf },

    /// The `parser` field names a parser the catalog does not define
    #[error("Unknown parser '{name}' ({path})")]
    UnknownParser { name: String, path: PathBuf },

    /// An `env` key names an environment the catalog does not define
    #[error("Unknown environment '{name}' ({path})")]
    UnknownEnvironment { name: String, path: PathBuf },

    /// A rule key has no definition among core rules and loaded plugins
    #[error("Definition for rule '{rule}' was not found ({path})")]
    RuleNotFound { rule: String, path: PathBuf },

    /// An override `files`/`excludedFiles` pattern failed to compile
    #[error("Invalid glob pattern '{pattern}' ({path}): {message}")]
    InvalidGlob {
        pattern: String,
        path: PathBuf,
        message: String,
    },

    /// Catalog manifest loading or validation errors
    #[error("Catalog manifest error in '{path}': {message}")]
    ManifestError { path: PathBuf, message: String },

    /// Configuration loading or validation errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    Io,
    Resolve,
    Manifest,
    Config,
}

impl LintrcError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            LintrcError::ParseError { .. } => ErrorKind::Parse,
            LintrcError::IoError { .. } => ErrorKind::Io,
            LintrcError::UnknownPreset { .. } => ErrorKind::Resolve,
            LintrcError::UnknownPlugin { .. } => ErrorKind::Resolve,
            LintrcError::UnknownParser { .. } => ErrorKind::Resolve,
            LintrcError::UnknownEnvironment { .. } => ErrorKind::Resolve,
            LintrcError::RuleNotFound { .. } => ErrorKind::Resolve,
            LintrcError::InvalidGlob { .. } => ErrorKind::Resolve,
            LintrcError::ManifestError { .. } => ErrorKind::Manifest,
            LintrcError::ConfigError { .. } => ErrorKind::Config,
        }
    }

    /// Check if this error names an identifier unknown to the rule catalog
    pub fn is_resolve_error(&self) -> bool {
        self.kind() == ErrorKind::Resolve
    }

    /// Create a parse error with file context
    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    /// Create a catalog manifest error
    pub fn manifest_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ManifestError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }
}

/// Convert from std::io::Error
impl From<std::io::Error> for LintrcError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            path: PathBuf::new(),
            source: err,
        }
    }
}
