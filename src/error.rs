//! Unified error types for ehr-compliance.
//!
//! The wizard itself never fails: blocked transitions are policy outcomes,
//! not errors. The types here cover the surrounding application: loading
//! catalogs and config files, generating and writing reports.

use crate::config::ConfigFileError;
use crate::reports::ReportError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ehr-compliance operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ComplianceError {
    /// Errors while loading or validating a layer catalog
    #[error("Invalid layer catalog: {context}")]
    Catalog {
        context: String,
        #[source]
        source: CatalogErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportError,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// An explicitly requested config file is missing or unreadable
    #[error("Invalid configuration: {context}")]
    Config {
        context: String,
        #[source]
        source: ConfigFileError,
    },

    /// Merged configuration values that failed validation
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific catalog error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CatalogErrorKind {
    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),

    #[error("Expected {expected} layers, found {found}")]
    LayerCount { expected: usize, found: usize },

    #[error("{}", .0.join("; "))]
    Invalid(Vec<String>),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for ehr-compliance operations
pub type Result<T> = std::result::Result<T, ComplianceError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl ComplianceError {
    /// Create a catalog error with context
    pub fn catalog(context: impl Into<String>, source: CatalogErrorKind) -> Self {
        Self::Catalog {
            context: context.into(),
            source,
        }
    }

    /// Create a report error with context
    pub fn report(context: impl Into<String>, source: ReportError) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config file error with context
    pub fn config(context: impl Into<String>, source: ConfigFileError) -> Self {
        Self::Config {
            context: context.into(),
            source,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for ComplianceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<ReportError> for ComplianceError {
    fn from(err: ReportError) -> Self {
        Self::report(String::new(), err)
    }
}

impl From<ConfigFileError> for ComplianceError {
    fn from(err: ConfigFileError) -> Self {
        Self::config(String::new(), err)
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context is prepended to any existing context, so a chain reads from the
/// outermost operation inwards: `"loading catalog x.yaml: validating layers"`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<ComplianceError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: ComplianceError, new_ctx: &str) -> ComplianceError {
    match err {
        ComplianceError::Catalog {
            context: existing,
            source,
        } => ComplianceError::Catalog {
            context: chain_context(new_ctx, &existing),
            source,
        },
        ComplianceError::Report {
            context: existing,
            source,
        } => ComplianceError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        ComplianceError::Io {
            path,
            message,
            source,
        } => ComplianceError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        ComplianceError::Config {
            context: existing,
            source,
        } => ComplianceError::Config {
            context: chain_context(new_ctx, &existing),
            source,
        },
        ComplianceError::Validation(msg) => {
            ComplianceError::Validation(chain_context(new_ctx, &msg))
        }
    }
}

/// Join two context strings as `"new: existing"`, or just `new` when empty.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
