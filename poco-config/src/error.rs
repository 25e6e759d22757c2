use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error with an optional span.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Create an invalid connection name error.
    pub fn invalid_name_error(
        &self,
        name: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidConnectionName {
            src: self.named_source(),
            span,
            name: name.into(),
            reason: reason.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help(
        "create it with a [connections.<name>] table holding a provider and a connection_string"
    ))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration")]
    #[diagnostic(code(poco::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(poco::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid connection name '{name}'")]
    #[diagnostic(
        code(poco::invalid_name),
        help("{reason}. Connection names are used as directory and namespace names.")
    )]
    InvalidConnectionName {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid name")]
        span: Option<SourceSpan>,
        name: String,
        reason: String,
    },

    #[error("connection '{name}' is not configured")]
    #[diagnostic(code(poco::unknown_connection), help("configured connections: {available}"))]
    UnknownConnection { name: String, available: String },

    #[error("no connections are configured")]
    #[diagnostic(
        code(poco::no_connections),
        help("add a [connections.<name>] table to the configuration file")
    )]
    NoConnections,

    #[error("a connection name is required when more than one connection is configured")]
    #[diagnostic(
        code(poco::ambiguous_connection),
        help("pass one of: {available}")
    )]
    AmbiguousConnection { available: String },

    #[error("environment variable '{var}' for connection '{connection}' is not set")]
    #[diagnostic(code(poco::missing_env))]
    MissingEnv { connection: String, var: String },
}
