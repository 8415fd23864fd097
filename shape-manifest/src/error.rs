use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
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

    /// Create a duplicate-name error pointing at both occurrences.
    pub fn duplicate_error(
        &self,
        kind: impl Into<String>,
        name: impl Into<String>,
        first_span: SourceSpan,
        second_span: SourceSpan,
    ) -> Box<Error> {
        Box::new(Error::Duplicate {
            src: self.named_source(),
            first_span,
            second_span,
            kind: kind.into(),
            name: name.into(),
        })
    }

    /// Create a reserved keyword error.
    pub fn reserved_keyword_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::ReservedKeyword {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
        })
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    /// Create a type expression error.
    pub fn type_error(
        &self,
        ty: impl Into<String>,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::TypeExpression {
            src: self.named_source(),
            span,
            ty: ty.into(),
            message: message.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass --manifest <FILE> or create a shapes.toml in the current directory"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest")]
    #[diagnostic(code(shapegen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("duplicate {kind} '{name}'")]
    #[diagnostic(
        code(shapegen::duplicate),
        help("each {kind} must be declared once; remove or rename one of them")
    )]
    Duplicate {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: SourceSpan,
        #[label("declared again here")]
        second_span: SourceSpan,
        kind: String,
        name: String,
    },

    #[error("invalid type expression '{ty}'")]
    #[diagnostic(
        code(shapegen::invalid_type),
        help(
            "supported: number, string, boolean, bigint, null, Function, literals, T[], Array<T>, unions, {{ a: T }} objects, (..) => T and named types"
        )
    )]
    TypeExpression {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        ty: String,
        message: String,
    },

    #[error("{message}")]
    #[diagnostic(code(shapegen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("'{name}' is a reserved word")]
    #[diagnostic(help("rename '{name}'; {context} names become TypeScript identifiers"))]
    ReservedKeyword {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved word used here")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(help(
        "{reason}. Use only letters, numbers, underscores and '$', not starting with a number."
    ))]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },
}
