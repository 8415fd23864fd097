//! Validation utilities for TypeScript identifiers

use std::{collections::HashMap, ops::Range};

use miette::SourceSpan;
use toml::Spanned;

use crate::{Result, error::SourceContext};

/// Validation context that carries source information.
///
/// Wraps the [`SourceContext`] with the current path through the manifest
/// (unit path, declaration name) so errors can say where they happened.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(&source);
/// let unit = ctx.push("test/User.ts");
/// unit.validate_name(&declaration.name, "declaration")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    source: &'a SourceContext,
    /// Path segments for nested validation (e.g., ["test/User.ts", "IUser"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(source: &'a SourceContext) -> Self {
        Self {
            source,
            path: Vec::new(),
        }
    }

    pub fn source(&self) -> &'a SourceContext {
        self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: self.source,
            path,
        }
    }

    /// Get the current path joined with `: `.
    pub fn path_string(&self) -> String {
        self.path.join(": ")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "member in 'test/User.ts: IUser'" or just "unit" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Validate that a spanned name is a usable TypeScript identifier.
    pub fn validate_name(&self, name: &Spanned<String>, kind: &str) -> Result<()> {
        let span = Some(to_span(name.span()));

        if is_reserved_word(name.get_ref()) {
            return Err(self
                .source
                .reserved_keyword_error(name.get_ref(), self.context_for(kind), span));
        }

        if let Some(reason) = validate_identifier(name.get_ref()) {
            return Err(self.source.invalid_identifier_error(
                name.get_ref(),
                self.context_for(kind),
                reason,
                span,
            ));
        }

        Ok(())
    }
}

/// Tracks first occurrences of names within one scope.
#[derive(Debug, Default)]
pub struct UniqueNames<'a> {
    seen: HashMap<&'a str, Range<usize>>,
}

impl<'a> UniqueNames<'a> {
    /// Record a name, failing if it was already recorded.
    pub fn insert(
        &mut self,
        source: &SourceContext,
        kind: &str,
        name: &'a Spanned<String>,
    ) -> Result<()> {
        if let Some(first) = self.seen.get(name.get_ref().as_str()) {
            return Err(source.duplicate_error(
                kind,
                name.get_ref(),
                to_span(first.clone()),
                to_span(name.span()),
            ));
        }
        self.seen.insert(name.get_ref().as_str(), name.span());
        Ok(())
    }
}

pub(crate) fn to_span(range: Range<usize>) -> SourceSpan {
    SourceSpan::from(range)
}

/// Words that cannot name a declaration in a TypeScript module.
/// Source: ECMAScript reserved words plus strict-mode and TypeScript type keywords
pub(crate) const RESERVED_WORDS: &[&str] = &[
    // Reserved words
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "enum", "export", "extends", "false", "finally", "for", "function", "if", "import",
    "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw", "true", "try",
    "typeof", "var", "void", "while", "with",
    // Strict mode reserved words
    "implements", "interface", "let", "package", "private", "protected", "public", "static",
    "yield", "await",
    // Predefined type names
    "any", "boolean", "never", "number", "object", "string", "symbol", "undefined", "unknown",
    "bigint",
];

pub(crate) fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Validate that a name is a valid TypeScript identifier.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }

    if is_reserved_word(name) {
        return Some("name is a TypeScript reserved word");
    }

    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        Some(_) => return Some("name must start with a letter, underscore or '$'"),
        None => return Some("name cannot be empty"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
        return Some("name must contain only letters, numbers, underscores and '$'");
    }

    None
}
