//! Leaf type vocabulary.

use std::fmt;

/// Primitive kinds a type can normalize to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Number,
    String,
    Boolean,
    Bigint,
    Null,
    Function,
}

impl PrimitiveKind {
    /// Parse a TypeScript keyword (`Function` included).
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "number" => Self::Number,
            "string" => Self::String,
            "boolean" => Self::Boolean,
            "bigint" => Self::Bigint,
            "null" => Self::Null,
            "Function" => Self::Function,
            _ => return None,
        })
    }

    /// The keyword spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Bigint => "bigint",
            Self::Null => "null",
            Self::Function => "function",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A literal type's value.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Boolean(bool),
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "'{}'", s),
            Self::Number(n) => write!(f, "{}", n),
            Self::Boolean(b) => write!(f, "{}", b),
        }
    }
}
