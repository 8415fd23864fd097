//! Indentation configuration for code generation.

use std::{cell::Cell, rc::Rc};

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation, the generator's default.
    pub const TYPESCRIPT: Self = Self::Spaces(4);

    /// Indentation from a configured width; `0` selects tabs.
    pub fn from_width(width: u8) -> Self {
        match width {
            0 => Self::Tab,
            n => Self::Spaces(n),
        }
    }

    /// The string for one indent level.
    pub fn unit(&self) -> String {
        match self {
            Self::Spaces(n) => " ".repeat(usize::from(*n)),
            Self::Tab => "\t".to_string(),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}

/// Indentation state shared by a stream and every child derived from it.
///
/// Cloning shares the depth: raising it through one handle is visible
/// through all the others.
#[derive(Debug, Clone)]
pub struct IndentContext {
    depth: Rc<Cell<usize>>,
    unit: Rc<str>,
}

impl IndentContext {
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: Rc::new(Cell::new(0)),
            unit: Rc::from(indent.unit()),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth.get()
    }

    pub fn increase(&self) {
        self.depth.set(self.depth.get() + 1);
    }

    pub fn decrease(&self) {
        self.depth.set(self.depth.get().saturating_sub(1));
    }

    /// Whitespace for the current depth.
    pub fn prefix(&self) -> String {
        self.unit.repeat(self.depth.get())
    }
}

impl Default for IndentContext {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_unit() {
        assert_eq!(Indent::Spaces(2).unit(), "  ");
        assert_eq!(Indent::Spaces(4).unit(), "    ");
        assert_eq!(Indent::Tab.unit(), "\t");
    }

    #[test]
    fn test_from_width() {
        assert_eq!(Indent::from_width(0), Indent::Tab);
        assert_eq!(Indent::from_width(2), Indent::Spaces(2));
        assert_eq!(Indent::default(), Indent::Spaces(4));
    }

    #[test]
    fn test_context_depth_is_shared() {
        let a = IndentContext::new(Indent::Spaces(2));
        let b = a.clone();
        a.increase();
        a.increase();
        assert_eq!(b.depth(), 2);
        assert_eq!(b.prefix(), "    ");
        b.decrease();
        b.decrease();
        b.decrease();
        assert_eq!(a.depth(), 0);
    }
}
