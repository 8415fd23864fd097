//! Shared helper routines emitted at the top of a generated unit.

use shapegen_codegen::builder::CodeStream;

use crate::ast::{Fn, Param};

/// A helper function generated code may call.
///
/// The derived ordering is the order helpers are defined in a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Helper {
    IsUnknownObject,
    ValidateVector,
}

impl Helper {
    /// Identifier the helper is defined and called by.
    pub fn id(&self) -> &'static str {
        match self {
            Self::IsUnknownObject => "isUnknownObject",
            Self::ValidateVector => "validateVector",
        }
    }

    /// Write the helper's definition.
    pub fn write(&self, out: &mut CodeStream) {
        match self {
            Self::IsUnknownObject => Fn::new(self.id())
                .private()
                .param(Param::new("value", "unknown"))
                .returns("value is Record<string,unknown>")
                .write(out, |out| {
                    out.write("return typeof value === 'object' && value !== null;\n");
                }),
            Self::ValidateVector => Fn::new(self.id())
                .private()
                .generic("T")
                .param(Param::new("value", "unknown"))
                .param(Param::new("validate", "(val: unknown) => boolean"))
                .returns("value is T[]")
                .write(out, |out| {
                    out.write("if(!Array.isArray(value)) return false;\n");
                    out.write("for(const i of value) if(!validate(i)) return false;\n");
                    out.write("return true;\n");
                }),
        }
    }
}
