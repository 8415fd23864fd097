//! Structural checks run after deserialization.

use super::{AliasSpec, DeclarationSpec, Manifest, UnitSpec};
use crate::{
    Result,
    error::SourceContext,
    validate::{ParseContext, UniqueNames, to_span},
};

/// Validate the manifest after parsing.
pub(super) fn validate_manifest(manifest: &Manifest, source: &SourceContext) -> Result<()> {
    let ctx = ParseContext::new(source);

    let mut paths = UniqueNames::default();
    for unit in &manifest.units {
        if unit.path.get_ref().trim().is_empty() {
            return Err(source.validation_error(
                "unit path cannot be empty",
                Some(to_span(unit.path.span())),
            ));
        }
        paths.insert(source, "unit", &unit.path)?;
        unit.validate(&ctx.push(unit.path.get_ref()))?;
    }
    Ok(())
}

impl UnitSpec {
    /// Declaration names must be unique within a unit regardless of kind.
    fn validate(&self, ctx: &ParseContext<'_>) -> Result<()> {
        let mut names = UniqueNames::default();

        for interface in &self.interfaces {
            ctx.validate_name(&interface.name, "interface")?;
            names.insert(ctx.source(), "declaration", &interface.name)?;
            interface.validate(&ctx.push(interface.name.get_ref()))?;
        }
        for class in &self.classes {
            ctx.validate_name(&class.name, "class")?;
            names.insert(ctx.source(), "declaration", &class.name)?;
            class.validate(&ctx.push(class.name.get_ref()))?;
        }
        for alias in &self.aliases {
            ctx.validate_name(&alias.name, "alias")?;
            names.insert(ctx.source(), "declaration", &alias.name)?;
            alias.validate(&ctx.push(alias.name.get_ref()))?;
        }
        Ok(())
    }
}

impl DeclarationSpec {
    fn validate(&self, ctx: &ParseContext<'_>) -> Result<()> {
        validate_type_params(&self.type_params, ctx)?;

        let mut members = UniqueNames::default();
        for member in &self.members {
            if let Some(name) = &member.name {
                members.insert(ctx.source(), "member", name)?;
            }
        }
        Ok(())
    }
}

impl AliasSpec {
    fn validate(&self, ctx: &ParseContext<'_>) -> Result<()> {
        validate_type_params(&self.type_params, ctx)
    }
}

fn validate_type_params(params: &[toml::Spanned<String>], ctx: &ParseContext<'_>) -> Result<()> {
    let mut seen = UniqueNames::default();
    for param in params {
        ctx.validate_name(param, "type parameter")?;
        seen.insert(ctx.source(), "type parameter", param)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{Error, Manifest};

    fn parse_err(src: &str) -> Box<Error> {
        src.parse::<Manifest>().unwrap_err()
    }

    #[test]
    fn test_duplicate_unit_paths() {
        let err = parse_err("[[units]]\npath = \"a.ts\"\n\n[[units]]\npath = \"a.ts\"\n");
        let Error::Duplicate {
            kind,
            first_span,
            second_span,
            ..
        } = *err
        else {
            panic!("expected duplicate error");
        };
        assert_eq!(kind, "unit");
        assert!(first_span.offset() < second_span.offset());
    }

    #[test]
    fn test_duplicate_declarations_across_kinds() {
        let err = parse_err(
            r#"
[[units]]
path = "a.ts"

[[units.interfaces]]
name = "IUser"

[[units.aliases]]
name = "IUser"
type = "string"
"#,
        );
        assert_eq!(err.to_string(), "duplicate declaration 'IUser'");
    }

    #[test]
    fn test_same_name_in_different_units() {
        let manifest: Manifest = r#"
[[units]]
path = "a.ts"

[[units.interfaces]]
name = "IUser"

[[units]]
path = "b.ts"

[[units.interfaces]]
name = "IUser"
"#
        .parse()
        .unwrap();
        assert_eq!(manifest.units.len(), 2);
    }

    #[test]
    fn test_duplicate_members() {
        let err = parse_err(
            r#"
[[units]]
path = "a.ts"

[[units.interfaces]]
name = "IUser"
members = [{ name = "id", type = "number" }, { name = "id", type = "string" }]
"#,
        );
        assert_eq!(err.to_string(), "duplicate member 'id'");
    }

    #[test]
    fn test_invalid_declaration_names() {
        let err = parse_err("[[units]]\npath = \"a.ts\"\n\n[[units.interfaces]]\nname = \"my-type\"\n");
        let Error::InvalidIdentifier { context, .. } = *err else {
            panic!("expected invalid identifier");
        };
        assert_eq!(context, "interface in 'a.ts'");

        let err = parse_err("[[units]]\npath = \"a.ts\"\n\n[[units.classes]]\nname = \"class\"\n");
        assert!(matches!(*err, Error::ReservedKeyword { .. }));
    }

    #[test]
    fn test_invalid_type_params() {
        let err = parse_err(
            "[[units]]\npath = \"a.ts\"\n\n[[units.interfaces]]\nname = \"IBox\"\ntype-params = [\"T\", \"T\"]\n",
        );
        assert_eq!(err.to_string(), "duplicate type parameter 'T'");
    }

    #[test]
    fn test_empty_unit_path() {
        let err = parse_err("[[units]]\npath = \"  \"\n");
        assert_eq!(err.to_string(), "unit path cannot be empty");
    }
}
