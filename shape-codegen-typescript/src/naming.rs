//! TypeScript spelling of generated names and literals.

use shapegen_ir::{LiteralValue, PrimitiveKind};

/// Name of the generated factory for `type_name`.
pub fn factory_name(type_name: &str) -> String {
    format!("create{}", type_name)
}

/// Name of the generated type guard for `type_name`.
pub fn guard_name(type_name: &str) -> String {
    format!("is{}", type_name)
}

/// Double-quoted string literal with JSON escaping.
pub fn string_literal(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// Number literal as TypeScript spells it (`3`, not `3.0`).
pub fn number_literal(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let spelled = if value > 0.0 { "Infinity" } else { "-Infinity" };
        spelled.to_string()
    } else {
        value.to_string()
    }
}

/// Expression for a literal type's value.
pub fn literal_expression(value: &LiteralValue) -> String {
    match value {
        LiteralValue::String(s) => string_literal(s),
        LiteralValue::Number(n) => number_literal(*n),
        LiteralValue::Boolean(b) => b.to_string(),
    }
}

/// Zero value a factory uses for a primitive member.
pub fn zero_value(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::Number => "0",
        PrimitiveKind::String => "''",
        PrimitiveKind::Boolean => "false",
        PrimitiveKind::Bigint => "BigInt(0)",
        PrimitiveKind::Null => "null",
        PrimitiveKind::Function => "() => {}",
    }
}

/// `accessor['name']`, with the name escaped for a single-quoted string.
/// Line terminators are escaped too.
pub fn property_accessor(accessor: &str, name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            other => escaped.push(other),
        }
    }
    format!("{}['{}']", accessor, escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_names() {
        assert_eq!(factory_name("IUser"), "createIUser");
        assert_eq!(guard_name("IUser"), "isIUser");
    }

    #[test]
    fn test_string_literal_escapes() {
        assert_eq!(string_literal("ok"), "\"ok\"");
        assert_eq!(string_literal("say \"hi\""), "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn test_number_literal() {
        assert_eq!(number_literal(3.0), "3");
        assert_eq!(number_literal(-0.5), "-0.5");
        assert_eq!(number_literal(f64::INFINITY), "Infinity");
    }

    #[test]
    fn test_property_accessor() {
        assert_eq!(property_accessor("value", "fileId"), "value['fileId']");
        assert_eq!(property_accessor("value['a']", "it's"), "value['a']['it\\'s']");
    }

    #[test]
    fn test_property_accessor_escapes_line_terminators() {
        assert_eq!(property_accessor("value", "a\r\nb"), "value['a\\r\\nb']");
        assert_eq!(
            property_accessor("value", "x\u{2028}y\u{2029}z"),
            "value['x\\u2028y\\u2029z']"
        );
    }

    #[test]
    fn test_zero_values() {
        assert_eq!(zero_value(PrimitiveKind::String), "''");
        assert_eq!(zero_value(PrimitiveKind::Bigint), "BigInt(0)");
        assert_eq!(zero_value(PrimitiveKind::Function), "() => {}");
    }
}
