//! Shared string utilities for code generation.

/// Upper-case the first character, leaving the rest untouched
/// (e.g., "attachment" -> "Attachment", "iUser" -> "IUser").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}
