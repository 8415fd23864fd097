//! Import collection utilities.

use indexmap::{IndexMap, IndexSet};

/// Tracks imported symbols per module and deduplicates them.
///
/// Both modules and the symbols within a module keep first-insertion
/// order, so output is deterministic and follows the order in which
/// the generator first needed each name.
///
/// # Example
///
/// ```
/// use shapegen_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("./Attachment", "IAttachment");
/// imports.add("./Attachment", "ITest");
/// imports.add("./Attachment", "IAttachment");
///
/// let (module, symbols) = imports.iter().next().unwrap();
/// assert_eq!(module, "./Attachment");
/// assert_eq!(symbols.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportCollector {
    imports: IndexMap<String, IndexSet<String>>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a module.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Add several symbols from one module.
    pub fn add_all<'a>(&mut self, module: &str, symbols: impl IntoIterator<Item = &'a str>) {
        let entry = self.imports.entry(module.to_string()).or_default();
        entry.extend(symbols.into_iter().map(str::to_string));
    }

    /// Merge another collector into this one.
    pub fn merge(&mut self, other: &ImportCollector) {
        for (module, symbols) in &other.imports {
            let entry = self.imports.entry(module.clone()).or_default();
            entry.extend(symbols.iter().cloned());
        }
    }

    /// Check if a module is already imported.
    pub fn has_module(&self, module: &str) -> bool {
        self.imports.contains_key(module)
    }

    /// Check if a specific symbol is imported from a module.
    pub fn has_symbol(&self, module: &str, symbol: &str) -> bool {
        self.imports
            .get(module)
            .is_some_and(|symbols| symbols.contains(symbol))
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Get the number of modules.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_collector_basic() {
        let mut imports = ImportCollector::new();
        imports.add("./User", "IUser");
        imports.add("./User", "IPost");
        imports.add("./Attachment", "IAttachment");

        assert!(imports.has_module("./User"));
        assert!(imports.has_symbol("./User", "IPost"));
        assert!(!imports.has_symbol("./User", "IComment"));
        assert_eq!(imports.len(), 2);
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut imports = ImportCollector::new();
        imports.add_all("./b", ["Z", "A"]);
        imports.add("./a", "M");
        imports.add("./b", "Z");

        let modules: Vec<&str> = imports.iter().map(|(m, _)| m).collect();
        assert_eq!(modules, ["./b", "./a"]);
        let symbols: Vec<&str> = imports.iter().next().unwrap().1.iter().map(String::as_str).collect();
        assert_eq!(symbols, ["Z", "A"]);
    }

    #[test]
    fn test_import_collector_merge() {
        let mut a = ImportCollector::new();
        a.add("./User", "IUser");

        let mut b = ImportCollector::new();
        b.add("./User", "IPost");
        b.add("./Attachment", "IAttachment");

        a.merge(&b);

        assert!(a.has_symbol("./User", "IUser"));
        assert!(a.has_symbol("./User", "IPost"));
        assert!(a.has_module("./Attachment"));
    }
}
