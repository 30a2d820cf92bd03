//! Type mapping between field type tokens and stack representations.

use modgen_core::Stack;

/// Static lookup from a source type token to a target representation.
///
/// Lookups never fail: unknown tokens resolve to the table's fallback so a
/// renderer always has something to emit.
#[derive(Debug, Clone, Copy)]
pub struct TypeTable {
    label: &'static str,
    entries: &'static [(&'static str, &'static str)],
    fallback: &'static str,
}

impl TypeTable {
    pub const fn new(
        label: &'static str,
        entries: &'static [(&'static str, &'static str)],
        fallback: &'static str,
    ) -> Self {
        Self {
            label,
            entries,
            fallback,
        }
    }

    /// What the table maps to (e.g., "gorm column type").
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Map `ty`, falling back to the table default for unknown tokens.
    pub fn lookup(&self, ty: &str) -> &'static str {
        self.get(ty).unwrap_or(self.fallback)
    }

    /// Map `ty` only if the table knows it.
    pub fn get(&self, ty: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(source, _)| *source == ty)
            .map(|(_, target)| *target)
    }

    pub fn contains(&self, ty: &str) -> bool {
        self.get(ty).is_some()
    }

    pub fn fallback(&self) -> &'static str {
        self.fallback
    }

    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }
}

/// Trait for mapping field type tokens to stack-specific spellings.
///
/// Implement this trait for each target stack.
pub trait TypeMapper: Send + Sync {
    /// The target stack
    fn stack(&self) -> Stack;

    /// The stack's plain string type; also the type of untyped fields
    fn string_type(&self) -> &'static str;

    /// Map a field type to its storage or wire representation
    fn map_type(&self, ty: &str) -> &'static str;

    /// Spelling of `ty` when the value may be absent (e.g., `*string` in Go)
    fn nullable_type(&self, ty: &str) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLORS: TypeTable = TypeTable::new(
        "css color",
        &[("red", "#f00"), ("green", "#0f0")],
        "#000",
    );

    #[test]
    fn test_lookup_known() {
        assert_eq!(COLORS.lookup("red"), "#f00");
        assert_eq!(COLORS.get("green"), Some("#0f0"));
        assert!(COLORS.contains("red"));
    }

    #[test]
    fn test_lookup_unknown_falls_back() {
        assert_eq!(COLORS.lookup("purple"), "#000");
        assert_eq!(COLORS.lookup(""), "#000");
        assert_eq!(COLORS.get("purple"), None);
        assert!(!COLORS.contains("Red"));
    }

    #[test]
    fn test_metadata() {
        assert_eq!(COLORS.label(), "css color");
        assert_eq!(COLORS.fallback(), "#000");
        assert_eq!(COLORS.entries().len(), 2);
    }
}
