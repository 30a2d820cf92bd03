//! TypeScript type mapper implementation.

use modgen_codegen::{TypeMapper, TypeTable};
use modgen_core::{FieldParser, Stack};

/// HTML `<input type>` keyed by TypeScript type.
pub const FORM_INPUTS: TypeTable = TypeTable::new(
    "form input type",
    &[
        ("string", "text"),
        ("number", "number"),
        ("boolean", "checkbox"),
        ("Date", "date"),
    ],
    "text",
);

/// TypeScript type mapper implementation.
#[derive(Debug, Clone, Copy)]
pub struct TypeScriptTypeMapper {
    inputs: TypeTable,
}

impl TypeScriptTypeMapper {
    pub fn new() -> Self {
        Self {
            inputs: FORM_INPUTS,
        }
    }
}

impl Default for TypeScriptTypeMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeMapper for TypeScriptTypeMapper {
    fn stack(&self) -> Stack {
        Stack::React
    }

    fn string_type(&self) -> &'static str {
        "string"
    }

    fn map_type(&self, ty: &str) -> &'static str {
        self.inputs.lookup(ty)
    }

    fn nullable_type(&self, ty: &str) -> String {
        if ty.ends_with(" | null") {
            ty.to_string()
        } else {
            format!("{} | null", ty)
        }
    }
}

/// TypeScript field parser: untyped fields are `string`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptFieldParser;

impl FieldParser for TypeScriptFieldParser {
    fn default_type(&self) -> &'static str {
        "string"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_inputs() {
        let mapper = TypeScriptTypeMapper::new();

        assert_eq!(mapper.map_type("string"), "text");
        assert_eq!(mapper.map_type("number"), "number");
        assert_eq!(mapper.map_type("boolean"), "checkbox");
        assert_eq!(mapper.map_type("Date"), "date");
        assert_eq!(mapper.map_type("string[]"), "text");
    }

    #[test]
    fn test_nullable_type() {
        let mapper = TypeScriptTypeMapper::new();

        assert_eq!(mapper.nullable_type("number"), "number | null");
        assert_eq!(mapper.nullable_type("number | null"), "number | null");
    }
}
