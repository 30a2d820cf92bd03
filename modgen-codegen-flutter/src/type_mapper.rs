//! Dart type mapper implementation.

use modgen_codegen::{TypeMapper, TypeTable};
use modgen_core::{FieldParser, Stack};

/// Suffix turning a Dart value into its JSON form. Unlisted types encode as-is.
pub const JSON_ENCODERS: TypeTable = TypeTable::new(
    "json encoder",
    &[
        ("DateTime", ".toIso8601String()"),
        ("Uri", ".toString()"),
        ("Duration", ".inMilliseconds"),
    ],
    "",
);

/// Dart type mapper implementation.
#[derive(Debug, Clone, Copy)]
pub struct DartTypeMapper {
    encoders: TypeTable,
}

impl DartTypeMapper {
    pub fn new() -> Self {
        Self {
            encoders: JSON_ENCODERS,
        }
    }
}

impl Default for DartTypeMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeMapper for DartTypeMapper {
    fn stack(&self) -> Stack {
        Stack::Flutter
    }

    fn string_type(&self) -> &'static str {
        "String"
    }

    fn map_type(&self, ty: &str) -> &'static str {
        self.encoders.lookup(ty)
    }

    fn nullable_type(&self, ty: &str) -> String {
        if ty.ends_with('?') {
            ty.to_string()
        } else {
            format!("{}?", ty)
        }
    }
}

/// Dart field parser: untyped fields are `String`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DartFieldParser;

impl FieldParser for DartFieldParser {
    fn default_type(&self) -> &'static str {
        "String"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_encoders() {
        let mapper = DartTypeMapper::new();

        assert_eq!(mapper.map_type("DateTime"), ".toIso8601String()");
        assert_eq!(mapper.map_type("Duration"), ".inMilliseconds");
        assert_eq!(mapper.map_type("int"), "");
        assert_eq!(mapper.map_type("String"), "");
    }

    #[test]
    fn test_nullable_type() {
        let mapper = DartTypeMapper::new();

        assert_eq!(mapper.nullable_type("int"), "int?");
        assert_eq!(mapper.nullable_type("int?"), "int?");
    }

    #[test]
    fn test_default_type_is_capitalized() {
        let fields = DartFieldParser.parse("title,views:int");

        assert_eq!(fields[0].ty, "String");
        assert_eq!(fields[1].ty, "int");
    }
}
