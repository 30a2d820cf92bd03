//! Go type mapper implementation.

use modgen_codegen::{TypeMapper, TypeTable};
use modgen_core::{FieldParser, Stack};

/// GORM column types keyed by Go type.
pub const GORM_COLUMNS: TypeTable = TypeTable::new(
    "gorm column type",
    &[
        ("string", "varchar(255)"),
        ("*string", "varchar(255)"),
        ("int", "int"),
        ("int32", "int"),
        ("int64", "bigint"),
        ("*int", "int"),
        ("*int64", "bigint"),
        ("float32", "float"),
        ("float64", "double"),
        ("bool", "boolean"),
        ("*bool", "boolean"),
        ("time.Time", "datetime"),
    ],
    "varchar(255)",
);

/// Go type mapper implementation.
#[derive(Debug, Clone, Copy)]
pub struct GoTypeMapper {
    columns: TypeTable,
}

impl GoTypeMapper {
    pub fn new() -> Self {
        Self {
            columns: GORM_COLUMNS,
        }
    }

    pub fn columns(&self) -> &TypeTable {
        &self.columns
    }
}

impl Default for GoTypeMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeMapper for GoTypeMapper {
    fn stack(&self) -> Stack {
        Stack::Go
    }

    fn string_type(&self) -> &'static str {
        "string"
    }

    fn map_type(&self, ty: &str) -> &'static str {
        self.columns.lookup(ty)
    }

    fn nullable_type(&self, ty: &str) -> String {
        if ty.starts_with('*') {
            ty.to_string()
        } else {
            format!("*{}", ty)
        }
    }
}

/// Go field parser: untyped fields are `string`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoFieldParser;

impl FieldParser for GoFieldParser {
    fn default_type(&self) -> &'static str {
        "string"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gorm_columns() {
        let mapper = GoTypeMapper::new();

        assert_eq!(mapper.map_type("string"), "varchar(255)");
        assert_eq!(mapper.map_type("int32"), "int");
        assert_eq!(mapper.map_type("int64"), "bigint");
        assert_eq!(mapper.map_type("*int64"), "bigint");
        assert_eq!(mapper.map_type("float64"), "double");
        assert_eq!(mapper.map_type("*bool"), "boolean");
        assert_eq!(mapper.map_type("time.Time"), "datetime");
    }

    #[test]
    fn test_unknown_type_falls_back() {
        let mapper = GoTypeMapper::new();

        assert_eq!(mapper.map_type("uuid.UUID"), "varchar(255)");
        assert_eq!(mapper.map_type("[]byte"), "varchar(255)");
    }

    #[test]
    fn test_nullable_type_is_idempotent() {
        let mapper = GoTypeMapper::new();

        assert_eq!(mapper.nullable_type("int64"), "*int64");
        assert_eq!(mapper.nullable_type("*int64"), "*int64");
    }

    #[test]
    fn test_field_parser_default() {
        let fields = GoFieldParser.parse("name,price:int64?");

        assert_eq!(fields[0].ty, "string");
        assert_eq!(fields[1].ty, "int64");
        assert!(!fields[1].required);
    }
}
