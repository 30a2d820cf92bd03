//! Laravel type mapper implementation.

use modgen_codegen::{TypeMapper, TypeTable};
use modgen_core::{FieldParser, Stack};

/// Schema builder column methods keyed by field type.
pub const MIGRATION_COLUMNS: TypeTable = TypeTable::new(
    "migration column",
    &[
        ("string", "string"),
        ("text", "text"),
        ("integer", "integer"),
        ("bigInteger", "bigInteger"),
        ("float", "float"),
        ("double", "double"),
        ("decimal", "decimal"),
        ("boolean", "boolean"),
        ("date", "date"),
        ("datetime", "dateTime"),
        ("timestamp", "timestamp"),
        ("json", "json"),
    ],
    "string",
);

/// Eloquent attribute casts. Types missing here are not cast.
pub const MODEL_CASTS: TypeTable = TypeTable::new(
    "model cast",
    &[
        ("boolean", "boolean"),
        ("integer", "integer"),
        ("float", "float"),
        ("array", "array"),
        ("json", "json"),
    ],
    "string",
);

/// Laravel type mapper implementation.
#[derive(Debug, Clone, Copy)]
pub struct LaravelTypeMapper {
    columns: TypeTable,
    casts: TypeTable,
}

impl LaravelTypeMapper {
    pub fn new() -> Self {
        Self {
            columns: MIGRATION_COLUMNS,
            casts: MODEL_CASTS,
        }
    }

    /// Eloquent cast for `ty`, if it has one.
    pub fn cast(&self, ty: &str) -> Option<&'static str> {
        self.casts.get(ty)
    }
}

impl Default for LaravelTypeMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeMapper for LaravelTypeMapper {
    fn stack(&self) -> Stack {
        Stack::Laravel
    }

    fn string_type(&self) -> &'static str {
        "string"
    }

    fn map_type(&self, ty: &str) -> &'static str {
        self.columns.lookup(ty)
    }

    fn nullable_type(&self, ty: &str) -> String {
        if ty.starts_with('?') {
            ty.to_string()
        } else {
            format!("?{}", ty)
        }
    }
}

/// Laravel field parser: untyped fields are `string`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LaravelFieldParser;

impl FieldParser for LaravelFieldParser {
    fn default_type(&self) -> &'static str {
        "string"
    }
}
