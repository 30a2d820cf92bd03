//! Field specification parsing.
//!
//! A field specification is a comma-separated list of `name[:type][?]` tokens,
//! e.g. `"name:string,price:int64?"`. Parsing is permissive: empty tokens are
//! skipped and malformed tokens are kept as-is.

use serde::Serialize;

/// One declared attribute of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Field name as written in the specification
    pub name: String,
    /// Source type token in the stack's vocabulary
    #[serde(rename = "type")]
    pub ty: String,
    /// False when the token carried a trailing `?`
    pub required: bool,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            required,
        }
    }

    pub fn is_optional(&self) -> bool {
        !self.required
    }
}

/// Parses field specifications for one target stack.
///
/// Every stack uses the same algorithm and only differs in the type assigned
/// to fields declared without one.
pub trait FieldParser {
    /// Type token used when a field omits `:type`
    fn default_type(&self) -> &'static str;

    /// Parse a field specification string into ordered descriptors.
    fn parse(&self, spec: &str) -> Vec<FieldDescriptor> {
        parse_fields(spec, self.default_type())
    }
}

/// Parse a field specification, assigning `default_type` to untyped fields.
pub fn parse_fields(spec: &str, default_type: &str) -> Vec<FieldDescriptor> {
    spec.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| parse_token(token, default_type))
        .collect()
}

fn parse_token(token: &str, default_type: &str) -> FieldDescriptor {
    let required = !token.ends_with('?');
    let token = token.trim_end_matches('?');

    match token.split_once(':') {
        Some((name, ty)) => FieldDescriptor::new(name.trim(), ty.trim(), required),
        None => FieldDescriptor::new(token.trim(), default_type, required),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Lowercase;

    impl FieldParser for Lowercase {
        fn default_type(&self) -> &'static str {
            "string"
        }
    }

    #[test]
    fn test_parse_typed_and_optional() {
        let fields = parse_fields("name:string,price:int64?", "string");
        assert_eq!(
            fields,
            vec![
                FieldDescriptor::new("name", "string", true),
                FieldDescriptor::new("price", "int64", false),
            ]
        );
    }

    #[test]
    fn test_parse_skips_empty_tokens() {
        let fields = parse_fields("a,,b:int", "string");
        assert_eq!(
            fields,
            vec![
                FieldDescriptor::new("a", "string", true),
                FieldDescriptor::new("b", "int", true),
            ]
        );
        assert!(parse_fields("", "string").is_empty());
        assert!(parse_fields(" , ,", "string").is_empty());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let fields = parse_fields("  title : string ,  body? ", "String");
        assert_eq!(
            fields,
            vec![
                FieldDescriptor::new("title", "string", true),
                FieldDescriptor::new("body", "String", false),
            ]
        );
    }

    #[test]
    fn test_parse_splits_on_first_colon() {
        let fields = parse_fields("tags:map:string", "string");
        assert_eq!(fields[0].name, "tags");
        assert_eq!(fields[0].ty, "map:string");
    }

    #[test]
    fn test_parse_strips_repeated_optional_markers() {
        let fields = parse_fields("note??", "string");
        assert_eq!(fields, vec![FieldDescriptor::new("note", "string", false)]);
    }

    #[test]
    fn test_parse_is_permissive() {
        let fields = parse_fields(":,x:", "string");
        assert_eq!(
            fields,
            vec![
                FieldDescriptor::new("", "", true),
                FieldDescriptor::new("x", "", true),
            ]
        );
    }

    #[test]
    fn test_field_parser_uses_default_type() {
        let fields = Lowercase.parse("title,count:int?");
        assert_eq!(fields[0], FieldDescriptor::new("title", "string", true));
        assert!(fields[1].is_optional());
    }
}
