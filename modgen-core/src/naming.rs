//! Identifier transforms used to derive file, type and route names.
//!
//! Names are split on `-` and `_` only. Existing case boundaries are never
//! treated as separators, so `UserProfile` is a single segment.

const SEPARATORS: [char; 2] = ['-', '_'];

/// Upper-case the first character and lower-case the rest (e.g., "hELLO" -> "Hello")
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

/// Convert a string to PascalCase (e.g., "order_item" -> "OrderItem")
pub fn to_pascal_case(s: &str) -> String {
    s.split(SEPARATORS)
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect()
}

/// Convert a string to camelCase (e.g., "order-item" -> "orderItem")
pub fn to_camel_case(s: &str) -> String {
    let mut parts = s.split(SEPARATORS).filter(|part| !part.is_empty());
    let Some(first) = parts.next() else {
        return String::new();
    };

    let mut result = first.to_lowercase();
    result.extend(parts.map(capitalize));
    result
}

/// Convert a string to snake_case (e.g., "Order-Item" -> "order_item")
pub fn to_snake_case(s: &str) -> String {
    s.to_lowercase().replace('-', "_")
}

/// Convert a string to kebab-case (e.g., "Order_Item" -> "order-item")
pub fn to_kebab_case(s: &str) -> String {
    s.to_lowercase().replace('_', "-")
}

/// Pluralize an English noun with suffix rules only.
///
/// Rules apply in order: a trailing `y` becomes `ies`; a trailing `s`, `x`,
/// `ch` or `sh` gains `es`; anything else gains `s`.
pub fn pluralize(s: &str) -> String {
    if let Some(stem) = s.strip_suffix('y') {
        format!("{}ies", stem)
    } else if ["s", "x", "ch", "sh"].iter().any(|suffix| s.ends_with(suffix)) {
        format!("{}es", s)
    } else {
        format!("{}s", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("hello"), "Hello");
        assert_eq!(capitalize("hELLO"), "Hello");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("product"), "Product");
        assert_eq!(to_pascal_case("user_profile"), "UserProfile");
        assert_eq!(to_pascal_case("order-item"), "OrderItem");
        assert_eq!(to_pascal_case("foo__bar--baz"), "FooBarBaz");
        assert_eq!(to_pascal_case("_leading"), "Leading");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_pascal_case_does_not_split_case_boundaries() {
        assert_eq!(to_pascal_case("UserProfile"), "Userprofile");
        assert_eq!(to_pascal_case("userProfile"), "Userprofile");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("user_profile"), "userProfile");
        assert_eq!(to_camel_case("order-item"), "orderItem");
        assert_eq!(to_camel_case("Product"), "product");
        assert_eq!(to_camel_case("a_b_c"), "aBC");
        assert_eq!(to_camel_case("__x"), "x");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_camel_case_does_not_split_case_boundaries() {
        assert_eq!(to_camel_case("UserProfile"), "userprofile");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("UserProfile"), "userprofile");
        assert_eq!(to_snake_case("order-item"), "order_item");
        assert_eq!(to_snake_case("Order_Item"), "order_item");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(to_kebab_case("order_item"), "order-item");
        assert_eq!(to_kebab_case("Order-Item"), "order-item");
        assert_eq!(to_kebab_case("UserProfile"), "userprofile");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("category"), "categories");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("product"), "products");
        assert_eq!(pluralize("bus"), "buses");
        assert_eq!(pluralize("match"), "matches");
        assert_eq!(pluralize("dish"), "dishes");
        assert_eq!(pluralize("order_item"), "order_items");
    }

    #[test]
    fn test_pluralize_is_heuristic_only() {
        assert_eq!(pluralize("child"), "childs");
        assert_eq!(pluralize("day"), "daies");
        assert_eq!(pluralize(""), "s");
    }
}
