//! Derived shapes shared by every stack: response fields and route paths.

use modgen_core::{EntityDescriptor, FieldDescriptor};

use crate::types::TypeMapper;

/// Generator-managed identifier, never part of the declared fields.
pub const ID_FIELD: &str = "id";

/// Generator-managed creation timestamp, never part of the declared fields.
pub const CREATED_AT_FIELD: &str = "created_at";

/// A declared field as it appears in a read or list response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseField<'a> {
    pub field: &'a FieldDescriptor,
    /// Declared type, or its nullable form when the field is optional
    pub ty: String,
}

/// Mirror `fields` into a response shape, in declared order.
pub fn response_fields<'a>(
    fields: &'a [FieldDescriptor],
    mapper: &dyn TypeMapper,
) -> Vec<ResponseField<'a>> {
    fields
        .iter()
        .map(|field| ResponseField {
            field,
            ty: if field.required {
                field.ty.clone()
            } else {
                mapper.nullable_type(&field.ty)
            },
        })
        .collect()
}

/// HTTP paths exposed for an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePaths {
    collection: String,
}

impl RoutePaths {
    pub fn new(entity: &EntityDescriptor) -> Self {
        Self {
            collection: format!("/{}", entity.route_segment()),
        }
    }

    /// Collection path, e.g. `/order-items`.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Single-item path using the stack's identifier placeholder.
    pub fn item(&self, placeholder: &str) -> String {
        format!("{}/{}", self.collection, placeholder)
    }
}
