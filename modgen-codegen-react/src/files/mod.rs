//! TypeScript file generators.

mod api_ts;
mod form_tsx;
mod hooks_ts;
mod index_ts;
mod list_tsx;
mod types_ts;

pub use api_ts::ApiTs;
pub use form_tsx::FormTsx;
pub use hooks_ts::HooksTs;
pub use index_ts::IndexTs;
pub use list_tsx::ListTsx;
pub use types_ts::TypesTs;

use modgen_core::FieldDescriptor;

/// Template-literal placeholder for the item id.
pub const ID_PLACEHOLDER: &str = "${id}";

/// Directory holding the feature's files.
fn feature_dir(module: &str) -> String {
    format!("src/features/{}", module)
}

/// Interface member, optional when the field is.
fn member(field: &FieldDescriptor, optional: bool) -> String {
    let marker = if optional { "?" } else { "" };
    format!("{}{}: {};", field.name, marker, field.ty)
}
