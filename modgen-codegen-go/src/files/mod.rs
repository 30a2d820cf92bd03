//! Go file generators.

mod controller_go;
mod dto_go;
mod init_go;
mod model_go;
mod usecase_go;
mod validator_go;

pub use controller_go::ControllerGo;
pub use dto_go::DtoGo;
pub use init_go::InitGo;
pub use model_go::ModelGo;
pub use usecase_go::UsecaseGo;
pub use validator_go::ValidatorGo;

use modgen_codegen::{CodeBuilder, Pagination};
use modgen_core::to_pascal_case;

/// Layout used to format `CreatedAt` in responses.
pub const TIMESTAMP_LAYOUT: &str = "2006-01-02T15:04:05Z";

/// Exported Go identifier for a declared field.
fn go_field(name: &str) -> String {
    to_pascal_case(name)
}

/// Directory holding every non-model file of the module.
fn module_dir(module: &str) -> String {
    format!("internal/modules/{}", module)
}

/// Clamp `page` and `perPage` locals to the pagination defaults.
fn clamp_pagination(builder: CodeBuilder, pagination: &Pagination) -> CodeBuilder {
    builder
        .line("page, perPage := req.Page, req.PerPage")
        .block_with_close("if page < 1 {", "}", |b| {
            b.line(&format!("page = {}", pagination.default_page))
        })
        .block_with_close("if perPage < 1 {", "}", |b| {
            b.line(&format!("perPage = {}", pagination.default_per_page))
        })
}
