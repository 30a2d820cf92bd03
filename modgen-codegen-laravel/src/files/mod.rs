//! PHP file generators.

mod controller_php;
mod migration_php;
mod model_php;
mod request_php;
mod resource_php;
mod use_case_php;

pub use controller_php::ControllerPhp;
pub use migration_php::MigrationPhp;
pub use model_php::ModelPhp;
pub use request_php::RequestPhp;
pub use resource_php::ResourcePhp;
pub use use_case_php::{UseCaseAction, UseCasePhp};

use modgen_codegen::CodeBuilder;

/// Start a PHP file: opening tag, blank line, optional namespace.
fn php_file(namespace: Option<&str>) -> CodeBuilder {
    let builder = CodeBuilder::php().line("<?php").blank();
    match namespace {
        Some(ns) => builder.line(&format!("namespace {};", ns)).blank(),
        None => builder,
    }
}

/// Single-quoted, comma-separated PHP list items.
fn quoted_list<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    items
        .into_iter()
        .map(|item| format!("'{}'", item))
        .collect::<Vec<_>>()
        .join(", ")
}
