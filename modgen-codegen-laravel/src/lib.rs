//! Laravel code generator for the modgen scaffolding generator.
//!
//! Generates an Eloquent model, its migration, a resource controller, a form
//! request, an API resource and one use case class per write operation.
//!
//! # Generated Output
//!
//! - `app/Models/<Entity>.php`
//! - `database/migrations/create_<plural>_table.php`
//! - `app/Http/Controllers/<Entity>Controller.php`
//! - `app/Http/Requests/<Entity>Request.php`
//! - `app/Http/Resources/<Entity>Resource.php`
//! - `app/UseCases/<Entity>/{Create,Update,Delete}<Entity>UseCase.php`

mod generator;
mod type_mapper;

pub mod files;

pub use generator::LaravelCodegen;
pub use type_mapper::{LaravelFieldParser, LaravelTypeMapper, MIGRATION_COLUMNS, MODEL_CASTS};
