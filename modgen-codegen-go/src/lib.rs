//! Go code generator for the modgen scaffolding generator.
//!
//! This crate scaffolds a clean-architecture module for a Go service built on
//! [Gin](https://gin-gonic.com/) and [GORM](https://gorm.io/).
//!
//! # Usage
//!
//! ```ignore
//! use modgen_codegen::{GenerateOptions, RenderContext, StackCodegen};
//! use modgen_codegen_go::GoCodegen;
//! use modgen_core::EntityDescriptor;
//!
//! let codegen = GoCodegen::new();
//! let entity = EntityDescriptor::new("product");
//! let fields = codegen.field_parser().parse("name,price:int64");
//! let options = GenerateOptions::default();
//! let ctx = RenderContext { entity: &entity, fields: &fields, project: "github.com/acme/shop", options: &options };
//!
//! let artifacts = codegen.render(&ctx);
//! ```
//!
//! # Generated Output
//!
//! - `pkg/database/<module>.go` - GORM model with UUID primary key and soft delete
//! - `internal/modules/<module>/dtos/<module>_dto.go` - Request and response shapes
//! - `internal/modules/<module>/usecases/<module>_usecase.go` - CRUD and paginated search
//! - `internal/modules/<module>/controllers/<module>_controller.go` - Gin handlers
//! - `internal/modules/<module>/init.go` - Route registration
//! - `internal/modules/<module>/validators/<module>_validator.go` - With `validators` only

mod generator;
mod type_mapper;

pub mod files;

pub use generator::GoCodegen;
pub use type_mapper::{GORM_COLUMNS, GoFieldParser, GoTypeMapper};
