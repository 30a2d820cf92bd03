//! Shared code generation utilities for the modgen scaffolding generator.
//!
//! This crate provides stack-agnostic abstractions used by the stack-specific
//! generators (e.g., `modgen-codegen-go`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, Indent)
//! - [`types`] - Type mapping tables and the TypeMapper trait
//! - [`query`] - Search column selection and pagination defaults
//! - [`shape`] - Response shapes and route paths
//! - [`stack`] - StackCodegen, ArtifactTemplate and render context

pub mod builder;
pub mod query;
pub mod shape;
pub mod stack;
pub mod types;

pub use builder::{CodeBuilder, Indent};
pub use query::{Pagination, search_field};
pub use shape::{RoutePaths, response_fields};
pub use stack::{ArtifactTemplate, GenerateOptions, OptionInfo, RenderContext, StackCodegen};
pub use types::{TypeMapper, TypeTable};
