//! Core utilities and types for the modgen scaffolding generator.
//!
//! This crate provides the stack-independent building blocks shared by every
//! target generator: identifier transforms, the field specification parser,
//! the entity descriptor and the artifact set handed to the filesystem writer.

mod artifact;
mod entity;
mod field;
mod naming;
mod stack;

// Generated output
pub use artifact::{Artifact, ArtifactKind, ArtifactSet, Overwrite, WriteOutcome, WriteResult};
// Generation inputs
pub use entity::{EntityDescriptor, IdentForms};
pub use field::{FieldDescriptor, FieldParser, parse_fields};
pub use stack::Stack;
// String utilities
pub use naming::{capitalize, pluralize, to_camel_case, to_kebab_case, to_pascal_case, to_snake_case};
