//! Scaffold CRUD modules for several application stacks from one field list.
//!
//! Given a stack name, an entity name and a field specification, modgen
//! renders the model, transport, business-logic and presentation files a
//! module of that stack needs.
//!
//! ```ignore
//! use modgen::{GenerateOptions, generate};
//!
//! let files = generate(
//!     "go",
//!     "order_item",
//!     "sku:string,qty:int64?",
//!     "github.com/acme/shop",
//!     &GenerateOptions::default(),
//! )?;
//! assert!(files.get("internal/modules/order_item/init.go").is_some());
//! ```
//!
//! Rendering is pure; [`ArtifactSet::write`] is the only step touching the
//! filesystem.

pub mod config;
mod error;
pub mod generator;
pub mod registry;

pub use config::{Config, DEFAULT_CONFIG_FILE};
pub use error::{Error, Result};
pub use generator::{Generation, Generator, Request, generate};
pub use modgen_codegen::GenerateOptions;
pub use modgen_core::{Artifact, ArtifactKind, ArtifactSet, Overwrite, Stack, WriteOutcome, WriteResult};
pub use registry::StackRegistry;
