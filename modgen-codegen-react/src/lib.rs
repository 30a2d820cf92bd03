//! React code generator for the modgen scaffolding generator.
//!
//! Generates a feature folder for a React + TypeScript + Vite application,
//! using [TanStack Query](https://tanstack.com/query) for server state.
//!
//! # Generated Output
//!
//! - `src/features/<module>/types.ts` - Entity, request and list interfaces
//! - `src/features/<module>/api.ts` - Typed client over the shared `apiClient`
//! - `src/features/<module>/hooks.ts` - Query and mutation hooks
//! - `src/features/<module>/components/<Entity>List.tsx`
//! - `src/features/<module>/components/<Entity>Form.tsx`
//! - `src/features/<module>/index.ts` - Barrel re-exports

mod generator;
mod type_mapper;

pub mod files;

pub use generator::ReactCodegen;
pub use type_mapper::{FORM_INPUTS, TypeScriptFieldParser, TypeScriptTypeMapper};
