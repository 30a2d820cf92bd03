//! Flutter code generator for the modgen scaffolding generator.
//!
//! Generates a feature folder using [freezed](https://pub.dev/packages/freezed)
//! models, a [dio](https://pub.dev/packages/dio) repository and
//! [Riverpod](https://riverpod.dev/) providers.
//!
//! # Generated Output
//!
//! - `lib/features/<module>/data/models/<module>_model.dart`
//! - `lib/features/<module>/data/repositories/<module>_repository.dart`
//! - `lib/features/<module>/presentation/providers/<module>_provider.dart`
//! - `lib/features/<module>/presentation/screens/<module>_list_screen.dart`

mod generator;
mod type_mapper;

pub mod files;

pub use generator::FlutterCodegen;
pub use type_mapper::{DartFieldParser, DartTypeMapper, JSON_ENCODERS};
