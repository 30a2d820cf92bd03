//! Dart file generators.

mod model_dart;
mod provider_dart;
mod repository_dart;
mod screen_dart;

pub use model_dart::ModelDart;
pub use provider_dart::ProviderDart;
pub use repository_dart::RepositoryDart;
pub use screen_dart::ScreenDart;

/// Dart string interpolation of the item id.
pub const ID_PLACEHOLDER: &str = "$id";

/// Directory holding the feature's files.
fn feature_dir(module: &str) -> String {
    format!("lib/features/{}", module)
}
