use std::{
    fmt,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};

/// The role an artifact plays in the generated module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    /// Persistence model or schema definition
    Model,
    /// Database migration
    Migration,
    /// Input/output transfer shapes
    Dto,
    /// Request validation rules
    Request,
    /// Response serialization
    Resource,
    /// Business-logic operations
    UseCase,
    /// Request-handling layer
    Controller,
    /// Route registration and dependency wiring
    Wiring,
    /// Field-existence validation
    Validator,
    /// HTTP client bindings
    ApiClient,
    /// Data-fetching hooks or providers
    State,
    /// Remote data access
    Repository,
    /// UI component or screen
    View,
    /// Barrel file re-exporting the module
    Index,
}

impl ArtifactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Model => "model",
            ArtifactKind::Migration => "migration",
            ArtifactKind::Dto => "dto",
            ArtifactKind::Request => "request",
            ArtifactKind::Resource => "resource",
            ArtifactKind::UseCase => "use-case",
            ArtifactKind::Controller => "controller",
            ArtifactKind::Wiring => "wiring",
            ArtifactKind::Validator => "validator",
            ArtifactKind::ApiClient => "api-client",
            ArtifactKind::State => "state",
            ArtifactKind::Repository => "repository",
            ArtifactKind::View => "view",
            ArtifactKind::Index => "index",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One generated file: a relative path and its full content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    /// Path relative to the output root, `/`-separated
    pub path: String,
    pub kind: ArtifactKind,
    pub content: String,
}

impl Artifact {
    pub fn new(path: impl Into<String>, kind: ArtifactKind, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            content: content.into(),
        }
    }

    /// Write the artifact below `root` according to `overwrite`.
    pub fn write(&self, root: &Path, overwrite: Overwrite) -> Result<WriteResult> {
        let path = root.join(&self.path);

        match overwrite {
            Overwrite::Always => {
                write_file(&path, &self.content)?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if path.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&path, &self.content)?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// How to handle files that already exist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Overwrite {
    /// Replace existing files without merging
    #[default]
    Always,
    /// Only create files that don't exist yet
    IfMissing,
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// What happened to one artifact during [`ArtifactSet::write`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteOutcome {
    pub path: PathBuf,
    pub result: WriteResult,
}

/// The ordered output of one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ArtifactSet {
    artifacts: Vec<Artifact>,
}

impl ArtifactSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, artifact: Artifact) {
        self.artifacts.push(artifact);
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Artifact> {
        self.artifacts.iter()
    }

    /// Find an artifact by its relative path.
    pub fn get(&self, path: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.path == path)
    }

    pub fn paths(&self) -> Vec<&str> {
        self.artifacts.iter().map(|a| a.path.as_str()).collect()
    }

    /// Write every artifact below `root`, in order.
    ///
    /// Missing parent directories are created. The first I/O failure aborts
    /// the remaining writes.
    pub fn write(&self, root: &Path, overwrite: Overwrite) -> Result<Vec<WriteOutcome>> {
        let mut outcomes = Vec::with_capacity(self.artifacts.len());

        for artifact in &self.artifacts {
            let result = artifact.write(root, overwrite)?;
            tracing::info!(path = %artifact.path, ?result, "artifact written");
            outcomes.push(WriteOutcome {
                path: root.join(&artifact.path),
                result,
            });
        }

        Ok(outcomes)
    }
}

impl Extend<Artifact> for ArtifactSet {
    fn extend<I: IntoIterator<Item = Artifact>>(&mut self, iter: I) {
        self.artifacts.extend(iter);
    }
}

impl FromIterator<Artifact> for ArtifactSet {
    fn from_iter<I: IntoIterator<Item = Artifact>>(iter: I) -> Self {
        Self {
            artifacts: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ArtifactSet {
    type Item = Artifact;
    type IntoIter = std::vec::IntoIter<Artifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.artifacts.into_iter()
    }
}

impl<'a> IntoIterator for &'a ArtifactSet {
    type Item = &'a Artifact;
    type IntoIter = std::slice::Iter<'a, Artifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.artifacts.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn sample_set() -> ArtifactSet {
        [
            Artifact::new("a/b/model.go", ArtifactKind::Model, "package database\n"),
            Artifact::new("init.go", ArtifactKind::Wiring, "package product\n"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_artifact_write_always_overwrites() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("x.txt"), "original").unwrap();

        let artifact = Artifact::new("x.txt", ArtifactKind::Model, "updated");
        let result = artifact.write(temp.path(), Overwrite::Always).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("x.txt")).unwrap(),
            "updated"
        );
    }

    #[test]
    fn test_artifact_write_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("x.txt"), "original").unwrap();

        let artifact = Artifact::new("x.txt", ArtifactKind::Model, "should not write");
        let result = artifact.write(temp.path(), Overwrite::IfMissing).unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(
            fs::read_to_string(temp.path().join("x.txt")).unwrap(),
            "original"
        );
    }

    #[test]
    fn test_set_write_preserves_order() {
        let temp = TempDir::new().unwrap();
        let outcomes = sample_set().write(temp.path(), Overwrite::Always).unwrap();

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].path, temp.path().join("a/b/model.go"));
        assert_eq!(outcomes[1].path, temp.path().join("init.go"));
        assert!(outcomes.iter().all(|o| o.result == WriteResult::Written));
        assert_eq!(
            fs::read_to_string(temp.path().join("a/b/model.go")).unwrap(),
            "package database\n"
        );
    }

    #[test]
    fn test_set_lookup() {
        let set = sample_set();

        assert_eq!(set.len(), 2);
        assert_eq!(set.paths(), vec!["a/b/model.go", "init.go"]);
        assert_eq!(set.get("init.go").unwrap().kind, ArtifactKind::Wiring);
        assert!(set.get("missing.go").is_none());
    }

    #[test]
    fn test_set_serializes_as_array() {
        let json = serde_json::to_value(sample_set()).unwrap();

        assert!(json.is_array());
        assert_eq!(json[0]["path"], "a/b/model.go");
        assert_eq!(json[0]["kind"], "model");
        assert_eq!(json[1]["kind"], "wiring");
    }
}
