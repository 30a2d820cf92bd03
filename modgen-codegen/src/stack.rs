//! Stack-agnostic code generation traits.

use modgen_core::{
    Artifact, ArtifactKind, ArtifactSet, EntityDescriptor, FieldDescriptor, FieldParser, Stack,
};
use serde::{Deserialize, Serialize};

use crate::types::TypeMapper;

/// Named boolean toggles that add or remove whole artifacts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Emit the field-existence validation artifact (Go)
    pub validators: bool,
}

impl GenerateOptions {
    /// Names of the toggles currently switched on.
    pub fn enabled(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.validators {
            names.push("validators");
        }
        names
    }
}

/// A toggle a stack understands, for listings and help output.
#[derive(Debug, Clone, Copy)]
pub struct OptionInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// Everything a renderer may read during one generation run.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub entity: &'a EntityDescriptor,
    pub fields: &'a [FieldDescriptor],
    /// Project identifier used verbatim in cross-file references (e.g. a Go module path)
    pub project: &'a str,
    pub options: &'a GenerateOptions,
}

/// Trait for types that render one generated file.
pub trait ArtifactTemplate {
    fn kind(&self) -> ArtifactKind;

    /// Path relative to the output root
    fn path(&self) -> String;

    /// Render the file content
    fn render(&self) -> String;

    fn artifact(&self) -> Artifact {
        Artifact::new(self.path(), self.kind(), self.render())
    }
}

/// Trait for stack-specific generators.
///
/// Implement this trait to add support for scaffolding a new target stack.
pub trait StackCodegen: Send + Sync {
    fn stack(&self) -> Stack;

    /// Parser assigning this stack's default type to untyped fields
    fn field_parser(&self) -> &dyn FieldParser;

    fn type_mapper(&self) -> &dyn TypeMapper;

    /// Artifact kinds always produced, in emission order
    fn artifact_kinds(&self) -> &'static [ArtifactKind];

    /// Toggles this stack honours
    fn options(&self) -> &'static [OptionInfo] {
        &[]
    }

    /// Templates for one run, in emission order
    fn templates<'a>(&'a self, ctx: &'a RenderContext<'a>) -> Vec<Box<dyn ArtifactTemplate + 'a>>;

    /// Render every artifact for one run.
    fn render(&self, ctx: &RenderContext<'_>) -> ArtifactSet {
        self.templates(ctx)
            .iter()
            .map(|template| {
                let artifact = template.artifact();
                tracing::debug!(
                    stack = %self.stack(),
                    kind = %artifact.kind,
                    path = %artifact.path,
                    "rendered artifact"
                );
                artifact
            })
            .collect()
    }
}
