//! React code generator producing a TanStack Query feature folder.

use modgen_codegen::{ArtifactTemplate, RenderContext, StackCodegen, TypeMapper};
use modgen_core::{ArtifactKind, FieldParser, Stack};

use crate::{
    TypeScriptFieldParser, TypeScriptTypeMapper,
    files::{ApiTs, FormTsx, HooksTs, IndexTs, ListTsx, TypesTs},
};

const ARTIFACT_KINDS: &[ArtifactKind] = &[
    ArtifactKind::Dto,
    ArtifactKind::ApiClient,
    ArtifactKind::State,
    ArtifactKind::View,
    ArtifactKind::Index,
];

/// React generator for a typed API client, query hooks and components.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactCodegen {
    mapper: TypeScriptTypeMapper,
    parser: TypeScriptFieldParser,
}

impl ReactCodegen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StackCodegen for ReactCodegen {
    fn stack(&self) -> Stack {
        Stack::React
    }

    fn field_parser(&self) -> &dyn FieldParser {
        &self.parser
    }

    fn type_mapper(&self) -> &dyn TypeMapper {
        &self.mapper
    }

    fn artifact_kinds(&self) -> &'static [ArtifactKind] {
        ARTIFACT_KINDS
    }

    fn templates<'a>(&'a self, ctx: &'a RenderContext<'a>) -> Vec<Box<dyn ArtifactTemplate + 'a>> {
        vec![
            Box::new(TypesTs::new(ctx)),
            Box::new(ApiTs::new(ctx)),
            Box::new(HooksTs::new(ctx)),
            Box::new(ListTsx::new(ctx)),
            Box::new(FormTsx::new(ctx, &self.mapper)),
            Box::new(IndexTs::new(ctx)),
        ]
    }
}
