//! Flutter code generator producing a Riverpod feature folder.

use modgen_codegen::{ArtifactTemplate, Pagination, RenderContext, StackCodegen, TypeMapper};
use modgen_core::{ArtifactKind, FieldParser, Stack};

use crate::{
    DartFieldParser, DartTypeMapper,
    files::{ModelDart, ProviderDart, RepositoryDart, ScreenDart},
};

const ARTIFACT_KINDS: &[ArtifactKind] = &[
    ArtifactKind::Model,
    ArtifactKind::Repository,
    ArtifactKind::State,
    ArtifactKind::View,
];

/// Flutter generator for freezed models, a Dio repository and Riverpod providers.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlutterCodegen {
    mapper: DartTypeMapper,
    parser: DartFieldParser,
    pagination: Pagination,
}

impl FlutterCodegen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }
}

impl StackCodegen for FlutterCodegen {
    fn stack(&self) -> Stack {
        Stack::Flutter
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
            Box::new(ModelDart::new(ctx, &self.mapper)),
            Box::new(RepositoryDart::new(ctx, &self.pagination)),
            Box::new(ProviderDart::new(ctx)),
            Box::new(ScreenDart::new(ctx)),
        ]
    }
}
