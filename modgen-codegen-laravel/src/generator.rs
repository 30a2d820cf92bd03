//! Laravel code generator producing a domain + use case module.

use modgen_codegen::{ArtifactTemplate, Pagination, RenderContext, StackCodegen, TypeMapper};
use modgen_core::{ArtifactKind, FieldParser, Stack};

use crate::{
    LaravelFieldParser, LaravelTypeMapper,
    files::{
        ControllerPhp, MigrationPhp, ModelPhp, RequestPhp, ResourcePhp, UseCaseAction, UseCasePhp,
    },
};

const ARTIFACT_KINDS: &[ArtifactKind] = &[
    ArtifactKind::Model,
    ArtifactKind::Migration,
    ArtifactKind::Controller,
    ArtifactKind::Request,
    ArtifactKind::Resource,
    ArtifactKind::UseCase,
];

/// Laravel generator for Eloquent models behind single-action use cases.
#[derive(Debug, Clone, Copy, Default)]
pub struct LaravelCodegen {
    mapper: LaravelTypeMapper,
    parser: LaravelFieldParser,
    pagination: Pagination,
}

impl LaravelCodegen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }
}

impl StackCodegen for LaravelCodegen {
    fn stack(&self) -> Stack {
        Stack::Laravel
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
        let mut templates: Vec<Box<dyn ArtifactTemplate + 'a>> = vec![
            Box::new(ModelPhp::new(ctx, &self.mapper)),
            Box::new(MigrationPhp::new(ctx, &self.mapper)),
            Box::new(ControllerPhp::new(ctx, &self.mapper, &self.pagination)),
            Box::new(RequestPhp::new(ctx)),
            Box::new(ResourcePhp::new(ctx)),
        ];
        templates.extend(
            UseCaseAction::ALL
                .into_iter()
                .map(|action| Box::new(UseCasePhp::new(ctx, action)) as Box<dyn ArtifactTemplate + 'a>),
        );
        templates
    }
}
