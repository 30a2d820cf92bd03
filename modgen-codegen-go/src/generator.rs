//! Go code generator producing a Gin + GORM clean-architecture module.

use modgen_codegen::{
    ArtifactTemplate, OptionInfo, Pagination, RenderContext, StackCodegen, TypeMapper,
};
use modgen_core::{ArtifactKind, FieldParser, Stack};

use crate::{
    GoFieldParser, GoTypeMapper,
    files::{ControllerGo, DtoGo, InitGo, ModelGo, UsecaseGo, ValidatorGo},
};

const ARTIFACT_KINDS: &[ArtifactKind] = &[
    ArtifactKind::Model,
    ArtifactKind::Dto,
    ArtifactKind::UseCase,
    ArtifactKind::Controller,
    ArtifactKind::Wiring,
];

const OPTIONS: &[OptionInfo] = &[OptionInfo {
    name: "validators",
    description: "Also emit a validator chain with an existence check",
}];

/// Go generator for Gin handlers over GORM models.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoCodegen {
    mapper: GoTypeMapper,
    parser: GoFieldParser,
    pagination: Pagination,
}

impl GoCodegen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use different list pagination defaults.
    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }
}

impl StackCodegen for GoCodegen {
    fn stack(&self) -> Stack {
        Stack::Go
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

    fn options(&self) -> &'static [OptionInfo] {
        OPTIONS
    }

    fn templates<'a>(&'a self, ctx: &'a RenderContext<'a>) -> Vec<Box<dyn ArtifactTemplate + 'a>> {
        let mut templates: Vec<Box<dyn ArtifactTemplate + 'a>> = vec![
            Box::new(ModelGo::new(ctx, &self.mapper)),
            Box::new(DtoGo::new(ctx, &self.mapper, &self.pagination)),
            Box::new(UsecaseGo::new(ctx, &self.mapper, &self.pagination)),
            Box::new(ControllerGo::new(ctx, &self.pagination)),
            Box::new(InitGo::new(ctx)),
        ];

        if ctx.options.validators {
            templates.push(Box::new(ValidatorGo::new(ctx)));
        }

        templates
    }
}
