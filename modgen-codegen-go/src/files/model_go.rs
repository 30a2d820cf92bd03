//! GORM model generator.

use modgen_codegen::{ArtifactTemplate, CodeBuilder, RenderContext, TypeMapper, response_fields};
use modgen_core::ArtifactKind;

use super::go_field;
use crate::GoTypeMapper;

/// The GORM model in `pkg/database`.
pub struct ModelGo<'a> {
    ctx: &'a RenderContext<'a>,
    mapper: &'a GoTypeMapper,
}

impl<'a> ModelGo<'a> {
    pub fn new(ctx: &'a RenderContext<'a>, mapper: &'a GoTypeMapper) -> Self {
        Self { ctx, mapper }
    }
}

impl ArtifactTemplate for ModelGo<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Model
    }

    fn path(&self) -> String {
        format!("pkg/database/{}.go", self.ctx.entity.module())
    }

    fn render(&self) -> String {
        let entity = self.ctx.entity.pascal();
        let columns = response_fields(self.ctx.fields, self.mapper);

        CodeBuilder::go()
            .line("package database")
            .blank()
            .line("import (")
            .indented(|b| {
                b.line("\"time\"")
                    .blank()
                    .line("\"github.com/google/uuid\"")
                    .line("\"gorm.io/gorm\"")
            })
            .line(")")
            .blank()
            .block_with_close(&format!("type {} struct {{", entity), "}", |b| {
                b.line("ID        string         `gorm:\"type:char(36);primaryKey\" json:\"id\"`")
                    .each(&columns, |b, column| {
                        b.line(&format!(
                            "{} {} `gorm:\"type:{}\" json:\"{}\"`",
                            go_field(&column.field.name),
                            column.ty,
                            self.mapper.map_type(&column.field.ty),
                            column.field.name
                        ))
                    })
                    .line("CreatedAt time.Time      `json:\"created_at\"`")
                    .line("UpdatedAt time.Time      `json:\"updated_at\"`")
                    .line("DeletedAt gorm.DeletedAt `gorm:\"index\" json:\"-\"`")
            })
            .blank()
            .block_with_close(
                &format!("func (e *{}) BeforeCreate(tx *gorm.DB) error {{", entity),
                "}",
                |b| {
                    b.block_with_close("if e.ID == \"\" {", "}", |b| {
                        b.line("e.ID = uuid.New().String()")
                    })
                    .line("return nil")
                },
            )
            .build()
    }
}
