//! Feature type definitions generator.

use modgen_codegen::{ArtifactTemplate, CodeBuilder, RenderContext};
use modgen_core::ArtifactKind;

use super::{feature_dir, member};

/// Entity, request and list interfaces.
pub struct TypesTs<'a> {
    ctx: &'a RenderContext<'a>,
}

impl<'a> TypesTs<'a> {
    pub fn new(ctx: &'a RenderContext<'a>) -> Self {
        Self { ctx }
    }
}

impl ArtifactTemplate for TypesTs<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Dto
    }

    fn path(&self) -> String {
        format!("{}/types.ts", feature_dir(self.ctx.entity.module()))
    }

    fn render(&self) -> String {
        let entity = self.ctx.entity.pascal();
        let fields = self.ctx.fields;

        CodeBuilder::typescript()
            .block_with_close(&format!("export interface {} {{", entity), "}", |b| {
                b.line("id: string;")
                    .each(fields, |b, f| b.line(&member(f, !f.required)))
                    .line("createdAt: string;")
                    .line("updatedAt: string;")
            })
            .blank()
            .block_with_close(
                &format!("export interface Create{}Request {{", entity),
                "}",
                |b| b.each(fields, |b, f| b.line(&member(f, !f.required))),
            )
            .blank()
            .block_with_close(
                &format!("export interface Update{}Request {{", entity),
                "}",
                |b| b.each(fields, |b, f| b.line(&member(f, true))),
            )
            .blank()
            .block_with_close(
                &format!("export interface {}ListParams {{", entity),
                "}",
                |b| {
                    b.line("page?: number;")
                        .line("perPage?: number;")
                        .line("search?: string;")
                },
            )
            .blank()
            .block_with_close(
                &format!("export interface {}ListResponse {{", entity),
                "}",
                |b| {
                    b.line(&format!("items: {}[];", entity))
                        .line("page: number;")
                        .line("perPage: number;")
                        .line("total: number;")
                        .line("totalPages: number;")
                },
            )
            .build()
    }
}
