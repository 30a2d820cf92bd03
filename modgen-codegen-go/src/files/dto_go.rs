//! Request/response DTO generator.

use modgen_codegen::{ArtifactTemplate, CodeBuilder, Pagination, RenderContext, response_fields};
use modgen_core::ArtifactKind;

use super::{TIMESTAMP_LAYOUT, go_field, module_dir};
use crate::GoTypeMapper;

/// Request bindings, response shapes and their converters.
pub struct DtoGo<'a> {
    ctx: &'a RenderContext<'a>,
    mapper: &'a GoTypeMapper,
    pagination: &'a Pagination,
}

impl<'a> DtoGo<'a> {
    pub fn new(
        ctx: &'a RenderContext<'a>,
        mapper: &'a GoTypeMapper,
        pagination: &'a Pagination,
    ) -> Self {
        Self {
            ctx,
            mapper,
            pagination,
        }
    }

    fn create_request(&self, builder: CodeBuilder, entity: &str) -> CodeBuilder {
        builder.block_with_close(
            &format!("type Create{}Request struct {{", entity),
            "}",
            |b| {
                b.each(self.ctx.fields, |b, f| {
                    let binding = if f.required { "required" } else { "omitempty" };
                    b.line(&format!(
                        "{} {} `json:\"{}\" binding:\"{}\"`",
                        go_field(&f.name),
                        f.ty,
                        f.name,
                        binding
                    ))
                })
            },
        )
    }

    /// Every field is a pointer so absent keys can be told apart from zero values.
    fn update_request(&self, builder: CodeBuilder, entity: &str) -> CodeBuilder {
        builder.block_with_close(
            &format!("type Update{}Request struct {{", entity),
            "}",
            |b| {
                b.each(self.ctx.fields, |b, f| {
                    b.line(&format!(
                        "{} *{} `json:\"{}\"`",
                        go_field(&f.name),
                        f.ty.trim_start_matches('*'),
                        f.name
                    ))
                })
            },
        )
    }

    fn list_request(&self, builder: CodeBuilder, entity: &str) -> CodeBuilder {
        builder.block_with_close(
            &format!("type List{}Request struct {{", entity),
            "}",
            |b| {
                b.line("Page    int    `form:\"page\" binding:\"omitempty,min=1\"`")
                    .line(&format!(
                        "PerPage int    `form:\"per_page\" binding:\"omitempty,min=1,max={}\"`",
                        self.pagination.max_per_page
                    ))
                    .line("Search  string `form:\"search\"`")
            },
        )
    }

    fn response(&self, builder: CodeBuilder, entity: &str) -> CodeBuilder {
        let fields = response_fields(self.ctx.fields, self.mapper);

        builder.block_with_close(&format!("type {}Response struct {{", entity), "}", |b| {
            b.line("ID        string `json:\"id\"`")
                .each(&fields, |b, f| {
                    b.line(&format!(
                        "{} {} `json:\"{}\"`",
                        go_field(&f.field.name),
                        f.ty,
                        f.field.name
                    ))
                })
                .line("CreatedAt string `json:\"created_at\"`")
        })
    }

    fn list_response(&self, builder: CodeBuilder, entity: &str) -> CodeBuilder {
        builder.block_with_close(
            &format!("type {}ListResponse struct {{", entity),
            "}",
            |b| {
                b.line(&format!("Items      []*{}Response `json:\"items\"`", entity))
                    .line("Page       int `json:\"page\"`")
                    .line("PerPage    int `json:\"per_page\"`")
                    .line("Total      int64 `json:\"total\"`")
                    .line("TotalPages int `json:\"total_pages\"`")
            },
        )
    }

    fn to_response(&self, builder: CodeBuilder, entity: &str) -> CodeBuilder {
        builder.block_with_close(
            &format!(
                "func To{0}Response(entity *database.{0}) *{0}Response {{",
                entity
            ),
            "}",
            |b| {
                b.block_with_close(&format!("return &{}Response{{", entity), "}", |b| {
                    b.line("ID:        entity.ID,")
                        .each(self.ctx.fields, |b, f| {
                            let name = go_field(&f.name);
                            b.line(&format!("{0}: entity.{0},", name))
                        })
                        .line(&format!(
                            "CreatedAt: entity.CreatedAt.Format(\"{}\"),",
                            TIMESTAMP_LAYOUT
                        ))
                })
            },
        )
    }

    /// Total pages is `total / perPage`, plus one for a partial last page.
    fn to_list_response(&self, builder: CodeBuilder, entity: &str) -> CodeBuilder {
        builder.block_with_close(
            &format!(
                "func To{0}ListResponse(entities []*database.{0}, page, perPage int, total int64) *{0}ListResponse {{",
                entity
            ),
            "}",
            |b| {
                b.line(&format!(
                    "items := make([]*{}Response, len(entities))",
                    entity
                ))
                .block_with_close("for i, e := range entities {", "}", |b| {
                    b.line(&format!("items[i] = To{}Response(e)", entity))
                })
                .line("totalPages := int(total) / perPage")
                .block_with_close("if int(total)%perPage > 0 {", "}", |b| {
                    b.line("totalPages++")
                })
                .line(&format!(
                    "return &{}ListResponse{{Items: items, Page: page, PerPage: perPage, Total: total, TotalPages: totalPages}}",
                    entity
                ))
            },
        )
    }
}

impl ArtifactTemplate for DtoGo<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Dto
    }

    fn path(&self) -> String {
        let module = self.ctx.entity.module();
        format!("{}/dtos/{}_dto.go", module_dir(module), module)
    }

    fn render(&self) -> String {
        let entity = self.ctx.entity.pascal();

        let mut builder = CodeBuilder::go()
            .line("package dtos")
            .blank()
            .line(&format!("import \"{}/pkg/database\"", self.ctx.project))
            .blank();
        builder = self.create_request(builder, entity).blank();
        builder = self.update_request(builder, entity).blank();
        builder = self.list_request(builder, entity).blank();
        builder = self.response(builder, entity).blank();
        builder = self.list_response(builder, entity).blank();
        builder = self.to_response(builder, entity).blank();
        self.to_list_response(builder, entity).build()
    }
}
