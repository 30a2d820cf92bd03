//! Gin controller generator.

use modgen_codegen::{ArtifactTemplate, CodeBuilder, Pagination, RenderContext};
use modgen_core::ArtifactKind;

use super::{clamp_pagination, module_dir};

const BAD_REQUEST: &str = "response.Error(ctx, http.StatusBadRequest, \"Invalid request: \"+err.Error())";
const INTERNAL_ERROR: &str = "response.Error(ctx, http.StatusInternalServerError, err.Error())";

/// HTTP handlers delegating to the use case.
pub struct ControllerGo<'a> {
    ctx: &'a RenderContext<'a>,
    pagination: &'a Pagination,
}

impl<'a> ControllerGo<'a> {
    pub fn new(ctx: &'a RenderContext<'a>, pagination: &'a Pagination) -> Self {
        Self { ctx, pagination }
    }

    fn handler<F>(builder: CodeBuilder, entity: &str, name: &str, f: F) -> CodeBuilder
    where
        F: FnOnce(CodeBuilder) -> CodeBuilder,
    {
        builder.block_with_close(
            &format!("func (c *{}Controller) {}(ctx *gin.Context) {{", entity, name),
            "}",
            f,
        )
    }

    fn bind(builder: CodeBuilder, call: &str) -> CodeBuilder {
        builder.block_with_close(
            &format!("if err := ctx.{}(&req); err != nil {{", call),
            "}",
            |b| b.line(BAD_REQUEST).line("return"),
        )
    }

    fn fail_on_err(builder: CodeBuilder, report: &str) -> CodeBuilder {
        builder.block_with_close("if err != nil {", "}", |b| b.line(report).line("return"))
    }
}

impl ArtifactTemplate for ControllerGo<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Controller
    }

    fn path(&self) -> String {
        let module = self.ctx.entity.module();
        format!("{}/controllers/{}_controller.go", module_dir(module), module)
    }

    fn render(&self) -> String {
        let entity = self.ctx.entity.pascal();
        let project = self.ctx.project;
        let module = self.ctx.entity.module();
        let not_found = format!(
            "response.Error(ctx, http.StatusNotFound, \"{} not found\")",
            entity
        );

        let builder = CodeBuilder::go()
            .line("package controllers")
            .blank()
            .line("import (")
            .indented(|b| {
                b.line("\"net/http\"")
                    .blank()
                    .line("\"github.com/gin-gonic/gin\"")
                    .blank()
                    .line(&format!("\"{}/internal/modules/{}/dtos\"", project, module))
                    .line(&format!("\"{}/internal/modules/{}/usecases\"", project, module))
                    .line(&format!("\"{}/pkg/response\"", project))
            })
            .line(")")
            .blank()
            .block_with_close(&format!("type {}Controller struct {{", entity), "}", |b| {
                b.line(&format!("usecase *usecases.{}Usecase", entity))
            })
            .blank()
            .block_with_close(
                &format!(
                    "func New{0}Controller(usecase *usecases.{0}Usecase) *{0}Controller {{",
                    entity
                ),
                "}",
                |b| b.line(&format!("return &{}Controller{{usecase: usecase}}", entity)),
            )
            .blank();

        let builder = Self::handler(builder, entity, "Create", |b| {
            let b = b.line(&format!("var req dtos.Create{}Request", entity));
            let b = Self::bind(b, "ShouldBindJSON")
                .line("entity, err := c.usecase.Create(ctx, &req)");
            Self::fail_on_err(b, INTERNAL_ERROR)
                .line(&format!("response.Created(ctx, dtos.To{}Response(entity))", entity))
        })
        .blank();

        let builder = Self::handler(builder, entity, "GetByID", |b| {
            let b = b
                .line("id := ctx.Param(\"id\")")
                .line("entity, err := c.usecase.GetByID(ctx, id)");
            Self::fail_on_err(b, &not_found)
                .line(&format!("response.Success(ctx, dtos.To{}Response(entity))", entity))
        })
        .blank();

        let builder = Self::handler(builder, entity, "Update", |b| {
            let b = b
                .line("id := ctx.Param(\"id\")")
                .line(&format!("var req dtos.Update{}Request", entity));
            let b = Self::bind(b, "ShouldBindJSON")
                .line("entity, err := c.usecase.Update(ctx, id, &req)");
            Self::fail_on_err(b, INTERNAL_ERROR)
                .line(&format!("response.Success(ctx, dtos.To{}Response(entity))", entity))
        })
        .blank();

        let builder = Self::handler(builder, entity, "Delete", |b| {
            b.line("id := ctx.Param(\"id\")")
                .block_with_close(
                    "if err := c.usecase.Delete(ctx, id); err != nil {",
                    "}",
                    |b| b.line(INTERNAL_ERROR).line("return"),
                )
                .line("response.Success(ctx, gin.H{\"deleted\": true})")
        })
        .blank();

        Self::handler(builder, entity, "List", |b| {
            let b = b.line(&format!("var req dtos.List{}Request", entity));
            let b = Self::bind(b, "ShouldBindQuery")
                .line("entities, total, err := c.usecase.List(ctx, &req)");
            clamp_pagination(Self::fail_on_err(b, INTERNAL_ERROR), self.pagination).line(&format!(
                "response.Success(ctx, dtos.To{}ListResponse(entities, page, perPage, total))",
                entity
            ))
        })
        .build()
    }
}
