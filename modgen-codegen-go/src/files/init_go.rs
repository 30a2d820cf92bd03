//! Module wiring generator.

use modgen_codegen::{ArtifactTemplate, CodeBuilder, RenderContext, RoutePaths};
use modgen_core::ArtifactKind;

use super::module_dir;

/// Gin path parameter for the item id.
pub const ID_PLACEHOLDER: &str = ":id";

/// `Init` constructs the use case and controller and mounts the routes.
pub struct InitGo<'a> {
    ctx: &'a RenderContext<'a>,
}

impl<'a> InitGo<'a> {
    pub fn new(ctx: &'a RenderContext<'a>) -> Self {
        Self { ctx }
    }
}

impl ArtifactTemplate for InitGo<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Wiring
    }

    fn path(&self) -> String {
        format!("{}/init.go", module_dir(self.ctx.entity.module()))
    }

    fn render(&self) -> String {
        let entity = self.ctx.entity.pascal();
        let module = self.ctx.entity.module();
        let project = self.ctx.project;
        let routes = RoutePaths::new(self.ctx.entity);
        let item = format!("/{}", ID_PLACEHOLDER);

        CodeBuilder::go()
            .line(&format!("package {}", module))
            .blank()
            .line("import (")
            .indented(|b| {
                b.line("\"github.com/gin-gonic/gin\"")
                    .line("\"gorm.io/gorm\"")
                    .blank()
                    .line(&format!("\"{}/internal/middleware\"", project))
                    .line(&format!("\"{}/internal/modules/{}/controllers\"", project, module))
                    .line(&format!("\"{}/internal/modules/{}/usecases\"", project, module))
            })
            .line(")")
            .blank()
            .block_with_close(
                "func Init(r *gin.Engine, db *gorm.DB, authMiddleware *middleware.AuthMiddleware) {",
                "}",
                |b| {
                    b.line(&format!("usecase := usecases.New{}Usecase(db)", entity))
                        .line(&format!(
                            "controller := controllers.New{}Controller(usecase)",
                            entity
                        ))
                        .blank()
                        .line(&format!("group := r.Group(\"{}\")", routes.collection()))
                        .line("group.Use(authMiddleware.Authenticate())")
                        .block_with_close("{", "}", |b| {
                            b.line("group.POST(\"\", controller.Create)")
                                .line("group.GET(\"\", controller.List)")
                                .line(&format!("group.GET(\"{}\", controller.GetByID)", item))
                                .line(&format!("group.PUT(\"{}\", controller.Update)", item))
                                .line(&format!("group.DELETE(\"{}\", controller.Delete)", item))
                        })
                },
            )
            .build()
    }
}
