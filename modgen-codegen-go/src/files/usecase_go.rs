//! Business-logic layer generator.

use modgen_codegen::{ArtifactTemplate, CodeBuilder, Pagination, RenderContext, TypeMapper, search_field};
use modgen_core::ArtifactKind;

use super::{clamp_pagination, go_field, module_dir};
use crate::GoTypeMapper;

/// CRUD and list operations over the GORM model.
pub struct UsecaseGo<'a> {
    ctx: &'a RenderContext<'a>,
    mapper: &'a GoTypeMapper,
    pagination: &'a Pagination,
}

impl<'a> UsecaseGo<'a> {
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

    fn receiver(&self, entity: &str, signature: &str) -> String {
        format!("func (u *{}Usecase) {} {{", entity, signature)
    }

    fn create(&self, builder: CodeBuilder, entity: &str) -> CodeBuilder {
        builder.block_with_close(
            &self.receiver(
                entity,
                &format!(
                    "Create(ctx context.Context, req *dtos.Create{0}Request) (*database.{0}, error)",
                    entity
                ),
            ),
            "}",
            |b| {
                b.block_with_close(&format!("entity := &database.{}{{", entity), "}", |b| {
                    b.each(self.ctx.fields, |b, f| {
                        b.line(&format!("{0}: req.{0},", go_field(&f.name)))
                    })
                })
                .block_with_close(
                    "if err := u.db.WithContext(ctx).Create(entity).Error; err != nil {",
                    "}",
                    |b| b.line("return nil, err"),
                )
                .line("return entity, nil")
            },
        )
    }

    fn get_by_id(&self, builder: CodeBuilder, entity: &str) -> CodeBuilder {
        builder.block_with_close(
            &self.receiver(
                entity,
                &format!(
                    "GetByID(ctx context.Context, id string) (*database.{}, error)",
                    entity
                ),
            ),
            "}",
            |b| {
                b.line(&format!("var entity database.{}", entity))
                    .block_with_close(
                        "if err := u.db.WithContext(ctx).First(&entity, \"id = ?\", id).Error; err != nil {",
                        "}",
                        |b| b.line("return nil, err"),
                    )
                    .line("return &entity, nil")
            },
        )
    }

    /// Only non-nil request fields end up in the update map.
    fn update(&self, builder: CodeBuilder, entity: &str) -> CodeBuilder {
        builder.block_with_close(
            &self.receiver(
                entity,
                &format!(
                    "Update(ctx context.Context, id string, req *dtos.Update{0}Request) (*database.{0}, error)",
                    entity
                ),
            ),
            "}",
            |b| {
                b.line(&format!("var entity database.{}", entity))
                    .block_with_close(
                        "if err := u.db.WithContext(ctx).First(&entity, \"id = ?\", id).Error; err != nil {",
                        "}",
                        |b| b.line("return nil, err"),
                    )
                    .line("updates := map[string]interface{}{}")
                    .each(self.ctx.fields, |b, f| {
                        let name = go_field(&f.name);
                        b.block_with_close(&format!("if req.{} != nil {{", name), "}", |b| {
                            b.line(&format!("updates[\"{}\"] = *req.{}", f.name, name))
                        })
                    })
                    .block_with_close("if len(updates) > 0 {", "}", |b| {
                        b.block_with_close(
                            "if err := u.db.WithContext(ctx).Model(&entity).Updates(updates).Error; err != nil {",
                            "}",
                            |b| b.line("return nil, err"),
                        )
                    })
                    .line("return &entity, nil")
            },
        )
    }

    fn delete(&self, builder: CodeBuilder, entity: &str) -> CodeBuilder {
        builder.block_with_close(
            &self.receiver(entity, "Delete(ctx context.Context, id string) error"),
            "}",
            |b| {
                b.line(&format!(
                    "return u.db.WithContext(ctx).Delete(&database.{}{{}}, \"id = ?\", id).Error",
                    entity
                ))
            },
        )
    }

    fn list(&self, builder: CodeBuilder, entity: &str) -> CodeBuilder {
        let search = search_field(self.ctx.fields, self.mapper.string_type());

        builder.block_with_close(
            &self.receiver(
                entity,
                &format!(
                    "List(ctx context.Context, req *dtos.List{0}Request) ([]*database.{0}, int64, error)",
                    entity
                ),
            ),
            "}",
            |b| {
                let b = b
                    .line(&format!("var entities []*database.{}", entity))
                    .line("var total int64")
                    .line(&format!(
                        "query := u.db.WithContext(ctx).Model(&database.{}{{}})",
                        entity
                    ))
                    .block_with_close("if req.Search != \"\" {", "}", |b| {
                        b.line(&format!(
                            "query = query.Where(\"{} LIKE ?\", \"%\"+req.Search+\"%\")",
                            search
                        ))
                    })
                    .block_with_close("if err := query.Count(&total).Error; err != nil {", "}", |b| {
                        b.line("return nil, 0, err")
                    });
                clamp_pagination(b, self.pagination)
                    .line("offset := (page - 1) * perPage")
                    .block_with_close(
                        "if err := query.Offset(offset).Limit(perPage).Order(\"created_at DESC\").Find(&entities).Error; err != nil {",
                        "}",
                        |b| b.line("return nil, 0, err"),
                    )
                    .line("return entities, total, nil")
            },
        )
    }
}

impl ArtifactTemplate for UsecaseGo<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::UseCase
    }

    fn path(&self) -> String {
        let module = self.ctx.entity.module();
        format!("{}/usecases/{}_usecase.go", module_dir(module), module)
    }

    fn render(&self) -> String {
        let entity = self.ctx.entity.pascal();
        let project = self.ctx.project;
        let module = self.ctx.entity.module();

        let mut builder = CodeBuilder::go()
            .line("package usecases")
            .blank()
            .line("import (")
            .indented(|b| {
                b.line("\"context\"")
                    .blank()
                    .line("\"gorm.io/gorm\"")
                    .blank()
                    .line(&format!("\"{}/internal/modules/{}/dtos\"", project, module))
                    .line(&format!("\"{}/pkg/database\"", project))
            })
            .line(")")
            .blank()
            .block_with_close(&format!("type {}Usecase struct {{", entity), "}", |b| {
                b.line("db *gorm.DB")
            })
            .blank()
            .block_with_close(
                &format!("func New{0}Usecase(db *gorm.DB) *{0}Usecase {{", entity),
                "}",
                |b| b.line(&format!("return &{}Usecase{{db: db}}", entity)),
            )
            .blank();
        builder = self.create(builder, entity).blank();
        builder = self.get_by_id(builder, entity).blank();
        builder = self.update(builder, entity).blank();
        builder = self.delete(builder, entity).blank();
        self.list(builder, entity).build()
    }
}
