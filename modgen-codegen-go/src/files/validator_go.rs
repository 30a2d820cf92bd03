//! Validator chain generator, emitted only with the `validators` option.

use modgen_codegen::{ArtifactTemplate, CodeBuilder, RenderContext};
use modgen_core::ArtifactKind;

use super::module_dir;

pub struct ValidatorGo<'a> {
    ctx: &'a RenderContext<'a>,
}

impl<'a> ValidatorGo<'a> {
    pub fn new(ctx: &'a RenderContext<'a>) -> Self {
        Self { ctx }
    }
}

impl ArtifactTemplate for ValidatorGo<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Validator
    }

    fn path(&self) -> String {
        let module = self.ctx.entity.module();
        format!("{}/validators/{}_validator.go", module_dir(module), module)
    }

    fn render(&self) -> String {
        let entity = self.ctx.entity.pascal();
        let module = self.ctx.entity.module();

        CodeBuilder::go()
            .line("package validators")
            .blank()
            .line("import (")
            .indented(|b| {
                b.line("\"context\"")
                    .line("\"errors\"")
                    .blank()
                    .line("\"gorm.io/gorm\"")
                    .blank()
                    .line(&format!("\"{}/pkg/database\"", self.ctx.project))
            })
            .line(")")
            .blank()
            .block_with_close("type Validator interface {", "}", |b| {
                b.line("Validate(ctx context.Context, data interface{}) error")
            })
            .blank()
            .block_with_close("type ValidatorChain struct {", "}", |b| {
                b.line("validators []Validator")
            })
            .blank()
            .block_with_close("func NewValidatorChain() *ValidatorChain {", "}", |b| {
                b.line("return &ValidatorChain{validators: make([]Validator, 0)}")
            })
            .blank()
            .block_with_close(
                "func (c *ValidatorChain) Add(v Validator) *ValidatorChain {",
                "}",
                |b| {
                    b.line("c.validators = append(c.validators, v)")
                        .line("return c")
                },
            )
            .blank()
            .block_with_close(
                "func (c *ValidatorChain) Validate(ctx context.Context, data interface{}) error {",
                "}",
                |b| {
                    b.block_with_close("for _, v := range c.validators {", "}", |b| {
                        b.block_with_close(
                            "if err := v.Validate(ctx, data); err != nil {",
                            "}",
                            |b| b.line("return err"),
                        )
                    })
                    .line("return nil")
                },
            )
            .blank()
            .block_with_close("type ExistsValidator struct {", "}", |b| b.line("db *gorm.DB"))
            .blank()
            .block_with_close(
                "func NewExistsValidator(db *gorm.DB) *ExistsValidator {",
                "}",
                |b| b.line("return &ExistsValidator{db: db}"),
            )
            .blank()
            .block_with_close(
                "func (v *ExistsValidator) Validate(ctx context.Context, data interface{}) error {",
                "}",
                |b| {
                    b.line("id := data.(string)")
                        .line(&format!("var entity database.{}", entity))
                        .block_with_close(
                            "if err := v.db.WithContext(ctx).First(&entity, \"id = ?\", id).Error; err != nil {",
                            "}",
                            |b| b.line(&format!("return errors.New(\"{} not found\")", module)),
                        )
                        .line("return nil")
                },
            )
            .build()
    }
}
