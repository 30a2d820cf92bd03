//! Create form component generator.

use modgen_codegen::{ArtifactTemplate, CodeBuilder, RenderContext, TypeMapper};
use modgen_core::{ArtifactKind, to_pascal_case};

use super::feature_dir;
use crate::TypeScriptTypeMapper;

/// One uncontrolled input per field, typed through the form input table.
pub struct FormTsx<'a> {
    ctx: &'a RenderContext<'a>,
    mapper: &'a TypeScriptTypeMapper,
}

impl<'a> FormTsx<'a> {
    pub fn new(ctx: &'a RenderContext<'a>, mapper: &'a TypeScriptTypeMapper) -> Self {
        Self { ctx, mapper }
    }
}

impl ArtifactTemplate for FormTsx<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::View
    }

    fn path(&self) -> String {
        format!(
            "{}/components/{}Form.tsx",
            feature_dir(self.ctx.entity.module()),
            self.ctx.entity.pascal()
        )
    }

    fn render(&self) -> String {
        let entity = self.ctx.entity.pascal();

        CodeBuilder::typescript()
            .line(&format!("import {{ useCreate{} }} from '../hooks';", entity))
            .line(&format!(
                "import type {{ Create{}Request }} from '../types';",
                entity
            ))
            .blank()
            .block_with_close(&format!("export function {}Form() {{", entity), "}", |b| {
                b.line(&format!("const createMutation = useCreate{}();", entity))
                    .blank()
                    .block_with_close(
                        "const handleSubmit = (e: React.FormEvent<HTMLFormElement>) => {",
                        "};",
                        |b| {
                            b.line("e.preventDefault();")
                                .line("const formData = new FormData(e.currentTarget);")
                                .line(&format!(
                                    "const data = Object.fromEntries(formData) as unknown as Create{}Request;",
                                    entity
                                ))
                                .line("createMutation.mutate(data);")
                        },
                    )
                    .blank()
                    .block_with_close("return (", ");", |b| {
                        b.block_with_close("<form onSubmit={handleSubmit}>", "</form>", |b| {
                            b.each(self.ctx.fields, |b, f| {
                                b.line("<input")
                                    .indented(|b| {
                                        b.line(&format!("name=\"{}\"", f.name))
                                            .line(&format!("type=\"{}\"", self.mapper.map_type(&f.ty)))
                                            .line(&format!("placeholder=\"{}\"", to_pascal_case(&f.name)))
                                            .when(f.required, |b| b.line("required"))
                                    })
                                    .line("/>")
                            })
                            .block_with_close(
                                "<button type=\"submit\" disabled={createMutation.isPending}>",
                                "</button>",
                                |b| b.line("{createMutation.isPending ? 'Creating...' : 'Create'}"),
                            )
                        })
                    })
            })
            .build()
    }
}
