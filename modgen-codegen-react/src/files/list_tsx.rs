//! List component generator.

use modgen_codegen::{ArtifactTemplate, CodeBuilder, RenderContext};
use modgen_core::ArtifactKind;

use super::feature_dir;

pub struct ListTsx<'a> {
    ctx: &'a RenderContext<'a>,
}

impl<'a> ListTsx<'a> {
    pub fn new(ctx: &'a RenderContext<'a>) -> Self {
        Self { ctx }
    }
}

impl ArtifactTemplate for ListTsx<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::View
    }

    fn path(&self) -> String {
        format!(
            "{}/components/{}List.tsx",
            feature_dir(self.ctx.entity.module()),
            self.ctx.entity.pascal()
        )
    }

    fn render(&self) -> String {
        let entity = self.ctx.entity.pascal();

        CodeBuilder::typescript()
            .line(&format!(
                "import {{ use{0}List, useDelete{0} }} from '../hooks';",
                entity
            ))
            .line(&format!("import type {{ {} }} from '../types';", entity))
            .blank()
            .block_with_close(&format!("export function {}List() {{", entity), "}", |b| {
                b.line(&format!(
                    "const {{ data, isLoading, error }} = use{}List();",
                    entity
                ))
                .line(&format!("const deleteMutation = useDelete{}();", entity))
                .blank()
                .line("if (isLoading) return <div>Loading...</div>;")
                .line("if (error) return <div>Error: {error.message}</div>;")
                .blank()
                .block_with_close("const handleDelete = (id: string) => {", "};", |b| {
                    b.block_with_close("if (confirm('Are you sure?')) {", "}", |b| {
                        b.line("deleteMutation.mutate(id);")
                    })
                })
                .blank()
                .block_with_close("return (", ");", |b| {
                    b.block_with_close("<div>", "</div>", |b| {
                        b.line(&format!("<h1>{} List</h1>", entity))
                            .block_with_close("<ul>", "</ul>", |b| {
                                b.block_with_close(
                                    &format!("{{data?.items.map((item: {}) => (", entity),
                                    "))}",
                                    |b| {
                                        b.block_with_close("<li key={item.id}>", "</li>", |b| {
                                            b.line("{JSON.stringify(item)}").line(
                                                "<button onClick={() => handleDelete(item.id)}>Delete</button>",
                                            )
                                        })
                                    },
                                )
                            })
                    })
                })
            })
            .build()
    }
}
