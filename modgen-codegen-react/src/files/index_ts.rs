//! Barrel file generator.

use modgen_codegen::{ArtifactTemplate, CodeBuilder, RenderContext};
use modgen_core::ArtifactKind;

use super::feature_dir;

pub struct IndexTs<'a> {
    ctx: &'a RenderContext<'a>,
}

impl<'a> IndexTs<'a> {
    pub fn new(ctx: &'a RenderContext<'a>) -> Self {
        Self { ctx }
    }
}

impl ArtifactTemplate for IndexTs<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Index
    }

    fn path(&self) -> String {
        format!("{}/index.ts", feature_dir(self.ctx.entity.module()))
    }

    fn render(&self) -> String {
        let entity = self.ctx.entity.pascal();
        let components = [format!("{}List", entity), format!("{}Form", entity)];

        CodeBuilder::typescript()
            .each(["types", "api", "hooks"], |b, module| {
                b.line(&format!("export * from './{}';", module))
            })
            .each(&components, |b, component| {
                b.line(&format!("export * from './components/{}';", component))
            })
            .build()
    }
}
