//! Riverpod provider generator.

use modgen_codegen::{ArtifactTemplate, CodeBuilder, RenderContext};
use modgen_core::ArtifactKind;

use super::feature_dir;

/// Repository, list and single-item providers.
pub struct ProviderDart<'a> {
    ctx: &'a RenderContext<'a>,
}

impl<'a> ProviderDart<'a> {
    pub fn new(ctx: &'a RenderContext<'a>) -> Self {
        Self { ctx }
    }
}

impl ArtifactTemplate for ProviderDart<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::State
    }

    fn path(&self) -> String {
        let module = self.ctx.entity.module();
        format!(
            "{}/presentation/providers/{}_provider.dart",
            feature_dir(module),
            module
        )
    }

    fn render(&self) -> String {
        let entity = self.ctx.entity.pascal();
        let module = self.ctx.entity.module();
        let camel = self.ctx.entity.camel();
        let watch_repository = format!(
            "final repository = ref.watch({}RepositoryProvider);",
            camel
        );

        CodeBuilder::dart()
            .line("import 'package:flutter_riverpod/flutter_riverpod.dart';")
            .line(&format!("import '../data/models/{}_model.dart';", module))
            .line(&format!(
                "import '../data/repositories/{}_repository.dart';",
                module
            ))
            .blank()
            .block_with_close(
                &format!(
                    "final {}RepositoryProvider = Provider<{}Repository>((ref) {{",
                    camel, entity
                ),
                "});",
                |b| b.line("throw UnimplementedError('Provide Dio instance');"),
            )
            .blank()
            .block_with_close(
                &format!(
                    "final {}ListProvider = FutureProvider<List<{}>>((ref) async {{",
                    camel, entity
                ),
                "});",
                |b| b.line(&watch_repository).line("return repository.getAll();"),
            )
            .blank()
            .block_with_close(
                &format!(
                    "final {}Provider = FutureProvider.family<{}, String>((ref, id) async {{",
                    camel, entity
                ),
                "});",
                |b| b.line(&watch_repository).line("return repository.getById(id);"),
            )
            .build()
    }
}
