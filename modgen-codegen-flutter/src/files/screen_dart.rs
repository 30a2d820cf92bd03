//! List screen generator.

use modgen_codegen::{ArtifactTemplate, CodeBuilder, RenderContext};
use modgen_core::ArtifactKind;

use super::feature_dir;

pub struct ScreenDart<'a> {
    ctx: &'a RenderContext<'a>,
}

impl<'a> ScreenDart<'a> {
    pub fn new(ctx: &'a RenderContext<'a>) -> Self {
        Self { ctx }
    }
}

impl ArtifactTemplate for ScreenDart<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::View
    }

    fn path(&self) -> String {
        let module = self.ctx.entity.module();
        format!(
            "{}/presentation/screens/{}_list_screen.dart",
            feature_dir(module),
            module
        )
    }

    fn render(&self) -> String {
        let entity = self.ctx.entity.pascal();

        CodeBuilder::dart()
            .line("import 'package:flutter/material.dart';")
            .line("import 'package:flutter_riverpod/flutter_riverpod.dart';")
            .line(&format!(
                "import '../providers/{}_provider.dart';",
                self.ctx.entity.module()
            ))
            .blank()
            .block_with_close(
                &format!("class {}ListScreen extends ConsumerWidget {{", entity),
                "}",
                |b| {
                    b.line(&format!("const {}ListScreen({{super.key}});", entity))
                        .blank()
                        .line("@override")
                        .block_with_close(
                            "Widget build(BuildContext context, WidgetRef ref) {",
                            "}",
                            |b| {
                                b.line(&format!(
                                    "final itemsAsync = ref.watch({}ListProvider);",
                                    self.ctx.entity.camel()
                                ))
                                .blank()
                                .block_with_close("return Scaffold(", ");", |b| {
                                    b.line(&format!(
                                        "appBar: AppBar(title: const Text('{} List')),",
                                        entity
                                    ))
                                    .block_with_close("body: itemsAsync.when(", "),", |b| {
                                        b.block_with_close(
                                            "data: (items) => ListView.builder(",
                                            "),",
                                            |b| {
                                                b.line("itemCount: items.length,").block_with_close(
                                                    "itemBuilder: (context, index) {",
                                                    "},",
                                                    |b| {
                                                        b.line("final item = items[index];")
                                                            .block_with_close("return ListTile(", ");", |b| {
                                                                b.line("title: Text(item.id),").line(
                                                                    "subtitle: Text(item.createdAt.toString()),",
                                                                )
                                                            })
                                                    },
                                                )
                                            },
                                        )
                                        .line("loading: () => const Center(child: CircularProgressIndicator()),")
                                        .line("error: (error, stack) => Center(child: Text('Error: $error')),")
                                    })
                                    .block_with_close(
                                        "floatingActionButton: FloatingActionButton(",
                                        "),",
                                        |b| {
                                            b.line("onPressed: () {},")
                                                .line("child: const Icon(Icons.add),")
                                        },
                                    )
                                })
                            },
                        )
                },
            )
            .build()
    }
}
