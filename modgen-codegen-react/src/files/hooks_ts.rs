//! TanStack Query hooks generator.

use modgen_codegen::{ArtifactTemplate, CodeBuilder, RenderContext};
use modgen_core::ArtifactKind;

use super::feature_dir;

const INVALIDATE: &str = "onSuccess: () => queryClient.invalidateQueries({ queryKey: [QUERY_KEY] }),";

/// Query and mutation hooks over the API client.
pub struct HooksTs<'a> {
    ctx: &'a RenderContext<'a>,
}

impl<'a> HooksTs<'a> {
    pub fn new(ctx: &'a RenderContext<'a>) -> Self {
        Self { ctx }
    }

    /// `continuation` is the wrapped body of a `mutationFn` that does not fit on one line.
    fn mutation(
        builder: CodeBuilder,
        name: &str,
        mutation_fn: &str,
        continuation: Option<&str>,
    ) -> CodeBuilder {
        builder.block_with_close(&format!("export function {}() {{", name), "}", |b| {
            b.line("const queryClient = useQueryClient();")
                .block_with_close("return useMutation({", "});", |b| {
                    b.line(mutation_fn)
                        .indented(|b| b.each(continuation, |b, line| b.line(line)))
                        .line(INVALIDATE)
                })
        })
    }
}

impl ArtifactTemplate for HooksTs<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::State
    }

    fn path(&self) -> String {
        format!("{}/hooks.ts", feature_dir(self.ctx.entity.module()))
    }

    fn render(&self) -> String {
        let entity = self.ctx.entity.pascal();
        let api = format!("{}Api", self.ctx.entity.camel());

        let builder = CodeBuilder::typescript()
            .line("import { useQuery, useMutation, useQueryClient } from '@tanstack/react-query';")
            .line(&format!("import {{ {} }} from './api';", api))
            .line("import type {")
            .indented(|b| {
                b.line(&format!("Create{}Request,", entity))
                    .line(&format!("Update{}Request,", entity))
                    .line(&format!("{}ListParams,", entity))
            })
            .line("} from './types';")
            .blank()
            .line(&format!(
                "const QUERY_KEY = '{}';",
                self.ctx.entity.module_plural()
            ))
            .blank()
            .block_with_close(
                &format!(
                    "export function use{0}List(params?: {0}ListParams) {{",
                    entity
                ),
                "}",
                |b| {
                    b.block_with_close("return useQuery({", "});", |b| {
                        b.line("queryKey: [QUERY_KEY, params],")
                            .line(&format!("queryFn: () => {}.list(params),", api))
                    })
                },
            )
            .blank()
            .block_with_close(
                &format!("export function use{}(id: string) {{", entity),
                "}",
                |b| {
                    b.block_with_close("return useQuery({", "});", |b| {
                        b.line("queryKey: [QUERY_KEY, id],")
                            .line(&format!("queryFn: () => {}.get(id),", api))
                            .line("enabled: !!id,")
                    })
                },
            )
            .blank();

        let builder = Self::mutation(
            builder,
            &format!("useCreate{}", entity),
            &format!(
                "mutationFn: (data: Create{}Request) => {}.create(data),",
                entity, api
            ),
            None,
        )
        .blank();

        let builder = Self::mutation(
            builder,
            &format!("useUpdate{}", entity),
            &format!(
                "mutationFn: ({{ id, data }}: {{ id: string; data: Update{}Request }}) =>",
                entity
            ),
            Some(&format!("{}.update(id, data),", api)),
        )
        .blank();

        Self::mutation(
            builder,
            &format!("useDelete{}", entity),
            &format!("mutationFn: (id: string) => {}.delete(id),", api),
            None,
        )
        .build()
    }
}
