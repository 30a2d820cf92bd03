//! API client generator.

use modgen_codegen::{ArtifactTemplate, CodeBuilder, RenderContext, RoutePaths};
use modgen_core::ArtifactKind;

use super::{ID_PLACEHOLDER, feature_dir};

/// `<camel>Api` object wrapping the shared `apiClient`.
pub struct ApiTs<'a> {
    ctx: &'a RenderContext<'a>,
}

impl<'a> ApiTs<'a> {
    pub fn new(ctx: &'a RenderContext<'a>) -> Self {
        Self { ctx }
    }
}

impl ArtifactTemplate for ApiTs<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::ApiClient
    }

    fn path(&self) -> String {
        format!("{}/api.ts", feature_dir(self.ctx.entity.module()))
    }

    fn render(&self) -> String {
        let entity = self.ctx.entity.pascal();
        let routes = RoutePaths::new(self.ctx.entity);
        let item_url = format!("`${{BASE_URL}}/{}`", ID_PLACEHOLDER);

        CodeBuilder::typescript()
            .line("import { apiClient } from '@/lib/api';")
            .line("import type {")
            .indented(|b| {
                b.line(&format!("{},", entity))
                    .line(&format!("Create{}Request,", entity))
                    .line(&format!("Update{}Request,", entity))
                    .line(&format!("{}ListParams,", entity))
                    .line(&format!("{}ListResponse,", entity))
            })
            .line("} from './types';")
            .blank()
            .line(&format!("const BASE_URL = '{}';", routes.collection()))
            .blank()
            .block_with_close(
                &format!("export const {}Api = {{", self.ctx.entity.camel()),
                "};",
                |b| {
                    b.line(&format!("list: (params?: {}ListParams) =>", entity))
                        .indented(|b| {
                            b.line(&format!(
                                "apiClient.get<{}ListResponse>(BASE_URL, {{ params }}),",
                                entity
                            ))
                        })
                        .blank()
                        .line("get: (id: string) =>")
                        .indented(|b| b.line(&format!("apiClient.get<{}>({}),", entity, item_url)))
                        .blank()
                        .line(&format!("create: (data: Create{}Request) =>", entity))
                        .indented(|b| b.line(&format!("apiClient.post<{}>(BASE_URL, data),", entity)))
                        .blank()
                        .line(&format!(
                            "update: (id: string, data: Update{}Request) =>",
                            entity
                        ))
                        .indented(|b| {
                            b.line(&format!("apiClient.put<{}>({}, data),", entity, item_url))
                        })
                        .blank()
                        .line("delete: (id: string) =>")
                        .indented(|b| b.line(&format!("apiClient.delete({}),", item_url)))
                },
            )
            .build()
    }
}
