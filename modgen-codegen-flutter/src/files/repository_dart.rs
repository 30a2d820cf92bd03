//! Dio repository generator.

use modgen_codegen::{ArtifactTemplate, CodeBuilder, Pagination, RenderContext, RoutePaths};
use modgen_core::ArtifactKind;

use super::{ID_PLACEHOLDER, feature_dir};

/// Remote CRUD calls against the module's REST collection.
pub struct RepositoryDart<'a> {
    ctx: &'a RenderContext<'a>,
    pagination: &'a Pagination,
}

impl<'a> RepositoryDart<'a> {
    pub fn new(ctx: &'a RenderContext<'a>, pagination: &'a Pagination) -> Self {
        Self { ctx, pagination }
    }
}

impl ArtifactTemplate for RepositoryDart<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Repository
    }

    fn path(&self) -> String {
        let module = self.ctx.entity.module();
        format!(
            "{}/data/repositories/{}_repository.dart",
            feature_dir(module),
            module
        )
    }

    fn render(&self) -> String {
        let entity = self.ctx.entity.pascal();
        let routes = RoutePaths::new(self.ctx.entity);
        let collection = routes.collection();
        let item = routes.item(ID_PLACEHOLDER);

        CodeBuilder::dart()
            .line("import 'package:dio/dio.dart';")
            .line(&format!(
                "import '../models/{}_model.dart';",
                self.ctx.entity.module()
            ))
            .blank()
            .block_with_close(&format!("class {}Repository {{", entity), "}", |b| {
                b.line("final Dio _dio;")
                    .blank()
                    .line(&format!("{}Repository(this._dio);", entity))
                    .blank()
                    .block_with_close(
                        &format!(
                            "Future<List<{}>> getAll({{int page = {}, int perPage = {}, String? search}}) async {{",
                            entity, self.pagination.default_page, self.pagination.default_per_page
                        ),
                        "}",
                        |b| {
                            b.line("final response = await _dio.get(")
                                .indented(|b| {
                                    b.line(&format!("'{}',", collection))
                                        .block_with_close("queryParameters: {", "},", |b| {
                                            b.line("'page': page,")
                                                .line("'per_page': perPage,")
                                                .line("if (search != null) 'search': search,")
                                        })
                                })
                                .line(");")
                                .line("final items = response.data['items'] as List;")
                                .line(&format!(
                                    "return items.map((e) => {}.fromJson(e)).toList();",
                                    entity
                                ))
                        },
                    )
                    .blank()
                    .block_with_close(
                        &format!("Future<{}> getById(String id) async {{", entity),
                        "}",
                        |b| {
                            b.line(&format!("final response = await _dio.get('{}');", item))
                                .line(&format!("return {}.fromJson(response.data);", entity))
                        },
                    )
                    .blank()
                    .block_with_close(
                        &format!(
                            "Future<{0}> create(Create{0}Request request) async {{",
                            entity
                        ),
                        "}",
                        |b| {
                            b.line(&format!(
                                "final response = await _dio.post('{}', data: request.toJson());",
                                collection
                            ))
                            .line(&format!("return {}.fromJson(response.data);", entity))
                        },
                    )
                    .blank()
                    .block_with_close(
                        &format!(
                            "Future<{0}> update(String id, Update{0}Request request) async {{",
                            entity
                        ),
                        "}",
                        |b| {
                            b.line(&format!(
                                "final response = await _dio.put('{}', data: request.toJson());",
                                item
                            ))
                            .line(&format!("return {}.fromJson(response.data);", entity))
                        },
                    )
                    .blank()
                    .block_with_close("Future<void> delete(String id) async {", "}", |b| {
                        b.line(&format!("await _dio.delete('{}');", item))
                    })
            })
            .build()
    }
}
