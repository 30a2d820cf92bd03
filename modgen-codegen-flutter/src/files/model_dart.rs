//! Freezed model generator.

use modgen_codegen::{ArtifactTemplate, CodeBuilder, RenderContext, TypeMapper};
use modgen_core::{ArtifactKind, FieldDescriptor, to_camel_case};

use super::feature_dir;
use crate::DartTypeMapper;

/// Entity, create request and partial update request.
pub struct ModelDart<'a> {
    ctx: &'a RenderContext<'a>,
    mapper: &'a DartTypeMapper,
}

impl<'a> ModelDart<'a> {
    pub fn new(ctx: &'a RenderContext<'a>, mapper: &'a DartTypeMapper) -> Self {
        Self { ctx, mapper }
    }

    /// Named constructor parameter; renamed in JSON when the Dart name differs.
    fn param(&self, field: &FieldDescriptor) -> String {
        let name = to_camel_case(&field.name);
        let key = if name != field.name {
            format!("@JsonKey(name: '{}') ", field.name)
        } else {
            String::new()
        };

        if field.required {
            format!("{}required {} {},", key, field.ty, name)
        } else {
            format!("{}{} {},", key, self.mapper.nullable_type(&field.ty), name)
        }
    }

    fn freezed<F>(&self, builder: CodeBuilder, class: &str, fields: F) -> CodeBuilder
    where
        F: FnOnce(CodeBuilder) -> CodeBuilder,
    {
        builder
            .line("@freezed")
            .block_with_close(&format!("class {0} with _${0} {{", class), "}", |b| {
                b.block_with_close(
                    &format!("const factory {}({{", class),
                    &format!("}}) = _{};", class),
                    fields,
                )
                .blank()
                .line(&format!(
                    "factory {0}.fromJson(Map<String, dynamic> json) => _${0}FromJson(json);",
                    class
                ))
            })
    }

    /// Plain class whose `toJson` only emits the keys that were set.
    fn update_request(&self, builder: CodeBuilder, entity: &str) -> CodeBuilder {
        let class = format!("Update{}Request", entity);
        let names: Vec<String> = self
            .ctx
            .fields
            .iter()
            .map(|f| to_camel_case(&f.name))
            .collect();
        let params = names
            .iter()
            .map(|name| format!("this.{}", name))
            .collect::<Vec<_>>()
            .join(", ");

        builder.block_with_close(&format!("class {} {{", class), "}", |b| {
            let b = b
                .each(self.ctx.fields.iter().zip(&names), |b, (f, name)| {
                    b.line(&format!(
                        "final {} {};",
                        self.mapper.nullable_type(&f.ty),
                        name
                    ))
                })
                .when(!names.is_empty(), |b| b.blank());
            let b = if names.is_empty() {
                b.line(&format!("const {}();", class))
            } else {
                b.line(&format!("const {}({{{}}});", class, params))
            };
            b.blank().block_with_close("Map<String, dynamic> toJson() => {", "};", |b| {
                b.each(self.ctx.fields.iter().zip(&names), |b, (f, name)| {
                    let encoder = self.mapper.map_type(&f.ty);
                    let value = if encoder.is_empty() {
                        name.clone()
                    } else {
                        format!("{}!{}", name, encoder)
                    };
                    b.line(&format!("if ({} != null) '{}': {},", name, f.name, value))
                })
            })
        })
    }
}

impl ArtifactTemplate for ModelDart<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Model
    }

    fn path(&self) -> String {
        let module = self.ctx.entity.module();
        format!("{}/data/models/{}_model.dart", feature_dir(module), module)
    }

    fn render(&self) -> String {
        let entity = self.ctx.entity.pascal();
        let module = self.ctx.entity.module();
        let fields = self.ctx.fields;

        let builder = CodeBuilder::dart()
            .line("import 'package:freezed_annotation/freezed_annotation.dart';")
            .blank()
            .line(&format!("part '{}_model.freezed.dart';", module))
            .line(&format!("part '{}_model.g.dart';", module))
            .blank();

        let builder = self
            .freezed(builder, entity, |b| {
                b.line("required String id,")
                    .each(fields, |b, f| b.line(&self.param(f)))
                    .line("@JsonKey(name: 'created_at') required DateTime createdAt,")
                    .line("@JsonKey(name: 'updated_at') required DateTime updatedAt,")
            })
            .blank();

        let builder = self
            .freezed(builder, &format!("Create{}Request", entity), |b| {
                b.each(fields, |b, f| b.line(&self.param(f)))
            })
            .blank();

        self.update_request(builder, entity).build()
    }
}
