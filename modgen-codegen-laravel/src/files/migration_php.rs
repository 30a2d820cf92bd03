//! Schema migration generator.

use modgen_codegen::{ArtifactTemplate, RenderContext, TypeMapper};
use modgen_core::ArtifactKind;

use super::php_file;
use crate::LaravelTypeMapper;

/// Anonymous migration creating the entity table.
///
/// File names carry no timestamp prefix so output stays reproducible.
pub struct MigrationPhp<'a> {
    ctx: &'a RenderContext<'a>,
    mapper: &'a LaravelTypeMapper,
}

impl<'a> MigrationPhp<'a> {
    pub fn new(ctx: &'a RenderContext<'a>, mapper: &'a LaravelTypeMapper) -> Self {
        Self { ctx, mapper }
    }
}

impl ArtifactTemplate for MigrationPhp<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Migration
    }

    fn path(&self) -> String {
        format!(
            "database/migrations/create_{}_table.php",
            self.ctx.entity.module_plural()
        )
    }

    fn render(&self) -> String {
        let table = self.ctx.entity.module_plural();

        php_file(None)
            .line("use Illuminate\\Database\\Migrations\\Migration;")
            .line("use Illuminate\\Database\\Schema\\Blueprint;")
            .line("use Illuminate\\Support\\Facades\\Schema;")
            .blank()
            .line("return new class extends Migration")
            .block_with_close("{", "};", |b| {
                b.line("public function up(): void")
                    .block_with_close("{", "}", |b| {
                        b.block_with_close(
                            &format!("Schema::create('{}', function (Blueprint $table) {{", table),
                            "});",
                            |b| {
                                b.line("$table->uuid('id')->primary();")
                                    .each(self.ctx.fields, |b, f| {
                                        let nullable = if f.required { "" } else { "->nullable()" };
                                        b.line(&format!(
                                            "$table->{}('{}'){};",
                                            self.mapper.map_type(&f.ty),
                                            f.name,
                                            nullable
                                        ))
                                    })
                                    .line("$table->timestamps();")
                                    .line("$table->softDeletes();")
                            },
                        )
                    })
                    .blank()
                    .line("public function down(): void")
                    .block_with_close("{", "}", |b| {
                        b.line(&format!("Schema::dropIfExists('{}');", table))
                    })
            })
            .build()
    }
}
