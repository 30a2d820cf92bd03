//! Eloquent model generator.

use modgen_codegen::{ArtifactTemplate, RenderContext};
use modgen_core::ArtifactKind;

use super::{php_file, quoted_list};
use crate::LaravelTypeMapper;

/// The Eloquent model with mass-assignable fields and casts.
pub struct ModelPhp<'a> {
    ctx: &'a RenderContext<'a>,
    mapper: &'a LaravelTypeMapper,
}

impl<'a> ModelPhp<'a> {
    pub fn new(ctx: &'a RenderContext<'a>, mapper: &'a LaravelTypeMapper) -> Self {
        Self { ctx, mapper }
    }

    fn casts(&self) -> String {
        self.ctx
            .fields
            .iter()
            .filter_map(|f| {
                self.mapper
                    .cast(&f.ty)
                    .map(|cast| format!("'{}' => '{}'", f.name, cast))
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl ArtifactTemplate for ModelPhp<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Model
    }

    fn path(&self) -> String {
        format!("app/Models/{}.php", self.ctx.entity.pascal())
    }

    fn render(&self) -> String {
        let fillable = quoted_list(self.ctx.fields.iter().map(|f| f.name.as_str()));

        php_file(Some("App\\Models"))
            .line("use Illuminate\\Database\\Eloquent\\Factories\\HasFactory;")
            .line("use Illuminate\\Database\\Eloquent\\Model;")
            .line("use Illuminate\\Database\\Eloquent\\SoftDeletes;")
            .blank()
            .line(&format!("class {} extends Model", self.ctx.entity.pascal()))
            .block_with_close("{", "}", |b| {
                b.line("use HasFactory, SoftDeletes;")
                    .blank()
                    .line(&format!("protected $fillable = [{}];", fillable))
                    .blank()
                    .line(&format!("protected $casts = [{}];", self.casts()))
            })
            .build()
    }
}
