//! API resource generator.

use modgen_codegen::{ArtifactTemplate, RenderContext};
use modgen_core::ArtifactKind;

use super::php_file;

pub struct ResourcePhp<'a> {
    ctx: &'a RenderContext<'a>,
}

impl<'a> ResourcePhp<'a> {
    pub fn new(ctx: &'a RenderContext<'a>) -> Self {
        Self { ctx }
    }
}

impl ArtifactTemplate for ResourcePhp<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Resource
    }

    fn path(&self) -> String {
        format!("app/Http/Resources/{}Resource.php", self.ctx.entity.pascal())
    }

    fn render(&self) -> String {
        php_file(Some("App\\Http\\Resources"))
            .line("use Illuminate\\Http\\Request;")
            .line("use Illuminate\\Http\\Resources\\Json\\JsonResource;")
            .blank()
            .line(&format!(
                "class {}Resource extends JsonResource",
                self.ctx.entity.pascal()
            ))
            .block_with_close("{", "}", |b| {
                b.line("public function toArray(Request $request): array")
                    .block_with_close("{", "}", |b| {
                        b.block_with_close("return [", "];", |b| {
                            b.line("'id' => $this->id,")
                                .each(self.ctx.fields, |b, f| {
                                    b.line(&format!("'{0}' => $this->{0},", f.name))
                                })
                                .line("'created_at' => $this->created_at?->toISOString(),")
                                .line("'updated_at' => $this->updated_at?->toISOString(),")
                        })
                    })
            })
            .build()
    }
}
