//! Form request generator.

use modgen_codegen::{ArtifactTemplate, RenderContext};
use modgen_core::ArtifactKind;

use super::php_file;

/// Validation rules shared by store and update.
///
/// Required fields are only enforced on `POST`; updates accept any subset.
pub struct RequestPhp<'a> {
    ctx: &'a RenderContext<'a>,
}

impl<'a> RequestPhp<'a> {
    pub fn new(ctx: &'a RenderContext<'a>) -> Self {
        Self { ctx }
    }
}

impl ArtifactTemplate for RequestPhp<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Request
    }

    fn path(&self) -> String {
        format!("app/Http/Requests/{}Request.php", self.ctx.entity.pascal())
    }

    fn render(&self) -> String {
        let has_required = self.ctx.fields.iter().any(|f| f.required);

        php_file(Some("App\\Http\\Requests"))
            .line("use Illuminate\\Foundation\\Http\\FormRequest;")
            .blank()
            .line(&format!(
                "class {}Request extends FormRequest",
                self.ctx.entity.pascal()
            ))
            .block_with_close("{", "}", |b| {
                b.line("public function authorize(): bool")
                    .block_with_close("{", "}", |b| b.line("return true;"))
                    .blank()
                    .line("public function rules(): array")
                    .block_with_close("{", "}", |b| {
                        b.when(has_required, |b| {
                            b.line("$required = $this->isMethod('POST') ? 'required' : 'sometimes';")
                                .blank()
                        })
                        .block_with_close("return [", "];", |b| {
                            b.each(self.ctx.fields, |b, f| {
                                let presence = if f.required { "$required" } else { "'nullable'" };
                                b.line(&format!("'{}' => [{}, '{}'],", f.name, presence, f.ty))
                            })
                        })
                    })
            })
            .build()
    }
}
