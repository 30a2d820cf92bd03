//! Single-action use case generators.

use modgen_codegen::{ArtifactTemplate, CodeBuilder, RenderContext};
use modgen_core::ArtifactKind;

use super::php_file;

/// The write operations that get a dedicated use case class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseCaseAction {
    Create,
    Update,
    Delete,
}

impl UseCaseAction {
    /// Every action, in emission order.
    pub const ALL: [UseCaseAction; 3] = [
        UseCaseAction::Create,
        UseCaseAction::Update,
        UseCaseAction::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UseCaseAction::Create => "Create",
            UseCaseAction::Update => "Update",
            UseCaseAction::Delete => "Delete",
        }
    }
}

/// `app/UseCases/<Entity>/<Action><Entity>UseCase.php`.
pub struct UseCasePhp<'a> {
    ctx: &'a RenderContext<'a>,
    action: UseCaseAction,
}

impl<'a> UseCasePhp<'a> {
    pub fn new(ctx: &'a RenderContext<'a>, action: UseCaseAction) -> Self {
        Self { ctx, action }
    }

    fn execute(&self, builder: CodeBuilder, entity: &str) -> CodeBuilder {
        match self.action {
            UseCaseAction::Create => builder
                .line(&format!("public function execute(array $data): {}", entity))
                .block_with_close("{", "}", |b| {
                    b.line(&format!("return {}::create($data);", entity))
                }),
            UseCaseAction::Update => builder
                .line(&format!(
                    "public function execute({0} $item, array $data): {0}",
                    entity
                ))
                .block_with_close("{", "}", |b| {
                    b.line("$item->update($data);").line("return $item->fresh();")
                }),
            UseCaseAction::Delete => builder
                .line(&format!("public function execute({} $item): bool", entity))
                .block_with_close("{", "}", |b| b.line("return $item->delete();")),
        }
    }
}

impl ArtifactTemplate for UseCasePhp<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::UseCase
    }

    fn path(&self) -> String {
        let entity = self.ctx.entity.pascal();
        format!(
            "app/UseCases/{0}/{1}{0}UseCase.php",
            entity,
            self.action.as_str()
        )
    }

    fn render(&self) -> String {
        let entity = self.ctx.entity.pascal();

        php_file(Some(&format!("App\\UseCases\\{}", entity)))
            .line(&format!("use App\\Models\\{};", entity))
            .blank()
            .line(&format!("class {}{}UseCase", self.action.as_str(), entity))
            .block_with_close("{", "}", |b| self.execute(b, entity))
            .build()
    }
}
