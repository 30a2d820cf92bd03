//! Resource controller generator.

use modgen_codegen::{ArtifactTemplate, Pagination, RenderContext, TypeMapper, search_field};
use modgen_core::ArtifactKind;

use super::php_file;
use crate::LaravelTypeMapper;

/// REST controller delegating writes to the use cases.
pub struct ControllerPhp<'a> {
    ctx: &'a RenderContext<'a>,
    mapper: &'a LaravelTypeMapper,
    pagination: &'a Pagination,
}

impl<'a> ControllerPhp<'a> {
    pub fn new(
        ctx: &'a RenderContext<'a>,
        mapper: &'a LaravelTypeMapper,
        pagination: &'a Pagination,
    ) -> Self {
        Self {
            ctx,
            mapper,
            pagination,
        }
    }
}

impl ArtifactTemplate for ControllerPhp<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Controller
    }

    fn path(&self) -> String {
        format!(
            "app/Http/Controllers/{}Controller.php",
            self.ctx.entity.pascal()
        )
    }

    fn render(&self) -> String {
        let entity = self.ctx.entity.pascal();
        let var = format!("${}", self.ctx.entity.camel());
        let search = search_field(self.ctx.fields, self.mapper.string_type());

        php_file(Some("App\\Http\\Controllers"))
            .line(&format!("use App\\Http\\Requests\\{}Request;", entity))
            .line(&format!("use App\\Http\\Resources\\{}Resource;", entity))
            .line(&format!("use App\\Models\\{};", entity))
            .line(&format!("use App\\UseCases\\{0}\\Create{0}UseCase;", entity))
            .line(&format!("use App\\UseCases\\{0}\\Update{0}UseCase;", entity))
            .line(&format!("use App\\UseCases\\{0}\\Delete{0}UseCase;", entity))
            .line("use Illuminate\\Http\\Request;")
            .line("use Illuminate\\Http\\Resources\\Json\\AnonymousResourceCollection;")
            .blank()
            .line(&format!("class {}Controller extends Controller", entity))
            .block_with_close("{", "}", |b| {
                b.line("public function index(Request $request): AnonymousResourceCollection")
                    .block_with_close("{", "}", |b| {
                        b.line(&format!("$query = {}::query();", entity))
                            .blank()
                            .block_with_close("if ($request->has('search')) {", "}", |b| {
                                b.line(&format!(
                                    "$query->where('{}', 'like', '%' . $request->search . '%');",
                                    search
                                ))
                            })
                            .blank()
                            .line("$items = $query->orderBy('created_at', 'desc')")
                            .indented(|b| {
                                b.line(&format!(
                                    "->paginate($request->get('per_page', {}));",
                                    self.pagination.default_per_page
                                ))
                            })
                            .blank()
                            .line(&format!("return {}Resource::collection($items);", entity))
                    })
                    .blank()
                    .line(&format!(
                        "public function show({0} {1}): {0}Resource",
                        entity, var
                    ))
                    .block_with_close("{", "}", |b| {
                        b.line(&format!("return new {}Resource({});", entity, var))
                    })
                    .blank()
                    .line(&format!(
                        "public function store({0}Request $request, Create{0}UseCase $useCase): {0}Resource",
                        entity
                    ))
                    .block_with_close("{", "}", |b| {
                        b.line("$item = $useCase->execute($request->validated());")
                            .line(&format!("return new {}Resource($item);", entity))
                    })
                    .blank()
                    .line(&format!(
                        "public function update({0}Request $request, {0} {1}, Update{0}UseCase $useCase): {0}Resource",
                        entity, var
                    ))
                    .block_with_close("{", "}", |b| {
                        b.line(&format!(
                            "$item = $useCase->execute({}, $request->validated());",
                            var
                        ))
                        .line(&format!("return new {}Resource($item);", entity))
                    })
                    .blank()
                    .line(&format!(
                        "public function destroy({0} {1}, Delete{0}UseCase $useCase): \\Illuminate\\Http\\JsonResponse",
                        entity, var
                    ))
                    .block_with_close("{", "}", |b| {
                        b.line(&format!("$useCase->execute({});", var))
                            .line("return response()->json(['deleted' => true]);")
                    })
            })
            .build()
    }
}
