//! Output tests for Go code generation.

use modgen_codegen::{GenerateOptions, RenderContext, StackCodegen};
use modgen_codegen_go::GoCodegen;
use modgen_core::{ArtifactSet, EntityDescriptor};

const PROJECT: &str = "github.com/acme/shop";

fn generate(name: &str, fields: &str, options: GenerateOptions) -> ArtifactSet {
    let codegen = GoCodegen::new();
    let entity = EntityDescriptor::new(name);
    let fields = codegen.field_parser().parse(fields);
    let ctx = RenderContext {
        entity: &entity,
        fields: &fields,
        project: PROJECT,
        options: &options,
    };
    codegen.render(&ctx)
}

fn get_file<'a>(files: &'a ArtifactSet, path: &str) -> &'a str {
    files
        .get(path)
        .map(|a| a.content.as_str())
        .unwrap_or_else(|| panic!("{} not generated", path))
}

#[test]
fn test_init_routes() {
    let files = generate("order_item", "sku:string,qty:int64?", GenerateOptions::default());
    let init = get_file(&files, "internal/modules/order_item/init.go");

    let expected = "package order_item\n\
        \n\
        import (\n\
        \t\"github.com/gin-gonic/gin\"\n\
        \t\"gorm.io/gorm\"\n\
        \n\
        \t\"github.com/acme/shop/internal/middleware\"\n\
        \t\"github.com/acme/shop/internal/modules/order_item/controllers\"\n\
        \t\"github.com/acme/shop/internal/modules/order_item/usecases\"\n\
        )\n\
        \n\
        func Init(r *gin.Engine, db *gorm.DB, authMiddleware *middleware.AuthMiddleware) {\n\
        \tusecase := usecases.NewOrderItemUsecase(db)\n\
        \tcontroller := controllers.NewOrderItemController(usecase)\n\
        \n\
        \tgroup := r.Group(\"/order-items\")\n\
        \tgroup.Use(authMiddleware.Authenticate())\n\
        \t{\n\
        \t\tgroup.POST(\"\", controller.Create)\n\
        \t\tgroup.GET(\"\", controller.List)\n\
        \t\tgroup.GET(\"/:id\", controller.GetByID)\n\
        \t\tgroup.PUT(\"/:id\", controller.Update)\n\
        \t\tgroup.DELETE(\"/:id\", controller.Delete)\n\
        \t}\n\
        }\n";

    assert_eq!(init, expected);
}

#[test]
fn test_model_fields() {
    let files = generate("product", "name:string,price:int64?,active:bool", GenerateOptions::default());
    let model = get_file(&files, "pkg/database/product.go");

    assert!(model.starts_with("package database\n"));
    assert!(model.contains("type Product struct {"));
    assert!(model.contains("\tName string `gorm:\"type:varchar(255)\" json:\"name\"`\n"));
    assert!(model.contains("\tPrice *int64 `gorm:\"type:bigint\" json:\"price\"`\n"));
    assert!(model.contains("\tActive bool `gorm:\"type:boolean\" json:\"active\"`\n"));
    assert!(model.contains("func (e *Product) BeforeCreate(tx *gorm.DB) error {"));
}

#[test]
fn test_model_unknown_type_uses_fallback_column() {
    let files = generate("product", "sku:uuid.UUID", GenerateOptions::default());
    let model = get_file(&files, "pkg/database/product.go");

    assert!(model.contains("\tSku uuid.UUID `gorm:\"type:varchar(255)\" json:\"sku\"`\n"));
}

#[test]
fn test_optional_pointer_is_not_doubled() {
    let files = generate("product", "note:*string?", GenerateOptions::default());
    let model = get_file(&files, "pkg/database/product.go");
    let dto = get_file(&files, "internal/modules/product/dtos/product_dto.go");

    assert!(model.contains("\tNote *string `gorm:\"type:varchar(255)\" json:\"note\"`\n"));
    assert!(dto.contains("\tNote *string `json:\"note\"`\n"));
    assert!(!dto.contains("**string"));
}

#[test]
fn test_dto_bindings() {
    let files = generate("product", "name,price:int64?", GenerateOptions::default());
    let dto = get_file(&files, "internal/modules/product/dtos/product_dto.go");

    assert!(dto.contains("import \"github.com/acme/shop/pkg/database\""));
    assert!(dto.contains("\tName string `json:\"name\" binding:\"required\"`\n"));
    assert!(dto.contains("\tPrice int64 `json:\"price\" binding:\"omitempty\"`\n"));
    assert!(dto.contains("binding:\"omitempty,min=1,max=100\""));
    assert!(dto.contains("\tPrice *int64 `json:\"price\"`\n"));
    assert!(dto.contains("CreatedAt: entity.CreatedAt.Format(\"2006-01-02T15:04:05Z\"),"));
    assert!(dto.contains("\ttotalPages := int(total) / perPage\n\tif int(total)%perPage > 0 {\n\t\ttotalPages++\n\t}\n"));
}

#[test]
fn test_usecase_partial_update() {
    let files = generate("product", "name,price:int64?", GenerateOptions::default());
    let usecase = get_file(&files, "internal/modules/product/usecases/product_usecase.go");

    assert!(usecase.contains(
        "\tif req.Name != nil {\n\t\tupdates[\"name\"] = *req.Name\n\t}\n\tif req.Price != nil {\n\t\tupdates[\"price\"] = *req.Price\n\t}\n"
    ));
}

#[test]
fn test_usecase_search_skips_foreign_keys() {
    let files = generate("post", "user_id:string,title:string", GenerateOptions::default());
    let usecase = get_file(&files, "internal/modules/post/usecases/post_usecase.go");

    assert!(usecase.contains("query.Where(\"title LIKE ?\", \"%\"+req.Search+\"%\")"));
}

#[test]
fn test_usecase_search_falls_back_to_name() {
    let files = generate("price", "amount:int64", GenerateOptions::default());
    let usecase = get_file(&files, "internal/modules/price/usecases/price_usecase.go");

    assert!(usecase.contains("query.Where(\"name LIKE ?\""));
}

#[test]
fn test_list_pagination_defaults() {
    let files = generate("product", "name", GenerateOptions::default());
    let usecase = get_file(&files, "internal/modules/product/usecases/product_usecase.go");
    let controller = get_file(&files, "internal/modules/product/controllers/product_controller.go");

    for content in [usecase, controller] {
        assert!(content.contains("page, perPage := req.Page, req.PerPage"));
        assert!(content.contains("if page < 1 {\n\t\tpage = 1\n\t}"));
        assert!(content.contains("if perPage < 1 {\n\t\tperPage = 20\n\t}"));
    }
    assert!(usecase.contains("offset := (page - 1) * perPage"));
}

#[test]
fn test_controller_handlers() {
    let files = generate("product", "name", GenerateOptions::default());
    let controller = get_file(&files, "internal/modules/product/controllers/product_controller.go");

    for handler in ["Create", "GetByID", "Update", "Delete", "List"] {
        assert!(
            controller.contains(&format!("func (c *ProductController) {}(ctx *gin.Context) {{", handler)),
            "missing handler {}",
            handler
        );
    }
    assert!(controller.contains("\"Product not found\""));
    assert!(controller.contains("response.Created(ctx, dtos.ToProductResponse(entity))"));
}

#[test]
fn test_validator_only_with_option() {
    let without = generate("product", "name", GenerateOptions::default());
    assert!(without.get("internal/modules/product/validators/product_validator.go").is_none());

    let with = generate("product", "name", GenerateOptions { validators: true });
    let validator = get_file(&with, "internal/modules/product/validators/product_validator.go");

    assert!(validator.contains("type ValidatorChain struct {"));
    assert!(validator.contains("return errors.New(\"product not found\")"));
}

#[test]
fn test_field_order_preserved() {
    let files = generate("order_item", "sku:string,qty:int64?", GenerateOptions::default());

    for artifact in &files {
        let content = &artifact.content;
        if let (Some(sku), Some(qty)) = (content.find("Sku"), content.find("Qty")) {
            assert!(sku < qty, "field order broken in {}", artifact.path);
        }
    }
}

#[test]
fn test_deterministic() {
    let first = generate("order_item", "sku,qty:int64?", GenerateOptions { validators: true });
    let second = generate("order_item", "sku,qty:int64?", GenerateOptions { validators: true });

    assert_eq!(first, second);
}

#[test]
fn test_artifact_paths_with_validators() {
    let files = generate("Category", "title", GenerateOptions { validators: true });

    insta::assert_debug_snapshot!(files.paths(), @r#"
    [
        "pkg/database/category.go",
        "internal/modules/category/dtos/category_dto.go",
        "internal/modules/category/usecases/category_usecase.go",
        "internal/modules/category/controllers/category_controller.go",
        "internal/modules/category/init.go",
        "internal/modules/category/validators/category_validator.go",
    ]
    "#);
}
