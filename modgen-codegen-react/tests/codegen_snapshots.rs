//! Snapshot tests for React code generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use modgen_codegen::{GenerateOptions, RenderContext, StackCodegen};
use modgen_codegen_react::ReactCodegen;
use modgen_core::{ArtifactSet, EntityDescriptor};

fn generate(name: &str, fields: &str) -> ArtifactSet {
    let codegen = ReactCodegen::new();
    let entity = EntityDescriptor::new(name);
    let fields = codegen.field_parser().parse(fields);
    let options = GenerateOptions::default();
    let ctx = RenderContext {
        entity: &entity,
        fields: &fields,
        project: "",
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
fn test_artifact_paths() {
    let files = generate("order_item", "sku,qty:number?");

    insta::assert_debug_snapshot!(files.paths(), @r#"
    [
        "src/features/order_item/types.ts",
        "src/features/order_item/api.ts",
        "src/features/order_item/hooks.ts",
        "src/features/order_item/components/OrderItemList.tsx",
        "src/features/order_item/components/OrderItemForm.tsx",
        "src/features/order_item/index.ts",
    ]
    "#);
}

#[test]
fn test_types() {
    let files = generate("order_item", "sku,qty:number?");
    let types = get_file(&files, "src/features/order_item/types.ts");

    insta::assert_snapshot!(types, @r"
    export interface OrderItem {
      id: string;
      sku: string;
      qty?: number;
      createdAt: string;
      updatedAt: string;
    }

    export interface CreateOrderItemRequest {
      sku: string;
      qty?: number;
    }

    export interface UpdateOrderItemRequest {
      sku?: string;
      qty?: number;
    }

    export interface OrderItemListParams {
      page?: number;
      perPage?: number;
      search?: string;
    }

    export interface OrderItemListResponse {
      items: OrderItem[];
      page: number;
      perPage: number;
      total: number;
      totalPages: number;
    }
    ");
}

#[test]
fn test_api_client() {
    let files = generate("order_item", "sku");
    let api = get_file(&files, "src/features/order_item/api.ts");

    insta::assert_snapshot!(api, @r"
    import { apiClient } from '@/lib/api';
    import type {
      OrderItem,
      CreateOrderItemRequest,
      UpdateOrderItemRequest,
      OrderItemListParams,
      OrderItemListResponse,
    } from './types';

    const BASE_URL = '/order-items';

    export const orderItemApi = {
      list: (params?: OrderItemListParams) =>
        apiClient.get<OrderItemListResponse>(BASE_URL, { params }),

      get: (id: string) =>
        apiClient.get<OrderItem>(`${BASE_URL}/${id}`),

      create: (data: CreateOrderItemRequest) =>
        apiClient.post<OrderItem>(BASE_URL, data),

      update: (id: string, data: UpdateOrderItemRequest) =>
        apiClient.put<OrderItem>(`${BASE_URL}/${id}`, data),

      delete: (id: string) =>
        apiClient.delete(`${BASE_URL}/${id}`),
    };
    ");
}

#[test]
fn test_index() {
    let files = generate("product", "name");
    let index = get_file(&files, "src/features/product/index.ts");

    insta::assert_snapshot!(index, @r"
    export * from './types';
    export * from './api';
    export * from './hooks';
    export * from './components/ProductList';
    export * from './components/ProductForm';
    ");
}

#[test]
fn test_hooks_query_key_and_mutations() {
    let files = generate("category", "title");
    let hooks = get_file(&files, "src/features/category/hooks.ts");

    assert!(hooks.contains("const QUERY_KEY = 'categories';"));
    assert!(hooks.contains("export function useCategoryList(params?: CategoryListParams) {"));
    assert!(hooks.contains("    enabled: !!id,\n"));
    assert!(hooks.contains(
        "    mutationFn: ({ id, data }: { id: string; data: UpdateCategoryRequest }) =>\n      categoryApi.update(id, data),\n"
    ));
    assert_eq!(
        hooks
            .matches("onSuccess: () => queryClient.invalidateQueries({ queryKey: [QUERY_KEY] }),")
            .count(),
        3
    );
}

#[test]
fn test_form_inputs() {
    let files = generate("product", "name,price:number,active:boolean?,launch:Date,tags:string[]");
    let form = get_file(&files, "src/features/product/components/ProductForm.tsx");

    assert!(form.contains(
        "      <input\n        name=\"name\"\n        type=\"text\"\n        placeholder=\"Name\"\n        required\n      />\n"
    ));
    assert!(form.contains("type=\"number\""));
    assert!(form.contains(
        "      <input\n        name=\"active\"\n        type=\"checkbox\"\n        placeholder=\"Active\"\n      />\n"
    ));
    assert!(form.contains("type=\"date\""));
    assert!(form.contains("        name=\"tags\"\n        type=\"text\"\n"));
}

#[test]
fn test_list_component() {
    let files = generate("product", "name");
    let list = get_file(&files, "src/features/product/components/ProductList.tsx");

    assert!(list.contains("import { useProductList, useDeleteProduct } from '../hooks';"));
    assert!(list.contains("<h1>Product List</h1>"));
    assert!(list.contains("{data?.items.map((item: Product) => ("));
}

#[test]
fn test_field_order_preserved() {
    let files = generate("order_item", "sku,qty:number?");

    for artifact in &files {
        let content = &artifact.content;
        if let (Some(sku), Some(qty)) = (content.find("sku"), content.find("qty")) {
            assert!(sku < qty, "field order broken in {}", artifact.path);
        }
    }
}
