//! End-to-end tests through the generator facade.

use std::fs;

use modgen::{Error, GenerateOptions, Overwrite, Stack, WriteResult, generate};
use tempfile::TempDir;

fn render(stack: &str, name: &str, fields: &str) -> modgen::ArtifactSet {
    generate(stack, name, fields, "github.com/acme/shop", &GenerateOptions::default()).unwrap()
}

#[test]
fn test_every_stack_uses_the_same_route_segment() {
    // Laravel registers routes outside the generated module.
    for stack in [Stack::Go, Stack::React, Stack::Flutter] {
        let files = render(stack.as_str(), "order_item", "sku:string,qty:int64?");
        let mentions = files
            .iter()
            .filter(|a| a.content.contains("/order-items"))
            .count();

        assert!(mentions > 0, "{} never uses the order-items route", stack);
        assert!(
            files.iter().all(|a| !a.content.contains("order_items/")),
            "{} builds a route from the snake-case plural",
            stack
        );
    }
}

#[test]
fn test_field_order_preserved_for_every_stack() {
    for stack in Stack::ALL {
        let files = render(stack.as_str(), "order_item", "sku:string,qty:int64?");

        for artifact in &files {
            let content = &artifact.content;
            if let (Some(sku), Some(qty)) = (content.find("sku"), content.find("qty")) {
                assert!(sku < qty, "{}: field order broken in {}", stack, artifact.path);
            }
        }
    }
}

#[test]
fn test_generation_is_deterministic() {
    for stack in Stack::ALL {
        let first = render(stack.as_str(), "category", "title,position:int?,parent_id");
        let second = render(stack.as_str(), "category", "title,position:int?,parent_id");

        assert_eq!(first, second, "{} output differs between runs", stack);
    }
}

#[test]
fn test_artifact_counts() {
    assert_eq!(render("go", "product", "name").len(), 5);
    assert_eq!(render("laravel", "product", "name").len(), 8);
    assert_eq!(render("react", "product", "name").len(), 6);
    assert_eq!(render("flutter", "product", "name").len(), 4);
}

#[test]
fn test_project_used_verbatim_in_go_imports() {
    let files = render("go", "product", "name");
    let init = files.get("internal/modules/product/init.go").unwrap();

    assert!(
        init.content
            .contains("\"github.com/acme/shop/internal/modules/product/controllers\"")
    );
}

#[test]
fn test_unsupported_stack_lists_available() {
    let err = generate("remix", "product", "name", "", &GenerateOptions::default()).unwrap_err();

    match *err {
        Error::UnsupportedStack { stack, available } => {
            assert_eq!(stack, "remix");
            assert_eq!(available, "go, laravel, react, flutter");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_write_creates_tree() {
    let temp = TempDir::new().unwrap();
    let files = render("react", "product", "name,price:number");

    let outcomes = files.write(temp.path(), Overwrite::Always).unwrap();

    assert_eq!(outcomes.len(), files.len());
    for artifact in &files {
        let written = fs::read_to_string(temp.path().join(&artifact.path)).unwrap();
        assert_eq!(written, artifact.content);
    }
}

#[test]
fn test_write_skip_existing() {
    let temp = TempDir::new().unwrap();
    let model = temp.path().join("app/Models/Product.php");
    fs::create_dir_all(model.parent().unwrap()).unwrap();
    fs::write(&model, "<?php // customised\n").unwrap();

    let files = render("laravel", "product", "name");
    let outcomes = files.write(temp.path(), Overwrite::IfMissing).unwrap();

    let skipped: Vec<_> = outcomes
        .iter()
        .filter(|o| o.result == WriteResult::Skipped)
        .map(|o| o.path.clone())
        .collect();
    assert_eq!(skipped, vec![model.clone()]);
    assert_eq!(fs::read_to_string(&model).unwrap(), "<?php // customised\n");
}
