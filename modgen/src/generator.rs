//! Generator facade: one call from invocation arguments to an artifact set.

use modgen_codegen::{GenerateOptions, RenderContext};
use modgen_core::{ArtifactSet, EntityDescriptor, FieldDescriptor, Stack};
use serde::Serialize;

use crate::{Result, registry::StackRegistry};

/// Arguments of one generation run.
#[derive(Debug, Clone, Copy)]
pub struct Request<'a> {
    /// Stack name or alias, e.g. `go` or `dart`
    pub stack: &'a str,
    /// Entity name, e.g. `order_item`
    pub name: &'a str,
    /// Field specification, e.g. `sku:string,qty:int64?`
    pub fields: &'a str,
    /// Project identifier used verbatim in cross-file references
    pub project: &'a str,
    pub options: &'a GenerateOptions,
}

/// Everything a run produced.
#[derive(Debug, Clone, Serialize)]
pub struct Generation {
    pub stack: Stack,
    pub entity: EntityDescriptor,
    pub fields: Vec<FieldDescriptor>,
    pub artifacts: ArtifactSet,
}

/// Runs requests against a stack registry.
#[derive(Default)]
pub struct Generator {
    registry: StackRegistry,
}

impl Generator {
    pub fn new(registry: StackRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &StackRegistry {
        &self.registry
    }

    /// Render every artifact for `request`.
    ///
    /// Fails only when the stack is not registered, before anything is
    /// rendered. Malformed field tokens and unknown types degrade to the
    /// stack's fallbacks instead of failing.
    pub fn run(&self, request: &Request<'_>) -> Result<Generation> {
        let codegen = self.registry.get(request.stack)?;
        let entity = EntityDescriptor::new(request.name);
        let fields = codegen.field_parser().parse(request.fields);

        tracing::debug!(
            stack = %codegen.stack(),
            entity = entity.pascal(),
            fields = fields.len(),
            options = ?request.options.enabled(),
            "generating module"
        );

        let ctx = RenderContext {
            entity: &entity,
            fields: &fields,
            project: request.project,
            options: request.options,
        };
        let artifacts = codegen.render(&ctx);

        Ok(Generation {
            stack: codegen.stack(),
            entity,
            fields,
            artifacts,
        })
    }
}

/// Generate one module with the default registry.
pub fn generate(
    stack: &str,
    name: &str,
    fields: &str,
    project: &str,
    options: &GenerateOptions,
) -> Result<ArtifactSet> {
    let request = Request {
        stack,
        name,
        fields,
        project,
        options,
    };
    Generator::default()
        .run(&request)
        .map(|generation| generation.artifacts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_records_inputs() {
        let options = GenerateOptions::default();
        let generation = Generator::default()
            .run(&Request {
                stack: "laravel",
                name: "category",
                fields: "title,,position:integer?",
                project: "",
                options: &options,
            })
            .unwrap();

        assert_eq!(generation.stack, Stack::Laravel);
        assert_eq!(generation.entity.pascal(), "Category");
        assert_eq!(generation.fields.len(), 2);
        assert_eq!(generation.fields[0], FieldDescriptor::new("title", "string", true));
        assert_eq!(
            generation.fields[1],
            FieldDescriptor::new("position", "integer", false)
        );
        assert_eq!(generation.artifacts.len(), 8);
    }

    #[test]
    fn test_validators_option_adds_artifact() {
        let without = generate("go", "product", "name", "shop", &GenerateOptions::default())
            .unwrap();
        let with = generate(
            "go",
            "product",
            "name",
            "shop",
            &GenerateOptions { validators: true },
        )
        .unwrap();

        assert_eq!(with.len(), without.len() + 1);
        assert!(
            with.get("internal/modules/product/validators/product_validator.go")
                .is_some()
        );
    }

    #[test]
    fn test_unknown_stack_renders_nothing() {
        let result = generate("remix", "product", "name", "", &GenerateOptions::default());
        assert!(result.is_err());
    }
}
