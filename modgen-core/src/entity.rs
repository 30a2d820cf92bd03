//! The entity being scaffolded and its derived identifier forms.

use serde::Serialize;

use crate::naming::{pluralize, to_camel_case, to_kebab_case, to_pascal_case, to_snake_case};

/// One set of case-converted identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentForms {
    pub pascal: String,
    pub camel: String,
    pub snake: String,
    pub kebab: String,
}

impl IdentForms {
    fn of(name: &str) -> Self {
        Self {
            pascal: to_pascal_case(name),
            camel: to_camel_case(name),
            snake: to_snake_case(name),
            kebab: to_kebab_case(name),
        }
    }
}

/// The subject of one generation run.
///
/// All identifier forms are derived once at construction; renderers only read
/// them, which keeps every artifact of a run referring to the same names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityDescriptor {
    raw: String,
    module: String,
    module_plural: String,
    singular: IdentForms,
    plural: IdentForms,
}

impl EntityDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        let raw = name.into();
        let module = raw.to_lowercase();
        let module_plural = pluralize(&module);

        Self {
            singular: IdentForms::of(&module),
            plural: IdentForms::of(&module_plural),
            module_plural,
            module,
            raw,
        }
    }

    /// The name exactly as supplied by the caller.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Lower-cased name used for directories, file names and packages.
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Plural of [`module`](Self::module), used for table names and cache keys.
    pub fn module_plural(&self) -> &str {
        &self.module_plural
    }

    /// Type name, e.g. `OrderItem`.
    pub fn pascal(&self) -> &str {
        &self.singular.pascal
    }

    /// Variable name, e.g. `orderItem`.
    pub fn camel(&self) -> &str {
        &self.singular.camel
    }

    pub fn snake(&self) -> &str {
        &self.singular.snake
    }

    pub fn kebab(&self) -> &str {
        &self.singular.kebab
    }

    pub fn singular(&self) -> &IdentForms {
        &self.singular
    }

    pub fn plural(&self) -> &IdentForms {
        &self.plural
    }

    /// Externally exposed collection segment: kebab-case plural, e.g. `order-items`.
    pub fn route_segment(&self) -> &str {
        &self.plural.kebab
    }
}
