//! Lookup of stack generators by name.

use indexmap::IndexMap;
use modgen_codegen::StackCodegen;
use modgen_codegen_flutter::FlutterCodegen;
use modgen_codegen_go::GoCodegen;
use modgen_codegen_laravel::LaravelCodegen;
use modgen_codegen_react::ReactCodegen;
use modgen_core::Stack;

use crate::{Error, Result};

/// Registered stack generators, in registration order.
///
/// Generators are immutable once registered, so a registry can be shared
/// across threads and reused for any number of runs.
pub struct StackRegistry {
    stacks: IndexMap<Stack, Box<dyn StackCodegen>>,
}

impl StackRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            stacks: IndexMap::new(),
        }
    }

    /// Register a generator under its own stack, replacing any previous one.
    pub fn register(mut self, codegen: impl StackCodegen + 'static) -> Self {
        self.stacks.insert(codegen.stack(), Box::new(codegen));
        self
    }

    /// Look up the generator for `name`.
    ///
    /// Names are matched case-insensitively and accept the aliases understood
    /// by [`Stack`]'s `FromStr`.
    pub fn get(&self, name: &str) -> Result<&dyn StackCodegen> {
        name.parse::<Stack>()
            .ok()
            .and_then(|stack| self.stacks.get(&stack))
            .map(|codegen| codegen.as_ref())
            .ok_or_else(|| Error::unsupported_stack(name, &self.names()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn StackCodegen> {
        self.stacks.values().map(|codegen| codegen.as_ref())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.stacks.keys().map(Stack::as_str).collect()
    }
}

impl Default for StackRegistry {
    fn default() -> Self {
        Self::new()
            .register(GoCodegen::new())
            .register(LaravelCodegen::new())
            .register(ReactCodegen::new())
            .register(FlutterCodegen::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registers_every_stack() {
        let registry = StackRegistry::default();

        assert_eq!(registry.names(), vec!["go", "laravel", "react", "flutter"]);
        for stack in Stack::ALL {
            assert_eq!(registry.get(stack.as_str()).unwrap().stack(), stack);
        }
    }

    #[test]
    fn test_get_accepts_aliases() {
        let registry = StackRegistry::default();

        assert_eq!(registry.get("Golang").unwrap().stack(), Stack::Go);
        assert_eq!(registry.get("dart").unwrap().stack(), Stack::Flutter);
    }

    #[test]
    fn test_get_unregistered_stack() {
        let registry = StackRegistry::new().register(GoCodegen::new());

        let err = registry.get("react").err().unwrap();
        match *err {
            Error::UnsupportedStack { stack, available } => {
                assert_eq!(stack, "react");
                assert_eq!(available, "go");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_get_unknown_name() {
        let registry = StackRegistry::default();

        let err = registry.get("remix").err().unwrap();
        assert!(matches!(*err, Error::UnsupportedStack { .. }));
    }
}
