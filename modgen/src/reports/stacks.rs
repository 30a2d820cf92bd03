//! Stacks command report data structures.

use modgen::{Stack, StackRegistry};
use serde::Serialize;

use super::output::{Output, Report};

/// Registered stacks and what each one generates.
#[derive(Debug, Serialize)]
pub struct StacksReport {
    pub stacks: Vec<StackInfo>,
}

#[derive(Debug, Serialize)]
pub struct StackInfo {
    pub name: Stack,
    pub description: &'static str,
    /// Type given to fields declared without one.
    pub default_type: &'static str,
    pub artifacts: Vec<&'static str>,
    pub options: Vec<OptionEntry>,
}

#[derive(Debug, Serialize)]
pub struct OptionEntry {
    pub name: &'static str,
    pub description: &'static str,
}

impl StacksReport {
    pub fn from_registry(registry: &StackRegistry) -> Self {
        let stacks = registry
            .iter()
            .map(|codegen| StackInfo {
                name: codegen.stack(),
                description: codegen.stack().description(),
                default_type: codegen.field_parser().default_type(),
                artifacts: codegen.artifact_kinds().iter().map(|k| k.as_str()).collect(),
                options: codegen
                    .options()
                    .iter()
                    .map(|o| OptionEntry {
                        name: o.name,
                        description: o.description,
                    })
                    .collect(),
            })
            .collect();

        Self { stacks }
    }
}

impl Report for StacksReport {
    fn render(&self, out: &mut dyn Output) {
        out.title("Supported stacks");

        for stack in &self.stacks {
            out.newline();
            out.section(&format!("{} - {}", stack.name, stack.description));
            out.key_value_indented("default type", stack.default_type);
            out.key_value_indented("artifacts", &stack.artifacts.join(", "));
            for option in &stack.options {
                out.list_item(&format!("--{}: {}", option.name, option.description));
            }
        }
    }
}
