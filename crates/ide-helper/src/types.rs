//! Programmatically registered types export.

use apollo_compiler::ast;

/// Print type definitions as SDL, separated by single blank lines.
#[must_use]
pub fn render_type_definitions(types: &[ast::Definition]) -> String {
    types
        .iter()
        .map(|definition| definition.to_string().trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}
