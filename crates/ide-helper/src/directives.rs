//! Directive definitions export.

use crate::{ExportError, Result};
use apollo_compiler::ast;
use graphql_directives::{DirectiveRegistry, DiscoveredDirective};

/// Definition of the built-in `@deprecated` directive.
pub const DEPRECATED_DIRECTIVE: &str = r#""""
Marks an element of a GraphQL schema as no longer supported.
"""
directive @deprecated(
  """
  Explains why this element was deprecated, usually also including a
  suggestion for how to access supported similar data. Formatted
  in [Markdown](https://daringfireball.net/projects/markdown/).
  """
  reason: String = "No longer supported"
) on FIELD_DEFINITION | ARGUMENT_DEFINITION | INPUT_FIELD_DEFINITION | ENUM_VALUE"#;

const DEPRECATED_NAME: &str = "deprecated";

/// Render the definitions of all directives found in `namespaces`.
///
/// `@deprecated` comes first, followed by each discovered directive in scan
/// order, preceded by a `# Directive class:` comment. Every definition must
/// parse as a single directive definition; the first one that does not fails
/// the whole render.
#[tracing::instrument(skip_all, fields(namespaces = namespaces.len()))]
pub fn render_directive_definitions<S: AsRef<str>>(
    registry: &DirectiveRegistry,
    namespaces: &[S],
) -> Result<String> {
    let mut sections = vec![DEPRECATED_DIRECTIVE.to_string()];

    for directive in registry.scan(namespaces) {
        if directive.name == DEPRECATED_NAME {
            tracing::debug!(
                class = directive.entry.class_name(),
                "Skipping directive shadowed by built-in @deprecated"
            );
            continue;
        }

        let definition = validated_definition(&directive)?;
        sections.push(format!(
            "# Directive class: {}\n{definition}",
            directive.entry.class_name()
        ));
    }

    tracing::debug!(directives = sections.len(), "Rendered directive definitions");
    Ok(sections.join("\n\n"))
}

fn validated_definition(directive: &DiscoveredDirective) -> Result<&'static str> {
    let class_name = directive.entry.class_name();
    let invalid = |message: String| ExportError::InvalidDirectiveDefinition {
        class_name: class_name.to_string(),
        message,
    };

    let sdl = directive.entry.definition().trim();
    let document = ast::Document::parse(sdl, class_name)
        .map_err(|with_errors| invalid(with_errors.errors.to_string()))?;

    match document.definitions.as_slice() {
        [ast::Definition::DirectiveDefinition(_)] => Ok(sdl),
        [] => Err(invalid("no definition found".to_string())),
        [_] => Err(invalid("not a directive definition".to_string())),
        definitions => Err(invalid(format!(
            "expected exactly one directive definition, found {} definitions",
            definitions.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphql_directives::{Directive, DirectiveNamespace};

    struct TwoDirective;

    impl Directive for TwoDirective {
        fn definition() -> &'static str {
            "directive @a on FIELD_DEFINITION\ndirective @b on FIELD_DEFINITION"
        }
    }

    struct DeprecatedDirective;

    impl Directive for DeprecatedDirective {
        fn definition() -> &'static str {
            "directive @deprecated on FIELD_DEFINITION"
        }
    }

    #[test]
    fn test_deprecated_definition_parses() {
        let document = ast::Document::parse(DEPRECATED_DIRECTIVE, "deprecated.graphql").unwrap();
        assert_eq!(document.definitions.len(), 1);
    }

    #[test]
    fn test_empty_scan_renders_deprecated_only() {
        let sdl = render_directive_definitions::<&str>(&DirectiveRegistry::new(), &[]).unwrap();
        assert_eq!(sdl, DEPRECATED_DIRECTIVE);
    }

    #[test]
    fn test_multiple_definitions_are_rejected() {
        let registry = DirectiveRegistry::new()
            .with_namespace(DirectiveNamespace::new("app").with::<TwoDirective>());
        let err = render_directive_definitions(&registry, &["app"]).unwrap_err();

        let ExportError::InvalidDirectiveDefinition { class_name, message } = err else {
            panic!("expected an invalid definition error");
        };
        assert!(class_name.ends_with("::TwoDirective"));
        assert!(message.contains("found 2 definitions"));
    }

    #[test]
    fn test_builtin_deprecated_wins() {
        let registry = DirectiveRegistry::new()
            .with_namespace(DirectiveNamespace::new("app").with::<DeprecatedDirective>());
        let sdl = render_directive_definitions(&registry, &["app"]).unwrap();
        assert_eq!(sdl, DEPRECATED_DIRECTIVE);
    }
}
