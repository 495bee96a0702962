//! Schema assembly: SDL sources plus schema-build hooks.

use crate::{Result, SchemaDocument, TypeRegistry};
use std::collections::HashSet;

/// Hook run while the schema document is being built.
///
/// Hooks may add or replace type definitions through
/// [`SchemaDocument::set_type_definition`]. They run in registration order,
/// after every SDL source has been parsed.
pub trait SchemaManipulator {
    /// Identifier used in logs
    fn name(&self) -> &'static str;

    fn manipulate(&self, document: &mut SchemaDocument) -> Result<()>;
}

/// A source of schema text and the name reported in parse errors.
#[derive(Debug, Clone)]
struct SchemaSource {
    name: String,
    text: String,
}

/// Builder collecting SDL sources and hooks.
#[derive(Default)]
pub struct SchemaBuilder {
    sources: Vec<SchemaSource>,
    hooks: Vec<Box<dyn SchemaManipulator>>,
}

/// Result of [`SchemaBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct BuiltSchema {
    pub document: SchemaDocument,
    /// Types present in the document that no SDL source defined
    pub registry: TypeRegistry,
}

impl SchemaBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_source(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.add_source(name, text);
        self
    }

    pub fn add_source(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.sources.push(SchemaSource {
            name: name.into(),
            text: text.into(),
        });
    }

    #[must_use]
    pub fn with_hook(mut self, hook: impl SchemaManipulator + 'static) -> Self {
        self.add_hook(hook);
        self
    }

    pub fn add_hook(&mut self, hook: impl SchemaManipulator + 'static) {
        self.hooks.push(Box::new(hook));
    }

    /// Parse all sources, run every hook and collect programmatic types.
    #[tracing::instrument(skip(self), fields(sources = self.sources.len(), hooks = self.hooks.len()))]
    pub fn build(&self) -> Result<BuiltSchema> {
        let mut document = SchemaDocument::new();
        for source in &self.sources {
            document.parse_source(&source.text, &source.name)?;
        }

        let source_types: HashSet<String> = document
            .type_names()
            .into_iter()
            .map(ToString::to_string)
            .collect();

        for hook in &self.hooks {
            tracing::debug!(hook = hook.name(), "Running schema hook");
            hook.manipulate(&mut document)?;
        }

        let mut registry = TypeRegistry::new();
        for definition in document.types() {
            let is_programmatic = crate::type_definition_name(definition)
                .is_some_and(|name| !source_types.contains(name.as_str()));
            if is_programmatic {
                registry.register(definition.clone())?;
            }
        }

        tracing::info!(
            types = document.type_count(),
            programmatic = registry.len(),
            "Schema built"
        );
        Ok(BuiltSchema { document, registry })
    }
}
