//! In-memory schema document keyed by type name.

use crate::{Result, SchemaError};
use apollo_compiler::ast;
use apollo_compiler::Name;

/// Schema document assembled from SDL sources and schema-build hooks.
///
/// Type definitions are kept in insertion order and are unique by name.
/// Everything else (directive definitions, schema definitions, extensions) is
/// kept verbatim in [`SchemaDocument::other_definitions`].
#[derive(Debug, Clone, Default)]
pub struct SchemaDocument {
    types: Vec<ast::Definition>,
    other: Vec<ast::Definition>,
}

impl SchemaDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one SDL source and merge its definitions into the document.
    ///
    /// Type definitions go through [`SchemaDocument::set_type_definition`], so a
    /// later source redefining a type replaces the earlier definition.
    #[tracing::instrument(skip(self, source), fields(size = source.len()))]
    pub fn parse_source(&mut self, source: &str, source_name: &str) -> Result<()> {
        let document = ast::Document::parse(source, source_name).map_err(|with_errors| {
            SchemaError::Parse {
                source_name: source_name.to_string(),
                message: with_errors.errors.to_string(),
            }
        })?;

        for definition in document.definitions {
            if type_definition_name(&definition).is_some() {
                self.set_type_definition(definition)?;
            } else {
                self.other.push(definition);
            }
        }
        Ok(())
    }

    /// Insert a type definition, replacing any existing type with the same name.
    pub fn set_type_definition(&mut self, definition: ast::Definition) -> Result<()> {
        let name = type_definition_name(&definition)
            .cloned()
            .ok_or_else(|| SchemaError::NotATypeDefinition(definition.to_string()))?;

        if let Some(existing) = self
            .types
            .iter_mut()
            .find(|existing| type_definition_name(existing) == Some(&name))
        {
            tracing::debug!(%name, "Replacing type definition");
            *existing = definition;
        } else {
            tracing::trace!(%name, "Adding type definition");
            self.types.push(definition);
        }
        Ok(())
    }

    #[must_use]
    pub fn type_definition(&self, name: &str) -> Option<&ast::Definition> {
        self.types
            .iter()
            .find(|definition| type_definition_name(definition).is_some_and(|n| n.as_str() == name))
    }

    #[must_use]
    pub fn contains_type(&self, name: &str) -> bool {
        self.type_definition(name).is_some()
    }

    pub fn types(&self) -> impl Iterator<Item = &ast::Definition> {
        self.types.iter()
    }

    #[must_use]
    pub fn type_names(&self) -> Vec<&Name> {
        self.types.iter().filter_map(type_definition_name).collect()
    }

    #[must_use]
    pub fn other_definitions(&self) -> &[ast::Definition] {
        &self.other
    }

    #[must_use]
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Print the whole document as SDL.
    #[must_use]
    pub fn to_sdl(&self) -> String {
        self.other
            .iter()
            .chain(&self.types)
            .map(|definition| definition.to_string().trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Name of a type definition, or `None` for anything that does not define a type.
#[must_use]
pub fn type_definition_name(definition: &ast::Definition) -> Option<&Name> {
    match definition {
        ast::Definition::ScalarTypeDefinition(def) => Some(&def.name),
        ast::Definition::ObjectTypeDefinition(def) => Some(&def.name),
        ast::Definition::InterfaceTypeDefinition(def) => Some(&def.name),
        ast::Definition::UnionTypeDefinition(def) => Some(&def.name),
        ast::Definition::EnumTypeDefinition(def) => Some(&def.name),
        ast::Definition::InputObjectTypeDefinition(def) => Some(&def.name),
        _ => None,
    }
}
