//! Registry of types created outside the primary schema text.

use crate::document::type_definition_name;
use crate::{Result, SchemaError};
use apollo_compiler::ast;

/// Types that were registered programmatically rather than written in SDL.
///
/// Read-only for consumers such as the IDE helper; populated by
/// [`crate::SchemaBuilder`] or by explicit [`TypeRegistry::register`] calls.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: Vec<ast::Definition>,
}

impl TypeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type definition. Registering a name twice keeps the latest.
    pub fn register(&mut self, definition: ast::Definition) -> Result<()> {
        let name = type_definition_name(&definition)
            .cloned()
            .ok_or_else(|| SchemaError::NotATypeDefinition(definition.to_string()))?;

        match self
            .types
            .iter_mut()
            .find(|existing| type_definition_name(existing) == Some(&name))
        {
            Some(existing) => *existing = definition,
            None => self.types.push(definition),
        }
        Ok(())
    }

    /// Every registered type, in registration order.
    #[must_use]
    pub fn resolved_types(&self) -> &[ast::Definition] {
        &self.types
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ast::Definition> {
        self.types
            .iter()
            .find(|definition| type_definition_name(definition).is_some_and(|n| n.as_str() == name))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
