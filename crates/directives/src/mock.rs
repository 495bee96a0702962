//! The `@mock` directive: field resolvers registered by tests.
//!
//! Tests register resolvers on a [`MockResolvers`] context, then attach the
//! directive to a field definition:
//!
//! ```
//! use apollo_compiler::ast;
//! use graphql_directives::{MockDirective, MockResolvers, ResolveArgs};
//! use serde_json::json;
//!
//! let document = ast::Document::parse(
//!     r#"type Query { answer: Int @mock(key: "answer") }"#,
//!     "schema.graphql",
//! )
//! .unwrap();
//! let ast::Definition::ObjectTypeDefinition(query) = &document.definitions[0] else {
//!     unreachable!()
//! };
//!
//! let mut resolvers = MockResolvers::new();
//! resolvers.register("answer", |_args: &ResolveArgs| json!(42));
//!
//! let resolver = MockDirective::resolve_field(&resolvers, &query.fields[0]).unwrap();
//! assert_eq!(resolver.resolve(&ResolveArgs::default()).unwrap(), json!(42));
//! ```

use crate::{Directive, DirectiveError, Result};
use apollo_compiler::ast;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

/// Directive name as written in SDL.
pub const MOCK_DIRECTIVE: &str = "mock";

/// Key used when `@mock` has no `key` argument.
pub const DEFAULT_MOCK_KEY: &str = "default";

/// Arguments received by a field resolver at execution time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolveArgs {
    /// Value of the parent object
    pub root: Value,
    /// Field arguments from the query
    pub arguments: Map<String, Value>,
    /// Request context
    pub context: Value,
    pub info: ResolveInfo,
}

impl ResolveArgs {
    #[must_use]
    pub fn new(parent_type: impl Into<String>, field_name: impl Into<String>) -> Self {
        Self {
            info: ResolveInfo {
                parent_type: parent_type.into(),
                field_name: field_name.into(),
            },
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_root(mut self, root: Value) -> Self {
        self.root = root;
        self
    }

    #[must_use]
    pub fn with_argument(mut self, name: impl Into<String>, value: Value) -> Self {
        self.arguments.insert(name.into(), value);
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: Value) -> Self {
        self.context = context;
        self
    }
}

/// Position of the field being resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveInfo {
    pub parent_type: String,
    pub field_name: String,
}

/// A mock field resolver.
pub type MockResolver = Box<dyn Fn(&ResolveArgs) -> Value>;

/// Mock resolvers for one test run, keyed by `@mock(key:)`.
///
/// Dropping the context drops every registration.
#[derive(Default)]
pub struct MockResolvers {
    resolvers: HashMap<String, MockResolver>,
}

impl MockResolvers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `resolver` under `key`, replacing any previous resolver for it.
    pub fn register<F>(&mut self, key: impl Into<String>, resolver: F) -> &mut Self
    where
        F: Fn(&ResolveArgs) -> Value + 'static,
    {
        let key = key.into();
        if self.resolvers.insert(key.clone(), Box::new(resolver)).is_some() {
            tracing::debug!(%key, "Replaced mock resolver");
        } else {
            tracing::debug!(%key, "Registered mock resolver");
        }
        self
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.resolvers.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    /// Call the resolver registered for `key` with `args`.
    pub fn resolve(&self, key: &str, args: &ResolveArgs) -> Result<Value> {
        let resolver = self
            .resolvers
            .get(key)
            .ok_or_else(|| DirectiveError::MissingMockResolver {
                key: key.to_string(),
            })?;
        Ok(resolver(args))
    }
}

impl fmt::Debug for MockResolvers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&String> = self.resolvers.keys().collect();
        keys.sort();
        f.debug_struct("MockResolvers").field("keys", &keys).finish()
    }
}

/// Arguments of one `@mock` usage, parsed when the directive is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockDirectiveArgs {
    pub key: String,
}

impl Default for MockDirectiveArgs {
    fn default() -> Self {
        Self {
            key: DEFAULT_MOCK_KEY.to_string(),
        }
    }
}

impl MockDirectiveArgs {
    pub fn from_directive(directive: &ast::Directive) -> Result<Self> {
        let Some(argument) = directive
            .arguments
            .iter()
            .find(|argument| argument.name.as_str() == "key")
        else {
            return Ok(Self::default());
        };

        match &*argument.value {
            ast::Value::String(key) => Ok(Self {
                key: key.as_str().to_string(),
            }),
            ast::Value::Null => Ok(Self::default()),
            other => Err(DirectiveError::InvalidArgument {
                directive: MOCK_DIRECTIVE,
                argument: "key".to_string(),
                message: format!("expected a string, found {other:?}"),
            }),
        }
    }
}

/// Definition provider and attachment logic for `@mock`.
pub struct MockDirective;

impl Directive for MockDirective {
    fn definition() -> &'static str {
        r#""""
Allows to use mock resolvers for testing.
"""
directive @mock(
  """
  Specify a unique key for the mock resolver.
  """
  key: String = "default"
) on FIELD_DEFINITION"#
    }
}

impl MockDirective {
    /// Parse the `@mock` usage on `field` into typed arguments.
    pub fn attach(field: &ast::FieldDefinition) -> Result<MockDirectiveArgs> {
        let directive = field
            .directives
            .iter()
            .find(|directive| directive.name.as_str() == MOCK_DIRECTIVE)
            .ok_or_else(|| DirectiveError::NotAttached {
                directive: MOCK_DIRECTIVE,
                field: field.name.to_string(),
            })?;
        MockDirectiveArgs::from_directive(directive)
    }

    /// Build the resolver installed on a `@mock` field.
    pub fn resolve_field<'a>(
        resolvers: &'a MockResolvers,
        field: &ast::FieldDefinition,
    ) -> Result<MockFieldResolver<'a>> {
        let args = Self::attach(field)?;
        tracing::trace!(field = %field.name, key = %args.key, "Attached @mock");
        Ok(MockFieldResolver {
            key: args.key,
            resolvers,
        })
    }
}

/// Field resolver delegating to the mock registered for its key.
///
/// The resolver borrows the [`MockResolvers`] it was attached with, so all
/// mocks must be registered before fields are attached; registering again
/// requires dropping the field resolvers first.
#[derive(Debug)]
pub struct MockFieldResolver<'a> {
    key: String,
    resolvers: &'a MockResolvers,
}

impl MockFieldResolver<'_> {
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Forward `args` to the registered mock and return its result unchanged.
    pub fn resolve(&self, args: &ResolveArgs) -> Result<Value> {
        self.resolvers.resolve(&self.key, args)
    }
}
