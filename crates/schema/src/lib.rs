//! Schema document, type registry and schema-build hooks.
//!
//! [`SchemaBuilder`] parses SDL sources into a [`SchemaDocument`], runs every
//! registered [`SchemaManipulator`] hook and reports the types that were added
//! outside the SDL text through a [`TypeRegistry`].
//!
//! ```
//! use graphql_schema::{OrderByTypeInjector, SchemaBuilder};
//!
//! let built = SchemaBuilder::new()
//!     .with_source("schema.graphql", "type Query { users(orderBy: [OrderByClause!]): [String] }")
//!     .with_hook(OrderByTypeInjector::new())
//!     .build()
//!     .unwrap();
//!
//! assert!(built.document.contains_type("SortOrder"));
//! assert_eq!(built.registry.len(), 2);
//! ```

mod builder;
mod document;
mod error;
mod order_by;
mod registry;

pub use builder::{BuiltSchema, SchemaBuilder, SchemaManipulator};
pub use document::{type_definition_name, SchemaDocument};
pub use error::{Result, SchemaError};
pub use order_by::{
    create_order_by_clause_input, sort_order_enum, OrderByInput, OrderByTypeInjector,
    DEFAULT_COLUMN_TYPE, DEFAULT_ORDER_BY_CLAUSE, DEFAULT_ORDER_BY_DESCRIPTION, SORT_ORDER,
};
pub use registry::TypeRegistry;
