//! Ordering types: the `SortOrder` enum and "column + direction" input types.

use crate::{Result, SchemaDocument, SchemaError, SchemaManipulator};
use apollo_compiler::{ast, name, Name, Node};

/// Name of the injected sort direction enum.
pub const SORT_ORDER: &str = "SortOrder";

pub const DEFAULT_ORDER_BY_CLAUSE: &str = "OrderByClause";
pub const DEFAULT_ORDER_BY_DESCRIPTION: &str = "Allows ordering a list of records.";
pub const DEFAULT_COLUMN_TYPE: &str = "String";

/// The `SortOrder` enum with its two directions.
#[must_use]
pub fn sort_order_enum() -> ast::Definition {
    let value = |value: Name, description: &str| {
        Node::new(ast::EnumValueDefinition {
            description: Some(Node::new_str(description)),
            value,
            directives: ast::DirectiveList::default(),
        })
    };

    ast::Definition::EnumTypeDefinition(Node::new(ast::EnumTypeDefinition {
        description: Some(Node::new_str(
            "The available directions for ordering a list of records.",
        )),
        name: name!("SortOrder"),
        directives: ast::DirectiveList::default(),
        values: vec![
            value(name!("ASC"), "Sort records in ascending order."),
            value(name!("DESC"), "Sort records in descending order."),
        ],
    }))
}

/// Build an input type describing one ordering clause.
///
/// The result has exactly two required fields, `column: <column_type>!` and
/// `order: SortOrder!`. Nothing is inserted anywhere; the same arguments always
/// produce the same definition.
pub fn create_order_by_clause_input(
    name: &str,
    description: &str,
    column_type: &str,
) -> Result<ast::Definition> {
    let name = graphql_name(name)?;
    let column_type = graphql_name(column_type)?;

    let field = |name: Name, ty: Name, description: &str| {
        Node::new(ast::InputValueDefinition {
            description: Some(Node::new_str(description)),
            name,
            ty: Node::new(ast::Type::NonNullNamed(ty)),
            default_value: None,
            directives: ast::DirectiveList::default(),
        })
    };

    Ok(ast::Definition::InputObjectTypeDefinition(Node::new(
        ast::InputObjectTypeDefinition {
            description: Some(Node::new_str(description)),
            name,
            directives: ast::DirectiveList::default(),
            fields: vec![
                field(
                    name!("column"),
                    column_type,
                    "The column that is used for ordering.",
                ),
                field(
                    name!("order"),
                    name!("SortOrder"),
                    "The direction that is used for ordering.",
                ),
            ],
        },
    )))
}

fn graphql_name(value: &str) -> Result<Name> {
    Name::new(value).map_err(|e| SchemaError::InvalidName {
        name: value.to_string(),
        message: e.to_string(),
    })
}

/// Arguments for one ordering input type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderByInput {
    pub name: String,
    pub description: String,
    pub column_type: String,
}

impl Default for OrderByInput {
    fn default() -> Self {
        Self {
            name: DEFAULT_ORDER_BY_CLAUSE.to_string(),
            description: DEFAULT_ORDER_BY_DESCRIPTION.to_string(),
            column_type: DEFAULT_COLUMN_TYPE.to_string(),
        }
    }
}

impl OrderByInput {
    /// A named input with the default description and column type.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn to_definition(&self) -> Result<ast::Definition> {
        create_order_by_clause_input(&self.name, &self.description, &self.column_type)
    }
}

/// Schema-build hook adding `SortOrder` and the ordering clause input(s).
#[derive(Debug, Clone, Default)]
pub struct OrderByTypeInjector {
    clause: OrderByInput,
    additional: Vec<OrderByInput>,
}

impl OrderByTypeInjector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.clause.name = name.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.clause.description = description.into();
        self
    }

    #[must_use]
    pub fn with_column_type(mut self, column_type: impl Into<String>) -> Self {
        self.clause.column_type = column_type.into();
        self
    }

    /// Also mint an additional, distinctly named ordering input.
    #[must_use]
    pub fn with_additional(mut self, input: OrderByInput) -> Self {
        self.additional.push(input);
        self
    }

    #[must_use]
    pub fn clause(&self) -> &OrderByInput {
        &self.clause
    }
}

impl SchemaManipulator for OrderByTypeInjector {
    fn name(&self) -> &'static str {
        "order-by"
    }

    #[tracing::instrument(skip_all, fields(clause = %self.clause.name))]
    fn manipulate(&self, document: &mut SchemaDocument) -> Result<()> {
        document.set_type_definition(sort_order_enum())?;
        document.set_type_definition(self.clause.to_definition()?)?;

        for input in &self.additional {
            document.set_type_definition(input.to_definition()?)?;
        }

        tracing::debug!(
            inputs = 1 + self.additional.len(),
            "Injected ordering types"
        );
        Ok(())
    }
}
