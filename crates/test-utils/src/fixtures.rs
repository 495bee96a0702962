//! Shared test fixtures: schemas, stubs and directive types.
//!
//! The directive fixtures are spread over namespaces the way an application
//! and a third-party package would be. Both `app` and `vendor` define an
//! `UpperDirective`, so scans that list both namespaces must keep only the
//! first one.

use graphql_directives::{builtin_namespace, DirectiveNamespace, DirectiveRegistry};

pub const APP_NAMESPACE: &str = "app";
pub const VENDOR_NAMESPACE: &str = "vendor";
pub const BROKEN_NAMESPACE: &str = "broken";

/// Source schema using the injected ordering types.
pub const ORDERED_SCHEMA: &str = r#"
type Query {
    users(orderBy: [OrderByClause!]): [User!]! @mock(key: "users")
}

type User {
    id: ID!
    name: String!
    age: Int
}
"#;

/// Minimal schema without any injected types.
pub const BASIC_SCHEMA: &str = r#"
type Query {
    hello: String
}
"#;

/// A stub file with the usual opening marker.
pub const STUB: &str = r#"<?php

namespace GraphQL\Helpers;

class Resolver {}
"#;

pub mod app {
    use graphql_directives::Directive;

    pub struct UpperDirective;

    impl Directive for UpperDirective {
        fn definition() -> &'static str {
            r#""""
Convert the field value to upper case.
"""
directive @upper on FIELD_DEFINITION"#
        }
    }

    pub struct RenameDirective;

    impl Directive for RenameDirective {
        fn definition() -> &'static str {
            "directive @rename(attribute: String!) on FIELD_DEFINITION"
        }
    }
}

pub mod vendor {
    use graphql_directives::Directive;

    pub struct UpperDirective;

    impl Directive for UpperDirective {
        fn definition() -> &'static str {
            "directive @upper(locale: String) on FIELD_DEFINITION | ARGUMENT_DEFINITION"
        }
    }

    pub struct LowerDirective;

    impl Directive for LowerDirective {
        fn definition() -> &'static str {
            "directive @lower on FIELD_DEFINITION"
        }
    }
}

pub mod broken {
    use graphql_directives::Directive;

    /// Definition with a syntax error.
    pub struct BrokenDirective;

    impl Directive for BrokenDirective {
        fn definition() -> &'static str {
            "directive @broken(on FIELD_DEFINITION"
        }
    }

    /// Valid SDL that is not a directive definition.
    pub struct TypeOnlyDirective;

    impl Directive for TypeOnlyDirective {
        fn definition() -> &'static str {
            "type TypeOnly { id: ID }"
        }
    }
}

/// Registry holding the builtin, `app`, `vendor` and `broken` namespaces.
pub fn fixture_registry() -> DirectiveRegistry {
    DirectiveRegistry::new()
        .with_namespace(builtin_namespace())
        .with_namespace(
            DirectiveNamespace::new(APP_NAMESPACE)
                .with::<app::UpperDirective>()
                .with::<app::RenameDirective>(),
        )
        .with_namespace(
            DirectiveNamespace::new(VENDOR_NAMESPACE)
                .with::<vendor::UpperDirective>()
                .with::<vendor::LowerDirective>(),
        )
        .with_namespace(
            DirectiveNamespace::new(BROKEN_NAMESPACE)
                .with::<broken::BrokenDirective>()
                .with::<broken::TypeOnlyDirective>(),
        )
}
