//! Statically registered GraphQL directives.
//!
//! Directive types implement [`Directive`] to describe themselves in SDL and
//! are collected into [`DirectiveNamespace`]s by explicit registration. The
//! [`DirectiveRegistry`] resolves an ordered list of namespaces into the set of
//! directives a tool should know about.
//!
//! The crate also ships the `@mock` directive used to stub field resolvers in
//! tests; see [`MockDirective`] and [`MockResolvers`].

mod directive;
mod error;
mod mock;
mod registry;

pub use directive::{directive_name, Directive, DirectiveEntry};
pub use error::{DirectiveError, Result};
pub use mock::{
    MockDirective, MockDirectiveArgs, MockFieldResolver, MockResolver, MockResolvers, ResolveArgs,
    ResolveInfo, DEFAULT_MOCK_KEY, MOCK_DIRECTIVE,
};
pub use registry::{DirectiveNamespace, DirectiveRegistry, DiscoveredDirective};

/// Namespace holding the directives defined in this crate.
pub const BUILTIN_NAMESPACE: &str = "builtin";

/// The directives defined in this crate.
#[must_use]
pub fn builtin_namespace() -> DirectiveNamespace {
    DirectiveNamespace::new(BUILTIN_NAMESPACE).with::<MockDirective>()
}
