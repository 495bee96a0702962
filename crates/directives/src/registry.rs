//! Statically compiled directive registry.
//!
//! Directive types are grouped into named namespaces by explicit registration.
//! Scanning an ordered list of namespaces yields one directive per derived
//! name; when two namespaces provide the same name, the namespace listed
//! first wins.

use crate::{Directive, DirectiveEntry};
use std::collections::HashSet;

/// A named group of directive types.
#[derive(Debug, Clone)]
pub struct DirectiveNamespace {
    name: String,
    entries: Vec<DirectiveEntry>,
}

impl DirectiveNamespace {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Register a directive type, builder style.
    #[must_use]
    pub fn with<T: Directive>(mut self) -> Self {
        self.register::<T>();
        self
    }

    pub fn register<T: Directive>(&mut self) -> &mut Self {
        self.entries.push(DirectiveEntry::of::<T>());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn entries(&self) -> &[DirectiveEntry] {
        &self.entries
    }
}

/// A directive selected by [`DirectiveRegistry::scan`].
#[derive(Debug, Clone)]
pub struct DiscoveredDirective {
    pub name: String,
    pub namespace: String,
    pub entry: DirectiveEntry,
}

/// All known directive namespaces.
#[derive(Debug, Clone, Default)]
pub struct DirectiveRegistry {
    namespaces: Vec<DirectiveNamespace>,
}

impl DirectiveRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_namespace(mut self, namespace: DirectiveNamespace) -> Self {
        self.add_namespace(namespace);
        self
    }

    /// Add a namespace. Adding a namespace name twice appends to the existing one.
    pub fn add_namespace(&mut self, namespace: DirectiveNamespace) {
        if let Some(existing) = self
            .namespaces
            .iter_mut()
            .find(|existing| existing.name == namespace.name)
        {
            existing.entries.extend(namespace.entries);
        } else {
            self.namespaces.push(namespace);
        }
    }

    #[must_use]
    pub fn namespace(&self, name: &str) -> Option<&DirectiveNamespace> {
        self.namespaces.iter().find(|namespace| namespace.name == name)
    }

    pub fn namespace_names(&self) -> impl Iterator<Item = &str> {
        self.namespaces.iter().map(DirectiveNamespace::name)
    }

    /// Collect the directives of the given namespaces, in order.
    ///
    /// Names are derived with [`crate::directive_name`]. The first directive
    /// seen for a name is kept and later ones are skipped. Unknown namespaces
    /// are skipped with a warning.
    #[tracing::instrument(skip_all, fields(namespaces = namespaces.len()))]
    pub fn scan<S: AsRef<str>>(&self, namespaces: &[S]) -> Vec<DiscoveredDirective> {
        let mut seen = HashSet::new();
        let mut discovered = Vec::new();

        for namespace_name in namespaces {
            let namespace_name = namespace_name.as_ref();
            let Some(namespace) = self.namespace(namespace_name) else {
                tracing::warn!(namespace = namespace_name, "Unknown directive namespace");
                continue;
            };

            for entry in &namespace.entries {
                let name = entry.directive_name();
                if !seen.insert(name.clone()) {
                    tracing::debug!(
                        directive = %name,
                        class = entry.class_name(),
                        "Skipping directive shadowed by an earlier namespace"
                    );
                    continue;
                }
                discovered.push(DiscoveredDirective {
                    name,
                    namespace: namespace_name.to_string(),
                    entry: *entry,
                });
            }
        }

        tracing::debug!(directives = discovered.len(), "Directive scan complete");
        discovered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod first {
        pub struct TrimDirective;

        impl crate::Directive for TrimDirective {
            fn definition() -> &'static str {
                "directive @trim on ARGUMENT_DEFINITION"
            }
        }
    }

    mod second {
        pub struct TrimDirective;

        impl crate::Directive for TrimDirective {
            fn definition() -> &'static str {
                "directive @trim(mode: String) on ARGUMENT_DEFINITION"
            }
        }

        pub struct RenameDirective;

        impl crate::Directive for RenameDirective {
            fn definition() -> &'static str {
                "directive @rename(attribute: String!) on FIELD_DEFINITION"
            }
        }
    }

    fn registry() -> DirectiveRegistry {
        DirectiveRegistry::new()
            .with_namespace(DirectiveNamespace::new("first").with::<first::TrimDirective>())
            .with_namespace(
                DirectiveNamespace::new("second")
                    .with::<second::TrimDirective>()
                    .with::<second::RenameDirective>(),
            )
    }

    #[test]
    fn test_scan_first_namespace_wins() {
        let discovered = registry().scan(&["first", "second"]);
        let names: Vec<&str> = discovered.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["trim", "rename"]);
        assert_eq!(discovered[0].namespace, "first");
        assert!(discovered[0].entry.class_name().contains("::first::"));
    }

    #[test]
    fn test_scan_order_follows_namespace_list() {
        let discovered = registry().scan(&["second", "first"]);
        let trim = discovered.iter().find(|d| d.name == "trim").unwrap();
        assert_eq!(trim.namespace, "second");
        assert_eq!(discovered.len(), 2);
    }

    #[test]
    fn test_scan_skips_unknown_namespaces() {
        let discovered = registry().scan(&["missing", "first"]);
        assert_eq!(discovered.len(), 1);
        assert!(registry().scan::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_add_namespace_twice_appends() {
        let mut registry = DirectiveRegistry::new();
        registry.add_namespace(DirectiveNamespace::new("app").with::<first::TrimDirective>());
        registry.add_namespace(DirectiveNamespace::new("app").with::<second::RenameDirective>());

        assert_eq!(registry.namespace("app").unwrap().entries().len(), 2);
        assert_eq!(registry.namespace_names().collect::<Vec<_>>(), vec!["app"]);
    }
}
