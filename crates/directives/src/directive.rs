//! The directive definition capability and name derivation.

/// A directive implementation that can describe itself in SDL.
///
/// `definition` must return the SDL of exactly one directive definition and
/// must parse without any surrounding schema.
pub trait Directive: 'static {
    fn definition() -> &'static str;
}

/// A registered directive type: its Rust type name and its SDL provider.
#[derive(Debug, Clone, Copy)]
pub struct DirectiveEntry {
    class_name: &'static str,
    definition: fn() -> &'static str,
}

impl DirectiveEntry {
    #[must_use]
    pub fn of<T: Directive>() -> Self {
        Self {
            class_name: std::any::type_name::<T>(),
            definition: T::definition,
        }
    }

    /// Fully qualified type name, e.g. `graphql_directives::mock::MockDirective`.
    #[must_use]
    pub const fn class_name(&self) -> &'static str {
        self.class_name
    }

    /// Type name without its module path.
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        short_name(self.class_name)
    }

    #[must_use]
    pub fn directive_name(&self) -> String {
        directive_name(self.class_name)
    }

    /// Invoke the type's SDL provider.
    #[must_use]
    pub fn definition(&self) -> &'static str {
        (self.definition)()
    }
}

fn short_name(class_name: &str) -> &str {
    let path = class_name.split('<').next().unwrap_or(class_name);
    path.rsplit("::").next().unwrap_or(path)
}

/// Derive the directive name from a type name.
///
/// The module path and a trailing `Directive` are dropped and the rest is
/// converted from `CamelCase` to `snake_case`:
/// `app::directives::HasManyDirective` becomes `has_many`. Generic
/// parameters are ignored, so `app::WrapDirective<x::Y>` becomes `wrap`.
#[must_use]
pub fn directive_name(class_name: &str) -> String {
    let short = short_name(class_name);
    let base = short.strip_suffix("Directive").unwrap_or(short);
    to_snake_case(base)
}

fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut snake = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let starts_word = match prev {
                None | Some('_') => false,
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                // End of an acronym: `HTMLSafe` -> `html_safe`
                Some(p) => p.is_uppercase() && next.is_some_and(char::is_lowercase),
            };
            if starts_word {
                snake.push('_');
            }
            snake.extend(c.to_lowercase());
        } else {
            snake.push(c);
        }
    }

    snake
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UpperDirective;

    impl Directive for UpperDirective {
        fn definition() -> &'static str {
            "directive @upper on FIELD_DEFINITION"
        }
    }

    #[test]
    fn test_directive_name_strips_path_and_suffix() {
        assert_eq!(directive_name("app::directives::UpperDirective"), "upper");
        assert_eq!(directive_name("MockDirective"), "mock");
        assert_eq!(directive_name("Directive"), "");
    }

    #[test]
    fn test_directive_name_snake_case() {
        assert_eq!(directive_name("HasManyDirective"), "has_many");
        assert_eq!(directive_name("BelongsToManyDirective"), "belongs_to_many");
        assert_eq!(directive_name("HTMLSafeDirective"), "html_safe");
        assert_eq!(directive_name("Base64EncodeDirective"), "base64_encode");
        assert_eq!(directive_name("Already_SnakeDirective"), "already_snake");
    }

    #[test]
    fn test_directive_name_without_suffix() {
        assert_eq!(directive_name("app::Trim"), "trim");
    }

    #[test]
    fn test_directive_name_ignores_generic_parameters() {
        assert_eq!(directive_name("app::WrapDirective<x::UpperDirective>"), "wrap");
        assert_eq!(
            directive_name("app::PairDirective<x::A, alloc::vec::Vec<y::B>>"),
            "pair"
        );
    }

    #[test]
    fn test_entry_of() {
        let entry = DirectiveEntry::of::<UpperDirective>();
        assert!(entry.class_name().ends_with("::UpperDirective"));
        assert_eq!(entry.short_name(), "UpperDirective");
        assert_eq!(entry.directive_name(), "upper");
        assert_eq!(entry.definition(), "directive @upper on FIELD_DEFINITION");
    }
}
