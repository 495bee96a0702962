//! Assertions for generated files.

/// Assert that `content` starts with `banner` and return the rest.
///
/// # Example
///
/// ```
/// use graphql_test_utils::assertions::strip_banner;
///
/// let body = strip_banner("# generated\ntype A", "# generated\n");
/// assert_eq!(body, "type A");
/// ```
pub fn strip_banner<'a>(content: &'a str, banner: &str) -> &'a str {
    content.strip_prefix(banner).unwrap_or_else(|| {
        panic!("expected generated file to start with banner\n--- banner ---\n{banner}\n--- content ---\n{content}")
    })
}

/// Count occurrences of `needle` in `haystack`.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Number the lines of a message list, for readable failure output.
pub fn format_messages<T: AsRef<str>>(messages: &[T]) -> String {
    if messages.is_empty() {
        return String::from("(no messages)");
    }

    messages
        .iter()
        .enumerate()
        .map(|(i, m)| format!("[{}] {}", i + 1, m.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}
