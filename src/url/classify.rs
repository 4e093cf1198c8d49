/// Literal prefix that marks an href as already absolute
const ABSOLUTE_PREFIX: &str = "http";

/// Classifies an href as absolute or relative
///
/// An href counts as absolute when it starts with the literal, case-sensitive
/// prefix `http`. This is a prefix heuristic rather than a scheme check, so
/// `"httpfoo"` is absolute while `"HTTP://example.com"` and
/// `"//cdn.example.com"` are relative.
///
/// # Examples
///
/// ```
/// use link_slurp::url::is_absolute;
///
/// assert!(is_absolute("https://example.com/"));
/// assert!(is_absolute("httpfoo"));
/// assert!(!is_absolute("/about"));
/// assert!(!is_absolute(""));
/// ```
pub fn is_absolute(href: &str) -> bool {
    href.starts_with(ABSOLUTE_PREFIX)
}
