use super::classify::is_absolute;

/// Rewrites an href into absolute form against the document it came from
///
/// # Rules
///
/// 1. If `href` is absolute (see [`is_absolute`]), return it unchanged
/// 2. Otherwise return `origin + href` as a plain string concatenation
///
/// No path resolution happens: `../` is not collapsed, duplicate slashes are
/// kept, and a path that follows an origin without a trailing slash is glued
/// directly onto it. An empty href therefore yields the origin itself.
///
/// # Examples
///
/// ```
/// use link_slurp::url::normalize_href;
///
/// let origin = "http://example.com/page";
/// assert_eq!(normalize_href("https://other.com/", origin), "https://other.com/");
/// assert_eq!(normalize_href("/about", origin), "http://example.com/page/about");
/// assert_eq!(normalize_href("", origin), "http://example.com/page");
/// ```
pub fn normalize_href(href: &str, origin: &str) -> String {
    if is_absolute(href) {
        return href.to_string();
    }

    let mut joined = String::with_capacity(origin.len() + href.len());
    joined.push_str(origin);
    joined.push_str(href);
    joined
}

/// Lowercases a caller-supplied target URL before it is fetched
///
/// The whole string is lowercased, including path and query, so
/// `HTTP://Example.com/Page?Q=A` becomes `http://example.com/page?q=a`.
pub fn lowercase_target(target: &str) -> String {
    target.to_lowercase()
}
