//! Link extraction
//!
//! Walks every `<a>` element of a parsed document and turns it into a
//! [`Link`]. Anchors are never dropped: a missing `href` is read as the empty
//! string, which normalizes to the origin itself.

use crate::slurp::document::Document;
use crate::slurp::result::Link;
use crate::url::normalize_href;

/// Tag name of anchor elements
const ANCHOR_TAG: &str = "a";

/// Extracts every anchor of `document` as a [`Link`], in document order
///
/// # Arguments
///
/// * `document` - The parsed document
/// * `origin` - URL the document was fetched from, used as the base for
///   relative hrefs
///
/// # Example
///
/// ```
/// use link_slurp::slurp::{extract_links, Document};
///
/// let doc = Document::parse(br#"<a href="/about">About</a><a>No Href</a>"#);
/// let links = extract_links(&doc, "http://example.com/page");
///
/// assert_eq!(links[0].href, "http://example.com/page/about");
/// assert_eq!(links[1].href, "http://example.com/page");
/// assert_eq!(links[1].text, "No Href");
/// ```
pub fn extract_links(document: &Document, origin: &str) -> Vec<Link> {
    document
        .find_all(ANCHOR_TAG)
        .into_iter()
        .map(|element| {
            let href = element.attr("href").unwrap_or_else(|| {
                tracing::debug!("href does not exist for <{}> element", element.name());
                ""
            });

            Link {
                href: normalize_href(href, origin),
                text: element.text(),
            }
        })
        .collect()
}
