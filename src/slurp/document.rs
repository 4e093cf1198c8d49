//! HTML document adapter
//!
//! Wraps `scraper`'s browser-grade parser so that the rest of the pipeline only
//! deals with two operations: parse raw bytes, and find every element with a
//! given tag name in document order. Parsing never fails; unclosed tags, stray
//! end tags and invalid UTF-8 are repaired the way a browser would.

use scraper::{ElementRef, Html, Selector};

/// A parsed HTML document
pub struct Document {
    html: Html,
}

/// Borrowed handle to one element of a [`Document`]
#[derive(Debug, Clone, Copy)]
pub struct Element<'a> {
    inner: ElementRef<'a>,
}

impl Document {
    /// Parses raw response bytes into a document
    ///
    /// Bytes that are not valid UTF-8 are decoded lossily rather than rejected.
    ///
    /// # Example
    ///
    /// ```
    /// use link_slurp::slurp::Document;
    ///
    /// let doc = Document::parse(b"<p><a href='/x'>unclosed");
    /// assert_eq!(doc.find_all("a").len(), 1);
    /// ```
    pub fn parse(raw: &[u8]) -> Self {
        let source = String::from_utf8_lossy(raw);
        Self {
            html: Html::parse_document(&source),
        }
    }

    /// Returns every element named `tag`, in document order
    ///
    /// A tag name that cannot be turned into a selector matches nothing.
    pub fn find_all(&self, tag: &str) -> Vec<Element<'_>> {
        let selector = match Selector::parse(tag) {
            Ok(selector) => selector,
            Err(e) => {
                tracing::warn!("Cannot query for tag '{}': {:?}", tag, e);
                return Vec::new();
            }
        };

        self.html
            .select(&selector)
            .map(|inner| Element { inner })
            .collect()
    }
}

impl<'a> Element<'a> {
    /// Returns the value of attribute `name`, if present
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.inner.value().attr(name)
    }

    /// Returns all descendant text, concatenated without trimming
    pub fn text(&self) -> String {
        self.inner.text().collect()
    }

    /// Returns the element's tag name
    pub fn name(&self) -> &'a str {
        self.inner.value().name()
    }
}
