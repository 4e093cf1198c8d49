//! URL handling module for Link-Slurp
//!
//! This module decides whether an href is already absolute and rewrites
//! relative hrefs against the URL of the document they were found in.
//!
//! Both rules are literal string operations rather than RFC 3986 resolution:
//! a relative href is appended to the origin as-is. Origins without a trailing
//! slash therefore produce joined paths such as `http://example.com/pageabout`.

mod classify;
mod normalize;

// Re-export main functions
pub use classify::is_absolute;
pub use normalize::{lowercase_target, normalize_href};
