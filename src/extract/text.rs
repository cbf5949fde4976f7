//! Text normalization shared by every view.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Selector};
use url::Url;

use crate::config::{CLIENT_ID_PREFIX_LEN, CLIENT_PROFILE_PREFIX};

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").unwrap_or_else(|e| {
        panic!("Failed to compile whitespace pattern: {e}. This is a programming error.")
    })
});

/// Concatenated descendant text of `element`, trimmed and whitespace-collapsed.
pub(crate) fn text_of(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

/// Trims `text` and collapses every internal whitespace run to one space.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Text of the first descendant of `element` matching `selector`.
pub(crate) fn first_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element.select(selector).next().map(text_of)
}

/// Like [`first_text`] but treats an empty match as absent.
pub(crate) fn first_nonempty_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    first_text(element, selector).filter(|text| !text.is_empty())
}

/// Trimmed value of attribute `name`.
pub(crate) fn attr_of(element: ElementRef<'_>, name: &str) -> Option<String> {
    element.value().attr(name).map(|value| value.trim().to_string())
}

/// Name comparison shared by role and admin lookups: ASCII case folding,
/// surrounding whitespace ignored.
pub(crate) fn same_name(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// Derives a client id from a profile href by dropping the profile path prefix.
///
/// Absolute hrefs are reduced to their path first. Returns `None` when the
/// path is shorter than the prefix (or the cut would split a character), so
/// callers can skip the record instead of slicing out of bounds.
pub fn strip_client_id(href: &str) -> Option<String> {
    let path = match Url::parse(href) {
        Ok(url) => url.path().to_string(),
        Err(_) => href.to_string(),
    };
    path.strip_prefix(CLIENT_PROFILE_PREFIX)
        .or_else(|| path.get(CLIENT_ID_PREFIX_LEN..))
        .map(str::to_string)
}
