//! Server rules from the about page.

use log::debug;
use scraper::Html;

use super::selectors::{compiled, View};
use super::text::collapse_whitespace;

/// Rule texts in page order.
///
/// Only cards that carry a section heading are scanned. Each rule is trimmed
/// and its internal whitespace collapsed; empty rules are dropped.
pub fn rules(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let rules = compiled(View::Rules);
    let heading = rules.field("heading");
    let rule = rules.field("rule");

    let texts: Vec<String> = document
        .select(rules.container())
        .filter(|card| card.select(heading).next().is_some())
        .flat_map(|card| card.select(rule))
        .map(|entry| collapse_whitespace(&entry.text().collect::<String>()))
        .filter(|text| !text.is_empty())
        .collect();

    debug!("Extracted {} rules", texts.len());
    texts
}
