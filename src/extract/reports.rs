//! Reports from the recent reports form.

use log::debug;
use scraper::Html;

use super::selectors::{compiled, View};
use super::text::first_text;
use crate::models::Report;

/// Reports in page order.
///
/// Each outer block supplies the timestamp shared by its entries. An entry
/// is kept when at least one of origin, reason or target resolves.
pub fn reports(html: &str) -> Vec<Report> {
    let document = Html::parse_document(html);
    let rules = compiled(View::Reports);
    let timestamp_selector = rules.field("timestamp");
    let entry_selector = rules.field("entry");
    let origin_selector = rules.field("origin");
    let reason_selector = rules.field("reason");
    let target_selector = rules.field("target");

    let mut reports = Vec::new();
    for block in document.select(rules.container()) {
        let timestamp = first_text(block, timestamp_selector).unwrap_or_default();

        for entry in block.select(entry_selector) {
            let origin = first_text(entry, origin_selector).unwrap_or_default();
            let reason = first_text(entry, reason_selector).unwrap_or_default();
            let target = first_text(entry, target_selector).unwrap_or_default();
            if origin.is_empty() && reason.is_empty() && target.is_empty() {
                continue;
            }
            reports.push(Report {
                origin,
                reason,
                target,
                timestamp: timestamp.clone(),
            });
        }
    }

    debug!("Extracted {} reports", reports.len());
    reports
}
