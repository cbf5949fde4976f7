//! Audit log table.

use log::debug;
use scraper::{ElementRef, Html, Selector};

use super::selectors::{compiled, View};
use super::text::{attr_of, text_of};
use crate::config::DEFAULT_AUDIT_LOG_COUNT;
use crate::models::AuditLogEntry;

/// Up to `count` audit entries, newest first as the panel lists them.
///
/// A `count` of zero means [`DEFAULT_AUDIT_LOG_COUNT`]. Rows with fewer than
/// six cells are skipped and do not count towards the limit; scanning stops
/// as soon as the limit is reached.
pub fn audit_logs(html: &str, count: usize) -> Vec<AuditLogEntry> {
    let limit = if count == 0 {
        DEFAULT_AUDIT_LOG_COUNT
    } else {
        count
    };

    let document = Html::parse_document(html);
    let rules = compiled(View::AuditLog);
    let Some(body) = document.select(rules.container()).next() else {
        debug!("Audit log table body not found");
        return Vec::new();
    };
    let cell_selector = rules.field("cell");
    let link_selector = rules.field("link");

    let mut entries = Vec::with_capacity(limit.min(64));
    for row in body.select(rules.field("row")) {
        if entries.len() >= limit {
            break;
        }
        let cells: Vec<ElementRef<'_>> = row.select(cell_selector).collect();
        if let Some(entry) = audit_entry(&cells, link_selector) {
            entries.push(entry);
        }
    }

    debug!("Extracted {} audit log entries (limit {limit})", entries.len());
    entries
}

/// The most recent well-formed audit entry, if any.
pub fn recent_audit_log(html: &str) -> Option<AuditLogEntry> {
    audit_logs(html, 1).into_iter().next()
}

fn audit_entry(cells: &[ElementRef<'_>], link_selector: &Selector) -> Option<AuditLogEntry> {
    let [kind, origin_cell, target_cell, _, data, time, ..] = cells else {
        return None;
    };

    let origin_link = origin_cell.select(link_selector).next();
    // Target prefers its linked label; plain text when the cell has no link.
    let target = match target_cell.select(link_selector).next() {
        Some(link) => text_of(link),
        None => text_of(*target_cell),
    };

    Some(AuditLogEntry {
        kind: text_of(*kind),
        origin: origin_link.map(text_of).unwrap_or_default(),
        href: origin_link
            .and_then(|link| attr_of(link, "href"))
            .unwrap_or_default(),
        target,
        data: text_of(*data),
        time: text_of(*time),
    })
}
