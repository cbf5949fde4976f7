//! Privileged clients page.

use log::debug;
use scraper::{ElementRef, Html};

use super::selectors::{compiled, View};
use super::text::{first_text, same_name, text_of};
use crate::config::{ALL_ROLES, NOT_APPLICABLE};
use crate::models::Admin;

/// Admins listed in the per-role tables, in page order.
///
/// `role` selects one table by its header (case-insensitive); an empty role
/// or `"all"` scans every table. `count` caps the total across tables, zero
/// meaning no cap. Rows without cells are skipped.
pub fn admins(html: &str, role: &str, count: usize) -> Vec<Admin> {
    let wanted = role.trim();
    let wanted = (!wanted.is_empty() && !same_name(wanted, ALL_ROLES)).then_some(wanted);
    let limit = (count > 0).then_some(count);
    let reached = |found: usize| limit.is_some_and(|limit| found >= limit);

    let document = Html::parse_document(html);
    let rules = compiled(View::Admins);
    let header_selector = rules.field("header");
    let row_selector = rules.field("row");
    let name_selector = rules.field("name");
    let badge_selector = rules.field("badge");
    let cell_selector = rules.field("cell");

    let mut admins = Vec::new();
    'tables: for table in document.select(rules.container()) {
        if reached(admins.len()) {
            break;
        }
        let Some(table_role) = first_text(table, header_selector) else {
            continue;
        };
        if wanted.is_some_and(|wanted| !same_name(wanted, &table_role)) {
            continue;
        }

        for row in table.select(row_selector) {
            let cells: Vec<ElementRef<'_>> = row.select(cell_selector).collect();
            let Some(last_cell) = cells.last() else {
                continue;
            };
            admins.push(Admin {
                name: first_text(row, name_selector).unwrap_or_default(),
                role: table_role.clone(),
                game: first_text(row, badge_selector)
                    .unwrap_or_else(|| NOT_APPLICABLE.to_string()),
                last_connected: text_of(*last_cell),
            });
            if reached(admins.len()) {
                break 'tables;
            }
        }
    }

    debug!("Extracted {} admins for role '{role}'", admins.len());
    admins
}
