//! Command reference from the help page.

use std::collections::BTreeMap;

use log::debug;
use scraper::{ElementRef, Html};

use super::selectors::{compiled, View};
use super::text::{first_nonempty_text, text_of};
use crate::models::{Command, Help, HelpSection};

/// Help sections keyed by title, each with its commands keyed by name.
///
/// A title seen twice merges into one section; a command name seen twice in
/// a section keeps the last row. Rows with fewer than six cells are skipped.
pub fn help(html: &str) -> Help {
    let document = Html::parse_document(html);
    let rules = compiled(View::Help);
    let title_selector = rules.field("title");
    let row_selector = rules.field("row");
    let cell_selector = rules.field("cell");

    let mut help = Help::default();
    for container in document.select(rules.container()) {
        let Some(title) = first_nonempty_text(container, title_selector) else {
            continue;
        };
        let section = help
            .sections
            .entry(title.clone())
            .or_insert_with(|| HelpSection {
                title,
                commands: BTreeMap::new(),
            });

        for row in container.select(row_selector) {
            let cells: Vec<ElementRef<'_>> = row.select(cell_selector).collect();
            let [name, alias, description, requires_target, syntax, min_level, ..] =
                cells.as_slice()
            else {
                continue;
            };
            section.commands.insert(
                text_of(*name),
                Command {
                    alias: text_of(*alias),
                    description: text_of(*description),
                    requires_target: text_of(*requires_target),
                    syntax: text_of(*syntax),
                    min_level: text_of(*min_level),
                },
            );
        }
    }

    debug!("Extracted {} help sections", help.sections.len());
    help
}
