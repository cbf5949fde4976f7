//! Views backed by `<select>` controls: console server ids and edit-form roles.

use log::debug;
use scraper::{ElementRef, Html};

use super::selectors::{compiled, View};
use super::text::{attr_of, text_of};
use crate::models::ServerId;

/// Servers offered by the console's server selector. Options without a
/// `value` attribute are skipped.
pub fn server_ids(html: &str) -> Vec<ServerId> {
    let document = Html::parse_document(html);
    let rules = compiled(View::ServerIds);
    let option_selector = rules.field("option");

    let ids: Vec<ServerId> = document
        .select(rules.container())
        .flat_map(|select| select.select(option_selector))
        .filter_map(|option| {
            let id = attr_of(option, "value")?;
            Some(ServerId {
                name: text_of(option),
                id,
            })
        })
        .collect();

    debug!("Extracted {} server ids", ids.len());
    ids
}

/// Role names as displayed by the edit form's level select, highest first.
/// A page without the select yields an empty list.
pub fn roles(html: &str) -> Vec<String> {
    level_options(html, |option| Some(text_of(option)))
}

/// Stock role identifiers: the `value` attribute of each level option.
/// A page without the select yields an empty list.
pub fn stock_roles(html: &str) -> Vec<String> {
    level_options(html, |option| attr_of(option, "value"))
}

fn level_options<F>(html: &str, read: F) -> Vec<String>
where
    F: Fn(ElementRef<'_>) -> Option<String>,
{
    let document = Html::parse_document(html);
    let rules = compiled(View::Roles);
    let Some(select) = document.select(rules.container()).next() else {
        debug!("Edit form has no level select");
        return Vec::new();
    };

    select
        .select(rules.field("option"))
        .filter_map(read)
        .filter(|value| !value.is_empty())
        .collect()
}
