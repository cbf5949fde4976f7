//! Recent clients form.

use log::debug;
use scraper::Html;

use super::selectors::{compiled, View};
use super::text::{attr_of, first_text};
use crate::models::RecentClient;

/// Recent clients in page order.
///
/// Every container yields a record; a sub-lookup that finds nothing leaves
/// its field empty.
pub fn recent_clients(html: &str) -> Vec<RecentClient> {
    let document = Html::parse_document(html);
    let rules = compiled(View::RecentClients);
    let user_selector = rules.field("user");
    let name_selector = rules.field("name");
    let link_selector = rules.field("link");
    let country_selector = rules.field("country");
    let ip_selector = rules.field("ip");
    let last_seen_selector = rules.field("last_seen");

    let clients: Vec<RecentClient> = document
        .select(rules.container())
        .map(|entry| {
            let mut client = RecentClient::default();

            if let Some(user) = entry.select(user_selector).next() {
                client.name = first_text(user, name_selector).unwrap_or_default();
                client.link = user
                    .select(link_selector)
                    .next()
                    .and_then(|link| attr_of(link, "href"))
                    .unwrap_or_default();
                client.country = user
                    .select(country_selector)
                    .next()
                    .and_then(|tooltip| attr_of(tooltip, "data-title"))
                    .unwrap_or_default();
            }
            client.ip_address = first_text(entry, ip_selector).unwrap_or_default();
            client.last_seen = first_text(entry, last_seen_selector).unwrap_or_default();
            client
        })
        .collect();

    debug!("Extracted {} recent clients", clients.len());
    clients
}
