//! Views read from the panel home page: map, game mode, version, identity,
//! chat feed and the connected players list.

use log::debug;
use scraper::Html;

use super::selectors::{compiled, role_links, View};
use super::text::{attr_of, first_nonempty_text, strip_client_id, text_of};
use crate::error_handling::{PanelError, Result};
use crate::models::{ChatMessage, PlayerListing};

/// Position of the map name among the map container's spans.
const MAP_NAME_SPAN: usize = 0;
/// Position of the game mode among the map container's spans.
const GAME_MODE_SPAN: usize = 2;

/// Current map name.
///
/// # Errors
///
/// `PanelError::NotFound` when the map container or its first span is missing.
pub fn map_name(html: &str) -> Result<String> {
    map_span(html, MAP_NAME_SPAN, "map name")
}

/// Current game mode, the third span of the map container.
///
/// # Errors
///
/// `PanelError::NotFound` when the map container or its third span is missing.
pub fn game_mode(html: &str) -> Result<String> {
    map_span(html, GAME_MODE_SPAN, "game mode")
}

fn map_span(html: &str, index: usize, what: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let rules = compiled(View::MapInfo);
    let anchor = document
        .select(rules.container())
        .next()
        .ok_or_else(|| PanelError::not_found(format!("{what} container")))?;

    anchor
        .select(rules.field("span"))
        .nth(index)
        .map(text_of)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| PanelError::not_found(what))
}

/// Panel version from the first sidebar link that carries a version badge.
///
/// # Errors
///
/// `PanelError::NotFound` when no sidebar link has a non-empty badge.
pub fn iw4m_version(html: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let rules = compiled(View::Version);
    let badge = rules.field("badge");

    document
        .select(rules.container())
        .find_map(|link| link.select(badge).next())
        .map(text_of)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| PanelError::not_found("IW4MAdmin version"))
}

/// Name of the logged-in user from the first sidebar identity block.
///
/// # Errors
///
/// `PanelError::NotFound` when the identity block or its name is missing.
pub fn logged_in_as(html: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let rules = compiled(View::LoggedInAs);
    let block = document
        .select(rules.container())
        .next()
        .ok_or_else(|| PanelError::not_found("logged-in identity block"))?;

    first_nonempty_text(block, rules.field("name"))
        .ok_or_else(|| PanelError::not_found("logged-in username"))
}

/// Chat lines of the live feed, in page order.
///
/// A line is kept only when both its sender and its message resolve.
pub fn read_chat(html: &str) -> Vec<ChatMessage> {
    let document = Html::parse_document(html);
    let rules = compiled(View::Chat);
    let sender_selector = rules.field("sender");
    let span_selector = rules.field("span");
    let message_selector = rules.field("message");

    let messages: Vec<ChatMessage> = document
        .select(rules.container())
        .filter_map(|line| {
            let sender = first_nonempty_text(line, sender_selector)?;
            let message = line
                .select(span_selector)
                .nth(1)
                .and_then(|span| first_nonempty_text(span, message_selector))?;
            Some(ChatMessage { sender, message })
        })
        .collect();

    debug!("Extracted {} chat messages", messages.len());
    messages
}

/// Players linked on the home page, grouped by role in rank order.
///
/// Links without a name or whose href is too short to hold a client id are
/// skipped.
pub fn list_players(html: &str) -> Vec<PlayerListing> {
    let document = Html::parse_document(html);
    let rules = compiled(View::Players);
    let Some(scope) = document.select(rules.container()).next() else {
        return Vec::new();
    };
    let name_selector = rules.field("name");

    let mut players = Vec::new();
    for (role, link_selector) in role_links() {
        for link in scope.select(link_selector) {
            let Some(name) = link.select(name_selector).next().map(text_of) else {
                continue;
            };
            let url = attr_of(link, "href").unwrap_or_default();
            let Some(client_id) = strip_client_id(&url) else {
                debug!("Skipping {role} '{name}': profile href '{url}' has no client id");
                continue;
            };
            players.push(PlayerListing {
                role: (*role).to_string(),
                name,
                client_id,
                url,
            });
        }
    }

    debug!("Extracted {} players", players.len());
    players
}
