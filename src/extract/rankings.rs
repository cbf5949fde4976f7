//! Top players ranking.

use std::collections::BTreeMap;

use log::debug;
use scraper::Html;

use super::selectors::{compiled, View};
use super::text::{attr_of, first_text};
use crate::models::TopPlayer;

/// Ranked players in page order, at most `count` of them (zero means no cap).
///
/// Entries without a rank block are skipped. Secondary stats are collected
/// from label/value pairs; a pair missing either half is ignored.
pub fn top_players(html: &str, count: usize) -> Vec<TopPlayer> {
    let document = Html::parse_document(html);
    let rules = compiled(View::TopPlayers);
    let block_selector = rules.field("rank_block");
    let rank_selector = rules.field("rank");
    let name_row_selector = rules.field("name_row");
    let name_selector = rules.field("name");
    let link_selector = rules.field("link");
    let rating_selector = rules.field("rating");
    let stats_selector = rules.field("stats");
    let stat_selector = rules.field("stat");
    let value_selector = rules.field("value");
    let label_selector = rules.field("label");

    let mut players = Vec::new();
    for entry in document.select(rules.container()) {
        if count > 0 && players.len() >= count {
            break;
        }
        let Some(block) = entry.select(block_selector).next() else {
            continue;
        };

        let rank = first_text(block, rank_selector).unwrap_or_default();
        let mut player = TopPlayer {
            rank: format!("#{rank}"),
            name: String::new(),
            link: String::new(),
            rating: first_text(block, rating_selector).unwrap_or_default(),
            stats: BTreeMap::new(),
        };

        if let Some(row) = block.select(name_row_selector).next() {
            player.name = first_text(row, name_selector).unwrap_or_default();
            player.link = row
                .select(link_selector)
                .next()
                .and_then(|link| attr_of(link, "href"))
                .unwrap_or_default();
        }

        if let Some(stats) = block.select(stats_selector).next() {
            for stat in stats.select(stat_selector) {
                let value = first_text(stat, value_selector).unwrap_or_default();
                let label = first_text(stat, label_selector).unwrap_or_default();
                if !value.is_empty() && !label.is_empty() {
                    player.stats.insert(label, value);
                }
            }
        }

        players.push(player);
    }

    debug!("Extracted {} top players", players.len());
    players
}
