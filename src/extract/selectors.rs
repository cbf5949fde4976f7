//! Declarative selector table for every HTML view.
//!
//! Each view names one container selector and the descendant selectors its
//! fields are read from. Theme or version changes of the panel are edits to
//! [`VIEW_RULES`] and [`PLAYER_ROLE_LINKS`], not to extraction logic.

use std::collections::HashMap;
use std::sync::LazyLock;

use scraper::Selector;
use strum_macros::{Display, EnumIter};

/// Selector that can never match, used in place of a selector that failed to parse.
const NEVER_MATCH: &str = "*:not(*)";

/// The HTML views the extraction engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum View {
    /// Map name and game mode on the home page
    MapInfo,
    /// Panel version badge in the sidebar
    Version,
    /// Identity of the logged-in user in the sidebar
    LoggedInAs,
    /// Server rules on the about page
    Rules,
    /// Recent reports form
    Reports,
    /// Command help page
    Help,
    /// Server selector of the console
    ServerIds,
    /// Live chat feed on the home page
    Chat,
    /// Connected players on the home page
    Players,
    /// Level select of the edit form
    Roles,
    /// Recent clients form
    RecentClients,
    /// Audit log table
    AuditLog,
    /// Privileged clients tables
    Admins,
    /// Top players ranking
    TopPlayers,
}

/// A named field and the selector it is read from, relative to its container.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// Name extraction code looks the selector up by
    pub field: &'static str,
    /// CSS selector, relative to the container
    pub selector: &'static str,
}

/// Container selector plus field rules of one view.
#[derive(Debug, Clone, Copy)]
pub struct ViewRules {
    /// View these rules belong to
    pub view: View,
    /// Selector of the anchor container(s)
    pub container: &'static str,
    /// Field selectors, relative to each container
    pub fields: &'static [FieldRule],
}

const fn field(field: &'static str, selector: &'static str) -> FieldRule {
    FieldRule { field, selector }
}

/// Selectors of the current panel theme.
pub const VIEW_RULES: &[ViewRules] = &[
    ViewRules {
        view: View::MapInfo,
        container: "div.col-12.align-self-center.text-center.text-lg-left.col-lg-4",
        fields: &[field("span", "span")],
    },
    ViewRules {
        view: View::Version,
        container: "a.sidebar-link",
        fields: &[field("badge", "span.text-primary")],
    },
    ViewRules {
        view: View::LoggedInAs,
        container: "div.sidebar-link.font-size-12.font-weight-light",
        fields: &[field("name", "colorcode")],
    },
    ViewRules {
        view: View::Rules,
        container: "div.card.m-0.rounded",
        fields: &[
            field("heading", "h5.text-primary.mt-0.mb-0"),
            field("rule", "div.rule"),
        ],
    },
    ViewRules {
        view: View::Reports,
        container: "div.rounded.bg-very-dark-dm.bg-light-ex-lm.mt-10.mb-10.p-10",
        fields: &[
            field("timestamp", "div.font-weight-bold"),
            field("entry", "div.font-size-12"),
            field("origin", "a"),
            field("reason", "span.text-white-dm.text-black-lm"),
            field("target", "span.text-highlight a"),
        ],
    },
    ViewRules {
        view: View::Help,
        container: "div.command-assembly-container",
        fields: &[
            field("title", "h2.content-title.mb-lg-20.mt-20"),
            field("row", "tr.d-none.d-lg-table-row.bg-dark-dm.bg-light-lm"),
            field("cell", "td"),
        ],
    },
    ViewRules {
        view: View::ServerIds,
        container: "select#console_server_select",
        fields: &[field("option", "option")],
    },
    ViewRules {
        view: View::Chat,
        container: "div.text-truncate",
        fields: &[
            field("sender", "span colorcode"),
            field("span", "span"),
            field("message", "colorcode"),
        ],
    },
    ViewRules {
        view: View::Players,
        container: "body",
        fields: &[field("name", "colorcode")],
    },
    ViewRules {
        view: View::Roles,
        container: "select[name='level']",
        fields: &[field("option", "option")],
    },
    ViewRules {
        view: View::RecentClients,
        container: "div.bg-very-dark-dm.bg-light-ex-lm.p-15.rounded.mb-10",
        fields: &[
            field("user", "div.d-flex.flex-row"),
            field("name", "a.h4.mr-auto colorcode"),
            field("link", "a"),
            field("country", "div[data-toggle='tooltip']"),
            field("ip", "div.align-self-center.mr-auto"),
            field("last_seen", "div.align-self-center.text-muted.font-size-12"),
        ],
    },
    ViewRules {
        view: View::AuditLog,
        container: "#audit_log_table_body",
        fields: &[
            field("row", "tr.d-none.d-lg-table-row.bg-dark-dm.bg-light-lm"),
            field("cell", "td"),
            field("link", "a"),
        ],
    },
    ViewRules {
        view: View::Admins,
        container: "table.table.mb-20",
        fields: &[
            field("header", "thead tr th"),
            field("row", "tbody tr"),
            field("name", "a.text-force-break"),
            field("badge", "div.badge"),
            field("cell", "td"),
        ],
    },
    ViewRules {
        view: View::TopPlayers,
        container: "div.card.m-0.mt-15.p-20.d-flex.flex-column.flex-md-row.justify-content-between",
        fields: &[
            field("rank_block", "div.d-flex.flex-column.w-full.w-md-quarter"),
            field("rank", "div.d-flex.text-muted div"),
            field("name_row", "div.d-flex.flex-row"),
            field("name", "colorcode"),
            field("link", "a"),
            field("rating", "div.font-size-14 span"),
            field("stats", "div.d-flex.flex-column.font-size-12.text-right.text-md-left"),
            field("stat", "div"),
            field("value", "span.text-primary"),
            field("label", "span.text-muted"),
        ],
    },
];

/// Player link selectors by role, highest rank first.
///
/// Listing order follows this table, then document order within a role.
pub const PLAYER_ROLE_LINKS: &[(&str, &str)] = &[
    ("creator", "a.level-color-7.no-decoration.text-truncate.ml-5.mr-5"),
    ("owner", "a.level-color-6.no-decoration.text-truncate.ml-5.mr-5"),
    ("moderator", "a.level-color-5.no-decoration.text-truncate.ml-5.mr-5"),
    ("senioradmin", "a.level-color-4.no-decoration.text-truncate.ml-5.mr-5"),
    ("administrator", "a.level-color-3.no-decoration.text-truncate.ml-5.mr-5"),
    ("trusted", "a.level-color-2.no-decoration.text-truncate.ml-5.mr-5"),
    ("user", "a.text-light-dm.text-dark-lm.no-decoration.text-truncate.ml-5.mr-5"),
    ("flagged", "a.level-color-1.no-decoration.text-truncate.ml-5.mr-5"),
    ("banned", "a.level-color--1.no-decoration.text-truncate.ml-5.mr-5"),
];

/// Parses `selector`, logging and substituting a never-matching selector on failure.
fn compile(selector: &str, context: &str) -> Selector {
    Selector::parse(selector).unwrap_or_else(|e| {
        log::error!("Failed to parse CSS selector '{selector}' in {context}: {e}");
        Selector::parse(NEVER_MATCH).unwrap_or_else(|e| {
            panic!("Selector '{NEVER_MATCH}' must parse: {e}. This is a programming error.")
        })
    })
}

static NEVER: LazyLock<Selector> = LazyLock::new(|| compile(NEVER_MATCH, "fallback"));

/// Compiled selectors of one view.
pub(crate) struct CompiledView {
    view: Option<View>,
    container: Selector,
    fields: Vec<(&'static str, Selector)>,
}

impl CompiledView {
    fn from_rules(rules: &ViewRules) -> Self {
        let context = rules.view.to_string();
        Self {
            view: Some(rules.view),
            container: compile(rules.container, &context),
            fields: rules
                .fields
                .iter()
                .map(|rule| (rule.field, compile(rule.selector, &context)))
                .collect(),
        }
    }

    /// Selector of the view's anchor container.
    pub(crate) fn container(&self) -> &Selector {
        &self.container
    }

    /// Selector registered for `name`; an unknown name matches nothing.
    pub(crate) fn field(&self, name: &str) -> &Selector {
        match self.fields.iter().find(|(field, _)| *field == name) {
            Some((_, selector)) => selector,
            None => {
                log::error!("No selector for field '{name}' in view {:?}", self.view);
                &*NEVER
            }
        }
    }
}

static COMPILED: LazyLock<HashMap<View, CompiledView>> = LazyLock::new(|| {
    VIEW_RULES
        .iter()
        .map(|rules| (rules.view, CompiledView::from_rules(rules)))
        .collect()
});

static UNCONFIGURED: LazyLock<CompiledView> = LazyLock::new(|| CompiledView {
    view: None,
    container: compile(NEVER_MATCH, "unconfigured view"),
    fields: Vec::new(),
});

static ROLE_LINKS: LazyLock<Vec<(&'static str, Selector)>> = LazyLock::new(|| {
    PLAYER_ROLE_LINKS
        .iter()
        .map(|(role, selector)| (*role, compile(selector, "player role links")))
        .collect()
});

/// Compiled selectors of `view`.
pub(crate) fn compiled(view: View) -> &'static CompiledView {
    COMPILED.get(&view).unwrap_or_else(|| {
        log::error!("View {view} has no selector rules");
        &*UNCONFIGURED
    })
}

/// Compiled player link selectors in rank order.
pub(crate) fn role_links() -> &'static [(&'static str, Selector)] {
    ROLE_LINKS.as_slice()
}
