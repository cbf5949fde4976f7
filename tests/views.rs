//! End-to-end view tests: session → fake transport → decoder/extractor.

mod helpers;

use helpers::{session, FakePanel, COOKIE};
use iw4m_client::config::{
    ENDPOINT_AUDIT_LOG, ENDPOINT_EDIT_FORM, ENDPOINT_HOME, ENDPOINT_INFO, ENDPOINT_PRIVILEGED,
    ENDPOINT_STATUS,
};
use iw4m_client::PanelError;

const STATUS_JSON: &str = r#"[{
    "id": 12700128961,
    "isOnline": true,
    "name": "^2Rust ^7Only",
    "maxPlayers": 18,
    "currentPlayers": 2,
    "map": {"name": "mp_rust", "alias": "Rust"},
    "gameMode": "dm",
    "listenAddress": "127.0.0.1",
    "listenPort": 28960,
    "game": "IW4",
    "players": [
        {"name": "Alpha", "score": 1200, "ping": 40, "state": "Connected",
         "clientNumber": 0, "connectionTime": 360, "level": "User"},
        {"name": "Bravo", "score": 300, "ping": 85, "state": "Connected",
         "clientNumber": 3, "connectionTime": 75, "level": "Moderator"}
    ]
}]"#;

const INFO_JSON: &str = r#"{
    "totalConnectedClients": 18,
    "totalClientSlots": 18,
    "totalTrackedClients": 5123,
    "totalRecentClients": {"value": 44, "time": null, "startAt": "2026-10-18T00:00:00Z", "endAt": "2026-10-19T00:00:00Z"},
    "maxConcurrentClients": {"value": 18, "time": "2026-10-18T21:14:00Z", "startAt": "2026-10-12T00:00:00Z", "endAt": "2026-10-19T00:00:00Z"}
}"#;

const HOME_HTML: &str = r#"
<html><body>
  <a class="sidebar-link" href="https://github.com/RaidMax/IW4M-Admin"><span class="text-primary">2024.2.4.1</span></a>
  <div class="sidebar-link font-size-12 font-weight-light"><colorcode>AdminGuy</colorcode></div>
  <div class="col-12 align-self-center text-center text-lg-left col-lg-4">
    <span>Rust</span><span>-</span><span>Free For All</span>
  </div>
  <a class="level-color-6 no-decoration text-truncate ml-5 mr-5" href="/Client/Profile/101"><colorcode>OwnerOne</colorcode></a>
  <a class="text-light-dm text-dark-lm no-decoration text-truncate ml-5 mr-5" href="/Client/Profile/202"><colorcode>Alpha</colorcode></a>
</body></html>"#;

fn audit_html(rows: usize) -> String {
    let rows: String = (0..rows)
        .map(|i| {
            format!(
                r#"<tr class="d-none d-lg-table-row bg-dark-dm bg-light-lm"><td>Ban</td><td><a href="/Client/Profile/1">Admin</a></td><td>Target{i}</td><td>-</td><td>!ban Target{i}</td><td>{i} minutes ago</td></tr>"#
            )
        })
        .collect();
    format!(r#"<table><tbody id="audit_log_table_body">{rows}</tbody></table>"#)
}

#[tokio::test]
async fn test_status_decodes_every_field_in_order() {
    let session = session(FakePanel::new().with_page(ENDPOINT_STATUS, STATUS_JSON));

    let servers = session.status().await.expect("status should decode");
    assert_eq!(servers.len(), 1);
    let server = &servers[0];
    assert_eq!(server.id, 12700128961);
    assert!(server.is_online);
    assert_eq!(server.map.alias, "Rust");
    assert_eq!(server.listen_port, 28960);
    let names: Vec<&str> = server.players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Alpha", "Bravo"]);
    assert_eq!(server.players[1].client_number, 3);

    assert_eq!(session.transport().urls(), ["http://panel.test/api/status"]);
    assert_eq!(session.transport().cookies(), [COOKIE]);
}

#[tokio::test]
async fn test_info_accepts_null_window_time() {
    let session = session(FakePanel::new().with_page(ENDPOINT_INFO, INFO_JSON));

    let info = session.info().await.expect("info should decode");
    assert_eq!(info.total_tracked_clients, 5123);
    assert_eq!(info.total_recent_clients.time, None);
    assert_eq!(
        info.max_concurrent_clients.time.as_deref(),
        Some("2026-10-18T21:14:00Z")
    );
}

#[tokio::test]
async fn test_info_missing_counter_is_parse_error() {
    let session = session(FakePanel::new().with_page(ENDPOINT_INFO, r#"{"totalConnectedClients": 3}"#));

    match session.info().await {
        Err(PanelError::Parse { endpoint, .. }) => assert_eq!(endpoint, ENDPOINT_INFO),
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_home_page_views() {
    let session = session(FakePanel::new().with_page(ENDPOINT_HOME, HOME_HTML));

    assert_eq!(session.map_name().await.unwrap(), "Rust");
    assert_eq!(session.game_mode().await.unwrap(), "Free For All");
    assert_eq!(session.iw4m_version().await.unwrap(), "2024.2.4.1");
    assert_eq!(session.logged_in_as().await.unwrap(), "AdminGuy");

    let players = session.list_players().await.unwrap();
    assert_eq!(players.len(), 2);
    assert_eq!(players[0].role, "owner");
    assert_eq!(players[1].client_id, "202");

    // One GET per operation.
    assert_eq!(session.transport().urls().len(), 5);
}

#[tokio::test]
async fn test_list_players_absolute_profile_href() {
    let home = HOME_HTML.replace(
        r#"href="/Client/Profile/202""#,
        r#"href="http://panel:1624/Client/Profile/77""#,
    );
    let session = session(FakePanel::new().with_page(ENDPOINT_HOME, &home));

    let players = session.list_players().await.unwrap();
    let ids: Vec<&str> = players.iter().map(|p| p.client_id.as_str()).collect();
    assert_eq!(ids, ["101", "77"]);
    assert_eq!(players[1].url, "http://panel:1624/Client/Profile/77");
}

#[tokio::test]
async fn test_scalar_view_on_unexpected_page_is_not_found() {
    let session = session(FakePanel::new().with_page(ENDPOINT_HOME, "<html><body>Login</body></html>"));

    assert!(matches!(session.map_name().await, Err(PanelError::NotFound(_))));
    assert!(matches!(session.logged_in_as().await, Err(PanelError::NotFound(_))));
}

#[tokio::test]
async fn test_transport_failure_names_endpoint() {
    let session = session(FakePanel::new());

    match session.rules().await {
        Err(PanelError::Transport { endpoint, .. }) => assert_eq!(endpoint, "/About"),
        other => panic!("expected a transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_find_player_without_name_or_xuid_issues_no_request() {
    let session = session(FakePanel::new());

    let result = session.find_player("", "", 10, 0, 0).await;
    assert!(matches!(result, Err(PanelError::InvalidArgument(_))));
    assert!(session.transport().urls().is_empty());
}

#[tokio::test]
async fn test_find_player_encodes_query() {
    let endpoint = "/api/client/find?name=Big+Boss&xuid=&count=5&offset=0&direction=1";
    let body = r#"{"totalFoundClients": 1, "clients": [{"name": "Big Boss", "xuid": "abc123", "clientId": 42}]}"#;
    let session = session(FakePanel::new().with_page(endpoint, body));

    let found = session.find_player("Big Boss", "", 5, 0, 1).await.unwrap();
    assert_eq!(found.total_found_clients, 1);
    assert_eq!(found.clients[0].client_id, 42);
    assert_eq!(
        session.transport().urls(),
        [format!("http://panel.test{endpoint}")]
    );
}

#[tokio::test]
async fn test_player_stats_uses_first_element() {
    let body = r#"[
        {"name": "Alpha", "ranking": 3, "kills": 900, "deaths": 450, "performance": 1523.4,
         "scorePerMinute": 310.5, "lastPlayed": "2026-10-18T20:00:00Z", "totalSecondsPlayed": 86400,
         "serverName": "Rust Only", "serverGame": "IW4"},
        {"name": "Alpha", "ranking": 9, "kills": 1, "deaths": 1, "performance": 1.0,
         "scorePerMinute": 1.0, "lastPlayed": "", "totalSecondsPlayed": 1,
         "serverName": "Other", "serverGame": "T6"}
    ]"#;
    let session = session(
        FakePanel::new()
            .with_page("/api/stats/202", body)
            .with_page("/api/stats/999", "[]"),
    );

    let stats = session.player_stats("202").await.unwrap();
    assert_eq!(stats.ranking, 3);
    assert_eq!(stats.server_name, "Rust Only");

    assert!(matches!(
        session.player_stats("999").await,
        Err(PanelError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_audit_logs_count_and_command_prefix() {
    let session = session(FakePanel::new().with_page(ENDPOINT_AUDIT_LOG, &audit_html(20)));

    assert_eq!(session.audit_logs(3).await.unwrap().len(), 3);
    assert_eq!(session.audit_logs(0).await.unwrap().len(), 15);

    let recent = session.recent_audit_log().await.unwrap().unwrap();
    assert_eq!(recent.target, "Target0");
    assert_eq!(session.command_prefix().await.unwrap(), '!');
}

#[tokio::test]
async fn test_command_prefix_on_empty_log_is_not_found() {
    let session = session(FakePanel::new().with_page(ENDPOINT_AUDIT_LOG, &audit_html(0)));

    assert!(session.recent_audit_log().await.unwrap().is_none());
    assert!(matches!(
        session.command_prefix().await,
        Err(PanelError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_top_players_zero_requests_default_page() {
    let session = session(FakePanel::new().with_page(
        "/Stats/GetTopPlayersAsync?offset=0&count=10&serverId=0",
        "<div></div>",
    ));

    assert!(session.top_players(0).await.unwrap().is_empty());
    assert_eq!(
        session.transport().urls(),
        ["http://panel.test/Stats/GetTopPlayersAsync?offset=0&count=10&serverId=0"]
    );
}

#[tokio::test]
async fn test_recent_clients_requests_fixed_page() {
    let session = session(
        FakePanel::new().with_page("/Action/RecentClientsForm?offset=40&count=20", "<div></div>"),
    );

    assert!(session.recent_clients(40).await.unwrap().is_empty());
}

const PRIVILEGED_HTML: &str = r#"
    <table class="table mb-20">
      <thead><tr><th>Owner</th></tr></thead>
      <tbody><tr><td><a class="text-force-break">BigBoss</a></td><td><div class="badge">IW4</div></td><td>now</td></tr></tbody>
    </table>
    <table class="table mb-20">
      <thead><tr><th>Moderator</th></tr></thead>
      <tbody>
        <tr><td><a class="text-force-break">ModA</a></td><td></td><td>yesterday</td></tr>
        <tr><td><a class="text-force-break">ModB</a></td><td></td><td>last week</td></tr>
      </tbody>
    </table>"#;

#[tokio::test]
async fn test_admins_empty_role_means_all() {
    let session = session(FakePanel::new().with_page(ENDPOINT_PRIVILEGED, PRIVILEGED_HTML));

    let everyone = session.admins("", 0).await.unwrap();
    assert_eq!(everyone.len(), 3);

    let moderators = session.admins("MODERATOR", 1).await.unwrap();
    assert_eq!(moderators.len(), 1);
    assert_eq!(moderators[0].name, "ModA");
    assert_eq!(moderators[0].game, "N/A");
}

#[tokio::test]
async fn test_fail_open_helpers_on_success() {
    let session = session(
        FakePanel::new()
            .with_page(ENDPOINT_HOME, HOME_HTML)
            .with_page(ENDPOINT_PRIVILEGED, PRIVILEGED_HTML)
            .with_page(ENDPOINT_INFO, INFO_JSON),
    );

    assert_eq!(session.player_count().await, 2);
    assert!(session.is_player_online("Alpha").await);
    // Player names match exactly.
    assert!(!session.is_player_online("alpha").await);
    assert!(!session.is_player_online("Charlie").await);
    assert!(session.is_server_full().await);
    assert_eq!(session.find_admin("modb").await.game, "N/A");
    assert_eq!(session.find_admin("modb").await.name, "ModB");
    assert_eq!(session.find_admin("nobody").await.name, "");
}

#[tokio::test]
async fn test_fail_open_helpers_swallow_errors() {
    let session = session(FakePanel::new());

    assert_eq!(session.player_count().await, 0);
    assert!(!session.is_server_full().await);
    assert!(!session.is_player_online("Alpha").await);
    assert_eq!(session.find_admin("BigBoss").await, Default::default());
    // Each helper still issued its single request.
    assert_eq!(session.transport().urls().len(), 4);
}

#[tokio::test]
async fn test_roles_and_stock_roles_share_edit_form() {
    let form = r#"<select name="level">
        <option value="Owner">Owner</option>
        <option value="SeniorAdmin">Senior Admin</option>
    </select>"#;
    let session = session(FakePanel::new().with_page(ENDPOINT_EDIT_FORM, form));

    assert_eq!(session.roles().await.unwrap(), ["Owner", "Senior Admin"]);
    assert_eq!(session.stock_roles().await.unwrap(), ["Owner", "SeniorAdmin"]);
    assert_eq!(
        session.transport().urls(),
        [
            "http://panel.test/Action/editForm/?id=2&meta=",
            "http://panel.test/Action/editForm/?id=2&meta=",
        ]
    );
}
