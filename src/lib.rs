//! iw4m_client library: read-only client for the IW4MAdmin web panel
//!
//! The panel exposes a few views as JSON (server status, server info, player
//! statistics, client search) and the rest only as rendered HTML pages. This
//! library fetches both kinds through one authenticated [`Session`] and turns
//! them into typed, serializable records.
//!
//! # Example
//!
//! ```no_run
//! use iw4m_client::initialization::init_session;
//! use iw4m_client::Config;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     base_url: "http://127.0.0.1:1624".to_string(),
//!     server_id: "12700128961".to_string(),
//!     cookie: ".AspNetCore.Cookies=CfDJ8...".to_string(),
//!     ..Default::default()
//! };
//! config.validate()?;
//!
//! let session = init_session(&config)?;
//! println!("Playing {} on {}", session.game_mode().await?, session.map_name().await?);
//!
//! let roles = session.role_table().await?;
//! for player in session.list_players().await? {
//!     if roles.is_higher(&player.role, "user") {
//!         println!("{} ({})", player.name, player.role);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Operations are `async` and need a Tokio runtime when used with the default
//! [`HttpTransport`]. Nothing is retried and no timeout is applied unless
//! [`Config::timeout_seconds`] is set; wrap calls in your own deadline otherwise.

#![warn(missing_docs)]

mod api;
pub mod config;
pub mod decode;
mod error_handling;
pub mod extract;
pub mod initialization;
pub mod models;
mod roles;
mod transport;

// Re-export public API
pub use config::{Config, ConfigValidationError, LogFormat, LogLevel};
pub use error_handling::{InitializationError, PanelError, Result, TransportSource};
pub use roles::RoleTable;
pub use transport::{HttpTransport, Session, Transport};
