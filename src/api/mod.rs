//! Panel view operations.
//!
//! Each operation on [`Session`](crate::Session) issues exactly one GET and
//! routes the body either to the JSON decoder or to the HTML extraction
//! engine:
//! - [`server`]: server-wide views (status, info, home page, forms, tables)
//! - [`player`]: per-player JSON views (statistics, client search)
//! - [`helpers`]: fail-open convenience checks built on the views above

pub mod helpers;
pub mod player;
pub mod server;
