//! # marlin-dashboard
//!
//! Admin web dashboard for the Marlin MySQL console.
//!
//! This crate provides the embedded web UI for stored-program
//! administration:
//! - Routine list (procedures and functions, with execute/edit/export/drop actions)
//! - Trigger list (database-wide or per table)
//! - Event list (scheduler events)
//!
//! Action links are gated per item on the current user's grants; the
//! list renderer asks a [`marlin_privileges::PrivilegeChecker`] and a
//! [`marlin_core::MetadataStore`] and degrades each link to a disabled
//! label when the answer is no.
//!
//! ## Tech Stack
//!
//! - Axum for the HTTP server
//! - Tailwind CSS for styling
//! - Plain `format!` templates, no template engine

pub mod error;
pub mod handlers;
pub mod lists;
pub mod routes;
pub mod server;
pub mod state;
pub mod templates;
pub mod titles;
pub mod urls;

pub use error::DashboardError;
pub use lists::{ItemList, ListRenderer, RenderContext};
pub use server::DashboardServer;
pub use state::AppState;
pub use titles::TitleSet;
