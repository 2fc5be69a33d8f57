//! # marlin-core
//!
//! Shared types for the Marlin stored-program administration console:
//! configuration loaded from `marlin.yaml`, the item records shown in the
//! routine/trigger/event list views, and the metadata collaborator trait
//! implemented by the database adapter.

pub mod config;
pub mod items;
pub mod meta;

pub use config::{ConfigError, DashboardConfig, MarlinConfig, UpstreamConfig};
pub use items::{EventItem, RoutineItem, RoutineKind, TriggerItem};
pub use meta::MetadataStore;
