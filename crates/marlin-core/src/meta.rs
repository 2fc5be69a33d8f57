//! Metadata collaborator trait.
//!
//! The list renderer decides which action links to show by looking up a
//! routine's recorded definer and its `CREATE` definition. Those lookups
//! go through this trait so the renderer can be driven by fakes in tests
//! and by the MySQL adapter in production.

use crate::items::RoutineKind;
use async_trait::async_trait;

#[async_trait]
pub trait MetadataStore: Send + Sync {
    /// Recorded definer (`user@host`) of a stored routine, or `None` when
    /// the routine is not visible to the current connection.
    async fn definer_of(
        &self,
        db: &str,
        kind: RoutineKind,
        name: &str,
    ) -> anyhow::Result<Option<String>>;

    /// Full `CREATE` definition of a stored routine. `None` when the
    /// server hides the body from the current user.
    async fn definition_of(
        &self,
        db: &str,
        kind: RoutineKind,
        name: &str,
    ) -> anyhow::Result<Option<String>>;
}
