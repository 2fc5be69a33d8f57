use async_trait::async_trait;
use marlin_core::{MetadataStore, RoutineKind};
use marlin_sql::backquote;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::Row;

pub mod introspect;

/// Adapter over a MySQL connection pool.
///
/// Implements [`MetadataStore`] for the dashboard's definer/definition
/// lookups and carries the catalog listing and grant queries in
/// [`introspect`].
pub struct MySqlAdapter {
    pool: sqlx::MySqlPool,
}

impl MySqlAdapter {
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    pub(crate) fn pool(&self) -> &sqlx::MySqlPool {
        &self.pool
    }

    /// Run a single administrative statement, returning the number of
    /// affected rows.
    pub async fn execute(&self, sql: &str) -> anyhow::Result<u64> {
        tracing::info!(sql, "executing administrative statement");
        let result = sqlx::query(sql).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl MetadataStore for MySqlAdapter {
    async fn definer_of(
        &self,
        db: &str,
        kind: RoutineKind,
        name: &str,
    ) -> anyhow::Result<Option<String>> {
        let row = sqlx::query(
            "SELECT DEFINER FROM information_schema.ROUTINES \
             WHERE ROUTINE_SCHEMA = ? AND SPECIFIC_NAME = ? AND ROUTINE_TYPE = ?",
        )
        .bind(db)
        .bind(name)
        .bind(kind.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(match row {
            Some(row) => row.try_get::<Option<String>, _>("DEFINER")?,
            None => None,
        })
    }

    async fn definition_of(
        &self,
        db: &str,
        kind: RoutineKind,
        name: &str,
    ) -> anyhow::Result<Option<String>> {
        // Identifiers cannot be bound as parameters; quote them instead.
        let (statement, column) = match kind {
            RoutineKind::Procedure => (
                format!("SHOW CREATE PROCEDURE {}.{}", backquote(db), backquote(name)),
                "Create Procedure",
            ),
            RoutineKind::Function => (
                format!("SHOW CREATE FUNCTION {}.{}", backquote(db), backquote(name)),
                "Create Function",
            ),
        };

        let row = sqlx::query(&statement).fetch_optional(&self.pool).await?;
        Ok(match row {
            // The column is NULL when the user may see the routine exist
            // but not its body.
            Some(row) => row.try_get::<Option<String>, _>(column)?,
            None => None,
        })
    }
}
