//! Catalog listings and grant loading.
//!
//! Everything the list views show comes from `information_schema`; the
//! queries here map its rows into the plain item records the dashboard
//! renders, and into the grant entries the privilege checker runs on.

use crate::MySqlAdapter;
use marlin_core::{EventItem, RoutineItem, RoutineKind, TriggerItem};
use marlin_privileges::{GrantChecker, GrantEntry, Privilege};
use marlin_sql::drop_trigger_statement;
use sqlx::Row;
use std::str::FromStr;

impl MySqlAdapter {
    /// Stored routines of a database, in name order.
    pub async fn list_routines(&self, db: &str) -> anyhow::Result<Vec<RoutineItem>> {
        let rows = sqlx::query(
            "SELECT SPECIFIC_NAME, ROUTINE_TYPE, DTD_IDENTIFIER \
             FROM information_schema.ROUTINES \
             WHERE ROUTINE_SCHEMA = ? \
             ORDER BY SPECIFIC_NAME",
        )
        .bind(db)
        .fetch_all(self.pool())
        .await?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            let routine_type: String = row.try_get("ROUTINE_TYPE")?;
            let Some(kind) = RoutineKind::from_routine_type(&routine_type) else {
                continue;
            };
            items.push(RoutineItem {
                name: row.try_get("SPECIFIC_NAME")?,
                kind,
                returns: row
                    .try_get::<Option<String>, _>("DTD_IDENTIFIER")?
                    .unwrap_or_default(),
            });
        }
        Ok(items)
    }

    /// Triggers of a database, optionally narrowed to one table.
    pub async fn list_triggers(
        &self,
        db: &str,
        table: Option<&str>,
    ) -> anyhow::Result<Vec<TriggerItem>> {
        let query = match table {
            Some(table) => sqlx::query(
                "SELECT TRIGGER_NAME, EVENT_OBJECT_TABLE, ACTION_TIMING, EVENT_MANIPULATION \
                 FROM information_schema.TRIGGERS \
                 WHERE TRIGGER_SCHEMA = ? AND EVENT_OBJECT_TABLE = ? \
                 ORDER BY TRIGGER_NAME",
            )
            .bind(db)
            .bind(table),
            None => sqlx::query(
                "SELECT TRIGGER_NAME, EVENT_OBJECT_TABLE, ACTION_TIMING, EVENT_MANIPULATION \
                 FROM information_schema.TRIGGERS \
                 WHERE TRIGGER_SCHEMA = ? \
                 ORDER BY TRIGGER_NAME",
            )
            .bind(db),
        };

        let rows = query.fetch_all(self.pool()).await?;
        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            let name: String = row.try_get("TRIGGER_NAME")?;
            let drop_statement = drop_trigger_statement(&name);
            items.push(TriggerItem {
                name,
                table: row.try_get("EVENT_OBJECT_TABLE")?,
                action_timing: row.try_get("ACTION_TIMING")?,
                event_manipulation: row.try_get("EVENT_MANIPULATION")?,
                drop_statement,
            });
        }
        Ok(items)
    }

    /// Scheduled events of a database, in name order.
    pub async fn list_events(&self, db: &str) -> anyhow::Result<Vec<EventItem>> {
        let rows = sqlx::query(
            "SELECT EVENT_NAME, STATUS, EVENT_TYPE \
             FROM information_schema.EVENTS \
             WHERE EVENT_SCHEMA = ? \
             ORDER BY EVENT_NAME",
        )
        .bind(db)
        .fetch_all(self.pool())
        .await?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(EventItem {
                name: row.try_get("EVENT_NAME")?,
                status: row.try_get("STATUS")?,
                kind: row.try_get("EVENT_TYPE")?,
            });
        }
        Ok(items)
    }

    /// Build a [`GrantChecker`] for the connection's authenticated user
    /// from the `*_PRIVILEGES` views.
    pub async fn grant_checker(&self) -> anyhow::Result<GrantChecker> {
        let row = sqlx::query("SELECT CURRENT_USER()")
            .fetch_one(self.pool())
            .await?;
        let current_user: String = row.try_get(0)?;
        let grantee = grantee_of(&current_user);

        let mut grants = Vec::new();
        let mut superuser = false;

        let rows = sqlx::query(
            "SELECT PRIVILEGE_TYPE FROM information_schema.USER_PRIVILEGES WHERE GRANTEE = ?",
        )
        .bind(&grantee)
        .fetch_all(self.pool())
        .await?;
        for row in rows {
            let privilege_type: String = row.try_get("PRIVILEGE_TYPE")?;
            let Ok(privilege) = Privilege::from_str(&privilege_type) else {
                continue;
            };
            if privilege == Privilege::Super {
                superuser = true;
            }
            grants.push(GrantEntry::global(privilege));
        }

        let rows = sqlx::query(
            "SELECT PRIVILEGE_TYPE, TABLE_SCHEMA \
             FROM information_schema.SCHEMA_PRIVILEGES WHERE GRANTEE = ?",
        )
        .bind(&grantee)
        .fetch_all(self.pool())
        .await?;
        for row in rows {
            let privilege_type: String = row.try_get("PRIVILEGE_TYPE")?;
            let Ok(privilege) = Privilege::from_str(&privilege_type) else {
                continue;
            };
            grants.push(GrantEntry::schema(
                privilege,
                row.try_get::<String, _>("TABLE_SCHEMA")?,
            ));
        }

        let rows = sqlx::query(
            "SELECT PRIVILEGE_TYPE, TABLE_SCHEMA, TABLE_NAME \
             FROM information_schema.TABLE_PRIVILEGES WHERE GRANTEE = ?",
        )
        .bind(&grantee)
        .fetch_all(self.pool())
        .await?;
        for row in rows {
            let privilege_type: String = row.try_get("PRIVILEGE_TYPE")?;
            let Ok(privilege) = Privilege::from_str(&privilege_type) else {
                continue;
            };
            grants.push(GrantEntry::table(
                privilege,
                row.try_get::<String, _>("TABLE_SCHEMA")?,
                row.try_get::<String, _>("TABLE_NAME")?,
            ));
        }

        tracing::info!(
            user = %current_user,
            grants = grants.len(),
            superuser,
            "loaded grants"
        );
        Ok(GrantChecker::new(current_user, superuser, grants))
    }
}

/// `CURRENT_USER()` reports `user@host`; the `*_PRIVILEGES` views record
/// the grantee as `'user'@'host'`.
fn grantee_of(current_user: &str) -> String {
    match current_user.rsplit_once('@') {
        Some((user, host)) => format!("'{user}'@'{host}'"),
        None => format!("'{current_user}'@'%'"),
    }
}
