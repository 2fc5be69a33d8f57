//! Item records for the stored-program list views.
//!
//! These are plain, request-scoped value objects. The adapter fills them
//! from `information_schema` queries and the dashboard renders them; no
//! component mutates an item after construction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two kinds of stored routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoutineKind {
    Procedure,
    Function,
}

impl RoutineKind {
    /// The keyword as it appears in SQL and in `information_schema`.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutineKind::Procedure => "PROCEDURE",
            RoutineKind::Function => "FUNCTION",
        }
    }

    /// Parse the `ROUTINE_TYPE` column value.
    pub fn from_routine_type(value: &str) -> Option<Self> {
        match value {
            "PROCEDURE" => Some(RoutineKind::Procedure),
            "FUNCTION" => Some(RoutineKind::Function),
            _ => None,
        }
    }
}

impl fmt::Display for RoutineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored procedure or function, as listed in the routines view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutineItem {
    /// Routine name. Untrusted; escaped before it reaches markup.
    pub name: String,
    /// Procedure or function.
    pub kind: RoutineKind,
    /// Return type. Empty for procedures.
    pub returns: String,
}

/// A trigger, as listed in the triggers view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerItem {
    /// Trigger name. Untrusted; escaped before it reaches markup.
    pub name: String,
    /// Table the trigger is defined on.
    pub table: String,
    /// `BEFORE` or `AFTER`.
    pub action_timing: String,
    /// `INSERT`, `UPDATE` or `DELETE`.
    pub event_manipulation: String,
    /// Precomputed `DROP TRIGGER` statement.
    pub drop_statement: String,
}

/// A scheduled event, as listed in the events view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventItem {
    /// Event name. Untrusted; escaped before it reaches markup.
    pub name: String,
    /// `ENABLED`, `DISABLED` or `SLAVESIDE_DISABLED`.
    pub status: String,
    /// `RECURRING` or `ONE TIME`.
    pub kind: String,
}
