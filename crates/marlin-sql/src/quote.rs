//! Identifier quoting and drop-statement generation.

use marlin_core::RoutineKind;

/// Backquote a MySQL identifier, doubling any embedded backquote.
pub fn backquote(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// `DROP PROCEDURE|FUNCTION IF EXISTS` for a routine.
pub fn drop_routine_statement(kind: RoutineKind, name: &str) -> String {
    format!("DROP {} IF EXISTS {}", kind.as_str(), backquote(name))
}

/// `DROP TRIGGER IF EXISTS` for a trigger.
pub fn drop_trigger_statement(name: &str) -> String {
    format!("DROP TRIGGER IF EXISTS {}", backquote(name))
}

/// `DROP EVENT IF EXISTS` for a scheduled event.
pub fn drop_event_statement(name: &str) -> String {
    format!("DROP EVENT IF EXISTS {}", backquote(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn backquote_wraps_and_doubles() {
        assert_eq!(backquote("orders"), "`orders`");
        assert_eq!(backquote("odd`name"), "`odd``name`");
    }

    #[test]
    fn drop_statement_for_event() {
        assert_eq!(drop_event_statement("e1"), "DROP EVENT IF EXISTS `e1`");
    }

    #[test]
    fn drop_statement_for_routine_uses_kind() {
        assert_eq!(
            drop_routine_statement(RoutineKind::Procedure, "p1"),
            "DROP PROCEDURE IF EXISTS `p1`"
        );
        assert_eq!(
            drop_routine_statement(RoutineKind::Function, "f1"),
            "DROP FUNCTION IF EXISTS `f1`"
        );
    }

    #[test]
    fn drop_statement_for_trigger() {
        assert_eq!(
            drop_trigger_statement("audit_ins"),
            "DROP TRIGGER IF EXISTS `audit_ins`"
        );
    }
}
