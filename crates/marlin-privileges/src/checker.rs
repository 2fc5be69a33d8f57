//! The privilege-check seam and its grant-table implementation.

use crate::grants::GrantEntry;
use crate::privilege::Privilege;

/// Answers privilege questions for the current authenticated user.
///
/// The dashboard holds this as a trait object so list rendering can be
/// tested with fakes; the production implementation is [`GrantChecker`].
pub trait PrivilegeChecker: Send + Sync {
    /// The authenticated user, in `user@host` form.
    fn current_user(&self) -> &str;

    /// Whether the user is a superuser. Superusers pass every check.
    fn is_superuser(&self) -> bool;

    /// Whether the user holds `privilege` on `db`, narrowed to `table`
    /// when given. A schema-level grant satisfies a table-scoped
    /// question; a table-level grant never satisfies a schema-scoped one.
    fn has_privilege(&self, privilege: Privilege, db: &str, table: Option<&str>) -> bool;
}

/// Privilege checks over the user's loaded grant rows.
#[derive(Debug, Clone)]
pub struct GrantChecker {
    current_user: String,
    superuser: bool,
    grants: Vec<GrantEntry>,
}

impl GrantChecker {
    pub fn new(current_user: impl Into<String>, superuser: bool, grants: Vec<GrantEntry>) -> Self {
        Self {
            current_user: current_user.into(),
            superuser,
            grants,
        }
    }

    /// Number of loaded grant rows.
    pub fn grant_count(&self) -> usize {
        self.grants.len()
    }
}

impl PrivilegeChecker for GrantChecker {
    fn current_user(&self) -> &str {
        &self.current_user
    }

    fn is_superuser(&self) -> bool {
        self.superuser
    }

    fn has_privilege(&self, privilege: Privilege, db: &str, table: Option<&str>) -> bool {
        if self.superuser {
            return true;
        }
        let granted = self
            .grants
            .iter()
            .any(|grant| grant.covers(privilege, db, table));
        tracing::debug!(
            user = %self.current_user,
            privilege = %privilege,
            db,
            table = table.unwrap_or("-"),
            granted,
            "privilege check"
        );
        granted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grants::GrantEntry;

    fn checker(grants: Vec<GrantEntry>) -> GrantChecker {
        GrantChecker::new("ana@localhost", false, grants)
    }

    #[test]
    fn superuser_passes_everything() {
        let checker = GrantChecker::new("root@localhost", true, vec![]);
        assert!(checker.has_privilege(Privilege::Event, "any", None));
        assert!(checker.has_privilege(Privilege::Trigger, "any", Some("t")));
    }

    #[test]
    fn global_grant_covers_all_schemas() {
        let checker = checker(vec![GrantEntry::global(Privilege::Execute)]);
        assert!(checker.has_privilege(Privilege::Execute, "sales", None));
        assert!(checker.has_privilege(Privilege::Execute, "hr", Some("emp")));
        assert!(!checker.has_privilege(Privilege::Event, "sales", None));
    }

    #[test]
    fn schema_grant_is_limited_to_matching_schemas() {
        let checker = checker(vec![GrantEntry::schema(Privilege::CreateRoutine, "sales%")]);
        assert!(checker.has_privilege(Privilege::CreateRoutine, "sales", None));
        assert!(checker.has_privilege(Privilege::CreateRoutine, "sales_eu", None));
        assert!(!checker.has_privilege(Privilege::CreateRoutine, "hr", None));
    }

    #[test]
    fn table_grant_does_not_satisfy_schema_scope() {
        let checker = checker(vec![GrantEntry::table(Privilege::Trigger, "shop", "orders")]);
        assert!(checker.has_privilege(Privilege::Trigger, "shop", Some("orders")));
        assert!(!checker.has_privilege(Privilege::Trigger, "shop", None));
    }

    #[test]
    fn no_grants_means_no_privileges() {
        let checker = checker(vec![]);
        assert!(!checker.has_privilege(Privilege::Execute, "sales", None));
        assert_eq!(checker.current_user(), "ana@localhost");
        assert!(!checker.is_superuser());
    }
}
