//! Grant-table rows and scope matching.
//!
//! MySQL records schema-level grants with `LIKE`-style patterns: `%`
//! matches any run of characters, `_` a single character, and a
//! backslash escapes either. A grant on ``db\_test`` covers exactly
//! `db_test`; a grant on `db%` covers every schema with that prefix.

use crate::privilege::Privilege;

/// Where a grant applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrantScope {
    /// Server-wide grant (`information_schema.USER_PRIVILEGES`).
    Global,
    /// Schema-level grant; the schema name may contain wildcards.
    Schema { pattern: String },
    /// Table-level grant within a schema pattern.
    Table { pattern: String, table: String },
}

/// One row of the user's effective grants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantEntry {
    pub privilege: Privilege,
    pub scope: GrantScope,
}

impl GrantEntry {
    pub fn global(privilege: Privilege) -> Self {
        Self {
            privilege,
            scope: GrantScope::Global,
        }
    }

    pub fn schema(privilege: Privilege, pattern: impl Into<String>) -> Self {
        Self {
            privilege,
            scope: GrantScope::Schema {
                pattern: pattern.into(),
            },
        }
    }

    pub fn table(
        privilege: Privilege,
        pattern: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            privilege,
            scope: GrantScope::Table {
                pattern: pattern.into(),
                table: table.into(),
            },
        }
    }

    /// Whether this grant covers `privilege` on `db` (and `table`, when
    /// the caller asks about a table scope).
    pub fn covers(&self, privilege: Privilege, db: &str, table: Option<&str>) -> bool {
        if self.privilege != privilege {
            return false;
        }
        match &self.scope {
            GrantScope::Global => true,
            GrantScope::Schema { pattern } => schema_pattern_matches(pattern, db),
            GrantScope::Table {
                pattern,
                table: granted_table,
            } => {
                schema_pattern_matches(pattern, db)
                    && table.is_some_and(|t| t == granted_table)
            }
        }
    }
}

/// Match a schema name against a grant pattern with MySQL `LIKE`
/// semantics (`%`, `_`, backslash escapes).
pub fn schema_pattern_matches(pattern: &str, schema: &str) -> bool {
    let p: Vec<char> = pattern.chars().collect();
    let s: Vec<char> = schema.chars().collect();
    like_match(&p, &s)
}

fn like_match(p: &[char], s: &[char]) -> bool {
    match p.first() {
        None => s.is_empty(),
        Some('%') => (0..=s.len()).any(|i| like_match(&p[1..], &s[i..])),
        Some('_') => !s.is_empty() && like_match(&p[1..], &s[1..]),
        Some('\\') if p.len() > 1 => {
            !s.is_empty() && s[0] == p[1] && like_match(&p[2..], &s[1..])
        }
        Some(&c) => !s.is_empty() && s[0] == c && like_match(&p[1..], &s[1..]),
    }
}
