//! Error types for privilege handling.

use thiserror::Error;

/// Errors raised while interpreting grant-table rows.
#[derive(Debug, Clone, Error)]
pub enum PrivilegeError {
    /// A `PRIVILEGE_TYPE` value this crate does not track.
    #[error("unknown privilege '{0}'")]
    UnknownPrivilege(String),
}
