//! # marlin-privileges
//!
//! Privilege checks for the Marlin console. The dashboard asks one
//! question before rendering an action link: does the current user hold a
//! given privilege on a database (and optionally a table)? This crate
//! answers it from the user's grant-table rows, honoring MySQL's
//! schema-name wildcards, and exposes the answer behind the
//! [`PrivilegeChecker`] seam so the renderer can run against fakes.

pub mod checker;
pub mod error;
pub mod grants;
pub mod privilege;

pub use checker::{GrantChecker, PrivilegeChecker};
pub use error::PrivilegeError;
pub use grants::{GrantEntry, GrantScope};
pub use privilege::Privilege;
