//! # marlin-sql
//!
//! SQL-side helpers for the Marlin console: identifier backquoting,
//! `DROP ... IF EXISTS` statement generation, and extraction of a stored
//! routine's parameter list from its `CREATE` definition.

pub mod error;
pub mod quote;
pub mod signature;

pub use error::SqlError;
pub use quote::{backquote, drop_event_statement, drop_routine_statement, drop_trigger_statement};
pub use signature::{has_input_parameters, parse_parameters, ParamMode, RoutineParam};
