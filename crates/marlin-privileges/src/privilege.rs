//! The privileges the console cares about.

use crate::error::PrivilegeError;
use std::fmt;
use std::str::FromStr;

/// A MySQL privilege relevant to stored-program administration.
///
/// Only the privileges the dashboard actually gates on are tracked;
/// anything else in the grant tables is ignored at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Privilege {
    /// `CREATE ROUTINE` - create (and, by drop-and-recreate, edit) stored routines.
    CreateRoutine,
    /// `ALTER ROUTINE` - alter or drop stored routines.
    AlterRoutine,
    /// `EXECUTE` - invoke stored routines.
    Execute,
    /// `TRIGGER` - create and drop triggers.
    Trigger,
    /// `EVENT` - manage scheduled events.
    Event,
    /// `SUPER` - administrative superuser.
    Super,
}

impl Privilege {
    /// The privilege name as it appears in `information_schema` and in
    /// `GRANT` statements.
    pub fn as_str(&self) -> &'static str {
        match self {
            Privilege::CreateRoutine => "CREATE ROUTINE",
            Privilege::AlterRoutine => "ALTER ROUTINE",
            Privilege::Execute => "EXECUTE",
            Privilege::Trigger => "TRIGGER",
            Privilege::Event => "EVENT",
            Privilege::Super => "SUPER",
        }
    }
}

impl fmt::Display for Privilege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Privilege {
    type Err = PrivilegeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CREATE ROUTINE" => Ok(Privilege::CreateRoutine),
            "ALTER ROUTINE" => Ok(Privilege::AlterRoutine),
            "EXECUTE" => Ok(Privilege::Execute),
            "TRIGGER" => Ok(Privilege::Trigger),
            "EVENT" => Ok(Privilege::Event),
            "SUPER" => Ok(Privilege::Super),
            other => Err(PrivilegeError::UnknownPrivilege(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tracked_privileges() {
        assert_eq!(
            "CREATE ROUTINE".parse::<Privilege>().unwrap(),
            Privilege::CreateRoutine
        );
        assert_eq!("execute".parse::<Privilege>().unwrap(), Privilege::Execute);
    }

    #[test]
    fn rejects_untracked_privileges() {
        assert!("SELECT".parse::<Privilege>().is_err());
    }

    #[test]
    fn display_matches_grant_spelling() {
        assert_eq!(Privilege::AlterRoutine.to_string(), "ALTER ROUTINE");
    }
}
