//! Error types for kinship-core.
//!
//! The `Display` text of every variant is the line shown to the user.

use std::fmt;

use thiserror::Error;

use crate::types::{PersonName, RelationshipKind};

/// Errors from registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FamilyError {
    /// A name referenced by `connect`, `count` or `father` is not registered.
    #[error("Person not found in the family tree.")]
    PersonNotFound { name: PersonName },

    /// `add relationship` with a kind outside the fixed vocabulary.
    #[error("Invalid relationship: {0}")]
    InvalidRelationship(RelationshipKind),
}

/// A command line whose shape or keywords could not be dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Usage: {0}")]
    Usage(Usage),

    #[error("Unknown entity type: {0}")]
    UnknownEntityType(String),

    #[error("Unknown entity: {0}")]
    UnknownEntity(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

/// Which command's usage line to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Usage {
    Add,
    Connect,
    Count,
    Father,
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Usage::Add => write!(f, "add <person|relationship> <name> <gender>"),
            Usage::Connect => write!(f, "connect <name 1> as <relationship> of <name 2>"),
            Usage::Count => write!(f, "count <sons|daughters|wives> of <name>"),
            Usage::Father => write!(f, "father of <name>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_lines_carry_prefix() {
        assert_eq!(
            ParseError::Usage(Usage::Father).to_string(),
            "Usage: father of <name>"
        );
        assert_eq!(
            ParseError::Usage(Usage::Connect).to_string(),
            "Usage: connect <name 1> as <relationship> of <name 2>"
        );
    }

    #[test]
    fn person_not_found_keeps_the_name() {
        let err = FamilyError::PersonNotFound { name: PersonName::from("Zed") };
        assert_eq!(err.to_string(), "Person not found in the family tree.");
        assert!(matches!(err, FamilyError::PersonNotFound { ref name } if name.0 == "Zed"));
    }
}
