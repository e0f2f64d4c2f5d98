//! Domain types for the family tree.
//!
//! Names and relationship kinds are newtypes over `String`; persons are
//! addressed by [`PersonId`] handles into the registry's arena.

use std::collections::HashMap;
use std::fmt;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed person name; the unique key in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(pub String);

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for PersonName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PersonName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Relationship kinds accepted by `add relationship`.
pub const VALID_RELATIONSHIPS: [&str; 5] = ["father", "son", "daughter", "wife", "husband"];

/// A relationship label used as a bucket key, e.g. `"father"` or `"son"`.
///
/// Any string is a usable key; only [`RelationshipKind::is_valid`] consults
/// [`VALID_RELATIONSHIPS`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelationshipKind(pub String);

impl RelationshipKind {
    /// Case-sensitive membership in [`VALID_RELATIONSHIPS`].
    pub fn is_valid(&self) -> bool {
        VALID_RELATIONSHIPS.contains(&self.0.as_str())
    }

    pub fn father() -> Self {
        Self::from("father")
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for RelationshipKind {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RelationshipKind {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Handle to a person stored in a [`crate::FamilyTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonId(pub(crate) usize);

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Gender recorded for a person.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unknown,
    /// A raw token with none of the recognised letters, kept verbatim.
    Other(String),
}

impl Gender {
    /// Normalize a free-text gender token.
    ///
    /// Substring checks run in priority order `F`, `M`, `f`, `m`; an empty
    /// token is `Unknown`, anything else is kept as [`Gender::Other`].
    pub fn normalize(raw: &str) -> Self {
        if raw.is_empty() {
            Gender::Unknown
        } else if raw.contains('F') {
            Gender::Female
        } else if raw.contains('M') {
            Gender::Male
        } else if raw.contains('f') {
            Gender::Female
        } else if raw.contains('m') {
            Gender::Male
        } else {
            Gender::Other(raw.to_owned())
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
            Gender::Unknown => write!(f, "unknown"),
            Gender::Other(raw) => write!(f, "{raw}"),
        }
    }
}

/// The plural relatives `count` can report on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountedKind {
    Sons,
    Daughters,
    Wives,
}

impl CountedKind {
    /// Parse the command word (`sons`, `daughters`, `wives`).
    pub fn from_plural(word: &str) -> Option<Self> {
        match word {
            "sons" => Some(CountedKind::Sons),
            "daughters" => Some(CountedKind::Daughters),
            "wives" => Some(CountedKind::Wives),
            _ => None,
        }
    }

    /// The bucket key counted for this kind.
    pub fn relationship(self) -> RelationshipKind {
        match self {
            CountedKind::Sons => RelationshipKind::from("son"),
            CountedKind::Daughters => RelationshipKind::from("daughter"),
            CountedKind::Wives => RelationshipKind::from("wife"),
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            CountedKind::Sons => "sons",
            CountedKind::Daughters => "daughters",
            CountedKind::Wives => "wives",
        }
    }
}

impl fmt::Display for CountedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plural())
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// A single member of the family tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: PersonName,
    pub gender: Gender,
    /// Directed edges: kind -> relatives in insertion order, duplicates kept.
    pub relationships: HashMap<RelationshipKind, Vec<PersonId>>,
}

impl Person {
    pub fn new(name: PersonName, gender: Gender) -> Self {
        Self {
            name,
            gender,
            relationships: HashMap::new(),
        }
    }

    /// The bucket for `kind`, or `None` if nothing was ever connected under it.
    pub fn bucket(&self, kind: &RelationshipKind) -> Option<&[PersonId]> {
        self.relationships.get(kind).map(Vec::as_slice)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
