//! In-memory family tree registry.
//!
//! # Storage layout
//!
//! ```text
//! persons: Vec<Person>               (append-only arena, indexed by PersonId)
//! index:   HashMap<PersonName, PersonId>
//! ```
//!
//! Re-adding a name appends a fresh [`Person`] and rebinds the name. The old
//! record stays in the arena, so edges captured before the overwrite keep
//! resolving to that detached snapshot rather than to the new person.

use std::collections::HashMap;

use tracing::debug;

use crate::error::FamilyError;
use crate::types::{CountedKind, Gender, Person, PersonId, PersonName, RelationshipKind};

/// Owns every [`Person`] created during a session.
#[derive(Debug, Default)]
pub struct FamilyTree {
    persons: Vec<Person>,
    index: HashMap<PersonName, PersonId>,
}

impl FamilyTree {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // 1. Lookup
    // -----------------------------------------------------------------------

    /// The person currently registered under `name`.
    pub fn get(&self, name: &PersonName) -> Option<&Person> {
        self.index.get(name).map(|id| &self.persons[id.0])
    }

    /// Resolve a handle, including handles to detached (overwritten) persons.
    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.persons.get(id.0)
    }

    /// Number of names currently registered.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    fn require(&self, name: &PersonName) -> Result<PersonId, FamilyError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| FamilyError::PersonNotFound { name: name.clone() })
    }

    // -----------------------------------------------------------------------
    // 2. Mutation
    // -----------------------------------------------------------------------

    /// Register `name` with an empty relationship map, replacing any previous
    /// person of the same name.
    pub fn add_person(&mut self, name: PersonName, gender: Gender) -> PersonId {
        let id = PersonId(self.persons.len());
        self.persons.push(Person::new(name.clone(), gender));
        if let Some(previous) = self.index.insert(name, id) {
            debug!(previous = previous.0, current = id.0, "person overwritten");
        }
        id
    }

    /// Append `name2` to `name1`'s bucket for `kind`. One-way edge.
    ///
    /// Both names must be registered; nothing is changed otherwise.
    pub fn connect(
        &mut self,
        name1: &PersonName,
        kind: RelationshipKind,
        name2: &PersonName,
    ) -> Result<(), FamilyError> {
        let from = self.require(name1)?;
        let to = self.require(name2)?;
        debug!(from = %name1, to = %name2, kind = %kind, "connect");
        self.persons[from.0]
            .relationships
            .entry(kind)
            .or_default()
            .push(to);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // 3. Queries
    // -----------------------------------------------------------------------

    /// Check `kind` against the fixed vocabulary. Registers nothing.
    pub fn validate_relationship(kind: &RelationshipKind) -> Result<(), FamilyError> {
        if kind.is_valid() {
            Ok(())
        } else {
            Err(FamilyError::InvalidRelationship(kind.clone()))
        }
    }

    /// Length of `name`'s bucket for `kind`, duplicates included.
    ///
    /// `Ok(None)` means the bucket was never created.
    pub fn count(
        &self,
        kind: CountedKind,
        name: &PersonName,
    ) -> Result<Option<usize>, FamilyError> {
        let person = &self.persons[self.require(name)?.0];
        Ok(person.bucket(&kind.relationship()).map(|bucket| bucket.len()))
    }

    /// The first person connected as `father` of `name`.
    pub fn father_of(&self, name: &PersonName) -> Result<Option<&Person>, FamilyError> {
        let person = &self.persons[self.require(name)?.0];
        Ok(person
            .bucket(&RelationshipKind::father())
            .and_then(|fathers| fathers.first())
            .and_then(|id| self.person(*id)))
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
