//! Kinship core library: family tree registry, command parser, interpreter.
//!
//! Public API surface:
//! - [`types`]: newtypes, genders, persons
//! - [`error`]: [`FamilyError`], [`ParseError`]
//! - [`registry`]: the in-memory [`FamilyTree`]
//! - [`command`]: line protocol parsing into [`Command`]
//! - [`session`]: the read/evaluate/print loop

pub mod command;
pub mod error;
pub mod registry;
pub mod session;
pub mod types;

pub use command::Command;
pub use error::{FamilyError, ParseError, Usage};
pub use registry::FamilyTree;
pub use session::{ExitReason, Session, SessionSummary};
pub use types::{
    CountedKind, Gender, Person, PersonId, PersonName, RelationshipKind, VALID_RELATIONSHIPS,
};
