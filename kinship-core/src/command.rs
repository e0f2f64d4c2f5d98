//! Line protocol parser.
//!
//! ```text
//! add person <name> <gender>
//! add relationship <kind> <ignored>
//! connect <name 1> as <relationship> of <name 2>
//! count sons|daughters|wives of <name>
//! father of <name>
//! ```
//!
//! Argument counts are checked before keywords, so `add foo` reports the
//! usage line rather than `Unknown entity type`.

use crate::error::{ParseError, Usage};
use crate::types::{CountedKind, PersonName, RelationshipKind};

/// A fully parsed command, ready to run against a [`crate::FamilyTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddPerson { name: PersonName, gender: String },
    AddRelationship { kind: RelationshipKind },
    Connect {
        from: PersonName,
        kind: RelationshipKind,
        to: PersonName,
    },
    Count { kind: CountedKind, name: PersonName },
    FatherOf { name: PersonName },
}

impl Command {
    /// Parse a whitespace-separated line. `Ok(None)` for a blank line.
    pub fn parse_line(line: &str) -> Result<Option<Self>, ParseError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        Self::parse(&tokens)
    }

    pub fn parse(tokens: &[&str]) -> Result<Option<Self>, ParseError> {
        let Some((&command, _)) = tokens.split_first() else {
            return Ok(None);
        };
        let parsed = match command {
            "add" => parse_add(tokens)?,
            "connect" => parse_connect(tokens)?,
            "count" => parse_count(tokens)?,
            "father" => {
                if tokens.len() != 3 {
                    return Err(ParseError::Usage(Usage::Father));
                }
                Command::FatherOf { name: PersonName::from(tokens[2]) }
            }
            other => return Err(ParseError::UnknownCommand(other.to_owned())),
        };
        Ok(Some(parsed))
    }
}

fn parse_add(tokens: &[&str]) -> Result<Command, ParseError> {
    if tokens.len() < 4 {
        return Err(ParseError::Usage(Usage::Add));
    }
    match tokens[1] {
        "person" => Ok(Command::AddPerson {
            name: PersonName::from(tokens[2]),
            gender: tokens[3].to_owned(),
        }),
        "relationship" => Ok(Command::AddRelationship {
            kind: RelationshipKind::from(tokens[2]),
        }),
        other => Err(ParseError::UnknownEntityType(other.to_owned())),
    }
}

/// Accepts `connect A as REL of B` and the positional `connect A REL as of B`.
fn parse_connect(tokens: &[&str]) -> Result<Command, ParseError> {
    if tokens.len() < 6 || tokens[4] != "of" {
        return Err(ParseError::Usage(Usage::Connect));
    }
    let kind = if tokens[2] == "as" {
        tokens[3]
    } else if tokens[3] == "as" {
        tokens[2]
    } else {
        return Err(ParseError::Usage(Usage::Connect));
    };
    Ok(Command::Connect {
        from: PersonName::from(tokens[1]),
        kind: RelationshipKind::from(kind),
        to: PersonName::from(tokens[5]),
    })
}

/// The `of` in position 2 is not checked.
fn parse_count(tokens: &[&str]) -> Result<Command, ParseError> {
    if tokens.len() < 4 {
        return Err(ParseError::Usage(Usage::Count));
    }
    let kind = CountedKind::from_plural(tokens[1])
        .ok_or_else(|| ParseError::UnknownEntity(tokens[1].to_owned()))?;
    Ok(Command::Count { kind, name: PersonName::from(tokens[3]) })
}
