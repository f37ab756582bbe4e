//! Clause splitting for raw command text.
//!
//! # Responsibility
//! - Split raw input at a clause marker into the descriptor before the
//!   clause and the descriptor after it.
//!
//! # Invariants
//! - Splitting never mutates or re-tokenizes the fragments; callers decide
//!   what each fragment means for their task kind.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CommandResult<T> = Result<T, CommandError>;

/// The two text fragments produced by splitting raw input at a clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseSplit {
    /// Text between the description offset and the clause marker.
    pub before: String,
    /// Text after the clause marker.
    pub after: String,
}

/// Malformed raw command text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The clause marker does not appear in the input.
    MissingClause(String),
    /// The descriptor after the clause is mandatory but empty.
    EmptyDescriptor(String),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingClause(clause) => write!(f, "expected the `{clause}` clause"),
            Self::EmptyDescriptor(clause) => {
                write!(f, "nothing follows the `{clause}` clause")
            }
        }
    }
}

impl Error for CommandError {}

/// Splits `raw` at the first occurrence of `clause`.
///
/// `description_offset` is where the description begins (the length of the
/// leading command keyword plus its trailing space); everything between it
/// and the clause marker becomes the before-fragment. When
/// `descriptor_required` is set, an empty after-fragment is an error —
/// used by commands whose whole payload trails the keyword.
///
/// # Errors
/// - `MissingClause` when `clause` never occurs in `raw`.
/// - `EmptyDescriptor` when the after-fragment is required but blank.
pub fn split_by_clause(
    raw: &str,
    clause: &str,
    description_offset: usize,
    descriptor_required: bool,
) -> CommandResult<ClauseSplit> {
    let clause_at = raw
        .find(clause)
        .ok_or_else(|| CommandError::MissingClause(clause.to_string()))?;

    let before_span = raw.get(description_offset..clause_at).unwrap_or("");
    let after_span = raw.get(clause_at + clause.len()..).unwrap_or("");

    let split = ClauseSplit {
        before: before_span.trim().to_string(),
        after: after_span.trim().to_string(),
    };

    if descriptor_required && split.after.is_empty() {
        return Err(CommandError::EmptyDescriptor(clause.to_string()));
    }

    Ok(split)
}
