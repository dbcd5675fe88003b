//! Error types used in the library.
//!
//! - Parse and format errors are fatal to building a formula, and so a solve never begins.
//! - Config errors are fatal to building a context.
//! - Consistency errors indicate an issue with the library, rather than with any input.
//!
//! Note, exhausting the flip and restart budgets of a solve without finding a satisfying valuation is not an error.
//! Neither is requesting an unknown heuristic, which resolves to the [default heuristic](crate::config::Heuristic::Custom).
//!
//! Names of the error enums for the most part overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::{
    db::ClauseKey,
    structures::{atom::Atom, literal::CLiteral},
};

/// The top-level error kind, wrapping specific errors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Config(ConfigError),
    Consistency(ConsistencyError),
    Format(FormatError),
    Parse(ParseError),
}

/// Errors in the configuration of a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// The value of the named option lies outside the bounds of the option.
    OutOfBounds(&'static str),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Noted inconsistencies between incrementally maintained information and the same information derived from scratch.
///
/// These are unexpected, and any instance is an issue with the library.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConsistencyError {
    /// A valuation reported to satisfy the formula failed independent verification.
    CheckerFailure {
        /// A count of the clauses not satisfied by the valuation.
        violated: usize,
    },

    /// The unsatisfied clauses, make counts, or break counts of a tracker differ from a recomputation.
    TrackerDrift,
}

impl From<ConsistencyError> for ErrorKind {
    fn from(e: ConsistencyError) -> Self {
        ErrorKind::Consistency(e)
    }
}

/// Errors in the content of a formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormatError {
    /// The count of clauses declared in the problem line differs from the count of clauses read.
    ClauseCount { expected: usize, found: usize },

    /// A clause contains the literal `0`.
    ZeroAtom,

    /// A clause contains a literal whose atom is larger than the declared count of atoms.
    AtomOutOfRange { literal: CLiteral, atom_count: usize },

    /// More atoms were declared than may be represented.
    AtomsExhausted(Atom),

    /// More clauses were given than may be keyed.
    ClausesExhausted(ClauseKey),

    /// Storage for the declared atoms could not be allocated.
    Oversized { atom_count: usize },
}

impl From<FormatError> for ErrorKind {
    fn from(e: FormatError) -> Self {
        ErrorKind::Format(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// Clause data was found before any problem specification, at the given line.
    MissingProblem(usize),

    /// A second problem specification, at the given line.
    MisplacedProblem(usize),

    /// Something which is not an integer was found where a literal was expected, at the given line.
    Literal(usize),

    /// The given line could not be read.
    Line(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(ConfigError::OutOfBounds(name)) => {
                write!(f, "The value of '{name}' is out of bounds")
            }

            Self::Consistency(ConsistencyError::CheckerFailure { violated }) => {
                write!(f, "Consistency violation: {violated} clauses unsatisfied by a reported solution")
            }

            Self::Consistency(ConsistencyError::TrackerDrift) => {
                write!(f, "Consistency violation: incremental counts differ from a recomputation")
            }

            Self::Format(FormatError::ClauseCount { expected, found }) => {
                write!(f, "Expected {expected} clauses, found {found}")
            }

            Self::Format(FormatError::ZeroAtom) => write!(f, "A clause contains the atom 0"),

            Self::Format(FormatError::AtomOutOfRange { literal, atom_count }) => {
                write!(f, "The literal {literal} is outside the {atom_count} declared atoms")
            }

            Self::Format(FormatError::AtomsExhausted(max)) => {
                write!(f, "At most {max} atoms are supported")
            }

            Self::Format(FormatError::ClausesExhausted(max)) => {
                write!(f, "At most {max} clauses are supported")
            }

            Self::Format(FormatError::Oversized { atom_count }) => {
                write!(f, "Unable to allocate storage for {atom_count} atoms")
            }

            Self::Parse(ParseError::ProblemSpecification) => {
                write!(f, "Malformed problem specification")
            }

            Self::Parse(ParseError::MissingProblem(line)) => {
                write!(f, "Clause data before a problem specification, line {line}")
            }

            Self::Parse(ParseError::MisplacedProblem(line)) => {
                write!(f, "Repeated problem specification, line {line}")
            }

            Self::Parse(ParseError::Literal(line)) => write!(f, "Invalid literal, line {line}"),

            Self::Parse(ParseError::Line(line)) => write!(f, "Failed to read line {line}"),
        }
    }
}
