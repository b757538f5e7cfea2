//! Error types used in the library.
//!
//! - Parse errors concern the shape of structured input, and are only detected when some required part of the input is absent or malformed.
//! - Logic errors concern the meaning of a scenario, e.g. a rule base which both fixes and releases a fluent in one firing, or a scenario with no quasi-model.
//! - Limit errors concern the bounds placed on a run by a [Config](crate::config::Config).
//!
//! No error is recoverable inside a run.
//! Any error aborts the run (and so any batch of queries answered by the run) as the computation is deterministic given its inputs.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::{names::Fluent, timepoint::Time};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Parse(ParseError),
    Logic(LogicError),
    Limit(LimitError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "Parsing error: {e}"),
            Self::Logic(e) => write!(f, "Logic error: {e}"),
            Self::Limit(e) => write!(f, "Limit error: {e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors in structured input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Some required field was absent.
    MissingField(&'static str),

    /// An operator keyword was used as the name of a fluent.
    ReservedName(String),

    /// A formula tree which could not be read as a formula.
    MalformedFormula(String),

    /// A statement type other than `causes` or `releases`.
    UnknownStatementType(String),

    /// A query type other than `fluent`, `action`, or `agent`.
    UnknownQueryType(String),

    /// A query mode other than necessary or possible.
    UnknownMode(String),

    /// A name used but not declared, e.g. an agent absent from the list of agents.
    Undeclared(&'static str, String),

    /// The input could not be read as a document at all.
    Json(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing field '{field}'"),
            Self::ReservedName(name) => write!(f, "'{name}' is reserved and cannot name a fluent"),
            Self::MalformedFormula(detail) => write!(f, "malformed formula ({detail})"),
            Self::UnknownStatementType(kind) => write!(f, "unknown statement type '{kind}'"),
            Self::UnknownQueryType(kind) => write!(f, "unknown query type '{kind}'"),
            Self::UnknownMode(mode) => write!(f, "unknown query mode '{mode}'"),
            Self::Undeclared(kind, name) => write!(f, "{kind} '{name}' was not declared"),
            Self::Json(detail) => write!(f, "unreadable document ({detail})"),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// A fluent was looked up in some valuation which does not define the fluent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupError {
    pub fluent: Fluent,
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fluent '{}' was not found in the observation", self.fluent)
    }
}

impl From<LookupError> for LogicError {
    fn from(e: LookupError) -> Self {
        LogicError::Lookup(e)
    }
}

impl From<LookupError> for ErrorKind {
    fn from(e: LookupError) -> Self {
        ErrorKind::Logic(LogicError::Lookup(e))
    }
}

/// Semantic violations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogicError {
    /// A formula referenced a fluent absent from the valuation it was evaluated on.
    Lookup(LookupError),

    /// Two timepoints of a scenario share a time.
    DuplicateTime(Time),

    /// Some effect and some release statement determine the same fluent in one firing.
    EffectReleaseConflict(Fluent),

    /// The effects triggered in one firing have no model.
    ContradictoryEffects,

    /// An assignment to a fluent which is not part of the observation.
    UndefinedFluent(Fluent),

    /// A fluent assigned more than once in one merge.
    DuplicateAssignment(Fluent),

    /// No quasi-model survived the constraint at the given time.
    Unrealizable(Time),

    /// An event fired at a time with no following time to record its effects.
    TimeOverflow(Time),
}

impl std::fmt::Display for LogicError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lookup(e) => write!(f, "{e}"),
            Self::DuplicateTime(time) => {
                write!(f, "only one definition for timepoint {time} can exist")
            }
            Self::EffectReleaseConflict(fluent) => write!(
                f,
                "effect and release statements cannot jointly determine '{fluent}' in one firing"
            ),
            Self::ContradictoryEffects => write!(f, "the effects of a firing contradict each other"),
            Self::UndefinedFluent(fluent) => {
                write!(f, "not all fluents were defined ('{fluent}' is missing)")
            }
            Self::DuplicateAssignment(fluent) => {
                write!(f, "duplicate assignment to '{fluent}' in a single update")
            }
            Self::Unrealizable(time) => {
                write!(f, "scenario is not realizable (no model survives time {time})")
            }
            Self::TimeOverflow(time) => write!(f, "no time follows the event at {time}"),
        }
    }
}

impl From<LogicError> for ErrorKind {
    fn from(e: LogicError) -> Self {
        ErrorKind::Logic(e)
    }
}

/// Bounds on a run were exceeded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LimitError {
    /// A formula with more distinct atoms than may be enumerated.
    Atoms { count: usize, limit: usize },

    /// More live quasi-models than permitted.
    Models { count: usize, limit: usize },

    /// The time limit of a run elapsed.
    TimeLimit,
}

impl std::fmt::Display for LimitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Atoms { count, limit } => {
                write!(f, "{count} distinct atoms exceeds the atom limit of {limit}")
            }
            Self::Models { count, limit } => {
                write!(f, "{count} quasi-models exceeds the model limit of {limit}")
            }
            Self::TimeLimit => write!(f, "time limit reached"),
        }
    }
}

impl From<LimitError> for ErrorKind {
    fn from(e: LimitError) -> Self {
        ErrorKind::Limit(e)
    }
}

/// Errors when revising a configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A value outside the bounds of the named option.
    OutOfRange(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange(name) => write!(f, "value out of range for {name}"),
        }
    }
}
