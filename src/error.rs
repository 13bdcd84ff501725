//! The main error enum for the recruitment core lives here, and documents the
//! various conditions that can occur when creating or mutating hire records.
//!
//! None of these are fatal: every error leaves the roster exactly as it was
//! before the call that produced it.

use crate::models::hire::{HireKind, VacancyNumber};
use thiserror::Error;

/// This is our error enum. It contains an entry for any part of the system in
/// which an expectation is not met or a problem occurs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A hire record is already terminated and cannot be terminated again.
    #[error("staff is already terminated")]
    AlreadyTerminated,
    /// An error while using a builder (usually because a required field was
    /// never given).
    #[error("error building object {0}")]
    BuilderFailed(String),
    /// The roster was asked for a position it doesn't have.
    #[error("index {index} is out of range for a roster of {len} hire(s)")]
    IndexOutOfRange {
        index: i64,
        len: usize,
    },
    /// A value was given that doesn't parse into the type its field expects
    /// (a number, a decimal, a dd/mm/yyyy date).
    #[error("invalid value for {field}: {value:?}")]
    InvalidFormat {
        field: String,
        value: String,
    },
    /// One of our input mask patterns failed to compile.
    #[error("invalid input pattern: {0}")]
    InvalidPattern(String),
    /// A required text field was left blank.
    #[error("missing required field: {0}")]
    MissingField(String),
    /// Shifts can only be changed on a part-time hire that has joined and has
    /// not been terminated.
    #[error("cannot change shifts as staff is not appointed or has been terminated")]
    NotEligible,
    /// Salary can only be changed on a full-time hire that has joined.
    #[error("cannot set salary as no staff is appointed yet")]
    NotJoined,
    /// No hire in the roster carries the given vacancy number.
    #[error("staff with vacancy number {0} not found")]
    NotFound(VacancyNumber),
    /// A hire was found, but it's the other kind of hire.
    #[error("expected a {expected} hire but found a {found} hire")]
    WrongVariant {
        expected: HireKind,
        found: HireKind,
    },
}

impl Error {
    /// Shorthand for building an `InvalidFormat` error.
    pub fn invalid_format<F, V>(field: F, value: V) -> Self
        where F: Into<String>,
              V: Into<String>,
    {
        Error::InvalidFormat { field: field.into(), value: value.into() }
    }
}

/// Wraps `std::result::Result` around our `Error` enum
pub type Result<T> = std::result::Result<T, Error>;
