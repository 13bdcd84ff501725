//! Welcome to the staff hire core. This crate holds the records, rules, and
//! operations behind a small recruitment desk: hiring full-time and part-time
//! staff, adjusting salaries and shifts, terminating part-time staff, and
//! listing everyone who's been hired during a session.
//!
//! The crate is organized into a few pieces:
//!
//! - [models](models/index.html) hold the hire record itself, along with the
//!   lifecycle rules that gate changing it (salary needs a joined hire, shifts
//!   need a joined and non-terminated one, termination happens once).
//! - The [roster](roster/index.html) is the ordered, append-only list of hires.
//! - [Transactions](transactions/index.html) are the operations you run
//!   against the roster. They take typed values and return typed outcomes.
//! - The [form](form/index.html) turns raw typed-in text into those values.
//! - The [desk](desk/index.html) wires the form to the transactions and words
//!   the outcomes for a person.
//!
//! Nothing here is persisted, and nothing here is shared between threads. The
//! crate logs through `tracing`; installing a subscriber is up to the caller.

#[macro_use]
mod util;
pub mod error;
pub mod models;
pub mod roster;
pub mod transactions;
pub mod form;
pub mod desk;

pub use models::{
    change::Change,
    hire::{describe, FullTimeHire, Hire, HireClass, HireKind, PartTimeHire, VacancyNumber},
};
