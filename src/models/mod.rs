//! Models are the records the recruitment desk keeps track of. There's really
//! only one of them (the hire) but it comes in two flavors, full-time and
//! part-time, each with its own lifecycle rules.
//!
//! Models are plain data plus the rules that gate changing them. Collecting
//! and validating input happens in the [transactions](../transactions/index.html)
//! and the [form](../form/index.html).

#[macro_use]
mod lib;

pub mod change;
pub mod hire;
