//! A set of utility functions used when validating and building hire records.

pub mod date;
#[macro_use]
pub mod number;
