//! Read-only views over the roster: the rendered description of a single
//! hire, and the summary table of all of them.

use crate::{
    error::{Error, Result},
    models::hire,
    roster::{Roster, SummaryRow},
};
use std::convert::TryFrom;

/// Render the hire at `index` (0-based). Negative or past-the-end indices are
/// an `Error::IndexOutOfRange`.
pub fn display(roster: &Roster, index: i64) -> Result<String> {
    let out_of_range = Error::IndexOutOfRange { index, len: roster.len() };
    let position = usize::try_from(index).map_err(|_| out_of_range.clone())?;
    let found = roster.get(position).map_err(|_| out_of_range)?;
    Ok(hire::describe(found))
}

/// Summarize every hire in the roster, in insertion order.
pub fn summary(roster: &Roster) -> Vec<SummaryRow> {
    roster.summary()
}
