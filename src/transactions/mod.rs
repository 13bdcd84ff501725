//! Transactions are the primary interface for working with the recruitment
//! roster. Each one takes the information it needs (already parsed into real
//! types), applies it to the roster, and hands back what happened: the new
//! hire, the changes applied, or the rendered text asked for.
//!
//! A transaction that fails leaves the roster exactly as it found it. Whoever
//! is calling decides how to tell a person about the outcome (see the
//! [desk](../desk/index.html)).
//!
//! Updates find their hire by vacancy number. Since vacancy numbers aren't
//! unique, this always means the *first* hire with that number, and if that
//! hire is the wrong kind we say so rather than looking further.

use crate::{
    error::{Error, Result},
    models::hire::{Hire, VacancyNumber},
    roster::Roster,
    util,
};

pub mod full_time;
pub mod listing;
pub mod part_time;

/// Make sure none of the given `(field name, value)` pairs are blank.
fn require_filled(fields: &[(&str, &str)]) -> Result<()> {
    for (field, value) in fields {
        if value.trim().is_empty() {
            Err(Error::MissingField((*field).into()))?;
        }
    }
    Ok(())
}

/// Validate the details every new hire needs, regardless of kind.
fn check_details(designation: &str, job_type: &str, staff_name: &str, joining_date: &str, qualification: &str, appointed_by: &str) -> Result<()> {
    require_filled(&[
        ("designation", designation),
        ("job type", job_type),
        ("staff name", staff_name),
        ("joining date", joining_date),
        ("qualification", qualification),
        ("appointed by", appointed_by),
    ])?;
    util::date::parse_joining_date(joining_date)?;
    Ok(())
}

/// Find the first hire with the given vacancy number, or `Error::NotFound`.
fn resolve(roster: &mut Roster, vacancy_number: VacancyNumber) -> Result<&mut Hire> {
    tracing::debug!(%vacancy_number, "resolving hire");
    roster.find_first_by_vacancy_number_mut(vacancy_number)
        .ok_or(Error::NotFound(vacancy_number))
}
