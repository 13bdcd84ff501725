//! The roster is the ordered list of every hire recorded during a session.
//!
//! Hires are only ever appended. Nothing is removed or reordered, so a hire's
//! index never changes once it's in. Vacancy numbers aren't checked for
//! duplicates; looking one up just returns the earliest hire carrying it.

use crate::{
    error::{Error, Result},
    models::hire::{Hire, VacancyNumber},
};
use getset::Getters;
#[cfg(feature = "with_serde")]
use serde_derive::{Serialize, Deserialize};
use std::{convert::TryFrom, fmt};

/// The status label a hire gets in a listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
pub enum Status {
    FullTime,
    PartTime,
    /// A part-time hire that has been terminated
    Terminated,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::FullTime => "Full Time",
            Status::PartTime => "Part Time",
            Status::Terminated => "Terminated",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One line of the roster listing.
#[derive(Clone, Debug, PartialEq, Getters)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[getset(get = "pub")]
pub struct SummaryRow {
    /// Position in the roster (this is what gets passed to display)
    index: usize,
    vacancy_number: VacancyNumber,
    staff_name: String,
    designation: String,
    job_type: String,
    status: Status,
}

impl SummaryRow {
    fn new(index: usize, hire: &Hire) -> Self {
        Self {
            index,
            vacancy_number: *hire.vacancy_number(),
            staff_name: hire.staff_name().clone(),
            designation: hire.designation().clone(),
            job_type: hire.job_type().clone(),
            status: hire.status(),
        }
    }
}

/// An append-only, insertion-ordered list of hires.
// Indices past i64::MAX are reported as i64::MAX.
fn out_of_range(index: usize, len: usize) -> Error {
    Error::IndexOutOfRange { index: i64::try_from(index).unwrap_or(i64::MAX), len }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
pub struct Roster {
    hires: Vec<Hire>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a hire to the end of the roster. Always succeeds.
    pub fn append(&mut self, hire: Hire) -> &Hire {
        tracing::debug!(vacancy_number = %hire.vacancy_number(), index = self.hires.len(), "appending hire");
        self.hires.push(hire);
        &self.hires[self.hires.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.hires.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hires.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hire> {
        self.hires.iter()
    }

    /// Grab the hire at `index`, or `Error::IndexOutOfRange`.
    pub fn get(&self, index: usize) -> Result<&Hire> {
        let len = self.hires.len();
        self.hires.get(index)
            .ok_or(out_of_range(index, len))
    }

    /// Grab the hire at `index` mutably, or `Error::IndexOutOfRange`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Hire> {
        let len = self.hires.len();
        self.hires.get_mut(index)
            .ok_or(out_of_range(index, len))
    }

    /// Find the earliest hire with the given vacancy number. Doesn't care what
    /// kind of hire it is.
    pub fn find_first_by_vacancy_number(&self, vacancy_number: VacancyNumber) -> Option<&Hire> {
        self.hires.iter()
            .find(|hire| hire.vacancy_number() == &vacancy_number)
    }

    /// Find the earliest hire with the given vacancy number, mutably.
    pub fn find_first_by_vacancy_number_mut(&mut self, vacancy_number: VacancyNumber) -> Option<&mut Hire> {
        self.hires.iter_mut()
            .find(|hire| hire.vacancy_number() == &vacancy_number)
    }

    /// List every hire, in the order they were added.
    pub fn summary(&self) -> Vec<SummaryRow> {
        self.hires.iter()
            .enumerate()
            .map(|(index, hire)| SummaryRow::new(index, hire))
            .collect::<Vec<_>>()
    }
}
