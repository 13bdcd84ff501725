//! Changes are what the mutators on a hire record hand back. Instead of
//! shouting into a console, every successful mutation returns the field it
//! touched along with the value it now holds, and the caller (a desk, a test,
//! a log) decides what to do with it.

use crate::models::hire::VacancyNumber;
use rust_decimal::prelude::*;
#[cfg(feature = "with_serde")]
use serde_derive::{Serialize, Deserialize};
use std::fmt;

/// A single field change that was applied to a hire record.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
pub enum Change {
    VacancyNumber(VacancyNumber),
    Designation(String),
    JobType(String),
    StaffName(String),
    JoiningDate(String),
    Qualification(String),
    AppointedBy(String),
    Joined(bool),
    Salary(Decimal),
    WeeklyFractionalHours(u32),
    WorkingHours(u32),
    WagesPerHour(Decimal),
    Shift(String),
    Terminated(bool),
}

impl Change {
    /// The human name of the field this change applies to.
    pub fn field(&self) -> &'static str {
        match self {
            Change::VacancyNumber(_) => "Vacancy number",
            Change::Designation(_) => "Designation",
            Change::JobType(_) => "Job type",
            Change::StaffName(_) => "Staff name",
            Change::JoiningDate(_) => "Join date",
            Change::Qualification(_) => "Qualification",
            Change::AppointedBy(_) => "Appointed by",
            Change::Joined(_) => "Joined",
            Change::Salary(_) => "Salary",
            Change::WeeklyFractionalHours(_) => "Weekly fractional hours",
            Change::WorkingHours(_) => "Working hours",
            Change::WagesPerHour(_) => "Wages per hour",
            Change::Shift(_) => "Shifts",
            Change::Terminated(_) => "Terminated",
        }
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.field();
        match self {
            Change::VacancyNumber(val) => write!(f, "{} has been changed to: {}", field, val),
            Change::Designation(val) |
                Change::JobType(val) |
                Change::StaffName(val) |
                Change::JoiningDate(val) |
                Change::Qualification(val) |
                Change::AppointedBy(val) |
                Change::Shift(val) => write!(f, "{} has been changed to: {}", field, val),
            Change::Joined(val) |
                Change::Terminated(val) => write!(f, "{} has been set to: {}", field, val),
            Change::Salary(val) |
                Change::WagesPerHour(val) => write!(f, "{} has been changed to: {}", field, val),
            Change::WeeklyFractionalHours(val) |
                Change::WorkingHours(val) => write!(f, "{} has been changed to: {}", field, val),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays() {
        assert_eq!(Change::Salary(num!(6000)).to_string(), "Salary has been changed to: 6000");
        assert_eq!(Change::StaffName("".into()).to_string(), "Staff name has been changed to: ");
        assert_eq!(Change::Joined(false).to_string(), "Joined has been set to: false");
        assert_eq!(Change::Shift("Evening".into()).to_string(), "Shifts has been changed to: Evening");
        assert_eq!(Change::VacancyNumber(VacancyNumber::new(42)).to_string(), "Vacancy number has been changed to: 42");
        assert_eq!(Change::WorkingHours(20).field(), "Working hours");
    }
}
