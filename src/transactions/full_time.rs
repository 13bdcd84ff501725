//! Full-time hires are salaried. Their salary can only be changed once they've
//! joined.
//!
//! See the [hire model.][1]
//!
//! [1]: ../../models/hire/index.html

use crate::{
    error::{Error, Result},
    models::{
        change::Change,
        hire::{FullTimeHire, Hire, HireClass, VacancyNumber},
    },
    roster::Roster,
    transactions::{check_details, resolve},
    util,
};
use rust_decimal::prelude::*;

/// Create a new full-time hire and add it to the end of the roster.
///
/// Every text field has to be filled in and the joining date has to be a real
/// dd/mm/yyyy date. Duplicate vacancy numbers are allowed.
pub fn create<'a, T: Into<String>>(roster: &'a mut Roster, vacancy_number: VacancyNumber, designation: T, job_type: T, staff_name: T, joining_date: T, qualification: T, appointed_by: T, joined: bool, salary: Decimal, weekly_fractional_hours: u32) -> Result<&'a Hire> {
    let (designation, job_type, staff_name, joining_date, qualification, appointed_by) =
        (designation.into(), job_type.into(), staff_name.into(), joining_date.into(), qualification.into(), appointed_by.into());
    check_details(&designation, &job_type, &staff_name, &joining_date, &qualification, &appointed_by)?;
    util::number::check_amount("salary", &salary)?;
    let model = Hire::builder()
        .vacancy_number(vacancy_number)
        .designation(designation)
        .job_type(job_type)
        .staff_name(staff_name)
        .joining_date(joining_date)
        .qualification(qualification)
        .appointed_by(appointed_by)
        .joined(joined)
        .class(HireClass::FullTime(FullTimeHire::new(salary, weekly_fractional_hours)))
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    tracing::info!(%vacancy_number, staff_name = %model.staff_name(), "added full time staff");
    Ok(roster.append(model))
}

/// Change the salary of the full-time hire filling `vacancy_number`.
pub fn set_salary(roster: &mut Roster, vacancy_number: VacancyNumber, salary: Decimal) -> Result<Change> {
    util::number::check_amount("salary", &salary)?;
    resolve(roster, vacancy_number)?.set_salary(salary)
}
