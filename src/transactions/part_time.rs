//! Part-time hires are paid by the hour and work a named shift. The shift can
//! only be changed while they're joined and not terminated, and they can be
//! terminated exactly once.
//!
//! See the [hire model.][1]
//!
//! [1]: ../../models/hire/index.html

use crate::{
    error::{Error, Result},
    models::{
        change::Change,
        hire::{Hire, HireClass, PartTimeHire, VacancyNumber},
    },
    roster::Roster,
    transactions::{check_details, require_filled, resolve},
    util,
};
use rust_decimal::prelude::*;

/// Create a new part-time hire and add it to the end of the roster. New
/// part-time hires are never terminated.
///
/// Every text field (shift included) has to be filled in and the joining date
/// has to be a real dd/mm/yyyy date. Duplicate vacancy numbers are allowed.
pub fn create<'a, T: Into<String>>(roster: &'a mut Roster, vacancy_number: VacancyNumber, designation: T, job_type: T, staff_name: T, joining_date: T, qualification: T, appointed_by: T, joined: bool, working_hours: u32, wages_per_hour: Decimal, shift: T) -> Result<&'a Hire> {
    let (designation, job_type, staff_name, joining_date, qualification, appointed_by, shift) =
        (designation.into(), job_type.into(), staff_name.into(), joining_date.into(), qualification.into(), appointed_by.into(), shift.into());
    check_details(&designation, &job_type, &staff_name, &joining_date, &qualification, &appointed_by)?;
    require_filled(&[("shift", shift.as_str())])?;
    util::number::check_amount("wages per hour", &wages_per_hour)?;
    let model = Hire::builder()
        .vacancy_number(vacancy_number)
        .designation(designation)
        .job_type(job_type)
        .staff_name(staff_name)
        .joining_date(joining_date)
        .qualification(qualification)
        .appointed_by(appointed_by)
        .joined(joined)
        .class(HireClass::PartTime(PartTimeHire::new(working_hours, wages_per_hour, shift)))
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    tracing::info!(%vacancy_number, staff_name = %model.staff_name(), "added part time staff");
    Ok(roster.append(model))
}

/// Change the shift of the part-time hire filling `vacancy_number`.
pub fn set_shift<T: Into<String>>(roster: &mut Roster, vacancy_number: VacancyNumber, shift: T) -> Result<Change> {
    let shift = shift.into();
    require_filled(&[("shift", shift.as_str())])?;
    resolve(roster, vacancy_number)?.set_shift(shift)
}

/// Terminate the part-time hire filling `vacancy_number`, returning every
/// change the termination applied.
pub fn terminate(roster: &mut Roster, vacancy_number: VacancyNumber) -> Result<Vec<Change>> {
    resolve(roster, vacancy_number)?.terminate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::hire::HireKind,
        util::test::{make_full_time, make_roster, rejected_transaction_tester},
    };

    fn add<'a>(roster: &'a mut Roster, vacancy_number: u32, joined: bool, shift: &str) -> Result<&'a Hire> {
        create(roster, VacancyNumber::new(vacancy_number), "Lab assistant", "Mentor", "Kyle Richards", "15/01/2025", "Masters", "Head of Lab", joined, 20, num!(13.82), shift)
    }

    #[test]
    fn can_create() {
        let mut roster = Roster::new();
        let hire = add(&mut roster, 200, true, "Morning").unwrap().clone();
        assert_eq!(roster.len(), 1);
        assert_eq!(hire.vacancy_number(), &VacancyNumber::new(200));
        assert_eq!(hire.staff_name(), "Kyle Richards");
        assert_eq!(hire.joined(), &true);
        let part_time = hire.part_time().unwrap();
        assert_eq!(part_time.working_hours(), &20);
        assert_eq!(part_time.wages_per_hour(), &num!(13.82));
        assert_eq!(part_time.shift(), "Morning");
        assert_eq!(part_time.terminated(), &false);
        assert_eq!(part_time.income_per_day(), num!(276.40));

        let empty = Roster::new();
        rejected_transaction_tester(&empty, Error::MissingField("shift".into()), |roster| {
            add(roster, 200, true, "").map(|h| h.clone())
        });
        rejected_transaction_tester(&empty, Error::MissingField("appointed by".into()), |roster| {
            create(roster, VacancyNumber::new(1), "Dean", "Lecturer", "Lisa", "01/09/2024", "PHD", "", true, 1, num!(1), "Night").map(|h| h.clone())
        });
        rejected_transaction_tester(&empty, Error::invalid_format("wages per hour", "-0.50"), |roster| {
            create(roster, VacancyNumber::new(1), "Dean", "Lecturer", "Lisa", "01/09/2024", "PHD", "Head", true, 1, num!(-0.50), "Night").map(|h| h.clone())
        });
    }

    #[test]
    fn shift_gating() {
        let mut roster = Roster::new();
        add(&mut roster, 200, false, "Morning").unwrap();
        add(&mut roster, 201, true, "Morning").unwrap();

        rejected_transaction_tester(&roster, Error::NotEligible, |roster| set_shift(roster, VacancyNumber::new(200), "Evening"));
        assert_eq!(set_shift(&mut roster, VacancyNumber::new(201), "Evening"), Ok(Change::Shift("Evening".into())));
        assert_eq!(roster.get(1).unwrap().part_time().unwrap().shift(), "Evening");

        terminate(&mut roster, VacancyNumber::new(201)).unwrap();
        rejected_transaction_tester(&roster, Error::NotEligible, |roster| set_shift(roster, VacancyNumber::new(201), "Night"));
        rejected_transaction_tester(&roster, Error::MissingField("shift".into()), |roster| set_shift(roster, VacancyNumber::new(201), " "));
    }

    #[test]
    fn terminates() {
        let mut roster = Roster::new();
        add(&mut roster, 200, true, "Morning").unwrap();
        let before = roster.get(0).unwrap().clone();

        let changes = terminate(&mut roster, VacancyNumber::new(200)).unwrap();
        assert_eq!(changes.len(), 6);
        assert_eq!(changes.last(), Some(&Change::Terminated(true)));
        let hire = roster.get(0).unwrap();
        assert_eq!(hire.staff_name(), "");
        assert_eq!(hire.joining_date(), "");
        assert_eq!(hire.qualification(), "");
        assert_eq!(hire.appointed_by(), "");
        assert_eq!(hire.joined(), &false);
        assert!(hire.is_terminated());
        assert_eq!(hire.designation(), before.designation());
        assert_eq!(hire.job_type(), before.job_type());
        assert_eq!(hire.part_time().unwrap().shift(), "Morning");
        assert_eq!(hire.part_time().unwrap().working_hours(), &20);
        assert_eq!(hire.part_time().unwrap().wages_per_hour(), &num!(13.82));

        rejected_transaction_tester(&roster, Error::AlreadyTerminated, |roster| terminate(roster, VacancyNumber::new(200)));
    }

    #[test]
    fn resolution_errors() {
        let roster = make_roster();
        rejected_transaction_tester(&roster, Error::NotFound(VacancyNumber::new(5)), |roster| terminate(roster, VacancyNumber::new(5)));
        rejected_transaction_tester(&roster, Error::NotFound(VacancyNumber::new(5)), |roster| set_shift(roster, VacancyNumber::new(5), "Night"));
        let wrong = Error::WrongVariant { expected: HireKind::PartTime, found: HireKind::FullTime };
        rejected_transaction_tester(&roster, wrong.clone(), |roster| terminate(roster, VacancyNumber::new(101)));
        rejected_transaction_tester(&roster, wrong, |roster| set_shift(roster, VacancyNumber::new(101), "Night"));
    }

    #[test]
    fn first_match_shadows_later_hires() {
        // a full-time hire sharing the vacancy number hides the part-time one
        let mut roster = Roster::new();
        roster.append(make_full_time(300, true, num!(5000)));
        add(&mut roster, 300, true, "Morning").unwrap();
        rejected_transaction_tester(&roster, Error::WrongVariant { expected: HireKind::PartTime, found: HireKind::FullTime }, |roster| terminate(roster, VacancyNumber::new(300)));
    }
}
