//! A hire is one staff member's recruitment record: which vacancy they fill,
//! what the position is, who they are, and whether they've joined yet.
//!
//! Every hire is either full-time or part-time. The shared information lives
//! on [Hire] itself and the per-kind information lives in [HireClass], which
//! also carries the lifecycle rules that gate certain changes:
//!
//! - A full-time hire's salary can only be changed once they've joined.
//! - A part-time hire's shift can only be changed once they've joined and as
//!   long as they haven't been terminated.
//! - A part-time hire can be terminated exactly once, which blanks out their
//!   personal details. Termination never reverts.
//!
//! [Hire]: struct.Hire.html
//! [HireClass]: enum.HireClass.html

use crate::{
    error::{Error, Result},
    models::change::Change,
    roster::Status,
    util,
};
use getset::{Getters, MutGetters};
use rust_decimal::prelude::*;
#[cfg(feature = "with_serde")]
use serde_derive::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

/// The number of the vacancy a hire fills. Nothing stops two hires from
/// sharing a vacancy number; lookups just take the first one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct VacancyNumber(u32);

impl VacancyNumber {
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    /// Grab the raw number
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for VacancyNumber {
    fn from(number: u32) -> Self {
        Self(number)
    }
}

impl fmt::Display for VacancyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VacancyNumber {
    type Err = Error;

    fn from_str(val: &str) -> Result<Self> {
        Ok(Self(util::number::parse_count("vacancy number", val)?))
    }
}

/// Names the two kinds of hire, mainly so errors can say which one was
/// expected and which one was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
pub enum HireKind {
    FullTime,
    PartTime,
}

impl fmt::Display for HireKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HireKind::FullTime => write!(f, "full time"),
            HireKind::PartTime => write!(f, "part time"),
        }
    }
}

/// The full-time half of a hire.
#[derive(Clone, Debug, PartialEq, Getters)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[getset(get = "pub")]
pub struct FullTimeHire {
    /// Yearly salary. Only changeable (via [Hire::set_salary]) once the hire
    /// has joined.
    ///
    /// [Hire::set_salary]: struct.Hire.html#method.set_salary
    salary: Decimal,
    /// How many hours a week this position is worth
    weekly_fractional_hours: u32,
}

impl FullTimeHire {
    /// Create a new full-time payload
    pub fn new<T: Into<Decimal>>(salary: T, weekly_fractional_hours: u32) -> Self {
        Self {
            salary: salary.into(),
            weekly_fractional_hours,
        }
    }

    change_setters! {
        /// Set the weekly fractional hours. Always allowed.
        set_weekly_fractional_hours(weekly_fractional_hours: u32) => WeeklyFractionalHours,
    }
}

/// The part-time half of a hire.
#[derive(Clone, Debug, PartialEq, Getters)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[getset(get = "pub")]
pub struct PartTimeHire {
    /// Hours worked per day
    working_hours: u32,
    wages_per_hour: Decimal,
    /// Freeform shift label (Morning, Evening, ...)
    shift: String,
    /// Set once by [Hire::terminate] and never cleared.
    ///
    /// [Hire::terminate]: struct.Hire.html#method.terminate
    terminated: bool,
}

impl PartTimeHire {
    /// Create a new part-time payload. Part-time hires always start out not
    /// terminated.
    pub fn new<W, S>(working_hours: u32, wages_per_hour: W, shift: S) -> Self
        where W: Into<Decimal>,
              S: Into<String>,
    {
        Self {
            working_hours,
            wages_per_hour: wages_per_hour.into(),
            shift: shift.into(),
            terminated: false,
        }
    }

    /// What this hire earns per day (working hours times wages per hour).
    /// Computed on demand, never stored.
    pub fn income_per_day(&self) -> Decimal {
        Decimal::from(self.working_hours) * self.wages_per_hour
    }

    change_setters! {
        /// Set the working hours. Always allowed.
        set_working_hours(working_hours: u32) => WorkingHours,
        /// Set the wages per hour. Always allowed.
        set_wages_per_hour(wages_per_hour: Decimal) => WagesPerHour,
    }
}

/// Describes what kind of hire a particular record is, and holds the
/// information specific to that kind.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
pub enum HireClass {
    /// A salaried, full-time position.
    FullTime(FullTimeHire),
    /// An hourly, shift-based position which can be terminated.
    PartTime(PartTimeHire),
}

impl HireClass {
    /// Which kind of hire this is
    pub fn kind(&self) -> HireKind {
        match self {
            HireClass::FullTime(_) => HireKind::FullTime,
            HireClass::PartTime(_) => HireKind::PartTime,
        }
    }
}

/// A staff hire record. Holds the details shared by every hire, and the
/// full-time/part-time specifics under `class`.
///
/// None of the fields are validated here. Checking for blank fields or bad
/// dates is up to whoever is collecting them (see the
/// [transactions](../../transactions/index.html)).
#[derive(Clone, Debug, PartialEq, Getters, MutGetters, derive_builder::Builder)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[builder(pattern = "owned", setter(into))]
#[getset(get = "pub")]
pub struct Hire {
    vacancy_number: VacancyNumber,
    /// The position's title (Head lecturer, ...)
    designation: String,
    /// The kind of work (Lecturer, Mentor, ...)
    job_type: String,
    staff_name: String,
    /// Joining date as dd/mm/yyyy text. Blank once a part-time hire is
    /// terminated.
    joining_date: String,
    qualification: String,
    /// Who made the appointment
    appointed_by: String,
    /// Whether the staff member has formally started
    #[builder(default)]
    joined: bool,
    /// Full-time or part-time, along with the details for each.
    #[getset(get = "pub", get_mut = "pub(crate)")]
    class: HireClass,
}

impl Hire {
    pub fn builder() -> HireBuilder {
        HireBuilder::default()
    }

    /// Which kind of hire this is
    pub fn kind(&self) -> HireKind {
        self.class().kind()
    }

    /// The label this hire gets in a roster listing.
    pub fn status(&self) -> Status {
        match self.class() {
            HireClass::FullTime(_) => Status::FullTime,
            HireClass::PartTime(part_time) if *part_time.terminated() => Status::Terminated,
            HireClass::PartTime(_) => Status::PartTime,
        }
    }

    /// Whether this is a part-time hire that has been terminated.
    pub fn is_terminated(&self) -> bool {
        match self.class() {
            HireClass::PartTime(part_time) => *part_time.terminated(),
            _ => false,
        }
    }

    /// Grab the full-time details, if this is a full-time hire
    pub fn full_time(&self) -> Result<&FullTimeHire> {
        match self.class() {
            HireClass::FullTime(full_time) => Ok(full_time),
            HireClass::PartTime(_) => Err(self.wrong_variant(HireKind::FullTime)),
        }
    }

    /// Grab the full-time details mutably, if this is a full-time hire. Use
    /// this for the ungated full-time setters.
    pub fn full_time_mut(&mut self) -> Result<&mut FullTimeHire> {
        let err = self.wrong_variant(HireKind::FullTime);
        match self.class_mut() {
            HireClass::FullTime(full_time) => Ok(full_time),
            HireClass::PartTime(_) => Err(err),
        }
    }

    /// Grab the part-time details, if this is a part-time hire
    pub fn part_time(&self) -> Result<&PartTimeHire> {
        match self.class() {
            HireClass::PartTime(part_time) => Ok(part_time),
            HireClass::FullTime(_) => Err(self.wrong_variant(HireKind::PartTime)),
        }
    }

    /// Grab the part-time details mutably, if this is a part-time hire. Use
    /// this for the ungated part-time setters.
    pub fn part_time_mut(&mut self) -> Result<&mut PartTimeHire> {
        let err = self.wrong_variant(HireKind::PartTime);
        match self.class_mut() {
            HireClass::PartTime(part_time) => Ok(part_time),
            HireClass::FullTime(_) => Err(err),
        }
    }

    fn wrong_variant(&self, expected: HireKind) -> Error {
        Error::WrongVariant { expected, found: self.kind() }
    }

    change_setters! {
        set_vacancy_number(vacancy_number: VacancyNumber) => VacancyNumber,
        set_designation(into designation: String) => Designation,
        set_job_type(into job_type: String) => JobType,
        set_staff_name(into staff_name: String) => StaffName,
        set_joining_date(into joining_date: String) => JoiningDate,
        set_qualification(into qualification: String) => Qualification,
        set_appointed_by(into appointed_by: String) => AppointedBy,
        /// Mark whether the staff member has joined. Always allowed, even on a
        /// terminated part-time hire (it just doesn't make their shift
        /// changeable again).
        set_joined(joined: bool) => Joined,
    }

    /// Change a full-time hire's salary. Only allowed once they've joined;
    /// otherwise the salary stays put and we return `Error::NotJoined`.
    pub fn set_salary<T: Into<Decimal>>(&mut self, salary: T) -> Result<Change> {
        let joined = self.joined;
        let vacancy_number = self.vacancy_number;
        let full_time = self.full_time_mut()?;
        if !joined {
            tracing::warn!(%vacancy_number, "cannot set salary as no staff is appointed yet");
            Err(Error::NotJoined)?;
        }
        full_time.salary = salary.into();
        Ok(change_setters!(@applied full_time.salary, Salary))
    }

    /// Change a part-time hire's shift. Only allowed while they're joined and
    /// not terminated; otherwise the shift stays put and we return
    /// `Error::NotEligible`.
    pub fn set_shift<T: Into<String>>(&mut self, shift: T) -> Result<Change> {
        let joined = self.joined;
        let vacancy_number = self.vacancy_number;
        let part_time = self.part_time_mut()?;
        if !joined || part_time.terminated {
            tracing::warn!(%vacancy_number, joined, terminated = part_time.terminated, "cannot change shifts as staff is not appointed or has been terminated");
            Err(Error::NotEligible)?;
        }
        part_time.shift = shift.into();
        Ok(change_setters!(@applied part_time.shift, Shift))
    }

    /// Terminate a part-time hire.
    ///
    /// This blanks the staff name, joining date, qualification, and appointed
    /// by fields, un-joins the hire, and marks it terminated. The vacancy
    /// number, designation, job type, hours, wages, and shift are left as they
    /// were. Returns every change applied, in order.
    ///
    /// Terminating twice is an `Error::AlreadyTerminated` and changes nothing.
    pub fn terminate(&mut self) -> Result<Vec<Change>> {
        let vacancy_number = self.vacancy_number;
        if self.part_time()?.terminated {
            tracing::warn!(%vacancy_number, "staff is already terminated");
            Err(Error::AlreadyTerminated)?;
        }
        let mut changes = vec![
            self.set_staff_name(""),
            self.set_joining_date(""),
            self.set_qualification(""),
            self.set_appointed_by(""),
            self.set_joined(false),
        ];
        let part_time = self.part_time_mut()?;
        part_time.terminated = true;
        changes.push(change_setters!(@applied part_time.terminated, Terminated));
        tracing::info!(%vacancy_number, "staff has been terminated");
        Ok(changes)
    }

    /// Render this hire as display text. See [describe](fn.describe.html).
    pub fn describe(&self) -> String {
        describe(self)
    }
}

fn yes_no(val: bool) -> &'static str {
    if val { "Yes" } else { "No" }
}

/// Render a hire into the multi-line text shown when someone asks to see a
/// record.
///
/// The shared details always show. Full-time pay details only show once the
/// hire has joined. Part-time work details only show while joined and not
/// terminated, but the terminated flag always shows as the last line.
pub fn describe(hire: &Hire) -> String {
    let mut lines = vec![
        format!("Vacancy Number: {}", hire.vacancy_number()),
        format!("Designation: {}", hire.designation()),
        format!("Job Type: {}", hire.job_type()),
        format!("Staff Name: {}", hire.staff_name()),
        format!("Joining Date: {}", hire.joining_date()),
        format!("Qualification: {}", hire.qualification()),
        format!("Appointed By: {}", hire.appointed_by()),
        format!("Joined: {}", yes_no(*hire.joined())),
    ];
    match hire.class() {
        HireClass::FullTime(full_time) => {
            if *hire.joined() {
                lines.push(format!("Salary: {}", full_time.salary()));
                lines.push(format!("Weekly Fractional Hours: {}", full_time.weekly_fractional_hours()));
            }
        }
        HireClass::PartTime(part_time) => {
            if *hire.joined() && !part_time.terminated() {
                lines.push(format!("Working Hours: {}", part_time.working_hours()));
                lines.push(format!("Wages Per Hour: {}", part_time.wages_per_hour()));
                lines.push(format!("Shifts: {}", part_time.shift()));
                lines.push(format!("Income Per Day: {}", part_time.income_per_day()));
            }
            lines.push(format!("Terminated: {}", yes_no(*part_time.terminated())));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test::{make_full_time, make_part_time, rejected_change_tester};

    #[test]
    fn builds() {
        let hire = Hire::builder()
            .vacancy_number(VacancyNumber::new(7))
            .designation("Head lecturer")
            .job_type("Lecturer")
            .staff_name("Lisa Rinna")
            .joining_date("01/09/2024")
            .qualification("PHD")
            .appointed_by("Head of School")
            .class(HireClass::FullTime(FullTimeHire::new(num!(25000.00), 10)))
            .build().unwrap();
        assert_eq!(hire.vacancy_number(), &VacancyNumber::new(7));
        assert_eq!(hire.joined(), &false);
        assert_eq!(hire.kind(), HireKind::FullTime);
        assert_eq!(hire.status(), Status::FullTime);
        assert_eq!(hire.full_time().unwrap().salary(), &num!(25000));

        let res = Hire::builder()
            .vacancy_number(VacancyNumber::new(7))
            .designation("Head lecturer")
            .build();
        assert!(res.is_err());
    }

    #[test]
    fn vacancy_numbers() {
        assert_eq!("123456".parse::<VacancyNumber>(), Ok(VacancyNumber::new(123456)));
        assert_eq!(" 12 ".parse::<VacancyNumber>(), Ok(VacancyNumber::new(12)));
        assert_eq!("12a".parse::<VacancyNumber>(), Err(Error::invalid_format("vacancy number", "12a")));
        assert_eq!("-1".parse::<VacancyNumber>(), Err(Error::invalid_format("vacancy number", "-1")));
        assert_eq!(VacancyNumber::from(9).value(), 9);
        assert_eq!(VacancyNumber::new(9).to_string(), "9");
    }

    #[test]
    fn base_setters_always_apply() {
        let mut hire = make_full_time(1, false, num!(5000));
        assert_eq!(hire.set_designation("Dean"), Change::Designation("Dean".into()));
        assert_eq!(hire.set_job_type("Mentor"), Change::JobType("Mentor".into()));
        assert_eq!(hire.set_staff_name("Kyle"), Change::StaffName("Kyle".into()));
        assert_eq!(hire.set_joining_date("02/02/2022"), Change::JoiningDate("02/02/2022".into()));
        assert_eq!(hire.set_qualification("Masters"), Change::Qualification("Masters".into()));
        assert_eq!(hire.set_appointed_by("Registrar"), Change::AppointedBy("Registrar".into()));
        assert_eq!(hire.set_vacancy_number(VacancyNumber::new(2)), Change::VacancyNumber(VacancyNumber::new(2)));
        assert_eq!(hire.set_joined(true), Change::Joined(true));
        assert_eq!(hire.designation(), "Dean");
        assert_eq!(hire.job_type(), "Mentor");
        assert_eq!(hire.staff_name(), "Kyle");
        assert_eq!(hire.joining_date(), "02/02/2022");
        assert_eq!(hire.qualification(), "Masters");
        assert_eq!(hire.appointed_by(), "Registrar");
        assert_eq!(hire.vacancy_number(), &VacancyNumber::new(2));
        assert_eq!(hire.joined(), &true);
    }

    #[test]
    fn salary_needs_joined() {
        let mut hire = make_full_time(100, false, num!(5000));
        rejected_change_tester(&hire, Error::NotJoined, |h| h.set_salary(num!(6000)));
        assert_eq!(hire.set_salary(num!(6000)), Err(Error::NotJoined));
        assert_eq!(hire.full_time().unwrap().salary(), &num!(5000));

        hire.set_joined(true);
        assert_eq!(hire.set_salary(num!(6000)), Ok(Change::Salary(num!(6000))));
        assert_eq!(hire.full_time().unwrap().salary(), &num!(6000));

        let mut part_time = make_part_time(100, true, "Morning");
        rejected_change_tester(&part_time, Error::WrongVariant { expected: HireKind::FullTime, found: HireKind::PartTime }, |h| h.set_salary(num!(6000)));
        assert!(part_time.set_salary(num!(1)).is_err());
    }

    #[test]
    fn weekly_hours_always_apply() {
        let mut hire = make_full_time(100, false, num!(5000));
        let change = hire.full_time_mut().unwrap().set_weekly_fractional_hours(20);
        assert_eq!(change, Change::WeeklyFractionalHours(20));
        assert_eq!(hire.full_time().unwrap().weekly_fractional_hours(), &20);
    }

    #[test]
    fn shift_needs_joined_and_not_terminated() {
        let mut hire = make_part_time(200, false, "Morning");
        rejected_change_tester(&hire, Error::NotEligible, |h| h.set_shift("Evening"));

        hire.set_joined(true);
        assert_eq!(hire.set_shift("Evening"), Ok(Change::Shift("Evening".into())));
        assert_eq!(hire.part_time().unwrap().shift(), "Evening");

        hire.terminate().unwrap();
        rejected_change_tester(&hire, Error::NotEligible, |h| h.set_shift("Night"));

        // rejoining a terminated hire doesn't make them eligible again
        hire.set_joined(true);
        rejected_change_tester(&hire, Error::NotEligible, |h| h.set_shift("Night"));
        assert_eq!(hire.part_time().unwrap().shift(), "Evening");

        let full_time = make_full_time(200, true, num!(5000));
        rejected_change_tester(&full_time, Error::WrongVariant { expected: HireKind::PartTime, found: HireKind::FullTime }, |h| h.set_shift("Night"));
    }

    #[test]
    fn part_time_setters_always_apply() {
        let mut hire = make_part_time(200, false, "Morning");
        hire.terminate().unwrap();
        let part_time = hire.part_time_mut().unwrap();
        assert_eq!(part_time.set_working_hours(6), Change::WorkingHours(6));
        assert_eq!(part_time.set_wages_per_hour(num!(15.50)), Change::WagesPerHour(num!(15.50)));
        assert_eq!(part_time.income_per_day(), num!(93));
    }

    #[test]
    fn terminates_once() {
        let mut hire = make_part_time(200, true, "Morning");
        let before = hire.clone();
        let changes = hire.terminate().unwrap();
        assert_eq!(changes, vec![
            Change::StaffName("".into()),
            Change::JoiningDate("".into()),
            Change::Qualification("".into()),
            Change::AppointedBy("".into()),
            Change::Joined(false),
            Change::Terminated(true),
        ]);
        assert_eq!(hire.staff_name(), "");
        assert_eq!(hire.joining_date(), "");
        assert_eq!(hire.qualification(), "");
        assert_eq!(hire.appointed_by(), "");
        assert_eq!(hire.joined(), &false);
        assert!(hire.is_terminated());
        assert_eq!(hire.status(), Status::Terminated);

        // the rest is untouched
        assert_eq!(hire.vacancy_number(), before.vacancy_number());
        assert_eq!(hire.designation(), before.designation());
        assert_eq!(hire.job_type(), before.job_type());
        let (now, then) = (hire.part_time().unwrap(), before.part_time().unwrap());
        assert_eq!(now.working_hours(), then.working_hours());
        assert_eq!(now.wages_per_hour(), then.wages_per_hour());
        assert_eq!(now.shift(), "Morning");

        rejected_change_tester(&hire, Error::AlreadyTerminated, |h| h.terminate());

        let full_time = make_full_time(200, true, num!(5000));
        rejected_change_tester(&full_time, Error::WrongVariant { expected: HireKind::PartTime, found: HireKind::FullTime }, |h| h.terminate());
    }

    #[test]
    fn terminates_unjoined() {
        let mut hire = make_part_time(201, false, "Night");
        assert!(hire.terminate().is_ok());
        assert!(hire.is_terminated());
        assert_eq!(hire.terminate(), Err(Error::AlreadyTerminated));
    }

    #[test]
    fn describes_full_time() {
        let mut hire = make_full_time(100, false, num!(5000));
        assert_eq!(hire.describe(), vec![
            "Vacancy Number: 100",
            "Designation: Head lecturer",
            "Job Type: Lecturer",
            "Staff Name: Lisa Rinna",
            "Joining Date: 01/09/2024",
            "Qualification: PHD",
            "Appointed By: Head of School",
            "Joined: No",
        ].join("\n"));

        hire.set_joined(true);
        let text = describe(&hire);
        assert!(text.starts_with("Vacancy Number: 100\n"));
        assert!(text.contains("Joined: Yes\n"));
        assert!(text.ends_with("Salary: 5000\nWeekly Fractional Hours: 35"));
    }

    #[test]
    fn describes_part_time() {
        let mut hire = make_part_time(200, true, "Morning");
        let text = hire.describe();
        assert!(text.contains("Joined: Yes\n"));
        assert!(text.ends_with("Working Hours: 4\nWages Per Hour: 13.50\nShifts: Morning\nIncome Per Day: 54.00\nTerminated: No"));

        hire.terminate().unwrap();
        let text = hire.describe();
        assert!(text.contains("Staff Name: \n"));
        assert!(!text.contains("Shifts"));
        assert!(!text.contains("Income Per Day"));
        assert!(text.ends_with("Joined: No\nTerminated: Yes"));

        let unjoined = make_part_time(201, false, "Morning");
        assert!(unjoined.describe().ends_with("Joined: No\nTerminated: No"));
    }

    #[cfg(feature = "with_serde")]
    #[test]
    fn serializes() {
        let mut hire = make_part_time(200, true, "Morning");
        hire.terminate().unwrap();
        let json = serde_json::to_string(&hire).unwrap();
        let back: Hire = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hire);
    }
}
