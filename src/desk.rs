//! The recruitment desk ties the staff form to the roster. Each method is one
//! button: it reads what it needs off the form, runs the matching
//! transaction, and returns a [Notice] saying how it went, worded for the
//! person at the desk.
//!
//! The desk never fails. Anything that goes wrong becomes a warning or error
//! notice, and the roster is left as it was.
//!
//! [Notice]: struct.Notice.html

use crate::{
    error::{Error, Result},
    form::{FormField, StaffForm},
    models::hire::HireKind,
    roster::{Roster, SummaryRow},
    transactions::{full_time, listing, part_time},
};
use getset::{Getters, MutGetters};

/// How serious a notice is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// The outcome of pressing a button on the desk.
#[derive(Clone, Debug, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct Notice {
    level: NoticeLevel,
    title: String,
    message: String,
}

impl Notice {
    pub fn new<T, M>(level: NoticeLevel, title: T, message: M) -> Self
        where T: Into<String>,
              M: Into<String>,
    {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }

    fn success<M: Into<String>>(message: M) -> Self {
        Self::new(NoticeLevel::Success, "Success", message)
    }

    fn missing_information<M: Into<String>>(message: M) -> Self {
        Self::new(NoticeLevel::Warning, "Missing Information", message)
    }

    fn invalid_input<M: Into<String>>(message: M) -> Self {
        Self::new(NoticeLevel::Error, "Invalid Input", message)
    }

    fn error<M: Into<String>>(message: M) -> Self {
        Self::new(NoticeLevel::Error, "Error", message)
    }

    pub fn is_success(&self) -> bool {
        self.level == NoticeLevel::Success
    }
}

/// The form fields every new hire needs filled in.
const DETAIL_FIELDS: [FormField; 6] = [
    FormField::Designation,
    FormField::JobType,
    FormField::StaffName,
    FormField::JoiningDate,
    FormField::Qualification,
    FormField::AppointedBy,
];

/// Turn the lookup/lifecycle errors shared by the update buttons into notices.
/// Number parsing errors are worded per button, so those are passed in.
fn update_notice(err: Error, invalid_numbers: &str) -> Notice {
    match err {
        Error::NotFound(vacancy_number) => {
            Notice::new(NoticeLevel::Warning, "Not Found", format!("Staff with vacancy number {} not found.", vacancy_number))
        }
        Error::WrongVariant { expected: HireKind::FullTime, .. } => Notice::error("This is not a Full Time Staff position."),
        Error::WrongVariant { expected: HireKind::PartTime, .. } => Notice::error("This is not a Part Time Staff position."),
        Error::NotJoined => Notice::error("Cannot set salary as no staff is appointed yet."),
        Error::NotEligible => Notice::error("Cannot change shifts as staff is not appointed or has been terminated."),
        Error::AlreadyTerminated => Notice::error("Staff is already terminated."),
        Error::MissingField(_) => Notice::missing_information("Please enter shifts information."),
        Error::InvalidFormat { .. } => Notice::invalid_input(invalid_numbers),
        other => Notice::error(other.to_string()),
    }
}

/// Turn errors from the add buttons into notices.
fn create_notice(err: Error, invalid_numbers: &str) -> Notice {
    match err {
        Error::MissingField(_) => Notice::missing_information("All fields must be filled out."),
        Error::InvalidFormat { ref field, .. } if field == FormField::JoiningDate.name() => {
            Notice::invalid_input("Please enter a valid joining date (dd/mm/yyyy).")
        }
        Error::InvalidFormat { .. } => Notice::invalid_input(invalid_numbers),
        other => Notice::error(other.to_string()),
    }
}

/// A recruitment desk: one roster, one form.
#[derive(Clone, Debug, Getters, MutGetters)]
#[getset(get = "pub")]
pub struct RecruitmentDesk {
    roster: Roster,
    #[getset(get = "pub", get_mut = "pub")]
    form: StaffForm,
}

impl RecruitmentDesk {
    /// Open a desk with an empty roster and a blank form.
    pub fn new() -> Result<Self> {
        Ok(Self {
            roster: Roster::new(),
            form: StaffForm::new()?,
        })
    }

    /// Add a full-time hire from the form. Clears the form on success.
    pub fn add_full_time_staff(&mut self) -> Notice {
        const INVALID: &str = "Please enter valid numbers for Vacancy Number, Salary, and Weekly Hours.";
        let res = self.add_full_time_inner();
        self.finish_add(res, "full time", INVALID)
    }

    fn add_full_time_inner(&mut self) -> Result<String> {
        let form = &self.form;
        let (vacancy_number, salary, weekly_fractional_hours) =
            (form.vacancy_number()?, form.salary()?, form.weekly_fractional_hours()?);
        if form.any_blank(&DETAIL_FIELDS) {
            Err(Error::MissingField("details".into()))?;
        }
        let hire = full_time::create(
            &mut self.roster,
            vacancy_number,
            form.value(FormField::Designation),
            form.value(FormField::JobType),
            form.value(FormField::StaffName),
            form.value(FormField::JoiningDate),
            form.value(FormField::Qualification),
            form.value(FormField::AppointedBy),
            form.joined(),
            salary,
            weekly_fractional_hours,
        )?;
        Ok(hire.staff_name().clone())
    }

    /// Add a part-time hire from the form. Clears the form on success.
    pub fn add_part_time_staff(&mut self) -> Notice {
        const INVALID: &str = "Please enter valid numbers for Vacancy Number, Working Hour, and Wages Per Hour.";
        let res = self.add_part_time_inner();
        self.finish_add(res, "part time", INVALID)
    }

    fn add_part_time_inner(&mut self) -> Result<String> {
        let form = &self.form;
        let (vacancy_number, working_hours, wages_per_hour) =
            (form.vacancy_number()?, form.working_hours()?, form.wages_per_hour()?);
        if form.any_blank(&DETAIL_FIELDS) || form.any_blank(&[FormField::Shift]) {
            Err(Error::MissingField("details".into()))?;
        }
        let hire = part_time::create(
            &mut self.roster,
            vacancy_number,
            form.value(FormField::Designation),
            form.value(FormField::JobType),
            form.value(FormField::StaffName),
            form.value(FormField::JoiningDate),
            form.value(FormField::Qualification),
            form.value(FormField::AppointedBy),
            form.joined(),
            working_hours,
            wages_per_hour,
            form.value(FormField::Shift),
        )?;
        Ok(hire.staff_name().clone())
    }

    fn finish_add(&mut self, res: Result<String>, kind: &str, invalid_numbers: &str) -> Notice {
        match res {
            Ok(staff_name) => {
                self.form.clear();
                Notice::success(format!("{} has been added as a {} staff!", staff_name, kind))
            }
            Err(err) => {
                tracing::warn!(error = %err, "could not add {} staff", kind);
                create_notice(err, invalid_numbers)
            }
        }
    }

    /// Set the salary of the full-time hire named by the form's vacancy number.
    pub fn set_salary(&mut self) -> Notice {
        const INVALID: &str = "Please enter valid numbers for Vacancy Number and Salary.";
        let res = self.form.vacancy_number()
            .and_then(|vacancy_number| Ok((vacancy_number, self.form.salary()?)))
            .and_then(|(vacancy_number, salary)| full_time::set_salary(&mut self.roster, vacancy_number, salary));
        match res {
            Ok(_) => Notice::success("Salary updated successfully!"),
            Err(err) => update_notice(err, INVALID),
        }
    }

    /// Set the shift of the part-time hire named by the form's vacancy number.
    pub fn set_shifts(&mut self) -> Notice {
        const INVALID: &str = "Please enter a valid number for Vacancy Number.";
        let shift = self.form.value(FormField::Shift).to_string();
        let res = self.form.vacancy_number()
            .and_then(|vacancy_number| part_time::set_shift(&mut self.roster, vacancy_number, shift));
        match res {
            Ok(_) => Notice::success("Shifts updated successfully!"),
            Err(err) => update_notice(err, INVALID),
        }
    }

    /// Terminate the part-time hire named by the form's vacancy number.
    pub fn terminate_staff(&mut self) -> Notice {
        const INVALID: &str = "Please enter a valid number for Vacancy Number.";
        let res = self.form.vacancy_number()
            .and_then(|vacancy_number| part_time::terminate(&mut self.roster, vacancy_number));
        match res {
            Ok(_) => Notice::success("Staff terminated successfully!"),
            Err(err) => update_notice(err, INVALID),
        }
    }

    /// Show the full description of the hire at the form's display number.
    pub fn display_staff(&self) -> Notice {
        let res = self.form.display_index()
            .and_then(|index| listing::display(&self.roster, index));
        match res {
            Ok(text) => Notice::new(NoticeLevel::Success, "Staff Information", text),
            Err(Error::IndexOutOfRange { len: 0, .. }) => {
                Notice::invalid_input("Error: There is no staff to display yet.")
            }
            Err(Error::IndexOutOfRange { len, .. }) => {
                Notice::invalid_input(format!("Error: Display number must be between 0 and {}", len - 1))
            }
            Err(_) => Notice::invalid_input("Error: Please enter a valid number for Display Number."),
        }
    }

    /// Blank the form.
    pub fn clear(&mut self) {
        self.form.clear();
    }

    /// The rows of the staff list.
    pub fn rows(&self) -> Vec<SummaryRow> {
        listing::summary(&self.roster)
    }
}
