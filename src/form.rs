//! The staff form is the text-entry side of the recruitment desk. It holds the
//! raw text of every field exactly as a person typed it, refuses keystrokes
//! that could never turn into a valid value (letters in a number field, a
//! second decimal point, a thirteenth month), and turns the text into typed
//! values when a transaction needs them.
//!
//! Input masks only keep out characters that don't belong. Whether a field is
//! blank, or a partially typed date is complete, is only checked when the
//! values are actually used.

use crate::{
    error::{Error, Result},
    models::hire::VacancyNumber,
    util,
};
use regex::Regex;
use rust_decimal::prelude::*;
use std::collections::HashMap;

/// What a field will let a person type into it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputMask {
    /// Letters and whitespace (names, titles, shift labels)
    Letters,
    /// Digits only (vacancy numbers, hours)
    Digits,
    /// Digits with at most one decimal point (money)
    Decimal,
    /// A dd/mm/yyyy date, possibly only partly typed
    Date,
}

/// Every field on the staff form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    VacancyNumber,
    Designation,
    JobType,
    StaffName,
    JoiningDate,
    Qualification,
    AppointedBy,
    Salary,
    WeeklyFractionalHours,
    WorkingHours,
    WagesPerHour,
    Shift,
    DisplayNumber,
}

impl FormField {
    /// All the text fields, in the order they appear on the form.
    pub const ALL: [FormField; 13] = [
        FormField::VacancyNumber,
        FormField::Designation,
        FormField::JobType,
        FormField::StaffName,
        FormField::JoiningDate,
        FormField::Qualification,
        FormField::AppointedBy,
        FormField::Salary,
        FormField::WeeklyFractionalHours,
        FormField::WorkingHours,
        FormField::WagesPerHour,
        FormField::Shift,
        FormField::DisplayNumber,
    ];

    /// The field's name, as used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            FormField::VacancyNumber => "vacancy number",
            FormField::Designation => "designation",
            FormField::JobType => "job type",
            FormField::StaffName => "staff name",
            FormField::JoiningDate => "joining date",
            FormField::Qualification => "qualification",
            FormField::AppointedBy => "appointed by",
            FormField::Salary => "salary",
            FormField::WeeklyFractionalHours => "weekly fractional hours",
            FormField::WorkingHours => "working hours",
            FormField::WagesPerHour => "wages per hour",
            FormField::Shift => "shift",
            FormField::DisplayNumber => "display number",
        }
    }

    pub fn mask(&self) -> InputMask {
        match self {
            FormField::VacancyNumber |
                FormField::WeeklyFractionalHours |
                FormField::WorkingHours |
                FormField::DisplayNumber => InputMask::Digits,
            FormField::Designation |
                FormField::JobType |
                FormField::StaffName |
                FormField::Qualification |
                FormField::AppointedBy |
                FormField::Shift => InputMask::Letters,
            FormField::JoiningDate => InputMask::Date,
            FormField::Salary |
                FormField::WagesPerHour => InputMask::Decimal,
        }
    }
}

/// Compiled patterns for each input mask.
#[derive(Clone, Debug)]
pub struct InputMasks {
    letters: Regex,
    digits: Regex,
    decimal: Regex,
    date: Regex,
}

impl InputMasks {
    pub fn new() -> Result<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| Error::InvalidPattern(e.to_string()))
        };
        Ok(Self {
            // ASCII whitespace only, no-break spaces and friends stay out
            letters: compile(r"^(?-u:[a-zA-Z\s])*$")?,
            digits: compile(r"^\d*$")?,
            decimal: compile(r"^\d*\.?\d*$")?,
            date: compile(r"^([0-9]{0,2}/)?([0-9]{0,2}/)?([0-9]{0,4})$")?,
        })
    }

    /// Whether `text` is allowed to sit in a field with the given mask.
    pub fn accepts(&self, mask: InputMask, text: &str) -> bool {
        match mask {
            InputMask::Letters => self.letters.is_match(text),
            InputMask::Digits => self.digits.is_match(text),
            InputMask::Decimal => self.decimal.is_match(text),
            InputMask::Date => self.accepts_date(text),
        }
    }

    // A partial date only has to look like the start of a date, but once all
    // ten characters are in it has to be a real one.
    fn accepts_date(&self, text: &str) -> bool {
        if text.is_empty() {
            return true;
        }
        if text.len() > util::date::JOINING_DATE_LEN || !self.date.is_match(text) {
            return false;
        }
        if text.len() == util::date::JOINING_DATE_LEN {
            return util::date::parse_joining_date(text).is_ok();
        }
        true
    }
}

/// The raw contents of the staff form.
#[derive(Clone, Debug)]
pub struct StaffForm {
    masks: InputMasks,
    values: HashMap<FormField, String>,
    joined: bool,
}

impl StaffForm {
    /// Create an empty form.
    pub fn new() -> Result<Self> {
        Ok(Self {
            masks: InputMasks::new()?,
            values: HashMap::new(),
            joined: false,
        })
    }

    /// Replace the text in a field. If the field's mask doesn't accept the
    /// text, the field keeps its old text and we return false.
    pub fn enter<T: Into<String>>(&mut self, field: FormField, text: T) -> bool {
        let text = text.into();
        if !self.masks.accepts(field.mask(), &text) {
            tracing::debug!(field = field.name(), text = %text, "input rejected by mask");
            return false;
        }
        self.values.insert(field, text);
        true
    }

    /// Type text onto the end of a field, as if keyed in. Same rules as
    /// `enter`, applied to the resulting text.
    pub fn type_text(&mut self, field: FormField, text: &str) -> bool {
        let combined = format!("{}{}", self.value(field), text);
        self.enter(field, combined)
    }

    /// The current text of a field (blank if nothing was entered).
    pub fn value(&self, field: FormField) -> &str {
        self.values.get(&field).map(|v| v.as_str()).unwrap_or("")
    }

    pub fn joined(&self) -> bool {
        self.joined
    }

    /// Tick or untick the joined box.
    pub fn set_joined(&mut self, joined: bool) {
        self.joined = joined;
    }

    /// Blank every field and untick joined.
    pub fn clear(&mut self) {
        self.values.clear();
        self.joined = false;
    }

    /// Whether any of the given fields are blank.
    pub fn any_blank(&self, fields: &[FormField]) -> bool {
        fields.iter().any(|field| self.value(*field).trim().is_empty())
    }

    pub fn vacancy_number(&self) -> Result<VacancyNumber> {
        Ok(VacancyNumber::new(self.count(FormField::VacancyNumber)?))
    }

    pub fn salary(&self) -> Result<Decimal> {
        self.amount(FormField::Salary)
    }

    pub fn weekly_fractional_hours(&self) -> Result<u32> {
        self.count(FormField::WeeklyFractionalHours)
    }

    pub fn working_hours(&self) -> Result<u32> {
        self.count(FormField::WorkingHours)
    }

    pub fn wages_per_hour(&self) -> Result<Decimal> {
        self.amount(FormField::WagesPerHour)
    }

    /// The display number, as a signed index. Range checking is left to the
    /// roster since only it knows how many hires there are.
    pub fn display_index(&self) -> Result<i64> {
        let value = self.value(FormField::DisplayNumber);
        value.trim().parse::<i64>()
            .map_err(|_| Error::invalid_format(FormField::DisplayNumber.name(), value))
    }

    fn count(&self, field: FormField) -> Result<u32> {
        util::number::parse_count(field.name(), self.value(field))
    }

    fn amount(&self, field: FormField) -> Result<Decimal> {
        util::number::parse_amount(field.name(), self.value(field))
    }
}
