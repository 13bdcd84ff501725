//! Joining dates are carried around as text (that's what gets displayed and
//! what termination blanks out), but whenever one comes in from the outside
//! we make sure it's a real dd/mm/yyyy calendar date.

use chrono::NaiveDate;
use crate::error::{Error, Result};

/// The chrono format joining dates are written in.
pub const JOINING_DATE_FORMAT: &str = "%d/%m/%Y";

/// The length of a complete joining date (dd/mm/yyyy).
pub const JOINING_DATE_LEN: usize = 10;

/// Parse a complete dd/mm/yyyy joining date.
///
/// chrono happily accepts single-digit days and months, so we check the shape
/// ourselves first.
pub fn parse_joining_date(value: &str) -> Result<NaiveDate> {
    let shaped = value.len() == JOINING_DATE_LEN &&
        value.char_indices().all(|(i, c)| match i {
            2 | 5 => c == '/',
            _ => c.is_ascii_digit(),
        });
    if !shaped {
        Err(Error::invalid_format("joining date", value))?;
    }
    NaiveDate::parse_from_str(value, JOINING_DATE_FORMAT)
        .map_err(|_| Error::invalid_format("joining date", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn parses_dates() {
        let date = parse_joining_date("05/11/2024").unwrap();
        assert_eq!((date.day(), date.month(), date.year()), (5, 11, 2024));
        assert!(parse_joining_date("29/02/2024").is_ok());

        for bad in &["29/02/2023", "31/04/2024", "00/01/2024", "12/13/2024", "5/11/2024", "05-11-2024", "05/11/24", "", "05/11/2024 "] {
            assert_eq!(parse_joining_date(bad), Err(Error::invalid_format("joining date", *bad)));
        }
    }
}
