use chrono::{Datelike, Local, Months, NaiveDate};
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;
use std::str::FromStr;
use thiserror::Error;

const MONTHS_IN_YEAR: u32 = 12;

/// The raw input could not be read as a real Gregorian date.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("{0}: invalid calendar date!")]
pub struct InvalidDate(pub String);

/// A validated Gregorian date.
///
/// Dates are read and written as `MM/dd/yyyy`. Leading zeros are optional when reading
/// and never written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    date: NaiveDate,
}

impl CalendarDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, InvalidDate> {
        if !is_valid_calendar_date(year, month, day) {
            return Err(InvalidDate(format!("{month}/{day}/{year}")));
        }

        NaiveDate::from_ymd_opt(year, month, day)
            .map(|date| Self { date })
            .ok_or_else(|| InvalidDate(format!("{month}/{day}/{year}")))
    }

    /// Parse a `MM/dd/yyyy` string.
    pub fn parse(input: &str) -> Result<Self, InvalidDate> {
        let invalid = || InvalidDate(input.to_owned());
        let mut parts = input.trim().split('/');
        let (Some(month), Some(day), Some(year), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        if !is_number(month, 1..=2) || !is_number(day, 1..=2) || !is_number(year, 4..=4) {
            return Err(invalid());
        }

        let month = month.parse::<u32>().map_err(|_| invalid())?;
        let day = day.parse::<u32>().map_err(|_| invalid())?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;

        Self::from_ymd(year, month, day).map_err(|_| invalid())
    }

    pub fn today() -> Self {
        Self {
            date: Local::now().date_naive(),
        }
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Move the date `months` months forward.
    /// When the target month is shorter, the day is clamped to its last day (01/31 -> 02/28).
    pub fn add_months(&mut self, months: u32) {
        self.date = self
            .date
            .checked_add_months(Months::new(months))
            .unwrap_or(NaiveDate::MAX);
    }

    pub fn add_years(&mut self, years: u32) {
        self.add_months(years.saturating_mul(MONTHS_IN_YEAR));
    }

    /// Whole years elapsed from `earlier` to `self`.
    /// A year only counts once its anniversary has been reached.
    pub fn years_since(&self, earlier: &CalendarDate) -> i32 {
        let years = self.year() - earlier.year();
        if (self.month(), self.day()) < (earlier.month(), earlier.day()) {
            years - 1
        } else {
            years
        }
    }
}

impl FromStr for CalendarDate {
    type Err = InvalidDate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.month(), self.day(), self.year())
    }
}

/// Only ASCII digits, with a number of them in `digits`.
fn is_number(field: &str, digits: RangeInclusive<usize>) -> bool {
    digits.contains(&field.len()) && field.bytes().all(|b| b.is_ascii_digit())
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn is_valid_calendar_date(year: i32, month: u32, day: u32) -> bool {
    if !(1..=MONTHS_IN_YEAR).contains(&month) || day == 0 {
        return false;
    }

    let days_in_month = match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    };

    day <= days_in_month
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    /// Shortcut for building a date that is known to be valid.
    pub fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).unwrap()
    }

    #[parameterized(
        input = {"01/01/1990", "1/1/1990", "2/29/2000", "2/29/2024", "12/31/1999", " 7/4/1976 "},
        expected = {(1990, 1, 1), (1990, 1, 1), (2000, 2, 29), (2024, 2, 29), (1999, 12, 31), (1976, 7, 4)}
    )]
    fn should_parse(input: &str, expected: (i32, u32, u32)) {
        let (year, month, day) = expected;
        assert_eq!(Ok(date(year, month, day)), CalendarDate::parse(input));
    }

    #[parameterized(
        input = {"2/29/1900", "2/29/2023", "13/1/2000", "0/10/2000", "4/31/2000", "1/0/2000", "1/32/2000", "1-1-2000", "1/1", "1/1/2000/1", "a/b/c", "", "+1/1/1990", "1/+1/1990", "1/1/90", "1/1/+990", "001/1/1990", "1/1/19900"}
    )]
    fn should_not_parse(input: &str) {
        assert_eq!(
            Err(InvalidDate(input.to_owned())),
            CalendarDate::parse(input)
        );
    }

    #[parameterized(
        year = {1900, 2000, 2023, 2024, 2100, 2400},
        expected = {false, true, false, true, false, true}
    )]
    fn should_detect_leap_year(year: i32, expected: bool) {
        assert_eq!(expected, is_leap_year(year));
    }

    #[parameterized(
        today = {date(2024, 10, 17), date(2024, 10, 16), date(2024, 10, 18), date(2024, 1, 1)},
        expected = {18, 17, 18, 17}
    )]
    fn should_count_whole_years(today: CalendarDate, expected: i32) {
        let birthdate = date(2006, 10, 17);
        assert_eq!(expected, today.years_since(&birthdate));
    }

    #[test]
    fn leap_day_birthday_is_reached_on_first_of_march() {
        let birthdate = date(2004, 2, 29);
        assert_eq!(17, date(2022, 2, 28).years_since(&birthdate));
        assert_eq!(18, date(2022, 3, 1).years_since(&birthdate));
    }

    #[parameterized(
        start = {date(2024, 1, 15), date(2024, 11, 30), date(2024, 1, 31), date(2023, 11, 30)},
        months = {3, 3, 1, 3},
        expected = {date(2024, 4, 15), date(2025, 2, 28), date(2024, 2, 29), date(2024, 2, 29)}
    )]
    fn should_add_months(start: CalendarDate, months: u32, expected: CalendarDate) {
        let mut result = start;
        result.add_months(months);
        assert_eq!(expected, result);
    }

    #[test]
    fn should_add_years() {
        let mut result = date(2024, 2, 29);
        result.add_years(1);
        assert_eq!(date(2025, 2, 28), result);

        let mut result = date(2024, 10, 17);
        result.add_years(1);
        assert_eq!(date(2025, 10, 17), result);
    }

    #[parameterized(
        first = {date(2024, 1, 1), date(2024, 2, 1), date(2025, 1, 1), date(2024, 1, 2)},
        second = {date(2024, 1, 1), date(2024, 1, 31), date(2024, 12, 31), date(2024, 1, 1)},
        expected = {std::cmp::Ordering::Equal, std::cmp::Ordering::Greater, std::cmp::Ordering::Greater, std::cmp::Ordering::Greater}
    )]
    fn should_compare_dates(first: CalendarDate, second: CalendarDate, expected: std::cmp::Ordering) {
        assert_eq!(expected, first.cmp(&second));
        assert_eq!(expected.reverse(), second.cmp(&first));
    }

    #[test]
    fn should_display_without_leading_zeros() {
        assert_eq!("1/5/1990", date(1990, 1, 5).to_string());
        assert_eq!("12/25/2024", date(2024, 12, 25).to_string());
    }
}
