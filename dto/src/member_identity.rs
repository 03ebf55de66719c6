use crate::calendar_date::CalendarDate;
use derive_getters::Getters;
use std::fmt::{Display, Formatter};

/// What makes a person unique at the gym: their name and their date of birth.
///
/// Names are compared ignoring case, so `jane DOE` born on 1/1/1990 is the same
/// person as `Jane Doe` born on the same day.
#[derive(Debug, Clone, Getters)]
pub struct MemberIdentity {
    first_name: String,
    last_name: String,
    date_of_birth: CalendarDate,
}

impl MemberIdentity {
    pub fn new(first_name: String, last_name: String, date_of_birth: CalendarDate) -> Self {
        Self {
            first_name,
            last_name,
            date_of_birth,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Whether two names are the same, ignoring case (`Élise` is `ÉLISE`).
/// Used for people as well as for classes and instructors.
pub fn same_name(name: &str, other: &str) -> bool {
    name.to_lowercase() == other.to_lowercase()
}

impl PartialEq for MemberIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.date_of_birth == other.date_of_birth
            && same_name(&self.first_name, &other.first_name)
            && same_name(&self.last_name, &other.last_name)
    }
}

impl Eq for MemberIdentity {}

impl Display for MemberIdentity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, DOB: {}", self.full_name(), self.date_of_birth)
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    use crate::calendar_date::tests::date;

    pub const JANE_FIRST_NAME: &str = "Jane";
    pub const JANE_LAST_NAME: &str = "Doe";

    pub fn identity(first_name: &str, last_name: &str, date_of_birth: CalendarDate) -> MemberIdentity {
        MemberIdentity::new(first_name.to_owned(), last_name.to_owned(), date_of_birth)
    }

    pub fn jane_doe() -> MemberIdentity {
        identity(JANE_FIRST_NAME, JANE_LAST_NAME, date(1990, 1, 1))
    }

    pub fn john_smith() -> MemberIdentity {
        identity("John", "Smith", date(1985, 6, 15))
    }

    #[test]
    fn should_ignore_name_case() {
        assert_eq!(jane_doe(), identity("JANE", "doe", date(1990, 1, 1)));
    }

    #[test]
    fn should_ignore_case_of_accented_names() {
        assert!(same_name("Élise", "ÉLISE"));
        assert_eq!(identity("Élise", "Noël", date(1990, 1, 1)), identity("élise", "NOËL", date(1990, 1, 1)));
    }

    #[test]
    fn should_differ_by_date_of_birth() {
        assert_ne!(jane_doe(), identity(JANE_FIRST_NAME, JANE_LAST_NAME, date(1990, 1, 2)));
    }

    #[test]
    fn should_differ_by_name() {
        assert_ne!(jane_doe(), identity("Janet", JANE_LAST_NAME, date(1990, 1, 1)));
        assert_ne!(jane_doe(), identity(JANE_FIRST_NAME, "Do", date(1990, 1, 1)));
    }

    #[test]
    fn should_display_name_and_date_of_birth() {
        assert_eq!("Jane Doe, DOB: 1/1/1990", jane_doe().to_string());
    }
}
