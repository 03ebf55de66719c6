use crate::import::error::ImportError;
use crate::import::error::ImportError::{CantOpenFile, MalformedRow};
use csv::{ReaderBuilder, StringRecord};
use derive_getters::Getters;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

pub mod error;

static WHITESPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Whitespace regex should be valid."));

/// Outcome of reading a whitespace-separated list:
/// what has been imported and which rows have been turned down.
#[derive(Debug, Getters)]
pub struct ImportReport<T> {
    imported: Vec<T>,
    rejected: Vec<RejectedRow>,
}

#[derive(Debug, Getters)]
pub struct RejectedRow {
    row: String,
    error: ImportError,
}

impl<T> ImportReport<T> {
    fn new() -> Self {
        Self {
            imported: vec![],
            rejected: vec![],
        }
    }

    fn reject(&mut self, row: String, error: ImportError) {
        warn!("Rejected row `{row}`: {error}");
        self.rejected.push(RejectedRow { row, error });
    }

    pub fn render<F>(&self, title: &str, describe: F) -> String
    where
        F: Fn(&T) -> String,
    {
        let mut list = format!("{title}\n");
        for item in &self.imported {
            list.push_str(&describe(item));
            list.push('\n');
        }
        for rejected in &self.rejected {
            list.push_str(&format!("Rejected `{}`: {}\n", rejected.row, rejected.error));
        }
        list.push_str("-end of list-\n");
        list
    }
}

pub fn read_file(path: &Path) -> Result<String, ImportError> {
    std::fs::read_to_string(path).map_err(|source| {
        error!("Can't open file `{}`.\n{source:#?}", path.display());
        CantOpenFile {
            path: path.display().to_string(),
            source,
        }
    })
}

/// Read each non-blank line as a row of tokens separated by any amount of whitespace.
/// Rows that don't have `expected_tokens` tokens, or that `parse` refuses, are rejected;
/// the others are kept in the order they were read.
pub fn read_rows<T, F>(content: &str, expected_tokens: usize, mut parse: F) -> ImportReport<T>
where
    F: FnMut(&StringRecord) -> Result<T, ImportError>,
{
    let normalized = content
        .lines()
        .map(|line| WHITESPACES.replace_all(line.trim(), " "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    let mut reader = ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(normalized.as_bytes());

    let mut report = ImportReport::new();
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                report.reject(String::new(), e.into());
                continue;
            }
        };

        let row = record.iter().collect::<Vec<_>>().join(" ");
        if record.len() != expected_tokens {
            let error = MalformedRow {
                expected: expected_tokens,
                found: record.len(),
            };
            report.reject(row, error);
            continue;
        }

        match parse(&record) {
            Ok(item) => report.imported.push(item),
            Err(e) => report.reject(row, e),
        }
    }

    report
}

pub(crate) mod date_format {
    use dto::calendar_date::CalendarDate;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<CalendarDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CalendarDate::parse(&s).map_err(serde::de::Error::custom)
    }
}

pub(crate) mod location_format {
    use crate::error::GymError::UnknownLocation;
    use dto::location::Location;
    use serde::{Deserialize, Deserializer, de};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Location, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Location::from_town(&s).ok_or_else(|| de::Error::custom(UnknownLocation(s)))
    }
}

pub(crate) mod time_format {
    use crate::error::GymError::UnknownTimeOfDay;
    use dto::time_of_day::TimeOfDay;
    use serde::{Deserialize, Deserializer, de};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<TimeOfDay, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        TimeOfDay::from_token(&s).ok_or_else(|| de::Error::custom(UnknownTimeOfDay(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::error::ImportError::InvalidRow;

    fn tokens(content: &str, expected_tokens: usize) -> ImportReport<Vec<String>> {
        read_rows(content, expected_tokens, |record| {
            if record.iter().any(|token| token == "bad") {
                return Err(InvalidRow("bad token".to_owned()));
            }
            Ok(record.iter().map(str::to_owned).collect())
        })
    }

    #[test]
    fn should_collapse_whitespaces_and_skip_blank_lines() {
        let report = tokens("a  b\tc\n\n   \n  d e   f  \r\n", 3);

        assert_eq!(
            &vec![vec!["a", "b", "c"], vec!["d", "e", "f"]],
            report.imported()
        );
        assert!(report.rejected().is_empty());
    }

    #[test]
    fn should_reject_rows_with_wrong_token_count() {
        let report = tokens("a b\na b c\na b c d", 3);

        assert_eq!(1, report.imported().len());
        assert_eq!(2, report.rejected().len());
        assert_eq!("a b", report.rejected()[0].row());
        assert!(matches!(
            report.rejected()[0].error(),
            MalformedRow {
                expected: 3,
                found: 2
            }
        ));
        assert!(matches!(
            report.rejected()[1].error(),
            MalformedRow {
                expected: 3,
                found: 4
            }
        ));
    }

    #[test]
    fn should_reject_rows_refused_by_parser() {
        let report = tokens("a bad c\nd e f", 3);

        assert_eq!(&vec![vec!["d", "e", "f"]], report.imported());
        assert!(matches!(report.rejected()[0].error(), InvalidRow(_)));
    }

    #[test]
    fn should_keep_quotes_as_regular_characters() {
        let report = tokens("\"a b c", 3);

        assert_eq!(&vec![vec!["\"a", "b", "c"]], report.imported());
    }

    #[test]
    fn should_render_imported_and_rejected_rows() {
        let report = tokens("a b c\nx y", 3);

        assert_eq!(
            "-loaded-\na b c\nRejected `x y`: Expected 3 tokens, found 2.\n-end of list-\n",
            report.render("-loaded-", |tokens| tokens.join(" "))
        );
    }

    #[test]
    fn should_fail_to_read_missing_file() {
        let result = read_file(Path::new("this/file/does/not/exist.txt"));

        assert!(matches!(result, Err(CantOpenFile { .. })));
    }
}
