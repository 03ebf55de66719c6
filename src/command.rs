use crate::attendance::AttendanceRequest;
use crate::member::membership::Membership;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("{0} is an invalid command!")]
    InvalidCommand(String),
    #[error("Missing data tokens for {command}: expected {expected}, found {found}.")]
    MissingArguments {
        command: String,
        expected: usize,
        found: usize,
    },
}

/// One line typed at the front desk.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `A`, `AF` or `AP first last dob location`
    Enroll {
        first_name: String,
        last_name: String,
        date_of_birth: String,
        location: String,
        membership: Membership,
    },
    /// `R first last dob`
    Cancel {
        first_name: String,
        last_name: String,
        date_of_birth: String,
    },
    PrintMembers,
    PrintByCounty,
    PrintByName,
    PrintByExpirationDate,
    PrintWithFees,
    PrintSchedule,
    LoadSchedule,
    LoadMembers,
    /// `C class instructor location first last dob`, and the same for the others
    CheckIn(AttendanceRequest),
    CheckInGuest(AttendanceRequest),
    CheckOut(AttendanceRequest),
    CheckOutGuest(AttendanceRequest),
    Quit,
}

const ENROLL_TOKENS: usize = 4;
const CANCEL_TOKENS: usize = 3;
const ATTENDANCE_TOKENS: usize = 6;

/// Tokens following the command name, checked for their count.
/// Extra tokens are ignored.
fn arguments(name: &str, tokens: &[&str], expected: usize) -> Result<Vec<String>, CommandError> {
    if tokens.len() < expected {
        return Err(CommandError::MissingArguments {
            command: name.to_owned(),
            expected,
            found: tokens.len(),
        });
    }
    Ok(tokens[..expected].iter().map(|t| (*t).to_owned()).collect())
}

fn enroll(name: &str, tokens: &[&str], membership: Membership) -> Result<Command, CommandError> {
    let [first_name, last_name, date_of_birth, location]: [String; ENROLL_TOKENS] =
        arguments(name, tokens, ENROLL_TOKENS)?
            .try_into()
            .map_err(|_| CommandError::InvalidCommand(name.to_owned()))?;
    Ok(Command::Enroll {
        first_name,
        last_name,
        date_of_birth,
        location,
        membership,
    })
}

fn attendance(name: &str, tokens: &[&str]) -> Result<AttendanceRequest, CommandError> {
    let [class_name, instructor, location, first_name, last_name, date_of_birth]: [String;
        ATTENDANCE_TOKENS] = arguments(name, tokens, ATTENDANCE_TOKENS)?
        .try_into()
        .map_err(|_| CommandError::InvalidCommand(name.to_owned()))?;
    Ok(AttendanceRequest::new(
        class_name,
        instructor,
        location,
        first_name,
        last_name,
        date_of_birth,
    ))
}

impl FromStr for Command {
    type Err = CommandError;

    /// Tokens are separated by any run of whitespace. Command names are case-sensitive.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, tokens)) = tokens.split_first() else {
            return Err(CommandError::InvalidCommand(String::new()));
        };

        match name {
            "A" => enroll(name, tokens, Membership::Standard),
            "AF" => enroll(name, tokens, Membership::family()),
            "AP" => enroll(name, tokens, Membership::premium()),
            "R" => {
                let [first_name, last_name, date_of_birth]: [String; CANCEL_TOKENS] =
                    arguments(name, tokens, CANCEL_TOKENS)?
                        .try_into()
                        .map_err(|_| CommandError::InvalidCommand(name.to_owned()))?;
                Ok(Command::Cancel {
                    first_name,
                    last_name,
                    date_of_birth,
                })
            }
            "P" => Ok(Command::PrintMembers),
            "PC" => Ok(Command::PrintByCounty),
            "PN" => Ok(Command::PrintByName),
            "PD" => Ok(Command::PrintByExpirationDate),
            "PF" => Ok(Command::PrintWithFees),
            "S" => Ok(Command::PrintSchedule),
            "LS" => Ok(Command::LoadSchedule),
            "LM" => Ok(Command::LoadMembers),
            "C" => attendance(name, tokens).map(Command::CheckIn),
            "CG" => attendance(name, tokens).map(Command::CheckInGuest),
            "D" => attendance(name, tokens).map(Command::CheckOut),
            "DG" => attendance(name, tokens).map(Command::CheckOutGuest),
            "Q" => Ok(Command::Quit),
            other => Err(CommandError::InvalidCommand(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    fn pilates_request() -> AttendanceRequest {
        AttendanceRequest::new(
            "Pilates".to_owned(),
            "Jennifer".to_owned(),
            "bridgewater".to_owned(),
            "Jane".to_owned(),
            "Doe".to_owned(),
            "1/1/1990".to_owned(),
        )
    }

    #[parameterized(
        line = {"P", "PC", "PN", "PD", "PF", "S", "LS", "LM", "Q", "  Q  "},
        expected = {Command::PrintMembers, Command::PrintByCounty, Command::PrintByName, Command::PrintByExpirationDate, Command::PrintWithFees, Command::PrintSchedule, Command::LoadSchedule, Command::LoadMembers, Command::Quit, Command::Quit}
    )]
    fn should_parse_command_without_arguments(line: &str, expected: Command) {
        assert_eq!(Ok(expected), line.parse::<Command>());
    }

    #[parameterized(
        line = {"A Jane Doe 1/1/1990 EDISON", "AF Jane Doe 1/1/1990 EDISON", "AP\tJane  Doe 1/1/1990 EDISON"},
        membership = {Membership::Standard, Membership::family(), Membership::premium()}
    )]
    fn should_parse_enrollment(line: &str, membership: Membership) {
        let expected = Command::Enroll {
            first_name: "Jane".to_owned(),
            last_name: "Doe".to_owned(),
            date_of_birth: "1/1/1990".to_owned(),
            location: "EDISON".to_owned(),
            membership,
        };
        assert_eq!(Ok(expected), line.parse::<Command>());
    }

    #[parameterized(
        line = {"C Pilates Jennifer bridgewater Jane Doe 1/1/1990", "CG Pilates Jennifer bridgewater Jane Doe 1/1/1990", "D Pilates Jennifer bridgewater Jane Doe 1/1/1990", "DG Pilates Jennifer bridgewater Jane Doe 1/1/1990"},
        expected = {Command::CheckIn(pilates_request()), Command::CheckInGuest(pilates_request()), Command::CheckOut(pilates_request()), Command::CheckOutGuest(pilates_request())}
    )]
    fn should_parse_attendance(line: &str, expected: Command) {
        assert_eq!(Ok(expected), line.parse::<Command>());
    }

    #[test]
    fn should_parse_cancellation() {
        assert_eq!(
            Ok(Command::Cancel {
                first_name: "Jane".to_owned(),
                last_name: "Doe".to_owned(),
                date_of_birth: "1/1/1990".to_owned(),
            }),
            "R Jane Doe 1/1/1990".parse::<Command>()
        );
    }

    #[parameterized(
        line = {"A Jane Doe 1/1/1990", "R Jane", "C Pilates Jennifer bridgewater Jane Doe"},
        expected_error = {
            CommandError::MissingArguments { command: "A".to_owned(), expected: 4, found: 3 },
            CommandError::MissingArguments { command: "R".to_owned(), expected: 3, found: 1 },
            CommandError::MissingArguments { command: "C".to_owned(), expected: 6, found: 5 }
        }
    )]
    fn should_report_missing_arguments(line: &str, expected_error: CommandError) {
        assert_eq!(Err(expected_error), line.parse::<Command>());
    }

    #[parameterized(
        line = {"X", "p", "ADD Jane Doe 1/1/1990 EDISON"},
        name = {"X", "p", "ADD"}
    )]
    fn should_reject_unknown_command(line: &str, name: &str) {
        assert_eq!(
            Err(CommandError::InvalidCommand(name.to_owned())),
            line.parse::<Command>()
        );
    }

    #[test]
    fn should_describe_invalid_command() {
        assert_eq!(
            "X is an invalid command!",
            CommandError::InvalidCommand("X".to_owned()).to_string()
        );
    }
}
