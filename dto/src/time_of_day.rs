use std::fmt::{Display, Formatter};

/// The time slots classes are scheduled at.
/// Two classes sharing a slot conflict for a member attending both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 3] = [TimeOfDay::Morning, TimeOfDay::Afternoon, TimeOfDay::Evening];

    pub fn name(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "MORNING",
            TimeOfDay::Afternoon => "AFTERNOON",
            TimeOfDay::Evening => "EVENING",
        }
    }

    /// Canonical clock time of the slot.
    pub fn clock_time(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "9:30",
            TimeOfDay::Afternoon => "14:00",
            TimeOfDay::Evening => "18:30",
        }
    }

    /// 12-hour spellings of the slot, as found in schedules.
    fn hour_labels(&self) -> &'static [&'static str] {
        match self {
            TimeOfDay::Morning => &["9AM", "9:30AM"],
            TimeOfDay::Afternoon => &["2PM", "2:00PM"],
            TimeOfDay::Evening => &["6:30PM"],
        }
    }

    /// Accepts the slot name, its clock time, or one of its 12-hour spellings, ignoring case.
    pub fn from_token(token: &str) -> Option<TimeOfDay> {
        let token = token.trim();
        Self::ALL.into_iter().find(|time| {
            time.name().eq_ignore_ascii_case(token)
                || time.clock_time() == token
                || time
                    .hour_labels()
                    .iter()
                    .any(|label| label.eq_ignore_ascii_case(token))
        })
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.clock_time())
    }
}
