use dto::calendar_date::{CalendarDate, InvalidDate};
use dto::location::Location;
use dto::member_identity::MemberIdentity;
use thiserror::Error;

pub type Result<T, E = GymError> = std::result::Result<T, E>;

/// Every way a gym operation can be turned down.
/// The message of each variant is meant to be shown as is to the desk clerk.
#[derive(Debug, Error, PartialEq)]
pub enum GymError {
    #[error(transparent)]
    InvalidDate(#[from] InvalidDate),
    #[error("DOB {0}: must be 18 or older to join!")]
    UnderAge(CalendarDate),
    #[error("{0} - invalid location.")]
    UnknownLocation(String),
    #[error("{0} - invalid time of day.")]
    UnknownTimeOfDay(String),

    #[error("{} is already in the database.", .0.full_name())]
    DuplicateMember(MemberIdentity),
    #[error("{0} is already in the schedule.")]
    DuplicateClass(String),

    #[error("{0} is not in the database.")]
    MemberNotFound(MemberIdentity),
    #[error("{0} - class does not exist.")]
    UnknownClass(String),
    #[error("{0} - instructor does not exist.")]
    UnknownInstructor(String),
    #[error("{class_name} class by {instructor} does not exist at {}.", .location.town())]
    ClassNotFound {
        class_name: String,
        instructor: String,
        location: Location,
    },

    #[error("{0} membership expired.")]
    MembershipExpired(MemberIdentity),
    #[error("{} checking in {} - standard membership location restriction.", .member.full_name(), .location.town())]
    LocationRestricted {
        member: MemberIdentity,
        location: Location,
    },
    #[error("{} Guest checking in {} - guest location restriction.", .member.full_name(), .location.town())]
    GuestLocationRestricted {
        member: MemberIdentity,
        location: Location,
    },

    #[error("{} has already checked in {class_name}.", .member.full_name())]
    AlreadyCheckedIn {
        member: MemberIdentity,
        class_name: String,
    },
    #[error("{} (guest) has already checked in {class_name}.", .member.full_name())]
    GuestAlreadyCheckedIn {
        member: MemberIdentity,
        class_name: String,
    },
    #[error("{} did not check in {class_name}.", .member.full_name())]
    NotCheckedIn {
        member: MemberIdentity,
        class_name: String,
    },
    #[error("{} (guest) did not check in {class_name}.", .member.full_name())]
    GuestNotCheckedIn {
        member: MemberIdentity,
        class_name: String,
    },
    #[error("{class_name} time conflict - {} has already checked in {conflicting_class}.", .member.full_name())]
    TimeConflict {
        member: MemberIdentity,
        class_name: String,
        conflicting_class: String,
    },

    #[error("{} ran out of guest passes.", .0.full_name())]
    InsufficientGuestPasses(MemberIdentity),
    #[error("{} - standard membership, guests are not allowed.", .0.full_name())]
    GuestsNotAllowed(MemberIdentity),
}
