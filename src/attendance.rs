//! Check-in and check-out of members and their guests.
//!
//! Every operation goes through the same checks, in this order, and stops at the first failure:
//! 1. the class name, the instructor and the location are known;
//! 2. a class matches all three;
//! 3. the date of birth is a real date;
//! 4. the member is in the database;
//! 5. their membership has not expired.
//!
//! Each operation then applies its own rules. Nothing is changed unless every check passed.

use crate::error::GymError::{
    ClassNotFound, GuestAlreadyCheckedIn, GuestLocationRestricted, GuestNotCheckedIn,
    GuestsNotAllowed, InsufficientGuestPasses, LocationRestricted, MemberNotFound,
    MembershipExpired, TimeConflict, UnknownClass, UnknownInstructor, UnknownLocation,
};
use crate::error::{GymError, Result};
use crate::fitness_class::FitnessClass;
use crate::fitness_class::schedule::ClassSchedule;
use crate::member::Member;
use crate::member::members::MemberDatabase;
use crate::member::membership::Membership;
use derive_getters::Getters;
use dto::calendar_date::CalendarDate;
use dto::location::Location;
use dto::member_identity::MemberIdentity;
use std::fmt::{Display, Formatter};

/// What the desk clerk types in to check someone in or out.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct AttendanceRequest {
    class_name: String,
    instructor: String,
    location: String,
    first_name: String,
    last_name: String,
    date_of_birth: String,
}

impl AttendanceRequest {
    pub fn new(
        class_name: String,
        instructor: String,
        location: String,
        first_name: String,
        last_name: String,
        date_of_birth: String,
    ) -> Self {
        Self {
            class_name,
            instructor,
            location,
            first_name,
            last_name,
            date_of_birth,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Attendance {
    CheckedIn {
        member: MemberIdentity,
        class: String,
    },
    GuestCheckedIn {
        member: MemberIdentity,
        class: String,
        guest_passes_left: u32,
    },
    CheckedOut {
        member: MemberIdentity,
        class: String,
    },
    GuestCheckedOut {
        member: MemberIdentity,
        class: String,
        guest_passes_left: u32,
    },
}

impl Display for Attendance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Attendance::CheckedIn { member, class } => {
                write!(f, "{} checked in {class}.", member.full_name())
            }
            Attendance::GuestCheckedIn {
                member,
                class,
                guest_passes_left,
            } => write!(
                f,
                "{} (guest) checked in {class}. Guest-pass remaining: {guest_passes_left}.",
                member.full_name()
            ),
            Attendance::CheckedOut { member, class } => {
                write!(f, "{} is done with {class}.", member.full_name())
            }
            Attendance::GuestCheckedOut {
                member,
                class,
                guest_passes_left,
            } => write!(
                f,
                "{} (guest) is done with {class}. Guest-pass remaining: {guest_passes_left}.",
                member.full_name()
            ),
        }
    }
}

/// Class and member a request points to, once the common checks passed.
struct Resolved {
    class_index: usize,
    member: Member,
}

fn resolve(
    members: &MemberDatabase,
    schedule: &ClassSchedule,
    request: &AttendanceRequest,
    today: CalendarDate,
) -> Result<Resolved> {
    if !schedule.has_class_name(&request.class_name) {
        return Err(UnknownClass(request.class_name.clone()));
    }
    if !schedule.has_instructor(&request.instructor) {
        return Err(UnknownInstructor(request.instructor.clone()));
    }
    let location = Location::from_town(&request.location)
        .ok_or_else(|| UnknownLocation(request.location.clone()))?;

    let class_index = schedule
        .index_of(&request.class_name, &request.instructor, location)
        .ok_or_else(|| ClassNotFound {
            class_name: request.class_name.clone(),
            instructor: request.instructor.clone(),
            location,
        })?;

    let date_of_birth = CalendarDate::parse(&request.date_of_birth)?;
    let identity = MemberIdentity::new(
        request.first_name.trim().to_owned(),
        request.last_name.trim().to_owned(),
        date_of_birth,
    );
    let member = members
        .find_member(&identity)
        .ok_or_else(|| MemberNotFound(identity.clone()))?;
    if member.is_expired(today) {
        return Err(MembershipExpired(member.identity().clone()));
    }

    Ok(Resolved {
        class_index,
        member: member.clone(),
    })
}

/// The member bringing a guest, to spend or give back a pass.
fn find_sponsor<'a>(members: &'a mut MemberDatabase, identity: &MemberIdentity) -> Result<&'a mut Member> {
    members
        .find_member_mut(identity)
        .ok_or_else(|| MemberNotFound(identity.clone()))
}

/// Another class, at the same time as `class`, that `member` already attends.
/// Classes that only differ from `class` by their time are not considered.
pub fn find_time_conflict<'a>(
    schedule: &'a ClassSchedule,
    class: &FitnessClass,
    member: &MemberIdentity,
) -> Option<&'a FitnessClass> {
    schedule
        .iter()
        .filter(|other| !other.matches_ignoring_time(class))
        .find(|other| other.time() == class.time() && other.find_member(member).is_some())
}

pub fn check_in_member(
    members: &MemberDatabase,
    schedule: &mut ClassSchedule,
    request: &AttendanceRequest,
    today: CalendarDate,
) -> Result<Attendance> {
    let Resolved { class_index, member } = resolve(members, schedule, request, today)?;
    let identity = member.identity().clone();
    let class = &schedule[class_index];

    // Family and premium members may train anywhere.
    if *member.membership() == Membership::Standard && member.location() != class.location() {
        return Err(LocationRestricted {
            member: identity,
            location: *class.location(),
        });
    }
    if class.find_member(&identity).is_some() {
        return Err(GymError::AlreadyCheckedIn {
            member: identity,
            class_name: class.name().clone(),
        });
    }
    if let Some(conflicting_class) = find_time_conflict(schedule, class, &identity) {
        return Err(TimeConflict {
            member: identity,
            class_name: class.name().clone(),
            conflicting_class: conflicting_class.name().clone(),
        });
    }

    let class = &mut schedule[class_index];
    class.check_in(identity.clone())?;
    info!("{identity} checked in {}", class.summary());
    Ok(Attendance::CheckedIn {
        member: identity,
        class: class.summary(),
    })
}

/// The guest is recorded under the identity of the member bringing them,
/// who spends one guest pass.
pub fn check_in_guest(
    members: &mut MemberDatabase,
    schedule: &mut ClassSchedule,
    request: &AttendanceRequest,
    today: CalendarDate,
) -> Result<Attendance> {
    let Resolved { class_index, member } = resolve(members, schedule, request, today)?;
    let identity = member.identity().clone();
    let class = &schedule[class_index];

    match member.membership().guest_passes() {
        None => return Err(GuestsNotAllowed(identity)),
        Some(0) => return Err(InsufficientGuestPasses(identity)),
        Some(_) => {}
    }
    // Guests stay at their sponsor's home location, even when the sponsor may train elsewhere.
    if member.location() != class.location() {
        return Err(GuestLocationRestricted {
            member: identity,
            location: *class.location(),
        });
    }
    if class.find_guest(&identity).is_some() {
        return Err(GuestAlreadyCheckedIn {
            member: identity,
            class_name: class.name().clone(),
        });
    }

    let sponsor = find_sponsor(members, &identity)?;
    let class = &mut schedule[class_index];
    class.check_in_guest(identity.clone())?;
    let guest_passes_left = sponsor.use_guest_pass()?;
    info!("Guest of {identity} checked in {}", class.summary());
    Ok(Attendance::GuestCheckedIn {
        member: identity,
        class: class.summary(),
        guest_passes_left,
    })
}

pub fn check_out_member(
    members: &MemberDatabase,
    schedule: &mut ClassSchedule,
    request: &AttendanceRequest,
    today: CalendarDate,
) -> Result<Attendance> {
    let Resolved { class_index, member } = resolve(members, schedule, request, today)?;
    let identity = member.identity().clone();

    let class = &mut schedule[class_index];
    class.check_out(&identity)?;
    info!("{identity} checked out of {}", class.summary());
    Ok(Attendance::CheckedOut {
        member: identity,
        class: class.name().clone(),
    })
}

/// The sponsor gets their guest pass back.
pub fn check_out_guest(
    members: &mut MemberDatabase,
    schedule: &mut ClassSchedule,
    request: &AttendanceRequest,
    today: CalendarDate,
) -> Result<Attendance> {
    let Resolved { class_index, member } = resolve(members, schedule, request, today)?;
    let identity = member.identity().clone();

    if !member.membership().is_guest_capable() {
        return Err(GuestsNotAllowed(identity));
    }
    let class = &mut schedule[class_index];
    if class.find_guest(&identity).is_none() {
        return Err(GuestNotCheckedIn {
            member: identity,
            class_name: class.name().clone(),
        });
    }

    let sponsor = find_sponsor(members, &identity)?;
    class.check_out_guest(&identity)?;
    let guest_passes_left = sponsor.return_guest_pass()?;
    info!("Guest of {identity} checked out of {}", class.summary());
    Ok(Attendance::GuestCheckedOut {
        member: identity,
        class: class.name().clone(),
        guest_passes_left,
    })
}
