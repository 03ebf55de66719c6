use crate::error::GymError::{
    AlreadyCheckedIn, GuestAlreadyCheckedIn, GuestNotCheckedIn, NotCheckedIn,
};
use crate::error::Result;
use crate::fitness_class::roster::Roster;
use derive_getters::Getters;
use dto::location::Location;
use dto::member_identity::{MemberIdentity, same_name};
use dto::time_of_day::TimeOfDay;
use std::fmt::{Display, Formatter};

pub mod import_from_file;
pub mod roster;
pub mod schedule;

/// A class given by an instructor at a location and time slot,
/// with the members and the guests who checked in.
///
/// A guest is recorded under the identity of the member who brought them.
#[derive(Debug, Clone, Getters, PartialEq)]
pub struct FitnessClass {
    name: String,
    instructor: String,
    time: TimeOfDay,
    location: Location,
    members: Roster,
    guests: Roster,
}

impl FitnessClass {
    pub fn new(name: String, instructor: String, time: TimeOfDay, location: Location) -> Self {
        Self {
            name,
            instructor,
            time,
            location,
            members: Roster::default(),
            guests: Roster::default(),
        }
    }

    /// Same name, instructor and location, whatever the time.
    /// Names and instructors are compared ignoring case.
    pub fn is(&self, name: &str, instructor: &str, location: Location) -> bool {
        same_name(&self.name, name)
            && same_name(&self.instructor, instructor)
            && self.location == location
    }

    /// Whether both are the same class, time aside.
    pub fn matches_ignoring_time(&self, other: &FitnessClass) -> bool {
        self.is(&other.name, &other.instructor, other.location)
    }

    /// Whether both are the same class at the same time.
    pub fn matches_exactly(&self, other: &FitnessClass) -> bool {
        self.matches_ignoring_time(other) && self.time == other.time
    }

    pub fn find_member(&self, member: &MemberIdentity) -> Option<usize> {
        self.members.find(member)
    }

    /// Find the guest brought by `sponsor`.
    pub fn find_guest(&self, sponsor: &MemberIdentity) -> Option<usize> {
        self.guests.find(sponsor)
    }

    pub fn check_in(&mut self, member: MemberIdentity) -> Result<()> {
        if !self.members.add(member.clone()) {
            return Err(AlreadyCheckedIn {
                member,
                class_name: self.name.clone(),
            });
        }

        debug!("{member} checked in {}", self.summary());
        Ok(())
    }

    pub fn check_out(&mut self, member: &MemberIdentity) -> Result<()> {
        match self.members.remove(member) {
            Some(member) => {
                debug!("{member} checked out of {}", self.summary());
                Ok(())
            }
            None => Err(NotCheckedIn {
                member: member.clone(),
                class_name: self.name.clone(),
            }),
        }
    }

    pub fn check_in_guest(&mut self, sponsor: MemberIdentity) -> Result<()> {
        if !self.guests.add(sponsor.clone()) {
            return Err(GuestAlreadyCheckedIn {
                member: sponsor,
                class_name: self.name.clone(),
            });
        }

        debug!("Guest of {sponsor} checked in {}", self.summary());
        Ok(())
    }

    pub fn check_out_guest(&mut self, sponsor: &MemberIdentity) -> Result<()> {
        match self.guests.remove(sponsor) {
            Some(sponsor) => {
                debug!("Guest of {sponsor} checked out of {}", self.summary());
                Ok(())
            }
            None => Err(GuestNotCheckedIn {
                member: sponsor.clone(),
                class_name: self.name.clone(),
            }),
        }
    }

    /// `NAME - INSTRUCTOR, TIME, TOWN`
    pub fn summary(&self) -> String {
        format!(
            "{} - {}, {}, {}",
            self.name.to_uppercase(),
            self.instructor.to_uppercase(),
            self.time,
            self.location.town()
        )
    }
}

impl Display for FitnessClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.summary())?;
        if !self.members.is_empty() {
            write!(f, "\n- Participants -")?;
            for member in self.members.iter() {
                write!(f, "\n   {member}")?;
            }
        }
        if !self.guests.is_empty() {
            write!(f, "\n- Guests -")?;
            for sponsor in self.guests.iter() {
                write!(f, "\n   {sponsor}")?;
            }
        }
        Ok(())
    }
}
