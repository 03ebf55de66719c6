use crate::error::GymError::{
    GuestsNotAllowed, InsufficientGuestPasses, InvalidDate, UnderAge, UnknownLocation,
};
use crate::error::Result;
use crate::member::membership::{Fee, Membership};
use derive_getters::Getters;
use dto::calendar_date::{self, CalendarDate};
use dto::location::Location;
use dto::member_identity::MemberIdentity;

pub mod import_from_file;
pub mod members;
pub mod membership;

pub const MINIMUM_AGE: i32 = 18;

/// A gym member: who they are, where they signed up, until when, and at which tier.
#[derive(Debug, Clone, Getters, PartialEq)]
pub struct Member {
    identity: MemberIdentity,
    expiration_date: CalendarDate,
    location: Location,
    membership: Membership,
}

impl Member {
    pub fn new(
        identity: MemberIdentity,
        expiration_date: CalendarDate,
        location: Location,
        membership: Membership,
    ) -> Self {
        Self {
            identity,
            expiration_date,
            location,
            membership,
        }
    }

    /// Build the record of someone joining the gym `today`.
    /// The expiration date depends on the chosen membership.
    pub fn enroll(
        first_name: &str,
        last_name: &str,
        date_of_birth: &str,
        location: &str,
        membership: Membership,
        today: CalendarDate,
    ) -> Result<Self> {
        let location =
            Location::from_town(location).ok_or_else(|| UnknownLocation(location.to_owned()))?;
        let date_of_birth = CalendarDate::parse(date_of_birth)?;
        if date_of_birth >= today {
            return Err(InvalidDate(calendar_date::InvalidDate(
                date_of_birth.to_string(),
            )));
        }
        if today.years_since(&date_of_birth) < MINIMUM_AGE {
            return Err(UnderAge(date_of_birth));
        }

        let identity = MemberIdentity::new(
            first_name.trim().to_owned(),
            last_name.trim().to_owned(),
            date_of_birth,
        );
        Ok(Self::new(
            identity,
            membership.expiration_from(today),
            location,
            membership,
        ))
    }

    pub fn is_expired(&self, today: CalendarDate) -> bool {
        self.expiration_date < today
    }

    pub fn fee(&self) -> Fee {
        self.membership.fee()
    }

    /// Consume one guest pass and return how many are left.
    pub fn use_guest_pass(&mut self) -> Result<u32> {
        match self.membership.guest_passes_mut() {
            None => Err(GuestsNotAllowed(self.identity.clone())),
            Some(guest_passes) if *guest_passes == 0 => {
                Err(InsufficientGuestPasses(self.identity.clone()))
            }
            Some(guest_passes) => {
                *guest_passes -= 1;
                Ok(*guest_passes)
            }
        }
    }

    /// Give back the pass of a guest who left and return how many are available.
    pub fn return_guest_pass(&mut self) -> Result<u32> {
        match self.membership.guest_passes_mut() {
            None => Err(GuestsNotAllowed(self.identity.clone())),
            Some(guest_passes) => {
                *guest_passes += 1;
                Ok(*guest_passes)
            }
        }
    }

    pub fn describe(&self, today: CalendarDate) -> String {
        let expiration = if self.is_expired(today) {
            "Membership expired"
        } else {
            "Membership expires"
        };
        let mut description = format!(
            "{}, {expiration} {}, Location: {}",
            self.identity, self.expiration_date, self.location
        );
        if let Some(guest_passes) = self.membership.guest_passes() {
            description.push_str(&format!(
                ", ({}) Guest-pass remaining: {guest_passes}",
                self.membership.label()
            ));
        }

        description
    }

    pub fn describe_with_fee(&self, today: CalendarDate) -> String {
        format!("{}, Membership fee: {}", self.describe(today), self.fee())
    }
}
