use dto::member_identity::MemberIdentity;
use std::ops::Deref;

/// People checked into a class, in arrival order.
///
/// Only identities are kept: the member records themselves stay in the
/// [MemberDatabase](crate::member::members::MemberDatabase).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    attendees: Vec<MemberIdentity>,
}

impl Deref for Roster {
    type Target = [MemberIdentity];

    fn deref(&self) -> &Self::Target {
        &self.attendees
    }
}

impl Roster {
    pub fn find(&self, identity: &MemberIdentity) -> Option<usize> {
        self.attendees
            .iter()
            .position(|attendee| attendee == identity)
    }

    /// Returns `false`, leaving the roster untouched, if `identity` is already there.
    pub fn add(&mut self, identity: MemberIdentity) -> bool {
        if self.find(&identity).is_some() {
            return false;
        }

        self.attendees.push(identity);
        true
    }

    pub fn remove(&mut self, identity: &MemberIdentity) -> Option<MemberIdentity> {
        self.find(identity)
            .map(|index| self.attendees.remove(index))
    }
}
