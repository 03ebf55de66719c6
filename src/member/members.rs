use crate::error::GymError::{DuplicateMember, MemberNotFound};
use crate::error::Result;
use crate::member::Member;
use dto::calendar_date::CalendarDate;
use dto::member_identity::MemberIdentity;
use std::ops::{Deref, Index, IndexMut};

const EMPTY_DATABASE: &str = "Member database is empty!\n";
const END_OF_LIST: &str = "-end of list-\n";

/// Every known [Member], in the order they were added.
/// A person, as told by their [MemberIdentity], appears at most once.
#[derive(Debug, Default, PartialEq)]
pub struct MemberDatabase {
    members: Vec<Member>,
}

impl Deref for MemberDatabase {
    type Target = [Member];

    fn deref(&self) -> &Self::Target {
        &self.members
    }
}

impl Index<usize> for MemberDatabase {
    type Output = Member;

    fn index(&self, index: usize) -> &Self::Output {
        &self.members[index]
    }
}

impl IndexMut<usize> for MemberDatabase {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.members[index]
    }
}

impl MemberDatabase {
    pub fn find(&self, identity: &MemberIdentity) -> Option<usize> {
        self.members
            .iter()
            .position(|member| member.identity() == identity)
    }

    pub fn find_member(&self, identity: &MemberIdentity) -> Option<&Member> {
        self.find(identity).map(|index| &self.members[index])
    }

    pub fn find_member_mut(&mut self, identity: &MemberIdentity) -> Option<&mut Member> {
        self.find(identity).map(|index| &mut self.members[index])
    }

    pub fn add(&mut self, member: Member) -> Result<()> {
        if self.find(member.identity()).is_some() {
            return Err(DuplicateMember(member.identity().clone()));
        }

        debug!("Adding member {}", member.identity());
        self.members.push(member);
        Ok(())
    }

    /// Remove a member, keeping the others in the same order.
    pub fn remove(&mut self, identity: &MemberIdentity) -> Result<Member> {
        let index = self
            .find(identity)
            .ok_or_else(|| MemberNotFound(identity.clone()))?;

        debug!("Removing member {identity}");
        Ok(self.members.remove(index))
    }

    /// Last name, then first name.
    pub fn sort_by_name(&mut self) {
        self.members.sort_by(|first, second| {
            let first = first.identity();
            let second = second.identity();
            first
                .last_name()
                .cmp(second.last_name())
                .then_with(|| first.first_name().cmp(second.first_name()))
        });
    }

    /// County, then postal code.
    pub fn sort_by_county(&mut self) {
        self.members.sort_by(|first, second| {
            first
                .location()
                .county()
                .cmp(second.location().county())
                .then_with(|| {
                    first
                        .location()
                        .postal_code()
                        .cmp(second.location().postal_code())
                })
        });
    }

    /// Soonest to expire first.
    pub fn sort_by_expiration_date(&mut self) {
        self.members.sort_by_key(|member| *member.expiration_date());
    }

    pub fn render(&self, today: CalendarDate) -> String {
        self.render_list("-list of members-", |member| member.describe(today))
    }

    pub fn render_with_fees(&self, today: CalendarDate) -> String {
        self.render_list("-list of members with membership fees-", |member| {
            member.describe_with_fee(today)
        })
    }

    pub fn render_by_name(&mut self, today: CalendarDate) -> String {
        self.sort_by_name();
        self.render_list(
            "-list of members sorted by last name, and first name-",
            |member| member.describe(today),
        )
    }

    pub fn render_by_county(&mut self, today: CalendarDate) -> String {
        self.sort_by_county();
        self.render_list("-list of members sorted by county and zipcode-", |member| {
            member.describe(today)
        })
    }

    pub fn render_by_expiration_date(&mut self, today: CalendarDate) -> String {
        self.sort_by_expiration_date();
        self.render_list(
            "-list of members sorted by membership expiration date-",
            |member| member.describe(today),
        )
    }

    fn render_list<F>(&self, title: &str, describe: F) -> String
    where
        F: Fn(&Member) -> String,
    {
        if self.members.is_empty() {
            return EMPTY_DATABASE.to_owned();
        }

        let mut list = format!("{title}\n");
        for member in &self.members {
            list.push_str(&describe(member));
            list.push('\n');
        }
        list.push_str(END_OF_LIST);
        list
    }
}

impl<const N: usize> TryFrom<[Member; N]> for MemberDatabase {
    type Error = crate::error::GymError;

    fn try_from(members: [Member; N]) -> Result<Self> {
        let mut database = MemberDatabase::default();
        for member in members {
            database.add(member)?;
        }
        Ok(database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::Member;
    use crate::member::tests::{family_member, premium_member, standard_member, today};
    use dto::calendar_date::tests::date;
    use dto::location::Location;
    use dto::member_identity::tests::{identity, jane_doe, john_smith};

    fn names(database: &MemberDatabase) -> Vec<String> {
        database
            .iter()
            .map(|member| member.identity().full_name())
            .collect()
    }

    fn database() -> MemberDatabase {
        MemberDatabase::try_from([
            standard_member(identity("Zoe", "Adams", date(1995, 3, 3)), Location::Edison),
            family_member(jane_doe(), Location::Bridgewater),
            premium_member(john_smith(), Location::Piscataway),
            standard_member(identity("Amy", "Doe", date(1992, 4, 4)), Location::Somerville),
        ])
        .unwrap()
    }

    // region add
    #[test]
    fn should_add_member() {
        let mut database = MemberDatabase::default();
        assert_eq!(Ok(()), database.add(standard_member(jane_doe(), Location::Edison)));
        assert_eq!(1, database.len());
        assert_eq!(Some(0), database.find(&jane_doe()));
    }

    #[test]
    fn should_not_add_same_person_twice() {
        let mut database = MemberDatabase::default();
        database
            .add(standard_member(jane_doe(), Location::Edison))
            .unwrap();

        let same_person = premium_member(
            identity("JANE", "doe", date(1990, 1, 1)),
            Location::Bridgewater,
        );
        assert_eq!(Err(DuplicateMember(same_person.identity().clone())), database.add(same_person));
        assert_eq!(1, database.len());
        assert_eq!(&Location::Edison, database[0].location());
    }

    #[test]
    fn should_grow_without_limit() {
        let mut database = MemberDatabase::default();
        for day in 1..=28 {
            database
                .add(standard_member(
                    identity("Jane", "Doe", date(1990, 2, day)),
                    Location::Edison,
                ))
                .unwrap();
        }
        assert_eq!(28, database.len());
    }
    // endregion

    // region remove
    #[test]
    fn removing_added_member_restores_database() {
        let mut database = database();
        let before = names(&database);
        let newcomer = identity("Paul", "Martin", date(1970, 5, 5));

        database
            .add(standard_member(newcomer.clone(), Location::Franklin))
            .unwrap();
        let removed = database.remove(&newcomer).unwrap();

        assert_eq!(&newcomer, removed.identity());
        assert_eq!(before, names(&database));
    }

    #[test]
    fn should_keep_order_when_removing() {
        let mut database = database();
        database.remove(&jane_doe()).unwrap();

        assert_eq!(vec!["Zoe Adams", "John Smith", "Amy Doe"], names(&database));
    }

    #[test]
    fn should_not_remove_unknown_member() {
        let mut database = database();
        let unknown = identity("Jane", "Doe", date(1990, 1, 2));

        assert_eq!(Err(MemberNotFound(unknown.clone())), database.remove(&unknown));
        assert_eq!(4, database.len());
    }
    // endregion

    // region sort
    #[test]
    fn should_sort_by_name() {
        let mut database = database();
        database.sort_by_name();

        assert_eq!(
            vec!["Zoe Adams", "Amy Doe", "Jane Doe", "John Smith"],
            names(&database)
        );
    }

    #[test]
    fn should_sort_by_county_then_postal_code() {
        let mut database = database();
        database.sort_by_county();

        // MIDDLESEX: 08837 Edison, 08854 Piscataway. SOMERSET: 08807 Bridgewater, 08876 Somerville.
        assert_eq!(
            vec!["Zoe Adams", "John Smith", "Jane Doe", "Amy Doe"],
            names(&database)
        );
    }

    #[test]
    fn should_sort_by_expiration_date_keeping_ties_in_order() {
        let mut database = database();
        database.sort_by_expiration_date();

        assert_eq!(
            vec!["Zoe Adams", "Jane Doe", "Amy Doe", "John Smith"],
            names(&database)
        );
    }

    #[test]
    fn sorting_twice_gives_same_order() {
        let mut database = database();

        database.sort_by_name();
        let once = names(&database);
        database.sort_by_name();
        assert_eq!(once, names(&database));

        database.sort_by_county();
        let once = names(&database);
        database.sort_by_county();
        assert_eq!(once, names(&database));

        database.sort_by_expiration_date();
        let once = names(&database);
        database.sort_by_expiration_date();
        assert_eq!(once, names(&database));
    }
    // endregion

    // region render
    #[test]
    fn should_render_empty_database() {
        let mut database = MemberDatabase::default();
        assert_eq!(EMPTY_DATABASE, database.render(today()));
        assert_eq!(EMPTY_DATABASE, database.render_by_name(today()));
        assert_eq!(EMPTY_DATABASE, database.render_with_fees(today()));
    }

    #[test]
    fn should_render_by_name() {
        let mut database = MemberDatabase::try_from([
            standard_member(john_smith(), Location::Edison),
            standard_member(jane_doe(), Location::Edison),
        ])
        .unwrap();

        let expected = "-list of members sorted by last name, and first name-\n\
            Jane Doe, DOB: 1/1/1990, Membership expires 1/17/2025, Location: EDISON, 08837, MIDDLESEX\n\
            John Smith, DOB: 6/15/1985, Membership expires 1/17/2025, Location: EDISON, 08837, MIDDLESEX\n\
            -end of list-\n";
        assert_eq!(expected, database.render_by_name(today()));
    }

    #[test]
    fn should_render_fees_in_insertion_order() {
        let database = MemberDatabase::try_from([
            family_member(jane_doe(), Location::Edison),
            standard_member(john_smith(), Location::Edison),
        ])
        .unwrap();

        let rendered = database.render_with_fees(today());
        let lines = rendered.lines().collect::<Vec<_>>();
        assert_eq!(4, lines.len());
        assert_eq!("-list of members with membership fees-", lines[0]);
        assert!(lines[1].starts_with("Jane Doe"));
        assert!(lines[1].ends_with("(Family) Guest-pass remaining: 1, Membership fee: $29.99"));
        assert!(lines[2].ends_with("Membership fee: $39.99"));
        assert_eq!("-end of list-", lines[3]);
    }
    // endregion

    #[test]
    fn should_find_member_to_update() {
        let mut database = database();
        let member: &mut Member = database.find_member_mut(&jane_doe()).unwrap();
        member.use_guest_pass().unwrap();

        assert_eq!(
            Some(0),
            database
                .find_member(&jane_doe())
                .and_then(|member| member.membership().guest_passes())
        );
    }
}
