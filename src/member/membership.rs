use dto::calendar_date::CalendarDate;
use std::fmt::{Display, Formatter};

pub const BASE_FEE: Fee = Fee::from_cents(3999);
pub const FAMILY_DISCOUNT_PERCENT: u64 = 25;
pub const PREMIUM_ANNUAL_FEE: Fee = Fee::from_cents(39999);

pub const FAMILY_GUEST_PASSES: u32 = 1;
pub const PREMIUM_GUEST_PASSES: u32 = 3;

const MONTHLY_TERM_MONTHS: u32 = 3;
const ANNUAL_TERM_YEARS: u32 = 1;

/// An amount of money, in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Fee {
    cents: u64,
}

impl Fee {
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub fn cents(&self) -> u64 {
        self.cents
    }

    /// Take `percent` off, rounding down to the cent.
    pub fn discounted(&self, percent: u64) -> Self {
        Self::from_cents(self.cents * (100 - percent.min(100)) / 100)
    }
}

impl Display for Fee {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}.{:02}", self.cents / 100, self.cents % 100)
    }
}

/// Membership tier, with what only some tiers carry.
///
/// Family and Premium members can bring guests: each guest consumes one pass,
/// which is given back when the guest checks out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    Standard,
    Family { guest_passes: u32 },
    Premium { guest_passes: u32 },
}

impl Membership {
    pub fn family() -> Self {
        Membership::Family {
            guest_passes: FAMILY_GUEST_PASSES,
        }
    }

    pub fn premium() -> Self {
        Membership::Premium {
            guest_passes: PREMIUM_GUEST_PASSES,
        }
    }

    /// Fee for the next billing term: monthly for Standard and Family, yearly for Premium.
    pub fn fee(&self) -> Fee {
        match self {
            Membership::Standard => BASE_FEE,
            Membership::Family { .. } => BASE_FEE.discounted(FAMILY_DISCOUNT_PERCENT),
            Membership::Premium { .. } => PREMIUM_ANNUAL_FEE,
        }
    }

    /// [None] when the tier can't bring guests at all.
    pub fn guest_passes(&self) -> Option<u32> {
        match self {
            Membership::Standard => None,
            Membership::Family { guest_passes } | Membership::Premium { guest_passes } => {
                Some(*guest_passes)
            }
        }
    }

    pub(crate) fn guest_passes_mut(&mut self) -> Option<&mut u32> {
        match self {
            Membership::Standard => None,
            Membership::Family { guest_passes } | Membership::Premium { guest_passes } => {
                Some(guest_passes)
            }
        }
    }

    pub fn is_guest_capable(&self) -> bool {
        self.guest_passes().is_some()
    }

    /// When a membership taken out on `start` runs out.
    pub fn expiration_from(&self, start: CalendarDate) -> CalendarDate {
        let mut expiration_date = start;
        match self {
            Membership::Standard | Membership::Family { .. } => {
                expiration_date.add_months(MONTHLY_TERM_MONTHS)
            }
            Membership::Premium { .. } => expiration_date.add_years(ANNUAL_TERM_YEARS),
        }
        expiration_date
    }

    pub fn label(&self) -> &'static str {
        match self {
            Membership::Standard => "Standard",
            Membership::Family { .. } => "Family",
            Membership::Premium { .. } => "Premium",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dto::calendar_date::tests::date;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        membership = {Membership::Standard, Membership::family(), Membership::premium()},
        expected = {"$39.99", "$29.99", "$399.99"}
    )]
    fn should_compute_fee(membership: Membership, expected: &str) {
        assert_eq!(expected, membership.fee().to_string());
    }

    #[test]
    fn family_fee_is_discounted_base_fee() {
        assert_eq!(2999, Membership::family().fee().cents());
        assert!(Membership::family().fee() < BASE_FEE);
    }

    #[test]
    fn premium_fee_is_annual() {
        assert_eq!(PREMIUM_ANNUAL_FEE, Membership::premium().fee());
        assert!(PREMIUM_ANNUAL_FEE.cents() < BASE_FEE.cents() * 12);
    }

    #[parameterized(
        membership = {Membership::Standard, Membership::family(), Membership::premium()},
        expected = {None, Some(FAMILY_GUEST_PASSES), Some(PREMIUM_GUEST_PASSES)}
    )]
    fn should_hold_guest_passes(membership: Membership, expected: Option<u32>) {
        assert_eq!(expected, membership.guest_passes());
        assert_eq!(expected.is_some(), membership.is_guest_capable());
    }

    #[parameterized(
        membership = {Membership::Standard, Membership::family(), Membership::premium()},
        expected = {date(2025, 1, 17), date(2025, 1, 17), date(2025, 10, 17)}
    )]
    fn should_compute_expiration_date(membership: Membership, expected: CalendarDate) {
        assert_eq!(expected, membership.expiration_from(date(2024, 10, 17)));
    }

    #[parameterized(
        cents = {0, 5, 3999, 39999},
        expected = {"$0.00", "$0.05", "$39.99", "$399.99"}
    )]
    fn should_display_fee(cents: u64, expected: &str) {
        assert_eq!(expected, Fee::from_cents(cents).to_string());
    }
}
