pub mod calendar_date;
pub mod location;
pub mod member_identity;
pub mod time_of_day;
