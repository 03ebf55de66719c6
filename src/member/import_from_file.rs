use crate::import::error::ImportError;
use crate::import::error::ImportError::InvalidRow;
use crate::import::{ImportReport, date_format, location_format, read_file, read_rows};
use crate::member::Member;
use crate::member::members::MemberDatabase;
use crate::member::membership::Membership;
use dto::calendar_date::CalendarDate;
use dto::location::Location;
use dto::member_identity::MemberIdentity;
use serde::Deserialize;
use std::path::Path;

const MEMBER_ROW_TOKENS: usize = 5;

/// `first_name last_name date_of_birth expiration_date town`
#[derive(Debug, Deserialize)]
struct MemberRow {
    first_name: String,
    last_name: String,
    #[serde(deserialize_with = "date_format::deserialize")]
    date_of_birth: CalendarDate,
    #[serde(deserialize_with = "date_format::deserialize")]
    expiration_date: CalendarDate,
    #[serde(deserialize_with = "location_format::deserialize")]
    location: Location,
}

/// Historical members are all on a standard membership.
impl From<MemberRow> for Member {
    fn from(row: MemberRow) -> Self {
        Member::new(
            MemberIdentity::new(row.first_name, row.last_name, row.date_of_birth),
            row.expiration_date,
            row.location,
            Membership::Standard,
        )
    }
}

/// Add each member listed in `content` to `members`.
/// People already known are reported as rejected rows.
pub fn import_members(content: &str, members: &mut MemberDatabase) -> ImportReport<Member> {
    let report = read_rows(content, MEMBER_ROW_TOKENS, |record| {
        let row = record
            .deserialize::<MemberRow>(None)
            .map_err(|e| InvalidRow(e.to_string()))?;
        let member = Member::from(row);
        members.add(member.clone())?;
        Ok(member)
    });

    info!(
        "{} member(s) imported, {} row(s) rejected",
        report.imported().len(),
        report.rejected().len()
    );
    report
}

pub fn import_members_from_file(
    path: &Path,
    members: &mut MemberDatabase,
) -> Result<ImportReport<Member>, ImportError> {
    let content = read_file(path)?;
    Ok(import_members(&content, members))
}
