use crate::attendance::{check_in_guest, check_in_member, check_out_guest, check_out_member};
use crate::command::Command;
use crate::config::GymConfig;
use crate::error::Result;
use crate::fitness_class::FitnessClass;
use crate::fitness_class::import_from_file::import_classes_from_file;
use crate::fitness_class::schedule::ClassSchedule;
use crate::member::Member;
use crate::member::import_from_file::import_members_from_file;
use crate::member::members::MemberDatabase;
use crate::member::membership::Membership;
use crate::tools::{log_error_and_message, log_rejection};
use derive_getters::Getters;
use dto::calendar_date::CalendarDate;
use dto::member_identity::MemberIdentity;

/// State of the gym for a front desk session.
#[derive(Debug, Default, Getters)]
pub struct GymManager {
    members: MemberDatabase,
    schedule: ClassSchedule,
    config: GymConfig,
}

impl GymManager {
    pub fn new(config: GymConfig) -> Self {
        Self {
            members: MemberDatabase::default(),
            schedule: ClassSchedule::default(),
            config,
        }
    }

    /// Run `command` and give back what to show at the desk.
    pub fn execute(&mut self, command: Command, today: CalendarDate) -> String {
        debug!("Executing {command:?}");
        match command {
            Command::Enroll {
                first_name,
                last_name,
                date_of_birth,
                location,
                membership,
            } => self
                .enroll(&first_name, &last_name, &date_of_birth, &location, membership, today)
                .unwrap_or_else(log_rejection),
            Command::Cancel {
                first_name,
                last_name,
                date_of_birth,
            } => self
                .cancel(first_name, last_name, &date_of_birth)
                .unwrap_or_else(log_rejection),
            Command::PrintMembers => self.members.render(today),
            Command::PrintByCounty => self.members.render_by_county(today),
            Command::PrintByName => self.members.render_by_name(today),
            Command::PrintByExpirationDate => self.members.render_by_expiration_date(today),
            Command::PrintWithFees => self.members.render_with_fees(today),
            Command::PrintSchedule => self.schedule.render(),
            Command::LoadMembers => import_members_from_file(self.config.members_file(), &mut self.members)
                .map(|report| {
                    report.render("-list of members loaded-", |member: &Member| member.describe(today))
                })
                .unwrap_or_else(log_error_and_message("Can't load member list")),
            Command::LoadSchedule => import_classes_from_file(self.config.classes_file(), &mut self.schedule)
                .map(|report| report.render("-Fitness classes loaded-", FitnessClass::summary))
                .unwrap_or_else(log_error_and_message("Can't load class schedule")),
            Command::CheckIn(request) => check_in_member(&self.members, &mut self.schedule, &request, today)
                .map(|attendance| attendance.to_string())
                .unwrap_or_else(log_rejection),
            Command::CheckInGuest(request) => check_in_guest(&mut self.members, &mut self.schedule, &request, today)
                .map(|attendance| attendance.to_string())
                .unwrap_or_else(log_rejection),
            Command::CheckOut(request) => check_out_member(&self.members, &mut self.schedule, &request, today)
                .map(|attendance| attendance.to_string())
                .unwrap_or_else(log_rejection),
            Command::CheckOutGuest(request) => check_out_guest(&mut self.members, &mut self.schedule, &request, today)
                .map(|attendance| attendance.to_string())
                .unwrap_or_else(log_rejection),
            Command::Quit => "Gym Manager terminated.".to_owned(),
        }
    }

    fn enroll(
        &mut self,
        first_name: &str,
        last_name: &str,
        date_of_birth: &str,
        location: &str,
        membership: Membership,
        today: CalendarDate,
    ) -> Result<String> {
        let member = Member::enroll(first_name, last_name, date_of_birth, location, membership, today)?;
        let full_name = member.identity().full_name();
        self.members.add(member)?;
        info!("{full_name} joined the gym");
        Ok(format!("{full_name} added."))
    }

    fn cancel(&mut self, first_name: String, last_name: String, date_of_birth: &str) -> Result<String> {
        let identity = MemberIdentity::new(first_name, last_name, CalendarDate::parse(date_of_birth)?);
        let member = self.members.remove(&identity)?;
        info!("{} left the gym", member.identity());
        Ok(format!("{} removed.", member.identity().full_name()))
    }
}
