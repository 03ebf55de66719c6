use crate::tools::env_args::retrieve_arg_value;
use derive_getters::Getters;
use std::path::PathBuf;

pub const DEFAULT_MEMBERS_FILE: &str = "memberList.txt";
pub const DEFAULT_CLASSES_FILE: &str = "classSchedule.txt";

/// Where `LM` and `LS` load the member list and the class schedule from.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct GymConfig {
    members_file: PathBuf,
    classes_file: PathBuf,
}

impl GymConfig {
    pub fn new(members_file: PathBuf, classes_file: PathBuf) -> Self {
        Self {
            members_file,
            classes_file,
        }
    }

    /// `--members=<path>` (`-m`) and `--classes=<path>` (`-c`)
    pub fn from_args() -> Self {
        let members_file = retrieve_arg_value(vec!["-m", "--members"])
            .unwrap_or_else(|| DEFAULT_MEMBERS_FILE.to_owned());
        let classes_file = retrieve_arg_value(vec!["-c", "--classes"])
            .unwrap_or_else(|| DEFAULT_CLASSES_FILE.to_owned());
        debug!("Member list: {members_file}, class schedule: {classes_file}");

        Self::new(PathBuf::from(members_file), PathBuf::from(classes_file))
    }
}

impl Default for GymConfig {
    fn default() -> Self {
        Self::new(
            PathBuf::from(DEFAULT_MEMBERS_FILE),
            PathBuf::from(DEFAULT_CLASSES_FILE),
        )
    }
}
