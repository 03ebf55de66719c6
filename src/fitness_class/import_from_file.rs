use crate::fitness_class::FitnessClass;
use crate::fitness_class::schedule::ClassSchedule;
use crate::import::error::ImportError;
use crate::import::error::ImportError::InvalidRow;
use crate::import::{ImportReport, location_format, read_file, read_rows, time_format};
use dto::location::Location;
use dto::time_of_day::TimeOfDay;
use serde::Deserialize;
use std::path::Path;

const CLASS_ROW_TOKENS: usize = 4;

/// `class_name instructor time_of_day town`
#[derive(Debug, Deserialize)]
struct ClassRow {
    name: String,
    instructor: String,
    #[serde(deserialize_with = "time_format::deserialize")]
    time: TimeOfDay,
    #[serde(deserialize_with = "location_format::deserialize")]
    location: Location,
}

impl From<ClassRow> for FitnessClass {
    fn from(row: ClassRow) -> Self {
        FitnessClass::new(row.name, row.instructor, row.time, row.location)
    }
}

pub fn import_classes(content: &str, schedule: &mut ClassSchedule) -> ImportReport<FitnessClass> {
    let report = read_rows(content, CLASS_ROW_TOKENS, |record| {
        let row = record
            .deserialize::<ClassRow>(None)
            .map_err(|e| InvalidRow(e.to_string()))?;
        let class = FitnessClass::from(row);
        schedule.add(class.clone())?;
        Ok(class)
    });

    info!(
        "{} class(es) imported, {} row(s) rejected",
        report.imported().len(),
        report.rejected().len()
    );
    report
}

pub fn import_classes_from_file(
    path: &Path,
    schedule: &mut ClassSchedule,
) -> Result<ImportReport<FitnessClass>, ImportError> {
    let content = read_file(path)?;
    Ok(import_classes(&content, schedule))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GymError::DuplicateClass;
    use crate::import::error::ImportError::Rejected;
    use crate::tools::test::tests::temp_dir;
    use std::fs;

    const CLASS_SCHEDULE: &str = "Pilates Jennifer morning BRIDGEWATER
Spinning  Denise   afternoon   piscataway
Cardio Kim evening FRANKLIN
Cardio Kim evening franklin
Yoga Kim noon EDISON
";

    #[test]
    fn should_import_classes() {
        let mut schedule = ClassSchedule::default();
        let report = import_classes(CLASS_SCHEDULE, &mut schedule);

        assert_eq!(3, report.imported().len());
        assert_eq!(3, schedule.len());
        assert_eq!(
            Some(1),
            schedule.index_of("Spinning", "Denise", Location::Piscataway)
        );
        assert_eq!(&TimeOfDay::Afternoon, schedule[1].time());
    }

    #[test]
    fn should_reject_duplicate_and_unknown_time() {
        let mut schedule = ClassSchedule::default();
        let report = import_classes(CLASS_SCHEDULE, &mut schedule);

        assert_eq!(2, report.rejected().len());
        assert!(matches!(
            report.rejected()[0].error(),
            Rejected(DuplicateClass(_))
        ));
        assert!(matches!(report.rejected()[1].error(), InvalidRow(message) if message.contains("noon - invalid time of day.")));
    }

    #[test]
    fn should_render_loaded_classes() {
        let mut schedule = ClassSchedule::default();
        let report = import_classes("Pilates Jennifer morning BRIDGEWATER", &mut schedule);

        assert_eq!(
            "-Fitness classes loaded-\nPILATES - JENNIFER, 9:30, BRIDGEWATER\n-end of list-\n",
            report.render("-Fitness classes loaded-", FitnessClass::summary)
        );
    }

    #[test]
    fn should_import_classes_from_file() {
        let path = temp_dir().join("classSchedule.txt");
        fs::write(&path, CLASS_SCHEDULE).unwrap();

        let mut schedule = ClassSchedule::default();
        let report = import_classes_from_file(&path, &mut schedule).unwrap();

        assert_eq!(3, report.imported().len());
    }
}
