use crate::error::GymError::DuplicateClass;
use crate::error::Result;
use crate::fitness_class::FitnessClass;
use dto::location::Location;
use dto::member_identity::same_name;
use std::ops::{Deref, Index, IndexMut};

/// Every class offered, in the order they were added.
#[derive(Debug, Default, PartialEq)]
pub struct ClassSchedule {
    classes: Vec<FitnessClass>,
}

impl Deref for ClassSchedule {
    type Target = [FitnessClass];

    fn deref(&self) -> &Self::Target {
        &self.classes
    }
}

impl Index<usize> for ClassSchedule {
    type Output = FitnessClass;

    fn index(&self, index: usize) -> &Self::Output {
        &self.classes[index]
    }
}

impl IndexMut<usize> for ClassSchedule {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.classes[index]
    }
}

impl ClassSchedule {
    /// The same class may be given at several times,
    /// but not twice at the same time.
    pub fn add(&mut self, class: FitnessClass) -> Result<()> {
        if self
            .classes
            .iter()
            .any(|known_class| known_class.matches_exactly(&class))
        {
            return Err(DuplicateClass(class.summary()));
        }

        debug!("Adding class {}", class.summary());
        self.classes.push(class);
        Ok(())
    }

    /// Position of the first class with this name, instructor and location, whatever its time.
    pub fn index_of(&self, name: &str, instructor: &str, location: Location) -> Option<usize> {
        self.classes
            .iter()
            .position(|class| class.is(name, instructor, location))
    }

    pub fn has_class_name(&self, name: &str) -> bool {
        self.classes
            .iter()
            .any(|class| same_name(class.name(), name))
    }

    pub fn has_instructor(&self, instructor: &str) -> bool {
        self.classes
            .iter()
            .any(|class| same_name(class.instructor(), instructor))
    }

    pub fn render(&self) -> String {
        if self.classes.is_empty() {
            return "Fitness class schedule is empty.\n".to_owned();
        }

        let mut list = "-Fitness classes-\n".to_owned();
        for class in &self.classes {
            list.push_str(&format!("{class}\n"));
        }
        list.push_str("-end of class list-\n");
        list
    }
}
