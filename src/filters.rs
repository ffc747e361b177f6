use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::Course;

/// Sentinel dropdown value meaning "unconstrained".
pub const ALL: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterField {
    Department,
    Level,
    Credits,
    Instructor,
}

/// The currently selected constraint per filterable attribute. `None` means
/// "All". Courses must match every constrained attribute exactly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub department: Option<String>,
    pub level: Option<i32>,
    pub credits: Option<i32>,
    pub instructor: Option<String>,
}

impl FilterCriteria {
    pub fn matches(&self, course: &Course) -> bool {
        self.department
            .as_deref()
            .is_none_or(|dept| course.department == dept)
            && self.level.is_none_or(|level| course.level == Some(level))
            && self
                .credits
                .is_none_or(|credits| course.credits == Some(credits))
            && self
                .instructor
                .as_deref()
                .is_none_or(|name| course.instructor.as_deref() == Some(name))
    }

    /// Apply one dropdown change. Level and credits compare as integers, so
    /// their raw values must parse.
    pub fn set(&mut self, field: FilterField, value: &str) -> Result<(), AppError> {
        match field {
            FilterField::Department => {
                self.department = selection(value).map(str::to_string);
            }
            FilterField::Level => self.level = numeric_selection(field, value)?,
            FilterField::Credits => self.credits = numeric_selection(field, value)?,
            FilterField::Instructor => {
                self.instructor = selection(value).map(str::to_string);
            }
        }
        Ok(())
    }
}

fn selection(value: &str) -> Option<&str> {
    (value != ALL).then_some(value)
}

fn numeric_selection(field: FilterField, value: &str) -> Result<Option<i32>, AppError> {
    match selection(value) {
        None => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(|_| {
            AppError::InvalidFilter(format!("{raw:?} is not a valid {field:?} value"))
        }),
    }
}

/// The distinct values observed for each filterable attribute, sorted for
/// dropdown display. Recomputed in full on every ingestion.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterOptions {
    pub departments: Vec<String>,
    pub levels: Vec<i32>,
    pub credits: Vec<i32>,
    pub instructors: Vec<String>,
}

impl FilterOptions {
    pub fn derive(courses: &[Course]) -> Self {
        let mut departments = BTreeSet::new();
        let mut levels = BTreeSet::new();
        let mut credits = BTreeSet::new();
        let mut instructors = BTreeSet::new();

        for course in courses {
            departments.insert(course.department.clone());
            if let Some(level) = course.level {
                levels.insert(level);
            }
            if let Some(value) = course.credits {
                credits.insert(value);
            }
            if let Some(instructor) = &course.instructor {
                instructors.insert(instructor.clone());
            }
        }

        Self {
            departments: departments.into_iter().collect(),
            levels: levels.into_iter().collect(),
            credits: credits.into_iter().collect(),
            instructors: instructors.into_iter().collect(),
        }
    }

    /// Dropdown labels for one attribute, with "All" first.
    pub fn choices_for(&self, field: FilterField) -> Vec<String> {
        let values: Vec<String> = match field {
            FilterField::Department => self.departments.clone(),
            FilterField::Level => self.levels.iter().map(i32::to_string).collect(),
            FilterField::Credits => self.credits.iter().map(i32::to_string).collect(),
            FilterField::Instructor => self.instructors.clone(),
        };
        std::iter::once(ALL.to_string()).chain(values).collect()
    }
}
