use serde::Serialize;

use crate::models::Course;

pub const NO_RESULTS: &str = "No courses found matching the selected filters.";
pub const NO_SELECTION: &str = "Select a course to view details";
pub const NOT_SPECIFIED: &str = "Not specified";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListEntry {
    pub id: String,
    pub selected: bool,
}

/// The course list as the shell should paint it. `placeholder` is set instead
/// of entries when nothing matched the active filters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListView {
    pub entries: Vec<ListEntry>,
    pub placeholder: Option<String>,
}

impl ListView {
    pub fn build(visible: &[&Course], selected: Option<&str>) -> Self {
        if visible.is_empty() {
            return Self {
                entries: Vec::new(),
                placeholder: Some(NO_RESULTS.to_string()),
            };
        }
        Self {
            entries: visible
                .iter()
                .map(|course| ListEntry {
                    id: course.id.clone(),
                    selected: selected == Some(course.id.as_str()),
                })
                .collect(),
            placeholder: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentView {
    pub title: String,
    pub due_date: String,
}

/// Every attribute pre-formatted for display, placeholders filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseDetail {
    pub id: String,
    pub title: String,
    pub department: String,
    pub level: String,
    pub credits: String,
    pub instructor: String,
    pub semester: String,
    pub description: String,
    pub assignments: Vec<AssignmentView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetailView {
    Placeholder { message: String },
    Course(CourseDetail),
}

impl DetailView {
    pub fn build(selected: Option<&Course>) -> Self {
        let Some(course) = selected else {
            return Self::Placeholder {
                message: NO_SELECTION.to_string(),
            };
        };
        Self::Course(CourseDetail {
            id: course.id.clone(),
            title: course.title.clone(),
            department: course.department.clone(),
            level: optional_number(course.level),
            credits: optional_number(course.credits),
            instructor: course.instructor_label().to_string(),
            semester: optional_text(course.semester.as_deref()),
            description: optional_text(course.description.as_deref()),
            assignments: course
                .assignments
                .iter()
                .map(|assignment| AssignmentView {
                    title: assignment.title.clone(),
                    due_date: assignment.due_date_label(),
                })
                .collect(),
        })
    }
}

fn optional_number(value: Option<i32>) -> String {
    value.map_or_else(|| NOT_SPECIFIED.to_string(), |v| v.to_string())
}

fn optional_text(value: Option<&str>) -> String {
    value
        .filter(|text| !text.is_empty())
        .unwrap_or(NOT_SPECIFIED)
        .to_string()
}
