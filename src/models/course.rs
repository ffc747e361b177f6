use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One academic offering. `id`, `title` and `department` are guaranteed
/// non-empty after ingestion; everything else is optional in the source
/// document. Records are immutable once ingested and the whole set is
/// replaced on each new upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub department: String,
    pub level: Option<i32>,
    pub credits: Option<i32>,
    pub instructor: Option<String>,
    pub description: Option<String>,
    pub semester: Option<String>,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub title: String,
    #[serde(rename = "dueDate")]
    pub due_date: String,
}

impl Course {
    /// Instructor name for display, "TBA" when none is assigned.
    pub fn instructor_label(&self) -> &str {
        self.instructor.as_deref().unwrap_or("TBA")
    }
}

impl Assignment {
    /// Due date for display. ISO dates become e.g. "Mar 15, 2025"; anything
    /// else passes through verbatim.
    pub fn due_date_label(&self) -> String {
        match NaiveDate::parse_from_str(&self.due_date, "%Y-%m-%d") {
            Ok(date) => date.format("%b %-d, %Y").to_string(),
            Err(_) => self.due_date.clone(),
        }
    }
}
