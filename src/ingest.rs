use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::AppError;
use crate::models::{Assignment, Course};

/// Intermediate shape so presence checks stay separate from JSON syntax
/// errors. Unknown fields in the document are ignored.
#[derive(Debug, Deserialize)]
struct RawCourse {
    id: Option<String>,
    title: Option<String>,
    department: Option<String>,
    level: Option<i32>,
    credits: Option<i32>,
    instructor: Option<String>,
    description: Option<String>,
    semester: Option<String>,
    #[serde(default)]
    assignments: Vec<RawAssignment>,
}

#[derive(Debug, Deserialize)]
struct RawAssignment {
    title: Option<String>,
    #[serde(rename = "dueDate")]
    due_date: Option<String>,
}

/// Parse raw text into validated course records, preserving input order.
/// Any bad element rejects the whole batch; skipping rows would silently
/// hide data problems.
pub fn ingest(text: &str) -> Result<Vec<Course>, AppError> {
    let document: Value = serde_json::from_str(text)?;
    let Value::Array(items) = document else {
        return Err(AppError::Shape(
            "expected a JSON array of courses".to_string(),
        ));
    };

    let mut courses = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        courses.push(course_from_value(index, item)?);
    }
    debug!("ingested {} courses", courses.len());
    Ok(courses)
}

fn course_from_value(index: usize, item: Value) -> Result<Course, AppError> {
    let raw: RawCourse = serde_json::from_value(item).map_err(|err| AppError::Validation {
        index,
        reason: err.to_string(),
    })?;

    let id = required(index, "id", raw.id)?;
    let title = required(index, "title", raw.title)?;
    let department = required(index, "department", raw.department)?;

    let assignments = raw
        .assignments
        .into_iter()
        .map(|a| match (a.title, a.due_date) {
            (Some(title), Some(due_date)) => Ok(Assignment { title, due_date }),
            (None, _) => Err(missing(index, "assignments[].title")),
            (_, None) => Err(missing(index, "assignments[].dueDate")),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Course {
        id,
        title,
        department,
        level: raw.level,
        credits: raw.credits,
        // An empty instructor means unassigned, same as an absent one.
        instructor: raw.instructor.filter(|name| !name.is_empty()),
        description: raw.description,
        semester: raw.semester,
        assignments,
    })
}

fn required(index: usize, field: &str, value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(missing(index, field)),
    }
}

fn missing(index: usize, field: &str) -> AppError {
    AppError::Validation {
        index,
        reason: format!("missing required field `{field}`"),
    }
}
