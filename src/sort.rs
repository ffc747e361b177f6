use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::Course;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Keep the filtered sequence in its original relative order.
    #[default]
    None,
    IdAscending,
    IdDescending,
    TitleAscending,
    TitleDescending,
    SemesterEarliest,
    SemesterLatest,
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "none" => Ok(Self::None),
            "id-ascending" => Ok(Self::IdAscending),
            "id-descending" => Ok(Self::IdDescending),
            "title-ascending" => Ok(Self::TitleAscending),
            "title-descending" => Ok(Self::TitleDescending),
            "semester-earliest" => Ok(Self::SemesterEarliest),
            "semester-latest" => Ok(Self::SemesterLatest),
            other => Err(format!("unknown sort option: {other}")),
        }
    }
}

/// Stable in-place sort of an already-filtered sequence. `None` leaves the
/// incoming order untouched, which is distinct from a sort that happens to
/// match it.
pub fn apply_sort(courses: &mut [&Course], option: SortOption) {
    match option {
        SortOption::None => {}
        SortOption::IdAscending => courses.sort_by(|a, b| a.id.cmp(&b.id)),
        SortOption::IdDescending => courses.sort_by(|a, b| b.id.cmp(&a.id)),
        SortOption::TitleAscending => courses.sort_by(|a, b| a.title.cmp(&b.title)),
        SortOption::TitleDescending => courses.sort_by(|a, b| b.title.cmp(&a.title)),
        SortOption::SemesterEarliest => {
            courses.sort_by(|a, b| cmp_keys(semester_key_of(a), semester_key_of(b)));
        }
        // Latest-first is the exact mirror of earliest-first.
        SortOption::SemesterLatest => {
            courses.sort_by(|a, b| cmp_keys(semester_key_of(b), semester_key_of(a)));
        }
    }
}

/// Compare two "Season Year" strings chronologically: year first, then
/// season rank Winter < Spring < Summer < Fall. Malformed strings order
/// after every well-formed one instead of failing the comparison.
pub fn compare_semesters(a: &str, b: &str) -> Ordering {
    cmp_keys(semester_key(a), semester_key(b))
}

fn semester_key_of(course: &Course) -> Option<(i32, u8)> {
    course.semester.as_deref().and_then(semester_key)
}

fn cmp_keys(a: Option<(i32, u8)>, b: Option<(i32, u8)>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// `None` unless the string is exactly "<Season> <Year>" with a known season
/// and a numeric year.
fn semester_key(semester: &str) -> Option<(i32, u8)> {
    let mut tokens = semester.split_whitespace();
    let season = tokens.next()?;
    let year = tokens.next()?;
    if tokens.next().is_some() {
        return None;
    }
    Some((year.parse().ok()?, season_rank(season)?))
}

fn season_rank(season: &str) -> Option<u8> {
    match season {
        "Winter" => Some(1),
        "Spring" => Some(2),
        "Summer" => Some(3),
        "Fall" => Some(4),
        _ => None,
    }
}
