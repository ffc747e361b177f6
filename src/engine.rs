use crate::filters::FilterCriteria;
use crate::models::Course;
use crate::sort::{self, SortOption};

/// Filter then sort, leaving the input untouched. Filtering is a logical AND
/// across the constrained attributes; sorting applies only to the filtered
/// subset.
pub fn apply<'a>(
    courses: &'a [Course],
    criteria: &FilterCriteria,
    sort: SortOption,
) -> Vec<&'a Course> {
    let mut visible: Vec<&Course> = courses
        .iter()
        .filter(|course| criteria.matches(course))
        .collect();
    sort::apply_sort(&mut visible, sort);
    visible
}
