use std::path::Path;

use tracing::{info, warn};

use crate::engine;
use crate::error::AppError;
use crate::filters::{FilterCriteria, FilterField, FilterOptions};
use crate::ingest;
use crate::models::Course;
use crate::render::{DetailView, ListView};
use crate::sort::SortOption;

/// All browsing state for one loaded document: the course set plus the active
/// filters, sort and selection. Derived state is recomputed in full on every
/// event; there is exactly one logical thread of control.
#[derive(Debug, Default)]
pub struct Session {
    courses: Vec<Course>,
    options: FilterOptions,
    criteria: FilterCriteria,
    sort: SortOption,
    selected: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a course document from disk and load it. A later call replaces
    /// the whole session, last write wins.
    pub async fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize, AppError> {
        let path = path.as_ref();
        let text = match tokio::fs::read_to_string(path).await {
            Ok(text) => text,
            Err(err) => {
                self.clear();
                warn!("failed to read {}: {}", path.display(), err);
                return Err(err.into());
            }
        };
        self.load_text(&text)
    }

    /// Replace the course set from raw JSON text. On failure the session is
    /// cleared so no stale data survives a bad upload. A successful load
    /// resets the filters (the dropdowns are rebuilt) but keeps the sort.
    pub fn load_text(&mut self, text: &str) -> Result<usize, AppError> {
        match ingest::ingest(text) {
            Ok(courses) => {
                self.options = FilterOptions::derive(&courses);
                self.courses = courses;
                self.criteria = FilterCriteria::default();
                self.selected = None;
                info!("loaded {} courses", self.courses.len());
                Ok(self.courses.len())
            }
            Err(err) => {
                self.clear();
                warn!("ingestion failed: {err}");
                Err(err)
            }
        }
    }

    pub fn set_filter(&mut self, field: FilterField, value: &str) -> Result<(), AppError> {
        self.criteria.set(field, value)
    }

    pub fn set_sort(&mut self, option: SortOption) {
        self.sort = option;
    }

    /// Highlight one course by id, replacing any previous selection.
    pub fn select_course(&mut self, id: &str) -> Result<(), AppError> {
        if !self.courses.iter().any(|course| course.id == id) {
            return Err(AppError::NotFound);
        }
        self.selected = Some(id.to_string());
        Ok(())
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort(&self) -> SortOption {
        self.sort
    }

    pub fn selected_course(&self) -> Option<&Course> {
        self.selected
            .as_deref()
            .and_then(|id| self.courses.iter().find(|course| course.id == id))
    }

    /// The filtered, sorted subset in display order.
    pub fn visible(&self) -> Vec<&Course> {
        engine::apply(&self.courses, &self.criteria, self.sort)
    }

    pub fn list_view(&self) -> ListView {
        ListView::build(&self.visible(), self.selected.as_deref())
    }

    pub fn detail_view(&self) -> DetailView {
        DetailView::build(self.selected_course())
    }

    fn clear(&mut self) {
        self.courses.clear();
        self.options = FilterOptions::default();
        self.criteria = FilterCriteria::default();
        self.selected = None;
    }
}
