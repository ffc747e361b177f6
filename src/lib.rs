pub mod engine;
pub mod error;
pub mod filters;
pub mod ingest;
pub mod models;
pub mod render;
pub mod session;
pub mod sort;

pub use error::AppError;
pub use filters::{FilterCriteria, FilterField, FilterOptions};
pub use models::{Assignment, Course};
pub use render::{CourseDetail, DetailView, ListEntry, ListView};
pub use session::Session;
pub use sort::{SortOption, compare_semesters};
