pub mod course;

pub use course::{Assignment, Course};
