// Course collaborator: the owning-user lookup the enhancement endpoint needs.

pub mod model;
pub mod repository;

pub use model::{Course, CourseModule, Lesson};
pub use repository::{CourseRepository, InMemoryCourseRepository, RepositoryError};
