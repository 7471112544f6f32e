use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use tokio::sync::RwLock;
use tracing::info;

use super::model::Course;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Course store unavailable: {0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid course data: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Lookup side of the course persistence layer.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Course>, RepositoryError>;
}

/// Process-local course store.
#[derive(Debug, Default)]
pub struct InMemoryCourseRepository {
    courses: RwLock<HashMap<String, Course>>,
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_courses(courses: impl IntoIterator<Item = Course>) -> Self {
        Self {
            courses: RwLock::new(
                courses
                    .into_iter()
                    .map(|course| (course.id.clone(), course))
                    .collect(),
            ),
        }
    }

    /// Load a JSON array of courses.
    pub async fn from_seed_file(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await?;
        let courses: Vec<Course> = serde_json::from_str(&raw)?;
        info!(path = %path.display(), count = courses.len(), "Loaded course seed file");
        Ok(Self::with_courses(courses))
    }

    pub async fn insert(&self, course: Course) {
        self.courses.write().await.insert(course.id.clone(), course);
    }

    pub async fn len(&self) -> usize {
        self.courses.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.courses.read().await.is_empty()
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Course>, RepositoryError> {
        Ok(self.courses.read().await.get(id).cloned())
    }
}
