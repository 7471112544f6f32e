use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    /// Id of the owning user.
    pub user: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub modules: Vec<CourseModule>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseModule {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl Course {
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user == user_id
    }

    /// First lesson of the first module, if both exist.
    pub fn first_lesson(&self) -> Option<&Lesson> {
        self.modules.first()?.lessons.first()
    }
}
