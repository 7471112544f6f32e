pub mod mock;
pub mod text_generator;
pub mod topic;

pub use mock::generate_mock_content;
pub use text_generator::{COURSE_CREATION_CONTEXT, TextGenerator};
pub use topic::{DEFAULT_TOPIC, extract_topic};
