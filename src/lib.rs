pub mod api;
pub mod config;
pub mod courses;
pub mod error;
pub mod errors;
pub mod generation;
pub mod inference;
pub mod security;

pub use config::Config;
pub use error::{Error, Result};
pub use errors::AppError;
