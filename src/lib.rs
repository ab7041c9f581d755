pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::BookRecord;
pub use services::assistant::{BookAssistant, DEFAULT_MAX_RECOMMENDATIONS, DEFAULT_MAX_RESULTS};
