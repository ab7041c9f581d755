/// External service provider abstractions
///
/// This module isolates the two HTTP collaborators behind traits so the
/// orchestration layer can be exercised against mocks. One provider covers
/// book-metadata search, the other hosted text generation.
use crate::{error::AppResult, models::BookRecord};

pub mod cohere;
pub mod google_books;

pub use cohere::CohereProvider;
pub use google_books::GoogleBooksProvider;

/// Trait for book-metadata search providers
///
/// A provider issues one search request per call and maps the raw response
/// into uniform `BookRecord`s, preserving the service's result order.
#[async_trait::async_trait]
pub trait BookSearchProvider: Send + Sync {
    /// Search for books matching a free-text query
    ///
    /// Returns at most `max_results` records in the order the service ranked
    /// them. An empty result is a legitimate answer, not an error.
    async fn search_volumes(&self, query: &str, max_results: u32) -> AppResult<Vec<BookRecord>>;
}

/// Trait for hosted text-generation providers
#[async_trait::async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Generate a completion for the given prompt
    ///
    /// Returns the first candidate's text with surrounding whitespace trimmed.
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}
