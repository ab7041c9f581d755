use crate::{
    error::AppResult,
    models::BookRecord,
    services::providers::{BookSearchProvider, GenerationProvider},
};
use std::sync::Arc;

pub const DEFAULT_MAX_RESULTS: u32 = 5;
pub const DEFAULT_MAX_RECOMMENDATIONS: u32 = 3;

/// Build the textual context block embedded into the analysis prompt
///
/// Each record renders as a fixed four-line block; blocks are concatenated in
/// input order. Deterministic: same records always yield the same context.
pub fn build_context(books: &[BookRecord]) -> String {
    books
        .iter()
        .map(|book| {
            format!(
                "Book: {}\nAuthors: {}\nDescription: {}\nCategories: {}\n",
                book.display_title(),
                book.authors.join(", "),
                book.description,
                book.categories.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Substitute context and question into the fixed analysis prompt
pub fn build_prompt(context: &str, question: &str) -> String {
    format!(
        "Based on the following books information:\n\n\
         {}\n\n\
         Question: {}\n\n\
         Please provide a detailed analysis of these books in relation to the question. \
         Include relevant comparisons, themes, and insights.",
        context, question
    )
}

/// Orchestrates the three operations over the two external collaborators
///
/// Strictly sequential: every provider call is awaited before the next one is
/// issued, so result accumulation order is reproducible.
pub struct BookAssistant {
    search: Arc<dyn BookSearchProvider>,
    generator: Arc<dyn GenerationProvider>,
}

impl BookAssistant {
    pub fn new(search: Arc<dyn BookSearchProvider>, generator: Arc<dyn GenerationProvider>) -> Self {
        Self { search, generator }
    }

    /// Search for books matching a free-text query
    pub async fn search_books(&self, query: &str, max_results: u32) -> AppResult<Vec<BookRecord>> {
        self.search.search_volumes(query, max_results).await
    }

    /// Analyze a set of books against a user question
    ///
    /// An empty book list is not short-circuited: the generation service is
    /// still called with an empty context block embedded in the prompt.
    pub async fn analyze_books(&self, books: &[BookRecord], question: &str) -> AppResult<String> {
        let context = build_context(books);
        let prompt = build_prompt(&context, question);

        let analysis = self.generator.generate(&prompt).await?;

        tracing::info!(
            books = books.len(),
            chars = analysis.len(),
            "Book analysis completed"
        );

        Ok(analysis)
    }

    /// Recommend books similar to a reference title
    ///
    /// Resolves the reference via a single-result search, then runs one
    /// `subject:<category>` search per category in category order. Candidates
    /// whose title exactly matches the resolved reference title are dropped;
    /// survivors accumulate across categories and the final list is truncated
    /// to `max_recommendations`. Accumulating before truncating means earlier
    /// categories always win, and duplicates across categories survive;
    /// only the reference title itself is filtered.
    pub async fn recommend_similar_books(
        &self,
        book_title: &str,
        max_recommendations: u32,
    ) -> AppResult<Vec<BookRecord>> {
        let resolved = self.search.search_volumes(book_title, 1).await?;

        let reference = match resolved.into_iter().next() {
            Some(reference) => reference,
            None => {
                tracing::info!(title = %book_title, "No reference book found");
                return Ok(Vec::new());
            }
        };

        // Filter against the title the API actually resolved, not the raw
        // lookup string; they differ whenever the caller passes an inexact
        // title like "Superintelligence by Nick Bostrom".
        let reference_title = reference
            .title
            .clone()
            .unwrap_or_else(|| book_title.to_string());

        let mut similar_books: Vec<BookRecord> = Vec::new();
        for category in &reference.categories {
            let query = format!("subject:{}", category);
            let books = self.search.search_volumes(&query, max_recommendations).await?;

            similar_books.extend(
                books
                    .into_iter()
                    .filter(|book| book.title.as_deref() != Some(reference_title.as_str())),
            );
        }

        similar_books.truncate(max_recommendations as usize);

        tracing::info!(
            reference = %reference_title,
            recommendations = similar_books.len(),
            "Similar books assembled"
        );

        Ok(similar_books)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> BookRecord {
        BookRecord {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_context_single_record() {
        let book = BookRecord {
            title: Some("Dune".to_string()),
            authors: vec!["Frank Herbert".to_string()],
            description: "A desert planet saga.".to_string(),
            categories: vec!["Fiction".to_string(), "Classics".to_string()],
            ..Default::default()
        };

        let context = build_context(&[book]);
        assert_eq!(
            context,
            "Book: Dune\nAuthors: Frank Herbert\nDescription: A desert planet saga.\nCategories: Fiction, Classics\n"
        );
    }

    #[test]
    fn test_build_context_preserves_input_order() {
        let context = build_context(&[record("First"), record("Second")]);

        let first = context.find("Book: First").unwrap();
        let second = context.find("Book: Second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_build_context_empty_list() {
        assert_eq!(build_context(&[]), "");
    }

    #[test]
    fn test_build_context_defaults_render_as_empty() {
        let context = build_context(&[BookRecord {
            title: Some("Sparse".to_string()),
            ..Default::default()
        }]);

        assert_eq!(
            context,
            "Book: Sparse\nAuthors: \nDescription: \nCategories: \n"
        );
    }

    #[test]
    fn test_build_prompt_embeds_context_and_question() {
        let prompt = build_prompt("Book: Dune\n", "Which book is about sand?");

        assert!(prompt.starts_with("Based on the following books information:"));
        assert!(prompt.contains("Book: Dune\n"));
        assert!(prompt.contains("Question: Which book is about sand?"));
        assert!(prompt.ends_with("Include relevant comparisons, themes, and insights."));
    }

    #[test]
    fn test_build_prompt_is_deterministic() {
        let books = vec![record("Dune"), record("Dune Messiah")];
        let question = "How do these compare?";

        let first = build_prompt(&build_context(&books), question);
        let second = build_prompt(&build_context(&books), question);
        assert_eq!(first, second);
    }
}
