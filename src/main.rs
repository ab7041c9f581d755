use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use libris::services::providers::{CohereProvider, GoogleBooksProvider};
use libris::{BookAssistant, Config, DEFAULT_MAX_RECOMMENDATIONS, DEFAULT_MAX_RESULTS};

const FALLBACK_ANALYSIS: &str =
    "I apologize, but I encountered an error while analyzing the books.";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Install the subscriber exactly once, before anything can emit events
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "libris=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let timeout = Duration::from_secs(config.http_timeout_secs);

    let search = Arc::new(GoogleBooksProvider::new(
        config.google_books_api_key.clone(),
        config.google_books_api_url.clone(),
        timeout,
    )?);
    let generator = Arc::new(CohereProvider::new(
        config.cohere_api_key.clone(),
        config.cohere_api_url.clone(),
        config.generation_model.clone(),
        timeout,
    )?);

    let assistant = BookAssistant::new(search, generator);

    // Search for books about artificial intelligence ethics
    let books = match assistant
        .search_books("artificial intelligence ethics", DEFAULT_MAX_RESULTS)
        .await
    {
        Ok(books) => books,
        Err(e) => {
            tracing::error!(error = %e, "Book search failed");
            Vec::new()
        }
    };

    // Analyze them against a question
    let analysis = match assistant
        .analyze_books(
            &books,
            "What are the main ethical concerns discussed in these books regarding AI?",
        )
        .await
    {
        Ok(analysis) => analysis,
        Err(e) => {
            tracing::error!(error = %e, "Book analysis failed");
            FALLBACK_ANALYSIS.to_string()
        }
    };

    // Derive similar-book suggestions from a reference title
    let recommendations = match assistant
        .recommend_similar_books("Superintelligence by Nick Bostrom", DEFAULT_MAX_RECOMMENDATIONS)
        .await
    {
        Ok(recommendations) => recommendations,
        Err(e) => {
            tracing::error!(error = %e, "Recommendation failed");
            Vec::new()
        }
    };

    println!("Analysis: {}", analysis);
    println!("\nRecommended Books:");
    for book in &recommendations {
        println!("- {} by {}", book.display_title(), book.authors.join(", "));
    }

    Ok(())
}
