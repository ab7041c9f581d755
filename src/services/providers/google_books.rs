/// Google Books volumes API provider
///
/// Issues a single GET per search and maps each returned volume's
/// `volumeInfo` into a uniform `BookRecord`. Result order is the service's
/// ranking order and is preserved as-is.
use crate::{
    error::{AppError, AppResult},
    models::{BookRecord, VolumesResponse},
    services::providers::BookSearchProvider,
};
use reqwest::Client as HttpClient;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct GoogleBooksProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl GoogleBooksProvider {
    /// Creates a new Google Books provider with the given request timeout
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url,
        })
    }

    /// Map a raw volumes response into uniform records, preserving order
    fn convert_response(&self, response: VolumesResponse) -> Vec<BookRecord> {
        response
            .items
            .into_iter()
            .map(|item| BookRecord::from(item.volume_info))
            .collect()
    }
}

#[async_trait::async_trait]
impl BookSearchProvider for GoogleBooksProvider {
    async fn search_volumes(&self, query: &str, max_results: u32) -> AppResult<Vec<BookRecord>> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        let url = format!("{}/volumes", self.api_url);
        let max_results_param = max_results.to_string();

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("q", query),
                ("key", self.api_key.as_str()),
                ("maxResults", max_results_param.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Google Books API returned status {}: {}",
                status, body
            )));
        }

        let volumes: VolumesResponse = response.json().await?;
        let records = self.convert_response(volumes);

        tracing::info!(
            query = %query,
            results = records.len(),
            provider = "google_books",
            "Volume search completed"
        );

        Ok(records)
    }
}
