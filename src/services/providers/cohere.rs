/// Cohere generate API provider
///
/// Sends one generation request per call with a fixed sampling configuration
/// and returns the first candidate's text. The model name is the only tunable
/// piece, supplied from configuration.
use crate::{
    error::{AppError, AppResult},
    services::providers::GenerationProvider,
};
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const MAX_TOKENS: u32 = 500;
const TEMPERATURE: f32 = 0.7;

/// Request payload for Cohere's generate endpoint
#[derive(Serialize, Debug)]
struct CohereGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
    k: u32,
    stop_sequences: Vec<String>,
    return_likelihoods: &'a str,
}

/// Response from Cohere's generate endpoint
#[derive(Deserialize, Debug)]
struct CohereGenerateResponse {
    generations: Vec<CohereGeneration>,
}

/// Individual generation candidate within a response
#[derive(Deserialize, Debug)]
struct CohereGeneration {
    text: String,
}

#[derive(Debug, Clone)]
pub struct CohereProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
}

impl CohereProvider {
    /// Creates a new Cohere provider with the given request timeout
    pub fn new(
        api_key: String,
        api_url: String,
        model: String,
        timeout: Duration,
    ) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url,
            model,
        })
    }

    fn build_request<'a>(&'a self, prompt: &'a str) -> CohereGenerateRequest<'a> {
        CohereGenerateRequest {
            model: &self.model,
            prompt,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            k: 0,
            stop_sequences: Vec::new(),
            return_likelihoods: "NONE",
        }
    }

    /// Extract the first candidate's text, trimmed
    fn convert_response(&self, response: CohereGenerateResponse) -> AppResult<String> {
        response
            .generations
            .first()
            .map(|generation| generation.text.trim().to_string())
            .ok_or_else(|| {
                AppError::Generation("Cohere response contained no generations".to_string())
            })
    }
}

#[async_trait::async_trait]
impl GenerationProvider for CohereProvider {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let url = format!("{}/v1/generate", self.api_url);
        let body = self.build_request(prompt);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Generation(format!(
                "Cohere API returned status {}: {}",
                status, body
            )));
        }

        let generate_response: CohereGenerateResponse = response
            .json()
            .await
            .map_err(|e| AppError::Generation(format!("Failed to parse Cohere response: {}", e)))?;
        let text = self.convert_response(generate_response)?;

        tracing::info!(
            model = %self.model,
            chars = text.len(),
            provider = "cohere",
            "Generation completed"
        );

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_provider() -> CohereProvider {
        CohereProvider::new(
            "test_key".to_string(),
            "http://test.local".to_string(),
            "command".to_string(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_request_carries_fixed_parameters() {
        let provider = create_test_provider();
        let request = provider.build_request("Tell me about Dune.");

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "command");
        assert_eq!(json["prompt"], "Tell me about Dune.");
        assert_eq!(json["max_tokens"], 500);
        assert_eq!(json["k"], 0);
        assert_eq!(json["stop_sequences"], serde_json::json!([]));
        assert_eq!(json["return_likelihoods"], "NONE");

        let temperature = json["temperature"].as_f64().unwrap();
        assert!((temperature - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_convert_response_trims_first_candidate() {
        let provider = create_test_provider();

        let json = r#"{
            "generations": [
                {"text": "\n  A sweeping desert epic.  \n"},
                {"text": "ignored second candidate"}
            ]
        }"#;
        let response: CohereGenerateResponse = serde_json::from_str(json).unwrap();

        let text = provider.convert_response(response).unwrap();
        assert_eq!(text, "A sweeping desert epic.");
    }

    #[test]
    fn test_convert_response_no_generations() {
        let provider = create_test_provider();

        let response: CohereGenerateResponse =
            serde_json::from_str(r#"{"generations": []}"#).unwrap();

        let result = provider.convert_response(response);
        assert!(matches!(result, Err(AppError::Generation(_))));
    }
}
