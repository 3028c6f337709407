use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{RecommenderConfig, entities::app_errors::CoreError},
    recipe::ports::RecipeSuggester,
};

/// Client for the external recipe recommender.
///
/// POSTs the ingredient list and reads back ranked titles. Without an
/// endpoint every call fails, which the recipe service treats as "use the
/// local overlap ranking".
#[derive(Debug, Clone)]
pub struct HttpRecipeSuggester {
    endpoint: Option<String>,
    client: Client,
}

#[derive(Debug, Serialize)]
struct SuggestionRequest {
    ingredients: Vec<String>,
    top_n: usize,
}

#[derive(Debug, Deserialize)]
struct SuggestionResponse {
    titles: Vec<String>,
}

impl HttpRecipeSuggester {
    pub fn new(config: &RecommenderConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build recommender client: {}", e);
                CoreError::InvalidConfiguration(format!("recommender client: {}", e))
            })?;

        Ok(Self {
            endpoint: config.endpoint.clone().filter(|url| !url.trim().is_empty()),
            client,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }
}

impl RecipeSuggester for HttpRecipeSuggester {
    async fn suggest_recipe_titles(
        &self,
        ingredient_names: Vec<String>,
        top_n: usize,
    ) -> Result<Vec<String>, CoreError> {
        let Some(endpoint) = &self.endpoint else {
            return Err(CoreError::ExternalServiceError(
                "recommender not configured".to_string(),
            ));
        };

        let response = self
            .client
            .post(endpoint)
            .json(&SuggestionRequest {
                ingredients: ingredient_names,
                top_n,
            })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Recommender request failed: {}", e);
                CoreError::ExternalServiceError(format!("recommender error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Recommender error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "recommender returned error: {} - {}",
                status, error_text
            )));
        }

        let body: SuggestionResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse recommender response: {}", e);
            CoreError::ExternalServiceError(format!("failed to parse recommender response: {}", e))
        })?;

        Ok(body.titles.into_iter().take(top_n).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_suggester_fails_without_request() {
        let suggester = HttpRecipeSuggester::new(&RecommenderConfig {
            endpoint: Some("  ".to_string()),
            ..RecommenderConfig::default()
        })
        .unwrap();

        assert!(!suggester.is_configured());
        let result = suggester
            .suggest_recipe_titles(vec!["eggs".to_string()], 3)
            .await;
        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }

    #[test]
    fn test_request_shape() {
        let body = serde_json::to_value(SuggestionRequest {
            ingredients: vec!["eggs".to_string()],
            top_n: 2,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"ingredients": ["eggs"], "top_n": 2}));
    }
}
