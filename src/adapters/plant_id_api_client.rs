use async_trait::async_trait;
use serde::Deserialize;

use crate::core::interfaces::adapters::PlantIdentificationService;
use crate::core::models::{
    CareInstructions, EncodedImage, IdentificationRequest, IdentificationResult, PipelineError,
    Taxonomy, TextField,
};
use crate::global_constants::{
    LOG_TAG_PLANT_ID, MINIMUM_CONFIDENCE, PLANT_ID_API_KEY, PLANT_ID_API_KEY_HEADER,
    PLANT_ID_API_URL, REQUEST_TIMEOUT,
};

const UPSTREAM_MESSAGE_FIELDS: [&str; 3] = ["error", "message", "detail"];
const MAX_PLAIN_TEXT_MESSAGE_LEN: usize = 200;

#[derive(Debug, Default, Deserialize)]
struct PlantIdResponse {
    #[serde(default)]
    suggestions: Option<Vec<PlantIdSuggestion>>,
}

#[derive(Debug, Default, Deserialize)]
struct PlantIdSuggestion {
    #[serde(default)]
    id: Option<u64>,
    #[serde(default)]
    plant_name: TextField,
    #[serde(default)]
    probability: Option<f64>,
    #[serde(default)]
    plant_details: Option<PlantIdDetails>,
}

#[derive(Debug, Default, Deserialize)]
struct PlantIdDetails {
    #[serde(default)]
    common_names: Option<Vec<TextField>>,
    #[serde(default)]
    description: TextField,
    #[serde(default)]
    taxonomy: Option<PlantIdTaxonomy>,
    #[serde(default)]
    care_instructions: Option<PlantIdCareInstructions>,
}

#[derive(Debug, Default, Deserialize)]
struct PlantIdTaxonomy {
    #[serde(default)]
    family: TextField,
    #[serde(default)]
    genus: TextField,
    #[serde(default)]
    species: TextField,
}

#[derive(Debug, Default, Deserialize)]
struct PlantIdCareInstructions {
    #[serde(default)]
    watering: TextField,
    #[serde(default)]
    sunlight: TextField,
    #[serde(default)]
    soil: TextField,
}

pub fn build_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_else(|e| {
            log::warn!(
                "{} Failed to build HTTP client with timeout: {}, using defaults",
                LOG_TAG_PLANT_ID,
                e
            );
            reqwest::Client::new()
        })
}

pub struct PlantIdApiClient {
    http_client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl PlantIdApiClient {
    pub fn new(http_client: reqwest::Client) -> Self {
        if PLANT_ID_API_KEY.is_empty() {
            log::warn!(
                "{} No API key was configured at build time; Plant.id will reject requests",
                LOG_TAG_PLANT_ID
            );
        }

        Self::with_endpoint(http_client, PLANT_ID_API_URL, PLANT_ID_API_KEY)
    }

    pub fn with_endpoint(
        http_client: reqwest::Client,
        api_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    async fn send_request(&self, request: &IdentificationRequest) -> Result<String, PipelineError> {
        log::info!(
            "{} Sending identification request ({} base64 bytes)",
            LOG_TAG_PLANT_ID,
            request.images.iter().map(String::len).sum::<usize>()
        );

        let response = self
            .http_client
            .post(&self.api_url)
            .header(PLANT_ID_API_KEY_HEADER, &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                log::error!("{} Request failed: {}", LOG_TAG_PLANT_ID, e);
                PipelineError::IdentificationFailed(describe_transport_error(&e))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            log::error!("{} Failed to read response body: {}", LOG_TAG_PLANT_ID, e);
            PipelineError::IdentificationFailed(describe_transport_error(&e))
        })?;

        log::debug!(
            "{} Response status {} ({} bytes)",
            LOG_TAG_PLANT_ID,
            status,
            body.len()
        );

        if !status.is_success() {
            let upstream_message = extract_upstream_message(status, &body);
            log::error!(
                "{} Plant.id rejected the request: {}",
                LOG_TAG_PLANT_ID,
                upstream_message
            );
            return Err(PipelineError::IdentificationFailed(upstream_message));
        }

        Ok(body)
    }

    fn parse_response(body: &str) -> Result<PlantIdResponse, PipelineError> {
        serde_json::from_str(body).map_err(|e| {
            log::error!("{} Malformed response body: {}", LOG_TAG_PLANT_ID, e);
            PipelineError::IdentificationFailed(format!("malformed response: {}", e))
        })
    }

    /// Takes the first suggestion as ranked upstream and applies the confidence cutoff.
    fn select_top_suggestion(response: PlantIdResponse) -> Result<PlantIdSuggestion, PipelineError> {
        let Some(top_suggestion) = response.suggestions.unwrap_or_default().into_iter().next()
        else {
            log::info!("{} Response contained no suggestions", LOG_TAG_PLANT_ID);
            return Err(PipelineError::NoPlantDetected);
        };

        let probability = top_suggestion.probability.unwrap_or(0.0);
        if probability < MINIMUM_CONFIDENCE {
            log::info!(
                "{} Top suggestion confidence {:.2} is below {:.2}",
                LOG_TAG_PLANT_ID,
                probability,
                MINIMUM_CONFIDENCE
            );
            return Err(PipelineError::NoPlantDetected);
        }

        Ok(top_suggestion)
    }

    fn normalize_suggestion(suggestion: PlantIdSuggestion) -> IdentificationResult {
        let details = suggestion.plant_details.unwrap_or_default();
        let taxonomy = details.taxonomy.unwrap_or_default();
        let care_instructions = details.care_instructions.unwrap_or_default();

        IdentificationResult {
            id: suggestion.id.unwrap_or_default(),
            name: suggestion.plant_name.into_text(),
            common_names: details
                .common_names
                .unwrap_or_default()
                .into_iter()
                .map(TextField::into_text)
                .filter(|name| !name.is_empty())
                .collect(),
            confidence: suggestion.probability.unwrap_or(0.0),
            description: details.description.into_text(),
            taxonomy: Taxonomy {
                family: taxonomy.family.into_text(),
                genus: taxonomy.genus.into_text(),
                species: taxonomy.species.into_text(),
            },
            care_instructions: CareInstructions {
                watering: care_instructions.watering.into_text(),
                sunlight: care_instructions.sunlight.into_text(),
                soil: care_instructions.soil.into_text(),
            },
        }
    }
}

#[async_trait]
impl PlantIdentificationService for PlantIdApiClient {
    async fn identify(&self, image: &EncodedImage) -> Result<IdentificationResult, PipelineError> {
        let request = IdentificationRequest::for_image(image);
        let body = self.send_request(&request).await?;
        let response = Self::parse_response(&body)?;
        let suggestion = Self::select_top_suggestion(response)?;
        let result = Self::normalize_suggestion(suggestion);

        log::info!(
            "{} Identified {} with {}% confidence",
            LOG_TAG_PLANT_ID,
            result.name,
            result.confidence_percent()
        );

        Ok(result)
    }
}

fn describe_transport_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "the recognition service did not answer in time".to_string()
    } else if error.is_connect() {
        "could not connect to the recognition service".to_string()
    } else {
        error.to_string()
    }
}

fn extract_upstream_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(serde_json::Value::Object(fields)) = serde_json::from_str::<serde_json::Value>(body) {
        let field_message = UPSTREAM_MESSAGE_FIELDS
            .iter()
            .filter_map(|field| fields.get(*field))
            .find_map(|value| value.as_str())
            .map(str::trim)
            .filter(|message| !message.is_empty());

        if let Some(message) = field_message {
            return message.to_string();
        }
    }

    let plain_text = body.trim();
    if !plain_text.is_empty()
        && plain_text.len() <= MAX_PLAIN_TEXT_MESSAGE_LEN
        && !plain_text.starts_with('{')
        && !plain_text.starts_with('<')
    {
        return plain_text.to_string();
    }

    status.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ImageMimeType;
    use crate::test_support::{local_http_client, unreachable_url, OneShotHttpServer};

    const MONSTERA_RESPONSE: &str = r#"{
        "suggestions": [
            {
                "id": 123456,
                "plant_name": "Monstera deliciosa",
                "probability": 0.87,
                "plant_details": {
                    "common_names": ["Swiss cheese plant", "Split-leaf philodendron"],
                    "description": { "value": "A species of flowering plant native to tropical forests." },
                    "taxonomy": {
                        "family": "Araceae",
                        "genus": { "value": "Monstera" },
                        "species": "Monstera deliciosa"
                    },
                    "care_instructions": {
                        "watering": { "value": "Water when the top soil is dry." },
                        "sunlight": "Bright indirect light"
                    }
                }
            },
            {
                "id": 2,
                "plant_name": "Philodendron",
                "probability": 0.05
            }
        ]
    }"#;

    fn create_test_image() -> EncodedImage {
        EncodedImage::from_bytes(ImageMimeType::Jpeg, &[0xFF, 0xD8, 0xFF, 0xE0])
    }

    fn response_with_probability(probability: f64) -> String {
        format!(
            r#"{{ "suggestions": [ {{ "id": 1, "plant_name": "Aloe vera", "probability": {} }} ] }}"#,
            probability
        )
    }

    fn client_for(url: &str) -> PlantIdApiClient {
        PlantIdApiClient::with_endpoint(local_http_client(), url, "test-key")
    }

    #[tokio::test]
    async fn test_identify_normalizes_top_suggestion() {
        let server = OneShotHttpServer::respond_with_json("200 OK", MONSTERA_RESPONSE).await;
        let client = client_for(&server.url);

        let result = client.identify(&create_test_image()).await.unwrap();

        assert_eq!(result.id, 123456);
        assert_eq!(result.name, "Monstera deliciosa");
        assert_eq!(
            result.common_names,
            vec!["Swiss cheese plant".to_string(), "Split-leaf philodendron".to_string()]
        );
        assert_eq!(result.confidence, 0.87);
        assert_eq!(
            result.description,
            "A species of flowering plant native to tropical forests."
        );
        assert_eq!(result.taxonomy.family, "Araceae");
        assert_eq!(result.taxonomy.genus, "Monstera");
        assert_eq!(result.taxonomy.species, "Monstera deliciosa");
        assert_eq!(result.care_instructions.watering, "Water when the top soil is dry.");
        assert_eq!(result.care_instructions.sunlight, "Bright indirect light");
        assert_eq!(result.care_instructions.soil, "");
    }

    #[tokio::test]
    async fn test_identify_sends_key_payload_and_categories() {
        let server = OneShotHttpServer::respond_with_json("200 OK", MONSTERA_RESPONSE).await;
        let client = client_for(&server.url);
        let image = create_test_image();

        client.identify(&image).await.unwrap();
        let request = server.recorded_request().await;

        assert!(request.request_line.starts_with("POST "));
        assert_eq!(request.header("api-key"), Some("test-key"));
        let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(body["images"], serde_json::json!([image.payload()]));
        assert_eq!(
            body["plant_details"],
            serde_json::json!(["common_names", "taxonomy", "description", "care_instructions"])
        );
    }

    #[tokio::test]
    async fn test_empty_suggestions_is_no_plant_detected() {
        let server = OneShotHttpServer::respond_with_json("200 OK", r#"{ "suggestions": [] }"#).await;
        let client = client_for(&server.url);

        let result = client.identify(&create_test_image()).await;

        assert_eq!(result, Err(PipelineError::NoPlantDetected));
    }

    #[tokio::test]
    async fn test_missing_suggestions_is_no_plant_detected() {
        let server = OneShotHttpServer::respond_with_json("200 OK", r#"{ "suggestions": null }"#).await;
        let client = client_for(&server.url);

        let result = client.identify(&create_test_image()).await;

        assert_eq!(result, Err(PipelineError::NoPlantDetected));
    }

    #[tokio::test]
    async fn test_confidence_below_threshold_is_no_plant_detected() {
        let server =
            OneShotHttpServer::respond_with_json("200 OK", &response_with_probability(0.29)).await;
        let client = client_for(&server.url);

        let result = client.identify(&create_test_image()).await;

        assert_eq!(result, Err(PipelineError::NoPlantDetected));
    }

    #[tokio::test]
    async fn test_confidence_at_threshold_succeeds() {
        let server =
            OneShotHttpServer::respond_with_json("200 OK", &response_with_probability(0.30)).await;
        let client = client_for(&server.url);

        let result = client.identify(&create_test_image()).await.unwrap();

        assert_eq!(result.name, "Aloe vera");
        assert_eq!(result.confidence, 0.30);
        assert!(result.common_names.is_empty());
        assert_eq!(result.description, "");
    }

    #[tokio::test]
    async fn test_auth_failure_carries_upstream_message() {
        let server = OneShotHttpServer::respond_with_json(
            "401 Unauthorized",
            r#"{ "error": "Invalid API key" }"#,
        )
        .await;
        let client = client_for(&server.url);

        let result = client.identify(&create_test_image()).await;

        assert_eq!(
            result,
            Err(PipelineError::IdentificationFailed("Invalid API key".to_string()))
        );
    }

    #[tokio::test]
    async fn test_server_error_without_body_falls_back_to_status() {
        let server =
            OneShotHttpServer::respond_with("500 Internal Server Error", "text/plain", Vec::new())
                .await;
        let client = client_for(&server.url);

        let result = client.identify(&create_test_image()).await;

        assert!(
            matches!(result, Err(PipelineError::IdentificationFailed(message)) if message.contains("500"))
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_identification_failed() {
        let server = OneShotHttpServer::respond_with_json("200 OK", "{ not json").await;
        let client = client_for(&server.url);

        let result = client.identify(&create_test_image()).await;

        assert!(
            matches!(result, Err(PipelineError::IdentificationFailed(message)) if message.starts_with("malformed response"))
        );
    }

    #[tokio::test]
    async fn test_network_failure_is_identification_failed() {
        let client = client_for(&unreachable_url().await);

        let result = client.identify(&create_test_image()).await;

        assert!(matches!(result, Err(PipelineError::IdentificationFailed(_))));
    }

    #[test]
    fn test_normalize_suggestion_fills_every_field_for_sparse_input() {
        let suggestion: PlantIdSuggestion = serde_json::from_str(
            r#"{ "plant_name": null, "probability": 0.5, "plant_details": { "taxonomy": null, "common_names": null } }"#,
        )
        .unwrap();

        let result = PlantIdApiClient::normalize_suggestion(suggestion);

        assert_eq!(result.id, 0);
        assert_eq!(result.name, "");
        assert!(result.common_names.is_empty());
        assert_eq!(result.taxonomy, Taxonomy::default());
        assert_eq!(result.care_instructions, CareInstructions::default());
    }

    #[test]
    fn test_select_top_suggestion_does_not_rerank() {
        let response: PlantIdResponse = serde_json::from_str(
            r#"{ "suggestions": [
                { "plant_name": "First", "probability": 0.4 },
                { "plant_name": "Second", "probability": 0.9 }
            ] }"#,
        )
        .unwrap();

        let suggestion = PlantIdApiClient::select_top_suggestion(response).unwrap();

        assert_eq!(suggestion.plant_name.into_text(), "First");
    }

    #[test]
    fn test_extract_upstream_message_prefers_known_fields() {
        let status = reqwest::StatusCode::BAD_REQUEST;

        assert_eq!(
            extract_upstream_message(status, r#"{ "message": "Image too large" }"#),
            "Image too large"
        );
        assert_eq!(extract_upstream_message(status, "Quota exceeded"), "Quota exceeded");
        assert_eq!(extract_upstream_message(status, "<html></html>"), "400 Bad Request");
        assert_eq!(extract_upstream_message(status, r#"{ "error": "" }"#), "400 Bad Request");
    }
}
