/// Gemini-backed assist client
///
/// Talks to the Gemini `generateContent` endpoint with a response schema so
/// the model is constrained to emit exactly the JSON shape each operation
/// expects. The text of the first candidate's first part is decoded as that
/// shape; anything else is a typed error for the caller to handle.
///
/// # Request shape
///
/// ```json
/// {
///     "contents": [{ "parts": [{ "text": "<prompt>" }] }],
///     "generationConfig": {
///         "responseMimeType": "application/json",
///         "responseSchema": { ... }
///     }
/// }
/// ```
///
/// # Example
///
/// ```no_run
/// use taskwise_assist::{AssistClient, GeminiClient};
/// use taskwise_assist::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
///
/// # async fn example() -> Result<(), taskwise_assist::AssistError> {
/// let client = GeminiClient::new("api-key", DEFAULT_MODEL, DEFAULT_BASE_URL);
/// let titles = client.break_down_task("Plan the offsite").await?;
/// # Ok(())
/// # }
/// ```

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::client::{AssistClient, AssistError, AssistResult, PrioritySuggestion, TaskRef};

/// Model used when no override is configured
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Endpoint base used when no override is configured
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Client for the Gemini generateContent API
pub struct GeminiClient {
    http_client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

/// Gemini request format
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: JsonValue,
}

/// Gemini response format
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
}

#[derive(Debug, Deserialize)]
struct ResponseCandidate {
    #[serde(default)]
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GeminiClient {
    /// Creates a client for one model behind one endpoint base
    pub fn new(api_key: &str, model: &str, base_url: &str) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Sends one schema-constrained generation request and decodes the
    /// candidate text as `T`
    async fn generate<T: serde::de::DeserializeOwned>(
        &self,
        prompt: String,
        response_schema: JsonValue,
    ) -> AssistResult<T> {
        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            },
        };

        let url = self.generate_url();
        tracing::debug!(model = %self.model, "Sending generation request");

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<JsonValue>(&body)
                .ok()
                .and_then(|v| v["error"]["message"].as_str().map(String::from))
                .unwrap_or(body);
            return Err(AssistError::Api { status, message });
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AssistError::InvalidPayload(e.to_string()))?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or(AssistError::EmptyResponse)?;

        serde_json::from_str(&text).map_err(|e| AssistError::InvalidPayload(e.to_string()))
    }
}

#[async_trait]
impl AssistClient for GeminiClient {
    async fn break_down_task(&self, title: &str) -> AssistResult<Vec<String>> {
        tracing::debug!(model = %self.model, "Requesting task breakdown");

        self.generate(breakdown_prompt(title), breakdown_schema())
            .await
    }

    async fn prioritize_tasks(&self, tasks: &[TaskRef]) -> AssistResult<Vec<PrioritySuggestion>> {
        // Nothing to prioritize, nothing to send
        if tasks.is_empty() {
            return Ok(Vec::new());
        }

        tracing::debug!(model = %self.model, count = tasks.len(), "Requesting task prioritization");

        self.generate(prioritize_prompt(tasks)?, prioritize_schema())
            .await
    }
}

fn breakdown_prompt(title: &str) -> String {
    format!(
        "Break down the following task into 3 to 5 actionable subtasks. \
         Task: \"{title}\". Return only the subtask titles."
    )
}

fn prioritize_prompt(tasks: &[TaskRef]) -> AssistResult<String> {
    let batch = serde_json::to_string(tasks)
        .map_err(|e| AssistError::InvalidPayload(format!("Failed to encode task batch: {e}")))?;

    Ok(format!(
        "Analyze these tasks and assign a priority (High, Medium, Low) to each \
         based on urgency or importance implied by the title. Provide a very \
         short reasoning. Tasks: {batch}"
    ))
}

fn breakdown_schema() -> JsonValue {
    serde_json::json!({
        "type": "ARRAY",
        "items": { "type": "STRING" }
    })
}

fn prioritize_schema() -> JsonValue {
    serde_json::json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "STRING" },
                "priority": { "type": "STRING", "enum": ["High", "Medium", "Low"] },
                "reasoning": { "type": "STRING" }
            },
            "required": ["id", "priority", "reasoning"]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_generate_url_format() {
        let client = GeminiClient::new("key", "gemini-3-flash-preview", "https://example.com");
        assert_eq!(
            client.generate_url(),
            "https://example.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = GeminiClient::new("key", "m", "https://example.com/");
        assert_eq!(
            client.generate_url(),
            "https://example.com/v1beta/models/m:generateContent"
        );
    }

    #[test]
    fn test_breakdown_prompt_embeds_title() {
        let prompt = breakdown_prompt("Buy milk");

        assert!(prompt.contains("\"Buy milk\""));
        assert!(prompt.contains("3 to 5"));
        assert!(prompt.contains("Return only the subtask titles"));
    }

    #[test]
    fn test_prioritize_prompt_embeds_task_batch() {
        let id = Uuid::new_v4();
        let tasks = vec![TaskRef::new(id, "Pay rent")];

        let prompt = prioritize_prompt(&tasks).unwrap();
        assert!(prompt.contains(&id.to_string()));
        assert!(prompt.contains("Pay rent"));
        assert!(prompt.contains("(High, Medium, Low)"));
    }

    #[test]
    fn test_breakdown_schema_is_string_array() {
        let schema = breakdown_schema();

        assert_eq!(schema["type"], "ARRAY");
        assert_eq!(schema["items"]["type"], "STRING");
    }

    #[test]
    fn test_prioritize_schema_constrains_levels() {
        let schema = prioritize_schema();
        let priority = &schema["items"]["properties"]["priority"];

        let levels = priority["enum"].as_array().unwrap();
        assert_eq!(levels.len(), 3);
        assert!(levels.contains(&serde_json::json!("High")));
        assert!(levels.contains(&serde_json::json!("Medium")));
        assert!(levels.contains(&serde_json::json!("Low")));

        let required = schema["items"]["required"].as_array().unwrap();
        assert_eq!(required.len(), 3);
    }
}
