/// Scripted assist client for tests
///
/// Returns canned suggestions instead of calling a model endpoint, so
/// controller and service tests can exercise assist flows deterministically.
/// The client counts simulated endpoint calls; the empty-input short-circuit
/// happens before the counter, matching the real client's behavior of never
/// touching the network for an empty batch.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::client::{AssistClient, AssistError, AssistResult, PrioritySuggestion, TaskRef};

/// Assist client with scripted responses
pub struct MockAssistClient {
    breakdown: Vec<String>,
    suggestions: Vec<PrioritySuggestion>,
    fail: bool,
    invocations: AtomicUsize,
}

impl MockAssistClient {
    /// Creates a mock that returns empty results
    pub fn new() -> Self {
        Self {
            breakdown: Vec::new(),
            suggestions: Vec::new(),
            fail: false,
            invocations: AtomicUsize::new(0),
        }
    }

    /// Scripts the titles returned by `break_down_task`
    pub fn with_breakdown(mut self, titles: Vec<String>) -> Self {
        self.breakdown = titles;
        self
    }

    /// Scripts the suggestions returned by `prioritize_tasks`
    pub fn with_suggestions(mut self, suggestions: Vec<PrioritySuggestion>) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// Makes every simulated endpoint call fail
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Number of simulated endpoint calls so far
    pub fn invocations(&self) -> usize {
        self.invocations.load(Ordering::SeqCst)
    }

    fn record_call(&self) -> AssistResult<()> {
        self.invocations.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(AssistError::Api {
                status: 500,
                message: "Mock endpoint failure".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for MockAssistClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssistClient for MockAssistClient {
    async fn break_down_task(&self, _title: &str) -> AssistResult<Vec<String>> {
        self.record_call()?;

        Ok(self.breakdown.clone())
    }

    async fn prioritize_tasks(&self, tasks: &[TaskRef]) -> AssistResult<Vec<PrioritySuggestion>> {
        // An empty batch never reaches the endpoint
        if tasks.is_empty() {
            return Ok(Vec::new());
        }

        self.record_call()?;

        Ok(self.suggestions.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskwise_core::models::task::Priority;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_returns_scripted_breakdown() {
        let client = MockAssistClient::new()
            .with_breakdown(vec!["Step one".to_string(), "Step two".to_string()]);

        let titles = client.break_down_task("Plan the offsite").await.unwrap();

        assert_eq!(titles, vec!["Step one", "Step two"]);
        assert_eq!(client.invocations(), 1);
    }

    #[tokio::test]
    async fn test_returns_scripted_suggestions() {
        let id = Uuid::new_v4();
        let client = MockAssistClient::new().with_suggestions(vec![PrioritySuggestion {
            id: id.to_string(),
            priority: Priority::High,
            reasoning: "Deadline today".to_string(),
        }]);

        let suggestions = client
            .prioritize_tasks(&[TaskRef::new(id, "Pay rent")])
            .await
            .unwrap();

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].priority, Priority::High);
    }

    #[tokio::test]
    async fn test_empty_batch_skips_endpoint() {
        let client = MockAssistClient::new().failing();

        let suggestions = client.prioritize_tasks(&[]).await.unwrap();

        assert!(suggestions.is_empty());
        assert_eq!(client.invocations(), 0);
    }

    #[tokio::test]
    async fn test_failing_mock_returns_api_error() {
        let client = MockAssistClient::new().failing();

        let error = client.break_down_task("Anything").await.unwrap_err();

        assert!(matches!(error, AssistError::Api { status: 500, .. }));
        assert_eq!(client.invocations(), 1);
    }
}
