//! Wolfram|Alpha LLM API: best-effort last resort.

use crate::core::config::ServiceConfig;

use super::ProviderError;

pub(super) async fn answer(
    client: &reqwest::Client,
    service: &ServiceConfig,
    question: &str,
) -> Result<String, ProviderError> {
    let response = client
        .get(&service.endpoint)
        .query(&[("input", question), ("appid", service.api_key.as_str())])
        .send()
        .await?;
    // No status check; any non-empty body counts as an answer.
    let body = response.text().await?;
    if body.is_empty() {
        return Err(ProviderError::Unusable("empty body".to_string()));
    }
    Ok(body)
}
