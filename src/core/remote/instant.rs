//! Wolfram|Alpha Instant Calculator (short answers API).

use reqwest::StatusCode;

use crate::core::config::ServiceConfig;

use super::ProviderError;

pub(super) async fn answer(
    client: &reqwest::Client,
    service: &ServiceConfig,
    question: &str,
) -> Result<String, ProviderError> {
    let response = client
        .get(&service.endpoint)
        .query(&[("i", question), ("appid", service.api_key.as_str())])
        .send()
        .await?;
    let status = response.status();
    let body = response.text().await?;
    accept(status, &body).map_err(ProviderError::Unusable)
}

/// The API reports misses as plain-text bodies starting with the product
/// name, or as "No short answer available"; both are misses whatever the
/// status code says.
fn accept(status: StatusCode, body: &str) -> Result<String, String> {
    if !status.is_success() {
        return Err(format!("status {status}"));
    }
    if body.is_empty() {
        return Err("empty body".to_string());
    }
    if body.starts_with("Wolfram|Alpha") {
        return Err("error text body".to_string());
    }
    if body.to_lowercase().contains("no short answer") {
        return Err("no short answer".to_string());
    }
    Ok(body.to_string())
}
