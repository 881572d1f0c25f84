//! Remote fallback services: Wolfram|Alpha Instant, Gemini, Wolfram|Alpha
//! LLM. They run strictly in that order once the local engine fails, and a
//! stage takes part only when its API key is configured.

mod generative;
mod instant;
mod llm_api;

use crate::core::config::{Config, ServiceConfig};
use crate::core::session::EvalSource;

/// Why a stage produced no usable answer. Transport failures and rejected
/// bodies are treated the same way: the chain moves on.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unusable answer: {0}")]
    Unusable(String),
}

/// One configured stage of the fallback chain.
pub enum RemoteProvider<'a> {
    Instant(&'a ServiceConfig),
    Generative(&'a ServiceConfig),
    LlmApi(&'a ServiceConfig),
}

impl RemoteProvider<'_> {
    /// Source label this stage commits results under.
    pub fn source(&self) -> EvalSource {
        match self {
            RemoteProvider::Instant(_) => EvalSource::WolframInstant,
            RemoteProvider::Generative(_) => EvalSource::Gemini,
            RemoteProvider::LlmApi(_) => EvalSource::WolframLlm,
        }
    }

    /// Ask this stage for an answer. Remote services get the raw question,
    /// not the preprocessed form the local engine sees.
    pub async fn try_answer(
        &self,
        client: &reqwest::Client,
        question: &str,
    ) -> Result<String, ProviderError> {
        match self {
            RemoteProvider::Instant(service) => instant::answer(client, service, question).await,
            RemoteProvider::Generative(service) => {
                generative::answer(client, service, question).await
            }
            RemoteProvider::LlmApi(service) => llm_api::answer(client, service, question).await,
        }
    }
}

/// The configured stages in fallback order.
pub fn fallback_chain(config: &Config) -> Vec<RemoteProvider<'_>> {
    let mut chain = Vec::new();
    if let Some(service) = &config.wolfram_instant {
        chain.push(RemoteProvider::Instant(service));
    }
    if let Some(service) = &config.gemini {
        chain.push(RemoteProvider::Generative(service));
    }
    if let Some(service) = &config.wolfram_llm {
        chain.push(RemoteProvider::LlmApi(service));
    }
    chain
}
