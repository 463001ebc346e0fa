// src/ai/gateway.rs
use crate::ai::{GatewayError, GeminiProvider, SearchPrompt};
use crate::config::AiConfig;
use crate::domain::{AiMatches, Listing};
use serde::Deserialize;
use std::time::Instant;
use tracing::{error, info, warn};

pub const UNAVAILABLE_SUMMARY: &str = "AI search is currently unavailable.";
pub const FAILURE_SUMMARY: &str =
    "Sorry, I couldn't connect to the genius brain right now. Please try browsing our list below!";

/// A generative model that answers one prompt with JSON text.
pub trait SearchProvider: Send + Sync {
    fn complete(&self, api_key: &str, prompt: &SearchPrompt) -> Result<String, GatewayError>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Recommendation {
    recommended_property_ids: Vec<String>,
    summary: String,
}

/// Natural-language search over the catalog. Never fails: problems turn
/// into an empty pick list with an explanatory summary.
pub struct AiSearchGateway {
    api_key: Option<String>,
    provider: Box<dyn SearchProvider>,
}

impl AiSearchGateway {
    pub fn new(api_key: Option<String>, provider: Box<dyn SearchProvider>) -> Self {
        Self { api_key, provider }
    }

    pub fn from_config(cfg: &AiConfig) -> Result<Self, GatewayError> {
        let provider = GeminiProvider::new(cfg)?;
        if cfg.api_key.is_none() {
            warn!("API key is missing, AI search will not work");
        } else {
            info!(endpoint = provider.endpoint(), "AI search configured");
        }
        Ok(Self::new(cfg.api_key.clone(), Box::new(provider)))
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// `query` must be non-empty after trimming; callers skip blank queries.
    pub fn search(&self, query: &str, catalog: &[Listing]) -> AiMatches {
        let Some(api_key) = self.api_key.as_deref() else {
            return AiMatches {
                ids: Vec::new(),
                summary: UNAVAILABLE_SUMMARY.to_string(),
            };
        };

        let start = Instant::now();
        match self.try_search(api_key, query, catalog) {
            Ok(matches) => {
                info!(
                    query_len = query.len(),
                    hits = matches.ids.len(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "AI search answered"
                );
                matches
            }
            Err(e) => {
                error!(
                    error = %e,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "AI search failed"
                );
                AiMatches {
                    ids: Vec::new(),
                    summary: FAILURE_SUMMARY.to_string(),
                }
            }
        }
    }

    fn try_search(
        &self,
        api_key: &str,
        query: &str,
        catalog: &[Listing],
    ) -> Result<AiMatches, GatewayError> {
        let prompt = SearchPrompt::build(query, catalog)?;
        let text = self.provider.complete(api_key, &prompt)?;
        let text = text.trim();
        if text.is_empty() {
            return Err(GatewayError::EmptyResponse);
        }

        let rec: Recommendation =
            serde_json::from_str(text).map_err(|e| GatewayError::Malformed(e.to_string()))?;

        Ok(AiMatches {
            ids: rec.recommended_property_ids,
            summary: rec.summary,
        })
    }
}
