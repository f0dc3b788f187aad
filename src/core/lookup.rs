use crate::core::{ConfigProvider, LookupResult};
use crate::utils::error::{EtlError, Result};
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Client;
use serde_json::Value;
use url::Url;

/// Resolves one campaign identifier to at most one recall record.
pub struct RecallClient {
    client: Client,
    endpoint: String,
    query_param: String,
    user_agent: String,
    debug: bool,
}

impl RecallClient {
    pub fn new<C: ConfigProvider>(client: Client, config: &C) -> Self {
        Self {
            client,
            endpoint: config.api_endpoint().to_string(),
            query_param: config.query_param().to_string(),
            user_agent: config.user_agent().to_string(),
            debug: config.debug(),
        }
    }

    /// The identifier is sent as-is; only URL encoding is applied.
    pub fn request_url(&self, id: &str) -> Result<Url> {
        let url = Url::parse_with_params(&self.endpoint, &[(self.query_param.as_str(), id)])?;
        Ok(url)
    }

    /// `Ok(None)` means the service answered but had nothing for `id`.
    pub async fn fetch(&self, id: &str) -> Result<Option<LookupResult>> {
        let url = self.request_url(id)?;
        tracing::info!("Calling API: {}", url);

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, self.user_agent.as_str())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        let body = response.text().await?;

        if !status.is_success() {
            return Err(EtlError::HttpStatusError {
                status: status.as_u16(),
                body,
            });
        }

        let json: Value = match serde_json::from_str(&body) {
            Ok(json) => json,
            Err(e) => {
                if self.debug {
                    tracing::info!("Status: {}", status);
                    tracing::info!("Raw Response: {}", body);
                }
                return Err(e.into());
            }
        };
        if self.debug {
            tracing::info!("API Response: {}", serde_json::to_string_pretty(&json)?);
        }

        Ok(first_result(json))
    }
}

/// Picks `results[0]` when it is an object.
pub fn first_result(json: Value) -> Option<LookupResult> {
    let Value::Object(mut body) = json else {
        return None;
    };

    match body.remove("results") {
        Some(Value::Array(items)) => match items.into_iter().next() {
            Some(Value::Object(map)) => Some(LookupResult::new(map)),
            _ => None,
        },
        _ => None,
    }
}
