use std::time::Duration;

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE};
use reqwest::Client;
use url::Url;

use crate::catalog::error::CatalogError;
use crate::catalog::types::ListingResponse;
use crate::config::ApiConfig;

/// Longest upstream error body kept in a `CatalogError::Upstream` message.
const ERROR_BODY_LIMIT: usize = 200;

/// HTTP client for the listing endpoint.
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    endpoint: Url,
    locale: String,
    timeout: Duration,
}

impl CatalogClient {
    pub fn new(api: &ApiConfig) -> Result<Self, CatalogError> {
        let raw = format!(
            "{}{}",
            api.base_url.trim_end_matches('/'),
            api.listing_path
        );
        let endpoint = Url::parse(&raw).map_err(|e| CatalogError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .connect_timeout(api.connect_timeout())
            .timeout(api.timeout())
            .build()
            .map_err(CatalogError::Client)?;

        Ok(Self {
            client,
            endpoint,
            locale: api.locale.clone(),
            timeout: api.timeout(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// GET the listing for an already serialized filter query.
    pub async fn fetch_listing(&self, filters: &str) -> Result<ListingResponse, CatalogError> {
        let mut url = self.endpoint.clone();
        url.set_query((!filters.is_empty()).then_some(filters));

        tracing::debug!(url = %url, "catalog request");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .header(ACCEPT_LANGUAGE, &self.locale)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body);
            let message: String = text.chars().take(ERROR_BODY_LIMIT).collect();
            return Err(CatalogError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&body).map_err(|source| CatalogError::Decode { source })
    }

    fn transport_error(&self, err: reqwest::Error) -> CatalogError {
        if err.is_timeout() {
            CatalogError::Timeout {
                duration: self.timeout.as_secs(),
            }
        } else {
            CatalogError::Connection { source: err }
        }
    }
}
