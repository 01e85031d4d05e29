// API client module: a small blocking HTTP client for the EveryoneAPI
// phone lookup endpoint. One call to `lookup` is one POST; nothing is
// retried or cached.

use reqwest::blocking::Client;
use tracing::{debug, info, warn};

use crate::config::Credentials;
use crate::error::{Error, Result};
use crate::fields::FieldSet;
use crate::models::LookupResult;

/// Lookup endpoint; the phone number is appended as the last path segment.
pub const BASE_URL: &str = "https://api.everyoneapi.com/v1/phone/";

/// Holds a reqwest blocking client and the base URL lookups are sent to.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Client for the public EveryoneAPI endpoint.
    pub fn new() -> Result<Self> {
        Self::with_base_url(BASE_URL)
    }

    /// Client for an alternate endpoint (a sandbox proxy or a test server).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("whatphone/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(ApiClient {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL for a number. The number is used as supplied.
    pub fn endpoint(&self, number: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), number)
    }

    /// Look up `number`, asking for `fields`. An empty set is sent as is,
    /// which the service answers with every data point.
    pub fn lookup(
        &self,
        credentials: &Credentials,
        number: &str,
        fields: &FieldSet,
    ) -> Result<LookupResult> {
        let url = self.endpoint(number);
        let data = fields.joined();
        debug!(%url, data = %data, "sending lookup request");

        let res = self
            .client
            .post(&url)
            .basic_auth(&credentials.account_sid, Some(&credentials.auth_token))
            .form(&[("data", data.as_str())])
            .send()?;

        let status = res.status();
        if !status.is_success() {
            warn!(%status, "lookup rejected");
            return Err(Error::Status(status.to_string()));
        }

        let body = res.text()?;
        let result: LookupResult = serde_json::from_str(&body)?;
        info!(number = %result.number, missed = result.missed.len(), "lookup complete");
        Ok(result)
    }
}
