// # LuaDNS HTTP Client
//
// Thin wrapper over the LuaDNS REST API v1.
//
// ## API Reference
//
// - LuaDNS REST API: https://www.luadns.com/api.html
// - List Zones: GET `/zones`
// - List Records: GET `/zones/:zone_id/records`
// - Create Record: POST `/zones/:zone_id/records`
// - Update Record: PUT `/zones/:zone_id/records/:record_id`
// - Delete Record: DELETE `/zones/:zone_id/records/:record_id`
//
// ## Transport Contract
//
// - HTTP Basic auth on every request (account email / API key)
// - `Accept: application/json` on every request, `Content-Type:
//   application/json` on requests with a body
// - 30 second client timeout
// - Any non-2xx response becomes `Error::Api` with the status and the raw
//   body text
// - No retries, no local rate limiting. LuaDNS allows 1200 requests per
//   5 minutes; going over surfaces as an ordinary `Error::Api`.
//
// ## Security
//
// The API key never appears in logs or in `Debug` output.

use crate::types::{LuaDnsRecord, LuaDnsZone};
use async_trait::async_trait;
use libdns_core::{Context, Error, Result};
use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;

/// LuaDNS API base URL
pub const LUADNS_API_BASE: &str = "https://api.luadns.com/v1";

/// Default HTTP timeout for API requests (30 seconds)
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

const JSON: &str = "application/json";

/// The LuaDNS endpoints the provider relies on
///
/// [`LuaDnsClient`] is the production implementation; tests substitute
/// their own.
#[async_trait]
pub trait LuaDnsApi: Send + Sync {
    /// Fail with a configuration error when credentials are missing
    ///
    /// Called before any request is issued.
    fn ensure_configured(&self) -> Result<()>;

    /// GET `/zones`
    async fn list_zones(&self, ctx: &Context) -> Result<Vec<LuaDnsZone>>;

    /// GET `/zones/:zone_id/records`
    async fn list_records(&self, ctx: &Context, zone_id: u64) -> Result<Vec<LuaDnsRecord>>;

    /// POST `/zones/:zone_id/records`
    async fn create_record(
        &self,
        ctx: &Context,
        zone_id: u64,
        record: &LuaDnsRecord,
    ) -> Result<LuaDnsRecord>;

    /// PUT `/zones/:zone_id/records/:record_id`
    async fn update_record(
        &self,
        ctx: &Context,
        zone_id: u64,
        record_id: u64,
        record: &LuaDnsRecord,
    ) -> Result<LuaDnsRecord>;

    /// DELETE `/zones/:zone_id/records/:record_id`
    async fn delete_record(&self, ctx: &Context, zone_id: u64, record_id: u64) -> Result<()>;
}

/// HTTP client for the LuaDNS API
#[derive(Clone)]
pub struct LuaDnsClient {
    /// Account email, sent as the Basic auth username
    email: String,

    /// API key, sent as the Basic auth password
    /// ⚠️ NEVER log this value
    api_key: String,

    /// Base URL without trailing slash
    endpoint: String,

    http: reqwest::Client,
}

// Custom Debug implementation that hides the API key
impl fmt::Debug for LuaDnsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LuaDnsClient")
            .field("email", &self.email)
            .field("api_key", &"<REDACTED>")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl LuaDnsClient {
    /// Create a client against the public LuaDNS API
    ///
    /// Credentials are not validated here: empty values are reported as a
    /// configuration error by the first operation instead.
    pub fn new(email: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(|e| Error::transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            email: email.into(),
            api_key: api_key.into(),
            endpoint: LUADNS_API_BASE.to_string(),
            http,
        })
    }

    /// Point the client at another base URL (staging, mock servers)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    /// Base URL requests are sent to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Account email used for authentication
    pub fn email(&self) -> &str {
        &self.email
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    /// Send one authenticated request and reject non-2xx responses
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&LuaDnsRecord>,
    ) -> Result<reqwest::Response> {
        tracing::debug!("LuaDNS request: {} {}", method, path);

        let mut request = self
            .http
            .request(method, self.url(path))
            .basic_auth(&self.email, Some(&self.api_key))
            .header(ACCEPT, JSON);

        if let Some(record) = body {
            let payload = encode_body(path, record)?;
            request = request.header(CONTENT_TYPE, JSON).body(payload);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::transport(format!("request to {} timed out: {}", path, e))
            } else {
                Error::transport(format!("request to {} failed: {}", path, e))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            tracing::debug!("LuaDNS responded {} to {}", status, path);
            return Err(Error::api(status.as_u16(), text));
        }

        Ok(response)
    }

    /// Send a request and decode its JSON body, racing the caller's context
    async fn call<T: DeserializeOwned>(
        &self,
        ctx: &Context,
        method: Method,
        path: &str,
        body: Option<&LuaDnsRecord>,
    ) -> Result<T> {
        ctx.run(async {
            let response = self.execute(method, path, body).await?;
            response
                .json::<T>()
                .await
                .map_err(|e| Error::transport(format!("failed to decode {} response: {}", path, e)))
        })
        .await
    }
}

/// Serialize a request body; failures count as request construction errors
fn encode_body<T: Serialize + ?Sized>(path: &str, body: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(body)
        .map_err(|e| Error::transport(format!("failed to encode {} request: {}", path, e)))
}

#[async_trait]
impl LuaDnsApi for LuaDnsClient {
    fn ensure_configured(&self) -> Result<()> {
        if self.email.is_empty() {
            return Err(Error::config("email is required"));
        }
        if self.api_key.is_empty() {
            return Err(Error::config("API key is required"));
        }
        Ok(())
    }

    async fn list_zones(&self, ctx: &Context) -> Result<Vec<LuaDnsZone>> {
        self.call(ctx, Method::GET, "/zones", None).await
    }

    async fn list_records(&self, ctx: &Context, zone_id: u64) -> Result<Vec<LuaDnsRecord>> {
        let path = format!("/zones/{}/records", zone_id);
        self.call(ctx, Method::GET, &path, None).await
    }

    async fn create_record(
        &self,
        ctx: &Context,
        zone_id: u64,
        record: &LuaDnsRecord,
    ) -> Result<LuaDnsRecord> {
        let path = format!("/zones/{}/records", zone_id);
        self.call(ctx, Method::POST, &path, Some(record)).await
    }

    async fn update_record(
        &self,
        ctx: &Context,
        zone_id: u64,
        record_id: u64,
        record: &LuaDnsRecord,
    ) -> Result<LuaDnsRecord> {
        let path = format!("/zones/{}/records/{}", zone_id, record_id);
        self.call(ctx, Method::PUT, &path, Some(record)).await
    }

    async fn delete_record(&self, ctx: &Context, zone_id: u64, record_id: u64) -> Result<()> {
        let path = format!("/zones/{}/records/{}", zone_id, record_id);
        ctx.run(async {
            self.execute(Method::DELETE, &path, None).await?;
            Ok(())
        })
        .await
    }
}
