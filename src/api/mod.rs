//! Typed access layer over the platform's REST backend.
//!
//! One module per backend resource, one async function per endpoint. Each
//! function builds the request (path interpolation plus query-string
//! serialization), performs exactly one network call through the shared
//! [`ApiClient`], and returns the parsed body. No retries, caching or
//! batching happen here; failures propagate as [`ApiError`] and the query
//! cache sits a layer above.
//!
//! List endpoints are inconsistent about their envelope (bare array vs
//! `{"data": [...]}` vs `null`), so the shape is modeled once as [`ListBody`]
//! and resolved at this boundary instead of at every call site.

use serde::Serialize;
use serde::de::DeserializeOwned;

pub mod agencies;
pub mod agreements;
pub mod audit;
pub mod auditor;
pub mod contracts;
pub mod errors;
pub mod inspections;
pub mod invoices;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod notifications;
pub mod payments;
pub mod plans;
pub mod platform;
pub mod properties;
pub mod sales;
pub mod tenant_analysis;
pub mod users;

pub use agencies::AgencyApi;
pub use agreements::AgreementApi;
pub use audit::AuditApi;
pub use auditor::AuditorApi;
pub use contracts::ContractApi;
pub use errors::{ApiError, ApiResult};
pub use inspections::InspectionApi;
pub use invoices::InvoiceApi;
pub use notifications::NotificationApi;
pub use payments::PaymentApi;
pub use plans::PlanApi;
pub use platform::PlatformApi;
pub use properties::PropertyApi;
pub use sales::SalesApi;
pub use tenant_analysis::TenantAnalysisApi;
pub use users::UserApi;

use crate::api::errors::ErrorBody;

/// Default request timeout applied at the client level; individual endpoint
/// wrappers do not override it.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Query-string pairs serialized only when defined and non-empty.
#[derive(Clone, Debug, Default)]
pub struct QueryPairs(Vec<(&'static str, String)>);

impl QueryPairs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter unless its rendered value is empty.
    pub fn set<V: ToString>(&mut self, key: &'static str, value: V) {
        let rendered = value.to_string();
        if !rendered.is_empty() {
            self.0.push((key, rendered));
        }
    }

    /// Appends an optional parameter, omitting `None` and empty values.
    pub fn set_opt<V: ToString>(&mut self, key: &'static str, value: Option<V>) {
        if let Some(value) = value {
            self.set(key, value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[(&'static str, String)] {
        &self.0
    }

    /// Renders `k=v&k2=v2` with URL-encoded values. Used for cache keys and
    /// hand-built URLs; regular requests go through `reqwest`'s own query
    /// serializer with the same pairs.
    pub fn encode(&self) -> String {
        self.0
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Serializes an enum code the way the backend spells it in query strings.
pub(crate) fn wire_code<T: Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|rendered| rendered.as_str().map(str::to_string))
        .unwrap_or_default()
}

/// The two list-response envelopes the backend is known to emit.
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
pub enum ListBody<T> {
    Items(Vec<T>),
    Envelope { data: Vec<T> },
}

/// Resolves a list body to a plain vector; `null`/missing bodies become `[]`.
pub fn normalize_list<T>(body: Option<ListBody<T>>) -> Vec<T> {
    match body {
        None => Vec::new(),
        Some(ListBody::Items(items)) => items,
        Some(ListBody::Envelope { data }) => data,
    }
}

/// Paged response envelope used by the listing endpoints that paginate
/// server-side.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
}

/// Shared HTTP client for the platform backend. Attaches the bearer token,
/// applies the client-level timeout, and unwraps response envelopes.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> ApiResult<reqwest::Response> {
        let response = self.authorize(request).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let raw = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&raw)
            .map(|body| body.message)
            .unwrap_or(raw);
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryPairs,
    ) -> ApiResult<T> {
        let response = self
            .send(self.http.get(self.url(path)).query(query.as_slice()))
            .await?;
        Ok(response.json::<T>().await?)
    }

    /// GET a list endpoint and resolve its envelope to a plain vector.
    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryPairs,
    ) -> ApiResult<Vec<T>> {
        let body: Option<ListBody<T>> = self.get_json(path, query).await?;
        Ok(normalize_list(body))
    }

    pub(crate) async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryPairs,
    ) -> ApiResult<Page<T>> {
        self.get_json(path, query).await
    }

    pub(crate) async fn get_bytes(&self, path: &str) -> ApiResult<Vec<u8>> {
        let response = self.send(self.http.get(self.url(path))).await?;
        Ok(response.bytes().await?.to_vec())
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self.send(self.http.post(self.url(path)).json(body)).await?;
        Ok(response.json::<T>().await?)
    }

    pub(crate) async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self
            .send(self.http.patch(self.url(path)).json(body))
            .await?;
        Ok(response.json::<T>().await?)
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ApiResult<T> {
        let response = self
            .send(self.http.post(self.url(path)).multipart(form))
            .await?;
        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct Row {
        id: i64,
    }

    #[test]
    fn normalizes_bare_arrays() {
        let body: Option<ListBody<Row>> = serde_json::from_str("[{\"id\": 1}, {\"id\": 2}]").unwrap();
        assert_eq!(normalize_list(body), vec![Row { id: 1 }, Row { id: 2 }]);
    }

    #[test]
    fn normalizes_enveloped_lists() {
        let body: Option<ListBody<Row>> =
            serde_json::from_str("{\"data\": [{\"id\": 3}], \"total\": 1}").unwrap();
        assert_eq!(normalize_list(body), vec![Row { id: 3 }]);
    }

    #[test]
    fn normalizes_null_bodies() {
        let body: Option<ListBody<Row>> = serde_json::from_str("null").unwrap();
        assert_eq!(normalize_list::<Row>(body), Vec::new());
        assert_eq!(normalize_list::<Row>(None), Vec::new());
    }

    #[test]
    fn query_pairs_omit_undefined_and_empty_values() {
        let mut pairs = QueryPairs::new();
        pairs.set("status", "active");
        pairs.set_opt::<&str>("plan", None);
        pairs.set("search", "");
        pairs.set_opt("q", Some("centro apto"));
        assert_eq!(pairs.as_slice().len(), 2);
        assert_eq!(pairs.encode(), "status=active&q=centro%20apto");
    }

    #[test]
    fn paged_envelope_deserializes() {
        let page: Page<Row> =
            serde_json::from_str("{\"data\": [{\"id\": 9}], \"total\": 40, \"page\": 2, \"limit\": 10}")
                .unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.total, 40);
        assert_eq!(page.page, 2);
    }
}
