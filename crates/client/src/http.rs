//! The HTTP core: header injection, response decoding, error funneling.

use std::sync::Arc;

use reqwest::{Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ApiError, extract_error_message};
use crate::session::Session;

/// Header carrying the active tenant on every request.
pub const TENANT_HEADER: &str = "X-Tenant-ID";

/// Client for the invoicing/inventory REST API.
///
/// Cheap to clone; the underlying `reqwest::Client` pools connections and the
/// session is shared, so a clone sees the same login state.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<Session>,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url,
            session: Arc::new(Session::new()),
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let req = self.http.get(self.url(path));
        self.dispatch(path, req).await
    }

    pub(crate) async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let req = self.http.get(self.url(path)).query(query);
        self.dispatch(path, req).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let req = self.http.post(self.url(path)).json(body);
        self.dispatch(path, req).await
    }

    /// POST without a request body (e.g. logout).
    pub(crate) async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let req = self.http.post(self.url(path));
        self.dispatch_no_content(path, req).await
    }

    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let req = self.http.put(self.url(path)).json(body);
        self.dispatch(path, req).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let req = self.http.delete(self.url(path));
        self.dispatch_no_content(path, req).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach session headers when present.
    fn authorize(&self, mut req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(token) = self.session.token() {
            req = req.bearer_auth(token);
        }
        if let Some(tenant_id) = self.session.tenant_id() {
            req = req.header(TENANT_HEADER, tenant_id.to_string());
        }
        req
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        path: &str,
        req: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let resp = self.send(path, req).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn dispatch_no_content(
        &self,
        path: &str,
        req: reqwest::RequestBuilder,
    ) -> Result<(), ApiError> {
        self.send(path, req).await.map(|_| ())
    }

    async fn send(&self, path: &str, req: reqwest::RequestBuilder) -> Result<Response, ApiError> {
        let resp = self
            .authorize(req)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED {
            // Token expired or invalid: drop the session so the caller
            // re-authenticates, mirroring the login-redirect behavior.
            tracing::warn!(path, "unauthorized response, clearing session");
            self.session.clear();
            return Err(ApiError::Unauthorized);
        }

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = extract_error_message(&body);
            tracing::debug!(path, status = status.as_u16(), %message, "API error response");
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        tracing::trace!(path, status = status.as_u16(), "API call succeeded");
        Ok(resp)
    }
}

/// Pagination query shared by the list endpoints.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Page {
    pub page: u32,
    pub limit: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self { page: 1, limit: 20 }
    }
}
