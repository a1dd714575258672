//! Authentication endpoints: login, logout, current user.
//!
//! Protocol design is the backend's concern; this only exchanges credentials
//! for a token and keeps the session up to date.

use serde::{Deserialize, Serialize};

use facturo_core::{TenantId, UserId};

use crate::error::ApiError;
use crate::http::ApiClient;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: User,
    pub tenant: Tenant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: TenantId,
    pub name: String,
    #[serde(default)]
    pub domain: Option<String>,
}

impl ApiClient {
    /// `POST /auth/login`. On success the token and tenant are stored in
    /// the session, so subsequent calls carry them automatically.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self.post("/auth/login", request).await?;
        self.session()
            .set(response.token.clone(), Some(response.tenant.id));
        tracing::info!(user = %response.user.email, tenant = %response.tenant.id, "logged in");
        Ok(response)
    }

    /// `POST /auth/logout`. The session is cleared even when the call
    /// fails, the token is gone either way from the client's point of view.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self.post_empty("/auth/logout").await;
        self.session().clear();
        match result {
            Err(ApiError::Unauthorized) | Ok(()) => Ok(()),
            Err(other) => Err(other),
        }
    }

    /// `GET /auth/me`: the authenticated user.
    pub async fn me(&self) -> Result<User, ApiError> {
        self.get("/auth/me").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_deserializes_from_backend_shape() {
        let body = serde_json::json!({
            "token": "jwt-token",
            "refreshToken": "refresh-token",
            "user": {"id": 3, "email": "ana@example.com", "name": "Ana", "role": "admin"},
            "tenant": {"id": 7, "name": "Acme", "domain": "acme.example.com"}
        });

        let response: LoginResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.user.id, UserId::new(3));
        assert_eq!(response.tenant.id, TenantId::new(7));
        assert_eq!(response.refresh_token.as_deref(), Some("refresh-token"));
    }

    #[test]
    fn login_request_omits_absent_tenant() {
        let request = LoginRequest {
            email: "ana@example.com".to_string(),
            password: "secret".to_string(),
            tenant_id: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("tenantId").is_none());
    }
}
