//! User administration endpoints.

use serde::{Deserialize, Serialize};

use facturo_core::UserId;

use crate::auth::User;
use crate::error::ApiError;
use crate::http::ApiClient;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: String,
    pub name: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersListResponse {
    pub users: Vec<User>,
}

impl ApiClient {
    /// `GET /users`
    pub async fn list_users(&self) -> Result<UsersListResponse, ApiError> {
        self.get("/users").await
    }

    /// `POST /users`
    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<User, ApiError> {
        self.post("/users", request).await
    }

    /// `PUT /users/{id}`
    pub async fn update_user(
        &self,
        id: UserId,
        update: &UpdateUserRequest,
    ) -> Result<User, ApiError> {
        self.put(&format!("/users/{id}"), update).await
    }

    /// `DELETE /users/{id}`
    pub async fn delete_user(&self, id: UserId) -> Result<(), ApiError> {
        self.delete(&format!("/users/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn users_list_deserializes_from_backend_shape() {
        let body = serde_json::json!({
            "users": [
                {"id": 1, "email": "ana@example.com", "name": "Ana", "role": "admin"},
                {"id": 2, "email": "leo@example.com", "name": "Leo", "role": "seller"}
            ]
        });

        let response: UsersListResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.users.len(), 2);
        assert_eq!(response.users[1].id, UserId::new(2));
    }
}
