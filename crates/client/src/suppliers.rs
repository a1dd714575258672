//! Supplier management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use facturo_core::{SupplierId, TenantId};

use crate::error::ApiError;
use crate::http::{ApiClient, Page};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    /// Tax identifier (RUC/NIT).
    #[serde(default)]
    pub ruc_nit: Option<String>,
    pub tenant_id: TenantId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSupplierRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ruc_nit: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSupplierRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ruc_nit: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuppliersListResponse {
    pub suppliers: Vec<Supplier>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

impl ApiClient {
    /// `GET /suppliers`
    pub async fn list_suppliers(&self, page: Page) -> Result<SuppliersListResponse, ApiError> {
        self.get_with_query("/suppliers", &page).await
    }

    /// `POST /suppliers`
    pub async fn create_supplier(
        &self,
        request: &CreateSupplierRequest,
    ) -> Result<Supplier, ApiError> {
        self.post("/suppliers", request).await
    }

    /// `PUT /suppliers/{id}`
    pub async fn update_supplier(
        &self,
        id: SupplierId,
        update: &UpdateSupplierRequest,
    ) -> Result<Supplier, ApiError> {
        self.put(&format!("/suppliers/{id}"), update).await
    }

    /// `DELETE /suppliers/{id}`
    pub async fn delete_supplier(&self, id: SupplierId) -> Result<(), ApiError> {
        self.delete(&format!("/suppliers/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supplier_deserializes_with_camel_case_tax_id() {
        let body = serde_json::json!({
            "id": 4,
            "name": "Proveedora Sur",
            "rucNit": "900123456",
            "tenantId": 7,
            "createdAt": "2024-03-01T10:00:00Z",
            "updatedAt": "2024-03-01T10:00:00Z"
        });

        let supplier: Supplier = serde_json::from_value(body).unwrap();
        assert_eq!(supplier.id, SupplierId::new(4));
        assert_eq!(supplier.ruc_nit.as_deref(), Some("900123456"));
        assert_eq!(supplier.email, None);
    }
}
