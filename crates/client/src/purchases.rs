//! Purchase (supplier invoice) endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use facturo_core::{ProductId, PurchaseId, SupplierId, TenantId, UserId};

use crate::error::ApiError;
use crate::http::ApiClient;

/// One line of a purchase being registered. For products that do not exist
/// yet, the inline `product_*` fields let the backend create them on the fly.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseItemRequest {
    pub product_id: ProductId,
    pub quantity: u32,
    /// Cost per unit in smallest currency unit.
    pub unit_cost: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_price: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePurchaseRequest {
    pub supplier_id: SupplierId,
    pub invoice_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub items: Vec<PurchaseItemRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseItem {
    pub id: i64,
    pub purchase_invoice_id: PurchaseId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub unit_cost: u64,
    pub subtotal: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseInvoice {
    pub id: PurchaseId,
    pub invoice_number: String,
    pub total: u64,
    pub status: String,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub paid_amount: u64,
    pub supplier_id: SupplierId,
    pub tenant_id: TenantId,
    pub user_id: UserId,
    pub items: Vec<PurchaseItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ApiClient {
    /// `POST /purchases`. Registers a supplier invoice; the backend raises
    /// stock for each received product as a side effect.
    pub async fn create_purchase(
        &self,
        request: &CreatePurchaseRequest,
    ) -> Result<PurchaseInvoice, ApiError> {
        self.post("/purchases", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_inline_product_fields_only_when_set() {
        let request = CreatePurchaseRequest {
            supplier_id: SupplierId::new(4),
            invoice_number: "F-0012".to_string(),
            payment_method: Some("transfer".to_string()),
            due_date: None,
            items: vec![PurchaseItemRequest {
                product_id: ProductId::new(0),
                quantity: 10,
                unit_cost: 500,
                product_name: Some("New Widget".to_string()),
                product_sku: Some("WID-NEW".to_string()),
                product_price: Some(900),
            }],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["supplierId"], 4);
        assert!(json.get("dueDate").is_none());
        assert_eq!(json["items"][0]["productName"], "New Widget");
        assert_eq!(json["items"][0]["unitCost"], 500);
    }

    #[test]
    fn purchase_invoice_deserializes_from_backend_shape() {
        let body = serde_json::json!({
            "id": 9,
            "invoiceNumber": "F-0012",
            "total": 5000,
            "status": "pending",
            "paidAmount": 0,
            "supplierId": 4,
            "tenantId": 7,
            "userId": 3,
            "items": [{
                "id": 1,
                "purchaseInvoiceId": 9,
                "productId": 2,
                "quantity": 10,
                "unitCost": 500,
                "subtotal": 5000
            }],
            "createdAt": "2024-03-01T10:00:00Z",
            "updatedAt": "2024-03-01T10:00:00Z"
        });

        let purchase: PurchaseInvoice = serde_json::from_value(body).unwrap();
        assert_eq!(purchase.id, PurchaseId::new(9));
        assert_eq!(purchase.items[0].subtotal, 5000);
        assert_eq!(purchase.due_date, None);
    }
}
