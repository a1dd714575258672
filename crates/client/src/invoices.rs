//! Invoice endpoints, including the adapter that plugs this client into the
//! cart's submission seam.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use facturo_cart::{InvoiceApi, InvoiceDraft, InvoiceReceipt, RemoteError};
use facturo_core::{InvoiceId, ProductId, UserId};

use crate::error::ApiError;
use crate::http::{ApiClient, Page};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    pub product_id: ProductId,
    pub quantity: u32,
    /// Unit price in smallest currency unit, as the backend recorded it.
    pub unit_price: u64,
    pub subtotal: u64,
    pub product_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: InvoiceId,
    pub total: u64,
    pub status: String,
    pub user_id: UserId,
    pub items: Vec<InvoiceItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSummary {
    pub id: InvoiceId,
    pub total: u64,
    pub status: String,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceListResponse {
    pub invoices: Vec<InvoiceSummary>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

/// The backend wraps single invoices in an envelope.
#[derive(Debug, Clone, Deserialize)]
struct InvoiceEnvelope {
    invoice: Invoice,
}

#[derive(Debug, Clone, Serialize)]
struct CreateInvoiceRequest<'a> {
    items: &'a [facturo_cart::DraftItem],
}

impl ApiClient {
    /// `GET /invoices`: one page of invoice summaries.
    pub async fn list_invoices(&self, page: Page) -> Result<InvoiceListResponse, ApiError> {
        self.get_with_query("/invoices", &page).await
    }

    /// `GET /invoices/{id}`
    pub async fn get_invoice(&self, id: InvoiceId) -> Result<Invoice, ApiError> {
        let envelope: InvoiceEnvelope = self.get(&format!("/invoices/{id}")).await?;
        Ok(envelope.invoice)
    }

    /// `POST /invoices`. Body is `{items: [{productId, quantity}, ...]}`;
    /// prices are recomputed server-side.
    pub async fn create_invoice(&self, draft: &InvoiceDraft) -> Result<Invoice, ApiError> {
        let request = CreateInvoiceRequest {
            items: &draft.items,
        };
        let envelope: InvoiceEnvelope = self.post("/invoices", &request).await?;
        Ok(envelope.invoice)
    }
}

#[async_trait]
impl InvoiceApi for ApiClient {
    async fn create_invoice(&self, draft: &InvoiceDraft) -> Result<InvoiceReceipt, RemoteError> {
        let invoice = ApiClient::create_invoice(self, draft)
            .await
            .map_err(|e| RemoteError(e.message()))?;
        Ok(InvoiceReceipt {
            id: invoice.id,
            total: invoice.total,
            status: invoice.status,
        })
    }
}
