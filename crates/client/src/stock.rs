//! Stock (product) management endpoints, and the catalog snapshot the cart
//! operates against.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use facturo_catalog::{Catalog, Product};
use facturo_core::ProductId;

use crate::error::ApiError;
use crate::http::{ApiClient, Page};

/// One product as the backend stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    /// Price in smallest currency unit (e.g., cents).
    pub price: u64,
    pub stock: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<StockItem> for Product {
    fn from(item: StockItem) -> Self {
        Product {
            id: item.id,
            name: item.name,
            sku: item.sku,
            description: item.description,
            unit_price: item.price,
            stock_available: item.stock,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStockItem {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    pub price: u64,
    pub stock: u32,
}

/// Partial update; absent fields are left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStockItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockListResponse {
    pub products: Vec<StockItem>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

impl ApiClient {
    /// `GET /stock`: one page of the product list.
    pub async fn list_stock(&self, page: Page) -> Result<StockListResponse, ApiError> {
        self.get_with_query("/stock", &page).await
    }

    /// `POST /stock`
    pub async fn create_stock_item(&self, item: &CreateStockItem) -> Result<StockItem, ApiError> {
        self.post("/stock", item).await
    }

    /// `PUT /stock/{id}`
    pub async fn update_stock_item(
        &self,
        id: ProductId,
        update: &UpdateStockItem,
    ) -> Result<StockItem, ApiError> {
        self.put(&format!("/stock/{id}"), update).await
    }

    /// `DELETE /stock/{id}`
    pub async fn delete_stock_item(&self, id: ProductId) -> Result<(), ApiError> {
        self.delete(&format!("/stock/{id}")).await
    }

    /// Fetch the full product snapshot, paging until the backend runs out.
    ///
    /// This is what populates the catalog the cart operates against; call it
    /// again after a successful submission, since invoice creation changes
    /// stock levels server-side.
    pub async fn catalog_snapshot(&self) -> Result<Catalog, ApiError> {
        const PAGE_LIMIT: u32 = 100;

        let mut products: Vec<Product> = Vec::new();
        let mut page = 1u32;
        loop {
            let response = self
                .list_stock(Page {
                    page,
                    limit: PAGE_LIMIT,
                })
                .await?;
            let batch = response.products.len();
            products.extend(response.products.into_iter().map(Product::from));

            if batch < PAGE_LIMIT as usize || products.len() as u64 >= response.total {
                break;
            }
            page += 1;
        }

        tracing::debug!(products = products.len(), "refreshed catalog snapshot");
        Ok(Catalog::from_products(products))
    }
}
