use anyhow::Result;
use clap::Subcommand;

use facturo_client::{ApiClient, Page};
use facturo_client::stock::{CreateStockItem, UpdateStockItem};
use facturo_core::ProductId;

use super::format_amount;

#[derive(Subcommand)]
pub enum StockAction {
    /// List one page of products
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long, default_value_t = 20)]
        limit: u32,
    },
    /// Search the full catalog snapshot by name or SKU
    Search {
        /// Substring to look for (case-insensitive)
        query: String,
    },
    /// Create a product
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        sku: Option<String>,

        /// Price in cents
        #[arg(long)]
        price: u64,

        #[arg(long, default_value_t = 0)]
        stock: u32,
    },
    /// Update a product's price and/or stock
    Update {
        id: i64,

        /// New price in cents
        #[arg(long)]
        price: Option<u64>,

        #[arg(long)]
        stock: Option<u32>,
    },
    /// Delete a product
    Delete { id: i64 },
}

pub async fn run(client: &ApiClient, action: StockAction) -> Result<()> {
    match action {
        StockAction::List { page, limit } => {
            let response = client.list_stock(Page { page, limit }).await?;
            for item in &response.products {
                println!(
                    "#{:<6} {:<30} {:>10}  stock {:>5}  {}",
                    item.id,
                    item.name,
                    format_amount(item.price),
                    item.stock,
                    item.sku.as_deref().unwrap_or("-"),
                );
            }
            println!(
                "page {}/{} ({} products)",
                response.page,
                response.total.div_ceil(u64::from(response.limit.max(1))),
                response.total
            );
        }
        StockAction::Search { query } => {
            let catalog = client.catalog_snapshot().await?;
            let hits = catalog.search(&query);
            if hits.is_empty() {
                println!("no products match {query:?}");
            }
            for product in hits {
                println!(
                    "#{:<6} {:<30} {:>10}  stock {:>5}",
                    product.id,
                    product.name,
                    format_amount(product.unit_price),
                    product.stock_available,
                );
            }
        }
        StockAction::Create {
            name,
            sku,
            price,
            stock,
        } => {
            let item = client
                .create_stock_item(&CreateStockItem {
                    name,
                    description: None,
                    sku,
                    price,
                    stock,
                })
                .await?;
            println!("created product #{} ({})", item.id, item.name);
        }
        StockAction::Update { id, price, stock } => {
            let item = client
                .update_stock_item(
                    ProductId::new(id),
                    &UpdateStockItem {
                        price,
                        stock,
                        ..UpdateStockItem::default()
                    },
                )
                .await?;
            println!(
                "updated product #{}: price {} stock {}",
                item.id,
                format_amount(item.price),
                item.stock
            );
        }
        StockAction::Delete { id } => {
            client.delete_stock_item(ProductId::new(id)).await?;
            println!("deleted product #{id}");
        }
    }
    Ok(())
}
