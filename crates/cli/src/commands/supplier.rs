use anyhow::Result;
use clap::Subcommand;

use facturo_client::{ApiClient, Page};
use facturo_client::purchases::{CreatePurchaseRequest, PurchaseItemRequest};
use facturo_client::suppliers::{CreateSupplierRequest, UpdateSupplierRequest};
use facturo_core::{ProductId, SupplierId};

use super::format_amount;

#[derive(Subcommand)]
pub enum SupplierAction {
    /// List one page of suppliers
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long, default_value_t = 20)]
        limit: u32,
    },
    /// Create a supplier
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        /// Tax identifier (RUC/NIT)
        #[arg(long)]
        ruc_nit: Option<String>,
    },
    /// Rename a supplier
    Rename {
        id: i64,

        #[arg(long)]
        name: String,
    },
    /// Delete a supplier
    Delete { id: i64 },
    /// Register a purchase invoice for a supplier
    Purchase {
        #[arg(long)]
        supplier: i64,

        #[arg(long)]
        invoice_number: String,

        /// Purchase line as `<productId>:<quantity>:<unitCostCents>`; repeatable
        #[arg(long = "item", required = true)]
        items: Vec<String>,
    },
}

pub async fn run(client: &ApiClient, action: SupplierAction) -> Result<()> {
    match action {
        SupplierAction::List { page, limit } => {
            let response = client.list_suppliers(Page { page, limit }).await?;
            for supplier in &response.suppliers {
                println!(
                    "#{:<6} {:<30} {:<25} {}",
                    supplier.id,
                    supplier.name,
                    supplier.email.as_deref().unwrap_or("-"),
                    supplier.ruc_nit.as_deref().unwrap_or("-"),
                );
            }
            println!("{} suppliers", response.total);
        }
        SupplierAction::Create {
            name,
            email,
            phone,
            ruc_nit,
        } => {
            let supplier = client
                .create_supplier(&CreateSupplierRequest {
                    name,
                    email,
                    phone,
                    address: None,
                    ruc_nit,
                })
                .await?;
            println!("created supplier #{} ({})", supplier.id, supplier.name);
        }
        SupplierAction::Rename { id, name } => {
            let supplier = client
                .update_supplier(
                    SupplierId::new(id),
                    &UpdateSupplierRequest {
                        name: Some(name),
                        ..UpdateSupplierRequest::default()
                    },
                )
                .await?;
            println!("renamed supplier #{} to {}", supplier.id, supplier.name);
        }
        SupplierAction::Delete { id } => {
            client.delete_supplier(SupplierId::new(id)).await?;
            println!("deleted supplier #{id}");
        }
        SupplierAction::Purchase {
            supplier,
            invoice_number,
            items,
        } => {
            let items = items
                .iter()
                .map(|spec| parse_purchase_item(spec))
                .collect::<Result<Vec<_>>>()?;

            let purchase = client
                .create_purchase(&CreatePurchaseRequest {
                    supplier_id: SupplierId::new(supplier),
                    invoice_number,
                    payment_method: None,
                    due_date: None,
                    items,
                })
                .await?;
            println!(
                "registered purchase #{} ({}), total {}",
                purchase.id,
                purchase.invoice_number,
                format_amount(purchase.total)
            );
        }
    }
    Ok(())
}

fn parse_purchase_item(spec: &str) -> Result<PurchaseItemRequest> {
    let parts: Vec<&str> = spec.split(':').collect();
    let [id, qty, cost] = parts.as_slice() else {
        anyhow::bail!("invalid --item {spec:?}: expected <productId>:<quantity>:<unitCostCents>");
    };

    Ok(PurchaseItemRequest {
        product_id: ProductId::new(id.trim().parse()?),
        quantity: qty.trim().parse()?,
        unit_cost: cost.trim().parse()?,
        product_name: None,
        product_sku: None,
        product_price: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_purchase_item_accepts_three_fields() {
        let item = parse_purchase_item("4:10:500").unwrap();
        assert_eq!(item.product_id, ProductId::new(4));
        assert_eq!(item.quantity, 10);
        assert_eq!(item.unit_cost, 500);
    }

    #[test]
    fn parse_purchase_item_rejects_two_fields() {
        assert!(parse_purchase_item("4:10").is_err());
    }
}
