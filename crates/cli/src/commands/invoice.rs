use anyhow::{Context, Result, bail};
use clap::Subcommand;

use facturo_cart::{Cart, Submitter};
use facturo_client::{ApiClient, Page};
use facturo_core::{DomainError, InvoiceId, ProductId};

use super::format_amount;

#[derive(Subcommand)]
pub enum InvoiceAction {
    /// List one page of invoices
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long, default_value_t = 20)]
        limit: u32,
    },
    /// Show one invoice with its lines
    Show { id: i64 },
    /// Build a cart from the catalog and submit it as a new invoice
    Create {
        /// Cart line as `<productId>:<quantity>`; repeatable
        #[arg(long = "item", required = true)]
        items: Vec<String>,
    },
}

pub async fn run(client: &ApiClient, action: InvoiceAction) -> Result<()> {
    match action {
        InvoiceAction::List { page, limit } => {
            let response = client.list_invoices(Page { page, limit }).await?;
            for invoice in &response.invoices {
                println!(
                    "#{:<6} {:>12}  {:<10} {}",
                    invoice.id,
                    format_amount(invoice.total),
                    invoice.status,
                    invoice.created_at.format("%Y-%m-%d %H:%M"),
                );
            }
            println!("{} invoices", response.total);
        }
        InvoiceAction::Show { id } => {
            let invoice = client.get_invoice(InvoiceId::new(id)).await?;
            println!("invoice #{} [{}]", invoice.id, invoice.status);
            for item in &invoice.items {
                println!(
                    "  {:<30} {:>4} x {:>10} = {:>12}",
                    item.product_name,
                    item.quantity,
                    format_amount(item.unit_price),
                    format_amount(item.subtotal),
                );
            }
            println!("  total: {}", format_amount(invoice.total));
        }
        InvoiceAction::Create { items } => {
            create(client, &items).await?;
        }
    }
    Ok(())
}

async fn create(client: &ApiClient, items: &[String]) -> Result<()> {
    let catalog = client.catalog_snapshot().await?;

    let mut cart = Cart::new();
    for spec in items {
        let (product_id, quantity) = parse_item(spec)?;
        let Some(product) = catalog.get(product_id) else {
            return Err(DomainError::not_found())
                .with_context(|| format!("product {product_id} is not in the catalog"));
        };
        if !product.in_stock() {
            bail!("product {product_id} ({}) is out of stock", product.name);
        }
        cart.add_product(product, quantity);
    }

    for line in cart.lines() {
        println!(
            "  {:<30} {:>4} x {:>10} = {:>12}",
            line.product.name,
            line.quantity,
            format_amount(line.product.unit_price),
            format_amount(line.line_subtotal),
        );
    }
    println!("  advisory total: {}", format_amount(cart.total()));

    let submitter = Submitter::new(client.clone());
    let receipt = submitter.submit(&mut cart).await?;
    println!(
        "created invoice #{} [{}], total {}",
        receipt.id,
        receipt.status,
        format_amount(receipt.total)
    );

    // Stock levels changed server-side; show the fresh snapshot size so the
    // user knows the refresh happened.
    let refreshed = client.catalog_snapshot().await?;
    tracing::debug!(products = refreshed.len(), "catalog refreshed after submission");
    Ok(())
}

/// Parse a `<productId>:<quantity>` cart-line argument.
fn parse_item(spec: &str) -> Result<(ProductId, u32)> {
    let (id, qty) = spec
        .split_once(':')
        .ok_or_else(|| DomainError::validation("expected <productId>:<quantity>"))
        .with_context(|| format!("invalid --item {spec:?}"))?;

    let product_id: ProductId = id
        .trim()
        .parse()
        .with_context(|| format!("invalid product id in --item {spec:?}"))?;
    let quantity: u32 = qty
        .trim()
        .parse()
        .with_context(|| format!("invalid quantity in --item {spec:?}"))?;

    Ok((product_id, quantity))
}
