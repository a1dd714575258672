use serde::{Deserialize, Serialize};

use facturo_core::ProductId;

use crate::cart::Cart;

/// One item of the invoice-creation request.
///
/// Unit prices and subtotals are deliberately absent: the backend recomputes
/// the authoritative price, the client-side total is advisory only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Invoice-creation request derived from a cart. Never stored; recomputed on
/// every submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDraft {
    pub items: Vec<DraftItem>,
    /// Client-side total in smallest currency unit, for display only.
    pub advisory_total: u64,
}

impl InvoiceDraft {
    pub fn from_cart(cart: &Cart) -> Self {
        Self {
            items: cart
                .lines()
                .iter()
                .map(|line| DraftItem {
                    product_id: line.product.id,
                    quantity: line.quantity,
                })
                .collect(),
            advisory_total: cart.total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facturo_catalog::Product;

    fn product(id: i64, unit_price: u64, stock: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            sku: None,
            description: None,
            unit_price,
            stock_available: stock,
        }
    }

    #[test]
    fn draft_carries_ids_and_quantities_but_no_prices() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, 1000, 5), 2);
        cart.add_product(&product(2, 250, 5), 4);

        let draft = cart.draft();
        assert_eq!(
            draft.items,
            vec![
                DraftItem {
                    product_id: ProductId::new(1),
                    quantity: 2
                },
                DraftItem {
                    product_id: ProductId::new(2),
                    quantity: 4
                },
            ]
        );
        assert_eq!(draft.advisory_total, 3000);

        let json = serde_json::to_value(&draft.items[0]).unwrap();
        assert_eq!(json["productId"], 1);
        assert_eq!(json["quantity"], 2);
        assert!(json.get("unitPrice").is_none());
    }
}
