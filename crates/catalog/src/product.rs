use serde::{Deserialize, Serialize};

use facturo_core::ProductId;

/// Read-only product snapshot obtained from the inventory service.
///
/// The backend is the authority on price and stock; the cart never mutates a
/// `Product`, it only clamps quantities against `stock_available`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Price in smallest currency unit (e.g., cents).
    pub unit_price: u64,
    pub stock_available: u32,
}

impl Product {
    /// A product with zero stock cannot be added to a cart.
    pub fn in_stock(&self) -> bool {
        self.stock_available > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_field_names() {
        let product = Product {
            id: ProductId::new(1),
            name: "Widget".to_string(),
            sku: Some("WID-001".to_string()),
            description: None,
            unit_price: 1250,
            stock_available: 8,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["unitPrice"], 1250);
        assert_eq!(json["stockAvailable"], 8);
        assert!(json.get("description").is_none());
    }

    #[test]
    fn in_stock_is_false_at_zero() {
        let product = Product {
            id: ProductId::new(1),
            name: "Widget".to_string(),
            sku: None,
            description: None,
            unit_price: 100,
            stock_available: 0,
        };
        assert!(!product.in_stock());
    }
}
