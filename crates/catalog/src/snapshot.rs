use facturo_core::ProductId;

use crate::product::Product;

/// Ordered snapshot of products, unique by product id.
///
/// Ordering is whatever the backend returned; duplicates are dropped on
/// construction (first occurrence wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_products(products: Vec<Product>) -> Self {
        let mut catalog = Self::new();
        catalog.replace(products);
        catalog
    }

    /// Swap in a fresh snapshot (e.g. after invoice creation changed stock).
    pub fn replace(&mut self, products: Vec<Product>) {
        self.products.clear();
        for product in products {
            if self.get(product.id).is_none() {
                self.products.push(product);
            }
        }
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.iter().find(|p| p.id == id)
    }

    /// Case-insensitive substring search over name and SKU.
    ///
    /// An empty or whitespace-only query matches nothing, mirroring the
    /// product-search box which only fires on real input.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&query)
                    || p.sku
                        .as_deref()
                        .is_some_and(|sku| sku.to_lowercase().contains(&query))
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, sku: Option<&str>, stock: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            sku: sku.map(str::to_string),
            description: None,
            unit_price: 100,
            stock_available: stock,
        }
    }

    #[test]
    fn duplicate_ids_are_dropped_first_wins() {
        let catalog = Catalog::from_products(vec![
            product(1, "First", None, 5),
            product(1, "Second", None, 9),
            product(2, "Other", None, 3),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(ProductId::new(1)).unwrap().name, "First");
    }

    #[test]
    fn search_matches_name_and_sku_case_insensitively() {
        let catalog = Catalog::from_products(vec![
            product(1, "Blue Widget", Some("WID-B"), 5),
            product(2, "Red Gadget", Some("GAD-R"), 5),
        ]);

        let by_name = catalog.search("widget");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, ProductId::new(1));

        let by_sku = catalog.search("gad-");
        assert_eq!(by_sku.len(), 1);
        assert_eq!(by_sku[0].id, ProductId::new(2));
    }

    #[test]
    fn blank_query_matches_nothing() {
        let catalog = Catalog::from_products(vec![product(1, "Widget", None, 5)]);
        assert!(catalog.search("   ").is_empty());
        assert!(catalog.search("").is_empty());
    }

    #[test]
    fn iter_preserves_insertion_order() {
        let catalog = Catalog::from_products(vec![
            product(3, "Third", None, 1),
            product(1, "First", None, 1),
            product(2, "Second", None, 1),
        ]);

        let ids: Vec<i64> = catalog.iter().map(|p| p.id.as_i64()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn replace_swaps_the_snapshot() {
        let mut catalog = Catalog::from_products(vec![product(1, "Widget", None, 5)]);
        catalog.replace(vec![product(2, "Gadget", None, 1)]);

        assert!(catalog.get(ProductId::new(1)).is_none());
        assert!(catalog.get(ProductId::new(2)).is_some());
    }
}
