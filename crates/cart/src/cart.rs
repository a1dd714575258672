use serde::{Deserialize, Serialize};

use facturo_catalog::Product;
use facturo_core::ProductId;

use crate::draft::InvoiceDraft;

/// One product-quantity-subtotal triple held in the cart.
///
/// Invariants:
/// - `line_subtotal == product.unit_price * quantity`, recomputed on every
///   mutation and never stored independently;
/// - `1 <= quantity <= product.stock_available`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
    /// Subtotal in smallest currency unit (e.g., cents).
    pub line_subtotal: u64,
}

impl CartLine {
    fn new(product: Product, quantity: u32) -> Self {
        let line_subtotal = line_subtotal(&product, quantity);
        Self {
            product,
            quantity,
            line_subtotal,
        }
    }
}

/// Amounts saturate rather than panic: cart operations are total by policy.
fn line_subtotal(product: &Product, quantity: u32) -> u64 {
    product.unit_price.saturating_mul(u64::from(quantity))
}

/// Ordered collection of cart lines, unique by product id.
///
/// Created empty at the start of an invoice flow; cleared on successful
/// submission or explicit cancellation. Every operation is a total function:
/// invalid input clamps to the nearest valid value or degrades to a no-op.
/// The UI layer is responsible for not offering invalid actions in the first
/// place (e.g. disabling "add" when stock is zero).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product, merging with an existing line for the same product.
    ///
    /// A fresh line gets `min(requested_quantity, stock)`; a merge gets
    /// `min(existing + requested, stock)`: quantities accumulate but never
    /// exceed available stock. A requested quantity below 1 counts as 1.
    /// No-op when the product has no stock.
    pub fn add_product(&mut self, product: &Product, requested_quantity: u32) {
        if !product.in_stock() {
            return;
        }
        let requested = requested_quantity.max(1);

        match self.position(product.id) {
            Some(idx) => {
                let line = &mut self.lines[idx];
                let merged = line
                    .quantity
                    .saturating_add(requested)
                    .min(product.stock_available);
                // Take the caller's snapshot: price and stock may have moved
                // since the line was first added.
                line.product = product.clone();
                line.quantity = merged;
                line.line_subtotal = line_subtotal(&line.product, merged);
            }
            None => {
                let quantity = requested.min(product.stock_available);
                self.lines.push(CartLine::new(product.clone(), quantity));
            }
        }
    }

    /// Set a line's quantity, clamped to `[1, stock]`.
    ///
    /// Silent no-op when no line exists for `product_id`.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32) {
        let Some(idx) = self.position(product_id) else {
            return;
        };
        let line = &mut self.lines[idx];
        // Lines only exist for in-stock products, so the upper bound is >= 1.
        let clamped = quantity.clamp(1, line.product.stock_available.max(1));
        line.quantity = clamped;
        line.line_subtotal = line_subtotal(&line.product, clamped);
    }

    /// Delete the line for `product_id` if present; no-op otherwise.
    pub fn remove_line(&mut self, product_id: ProductId) {
        self.lines.retain(|line| line.product.id != product_id);
    }

    /// Sum of all line subtotals; 0 for an empty cart. Always recomputed.
    pub fn total(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |acc, line| acc.saturating_add(line.line_subtotal))
    }

    /// Membership predicate, used by the catalog view to render selection state.
    pub fn is_in_cart(&self, product_id: ProductId) -> bool {
        self.position(product_id).is_some()
    }

    /// Derive the invoice-creation request shape from the current lines.
    pub fn draft(&self) -> InvoiceDraft {
        InvoiceDraft::from_cart(self)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.lines.iter().position(|line| line.product.id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

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
    fn adding_out_of_stock_product_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, 100, 0), 3);

        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn add_clamps_requested_quantity_to_stock() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, 100, 4), 9);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 4);
        assert_eq!(cart.lines()[0].line_subtotal, 400);
    }

    #[test]
    fn add_raises_zero_requested_quantity_to_one() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, 100, 4), 0);

        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn adding_same_product_twice_accumulates_up_to_stock() {
        let mut cart = Cart::new();
        let p = product(1, 100, 4);
        cart.add_product(&p, 3);
        cart.add_product(&p, 3);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 4);
        assert_eq!(cart.total(), 400);
    }

    #[test]
    fn update_quantity_clamps_into_valid_range() {
        let mut cart = Cart::new();
        let p = product(1, 10, 5);
        cart.add_product(&p, 2);

        cart.update_quantity(p.id, 0);
        assert_eq!(cart.lines()[0].quantity, 1);

        cart.update_quantity(p.id, 99);
        assert_eq!(cart.lines()[0].quantity, 5);
        assert_eq!(cart.lines()[0].line_subtotal, 50);
    }

    #[test]
    fn update_quantity_for_unknown_product_is_a_no_op() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, 10, 5), 2);
        let before = cart.clone();

        cart.update_quantity(ProductId::new(99), 3);
        assert_eq!(cart, before);
    }

    #[test]
    fn repeated_out_of_range_updates_are_idempotent() {
        let mut cart = Cart::new();
        let p = product(1, 10, 5);
        cart.add_product(&p, 2);

        cart.update_quantity(p.id, 42);
        let after_first = cart.clone();
        cart.update_quantity(p.id, 42);

        assert_eq!(cart, after_first);
        assert_eq!(cart.lines()[0].quantity, 5);
    }

    #[test]
    fn remove_line_deletes_only_the_matching_product() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, 10, 5), 1);
        cart.add_product(&product(2, 20, 5), 1);

        cart.remove_line(ProductId::new(1));

        assert_eq!(cart.len(), 1);
        assert!(!cart.is_in_cart(ProductId::new(1)));
        assert!(cart.is_in_cart(ProductId::new(2)));
    }

    #[test]
    fn removing_an_absent_line_is_a_no_op() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, 10, 5), 1);
        let before = cart.clone();

        cart.remove_line(ProductId::new(99));
        assert_eq!(cart, before);
    }

    #[test]
    fn full_scenario_add_update_remove() {
        let mut cart = Cart::new();
        let p = product(1, 10, 5);

        cart.add_product(&p, 3);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 3);
        assert_eq!(cart.lines()[0].line_subtotal, 30);
        assert_eq!(cart.total(), 30);

        cart.update_quantity(p.id, 10);
        assert_eq!(cart.lines()[0].quantity, 5);
        assert_eq!(cart.lines()[0].line_subtotal, 50);

        cart.remove_line(p.id);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add_product(&product(3, 10, 5), 1);
        cart.add_product(&product(1, 10, 5), 1);
        cart.add_product(&product(2, 10, 5), 1);

        let ids: Vec<i64> = cart.lines().iter().map(|l| l.product.id.as_i64()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: after `add_product`, the line quantity is
        /// `min(max(requested, 1), stock)` whenever the product was added at all.
        #[test]
        fn added_quantity_is_clamped_to_stock(
            requested in 0u32..10_000,
            stock in 0u32..10_000,
            unit_price in 0u64..1_000_000,
        ) {
            let mut cart = Cart::new();
            let p = product(1, unit_price, stock);
            cart.add_product(&p, requested);

            if stock == 0 {
                prop_assert!(cart.is_empty());
            } else {
                let expected = requested.max(1).min(stock);
                prop_assert_eq!(cart.lines()[0].quantity, expected);
                prop_assert!(cart.lines()[0].quantity >= 1);
            }
        }

        /// Property: the total always equals the recomputed sum of
        /// `unit_price * quantity` over all lines, after any mutation sequence.
        #[test]
        fn total_equals_recomputed_sum(
            ops in prop::collection::vec((1i64..6, 0u32..50, 0u32..3), 1..40)
        ) {
            let mut cart = Cart::new();
            for (id, qty, op) in ops {
                let p = product(id, 100 + id as u64, 20);
                match op {
                    0 => cart.add_product(&p, qty),
                    1 => cart.update_quantity(p.id, qty),
                    _ => cart.remove_line(p.id),
                }

                let recomputed: u64 = cart
                    .lines()
                    .iter()
                    .map(|l| l.product.unit_price * u64::from(l.quantity))
                    .sum();
                prop_assert_eq!(cart.total(), recomputed);
            }
        }

        /// Property: merging repeated adds never exceeds stock and never
        /// produces duplicate lines for the same product.
        #[test]
        fn repeated_adds_stay_unique_and_bounded(
            quantities in prop::collection::vec(0u32..100, 1..20),
            stock in 1u32..100,
        ) {
            let mut cart = Cart::new();
            let p = product(1, 10, stock);
            for qty in quantities {
                cart.add_product(&p, qty);
            }

            prop_assert_eq!(cart.len(), 1);
            prop_assert!(cart.lines()[0].quantity <= stock);
            prop_assert!(cart.lines()[0].quantity >= 1);
        }
    }
}
