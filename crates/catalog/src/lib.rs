//! `facturo-catalog` — read-only product snapshot.
//!
//! **Responsibility:** hold the product records the cart operates against.
//!
//! The inventory backend owns and mutates products; this crate only carries a
//! snapshot of them. Stock levels change server-side whenever an invoice is
//! created, so callers are expected to `replace` the snapshot after a
//! successful submission.

pub mod product;
pub mod snapshot;

pub use product::Product;
pub use snapshot::Catalog;
