//! `facturo-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no HTTP or serialization
//! concerns beyond serde derives): typed identifiers and the domain error
//! model shared by the catalog, cart and client crates.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{InvoiceId, ProductId, PurchaseId, SupplierId, TenantId, UserId};
