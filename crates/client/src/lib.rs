//! `facturo-client` — HTTP client for the invoicing/inventory backend.
//!
//! **Responsibility:** the REST boundary. Wire types and endpoint calls for
//! every backend area (auth, stock, invoices, suppliers, purchases,
//! dashboard, users), a bearer-token/tenant session, and the adapter that
//! plugs the HTTP client into the cart's [`facturo_cart::InvoiceApi`] seam.
//!
//! The client is a **thin shell** around the API: it never caches, never
//! retries, and surfaces backend error messages unmodified.

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod http;
pub mod invoices;
pub mod purchases;
pub mod session;
pub mod stock;
pub mod suppliers;
pub mod users;

pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{ApiClient, Page};
pub use session::Session;
