//! `facturo-cart` — cart reconciliation and invoice submission.
//!
//! **Responsibility:** maintain the unique-by-product set of cart lines ahead
//! of invoice creation, and guarantee the quantity/stock invariant after
//! every operation.
//!
//! Two pieces live here:
//! - [`Cart`]: the in-memory store. All of its operations are total functions
//!   over the current state; out-of-range quantities clamp and unknown
//!   product ids degrade to no-ops, never to errors.
//! - [`Submitter`]: turns a non-empty cart into an invoice-creation request
//!   against an [`InvoiceApi`] implementation and clears the cart on success.
//!
//! The cart never calls the network; the submitter is the only async edge.

pub mod cart;
pub mod draft;
pub mod submit;

pub use cart::{Cart, CartLine};
pub use draft::{DraftItem, InvoiceDraft};
pub use submit::{InvoiceApi, InvoiceReceipt, RemoteError, SubmitError, Submitter};
