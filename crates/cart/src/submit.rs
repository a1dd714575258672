//! Invoice submission: the only place the cart core touches the outside world.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use facturo_core::InvoiceId;

use crate::cart::Cart;
use crate::draft::InvoiceDraft;

/// Failure reported by the remote invoice service.
///
/// Carries the backend's human-readable message verbatim; the adapter never
/// rewrites or wraps it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct RemoteError(pub String);

/// What the backend returns for a created invoice. The total here is
/// authoritative (server-side recomputation), unlike the cart's advisory one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceReceipt {
    pub id: InvoiceId,
    /// Total in smallest currency unit.
    pub total: u64,
    pub status: String,
}

/// Seam to the invoice-creation endpoint, implemented by the HTTP client and
/// by in-memory fakes in tests.
#[async_trait]
pub trait InvoiceApi: Send + Sync {
    async fn create_invoice(&self, draft: &InvoiceDraft) -> Result<InvoiceReceipt, RemoteError>;
}

/// Submission failure taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Submission attempted on an empty cart. The UI should prevent this, but
    /// the adapter guards it anyway and never contacts the network.
    #[error("cannot submit an empty cart")]
    EmptyCart,

    /// A submission was already in flight; rejected without contacting the
    /// network (guards duplicate invoice creation from repeated clicks).
    #[error("a submission is already in flight")]
    AlreadySubmitting,

    /// The remote call failed; message passed through unmodified. The cart is
    /// left untouched so the user can retry without re-building it.
    #[error("{0}")]
    Remote(String),
}

/// Converts a non-empty cart into an invoice-creation request.
///
/// Per submission attempt the state machine is `Idle -> Submitting ->
/// {Success, Failed}`; only `Submitting` needs a run-time representation,
/// held as an atomic flag so the guard also works when the submitter is
/// shared behind an `Arc`. There is no cancellation mid-submission and no
/// automatic retry.
pub struct Submitter<A> {
    api: A,
    in_flight: AtomicBool,
}

impl<A: InvoiceApi> Submitter<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submit the cart as a new invoice.
    ///
    /// On success the cart is cleared and the caller is expected to refresh
    /// its product snapshot, since invoice creation changed stock levels
    /// server-side. On failure the cart is preserved for retry.
    pub async fn submit(&self, cart: &mut Cart) -> Result<InvoiceReceipt, SubmitError> {
        if cart.is_empty() {
            return Err(SubmitError::EmptyCart);
        }
        if self.in_flight.swap(true, Ordering::AcqRel) {
            return Err(SubmitError::AlreadySubmitting);
        }

        let draft = cart.draft();
        tracing::debug!(
            items = draft.items.len(),
            advisory_total = draft.advisory_total,
            "submitting invoice draft"
        );

        let result = self.api.create_invoice(&draft).await;
        self.in_flight.store(false, Ordering::Release);

        match result {
            Ok(receipt) => {
                tracing::info!(invoice_id = %receipt.id, total = receipt.total, "invoice created");
                cart.clear();
                Ok(receipt)
            }
            Err(RemoteError(message)) => {
                tracing::warn!(error = %message, "invoice submission failed");
                Err(SubmitError::Remote(message))
            }
        }
    }
}
