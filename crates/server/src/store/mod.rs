//! In-process backing stores.
//!
//! Each store guards its state behind a single `tokio::sync::RwLock`,
//! so every invariant with a race window is enforced inside one write
//! lock acquisition:
//!
//! - account email uniqueness is checked and committed atomically in
//!   [`accounts::CredentialStore::create`]
//! - the paid flag is a compare-and-set in
//!   [`orders::OrderLedger::mark_paid`]
//!
//! IDs are allocated from a per-store monotonic counter, so ascending
//! ID order is registration/creation order.

pub mod accounts;
pub mod customers;
pub mod media;
pub mod orders;
pub mod products;
pub mod seed;
pub mod sessions;

pub use accounts::CredentialStore;
pub use customers::CustomerRegistry;
pub use media::SliderGallery;
pub use orders::{OrderLedger, PaidTransition};
pub use products::ProductCatalog;
pub use sessions::SessionStore;

use thiserror::Error;

/// Errors returned by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint was violated at commit time.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The referenced entity does not exist.
    #[error("not found")]
    NotFound,
}
