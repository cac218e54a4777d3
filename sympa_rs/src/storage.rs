//! Persistence seam for the testimonial list.
//!
//! Two layers:
//! - [`SnapshotSlot`]: one named string slot (localStorage in the browser,
//!   [`MemorySlot`] in tests)
//! - [`ReviewStorage`]: `load()` / `save(list)` on whole review lists;
//!   [`JsonSnapshot`] implements it over any slot with `serde_json`

use std::cell::RefCell;

use thiserror::Error;
use tracing::debug;

use crate::review::Review;

/// localStorage key holding the review snapshot.
pub const DEFAULT_STORAGE_KEY: &str = "site_comments_v1";

#[derive(Debug, Error)]
pub enum StoreError {
    /// No storage backend (private mode, disabled storage, no window).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// Backend refused the operation (quota, security error).
    #[error("storage rejected the operation: {0}")]
    Rejected(String),
    /// Payload did not decode as a review list, or the list did not encode.
    #[error("snapshot codec: {0}")]
    Codec(#[from] serde_json::Error),
}

/// A single named string slot.
pub trait SnapshotSlot {
    /// `Ok(None)` when nothing has been written yet.
    fn read(&self) -> Result<Option<String>, StoreError>;
    fn write(&self, payload: &str) -> Result<(), StoreError>;
}

impl<T: SnapshotSlot + ?Sized> SnapshotSlot for &T {
    fn read(&self) -> Result<Option<String>, StoreError> {
        (**self).read()
    }

    fn write(&self, payload: &str) -> Result<(), StoreError> {
        (**self).write(payload)
    }
}

/// In-memory slot.
#[derive(Debug, Default)]
pub struct MemorySlot {
    payload: RefCell<Option<String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: RefCell::new(Some(payload.into())),
        }
    }

    /// Current raw contents.
    pub fn payload(&self) -> Option<String> {
        self.payload.borrow().clone()
    }
}

impl SnapshotSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, StoreError> {
        Ok(self.payload.borrow().clone())
    }

    fn write(&self, payload: &str) -> Result<(), StoreError> {
        *self.payload.borrow_mut() = Some(payload.to_string());
        Ok(())
    }
}

/// Whole-list persistence.
pub trait ReviewStorage {
    /// `Ok(None)` when no snapshot exists yet.
    fn load(&self) -> Result<Option<Vec<Review>>, StoreError>;
    fn save(&self, reviews: &[Review]) -> Result<(), StoreError>;
}

/// JSON array of reviews stored in a [`SnapshotSlot`].
#[derive(Debug, Clone)]
pub struct JsonSnapshot<S> {
    slot: S,
}

impl<S: SnapshotSlot> JsonSnapshot<S> {
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }
}

impl<S: SnapshotSlot> ReviewStorage for JsonSnapshot<S> {
    fn load(&self) -> Result<Option<Vec<Review>>, StoreError> {
        let Some(raw) = self.slot.read()? else {
            return Ok(None);
        };
        let reviews: Vec<Review> = serde_json::from_str(&raw)?;
        debug!(count = reviews.len(), "decoded review snapshot");
        Ok(Some(reviews))
    }

    fn save(&self, reviews: &[Review]) -> Result<(), StoreError> {
        let payload = serde_json::to_string(reviews)?;
        self.slot.write(&payload)
    }
}
