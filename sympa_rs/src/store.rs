//! Testimonial list with write-through persistence.
//!
//! The in-memory list is the source of truth. Storage is best-effort: read
//! failures fall back to the seed list, write failures are logged and dropped.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::confirm::Confirm;
use crate::review::Review;
use crate::seed::default_reviews;
use crate::storage::ReviewStorage;

pub const DEFAULT_CONFIRM_PROMPT: &str = "Supprimer ce commentaire ?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    /// The visitor declined the confirmation prompt.
    Cancelled,
    NotFound,
}

pub struct ReviewStore<S, C = SystemClock> {
    reviews: Vec<Review>,
    storage: S,
    clock: C,
    confirm_prompt: String,
    last_issued_ms: i64,
}

impl<S: ReviewStorage> ReviewStore<S, SystemClock> {
    pub fn open(storage: S) -> Self {
        Self::open_with_clock(storage, SystemClock)
    }
}

impl<S: ReviewStorage, C: Clock> ReviewStore<S, C> {
    /// Load the persisted list, or the seed list when there is none or it is unusable.
    ///
    /// The resulting list is written back once, so an unreadable slot gets
    /// replaced by the seed list.
    pub fn open_with_clock(storage: S, clock: C) -> Self {
        let reviews = match storage.load() {
            Ok(Some(reviews)) if is_well_formed(&reviews) => reviews,
            Ok(Some(_)) => {
                warn!("review snapshot holds blank or duplicate entries, using seed list");
                default_reviews()
            }
            Ok(None) => {
                debug!("no review snapshot, using seed list");
                default_reviews()
            }
            Err(err) => {
                warn!(error = %err, "review snapshot unreadable, using seed list");
                default_reviews()
            }
        };

        let store = Self {
            reviews,
            storage,
            clock,
            confirm_prompt: DEFAULT_CONFIRM_PROMPT.to_string(),
            last_issued_ms: i64::MIN,
        };
        store.persist();
        store
    }

    pub fn with_confirm_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.confirm_prompt = prompt.into();
        self
    }

    /// Newest first.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Review> {
        self.reviews.iter().find(|r| r.id == id)
    }

    /// Prepend a new review. Returns `None` (and changes nothing) when either
    /// field is blank after trimming.
    pub fn add(&mut self, name: &str, text: &str) -> Option<&Review> {
        let (name, text) = (name.trim(), text.trim());
        if name.is_empty() || text.is_empty() {
            return None;
        }

        let review = Review::new(self.next_id(), name, text, self.clock.today());
        info!(id = %review.id, "review added");
        self.reviews.insert(0, review);
        self.persist();
        self.reviews.first()
    }

    /// Delete the review with `id` once the visitor confirms.
    ///
    /// The prompt is shown before the lookup, as on the live site.
    pub fn remove(&mut self, id: &str, confirm: &impl Confirm) -> RemoveOutcome {
        if !confirm.confirm(&self.confirm_prompt) {
            debug!(id, "review removal cancelled");
            return RemoveOutcome::Cancelled;
        }

        let before = self.reviews.len();
        self.reviews.retain(|r| r.id != id);
        if self.reviews.len() == before {
            return RemoveOutcome::NotFound;
        }

        info!(id, "review removed");
        self.persist();
        RemoveOutcome::Removed
    }

    fn persist(&self) {
        if let Err(err) = self.storage.save(&self.reviews) {
            warn!(error = %err, "could not persist reviews, keeping in-memory list");
        }
    }

    /// `c<unix millis>`, strictly increasing within this store and never
    /// colliding with an id already in the list.
    fn next_id(&mut self) -> String {
        let mut millis = self
            .clock
            .now()
            .timestamp_millis()
            .max(self.last_issued_ms.saturating_add(1));
        let mut id = format!("c{millis}");
        while self.reviews.iter().any(|r| r.id == id) {
            millis += 1;
            id = format!("c{millis}");
        }
        self.last_issued_ms = millis;
        id
    }
}

/// Every entry filled in and every id distinct.
fn is_well_formed(reviews: &[Review]) -> bool {
    let mut seen = HashSet::with_capacity(reviews.len());
    reviews.iter().all(|review| {
        !review.id.is_empty()
            && !review.name.trim().is_empty()
            && !review.text.trim().is_empty()
            && seen.insert(review.id.as_str())
    })
}

/// Contents of the "new testimonial" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewForm {
    pub name: String,
    pub text: String,
}

impl ReviewForm {
    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty() && !self.text.trim().is_empty()
    }

    /// Add the form contents to `store`; clears the form only on success.
    pub fn submit<S: ReviewStorage, C: Clock>(&mut self, store: &mut ReviewStore<S, C>) -> bool {
        let added = store.add(&self.name, &self.text).is_some();
        if added {
            self.clear();
        }
        added
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.text.clear();
    }
}
