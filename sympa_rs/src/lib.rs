//! # sympa
//!
//! Platform-independent logic behind the SYMPA landing page.
//!
//! The page itself is a Leptos CSR app (`landing/`); everything in this crate
//! compiles and tests natively, with browser capabilities injected through
//! small traits:
//!
//! - [`storage::SnapshotSlot`] for the localStorage slot
//! - [`confirm::Confirm`] for the blocking yes/no prompt
//! - [`clock::Clock`] for "now"
//!
//! ## Modules
//!
//! - [`store`] - testimonial list: seed, add, remove, write-through persistence
//! - [`scroll_spy`] - active nav section from section bounds
//! - [`catalog`] - robots offered on the pricing cards
//! - [`promo`] - countdown for the promotional counter
//! - [`config`] - `site.toml` settings

pub mod catalog;
pub mod clock;
pub mod config;
pub mod confirm;
pub mod promo;
pub mod review;
pub mod scroll_spy;
pub mod seed;
pub mod storage;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::SiteConfig;
pub use confirm::Confirm;
pub use review::Review;
pub use scroll_spy::{Section, SectionBounds, compute_active_section};
pub use storage::{JsonSnapshot, MemorySlot, ReviewStorage, SnapshotSlot, StoreError};
pub use store::{RemoveOutcome, ReviewForm, ReviewStore};
