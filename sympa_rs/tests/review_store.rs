use std::cell::Cell;

use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use sympa::seed::default_reviews;
use sympa::{
    FixedClock, JsonSnapshot, MemorySlot, RemoveOutcome, ReviewStore, SnapshotSlot, StoreError,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 14, 5, 0).unwrap()
}

fn open(slot: &MemorySlot) -> ReviewStore<JsonSnapshot<&MemorySlot>, FixedClock> {
    ReviewStore::open_with_clock(JsonSnapshot::new(slot), FixedClock(now()))
}

fn yes(_: &str) -> bool {
    true
}

/// Slot whose backend is gone: every read and write fails.
#[derive(Default)]
struct BrokenSlot {
    writes: Cell<usize>,
}

impl SnapshotSlot for BrokenSlot {
    fn read(&self) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("localStorage disabled".into()))
    }

    fn write(&self, _payload: &str) -> Result<(), StoreError> {
        self.writes.set(self.writes.get() + 1);
        Err(StoreError::Rejected("QuotaExceededError".into()))
    }
}

#[test]
fn missing_snapshot_yields_seed_list() {
    let slot = MemorySlot::new();
    assert_eq!(open(&slot).reviews(), default_reviews().as_slice());
}

#[test]
fn malformed_snapshot_yields_seed_list_and_is_overwritten() {
    let slot = MemorySlot::with_payload("{\"oops\": true");
    let store = open(&slot);
    assert_eq!(store.reviews(), default_reviews().as_slice());

    let healed = open(&slot);
    assert_eq!(healed.reviews(), default_reviews().as_slice());
    assert!(slot.payload().unwrap().starts_with('['));
}

#[test]
fn unreadable_storage_yields_seed_list() {
    let store = ReviewStore::open_with_clock(JsonSnapshot::new(BrokenSlot::default()), FixedClock(now()));
    assert_eq!(store.reviews(), default_reviews().as_slice());
}

#[test]
fn failed_writes_keep_memory_authoritative() {
    let slot = BrokenSlot::default();
    let mut store = ReviewStore::open_with_clock(JsonSnapshot::new(&slot), FixedClock(now()));

    assert!(store.add("Lucie, 68 ans", "Formidable").is_some());
    assert_eq!(store.remove("c1", &yes), RemoveOutcome::Removed);

    assert_eq!(store.len(), 3);
    assert_eq!(store.reviews()[0].name, "Lucie, 68 ans");
    assert!(store.get("c1").is_none());
    // open + add + remove
    assert_eq!(slot.writes.get(), 3);
}

#[test]
fn adding_lucie_to_seed_list() {
    let slot = MemorySlot::new();
    let mut store = open(&slot);

    store.add("Lucie, 68 ans", "Formidable");

    assert_eq!(store.len(), 4);
    let first = &store.reviews()[0];
    assert_eq!(first.name, "Lucie, 68 ans");
    assert_eq!(first.date, now().date_naive());
    assert_eq!(first.display_date(), "2026-10-16");
}

#[test]
fn removing_c2_after_confirmation() {
    let slot = MemorySlot::new();
    let mut store = open(&slot);

    assert_eq!(store.remove("c2", &yes), RemoveOutcome::Removed);

    assert_eq!(store.len(), 2);
    assert!(store.reviews().iter().all(|r| r.id != "c2"));
    assert!(!slot.payload().unwrap().contains("\"c2\""));
}

#[test]
fn persisted_list_round_trips() {
    let slot = MemorySlot::new();
    let mut store = open(&slot);
    store.add("Lucie, 68 ans", "Formidable");
    store.add("Paul", "Très utile pour ma mère");
    store.remove("c3", &yes);
    let expected = store.reviews().to_vec();

    let reopened = open(&slot);
    assert_eq!(reopened.reviews(), expected.as_slice());
}

#[test]
fn emptied_list_stays_empty_after_reload() {
    let slot = MemorySlot::new();
    let mut store = open(&slot);
    for id in ["c1", "c2", "c3"] {
        store.remove(id, &yes);
    }
    assert!(store.is_empty());
    assert!(open(&slot).is_empty());
}

fn blank() -> impl Strategy<Value = String> {
    "[ \t\n]{0,6}"
}

fn filled() -> impl Strategy<Value = String> {
    "[ \t]{0,3}[A-Za-zÀ-ÿ0-9,.!']{1,20}[ \t]{0,3}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn add_with_filled_fields_prepends_one(name in filled(), text in filled()) {
        let slot = MemorySlot::new();
        let mut store = open(&slot);
        let before = store.len();

        let added = store.add(&name, &text).cloned();

        prop_assert!(added.is_some());
        prop_assert_eq!(store.len(), before + 1);
        prop_assert_eq!(&store.reviews()[0], &added.unwrap());
        prop_assert_eq!(store.reviews()[0].name.as_str(), name.trim());
    }

    #[test]
    fn add_with_blank_field_changes_nothing(
        name in prop_oneof![blank(), filled()],
        text in blank(),
        swap in any::<bool>(),
    ) {
        let (name, text) = if swap { (text, name) } else { (name, text) };
        let slot = MemorySlot::new();
        let mut store = open(&slot);
        let before = store.reviews().to_vec();
        let persisted = slot.payload();

        prop_assert!(store.add(&name, &text).is_none());
        prop_assert_eq!(store.reviews(), before.as_slice());
        prop_assert_eq!(slot.payload(), persisted);
    }

    #[test]
    fn remove_existing_drops_exactly_one(index in 0usize..3) {
        let slot = MemorySlot::new();
        let mut store = open(&slot);
        let id = store.reviews()[index].id.clone();

        prop_assert_eq!(store.remove(&id, &yes), RemoveOutcome::Removed);
        prop_assert_eq!(store.len(), 2);
        prop_assert!(store.get(&id).is_none());
    }

    #[test]
    fn remove_unknown_changes_nothing(id in "x[0-9]{1,8}") {
        let slot = MemorySlot::new();
        let mut store = open(&slot);

        prop_assert_eq!(store.remove(&id, &yes), RemoveOutcome::NotFound);
        let seed = default_reviews();
        prop_assert_eq!(store.reviews(), seed.as_slice());
    }
}
