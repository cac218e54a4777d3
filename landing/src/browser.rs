//! Browser capabilities handed to the `sympa` core.

use sympa::{Confirm, Section, SectionBounds, SnapshotSlot, StoreError};
use wasm_bindgen::JsValue;

/// One localStorage entry.
///
/// The `Storage` handle is looked up on every access: it is not `Send`, and
/// some browsers throw on `window.localStorage` in private mode.
#[derive(Debug, Clone)]
pub struct LocalStorageSlot {
    key: String,
}

impl LocalStorageSlot {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".into()))?
            .local_storage()
            .map_err(|err| StoreError::Unavailable(describe(&err)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage is null".into()))
    }
}

impl SnapshotSlot for LocalStorageSlot {
    fn read(&self) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(&self.key)
            .map_err(|err| StoreError::Rejected(describe(&err)))
    }

    fn write(&self, payload: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(&self.key, payload)
            .map_err(|err| StoreError::Rejected(describe(&err)))
    }
}

/// `window.confirm`. Anything but an explicit "OK" counts as no.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
}

/// Viewport-relative bounds of every tracked section present in the document.
pub fn section_bounds() -> Vec<SectionBounds<Section>> {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return Vec::new();
    };

    Section::ALL
        .into_iter()
        .filter_map(|section| {
            let rect = document
                .get_element_by_id(section.id())?
                .get_bounding_client_rect();
            Some(SectionBounds::new(section, rect.top(), rect.bottom()))
        })
        .collect()
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
