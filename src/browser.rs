/// chrome.* bridge: storage, tabs and the action badge

use std::sync::atomic::{AtomicU32, Ordering};

use wasm_bindgen::prelude::*;

use crate::config::{BADGE_CLEAR_DELAY_MS, BADGE_ERROR_COLOR, BADGE_ERROR_TEXT, STORAGE_KEY};
use crate::domain_data::TabInfo;
use crate::error::SwitchError;
use crate::operations::TabController;
use crate::storage::{DomainList, DomainStore};

// Import JS bridge functions
#[wasm_bindgen(module = "/js/bridge.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getSyncStorage(key: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setSyncStorage(key: &str, value: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn getActiveTab() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn updateTabUrl(tab_id: i32, url: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn setBadge(text: &str, color: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn sleep(ms: u32) -> Result<(), JsValue>;
}

fn js_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Domain list kept in chrome.storage.sync
pub struct ChromeSyncStore;

impl DomainStore for ChromeSyncStore {
    async fn get(&self) -> Result<DomainList, SwitchError> {
        let list_js = getSyncStorage(STORAGE_KEY)
            .await
            .map_err(|e| SwitchError::Storage(format!("Error loading domains: {}", js_message(&e))))?;

        if list_js.is_null() || list_js.is_undefined() {
            Ok(DomainList::new())
        } else {
            serde_wasm_bindgen::from_value(list_js)
                .map_err(|e| SwitchError::Storage(format!("Failed to parse domains: {}", e)))
        }
    }

    async fn set(&self, list: &DomainList) -> Result<(), SwitchError> {
        let list_js = serde_wasm_bindgen::to_value(list)
            .map_err(|e| SwitchError::Storage(format!("Failed to serialize domains: {}", e)))?;

        setSyncStorage(STORAGE_KEY, list_js)
            .await
            .map_err(|e| SwitchError::Storage(format!("Error saving domains: {}", js_message(&e))))
    }
}

/// Active tab of the current window
pub struct ChromeTabs;

impl TabController for ChromeTabs {
    async fn active_tab(&self) -> Result<TabInfo, SwitchError> {
        let tab_js = getActiveTab()
            .await
            .map_err(|e| SwitchError::TabQuery(js_message(&e)))?;

        if tab_js.is_null() || tab_js.is_undefined() {
            return Err(SwitchError::NoActiveTab);
        }

        serde_wasm_bindgen::from_value(tab_js)
            .map_err(|e| SwitchError::TabQuery(format!("Failed to parse tab: {}", e)))
    }

    async fn navigate(&self, tab_id: i32, url: &str) -> Result<(), SwitchError> {
        updateTabUrl(tab_id, url)
            .await
            .map_err(|e| SwitchError::TabUpdate(js_message(&e)))
    }
}

/// Resolve after `ms` milliseconds
pub async fn delay(ms: u32) {
    if let Err(e) = sleep(ms).await {
        log::warn!("Timer failed: {}", js_message(&e));
    }
}

/// Counts badge flashes so a delayed clear only removes its own flash
#[derive(Default)]
pub struct FlashGenerations(AtomicU32);

impl FlashGenerations {
    pub const fn new() -> Self {
        FlashGenerations(AtomicU32::new(0))
    }

    pub fn begin(&self) -> u32 {
        self.0.fetch_add(1, Ordering::Relaxed).wrapping_add(1)
    }

    pub fn is_latest(&self, generation: u32) -> bool {
        self.0.load(Ordering::Relaxed) == generation
    }
}

static BADGE_FLASHES: FlashGenerations = FlashGenerations::new();

/// Show "ERR" on the toolbar icon, then clear it unless a newer flash started
pub async fn flash_error_badge() {
    let generation = BADGE_FLASHES.begin();

    if let Err(e) = setBadge(BADGE_ERROR_TEXT, BADGE_ERROR_COLOR).await {
        log::warn!("Failed to set badge: {}", js_message(&e));
        return;
    }

    delay(BADGE_CLEAR_DELAY_MS).await;

    if !BADGE_FLASHES.is_latest(generation) {
        return;
    }

    if let Err(e) = setBadge("", BADGE_ERROR_COLOR).await {
        log::warn!("Failed to clear badge: {}", js_message(&e));
    }
}
