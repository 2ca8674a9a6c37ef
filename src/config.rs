/// Compile-time settings for Domain Switcher

/// chrome.storage.sync key holding the domain list
pub const STORAGE_KEY: &str = "domains";

/// Keyboard command ids are this prefix followed by a 1-based index
pub const COMMAND_PREFIX: &str = "switch-domain-";

/// Number of shortcuts declared in manifest.json
pub const SHORTCUT_SLOTS: usize = 3;

pub const BADGE_CLEAR_DELAY_MS: u32 = 3000;
pub const NOTICE_CLEAR_DELAY_MS: u32 = 5000;

pub const BADGE_ERROR_TEXT: &str = "ERR";
pub const BADGE_ERROR_COLOR: &str = "#F44336";

/// Log level handed to wasm-logger at startup
pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
