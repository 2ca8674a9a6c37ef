/// Background service worker: keyboard shortcut handling

use wasm_bindgen::prelude::*;

use crate::browser::{flash_error_badge, ChromeSyncStore, ChromeTabs};
use crate::config::COMMAND_PREFIX;
use crate::operations::run_shortcut;

/// Entry point for chrome.commands.onCommand
#[wasm_bindgen]
pub async fn handle_command(command: String) {
    if !command.starts_with(COMMAND_PREFIX) {
        log::debug!("Ignoring command {}", command);
        return;
    }

    match run_shortcut(&ChromeSyncStore, &ChromeTabs, &command).await {
        Ok(url) => log::info!("{} -> {}", command, url),
        Err(e) => {
            log::error!("Error switching domain: {}", e);
            flash_error_badge().await;
        }
    }
}
