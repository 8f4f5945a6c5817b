//! Browser Helpers
//!
//! Small wrappers over `window` APIs used by the pages.

/// Blocking acknowledgement dialog.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("alert failed: {:?}", e);
        }
    }
}

/// Go back one history entry.
pub fn history_back() {
    let Some(window) = web_sys::window() else { return };
    match window.history() {
        Ok(history) => {
            if let Err(e) = history.back() {
                log::warn!("history.back failed: {:?}", e);
            }
        }
        Err(e) => log::warn!("history unavailable: {:?}", e),
    }
}
