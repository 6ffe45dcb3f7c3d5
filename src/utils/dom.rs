//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::Window;

use crate::models::DeviceClass;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the browser user agent string (empty if unavailable).
pub fn user_agent() -> String {
    window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default()
}

/// Classify the current device from its user agent.
pub fn detect_device_class() -> DeviceClass {
    DeviceClass::from_user_agent(&user_agent())
}

/// Open `url` in a new, independent browsing context.
///
/// Returns `true` if the browser accepted the request (pop-up blockers may
/// still refuse it).
pub fn open_in_new_tab(url: &str) -> bool {
    window()
        .and_then(|w| w.open_with_url_and_target(url, "_blank").ok())
        .flatten()
        .is_some()
}
