//! Explorer-related data types for the browser UI.

use std::sync::LazyLock;

use regex::Regex;

use super::Tree;
use crate::config::{TOUCH_UA_PATTERN, preview_messages};

// =============================================================================
// Navigation Path
// =============================================================================

/// Folder names from the tree root down to the displayed folder.
///
/// Empty means the root. Segments are not checked against the tree when
/// pushed; resolution happens at render time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NavigationPath(Vec<String>);

impl NavigationPath {
    /// The root path.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Name of the innermost folder, if any.
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    pub fn push(&mut self, name: impl Into<String>) {
        self.0.push(name.into());
    }

    /// Remove the innermost segment. Does nothing at root.
    pub fn pop(&mut self) {
        self.0.pop();
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// The first `len` segments as a new path.
    pub fn prefix(&self, len: usize) -> Self {
        Self(self.0[..len.min(self.0.len())].to_vec())
    }
}

impl<S: Into<String>> FromIterator<S> for NavigationPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

// =============================================================================
// Device Class
// =============================================================================

static TOUCH_UA: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(TOUCH_UA_PATTERN).ok());

/// Interaction style the selection handler branches on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceClass {
    /// Phones and tablets: files open in a new tab.
    Touch,
    /// Desktop: files are embedded in the preview region.
    #[default]
    Pointer,
}

impl DeviceClass {
    /// Classify a user agent string.
    pub fn from_user_agent(user_agent: &str) -> Self {
        match TOUCH_UA.as_ref() {
            Some(re) if re.is_match(user_agent) => Self::Touch,
            _ => Self::Pointer,
        }
    }

    /// Placeholder text shown while nothing is previewed.
    pub fn idle_message(self) -> &'static str {
        match self {
            Self::Touch => preview_messages::TOUCH_IDLE,
            Self::Pointer => preview_messages::POINTER_IDLE,
        }
    }
}

// =============================================================================
// Preview State
// =============================================================================

/// How the preview region is displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    Hidden,
    Placeholder,
    Embedded,
}

/// What the preview region currently shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewState {
    /// Nothing shown (the structure failed to load).
    Hidden,
    /// A message instead of a document.
    Placeholder { message: String },
    /// A document embedded in place.
    Embedded { name: String, target: String },
}

impl PreviewState {
    /// Idle placeholder for the given device class.
    pub fn idle(device: DeviceClass) -> Self {
        Self::Placeholder {
            message: device.idle_message().to_string(),
        }
    }

    pub fn mode(&self) -> DisplayMode {
        match self {
            Self::Hidden => DisplayMode::Hidden,
            Self::Placeholder { .. } => DisplayMode::Placeholder,
            Self::Embedded { .. } => DisplayMode::Embedded,
        }
    }

    /// Embed target, if a document is shown.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Embedded { target, .. } => Some(target),
            _ => None,
        }
    }

    /// Placeholder text, if a message is shown.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Placeholder { message } => Some(message),
            _ => None,
        }
    }
}

// =============================================================================
// Load State
// =============================================================================

/// Lifecycle of the structure document.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    /// Fetch in flight.
    #[default]
    Loading,
    /// Tree available for browsing.
    Ready(Tree),
    /// Fetch or parse failed; holds the display message.
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // NavigationPath Tests
    // =========================================================================

    #[test]
    fn test_path_push_pop() {
        let mut path = NavigationPath::root();
        path.push("R20");
        path.push("CSE");
        assert_eq!(path.last(), Some("CSE"));
        path.pop();
        assert_eq!(path.segments(), ["R20"]);
        path.pop();
        path.pop();
        assert!(path.is_root());
    }

    #[test]
    fn test_path_prefix() {
        let path: NavigationPath = ["a", "b", "c"].into_iter().collect();
        let expected: NavigationPath = ["a", "b"].into_iter().collect();
        assert_eq!(path.prefix(2), expected);
        assert_eq!(path.prefix(0), NavigationPath::root());
        assert_eq!(path.prefix(10), path);
    }

    // =========================================================================
    // DeviceClass Tests
    // =========================================================================

    #[test]
    fn test_device_class_detection() {
        let iphone = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148";
        let android = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 Chrome/120.0 Mobile Safari/537.36";
        let desktop = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/120.0 Safari/537.36";

        assert_eq!(DeviceClass::from_user_agent(iphone), DeviceClass::Touch);
        assert_eq!(DeviceClass::from_user_agent(android), DeviceClass::Touch);
        assert_eq!(DeviceClass::from_user_agent("some ipad browser"), DeviceClass::Touch);
        assert_eq!(DeviceClass::from_user_agent(desktop), DeviceClass::Pointer);
        assert_eq!(DeviceClass::from_user_agent(""), DeviceClass::Pointer);
    }

    // =========================================================================
    // PreviewState Tests
    // =========================================================================

    #[test]
    fn test_idle_preview_per_device() {
        let touch = PreviewState::idle(DeviceClass::Touch);
        let pointer = PreviewState::idle(DeviceClass::Pointer);

        assert_eq!(touch.mode(), DisplayMode::Placeholder);
        assert_eq!(touch.message(), Some(preview_messages::TOUCH_IDLE));
        assert_eq!(pointer.message(), Some(preview_messages::POINTER_IDLE));
        assert_eq!(pointer.target(), None);
    }
}
