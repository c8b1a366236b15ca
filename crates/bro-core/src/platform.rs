//! Native-window hooks.
//!
//! Only consulted when the controller runs in native-window mode, where each
//! browser lives in a platform window the shell owns.

use crate::engine::Browser;

pub trait PlatformWindow: Send + Sync {
    /// The page title changed; update the native window title.
    fn title_changed(&self, browser: &dyn Browser, title: &str);

    /// Bring the browser's native window to the front.
    fn show_window(&self, browser: &dyn Browser);
}

/// Hooks for shells without native windows.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPlatform;

impl PlatformWindow for NoopPlatform {
    fn title_changed(&self, _browser: &dyn Browser, _title: &str) {}

    fn show_window(&self, _browser: &dyn Browser) {}
}
