//! Browser-session controller.
//!
//! `SessionController` owns the tab registry, receives every engine
//! callback for the browsers it hosts, and turns shell intents into engine
//! calls. All state lives on the UI thread: callbacks assert it, intents hop
//! to it. One controller exists per process, reachable through
//! [`SessionController::instance`].

use std::sync::{Arc, Weak};

use bro_common::BrowserId;
use bro_config::BroConfig;
use parking_lot::Mutex;
use tracing::{info, warn};

use crate::engine::{
    BrowserRef, Client, ContextMenuHandler, DisplayHandler, LifeSpanHandler, LoadHandler,
    TaskRunner,
};
use crate::platform::{NoopPlatform, PlatformWindow};
use crate::sink::UiSink;

mod handlers;
mod intents;
mod registry;

pub use registry::{Removed, SessionRegistry};

static INSTANCE: Mutex<Weak<SessionController>> = parking_lot::const_mutex(Weak::new());

pub struct SessionController {
    native_window: bool,
    sink: Arc<dyn UiSink>,
    runner: Arc<dyn TaskRunner>,
    platform: Arc<dyn PlatformWindow>,
    /// Only locked on the UI thread, and never held while the sink runs.
    registry: Mutex<SessionRegistry>,
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

/// Builds the process-wide [`SessionController`].
pub struct ControllerBuilder {
    sink: Arc<dyn UiSink>,
    runner: Arc<dyn TaskRunner>,
    platform: Arc<dyn PlatformWindow>,
    native_window: bool,
}

impl ControllerBuilder {
    pub fn new(sink: Arc<dyn UiSink>, runner: Arc<dyn TaskRunner>) -> Self {
        Self {
            sink,
            runner,
            platform: Arc::new(NoopPlatform),
            native_window: false,
        }
    }

    /// Host each browser in a native window and forward title and
    /// show-window requests to the platform hooks.
    pub fn native_window(mut self, native: bool) -> Self {
        self.native_window = native;
        self
    }

    pub fn platform(mut self, platform: Arc<dyn PlatformWindow>) -> Self {
        self.platform = platform;
        self
    }

    /// Apply the `[window]` settings from a loaded config.
    pub fn with_config(self, config: &BroConfig) -> Self {
        self.native_window(config.window.native)
    }

    /// Create the controller and publish it as the process instance.
    pub fn build(self) -> Arc<SessionController> {
        let controller = Arc::new(SessionController {
            native_window: self.native_window,
            sink: self.sink,
            runner: self.runner,
            platform: self.platform,
            registry: Mutex::new(SessionRegistry::new()),
        });

        let mut slot = INSTANCE.lock();
        if slot.upgrade().is_some() {
            warn!("replacing a live session controller instance");
        }
        *slot = Arc::downgrade(&controller);
        drop(slot);

        info!(native_window = controller.native_window, "session controller created");
        controller
    }
}

impl Drop for SessionController {
    fn drop(&mut self) {
        let mut slot = INSTANCE.lock();
        if std::ptr::eq(slot.as_ptr(), self) {
            *slot = Weak::new();
        }
    }
}

// =============================================================================
// ACCESSORS
// =============================================================================

impl SessionController {
    /// The live process-wide controller, if one exists.
    pub fn instance() -> Option<Arc<SessionController>> {
        INSTANCE.lock().upgrade()
    }

    pub fn is_native_window(&self) -> bool {
        self.native_window
    }

    /// The active browser, or the first one if none is active.
    pub fn active_browser(&self) -> Option<BrowserRef> {
        self.registry.lock().active_handle()
    }

    pub fn browser(&self, id: BrowserId) -> Option<BrowserRef> {
        self.registry.lock().lookup(id)
    }

    pub fn active_browser_id(&self) -> Option<BrowserId> {
        self.registry.lock().active_id()
    }

    pub fn browser_count(&self) -> usize {
        self.registry.lock().len()
    }

    /// Browser ids in creation order.
    pub fn browser_ids(&self) -> Vec<BrowserId> {
        self.registry.lock().ids().to_vec()
    }

    /// True once the last browser has been asked to close.
    pub fn is_closing(&self) -> bool {
        self.registry.lock().is_closing()
    }

    fn require_ui_thread(&self, callback: &str) {
        assert!(
            self.runner.currently_on_ui(),
            "{callback} called off the UI thread"
        );
    }
}

impl Client for SessionController {
    fn display_handler(self: Arc<Self>) -> Option<Arc<dyn DisplayHandler>> {
        Some(self)
    }

    fn life_span_handler(self: Arc<Self>) -> Option<Arc<dyn LifeSpanHandler>> {
        Some(self)
    }

    fn load_handler(self: Arc<Self>) -> Option<Arc<dyn LoadHandler>> {
        Some(self)
    }

    fn context_menu_handler(self: Arc<Self>) -> Option<Arc<dyn ContextMenuHandler>> {
        Some(self)
    }
}
