use std::sync::Arc;

use bro_common::BrowserId;
use tracing::debug;

use super::SessionController;

// =============================================================================
// THREAD HOP
// =============================================================================

impl SessionController {
    /// Run `intent` now if on the UI thread, otherwise post it there and
    /// return without touching any state. A posted intent holds the
    /// controller weakly and is dropped if the controller is gone when it
    /// runs.
    fn run_on_ui<F>(self: &Arc<Self>, intent: F)
    where
        F: FnOnce(&SessionController) + Send + 'static,
    {
        if self.runner.currently_on_ui() {
            intent(self.as_ref());
        } else {
            let this = Arc::downgrade(self);
            self.runner.post_ui_task(Box::new(move || match this.upgrade() {
                Some(this) => intent(this.as_ref()),
                None => debug!("controller gone, dropping posted intent"),
            }));
        }
    }
}

// =============================================================================
// INTENTS
// =============================================================================

impl SessionController {
    /// Make `id` the active tab and refresh the toolbar from it.
    pub fn set_active_browser(self: &Arc<Self>, id: BrowserId) {
        self.run_on_ui(move |this| {
            let browser = {
                let mut registry = this.registry.lock();
                if !registry.set_active(id) {
                    return;
                }
                registry.lookup(id)
            };
            let Some(browser) = browser else {
                return;
            };

            debug!(browser_id = %id, "active browser changed");
            this.sink.on_active_tab_changed(id);
            this.sink.update_url(&browser.main_frame().url());
            this.sink.update_navigation_state(browser.can_go_back(), browser.can_go_forward());
        });
    }

    /// Ask the engine to close one browser.
    pub fn close_browser(self: &Arc<Self>, id: BrowserId) {
        self.run_on_ui(move |this| {
            let browser = this.registry.lock().lookup(id);
            match browser {
                Some(browser) => browser.close(false),
                None => debug!(browser_id = %id, "close for unknown browser ignored"),
            }
        });
    }

    /// Ask the engine to close every browser. The registry changes only as
    /// the engine reports each close.
    pub fn close_all_browsers(self: &Arc<Self>, force: bool) {
        self.run_on_ui(move |this| {
            let browsers = this.registry.lock().handles();
            debug!(count = browsers.len(), force, "closing all browsers");
            for browser in browsers {
                browser.close(force);
            }
        });
    }

    /// Bring the first browser's native window to the front.
    pub fn show_main_window(self: &Arc<Self>) {
        self.run_on_ui(|this| {
            if !this.native_window {
                return;
            }
            let first = this.registry.lock().first();
            if let Some(browser) = first {
                this.platform.show_window(browser.as_ref());
            }
        });
    }

    pub fn go_back(self: &Arc<Self>) {
        self.run_on_ui(|this| {
            let active = this.active_browser();
            if let Some(browser) = active {
                if browser.can_go_back() {
                    browser.go_back();
                }
            }
        });
    }

    pub fn go_forward(self: &Arc<Self>) {
        self.run_on_ui(|this| {
            let active = this.active_browser();
            if let Some(browser) = active {
                if browser.can_go_forward() {
                    browser.go_forward();
                }
            }
        });
    }

    pub fn reload(self: &Arc<Self>) {
        self.run_on_ui(|this| {
            let active = this.active_browser();
            if let Some(browser) = active {
                browser.reload();
            }
        });
    }

    /// Load `url` into the active browser's main frame.
    pub fn load_url(self: &Arc<Self>, url: impl Into<String>) {
        let url = url.into();
        self.run_on_ui(move |this| {
            let active = this.active_browser();
            if let Some(browser) = active {
                debug!(browser_id = %browser.identifier(), url = %url, "loading url");
                browser.main_frame().load_url(&url);
            }
        });
    }
}
