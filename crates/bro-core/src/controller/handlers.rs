use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::engine::{
    BrowserRef, ContextMenuHandler, ContextMenuParams, DisplayHandler, ErrorCode, Frame,
    LifeSpanHandler, LoadHandler, MenuModel,
};
use crate::error_page;
use crate::menu;

use super::SessionController;

// =============================================================================
// DISPLAY
// =============================================================================

impl DisplayHandler for SessionController {
    fn on_title_change(&self, browser: &BrowserRef, title: &str) {
        self.require_ui_thread("on_title_change");
        let id = browser.identifier();
        debug!(browser_id = %id, title = %title, "title changed");

        self.sink.on_tab_title_changed(id, title);
        if self.native_window {
            self.platform.title_changed(browser.as_ref(), title);
        }
    }

    fn on_address_change(&self, browser: &BrowserRef, frame: &dyn Frame, url: &str) {
        self.require_ui_thread("on_address_change");
        if !frame.is_main() {
            return;
        }

        let id = browser.identifier();
        let active = self.registry.lock().active_id();
        if active != Some(id) {
            return;
        }

        debug!(browser_id = %id, url = %url, "active address changed");
        self.sink.update_url(url);
    }

    fn on_favicon_url_change(&self, browser: &BrowserRef, icon_urls: &[String]) {
        self.require_ui_thread("on_favicon_url_change");
        if let Some(favicon_url) = icon_urls.first() {
            self.sink.on_tab_favicon_changed(browser.identifier(), favicon_url);
        }
    }
}

// =============================================================================
// LIFESPAN
// =============================================================================

impl LifeSpanHandler for SessionController {
    fn on_after_created(&self, browser: &BrowserRef) {
        self.require_ui_thread("on_after_created");
        let id = browser.identifier();

        let inserted = self.registry.lock().insert(Arc::clone(browser));
        if !inserted {
            return;
        }

        let url = browser.main_frame().url();
        debug!(browser_id = %id, url = %url, "browser created");
        self.sink.on_tab_created(id, &url);
    }

    fn do_close(&self, browser: &BrowserRef) -> bool {
        self.require_ui_thread("do_close");

        let mut registry = self.registry.lock();
        if registry.len() == 1 {
            registry.mark_closing();
        }
        drop(registry);

        debug!(browser_id = %browser.identifier(), "allowing close");
        false
    }

    fn on_before_close(&self, browser: &BrowserRef) {
        self.require_ui_thread("on_before_close");
        let id = browser.identifier();

        let (removed, now_empty) = {
            let mut registry = self.registry.lock();
            let removed = registry.remove(id);
            (removed, registry.is_empty())
        };
        let Some(removed) = removed else {
            warn!(browser_id = %id, "before-close for unknown browser");
            return;
        };

        self.sink.on_tab_closed(id);

        if removed.was_active {
            if let Some(next) = removed.active {
                self.sink.on_active_tab_changed(next);
            }
        }

        if now_empty {
            info!("last browser closed, quitting message loop");
            self.runner.quit_message_loop();
        }
    }
}

// =============================================================================
// LOAD
// =============================================================================

impl LoadHandler for SessionController {
    fn on_loading_state_change(
        &self,
        browser: &BrowserRef,
        is_loading: bool,
        can_go_back: bool,
        can_go_forward: bool,
    ) {
        self.require_ui_thread("on_loading_state_change");
        let id = browser.identifier();

        self.sink.on_tab_loading_changed(id, is_loading);

        let active = self.registry.lock().active_id();
        if active == Some(id) {
            self.sink.update_navigation_state(can_go_back, can_go_forward);
            self.sink.set_loading(is_loading);
        }
    }

    fn on_load_error(
        &self,
        browser: &BrowserRef,
        frame: &dyn Frame,
        error_code: ErrorCode,
        error_text: &str,
        failed_url: &str,
    ) {
        self.require_ui_thread("on_load_error");
        if error_code.is_aborted() {
            return;
        }

        debug!(
            browser_id = %browser.identifier(),
            code = %error_code,
            url = %failed_url,
            "load failed, showing error page"
        );
        frame.load_url(&error_page::error_page_uri(failed_url, error_text, error_code));
    }
}

// =============================================================================
// CONTEXT MENU
// =============================================================================

impl ContextMenuHandler for SessionController {
    fn on_before_context_menu(
        &self,
        _browser: &BrowserRef,
        _frame: &dyn Frame,
        params: &ContextMenuParams,
        model: &mut dyn MenuModel,
    ) {
        self.require_ui_thread("on_before_context_menu");
        menu::populate(model, params);
    }

    fn on_context_menu_command(
        &self,
        browser: &BrowserRef,
        _frame: &dyn Frame,
        params: &ContextMenuParams,
        command_id: i32,
    ) -> bool {
        self.require_ui_thread("on_context_menu_command");
        menu::execute(command_id, browser.as_ref(), params, self.sink.as_ref())
    }
}
