//! Outbound notifications from the controller to the shell.

use std::sync::Arc;

use bro_common::BrowserId;
use parking_lot::Mutex;
use tracing::debug;

use crate::events::UiEvent;

/// The shell's side of the controller.
///
/// Every method is invoked on the UI thread. Implementations must not call
/// back into the controller synchronously, and only ever see browser ids,
/// never session handles.
pub trait UiSink: Send + Sync {
    fn update_url(&self, url: &str);

    fn update_navigation_state(&self, can_go_back: bool, can_go_forward: bool);

    fn set_loading(&self, is_loading: bool);

    fn on_tab_created(&self, browser_id: BrowserId, url: &str);

    fn on_tab_title_changed(&self, browser_id: BrowserId, title: &str);

    fn on_tab_favicon_changed(&self, browser_id: BrowserId, favicon_url: &str);

    fn on_tab_closed(&self, browser_id: BrowserId);

    fn on_active_tab_changed(&self, browser_id: BrowserId);

    fn on_tab_loading_changed(&self, browser_id: BrowserId, is_loading: bool);

    fn open_link_in_new_tab(&self, url: &str);
}

// =============================================================================
// EVENT QUEUE SINK
// =============================================================================

/// Sink that records notifications as [`UiEvent`]s for the shell to drain.
///
/// Clones share the same queue.
#[derive(Debug, Clone, Default)]
pub struct EventQueueSink {
    events: Arc<Mutex<Vec<UiEvent>>>,
}

impl EventQueueSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every pending event, oldest first.
    pub fn drain_events(&self) -> Vec<UiEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    fn push(&self, event: UiEvent) {
        self.events.lock().push(event);
    }
}

impl UiSink for EventQueueSink {
    fn update_url(&self, url: &str) {
        self.push(UiEvent::UrlChanged { url: url.into() });
    }

    fn update_navigation_state(&self, can_go_back: bool, can_go_forward: bool) {
        self.push(UiEvent::NavigationStateChanged {
            can_go_back,
            can_go_forward,
        });
    }

    fn set_loading(&self, is_loading: bool) {
        self.push(UiEvent::LoadingChanged { is_loading });
    }

    fn on_tab_created(&self, browser_id: BrowserId, url: &str) {
        self.push(UiEvent::TabCreated {
            browser_id,
            url: url.into(),
        });
    }

    fn on_tab_title_changed(&self, browser_id: BrowserId, title: &str) {
        self.push(UiEvent::TabTitleChanged {
            browser_id,
            title: title.into(),
        });
    }

    fn on_tab_favicon_changed(&self, browser_id: BrowserId, favicon_url: &str) {
        self.push(UiEvent::TabFaviconChanged {
            browser_id,
            favicon_url: favicon_url.into(),
        });
    }

    fn on_tab_closed(&self, browser_id: BrowserId) {
        self.push(UiEvent::TabClosed { browser_id });
    }

    fn on_active_tab_changed(&self, browser_id: BrowserId) {
        self.push(UiEvent::ActiveTabChanged { browser_id });
    }

    fn on_tab_loading_changed(&self, browser_id: BrowserId, is_loading: bool) {
        self.push(UiEvent::TabLoadingChanged {
            browser_id,
            is_loading,
        });
    }

    fn open_link_in_new_tab(&self, url: &str) {
        self.push(UiEvent::OpenLinkInNewTab { url: url.into() });
    }
}

// =============================================================================
// TRACING SINK
// =============================================================================

/// Sink that only logs. Useful before a real shell is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl UiSink for TracingSink {
    fn update_url(&self, url: &str) {
        debug!(url = %url, "ui: update url");
    }

    fn update_navigation_state(&self, can_go_back: bool, can_go_forward: bool) {
        debug!(can_go_back, can_go_forward, "ui: navigation state");
    }

    fn set_loading(&self, is_loading: bool) {
        debug!(is_loading, "ui: loading");
    }

    fn on_tab_created(&self, browser_id: BrowserId, url: &str) {
        debug!(browser_id = %browser_id, url = %url, "ui: tab created");
    }

    fn on_tab_title_changed(&self, browser_id: BrowserId, title: &str) {
        debug!(browser_id = %browser_id, title = %title, "ui: tab title");
    }

    fn on_tab_favicon_changed(&self, browser_id: BrowserId, favicon_url: &str) {
        debug!(browser_id = %browser_id, favicon_url = %favicon_url, "ui: tab favicon");
    }

    fn on_tab_closed(&self, browser_id: BrowserId) {
        debug!(browser_id = %browser_id, "ui: tab closed");
    }

    fn on_active_tab_changed(&self, browser_id: BrowserId) {
        debug!(browser_id = %browser_id, "ui: active tab");
    }

    fn on_tab_loading_changed(&self, browser_id: BrowserId, is_loading: bool) {
        debug!(browser_id = %browser_id, is_loading, "ui: tab loading");
    }

    fn open_link_in_new_tab(&self, url: &str) {
        debug!(url = %url, "ui: open link in new tab");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_records_in_call_order() {
        let sink = EventQueueSink::new();
        sink.on_tab_created(BrowserId(1), "about:blank");
        sink.update_url("https://a");
        sink.set_loading(true);

        let events = sink.drain_events();
        assert_eq!(
            events,
            vec![
                UiEvent::TabCreated {
                    browser_id: BrowserId(1),
                    url: "about:blank".into()
                },
                UiEvent::UrlChanged {
                    url: "https://a".into()
                },
                UiEvent::LoadingChanged { is_loading: true },
            ]
        );
    }

    #[test]
    fn drain_empties_the_queue() {
        let sink = EventQueueSink::new();
        sink.on_tab_closed(BrowserId(3));
        assert_eq!(sink.len(), 1);
        sink.drain_events();
        assert!(sink.is_empty());
        assert!(sink.drain_events().is_empty());
    }

    #[test]
    fn clones_share_one_queue() {
        let sink = EventQueueSink::new();
        let shell_side = sink.clone();
        sink.open_link_in_new_tab("https://b");
        assert_eq!(
            shell_side.drain_events(),
            vec![UiEvent::OpenLinkInNewTab {
                url: "https://b".into()
            }]
        );
    }

    #[test]
    fn tracing_sink_accepts_everything() {
        let sink = TracingSink;
        sink.update_navigation_state(true, false);
        sink.on_tab_loading_changed(BrowserId(1), false);
        sink.on_active_tab_changed(BrowserId(1));
    }
}
