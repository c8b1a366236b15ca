//! UI notification values.

use bro_common::BrowserId;
use serde::{Deserialize, Serialize};

/// One notification from the controller to the shell, as a value.
///
/// Serializes as `{"type": "...", "data": {...}}` so a shell can forward
/// the queue over an IPC bridge unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum UiEvent {
    /// Active tab's top-level URL changed.
    UrlChanged { url: String },
    /// Active tab's back/forward availability.
    NavigationStateChanged {
        can_go_back: bool,
        can_go_forward: bool,
    },
    /// Active tab started or stopped loading.
    LoadingChanged { is_loading: bool },
    TabCreated { browser_id: BrowserId, url: String },
    TabTitleChanged { browser_id: BrowserId, title: String },
    TabFaviconChanged {
        browser_id: BrowserId,
        favicon_url: String,
    },
    TabClosed { browser_id: BrowserId },
    ActiveTabChanged { browser_id: BrowserId },
    /// Loading state for any tab, active or not.
    TabLoadingChanged {
        browser_id: BrowserId,
        is_loading: bool,
    },
    /// The shell should open `url` in a new tab.
    OpenLinkInNewTab { url: String },
}

impl UiEvent {
    /// Tab this event is about, if it names one.
    pub fn browser_id(&self) -> Option<BrowserId> {
        match self {
            UiEvent::TabCreated { browser_id, .. }
            | UiEvent::TabTitleChanged { browser_id, .. }
            | UiEvent::TabFaviconChanged { browser_id, .. }
            | UiEvent::TabClosed { browser_id }
            | UiEvent::ActiveTabChanged { browser_id }
            | UiEvent::TabLoadingChanged { browser_id, .. } => Some(*browser_id),
            UiEvent::UrlChanged { .. }
            | UiEvent::NavigationStateChanged { .. }
            | UiEvent::LoadingChanged { .. }
            | UiEvent::OpenLinkInNewTab { .. } => None,
        }
    }

    /// True for the toolbar updates that only ever describe the active tab.
    pub fn is_toolbar_update(&self) -> bool {
        matches!(
            self,
            UiEvent::UrlChanged { .. }
                | UiEvent::NavigationStateChanged { .. }
                | UiEvent::LoadingChanged { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_adjacently_tagged() {
        let event = UiEvent::TabCreated {
            browser_id: BrowserId(1),
            url: "about:blank".into(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "tab_created");
        assert_eq!(json["data"]["browser_id"], 1);
        assert_eq!(json["data"]["url"], "about:blank");
    }

    #[test]
    fn deserializes_from_shell_json() {
        let event: UiEvent =
            serde_json::from_str(r#"{"type":"tab_closed","data":{"browser_id":4}}"#).unwrap();
        assert_eq!(
            event,
            UiEvent::TabClosed {
                browser_id: BrowserId(4)
            }
        );
    }

    #[test]
    fn browser_id_only_for_tab_events() {
        let closed = UiEvent::TabClosed {
            browser_id: BrowserId(2),
        };
        assert_eq!(closed.browser_id(), Some(BrowserId(2)));

        let url = UiEvent::UrlChanged {
            url: "https://a".into(),
        };
        assert_eq!(url.browser_id(), None);
        assert!(url.is_toolbar_update());
        assert!(!closed.is_toolbar_update());
    }
}
