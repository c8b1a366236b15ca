use std::collections::HashMap;

use bro_common::BrowserId;
use tracing::{debug, warn};

use crate::engine::BrowserRef;

/// Live sessions in creation order, with the active tab.
///
/// `order` and `sessions` always hold the same ids, and `active` is `None`
/// exactly when both are empty. The map owns the only handle the registry
/// keeps; `order` holds ids.
#[derive(Default)]
pub struct SessionRegistry {
    order: Vec<BrowserId>,
    sessions: HashMap<BrowserId, BrowserRef>,
    active: Option<BrowserId>,
    closing: bool,
}

/// What [`SessionRegistry::remove`] took out.
pub struct Removed {
    pub browser: BrowserRef,
    pub was_active: bool,
    /// The active id after removal.
    pub active: Option<BrowserId>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new session and make it active. A duplicate id is ignored
    /// and `false` returned.
    pub fn insert(&mut self, browser: BrowserRef) -> bool {
        let id = browser.identifier();
        if self.sessions.contains_key(&id) {
            warn!(browser_id = %id, "session already registered, ignoring");
            return false;
        }

        self.order.push(id);
        self.sessions.insert(id, browser);
        self.active = Some(id);
        debug!(browser_id = %id, count = self.order.len(), "session registered");
        true
    }

    /// Remove a session. When it was active, the first remaining session
    /// takes over.
    pub fn remove(&mut self, id: BrowserId) -> Option<Removed> {
        let browser = self.sessions.remove(&id)?;
        self.order.retain(|other| *other != id);

        let was_active = self.active == Some(id);
        if was_active {
            self.active = self.order.first().copied();
        }

        debug!(browser_id = %id, count = self.order.len(), "session removed");
        Some(Removed {
            browser,
            was_active,
            active: self.active,
        })
    }

    pub fn lookup(&self, id: BrowserId) -> Option<BrowserRef> {
        self.sessions.get(&id).cloned()
    }

    pub fn contains(&self, id: BrowserId) -> bool {
        self.sessions.contains_key(&id)
    }

    pub fn active_id(&self) -> Option<BrowserId> {
        self.active
    }

    /// The active session, else the first one.
    pub fn active_handle(&self) -> Option<BrowserRef> {
        self.active
            .and_then(|id| self.lookup(id))
            .or_else(|| self.first())
    }

    /// Make `id` active. Returns whether the active id changed; unknown ids
    /// and the current active id change nothing.
    pub fn set_active(&mut self, id: BrowserId) -> bool {
        if self.active == Some(id) || !self.contains(id) {
            return false;
        }
        self.active = Some(id);
        true
    }

    pub fn first(&self) -> Option<BrowserRef> {
        self.order.first().and_then(|id| self.lookup(*id))
    }

    /// Ids in creation order.
    pub fn ids(&self) -> &[BrowserId] {
        &self.order
    }

    /// Snapshot of every handle in creation order.
    pub fn handles(&self) -> Vec<BrowserRef> {
        self.order
            .iter()
            .filter_map(|id| self.sessions.get(id).cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn is_closing(&self) -> bool {
        self.closing
    }

    pub fn mark_closing(&mut self) {
        self.closing = true;
    }
}
