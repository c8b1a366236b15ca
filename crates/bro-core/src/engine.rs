//! Engine-facing interface.
//!
//! The rendering engine is a black box. These traits describe the slice of
//! it the controller talks to: session handles, frames, the context menu
//! model, the command line seen at pre-initialization, and the UI-thread
//! task runner. The controller in turn implements the callback roles
//! (`DisplayHandler`, `LifeSpanHandler`, `LoadHandler`,
//! `ContextMenuHandler`) the engine invokes.

use std::fmt;
use std::sync::Arc;

use bitflags::bitflags;
use bro_common::BrowserId;

// =============================================================================
// THREADING
// =============================================================================

/// A unit of work posted to the UI thread.
pub type UiTask = Box<dyn FnOnce() + Send + 'static>;

/// The engine's UI-thread task runner and message loop.
pub trait TaskRunner: Send + Sync {
    /// True when the caller is on the designated UI thread.
    fn currently_on_ui(&self) -> bool;

    /// Queue `task` to run on the UI thread. Tasks from one caller run in
    /// post order.
    fn post_ui_task(&self, task: UiTask);

    /// Ask the application message loop to exit.
    fn quit_message_loop(&self);
}

// =============================================================================
// SESSIONS
// =============================================================================

/// A frame inside a browser. Every browser has one main frame.
pub trait Frame: Send + Sync {
    fn is_main(&self) -> bool;

    fn url(&self) -> String;

    fn load_url(&self, url: &str);
}

/// Handle to one live renderer session (a tab).
pub trait Browser: Send + Sync {
    fn identifier(&self) -> BrowserId;

    fn main_frame(&self) -> Arc<dyn Frame>;

    fn can_go_back(&self) -> bool;

    fn can_go_forward(&self) -> bool;

    fn go_back(&self);

    fn go_forward(&self);

    fn reload(&self);

    /// Request that the session close. The engine answers with `do_close`
    /// and, unless vetoed, `on_before_close`.
    fn close(&self, force: bool);
}

/// Shared, reference-counted session handle.
pub type BrowserRef = Arc<dyn Browser>;

/// Engine network error code. Negative values are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(pub i32);

impl ErrorCode {
    /// The load was cancelled (user abort, or the response became a download).
    pub const ABORTED: ErrorCode = ErrorCode(-3);

    pub fn is_aborted(self) -> bool {
        self == Self::ABORTED
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// CONTEXT MENUS
// =============================================================================

bitflags! {
    /// What was under the pointer when the context menu was requested.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ContextMenuTypeFlags: u32 {
        const PAGE = 1 << 0;
        const FRAME = 1 << 1;
        const LINK = 1 << 2;
        const MEDIA = 1 << 3;
        const SELECTION = 1 << 4;
        const EDITABLE = 1 << 5;
    }
}

/// Kind of media node the context menu was invoked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaType {
    #[default]
    None,
    Image,
    Video,
    Audio,
    Canvas,
    File,
    Plugin,
}

/// Context descriptor the engine supplies with a context-menu request.
#[derive(Debug, Clone, Default)]
pub struct ContextMenuParams {
    pub type_flags: ContextMenuTypeFlags,
    pub media_type: MediaType,
    pub link_url: String,
}

/// The engine-owned menu the controller rebuilds before display.
pub trait MenuModel {
    fn clear(&mut self);

    fn add_item(&mut self, command_id: i32, label: &str);

    fn add_separator(&mut self);
}

// =============================================================================
// LAUNCH
// =============================================================================

/// Command line the engine hands out before it initializes.
pub trait CommandLine {
    fn append_switch(&mut self, name: &str);

    fn append_switch_with_value(&mut self, name: &str, value: &str);
}

// =============================================================================
// CALLBACK ROLES
// =============================================================================

pub trait DisplayHandler: Send + Sync {
    fn on_title_change(&self, browser: &BrowserRef, title: &str);

    fn on_address_change(&self, browser: &BrowserRef, frame: &dyn Frame, url: &str);

    fn on_favicon_url_change(&self, browser: &BrowserRef, icon_urls: &[String]);
}

pub trait LifeSpanHandler: Send + Sync {
    fn on_after_created(&self, browser: &BrowserRef);

    /// Return `true` to veto the close.
    fn do_close(&self, browser: &BrowserRef) -> bool;

    fn on_before_close(&self, browser: &BrowserRef);
}

pub trait LoadHandler: Send + Sync {
    fn on_loading_state_change(
        &self,
        browser: &BrowserRef,
        is_loading: bool,
        can_go_back: bool,
        can_go_forward: bool,
    );

    fn on_load_error(
        &self,
        browser: &BrowserRef,
        frame: &dyn Frame,
        error_code: ErrorCode,
        error_text: &str,
        failed_url: &str,
    );
}

pub trait ContextMenuHandler: Send + Sync {
    fn on_before_context_menu(
        &self,
        browser: &BrowserRef,
        frame: &dyn Frame,
        params: &ContextMenuParams,
        model: &mut dyn MenuModel,
    );

    /// Return `true` if the command was handled; `false` lets the engine's
    /// default handling run.
    fn on_context_menu_command(
        &self,
        browser: &BrowserRef,
        frame: &dyn Frame,
        params: &ContextMenuParams,
        command_id: i32,
    ) -> bool;
}

/// Per-browser client: the engine asks it for each callback role.
pub trait Client: Send + Sync {
    fn display_handler(self: Arc<Self>) -> Option<Arc<dyn DisplayHandler>> {
        None
    }

    fn life_span_handler(self: Arc<Self>) -> Option<Arc<dyn LifeSpanHandler>> {
        None
    }

    fn load_handler(self: Arc<Self>) -> Option<Arc<dyn LoadHandler>> {
        None
    }

    fn context_menu_handler(self: Arc<Self>) -> Option<Arc<dyn ContextMenuHandler>> {
        None
    }
}

/// Process-level callbacks, consulted once at engine startup.
pub trait App: Send + Sync {
    fn on_before_command_line_processing(
        &self,
        _process_type: &str,
        _command_line: &mut dyn CommandLine,
    ) {
    }

    fn browser_process_handler(self: Arc<Self>) -> Option<Arc<dyn BrowserProcessHandler>> {
        None
    }
}

pub trait BrowserProcessHandler: Send + Sync {
    /// The engine's process-wide context is ready (UI thread).
    fn on_context_initialized(&self) {}

    /// Client used for browsers created without an explicit one.
    fn default_client(&self) -> Option<Arc<dyn Client>> {
        None
    }
}
