//! Mock engine shared by the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use bro_common::BrowserId;
use bro_core::engine::{Browser, BrowserRef, Frame, LifeSpanHandler, MenuModel};
use bro_core::{ControllerBuilder, EventQueueSink, PlatformWindow, SessionController, UiTaskQueue};
use parking_lot::Mutex;

// =============================================================================
// FRAMES AND BROWSERS
// =============================================================================

pub struct MockFrame {
    main: bool,
    url: Mutex<String>,
    loaded: Mutex<Vec<String>>,
}

impl MockFrame {
    pub fn new(main: bool, url: &str) -> Arc<Self> {
        Arc::new(Self {
            main,
            url: Mutex::new(url.to_string()),
            loaded: Mutex::new(Vec::new()),
        })
    }

    pub fn subframe() -> Arc<Self> {
        Self::new(false, "about:blank")
    }

    /// Every URL handed to `load_url`, oldest first.
    pub fn loaded(&self) -> Vec<String> {
        self.loaded.lock().clone()
    }
}

impl Frame for MockFrame {
    fn is_main(&self) -> bool {
        self.main
    }

    fn url(&self) -> String {
        self.url.lock().clone()
    }

    fn load_url(&self, url: &str) {
        self.loaded.lock().push(url.to_string());
        *self.url.lock() = url.to_string();
    }
}

pub struct MockBrowser {
    id: BrowserId,
    frame: Arc<MockFrame>,
    can_back: AtomicBool,
    can_forward: AtomicBool,
    pub close_calls: AtomicUsize,
    pub forced_closes: AtomicUsize,
    pub back_calls: AtomicUsize,
    pub forward_calls: AtomicUsize,
    pub reload_calls: AtomicUsize,
}

impl MockBrowser {
    pub fn new(id: i32, url: &str) -> Arc<Self> {
        Arc::new(Self {
            id: BrowserId(id),
            frame: MockFrame::new(true, url),
            can_back: AtomicBool::new(false),
            can_forward: AtomicBool::new(false),
            close_calls: AtomicUsize::new(0),
            forced_closes: AtomicUsize::new(0),
            back_calls: AtomicUsize::new(0),
            forward_calls: AtomicUsize::new(0),
            reload_calls: AtomicUsize::new(0),
        })
    }

    pub fn frame(&self) -> Arc<MockFrame> {
        Arc::clone(&self.frame)
    }

    pub fn set_history(&self, can_back: bool, can_forward: bool) {
        self.can_back.store(can_back, Ordering::SeqCst);
        self.can_forward.store(can_forward, Ordering::SeqCst);
    }

    pub fn closes(&self) -> usize {
        self.close_calls.load(Ordering::SeqCst)
    }

    pub fn handle(self: &Arc<Self>) -> BrowserRef {
        Arc::clone(self) as BrowserRef
    }
}

impl Browser for MockBrowser {
    fn identifier(&self) -> BrowserId {
        self.id
    }

    fn main_frame(&self) -> Arc<dyn Frame> {
        Arc::clone(&self.frame) as Arc<dyn Frame>
    }

    fn can_go_back(&self) -> bool {
        self.can_back.load(Ordering::SeqCst)
    }

    fn can_go_forward(&self) -> bool {
        self.can_forward.load(Ordering::SeqCst)
    }

    fn go_back(&self) {
        self.back_calls.fetch_add(1, Ordering::SeqCst);
    }

    fn go_forward(&self) {
        self.forward_calls.fetch_add(1, Ordering::SeqCst);
    }

    fn reload(&self) {
        self.reload_calls.fetch_add(1, Ordering::SeqCst);
    }

    fn close(&self, force: bool) {
        self.close_calls.fetch_add(1, Ordering::SeqCst);
        if force {
            self.forced_closes.fetch_add(1, Ordering::SeqCst);
        }
    }
}

// =============================================================================
// PLATFORM AND MENU
// =============================================================================

#[derive(Default)]
pub struct RecordingPlatform {
    pub titles: Mutex<Vec<(BrowserId, String)>>,
    pub shown: Mutex<Vec<BrowserId>>,
}

impl PlatformWindow for RecordingPlatform {
    fn title_changed(&self, browser: &dyn Browser, title: &str) {
        self.titles
            .lock()
            .push((browser.identifier(), title.to_string()));
    }

    fn show_window(&self, browser: &dyn Browser) {
        self.shown.lock().push(browser.identifier());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Item(i32, String),
    Separator,
}

#[derive(Default)]
pub struct VecMenuModel {
    pub rows: Vec<Row>,
}

impl VecMenuModel {
    /// Fill with what the engine would have shown by default.
    pub fn add_default_rows(&mut self) {
        self.add_item(100, "Back");
        self.add_separator();
        self.add_item(131, "Print...");
    }
}

impl MenuModel for VecMenuModel {
    fn clear(&mut self) {
        self.rows.clear();
    }

    fn add_item(&mut self, command_id: i32, label: &str) {
        self.rows.push(Row::Item(command_id, label.to_string()));
    }

    fn add_separator(&mut self) {
        self.rows.push(Row::Separator);
    }
}

// =============================================================================
// HARNESS
// =============================================================================

/// A controller wired to an event-queue sink and a UI queue bound to the
/// test thread.
pub struct Harness {
    pub queue: Arc<UiTaskQueue>,
    pub sink: EventQueueSink,
    pub platform: Arc<RecordingPlatform>,
    pub controller: Arc<SessionController>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_native_window(false)
    }

    pub fn with_native_window(native: bool) -> Self {
        let queue = Arc::new(UiTaskQueue::for_current_thread());
        let sink = EventQueueSink::new();
        let platform = Arc::new(RecordingPlatform::default());
        let controller = ControllerBuilder::new(Arc::new(sink.clone()), queue.clone())
            .native_window(native)
            .platform(platform.clone())
            .build();
        Self {
            queue,
            sink,
            platform,
            controller,
        }
    }

    /// Announce a new browser the way the engine does.
    pub fn create(&self, id: i32, url: &str) -> Arc<MockBrowser> {
        let browser = MockBrowser::new(id, url);
        self.controller.on_after_created(&browser.handle());
        browser
    }

    /// Run the engine's close handshake for `browser`.
    pub fn close(&self, browser: &Arc<MockBrowser>) {
        let handle = browser.handle();
        assert!(!self.controller.do_close(&handle), "close must not be vetoed");
        self.controller.on_before_close(&handle);
    }
}
