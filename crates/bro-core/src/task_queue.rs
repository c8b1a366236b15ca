//! In-process UI task queue.
//!
//! A [`TaskRunner`] for shells that own their message loop: the thread that
//! creates the queue becomes the UI thread, any thread may post, and the UI
//! thread drains with [`UiTaskQueue::run_pending`] or blocks in
//! [`UiTaskQueue::run`] until a quit is requested.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread::{self, ThreadId};

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::engine::{TaskRunner, UiTask};

pub struct UiTaskQueue {
    ui_thread: ThreadId,
    sender: mpsc::UnboundedSender<UiTask>,
    receiver: Mutex<mpsc::UnboundedReceiver<UiTask>>,
    quit_pending: AtomicBool,
    quit_count: AtomicUsize,
}

impl UiTaskQueue {
    /// Create a queue whose UI thread is the calling thread.
    pub fn for_current_thread() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            ui_thread: thread::current().id(),
            sender,
            receiver: Mutex::new(receiver),
            quit_pending: AtomicBool::new(false),
            quit_count: AtomicUsize::new(0),
        }
    }

    /// Run every task posted so far, including tasks those tasks post.
    /// Returns how many ran.
    pub fn run_pending(&self) -> usize {
        self.assert_on_ui("run_pending");

        let mut ran = 0;
        loop {
            // Guard is released before the task runs so it can post again.
            let next = self.receiver.lock().try_recv();
            match next {
                Ok(task) => {
                    task();
                    ran += 1;
                }
                Err(_) => break,
            }
        }
        ran
    }

    /// Run tasks as they arrive until a quit is requested.
    pub fn run(&self) {
        self.assert_on_ui("run");
        info!("entering UI message loop");

        while !self.quit_pending.swap(false, Ordering::AcqRel) {
            let next = self.receiver.lock().blocking_recv();
            match next {
                Some(task) => task(),
                None => break,
            }
        }

        info!("UI message loop exited");
    }

    /// Total quit requests received.
    pub fn quit_count(&self) -> usize {
        self.quit_count.load(Ordering::Acquire)
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_count() > 0
    }

    fn assert_on_ui(&self, what: &str) {
        assert_eq!(
            thread::current().id(),
            self.ui_thread,
            "UiTaskQueue::{what} must be called on the UI thread"
        );
    }
}

impl TaskRunner for UiTaskQueue {
    fn currently_on_ui(&self) -> bool {
        thread::current().id() == self.ui_thread
    }

    fn post_ui_task(&self, task: UiTask) {
        // The queue holds a receiver for its whole lifetime, so send only
        // fails once the queue is being dropped.
        if self.sender.send(task).is_err() {
            debug!("UI task dropped: queue is shutting down");
        }
    }

    fn quit_message_loop(&self) {
        self.quit_count.fetch_add(1, Ordering::AcqRel);
        self.quit_pending.store(true, Ordering::Release);
        // On the UI thread `run` re-checks after the current task. Elsewhere
        // it may be blocked on an empty queue and needs a wake-up.
        if !self.currently_on_ui() && self.sender.send(Box::new(|| {})).is_err() {
            debug!("quit wake-up dropped: queue is shutting down");
        }
    }
}
