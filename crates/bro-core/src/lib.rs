//! Browser-session controller for an embedded rendering engine.
//!
//! The engine hosts one browser per tab and reports on it through callbacks;
//! the shell draws tabs and a toolbar and sends intents. This crate sits
//! between them:
//! - [`SessionController`]: tab registry, engine callback adapter, intent router
//! - [`UiSink`]: notifications to the shell
//! - [`menu`]: context menu policy
//! - [`launch`]: engine launch switches and process-level callbacks
//! - [`UiTaskQueue`]: an in-process UI-thread task runner

pub mod controller;
pub mod engine;
pub mod error_page;
pub mod events;
pub mod launch;
pub mod menu;
pub mod platform;
pub mod sink;
pub mod task_queue;

pub use controller::{ControllerBuilder, SessionController, SessionRegistry};
pub use events::UiEvent;
pub use launch::{launch_switches, BroApp, Switch, SwitchList};
pub use menu::{MenuCommand, MenuEntry};
pub use platform::{NoopPlatform, PlatformWindow};
pub use sink::{EventQueueSink, TracingSink, UiSink};
pub use task_queue::UiTaskQueue;
