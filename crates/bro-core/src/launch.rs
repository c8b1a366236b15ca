//! Engine pre-initialization: launch switches and process-level callbacks.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use crate::controller::SessionController;
use crate::engine::{App, BrowserProcessHandler, Client, CommandLine, TaskRunner};

/// One command-line switch, with an optional value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Switch {
    pub name: &'static str,
    pub value: Option<&'static str>,
}

impl Switch {
    const fn flag(name: &'static str) -> Self {
        Self { name, value: None }
    }

    const fn with_value(name: &'static str, value: &'static str) -> Self {
        Self {
            name,
            value: Some(value),
        }
    }

    /// `--name` or `--name=value`.
    pub fn to_arg(&self) -> String {
        self.to_string()
    }

    pub fn apply(&self, command_line: &mut dyn CommandLine) {
        match self.value {
            Some(value) => command_line.append_switch_with_value(self.name, value),
            None => command_line.append_switch(self.name),
        }
    }
}

impl fmt::Display for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(value) => write!(f, "--{}={}", self.name, value),
            None => write!(f, "--{}", self.name),
        }
    }
}

#[cfg(target_os = "macos")]
const ANGLE_BACKEND: &str = "metal";
#[cfg(target_os = "windows")]
const ANGLE_BACKEND: &str = "d3d11";
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const ANGLE_BACKEND: &str = "gl";

/// Switches appended before engine initialization, in order.
pub fn launch_switches() -> Vec<Switch> {
    let mut switches = vec![
        Switch::flag("enable-gpu"),
        Switch::flag("enable-gpu-rasterization"),
        Switch::flag("enable-webgl"),
        Switch::flag("enable-webgl2-compute-context"),
        Switch::flag("enable-unsafe-webgpu"),
        Switch::with_value("enable-features", "Vulkan,WebGPU"),
        Switch::with_value("use-angle", ANGLE_BACKEND),
        Switch::flag("enable-zero-copy"),
        Switch::flag("ignore-gpu-blocklist"),
        Switch::flag("disable-gpu-driver-bug-workarounds"),
        Switch::flag("enable-accelerated-2d-canvas"),
    ];

    // Keeps the engine away from the system keychain prompt.
    if cfg!(target_os = "macos") {
        switches.push(Switch::flag("use-mock-keychain"));
    }

    switches
}

/// Append every launch switch to `command_line`.
pub fn apply_launch_switches(command_line: &mut dyn CommandLine) {
    for switch in launch_switches() {
        switch.apply(command_line);
    }
}

/// A plain [`CommandLine`] that records switches as arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwitchList {
    args: Vec<String>,
}

impl SwitchList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn contains(&self, arg: &str) -> bool {
        self.args.iter().any(|a| a == arg)
    }
}

impl CommandLine for SwitchList {
    fn append_switch(&mut self, name: &str) {
        self.args.push(format!("--{name}"));
    }

    fn append_switch_with_value(&mut self, name: &str, value: &str) {
        self.args.push(format!("--{name}={value}"));
    }
}

// =============================================================================
// APPLICATION CALLBACKS
// =============================================================================

/// Process-level engine callbacks.
///
/// Browser windows are never created here: the shell creates them once its
/// own UI exists, through the controller's client.
pub struct BroApp {
    runner: Arc<dyn TaskRunner>,
}

impl BroApp {
    pub fn new(runner: Arc<dyn TaskRunner>) -> Arc<Self> {
        Arc::new(Self { runner })
    }
}

impl App for BroApp {
    fn on_before_command_line_processing(
        &self,
        process_type: &str,
        command_line: &mut dyn CommandLine,
    ) {
        debug!(process_type = %process_type, "applying launch switches");
        apply_launch_switches(command_line);
    }

    fn browser_process_handler(self: Arc<Self>) -> Option<Arc<dyn BrowserProcessHandler>> {
        Some(self)
    }
}

impl BrowserProcessHandler for BroApp {
    fn on_context_initialized(&self) {
        assert!(
            self.runner.currently_on_ui(),
            "on_context_initialized called off the UI thread"
        );
        info!("engine context initialized");
    }

    fn default_client(&self) -> Option<Arc<dyn Client>> {
        SessionController::instance().map(|controller| controller as Arc<dyn Client>)
    }
}
