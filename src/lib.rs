// Export modules for testing
pub mod config;
pub mod device;
pub mod diagnostics;
pub mod event_log;
pub mod status;
pub mod trigger;
pub mod ui;

// Re-export main struct and types for testing
pub use crate::config::DashboardConfig;
pub use crate::device::{DeviceEntry, DeviceReading};
pub use crate::diagnostics::{DiagnosticSink, LogSink};
pub use crate::event_log::EventLog;
pub use crate::status::ConnectionStatus;
pub use crate::trigger::Trigger;

// Constants
pub const PROGRAM_TITLE: &str = "Industrial Monitoring Dashboard (Sample)";
pub const INITIAL_WIDTH: f32 = 1000.0;
pub const INITIAL_HEIGHT: f32 = 600.0;

// Args struct for command line parsing
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {}

// The dashboard shell: owns every piece of display state
pub struct Dashboard {
    // Layout content
    config: DashboardConfig,

    // Display state
    selected: Option<usize>,           // Device shown in the status panel
    list_highlight: Option<usize>,     // Row currently highlighted in the list widget
    reading: DeviceReading,            // Temperature / pressure / status fields
    connection: ConnectionStatus,      // Header indicator
    event_log: EventLog,               // On-screen history

    // Where diagnostic records go
    sink: Box<dyn DiagnosticSink>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self::with_config(DashboardConfig::default())
    }

    pub fn with_config(config: DashboardConfig) -> Self {
        Self::with_sink(config, Box::new(LogSink))
    }

    pub fn with_sink(config: DashboardConfig, sink: Box<dyn DiagnosticSink>) -> Self {
        log::debug!("Building dashboard with {} devices.", config.devices.len());
        Self {
            config,
            selected: None,
            list_highlight: None,
            reading: DeviceReading::default(),
            connection: ConnectionStatus::default(),
            event_log: EventLog::new(),
            sink,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn devices(&self) -> &[DeviceEntry] {
        &self.config.devices
    }

    pub fn selected_device(&self) -> Option<&DeviceEntry> {
        self.selected.and_then(|i| self.config.devices.get(i))
    }

    // Text of the "Selected: ..." label
    pub fn selected_label(&self) -> String {
        match self.selected_device() {
            Some(device) => format!("Selected: {}", device),
            None => "Selected: (none)".to_string(),
        }
    }

    pub fn list_highlight(&self) -> Option<usize> {
        self.list_highlight
    }

    pub fn reading(&self) -> &DeviceReading {
        &self.reading
    }

    pub fn connection_status(&self) -> ConnectionStatus {
        self.connection
    }

    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    pub(crate) fn event_log_mut(&mut self) -> &mut EventLog {
        &mut self.event_log
    }

    /// Appends a line to the on-screen event log.
    ///
    /// Prior content is never touched; the view scrolls to the new line on
    /// the next frame and stays read-only to the user.
    pub fn append_log(&mut self, message: &str) {
        self.event_log.append(message);
    }

    // Mirror a log line to the diagnostic stream
    fn record(&mut self, message: &str) {
        self.append_log(message);
        self.sink.info(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_label_defaults_to_none() {
        let dashboard = Dashboard::new();
        assert_eq!(dashboard.selected_label(), "Selected: (none)");
        assert!(dashboard.selected_device().is_none());
        assert_eq!(dashboard.list_highlight(), None);
    }

    #[test]
    fn append_log_renders_terminated_line() {
        let mut dashboard = Dashboard::new();
        dashboard.append_log("manual line");
        assert_eq!(dashboard.event_log().text(), "manual line\n");
    }
}
