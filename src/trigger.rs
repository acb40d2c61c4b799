use crate::status::ConnectionStatus;
use crate::Dashboard;

/// A user interaction the dashboard responds to.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Trigger {
    /// The device list selection changed. `None` means the list has no selection.
    DeviceSelected(Option<usize>),
    Connect,
    StartMonitoring,
    Stop,
}

impl Dashboard {
    /// Routes a trigger to its handler. Every handler runs to completion and
    /// cannot fail.
    pub fn dispatch(&mut self, trigger: Trigger) {
        log::debug!("Dispatching {:?}", trigger);
        match trigger {
            Trigger::DeviceSelected(selection) => self.on_select_device(selection),
            Trigger::Connect => self.connect(),
            Trigger::StartMonitoring => self.start_monitoring(),
            Trigger::Stop => self.stop_monitoring(),
        }
    }

    // --- Handlers ---

    fn on_select_device(&mut self, selection: Option<usize>) {
        self.list_highlight = selection;

        let Some(index) = selection else {
            return; // Empty selection leaves the status panel as it was
        };
        let Some(device) = self.config.devices.get(index) else {
            log::debug!("Ignoring selection of unknown row {}", index);
            return;
        };

        let message = format!("Selected device: {}", device);
        self.selected = Some(index);
        self.reading = self.config.sample_reading.clone();
        self.record(&message);
    }

    fn connect(&mut self) {
        self.connection = ConnectionStatus::Connected;
        self.record("Connected to devices.");
    }

    fn start_monitoring(&mut self) {
        self.record("Monitoring started.");
    }

    fn stop_monitoring(&mut self) {
        self.record("Monitoring stopped.");
    }
}
