use crate::device::{DeviceEntry, DeviceReading};

// Fixed layout and content values for the dashboard.
// Nothing here is loaded from or saved to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub header_title: String,
    pub device_list_heading: String,
    pub devices: Vec<DeviceEntry>,
    pub sample_reading: DeviceReading,
    pub chart_placeholder: String,
}

// Default values shown in the sample dashboard
impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            header_title: "Industrial Monitoring Dashboard".to_string(),
            device_list_heading: "Devices / Sensors".to_string(),
            devices: [
                "Line A - Motor 1",
                "Line A - Pump 2",
                "Line B - Sensor 3",
                "Line C - Valve 4",
            ]
            .into_iter()
            .map(DeviceEntry::new)
            .collect(),
            sample_reading: DeviceReading::sample(),
            chart_placeholder: "(Chart area - trend rendering is not implemented)\n\
                This is just a sample GUI layout."
                .to_string(),
        }
    }
}

impl DashboardConfig {
    /// Replaces the sample device list, keeping every other value.
    pub fn with_devices<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.devices = names.into_iter().map(DeviceEntry::new).collect();
        self
    }
}
