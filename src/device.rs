use std::rc::Rc;

// A device or sensor shown in the left-hand list
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct DeviceEntry {
    pub name: Rc<String>, // Display name, shared with the status panel
}

impl DeviceEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Rc::new(name.into()),
        }
    }
}

// How the device is displayed in the list
impl std::fmt::Display for DeviceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

pub const PLACEHOLDER_TEMPERATURE: &str = "- °C";
pub const PLACEHOLDER_PRESSURE: &str = "- bar";
pub const PLACEHOLDER_STATUS: &str = "Unknown";

/// Values shown in the "Current Status" panel for the selected device.
///
/// These are display strings only; no measurement is ever taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceReading {
    pub temperature: String,
    pub pressure: String,
    pub status: String,
}

impl Default for DeviceReading {
    fn default() -> Self {
        Self {
            temperature: PLACEHOLDER_TEMPERATURE.to_string(),
            pressure: PLACEHOLDER_PRESSURE.to_string(),
            status: PLACEHOLDER_STATUS.to_string(),
        }
    }
}

impl DeviceReading {
    /// Fixed values applied whenever a device is selected.
    pub fn sample() -> Self {
        Self {
            temperature: "72.5 °C".to_string(),
            pressure: "3.2 bar".to_string(),
            status: "Normal".to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        *self == Self::default()
    }
}
