use eframe::egui::Color32;

const ATTENTION_COLOR: Color32 = Color32::from_rgb(255, 0, 0); // Red while disconnected
const POSITIVE_COLOR: Color32 = Color32::from_rgb(0, 160, 0); // Green once connected

// Connection state shown in the header indicator.
// Only the Connect action changes it and it never reverts.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connected,
}

impl ConnectionStatus {
    pub fn is_connected(self) -> bool {
        self == ConnectionStatus::Connected
    }

    pub fn color(self) -> Color32 {
        match self {
            ConnectionStatus::Disconnected => ATTENTION_COLOR,
            ConnectionStatus::Connected => POSITIVE_COLOR,
        }
    }
}

// How the status is displayed in the header
impl std::fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConnectionStatus::Disconnected => write!(f, "Status: Disconnected"),
            ConnectionStatus::Connected => write!(f, "Status: Connected"),
        }
    }
}
