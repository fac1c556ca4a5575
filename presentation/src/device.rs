//! Terminal-based device classification

use compass_application::ports::device::DeviceClassifier;
use compass_domain::DeviceClass;

/// Terminals narrower than this are reported as mobile
pub const MOBILE_MAX_COLUMNS: u16 = 80;

/// Classifies the client by the current terminal width
pub struct TerminalDeviceClassifier;

impl TerminalDeviceClassifier {
    pub fn classify_width(columns: u16) -> DeviceClass {
        if columns < MOBILE_MAX_COLUMNS {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }
}

impl DeviceClassifier for TerminalDeviceClassifier {
    fn classify(&self) -> DeviceClass {
        match crossterm::terminal::size() {
            Ok((columns, _)) => Self::classify_width(columns),
            // Not a terminal (piped output)
            Err(_) => DeviceClass::Desktop,
        }
    }
}

/// Current terminal width in columns, if stdout is a terminal
pub fn terminal_width() -> Option<usize> {
    crossterm::terminal::size()
        .ok()
        .map(|(columns, _)| columns as usize)
        .filter(|&w| w > 0)
}
