//! Device classification port
//!
//! The save call reports a coarse device class. How it is inferred (viewport,
//! terminal size, user agent) is an adapter concern.

use compass_domain::DeviceClass;

/// Infers the coarse device class of the current client
pub trait DeviceClassifier: Send + Sync {
    fn classify(&self) -> DeviceClass;
}

/// Classifier that always reports the same class (config overrides, tests)
pub struct FixedDevice(pub DeviceClass);

impl DeviceClassifier for FixedDevice {
    fn classify(&self) -> DeviceClass {
        self.0
    }
}
