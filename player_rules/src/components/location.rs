//! Location tracking.

/// Location name used before anything sets one.
pub const UNKNOWN_LOCATION: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationTracker {
    current: String,
}

impl Default for LocationTracker {
    fn default() -> Self {
        Self::new(UNKNOWN_LOCATION)
    }
}

impl LocationTracker {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            current: location.into(),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn set(&mut self, location: impl Into<String>) {
        self.current = location.into();
        tracing::debug!(location = %self.current, "location changed");
    }
}
