//! Detector composition.

use std::fmt;
use std::sync::Arc;

use crate::domain::SecurityException;
use crate::ports::IntrusionDetector;

/// Forwards each report to every inner detector, in insertion order.
#[derive(Default, Clone)]
pub struct FanOutIntrusionDetector {
    detectors: Vec<Arc<dyn IntrusionDetector>>,
}

impl FanOutIntrusionDetector {
    pub fn new(detectors: Vec<Arc<dyn IntrusionDetector>>) -> Self {
        Self { detectors }
    }

    /// Append a detector.
    #[must_use]
    pub fn with(mut self, detector: Arc<dyn IntrusionDetector>) -> Self {
        self.detectors.push(detector);
        self
    }

    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }
}

impl fmt::Debug for FanOutIntrusionDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FanOutIntrusionDetector")
            .field("detectors", &self.detectors.len())
            .finish()
    }
}

impl IntrusionDetector for FanOutIntrusionDetector {
    fn record_exception(&self, exception: &SecurityException) {
        for detector in &self.detectors {
            detector.record_exception(exception);
        }
    }
}
