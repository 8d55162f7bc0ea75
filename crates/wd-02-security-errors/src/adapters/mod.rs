//! # Adapters Layer
//!
//! `IntrusionDetector` implementations.
//!
//! | Adapter | Use |
//! |---------|-----|
//! | `RecordingIntrusionDetector` | tests, audit trails kept in memory |
//! | `LoggingIntrusionDetector` | production, writes to the `security` target |
//! | `FanOutIntrusionDetector` | forward one report to several detectors |

mod fan_out;
mod logging;
mod recording;

pub use fan_out::FanOutIntrusionDetector;
pub use logging::LoggingIntrusionDetector;
pub use recording::{RecordedException, RecordingIntrusionDetector};
