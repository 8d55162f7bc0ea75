//! # Ports Layer
//!
//! - **Driven Ports (Outbound):** `IntrusionDetector`

pub mod outbound;

pub use outbound::IntrusionDetector;
