//! # Warden Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/           # Cross-crate flows
//!     ├── token_flows.rs     # Randomizer wiring, config, concurrency
//!     └── exception_flows.rs # Security exceptions raised from randomizer faults
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p wd-tests
//! cargo test -p wd-tests integration::token_flows
//! ```

#![allow(dead_code)]

pub mod integration;
