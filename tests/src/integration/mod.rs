//! # Integration Test Flows

pub mod exception_flows;
pub mod token_flows;
