//! Service Layer

pub mod reporter;

pub use reporter::ExceptionReporter;
