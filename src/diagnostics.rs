//! Fire-and-forget channel for recoverable persistence failures.

use std::error::Error;

pub trait Diagnostics {
    fn report(&self, message: &str, error: &dyn Error);
}

/// Sends reports to the `tracing` subscriber as warnings
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, message: &str, error: &dyn Error) {
        tracing::warn!(error = %error, "{}", message);
    }
}
