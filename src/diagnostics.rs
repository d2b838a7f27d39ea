use tracing::{error, info, warn};

/// Where the conversion reports what happened to each record.
///
/// The rendering code only ever sees this trait; sinks and formatting are
/// configured once in `main`.
pub trait Diagnostics {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards to the global `tracing` subscriber.
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn info(&self, message: &str) {
        info!("{}", message);
    }

    fn warn(&self, message: &str) {
        warn!("{}", message);
    }

    fn error(&self, message: &str) {
        error!("{}", message);
    }
}
