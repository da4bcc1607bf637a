//! Span helpers for pagination work.

use tracing::{info_span, Span};

/// Span covering the derivation of one request's pagination state.
pub fn pagination_span(total_records: u64, current_page: u64) -> Span {
    info_span!("pagination", total = total_records, page = current_page)
}

/// Span covering one render pass.
pub fn render_span(renderer: &str) -> Span {
    info_span!("render", renderer = %renderer)
}

/// Timing utility for operations.
pub struct Timer {
    start: std::time::Instant,
    operation: &'static str,
}

impl Timer {
    /// Start a new timer.
    pub fn start(operation: &'static str) -> Self {
        Self {
            start: std::time::Instant::now(),
            operation,
        }
    }

    /// Complete the timer and record duration.
    pub fn finish(self) -> std::time::Duration {
        let duration = self.start.elapsed();
        tracing::debug!(
            operation = %self.operation,
            duration_us = %duration.as_micros(),
            "operation completed"
        );
        duration
    }
}

/// Macro for timing a block of code.
#[macro_export]
macro_rules! timed {
    ($name:expr, $body:expr) => {{
        let _timer = $crate::spans::Timer::start($name);
        let result = $body;
        _timer.finish();
        result
    }};
}
