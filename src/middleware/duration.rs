//! Human-readable elapsed times.

use std::time::Duration;

/// Formats an elapsed time for a breadcrumb.
///
/// | Elapsed | Format | Example |
/// |---|---|---|
/// | `< 1ms` | whole microseconds | `500μs` |
/// | `< 1s` | milliseconds, up to 2 decimals | `12.5ms` |
/// | otherwise | seconds, up to 2 decimals | `1.5s` |
///
/// The brackets are half-open: exactly `1ms` prints as `1ms`, exactly `1s` as `1s`.
pub fn format_duration(elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if secs < 0.001 {
        format!("{}μs", (secs * 1_000_000.0).round())
    } else if secs < 1.0 {
        format!("{}ms", round2(secs * 1_000.0))
    } else {
        format!("{}s", round2(secs))
    }
}

// f64's Display drops trailing zeros: 12.50 prints as 12.5, 1.00 as 1.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
