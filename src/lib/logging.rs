//! Logging helpers for formatted output.
//!
//! Consistent formatting of counts, durations and buffer occupancy for the
//! command-line tools.

use std::time::{Duration, Instant};

/// Formats a count with thousands separators.
///
/// # Examples
///
/// ```
/// use fgranges_lib::logging::format_count;
///
/// assert_eq!(format_count(0), "0");
/// assert_eq!(format_count(1_234_567), "1,234,567");
/// ```
#[must_use]
pub fn format_count(n: u64) -> String {
    let s = n.to_string();
    let bytes = s.as_bytes();

    bytes
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",")
}

/// Formats a percentage with specified decimal places.
///
/// # Examples
///
/// ```
/// use fgranges_lib::logging::format_percent;
///
/// assert_eq!(format_percent(0.9543, 2), "95.43%");
/// assert_eq!(format_percent(1.0, 0), "100%");
/// ```
#[must_use]
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.decimals$}%", value * 100.0, decimals = decimals)
}

/// Formats a duration in human-readable form (e.g. "2m 15s", "1h 30m", "45s").
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs < 60 {
        format!("{secs}s")
    } else if secs < 3600 {
        let mins = secs / 60;
        let remaining_secs = secs % 60;
        if remaining_secs == 0 { format!("{mins}m") } else { format!("{mins}m {remaining_secs}s") }
    } else {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        if mins == 0 { format!("{hours}h") } else { format!("{hours}h {mins}m") }
    }
}

/// Logs the occupancy of a buffer at debug level.
///
/// # Arguments
///
/// * `label` - What the buffer holds (e.g. "Ranges")
/// * `len` - Live element count
/// * `capacity` - Allocated element count
pub fn log_buffer_summary(label: &str, len: usize, capacity: usize) {
    let used = if capacity == 0 { 1.0 } else { len as f64 / capacity as f64 };
    log::debug!(
        "{label}: {} of {} slots used ({})",
        format_count(len as u64),
        format_count(capacity as u64),
        format_percent(used, 1)
    );
}

/// Operation timing helper.
///
/// # Examples
///
/// ```no_run
/// use fgranges_lib::logging::OperationTimer;
///
/// let timer = OperationTimer::new("Ordering values");
///
/// // ... do work ...
///
/// timer.log_completion(10_000);
/// ```
pub struct OperationTimer {
    operation: String,
    start_time: Instant,
}

impl OperationTimer {
    /// Creates a new operation timer and logs the start.
    #[must_use]
    pub fn new(operation: &str) -> Self {
        log::info!("{operation} ...");
        Self { operation: operation.to_string(), start_time: Instant::now() }
    }

    /// Logs the completion with the number of items processed.
    pub fn log_completion(&self, count: u64) {
        log::info!(
            "{} completed: {} items in {}",
            self.operation,
            format_count(count),
            format_duration(self.start_time.elapsed())
        );
    }
}
