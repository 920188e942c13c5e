//! Human-readable byte sizes (KB / MB / GB tiers, binary units).

use crate::constants::{BYTES_PER_GB, BYTES_PER_KB, BYTES_PER_MB};

/// Format a byte count. Anything below 1 MB is shown in KB, below 1 GB in MB,
/// everything else in GB, always with two decimals.
#[must_use]
#[allow(clippy::cast_precision_loss, reason = "display only")]
pub fn format_size(bytes: u64) -> String {
    format_bytes(bytes as f64)
}

/// Same tiers as [`format_size`], for sizes already expressed in megabytes.
#[must_use]
pub fn format_size_mb(megabytes: f64) -> String {
    format_bytes(megabytes * BYTES_PER_MB)
}

/// Convert a byte count to megabytes.
#[must_use]
pub fn bytes_to_mb(bytes: u64) -> f64 {
    #[allow(clippy::cast_precision_loss, reason = "statistics tolerate f64 rounding")]
    let bytes = bytes as f64;
    bytes / BYTES_PER_MB
}

fn format_bytes(bytes: f64) -> String {
    let bytes = if bytes.is_finite() && bytes > 0.0 { bytes } else { 0.0 };
    if bytes < BYTES_PER_MB {
        format!("{:.2} KB", bytes / BYTES_PER_KB)
    } else if bytes < BYTES_PER_GB {
        format!("{:.2} MB", bytes / BYTES_PER_MB)
    } else {
        format!("{:.2} GB", bytes / BYTES_PER_GB)
    }
}
