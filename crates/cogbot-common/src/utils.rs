//! Shared utility functions.

use std::time::Duration;

/// Formats an elapsed duration as seconds with two decimals, e.g. `0.02s`.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.2}s", elapsed.as_secs_f64())
}

/// Builds the dotted module path of a cog directory: `<root>.<dir>.<dir lowercased>`.
#[must_use]
pub fn cog_module_path(root: &str, dir: &str) -> String {
    format!("{root}.{dir}.{}", dir.to_lowercase())
}

/// Formats an uptime as `Xd Xh Xm Xs`, omitting leading zero units.
#[must_use]
pub fn format_uptime(uptime: Duration) -> String {
    let total = uptime.as_secs();
    let (days, hours, minutes, seconds) = (
        total / 86_400,
        (total % 86_400) / 3_600,
        (total % 3_600) / 60,
        total % 60,
    );

    if days > 0 {
        format!("{days}d {hours}h {minutes}m {seconds}s")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}
