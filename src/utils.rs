/// Utility helpers for RustyPlayer

/// Render a non-negative number of seconds as `M:SS`.
/// Minutes are not capped (ten minutes renders as `10:00`) and there is no hour field.
/// Both parts are floored, never rounded.
pub fn format_time(seconds: f64) -> String {
    let mins = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{}:{:02}", mins, secs)
}

/// Same as [`format_time`], but `None` for values that cannot be shown
/// (NaN, infinite or negative, which is what a media element reports before metadata).
pub fn format_known_time(seconds: f64) -> Option<String> {
    if seconds.is_finite() && seconds >= 0.0 {
        Some(format_time(seconds))
    } else {
        None
    }
}

/// Portion of a slider's range that is selected, in percent.
///
/// Returns 0 when `max` is unknown or not positive so callers never divide by zero.
pub fn fill_percent(value: f64, max: f64) -> f64 {
    if !value.is_finite() || !max.is_finite() || max <= 0.0 {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}
