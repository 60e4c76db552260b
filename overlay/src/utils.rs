//! Common utility functions for overlay rendering

/// Format a duration in seconds as M:SS
pub fn format_time(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Countdown label for the remaining time.
///
/// `None` when nothing is left. Over a minute shows M:SS, under two
/// seconds one decimal, otherwise whole seconds. Halves round up.
pub fn format_countdown(remaining_secs: f32) -> Option<String> {
    if remaining_secs == 0.0 {
        return None;
    }
    let text = if remaining_secs > 60.0 {
        format_time(remaining_secs.floor() as u64)
    } else if remaining_secs < 2.0 {
        format!("{:.1}", (remaining_secs * 10.0).round() / 10.0)
    } else {
        format!("{:.0}", remaining_secs.round())
    };
    Some(text)
}
