//! Shared formatting utilities for report cells and console output

use console::Emoji;
use std::sync::atomic::{AtomicBool, Ordering};

static EMOJI_DISABLED: AtomicBool = AtomicBool::new(false);

/// Chart emoji for reports
pub const CHART: Emoji = Emoji("📊", "~");

/// Microscope emoji for lookups
pub const MICROSCOPE: Emoji = Emoji("🔍", ">>");

/// Building emoji for warehouse operations
pub const WAREHOUSE: Emoji = Emoji("🏢", "#");

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Info emoji for informational messages
pub const INFO: Emoji = Emoji("ℹ️", "i");

/// Warning emoji for caution/alerts
pub const WARNING: Emoji = Emoji("⚠️", "!");

/// Light bulb emoji for tips
pub const BULB: Emoji = Emoji("💡", "*");

const MS_PER_MINUTE: f64 = 60_000.0;

/// Turn emoji output off (or back on) for the whole process
///
/// `console` only looks at the terminal locale, so `--no-emoji` has to be
/// applied here.
pub fn set_emoji_enabled(enabled: bool) {
    EMOJI_DISABLED.store(!enabled, Ordering::Relaxed);
}

/// Render an emoji, or its ASCII fallback when emoji are disabled
///
/// # Examples
///
/// ```
/// use snowwiz::fmt::{emoji, set_emoji_enabled, CHART};
///
/// set_emoji_enabled(false);
/// assert_eq!(emoji(CHART), "~");
/// ```
pub fn emoji(icon: Emoji<'_, '_>) -> String {
    pick(icon, !EMOJI_DISABLED.load(Ordering::Relaxed))
}

fn pick(icon: Emoji<'_, '_>, enabled: bool) -> String {
    if enabled {
        icon.to_string()
    } else {
        icon.1.to_string()
    }
}

/// Leading `max_chars` characters of `text`
///
/// Counts characters rather than bytes, so multi-byte text is never split
/// inside a code point.
///
/// # Examples
///
/// ```
/// use snowwiz::fmt::snippet;
///
/// assert_eq!(snippet("SELECT 1", 50), "SELECT 1");
/// assert_eq!(snippet("SELECT * FROM t", 6), "SELECT");
/// assert_eq!(snippet("naïve", 3), "naï");
/// ```
pub fn snippet(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Execution time in minutes with two decimals
///
/// # Examples
///
/// ```
/// use snowwiz::fmt::format_runtime_minutes;
///
/// assert_eq!(format_runtime_minutes(8_100_000), "135.00");
/// assert_eq!(format_runtime_minutes(2_500), "0.04");
/// ```
pub fn format_runtime_minutes(execution_time_ms: u64) -> String {
    format!("{:.2}", execution_time_ms as f64 / MS_PER_MINUTE)
}

/// Runtime change as a whole percentage
///
/// # Examples
///
/// ```
/// use snowwiz::fmt::format_runtime_change;
///
/// assert_eq!(format_runtime_change(60), "60%");
/// assert_eq!(format_runtime_change(0), "0%");
/// ```
pub fn format_runtime_change(pct: i64) -> String {
    format!("{}%", pct)
}

/// Hourly credit difference with an explicit sign
///
/// # Examples
///
/// ```
/// use snowwiz::fmt::format_cost_delta;
///
/// assert_eq!(format_cost_delta(3.0), "+3");
/// assert_eq!(format_cost_delta(-12.0), "-12");
/// assert_eq!(format_cost_delta(0.0), "0");
/// ```
pub fn format_cost_delta(delta: f64) -> String {
    if delta > 0.0 {
        format!("+{:.0}", delta)
    } else if delta < 0.0 {
        format!("{:.0}", delta)
    } else {
        "0".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_emoji_use_ascii_fallback() {
        assert_eq!(pick(CHART, false), "~");
        assert_eq!(pick(MICROSCOPE, false), ">>");
        assert_eq!(pick(CHECKMARK, false), "[OK]");
    }

    #[test]
    fn test_enabled_emoji_defer_to_console() {
        let shown = pick(CHART, true);
        assert!(shown == "📊" || shown == "~", "{}", shown);
    }

    #[test]
    fn test_snippet_shorter_than_limit_is_unchanged() {
        assert_eq!(snippet("", 50), "");
        assert_eq!(snippet("SELECT 1", 50), "SELECT 1");
    }

    #[test]
    fn test_snippet_counts_characters_not_bytes() {
        let text = "é".repeat(60);
        let cut = snippet(&text, 50);
        assert_eq!(cut.chars().count(), 50);
        assert_eq!(cut.len(), 100);
    }

    #[test]
    fn test_format_runtime_minutes_rounds_to_two_decimals() {
        assert_eq!(format_runtime_minutes(0), "0.00");
        assert_eq!(format_runtime_minutes(120_000), "2.00");
        assert_eq!(format_runtime_minutes(300_000), "5.00");
        assert_eq!(format_runtime_minutes(90_500), "1.51");
    }

    #[test]
    fn test_format_runtime_change_keeps_negative_sign() {
        assert_eq!(format_runtime_change(200), "200%");
        assert_eq!(format_runtime_change(-5), "-5%");
    }

    #[test]
    fn test_format_cost_delta_signs() {
        assert_eq!(format_cost_delta(28.0), "+28");
        assert_eq!(format_cost_delta(-4.0), "-4");
        assert_eq!(format_cost_delta(-0.0), "0");
    }
}
