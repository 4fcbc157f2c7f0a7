//! Samples command implementation
//!
//! Lists the built-in sample queries so users know which ids to try.

use console::style;

use crate::fmt::{emoji, format_runtime_minutes, snippet, CHART};
use crate::history::SampleHistory;

const PREVIEW_CHARS: usize = 40;

/// Render the sample listing
pub fn render_samples(samples: &SampleHistory) -> String {
    let mut text = format!(
        "{} {}\n\n",
        emoji(CHART),
        style("Built-in sample queries").bold()
    );

    for row in samples.rows() {
        text.push_str(&format!(
            "  {:<14} {:>3}  {:>8} min  {}\n",
            style(&row.query_id).cyan(),
            row.warehouse_name,
            format_runtime_minutes(row.execution_time_ms),
            style(snippet(&row.query_text, PREVIEW_CHARS)).dim()
        ));
    }

    text.push_str(&format!(
        "\nUnknown ids fall back to a one-minute query on an M warehouse.\nTry: {}\n",
        style("snowwiz recommend test_abc12345 test_xyz98765").cyan()
    ));
    text
}

/// Print the built-in sample queries
pub fn cmd_samples() {
    print!("{}", render_samples(&SampleHistory::new()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_samples_lists_every_id_sorted() {
        console::set_colors_enabled(false);
        let samples = SampleHistory::new();
        let text = render_samples(&samples);

        let positions: Vec<usize> = samples
            .ids()
            .iter()
            .map(|id| text.find(&format!("  {} ", id)).unwrap())
            .collect();
        assert_eq!(positions.len(), 8);
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_render_samples_shows_runtime_minutes() {
        console::set_colors_enabled(false);
        let text = render_samples(&SampleHistory::new());
        assert!(text.contains("135.00 min"));
        assert!(text.contains("0.04 min"));
    }
}
