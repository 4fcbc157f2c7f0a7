//! Console report output

use super::{render_markdown, ReportOutput};
use crate::fmt::{emoji, format_cost_delta, BULB, CHART};
use console::style;
use std::io::{self, Write};

/// Render the full console report
pub fn render_report(output: &ReportOutput, legend: bool) -> String {
    let mut text = String::new();

    text.push_str(&format!(
        "\n{} {}\n",
        emoji(CHART),
        style("Warehouse Optimization Recommendations").bold()
    ));
    text.push_str(&format!(
        "{}\n\n",
        style(format!("Source: {}", output.source)).dim()
    ));

    text.push_str(&render_markdown(&output.recommendations));

    let summary = &output.summary;
    text.push_str(&format!(
        "\n{} {} queries: {} upsize, {} downsize, {} unchanged (net {} Cr/Hr)\n",
        style("Summary:").bold(),
        summary.total,
        style(summary.upsize).yellow(),
        style(summary.downsize).green(),
        summary.unchanged,
        format_cost_delta(summary.net_cost_delta_credits_per_hour)
    ));

    if legend {
        text.push_str(&format!("\n{} {}\n", emoji(BULB), style("Legend:").bold()));
        text.push_str("- Positive Cost Impact: Higher hourly cost (but faster execution)\n");
        text.push_str("- Negative Cost Impact: Cost savings (may have slower execution)\n");
    }

    text
}

/// Write the console report to `out`
pub fn write_report<W: Write>(out: &mut W, output: &ReportOutput, legend: bool) -> io::Result<()> {
    out.write_all(render_report(output, legend).as_bytes())
}
