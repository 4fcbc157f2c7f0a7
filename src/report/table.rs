//! Markdown pipe-table rendering

use super::ReportRow;

/// Columns holding numbers are right-aligned
const RIGHT_ALIGNED: [bool; 7] = [false, false, true, false, false, true, false];

/// Render report rows as a markdown pipe table
///
/// Every column is padded to its widest cell so the table also reads well
/// as plain text.
///
/// # Examples
///
/// ```
/// use snowwiz::report::{render_markdown, ReportRow};
///
/// let table = render_markdown(&[]);
/// assert!(table.starts_with("| Query ID"));
/// assert_eq!(table.lines().count(), 2);
/// ```
pub fn render_markdown(rows: &[ReportRow]) -> String {
    let mut widths: Vec<usize> = ReportRow::HEADERS.iter().map(|h| width(h)).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row.cells()) {
            *w = (*w).max(width(cell));
        }
    }

    let mut out = String::new();
    push_line(&mut out, &ReportRow::HEADERS, &widths);

    out.push('|');
    for (w, right) in widths.iter().zip(RIGHT_ALIGNED) {
        if right {
            out.push_str(&"-".repeat(w + 1));
            out.push(':');
        } else {
            out.push(':');
            out.push_str(&"-".repeat(w + 1));
        }
        out.push('|');
    }
    out.push('\n');

    for row in rows {
        push_line(&mut out, &row.cells(), &widths);
    }

    out
}

fn push_line(out: &mut String, cells: &[&str; 7], widths: &[usize]) {
    out.push('|');
    for ((cell, w), right) in cells.iter().zip(widths).zip(RIGHT_ALIGNED) {
        let pad = " ".repeat(w - width(cell));
        out.push(' ');
        if right {
            out.push_str(&pad);
            out.push_str(&escape(cell));
        } else {
            out.push_str(&escape(cell));
            out.push_str(&pad);
        }
        out.push_str(" |");
    }
    out.push('\n');
}

fn width(cell: &str) -> usize {
    escape(cell).chars().count()
}

/// Pipes and line breaks inside SQL text would split the cell or the row
fn escape(cell: &str) -> String {
    cell.replace("\r\n", " ")
        .replace(&['\r', '\n'][..], " ")
        .replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, text: &str) -> ReportRow {
        ReportRow {
            query_id: id.to_string(),
            current_wh: "XL".to_string(),
            runtime_min: "0.04".to_string(),
            suggested_wh: "M".to_string(),
            runtime_change: "200%".to_string(),
            cost_impact: "-12".to_string(),
            query_text: text.to_string(),
        }
    }

    #[test]
    fn test_render_has_header_separator_and_rows() {
        let table = render_markdown(&[row("xyz98765", "SELECT 1..."), row("q2", "SELECT 2...")]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Cost Impact (Cr/Hr Diff)"));
        assert!(lines[1].starts_with("|:"));
        assert!(lines[2].contains("xyz98765"));
        assert!(lines[3].contains("SELECT 2..."));
    }

    #[test]
    fn test_render_lines_have_equal_width() {
        let table = render_markdown(&[row("a", "short..."), row("much_longer_id", "x...")]);
        let widths: Vec<usize> = table.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{:?}", widths);
    }

    #[test]
    fn test_numeric_columns_are_right_aligned() {
        let table = render_markdown(&[row("q", "t...")]);
        let data_line = table.lines().nth(2).unwrap();
        let cells: Vec<&str> = data_line.split('|').collect();
        // cells[0] is empty before the leading pipe
        assert!(cells[3].ends_with("0.04 "));
        assert!(cells[3].starts_with("  "));
        assert!(cells[6].ends_with("-12 "));
        assert!(cells[1].starts_with(" q "));
    }

    #[test]
    fn test_pipes_in_query_text_are_escaped() {
        let table = render_markdown(&[row("q", "SELECT a || b...")]);
        assert!(table.contains("SELECT a \\|\\| b..."));
    }

    #[test]
    fn test_line_breaks_in_query_text_stay_on_one_row() {
        let table = render_markdown(&[
            row("qnl000001", "SELECT a,\n  b\nFROM t..."),
            row("qcrlf0001", "SELECT 1\r\nUNION SELECT 2..."),
        ]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[2].contains("SELECT a,   b FROM t..."));
        assert!(lines[3].contains("SELECT 1 UNION SELECT 2..."));
        assert!(!table.contains('\r'));
        let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{:?}", widths);
    }
}
