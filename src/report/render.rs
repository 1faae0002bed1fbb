//! Console rendering of a [`ProgressReport`].

use super::ProgressReport;
use coursetime_common::Result;

const RULE_WIDTH: usize = 55;
const LABEL_WIDTH: usize = 31;

/// Render the per-section breakdown followed by the totals table.
///
/// ```text
/// Section duration: 01 - A: 02h 00m
/// Section duration: [Done] 02 - B: 01h 00m
///
///                                |   hours    percentage
/// -------------------------------------------------------
/// Total course duration (hours): | 03h 00m
/// Done duration (hours):         | 01h 00m    -  33.33%
/// Remaining duration (hours):    | 02h 00m    -  66.67%
/// -------------------------------------------------------
/// ```
///
/// Fails with `NoCountedDuration` when the total is zero, since the
/// percentages are undefined.
pub fn render(report: &ProgressReport) -> Result<String> {
    let (done_pct, remaining_pct) = report.percentages()?;
    let rule = "-".repeat(RULE_WIDTH);

    let mut lines: Vec<String> = report.section_lines().to_vec();
    lines.push(String::new());
    lines.push(format!("{}|   hours    percentage", " ".repeat(LABEL_WIDTH)));
    lines.push(rule.clone());
    lines.push(format!(
        "Total course duration (hours): | {}",
        report.total_duration()
    ));
    lines.push(format!(
        "Done duration (hours):         | {}    - {:6.2}%",
        report.done_duration(),
        done_pct
    ));
    lines.push(format!(
        "Remaining duration (hours):    | {}    - {:6.2}%",
        report.remaining_duration(),
        remaining_pct
    ));
    lines.push(rule);

    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}
