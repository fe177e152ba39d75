// Distribution report rendering

use colored::Colorize;

use crate::core::DistributionReport;

/// One line per remote, plus a summary line
pub fn render_report(report: &DistributionReport) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.outcomes.len() + 1);

    for outcome in &report.outcomes {
        let marker = if outcome.is_success() {
            "✓".green().bold()
        } else {
            "✗".red().bold()
        };
        lines.push(format!(
            "  {} {} ({}): {}",
            marker,
            outcome.remote.bold(),
            outcome.method,
            outcome.message()
        ));
    }

    let summary = format!(
        "{} of {} remote copies succeeded",
        report.succeeded(),
        report.outcomes.len()
    );
    lines.push(if report.failed() == 0 {
        summary.green().to_string()
    } else {
        summary.yellow().to_string()
    });

    lines
}

pub fn print_report(report: &DistributionReport) {
    if report.is_empty() {
        super::dimmed("No active remotes; nothing to distribute");
        return;
    }

    println!();
    for line in render_report(report) {
        println!("{}", line);
    }
}
