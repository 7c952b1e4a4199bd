//! Console reporting: banner, section headers and the results block.

use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;

use crate::stats::StatsSummary;

/// Print the title banner between `=` separators.
pub fn print_banner(title: &str) {
    let separator = "=".repeat(60);
    println!("\n{}", separator);
    println!("{:^60}", title.bold().cyan());
    println!("{}\n", separator);
}

/// Print a bold yellow section header with a `━` underline.
pub fn print_section(header: &str) {
    println!("{}", header.bold().yellow());
    println!("{}", "━".repeat(header.chars().count()));
}

/// Print the benchmark results in the canonical four-line format.
pub fn print_results(summary: &StatsSummary) {
    println!("Benchmark Results (in microseconds):");
    println!("Min Time: {:.2} µs", summary.min);
    println!("Max Time: {:.2} µs", summary.max);
    println!("Mean Time: {:.2} µs", summary.mean);
    println!("Standard Deviation: {:.2} µs", summary.std_dev);
}

/// Render the summary as a table for the detailed report block.
pub fn summary_table(summary: &StatsSummary, trials: usize) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec!["Trials".to_string(), trials.to_string()]);
    table.add_row(vec!["Min (µs)".to_string(), format!("{:.2}", summary.min)]);
    table.add_row(vec!["Max (µs)".to_string(), format!("{:.2}", summary.max)]);
    table.add_row(vec!["Mean (µs)".to_string(), format!("{:.2}", summary.mean)]);
    table.add_row(vec![
        "Std Dev (µs)".to_string(),
        format!("{:.2}", summary.std_dev),
    ]);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_table_lists_all_metrics() {
        let summary = StatsSummary {
            min: 1.0,
            max: 5.0,
            mean: 3.0,
            std_dev: 1.41,
        };
        let rendered = summary_table(&summary, 1000).to_string();
        assert!(rendered.contains("Trials"));
        assert!(rendered.contains("1000"));
        assert!(rendered.contains("Min (µs)"));
        assert!(rendered.contains("3.00"));
        assert!(rendered.contains("1.41"));
    }
}
