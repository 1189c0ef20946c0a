//! Terminal display of conversion results.

use owo_colors::OwoColorize;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use scan2prism::{ConversionSummary, RiskRating, SeverityCounts};

/// Row type for the severity summary table.
#[derive(Tabled)]
struct SeverityRow {
    #[tabled(rename = "Risk rating")]
    rating: String,
    #[tabled(rename = "Issues")]
    count: usize,
}

fn severity_rows(counts: &SeverityCounts) -> Vec<SeverityRow> {
    RiskRating::ALL
        .iter()
        .rev()
        .map(|rating| SeverityRow {
            rating: rating.to_string(),
            count: counts.get(*rating),
        })
        .collect()
}

/// Print the image, issue count and per-rating breakdown.
pub fn display_conversion_summary(summary: &ConversionSummary) {
    let image = if summary.image_name.is_empty() {
        "<unnamed>".to_string()
    } else {
        summary.image_name.clone()
    };

    println!();
    println!(
        "{} {} ({} issues)",
        "📦 Image:".bright_blue().bold(),
        image.cyan(),
        summary.issue_count
    );

    if summary.issue_count == 0 {
        println!("{}", "   No findings in report".dimmed());
        return;
    }

    let mut table = Table::new(severity_rows(&summary.severities));
    table.with(TableStyle::rounded());
    println!("{}", table);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_ordered_most_severe_first() {
        let counts = SeverityCounts {
            critical: 2,
            info: 1,
            ..SeverityCounts::default()
        };
        let rows = severity_rows(&counts);

        let labels: Vec<_> = rows.iter().map(|r| r.rating.as_str()).collect();
        assert_eq!(labels, ["Critical", "High", "Medium", "Low", "Info"]);
        assert_eq!(rows[0].count, 2);
        assert_eq!(rows[4].count, 1);
    }
}
