//! Output formatting utilities for CLI

use serde::Serialize;

use crate::matching::JobListing;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print a serializable value as JSON or use custom text formatter
pub fn print_formatted<T, F>(value: &T, format: OutputFormat, text_formatter: F)
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Text => println!("{}", text_formatter(value)),
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(value) {
                println!("{}", json);
            }
        }
    }
}

/// Print a success message (suppressed in quiet mode)
pub fn print_success(message: &str, quiet: bool) {
    if !quiet {
        println!("{}", message);
    }
}

/// Print an error message (never suppressed)
pub fn print_error(message: &str) {
    eprintln!("Error: {}", message);
}

/// Format listings as a plain-text table with Company, Job Title, Description and Apply columns
pub fn format_results_table(listings: &[JobListing]) -> String {
    const HEADERS: [&str; 4] = ["Company", "Job Title", "Description", "Apply"];

    let rows: Vec<[&str; 4]> = listings
        .iter()
        .map(|l| [l.company.as_str(), l.title.as_str(), l.description.as_str(), l.apply_link.as_str()])
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: &[&str; 4]| -> String {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(&HEADERS));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    lines.extend(rows.iter().map(format_row));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::MockJobMatcher;

    #[test]
    fn test_format_results_table() {
        let table = format_results_table(&MockJobMatcher::listings());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Company   Job Title          Description"));
        assert!(lines[1].starts_with("--------  -----------------  "));
        assert!(lines[2].starts_with("TechCorp  Software Engineer  Exciting role in AI..."));
        assert!(lines[2].ends_with("https://example.com/apply1"));
        assert!(lines[3].starts_with("DataInc   Data Scientist     Work with big data..."));
    }

    #[test]
    fn test_format_empty_table_has_headers_only() {
        let table = format_results_table(&[]);
        assert_eq!(table.lines().count(), 2);
        assert!(table.starts_with("Company  Job Title  Description  Apply"));
    }
}
