//! Console output formatter for fan-out results

use colored::Colorize;
use fanout_domain::{FanOutResult, OutputFormat, Strategy};

/// Formats fan-out results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format according to the selected output format.
    ///
    /// Only the JSON format can fail.
    pub fn render(
        query: &str,
        result: &FanOutResult,
        format: OutputFormat,
    ) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Full => Ok(Self::format(query, result)),
            OutputFormat::Analysis => Ok(Self::format_analysis_only(query, result)),
            OutputFormat::Json => Self::format_json(result),
        }
    }

    /// Format the complete result
    pub fn format(query: &str, result: &FanOutResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Prompt Strategy Results"));
        output.push('\n');

        output.push_str(&format!("{} {}\n", "Query:".cyan().bold(), query));

        output.push_str(&Self::section_header("Phase 1: Strategy Responses"));
        for (strategy, content) in result.results.iter() {
            output.push_str(&format!(
                "\n{}\n{}\n",
                format!("── {} ──", strategy).yellow().bold(),
                content
            ));
        }

        output.push_str(&Self::section_header("Phase 2: Comparative Analysis"));
        output.push_str(&format!("\n{}\n", result.comparative_analysis));

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON, same shape as the HTTP response
    pub fn format_json(result: &FanOutResult) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(result)
    }

    /// Format the comparative analysis only (concise output)
    pub fn format_analysis_only(query: &str, result: &FanOutResult) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            "=== Comparative Analysis ===".cyan().bold()
        ));
        output.push_str(&format!("{} {}\n\n", "Q:".bold(), query));
        output.push_str(&result.comparative_analysis);
        output.push('\n');

        output
    }

    /// Format the strategy list for the `strategies` command
    pub fn format_strategies() -> String {
        Strategy::ALL
            .iter()
            .map(|s| format!("{:<18} {}", s.as_str().bold(), s.description()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
