//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for fan-out results
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Every strategy answer followed by the comparison (default)
    #[default]
    Full,
    /// Only the comparative analysis
    Analysis,
    /// JSON output, same shape as the HTTP response
    Json,
}
