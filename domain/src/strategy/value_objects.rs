//! Strategy value objects - immutable result types for fan-out runs.
//!
//! - [`StrategyResults`] - each strategy's answer from the upstream model
//! - [`FanOutResult`] - complete result, also the cached value

use super::entities::Strategy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Answers keyed by strategy, iterated in canonical strategy order.
///
/// Serializes as a flat JSON object: `{"zero_shot": "...", ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrategyResults(BTreeMap<Strategy, String>);

impl StrategyResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the answer for a strategy, replacing any previous one
    pub fn insert(&mut self, strategy: Strategy, content: impl Into<String>) {
        self.0.insert(strategy, content.into());
    }

    pub fn get(&self, strategy: Strategy) -> Option<&str> {
        self.0.get(&strategy).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` once every strategy has an answer
    pub fn is_complete(&self) -> bool {
        Strategy::ALL.iter().all(|s| self.0.contains_key(s))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Strategy, &str)> {
        self.0.iter().map(|(s, c)| (*s, c.as_str()))
    }
}

impl FromIterator<(Strategy, String)> for StrategyResults {
    fn from_iter<I: IntoIterator<Item = (Strategy, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Complete result of a fan-out run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FanOutResult {
    /// Answer for each strategy
    pub results: StrategyResults,
    /// The upstream model's comparison and rating of the answers
    pub comparative_analysis: String,
}

impl FanOutResult {
    pub fn new(results: StrategyResults, comparative_analysis: impl Into<String>) -> Self {
        Self {
            results,
            comparative_analysis: comparative_analysis.into(),
        }
    }
}
