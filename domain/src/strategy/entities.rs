//! Strategy domain entities

use serde::{Deserialize, Serialize};

/// A prompt strategy used to elicit a distinct style of answer.
///
/// Variant order is the canonical strategy order; `Ord` follows it so that
/// ordered collections keyed by strategy iterate in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Direct structured instruction without examples
    ZeroShot,
    /// Worked examples before the actual question
    FewShot,
    /// Step-by-step reasoning before the final answer
    ChainOfThought,
    /// Thought / Action / Observation loop
    React,
    /// Answer, critique, then improve
    SelfCritique,
    /// Several expert perspectives on the same question
    MultiRole,
}

impl Strategy {
    /// All strategies in canonical order
    pub const ALL: [Strategy; 6] = [
        Strategy::ZeroShot,
        Strategy::FewShot,
        Strategy::ChainOfThought,
        Strategy::React,
        Strategy::SelfCritique,
        Strategy::MultiRole,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::ZeroShot => "zero_shot",
            Strategy::FewShot => "few_shot",
            Strategy::ChainOfThought => "chain_of_thought",
            Strategy::React => "react",
            Strategy::SelfCritique => "self_critique",
            Strategy::MultiRole => "multi_role",
        }
    }

    /// One-line description of what the strategy is for
    pub fn description(&self) -> &'static str {
        match self {
            Strategy::ZeroShot => "Direct structured instruction without examples",
            Strategy::FewShot => "Examples first, so the model picks up format and style",
            Strategy::ChainOfThought => "Step-by-step reasoning before the final answer",
            Strategy::React => "Reason + act simulation (Thought / Action / Observation)",
            Strategy::SelfCritique => "Generate, critique, then improve the answer",
            Strategy::MultiRole => "Backend, security and DevOps perspectives",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Phase of a fan-out run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// All six strategy prompts are answered
    Strategies,
    /// The six answers are compared and rated
    Comparison,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Strategies => "strategies",
            Phase::Comparison => "comparison",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Phase::Strategies => "Strategy Prompts",
            Phase::Comparison => "Comparative Analysis",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
