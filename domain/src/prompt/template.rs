//! Prompt templates for the fan-out flow

use crate::strategy::entities::Strategy;
use crate::strategy::value_objects::StrategyResults;

/// Substitution point in every strategy template
const PLACEHOLDER: &str = "{query}";

const ZERO_SHOT: &str = r#"You are a senior AI engineer.

Task:
{query}

Provide:
- Clear structured answer
- Technical depth
- Practical implementation details"#;

const FEW_SHOT: &str = r#"Example 1:
Question: Explain REST.
Answer: REST is an architectural style...

Example 2:
Question: Explain JWT.
Answer: JWT is a compact token format...

Now answer:
{query}"#;

const CHAIN_OF_THOUGHT: &str = r#"Solve the following step-by-step.
Show reasoning clearly before final answer.

Question:
{query}"#;

const REACT: &str = r#"Follow this structure:

Thought:
Action:
Observation:
Final Answer:

Question:
{query}"#;

const SELF_CRITIQUE: &str = r#"Step 1: Provide answer to:
{query}

Step 2: Critique the answer for weaknesses.

Step 3: Provide improved version."#;

const MULTI_ROLE: &str = r#"Three experts will answer:

1. Backend Engineer
2. Security Engineer
3. DevOps Engineer

Each provides their perspective on:
{query}"#;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Raw template for a strategy, with a single `{query}` placeholder
    pub fn template(strategy: Strategy) -> &'static str {
        match strategy {
            Strategy::ZeroShot => ZERO_SHOT,
            Strategy::FewShot => FEW_SHOT,
            Strategy::ChainOfThought => CHAIN_OF_THOUGHT,
            Strategy::React => REACT,
            Strategy::SelfCritique => SELF_CRITIQUE,
            Strategy::MultiRole => MULTI_ROLE,
        }
    }

    /// Render a strategy template with the query substituted verbatim
    pub fn render(strategy: Strategy, query: &str) -> String {
        // replacen does not rescan the inserted text, so a query that itself
        // contains the placeholder is left alone.
        Self::template(strategy).replacen(PLACEHOLDER, query, 1)
    }

    /// Concatenate results as `"<strategy>:\n<answer>"` blocks separated by blank lines
    pub fn combine_results(results: &StrategyResults) -> String {
        results
            .iter()
            .map(|(strategy, content)| format!("{}:\n{}", strategy, content))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// User prompt asking the model to compare and rate the strategy answers
    pub fn comparison_prompt(results: &StrategyResults) -> String {
        format!(
            r#"Analyze the following responses generated using different prompt strategies.

Compare them based on:
- Clarity
- Technical depth
- Logical structure
- Practical usefulness

Rate each out of 10.
Provide comparative analysis.

Responses:
{}"#,
            Self::combine_results(results)
        )
    }

    /// Default system prompt for single-prompt asks
    pub fn ask_system() -> &'static str {
        "You are a helpful assistant."
    }
}
