//! Prompt domain
//!
//! Templates for each strategy, the comparison prompt and the single-prompt ask.

mod template;

pub use template::PromptTemplate;
