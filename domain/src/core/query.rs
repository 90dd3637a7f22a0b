//! Query value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A query to be fanned out across all strategies (Value Object)
///
/// The content is kept exactly as submitted. It is used verbatim both for
/// template substitution and as the cache key, so no trimming or other
/// normalization happens here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Query {
    content: String,
}

impl Query {
    /// Create a new query, rejecting empty content.
    ///
    /// Whitespace-only content is a valid query.
    pub fn new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.is_empty() {
            return Err(DomainError::InvalidQuery(
                "query cannot be empty".to_string(),
            ));
        }
        Ok(Self { content })
    }

    /// Get the query content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for Query {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Query::new(s)
    }
}

impl TryFrom<&str> for Query {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Query::new(s)
    }
}

impl From<Query> for String {
    fn from(q: Query) -> Self {
        q.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_creation() {
        let q = Query::new("Explain REST").unwrap();
        assert_eq!(q.content(), "Explain REST");
    }

    #[test]
    fn test_query_keeps_surrounding_whitespace() {
        let q = Query::new("Explain REST ").unwrap();
        assert_eq!(q.content(), "Explain REST ");
        assert_ne!(q, Query::new("Explain REST").unwrap());
    }

    #[test]
    fn test_empty_query_rejected() {
        assert!(matches!(Query::new(""), Err(DomainError::InvalidQuery(_))));
    }

    #[test]
    fn test_whitespace_only_query_accepted() {
        let q = Query::new("   \n").unwrap();
        assert_eq!(q.content(), "   \n");
    }

    #[test]
    fn test_deserialize_rejects_empty() {
        let err = serde_json::from_str::<Query>("\"\"");
        assert!(err.is_err());

        let q: Query = serde_json::from_str("\"What is Rust?\"").unwrap();
        assert_eq!(q.content(), "What is Rust?");
    }
}
