use thiserror::Error;

use crate::term::Statement;

/// Error types that can occur in the knowledge base
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KnowledgeBaseError {
    /// The queried pattern is not fact-shaped (see [`crate::term::Statement::is_fact_shaped`]).
    #[error("invalid ask: pattern is not fact-shaped: {pattern:?}")]
    InvalidAsk {
        /// The offending pattern
        pattern: Statement,
    },

    /// An ingested fact contains at least one variable.
    #[error("non-ground fact: {statement:?}")]
    NonGroundFact {
        /// The offending statement
        statement: Statement,
    },

    /// A rule was constructed or ingested with an empty antecedent.
    #[error("rule has an empty antecedent: rhs={rhs:?}")]
    EmptyRule {
        /// The rule's consequent, kept for diagnostics
        rhs: Statement,
    },
}

/// Convenient Result type alias for knowledge base operations
pub type Result<T> = std::result::Result<T, KnowledgeBaseError>;
