/// Facts, fact handles, and the fact arena
pub mod fact;
/// Forward-chaining inference procedure (`fc_infer`)
pub mod inference;
/// Justification edges between facts and rules
pub mod justification;
/// Knowledge base: ingest, query, and dependency-propagating retraction
pub mod knowledge_base;
/// Rules, rule handles, and the rule arena
pub mod rule;

pub use fact::{Fact, FactHandle, FactView};
pub use justification::Justification;
pub use knowledge_base::{Item, KnowledgeBase, KnowledgeBaseConfig, KnowledgeBaseStats};
pub use rule::{Rule, RuleHandle, RuleView};
