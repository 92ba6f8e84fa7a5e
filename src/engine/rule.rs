//! Rules: the public constructor type, the stable arena handle, and the
//! knowledge base's owned, justification-bearing storage record.

use super::fact::FactHandle;
use super::justification::Justification;
use crate::term::Statement;

/// A conjunctive antecedent plus a single consequent, to be ingested into a
/// [`crate::engine::knowledge_base::KnowledgeBase`].
///
/// This is the externally-constructed value (§6: "Constructors for
/// `Rule(lhs, rhs)`"). Like [`crate::engine::fact::Fact`], it carries no
/// justification data — that is decided at ingest time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    /// The conjunctive antecedent. Must be non-empty: a rule with an empty
    /// `lhs` is rejected at ingest time (`EmptyRule`).
    pub lhs: Vec<Statement>,
    /// The consequent.
    pub rhs: Statement,
}

impl Rule {
    /// Build a rule from its antecedent and consequent.
    pub fn new(lhs: Vec<Statement>, rhs: Statement) -> Self {
        Self { lhs, rhs }
    }
}

/// A stable, non-owning reference to a rule stored in a knowledge base's
/// rule arena. See [`crate::engine::fact::FactHandle`] for the handle
/// stability contract; the same guarantees apply here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleHandle(u64);

impl RuleHandle {
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// The handle's opaque numeric id, exposed for logging/diagnostics only.
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// The knowledge base's owned record for one rule: its `(lhs, rhs)` plus the
/// full justification bookkeeping described in §3 ("Rule").
#[derive(Debug, Clone)]
pub(crate) struct StoredRule {
    pub lhs: Vec<Statement>,
    pub rhs: Statement,
    pub asserted: bool,
    pub supported_by: Vec<Justification>,
    pub supports_facts: Vec<FactHandle>,
    pub supports_rules: Vec<RuleHandle>,
}

/// A read-only snapshot of a stored rule, returned by
/// [`crate::engine::knowledge_base::KnowledgeBase::rules`] for introspection
/// and testing (§4.3.4).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleView {
    /// The rule's antecedent.
    pub lhs: Vec<Statement>,
    /// The rule's consequent.
    pub rhs: Statement,
    /// Whether the rule is (currently) externally asserted.
    pub asserted: bool,
    /// How many independent justifications currently support this rule.
    /// Always zero for an asserted, non-derived rule.
    pub justification_count: usize,
}
