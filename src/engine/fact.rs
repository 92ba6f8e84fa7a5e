//! Facts: the public constructor type, the stable arena handle, and the
//! knowledge base's owned, justification-bearing storage record.

use super::justification::Justification;
use super::rule::RuleHandle;
use crate::term::Statement;

/// A ground statement to be ingested into a [`crate::engine::knowledge_base::KnowledgeBase`].
///
/// This is the externally-constructed value (§6: "Constructors for
/// `Fact(statement)`") — it carries no justification data itself. The
/// knowledge base decides, at ingest time, whether the resulting stored fact
/// is asserted or derived, based on whether the ingest call carries a
/// [`Justification`] (see [`crate::engine::knowledge_base::KnowledgeBase::ingest`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fact {
    /// The fact's ground statement.
    pub statement: Statement,
}

impl Fact {
    /// Build a fact from a statement. Groundness is validated at ingest
    /// time, not construction time, so this never fails.
    pub fn new(statement: Statement) -> Self {
        Self { statement }
    }
}

/// A stable, non-owning reference to a fact stored in a knowledge base's
/// fact arena.
///
/// Handles are never reused and never invalidated by *other* facts being
/// retracted (unlike a `Vec` index, which would shift on removal) — see
/// §9's re-architecture note. A handle into one knowledge base is
/// meaningless against another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FactHandle(u64);

impl FactHandle {
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// The handle's opaque numeric id, exposed for logging/diagnostics only.
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// The knowledge base's owned record for one fact: its statement plus the
/// full justification bookkeeping described in §3 ("Fact").
#[derive(Debug, Clone)]
pub(crate) struct StoredFact {
    pub statement: Statement,
    pub asserted: bool,
    pub supported_by: Vec<Justification>,
    pub supports_facts: Vec<FactHandle>,
    pub supports_rules: Vec<RuleHandle>,
}

/// A read-only snapshot of a stored fact, returned by
/// [`crate::engine::knowledge_base::KnowledgeBase::facts`] for introspection
/// and testing (§4.3.4). Carries no handle — callers observe state, they
/// don't re-enter the KB with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactView {
    /// The fact's statement.
    pub statement: Statement,
    /// Whether the fact is (currently) externally asserted.
    pub asserted: bool,
    /// How many independent justifications currently support this fact.
    pub justification_count: usize,
}
