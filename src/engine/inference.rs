//! Forward-chaining inference: given one new fact and one existing rule (or
//! vice versa), derive whatever follows by unifying the fact against the
//! rule's first antecedent.
//!
//! Grounded on `InferenceEngine.fc_infer` in the original source, restated
//! over handles instead of mutual object references, and on the teacher
//! RETE engine's general shape of "match against a fixed left-hand pattern,
//! instantiate the rest" (`rete::working_memory`) without adopting its
//! incremental alpha/beta network — this fragment has no negation or joins
//! beyond a conjunctive antecedent list, so a direct per-pair match suffices.

use super::fact::{Fact, FactHandle};
use super::justification::Justification;
use super::knowledge_base::{Item, KnowledgeBase};
use super::rule::{Rule, RuleHandle};
use crate::binding::instantiate;
use crate::errors::Result;
use crate::unify::unify_statements;

/// Try to fire `rule` against `fact`. If the fact unifies with the rule's
/// first antecedent, instantiate the rest of the rule under that binding and
/// ingest the result (a new fact if the antecedent had exactly one literal,
/// otherwise a new, more specific rule) with a justification pointing back
/// at `(fact, rule)`.
///
/// A no-op if either handle no longer resolves (the fact or rule was
/// retracted between being scheduled and being processed) or if unification
/// fails.
pub(crate) fn fc_infer(kb: &mut KnowledgeBase, fact: FactHandle, rule: RuleHandle) -> Result<()> {
    let Some(fact_stmt) = kb.fact_statement(fact) else {
        return Ok(());
    };
    let Some((lhs, rhs)) = kb.rule_parts(rule) else {
        return Ok(());
    };

    let first = &lhs[0];
    let Some(theta) = unify_statements(&fact_stmt, first) else {
        return Ok(());
    };

    let justification = Justification::new(fact, rule);

    if lhs.len() == 1 {
        let new_rhs = instantiate(&rhs, &theta);
        kb.ingest(Item::Fact(Fact::new(new_rhs)), Some(justification))?;
    } else {
        let new_lhs = lhs[1..].iter().map(|l| instantiate(l, &theta)).collect();
        let new_rhs = instantiate(&rhs, &theta);
        kb.ingest(Item::Rule(Rule::new(new_lhs, new_rhs)), Some(justification))?;
    }

    Ok(())
}
