//! The knowledge base: ingest, pattern query, and dependency-propagating
//! retraction over a fact arena and a rule arena.
//!
//! Grounded on the teacher engine's `engine::knowledge_base::KnowledgeBase`
//! for the overall shape (a facade owning typed storage plus a small stats
//! struct) and on `rete::working_memory::WorkingMemory` for the
//! handle-indexed arena pattern, generalized here to two arenas with
//! bidirectional justification edges instead of one arena with type
//! indexing.

use std::collections::HashMap;

use super::fact::{Fact, FactHandle, FactView, StoredFact};
use super::inference::fc_infer;
use super::justification::Justification;
use super::rule::{Rule, RuleHandle, RuleView, StoredRule};
use crate::binding::BindingSet;
use crate::errors::{KnowledgeBaseError, Result};
use crate::term::Statement;
use crate::unify::unify_statements;

/// A fact or a rule, tagged for [`KnowledgeBase::add`]/[`KnowledgeBase::retract`].
///
/// Modeled as a two-arm variant rather than a shared trait object, per §9
/// ("Variants, not inheritance") — ingest dispatches on the tag, and
/// internal storage stays in two separate typed collections.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Item {
    /// A ground fact.
    Fact(Fact),
    /// A rule with a non-empty antecedent.
    Rule(Rule),
}

impl From<Fact> for Item {
    fn from(fact: Fact) -> Self {
        Item::Fact(fact)
    }
}

impl From<Rule> for Item {
    fn from(rule: Rule) -> Self {
        Item::Rule(rule)
    }
}

/// Tunables for a [`KnowledgeBase`]. The core has no file-based
/// configuration of its own (§9.1 of the expanded spec) — this struct exists
/// only to bound the debug-only recursion-depth assertion described in §5.
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeBaseConfig {
    /// Maximum ingest/retraction recursion depth checked by a debug
    /// assertion. Exceeding it in a release build does nothing; in a debug
    /// build it panics, which is the intended way to catch an accidentally
    /// non-terminating derivation chain in tests (§9: "assert bounded
    /// recursion depth during testing").
    pub max_recursion_depth: usize,
}

impl Default for KnowledgeBaseConfig {
    fn default() -> Self {
        Self {
            max_recursion_depth: 10_000,
        }
    }
}

/// Aggregate counts over the current knowledge base, for diagnostics.
/// Purely observational — never consulted by ingest/retract logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnowledgeBaseStats {
    /// Total facts currently stored.
    pub total_facts: usize,
    /// Facts with `asserted == true`.
    pub asserted_facts: usize,
    /// Facts with `asserted == false` (purely derived).
    pub derived_facts: usize,
    /// Total rules currently stored.
    pub total_rules: usize,
    /// Rules with `asserted == true`.
    pub asserted_rules: usize,
    /// Rules with `asserted == false` (purely derived).
    pub derived_rules: usize,
    /// Sum of every item's `supported_by` length.
    pub justification_edges: usize,
}

/// Owns facts and rules, deduplicates, stitches justification edges, drives
/// forward-chaining inference on every ingest, and performs
/// dependency-propagating retraction.
///
/// Single-threaded and synchronous (§5): every mutating operation takes
/// `&mut self`, so Rust's aliasing rules already forbid the interleaved
/// ingest/retract calls the design explicitly disallows — there is no
/// additional locking to get wrong.
#[derive(Debug)]
pub struct KnowledgeBase {
    facts: HashMap<FactHandle, StoredFact>,
    fact_order: Vec<FactHandle>,
    fact_index: HashMap<Statement, FactHandle>,
    next_fact_id: u64,

    rules: HashMap<RuleHandle, StoredRule>,
    rule_order: Vec<RuleHandle>,
    rule_index: HashMap<(Vec<Statement>, Statement), RuleHandle>,
    next_rule_id: u64,

    config: KnowledgeBaseConfig,
    depth: usize,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

impl KnowledgeBase {
    /// Create an empty knowledge base with the default configuration.
    pub fn new() -> Self {
        Self::with_config(KnowledgeBaseConfig::default())
    }

    /// Create an empty knowledge base with an explicit configuration.
    pub fn with_config(config: KnowledgeBaseConfig) -> Self {
        Self {
            facts: HashMap::new(),
            fact_order: Vec::new(),
            fact_index: HashMap::new(),
            next_fact_id: 1,
            rules: HashMap::new(),
            rule_order: Vec::new(),
            rule_index: HashMap::new(),
            next_rule_id: 1,
            config,
            depth: 0,
        }
    }

    // ---------------------------------------------------------------
    // Ingest
    // ---------------------------------------------------------------

    /// Ingest a fact or rule as a bare external assertion.
    ///
    /// Synonym of [`KnowledgeBase::assert`] — both names exist because the
    /// fragment this is grounded on names the same operation `kb_add` and
    /// `kb_assert` interchangeably (§6).
    pub fn add(&mut self, item: impl Into<Item>) -> Result<()> {
        self.ingest(item.into(), None)
    }

    /// Ingest a fact or rule as a bare external assertion. See [`KnowledgeBase::add`].
    pub fn assert(&mut self, item: impl Into<Item>) -> Result<()> {
        self.add(item)
    }

    /// Internal ingest path, also used by the inference engine to submit
    /// derivations with their originating [`Justification`] attached.
    pub(crate) fn ingest(&mut self, item: Item, justification: Option<Justification>) -> Result<()> {
        self.depth += 1;
        debug_assert!(
            self.depth <= self.config.max_recursion_depth,
            "ingest recursion exceeded configured bound; this fragment's derivations are \
             supposed to terminate in a finite monotone fixpoint (§5/§9)"
        );
        let result = match item {
            Item::Fact(fact) => self.ingest_fact(fact, justification),
            Item::Rule(rule) => self.ingest_rule(rule, justification),
        };
        self.depth -= 1;
        result
    }

    fn ingest_fact(&mut self, fact: Fact, justification: Option<Justification>) -> Result<()> {
        if !fact.statement.is_ground() {
            return Err(KnowledgeBaseError::NonGroundFact {
                statement: fact.statement,
            });
        }

        if let Some(&existing) = self.fact_index.get(&fact.statement) {
            match justification {
                Some(j) => {
                    if let Some(stored) = self.facts.get_mut(&existing) {
                        stored.supported_by.push(j);
                    }
                    self.add_supports_fact_edge(j, existing);
                    log::debug!(
                        "re-derivation of existing fact {}: added justification",
                        fact.statement
                    );
                }
                None => {
                    if let Some(stored) = self.facts.get_mut(&existing) {
                        stored.asserted = true;
                    }
                    log::debug!("bare re-assertion of existing fact {}", fact.statement);
                }
            }
            return Ok(());
        }

        let handle = FactHandle::new(self.next_fact_id);
        self.next_fact_id += 1;

        let asserted = justification.is_none();
        let supported_by = justification.into_iter().collect::<Vec<_>>();

        log::debug!(
            "new {} fact {}",
            if asserted { "asserted" } else { "derived" },
            fact.statement
        );

        self.fact_index.insert(fact.statement.clone(), handle);
        self.fact_order.push(handle);
        self.facts.insert(
            handle,
            StoredFact {
                statement: fact.statement,
                asserted,
                supported_by,
                supports_facts: Vec::new(),
                supports_rules: Vec::new(),
            },
        );

        if let Some(j) = justification {
            self.add_supports_fact_edge(j, handle);
        }

        // Run inference against every rule currently in the KB. Cloning the
        // handle list lets `fc_infer` recursively call back into `ingest`
        // without us holding a borrow of `self.rule_order`.
        let rule_handles = self.rule_order.clone();
        for rule_handle in rule_handles {
            fc_infer(self, handle, rule_handle)?;
        }

        Ok(())
    }

    fn ingest_rule(&mut self, rule: Rule, justification: Option<Justification>) -> Result<()> {
        if rule.lhs.is_empty() {
            return Err(KnowledgeBaseError::EmptyRule { rhs: rule.rhs });
        }

        let key = (rule.lhs.clone(), rule.rhs.clone());

        if let Some(&existing) = self.rule_index.get(&key) {
            match justification {
                Some(j) => {
                    if let Some(stored) = self.rules.get_mut(&existing) {
                        stored.supported_by.push(j);
                    }
                    self.add_supports_rule_edge(j, existing);
                    log::debug!("re-derivation of existing rule: added justification");
                }
                None => {
                    if let Some(stored) = self.rules.get_mut(&existing) {
                        stored.asserted = true;
                    }
                    log::debug!("bare re-assertion of existing rule");
                }
            }
            return Ok(());
        }

        let handle = RuleHandle::new(self.next_rule_id);
        self.next_rule_id += 1;

        let asserted = justification.is_none();
        let supported_by = justification.into_iter().collect::<Vec<_>>();

        log::debug!(
            "new {} rule: {} antecedent(s) -> {}",
            if asserted { "asserted" } else { "derived" },
            rule.lhs.len(),
            rule.rhs
        );

        self.rule_index.insert(key, handle);
        self.rule_order.push(handle);
        self.rules.insert(
            handle,
            StoredRule {
                lhs: rule.lhs,
                rhs: rule.rhs,
                asserted,
                supported_by,
                supports_facts: Vec::new(),
                supports_rules: Vec::new(),
            },
        );

        if let Some(j) = justification {
            self.add_supports_rule_edge(j, handle);
        }

        let fact_handles = self.fact_order.clone();
        for fact_handle in fact_handles {
            fc_infer(self, fact_handle, handle)?;
        }

        Ok(())
    }

    fn add_supports_fact_edge(&mut self, justification: Justification, new_fact: FactHandle) {
        if let Some(f) = self.facts.get_mut(&justification.fact) {
            f.supports_facts.push(new_fact);
        }
        if let Some(r) = self.rules.get_mut(&justification.rule) {
            r.supports_facts.push(new_fact);
        }
    }

    fn add_supports_rule_edge(&mut self, justification: Justification, new_rule: RuleHandle) {
        if let Some(f) = self.facts.get_mut(&justification.fact) {
            f.supports_rules.push(new_rule);
        }
        if let Some(r) = self.rules.get_mut(&justification.rule) {
            r.supports_rules.push(new_rule);
        }
    }

    /// Accessors used only by the inference engine (`super::inference`).
    pub(crate) fn fact_statement(&self, handle: FactHandle) -> Option<Statement> {
        self.facts.get(&handle).map(|f| f.statement.clone())
    }

    pub(crate) fn rule_parts(&self, handle: RuleHandle) -> Option<(Vec<Statement>, Statement)> {
        self.rules
            .get(&handle)
            .map(|r| (r.lhs.clone(), r.rhs.clone()))
    }

    // ---------------------------------------------------------------
    // Query
    // ---------------------------------------------------------------

    /// Unify `pattern` against every stored fact, in storage order, and
    /// return the resulting bindings (§4.3.2).
    ///
    /// `pattern` must be fact-shaped (non-empty, constant predicate); if not,
    /// this returns `Err(InvalidAsk)` rather than silently returning an empty
    /// list, so the condition is visible to callers and tests alike (§7).
    pub fn ask(&self, pattern: &Statement) -> Result<Vec<BindingSet>> {
        if !pattern.is_fact_shaped() {
            log::trace!("invalid ask: {pattern} is not fact-shaped");
            return Err(KnowledgeBaseError::InvalidAsk {
                pattern: pattern.clone(),
            });
        }

        let mut results = Vec::new();
        for handle in &self.fact_order {
            let Some(stored) = self.facts.get(handle) else {
                continue;
            };
            if let Some(binding) = unify_statements(pattern, &stored.statement) {
                results.push(BindingSet {
                    binding,
                    facts: vec![stored.statement.clone()],
                });
            }
        }
        Ok(results)
    }

    // ---------------------------------------------------------------
    // Retract
    // ---------------------------------------------------------------

    /// Withdraw a fact or rule (§4.3.3). Retracting a target not currently
    /// present is a no-op (`NotPresent` is not an error — it is not surfaced
    /// at all, per §7).
    pub fn retract(&mut self, item: impl Into<Item>) {
        self.depth += 1;
        debug_assert!(self.depth <= self.config.max_recursion_depth);
        match item.into() {
            Item::Fact(fact) => {
                if let Some(&handle) = self.fact_index.get(&fact.statement) {
                    self.withdraw_fact(handle);
                }
            }
            Item::Rule(rule) => {
                let key = (rule.lhs, rule.rhs);
                if let Some(&handle) = self.rule_index.get(&key) {
                    self.withdraw_rule(handle);
                }
            }
        }
        self.depth -= 1;
    }

    /// Direct retraction of a fact the caller named explicitly: withdrawing
    /// an asserted flag is only meaningful here, at the entry point, not
    /// during cascade (a cascaded dependent is never "explicitly withdrawn",
    /// it just loses one support edge — see `maybe_cascade_fact`).
    fn withdraw_fact(&mut self, handle: FactHandle) {
        let Some(stored) = self.facts.get_mut(&handle) else {
            return;
        };
        if stored.asserted {
            stored.asserted = false;
            if !stored.supported_by.is_empty() {
                log::debug!(
                    "fact {} assertion withdrawn, but still supported; kept",
                    handle.id()
                );
                return;
            }
        }
        self.remove_fact_cascade(handle);
    }

    /// Unconditionally remove a fact and cascade the retraction to anything
    /// whose only remaining justification for it was this fact (§4.3.3 steps
    /// 2-5). Callers must have already established that the fact should in
    /// fact be removed (not asserted, or asserted with no support).
    fn remove_fact_cascade(&mut self, handle: FactHandle) {
        let Some(stored) = self.facts.remove(&handle) else {
            return;
        };
        self.fact_index.remove(&stored.statement);
        self.fact_order.retain(|h| *h != handle);
        log::debug!("retracted fact {}: {}", handle.id(), stored.statement);

        for justification in &stored.supported_by {
            self.detach_supports_fact(*justification, handle);
        }

        for dependent in stored.supports_facts {
            self.remove_fact_justifications_by_fact(dependent, handle);
            self.maybe_cascade_fact(dependent);
        }
        for dependent in stored.supports_rules {
            self.remove_rule_justifications_by_fact(dependent, handle);
            self.maybe_cascade_rule(dependent);
        }
    }

    /// Direct retraction of a rule the caller named explicitly. Asserted
    /// rules are axioms and are never removed by retraction, corrected per
    /// §9's "known source defect" note — this checks membership and the
    /// `asserted` flag on the rule itself, not on some unrelated collection.
    fn withdraw_rule(&mut self, handle: RuleHandle) {
        let Some(stored) = self.rules.get(&handle) else {
            return;
        };
        if stored.asserted {
            log::debug!("rule {} is asserted; retraction skipped (axiom)", handle.id());
            return;
        }
        self.remove_rule_cascade(handle);
    }

    fn remove_rule_cascade(&mut self, handle: RuleHandle) {
        let Some(stored) = self.rules.remove(&handle) else {
            return;
        };
        let key = (stored.lhs.clone(), stored.rhs.clone());
        self.rule_index.remove(&key);
        self.rule_order.retain(|h| *h != handle);
        log::debug!("retracted rule {}", handle.id());

        for justification in &stored.supported_by {
            self.detach_supports_rule(*justification, handle);
        }

        for dependent in stored.supports_facts {
            self.remove_fact_justifications_by_rule(dependent, handle);
            self.maybe_cascade_fact(dependent);
        }
        for dependent in stored.supports_rules {
            self.remove_rule_justifications_by_rule(dependent, handle);
            self.maybe_cascade_rule(dependent);
        }
    }

    /// After a dependent loses one justification, retract it too iff
    /// invariant 2 would otherwise be violated (not asserted, no remaining
    /// support). This is the propagation step — it never toggles `asserted`,
    /// unlike the direct-retraction entry points above.
    fn maybe_cascade_fact(&mut self, handle: FactHandle) {
        if let Some(stored) = self.facts.get(&handle) {
            if !stored.asserted && stored.supported_by.is_empty() {
                self.remove_fact_cascade(handle);
            }
        }
    }

    fn maybe_cascade_rule(&mut self, handle: RuleHandle) {
        if let Some(stored) = self.rules.get(&handle) {
            if !stored.asserted && stored.supported_by.is_empty() {
                self.remove_rule_cascade(handle);
            }
        }
    }

    fn detach_supports_fact(&mut self, justification: Justification, removed: FactHandle) {
        if let Some(f) = self.facts.get_mut(&justification.fact) {
            f.supports_facts.retain(|h| *h != removed);
        }
        if let Some(r) = self.rules.get_mut(&justification.rule) {
            r.supports_facts.retain(|h| *h != removed);
        }
    }

    fn detach_supports_rule(&mut self, justification: Justification, removed: RuleHandle) {
        if let Some(f) = self.facts.get_mut(&justification.fact) {
            f.supports_rules.retain(|h| *h != removed);
        }
        if let Some(r) = self.rules.get_mut(&justification.rule) {
            r.supports_rules.retain(|h| *h != removed);
        }
    }

    /// Strip every justification `(removed, _)` from fact `on`'s
    /// `supported_by`, and for each one removed, also detach `on` from the
    /// other half's (the rule's) forward `supports_facts` — the reverse
    /// edge must die in the same call, not in a later cascade step that may
    /// never run (that step only walks the *removed* item's own
    /// `supported_by`, which a sibling helper may have already drained).
    fn remove_fact_justifications_by_fact(&mut self, on: FactHandle, removed: FactHandle) {
        let rules: Vec<RuleHandle> = match self.facts.get(&on) {
            Some(stored) => stored
                .supported_by
                .iter()
                .filter(|j| j.fact == removed)
                .map(|j| j.rule)
                .collect(),
            None => return,
        };
        for rule in rules {
            if let Some(r) = self.rules.get_mut(&rule) {
                r.supports_facts.retain(|h| *h != on);
            }
        }
        if let Some(stored) = self.facts.get_mut(&on) {
            stored.supported_by.retain(|j| j.fact != removed);
        }
    }

    /// Symmetric to [`Self::remove_fact_justifications_by_fact`], for a
    /// dependent rule rather than a dependent fact.
    fn remove_rule_justifications_by_fact(&mut self, on: RuleHandle, removed: FactHandle) {
        let rules: Vec<RuleHandle> = match self.rules.get(&on) {
            Some(stored) => stored
                .supported_by
                .iter()
                .filter(|j| j.fact == removed)
                .map(|j| j.rule)
                .collect(),
            None => return,
        };
        for rule in rules {
            if let Some(r) = self.rules.get_mut(&rule) {
                r.supports_rules.retain(|h| *h != on);
            }
        }
        if let Some(stored) = self.rules.get_mut(&on) {
            stored.supported_by.retain(|j| j.fact != removed);
        }
    }

    /// Strip every justification `(_, removed)` from fact `on`'s
    /// `supported_by`, and for each one removed, also detach `on` from the
    /// other half's (the fact's) forward `supports_facts`. See
    /// [`Self::remove_fact_justifications_by_fact`] for why this must not be
    /// deferred.
    fn remove_fact_justifications_by_rule(&mut self, on: FactHandle, removed: RuleHandle) {
        let facts: Vec<FactHandle> = match self.facts.get(&on) {
            Some(stored) => stored
                .supported_by
                .iter()
                .filter(|j| j.rule == removed)
                .map(|j| j.fact)
                .collect(),
            None => return,
        };
        for fact in facts {
            if let Some(f) = self.facts.get_mut(&fact) {
                f.supports_facts.retain(|h| *h != on);
            }
        }
        if let Some(stored) = self.facts.get_mut(&on) {
            stored.supported_by.retain(|j| j.rule != removed);
        }
    }

    /// Symmetric to [`Self::remove_fact_justifications_by_rule`], for a
    /// dependent rule rather than a dependent fact.
    fn remove_rule_justifications_by_rule(&mut self, on: RuleHandle, removed: RuleHandle) {
        let facts: Vec<FactHandle> = match self.rules.get(&on) {
            Some(stored) => stored
                .supported_by
                .iter()
                .filter(|j| j.rule == removed)
                .map(|j| j.fact)
                .collect(),
            None => return,
        };
        for fact in facts {
            if let Some(f) = self.facts.get_mut(&fact) {
                f.supports_rules.retain(|h| *h != on);
            }
        }
        if let Some(stored) = self.rules.get_mut(&on) {
            stored.supported_by.retain(|j| j.rule != removed);
        }
    }

    // ---------------------------------------------------------------
    // Introspection (§4.3.4)
    // ---------------------------------------------------------------

    /// Read-only, storage-order snapshot of every currently-stored fact.
    pub fn facts(&self) -> Vec<FactView> {
        self.fact_order
            .iter()
            .filter_map(|h| self.facts.get(h))
            .map(|s| FactView {
                statement: s.statement.clone(),
                asserted: s.asserted,
                justification_count: s.supported_by.len(),
            })
            .collect()
    }

    /// Read-only, storage-order snapshot of every currently-stored rule.
    pub fn rules(&self) -> Vec<RuleView> {
        self.rule_order
            .iter()
            .filter_map(|h| self.rules.get(h))
            .map(|s| RuleView {
                lhs: s.lhs.clone(),
                rhs: s.rhs.clone(),
                asserted: s.asserted,
                justification_count: s.supported_by.len(),
            })
            .collect()
    }

    /// Aggregate counts, for diagnostics (never consulted by ingest/retract).
    pub fn stats(&self) -> KnowledgeBaseStats {
        let asserted_facts = self.facts.values().filter(|f| f.asserted).count();
        let asserted_rules = self.rules.values().filter(|r| r.asserted).count();
        let justification_edges = self.facts.values().map(|f| f.supported_by.len()).sum::<usize>()
            + self.rules.values().map(|r| r.supported_by.len()).sum::<usize>();

        KnowledgeBaseStats {
            total_facts: self.facts.len(),
            asserted_facts,
            derived_facts: self.facts.len() - asserted_facts,
            total_rules: self.rules.len(),
            asserted_rules,
            derived_rules: self.rules.len() - asserted_rules,
            justification_edges,
        }
    }

    /// Check invariants I1-I3 against the current state, returning a
    /// human-readable description of every violation found (empty if the KB
    /// is consistent). Intended for tests, not for production control flow.
    pub fn debug_check_invariants(&self) -> Vec<String> {
        let mut violations = Vec::new();

        // I2: support.
        for (handle, f) in &self.facts {
            if !f.asserted && f.supported_by.is_empty() {
                violations.push(format!(
                    "I2 violated: fact {} is neither asserted nor supported",
                    handle.id()
                ));
            }
        }
        for (handle, r) in &self.rules {
            if !r.asserted && r.supported_by.is_empty() {
                violations.push(format!(
                    "I2 violated: rule {} is neither asserted nor supported",
                    handle.id()
                ));
            }
        }

        // I3: edge symmetry.
        for (handle, f) in &self.facts {
            for j in &f.supported_by {
                let forward_ok_on_fact = self
                    .facts
                    .get(&j.fact)
                    .map(|jf| jf.supports_facts.contains(handle))
                    .unwrap_or(false);
                let forward_ok_on_rule = self
                    .rules
                    .get(&j.rule)
                    .map(|jr| jr.supports_facts.contains(handle))
                    .unwrap_or(false);
                if !forward_ok_on_fact || !forward_ok_on_rule {
                    violations.push(format!(
                        "I3 violated: fact {} justified by ({}, {}) lacks a matching reverse edge",
                        handle.id(),
                        j.fact.id(),
                        j.rule.id()
                    ));
                }
            }
        }
        for (handle, r) in &self.rules {
            for j in &r.supported_by {
                let forward_ok_on_fact = self
                    .facts
                    .get(&j.fact)
                    .map(|jf| jf.supports_rules.contains(handle))
                    .unwrap_or(false);
                let forward_ok_on_rule = self
                    .rules
                    .get(&j.rule)
                    .map(|jr| jr.supports_rules.contains(handle))
                    .unwrap_or(false);
                if !forward_ok_on_fact || !forward_ok_on_rule {
                    violations.push(format!(
                        "I3 violated: rule {} justified by ({}, {}) lacks a matching reverse edge",
                        handle.id(),
                        j.fact.id(),
                        j.rule.id()
                    ));
                }
            }
        }

        // I3: edge symmetry, the other direction — every forward
        // `supports_*` entry must point at a live item whose `supported_by`
        // still names this one back. A dangling forward edge (the target
        // was removed, or lost the justification, without the reverse edge
        // being cleaned up) is just as much a violation as a dangling
        // `supported_by` entry.
        for (handle, f) in &self.facts {
            for dependent in &f.supports_facts {
                let ok = self
                    .facts
                    .get(dependent)
                    .map(|df| df.supported_by.iter().any(|j| j.fact == *handle))
                    .unwrap_or(false);
                if !ok {
                    violations.push(format!(
                        "I3 violated: fact {} claims to support fact {}, which has no matching justification",
                        handle.id(),
                        dependent.id()
                    ));
                }
            }
            for dependent in &f.supports_rules {
                let ok = self
                    .rules
                    .get(dependent)
                    .map(|dr| dr.supported_by.iter().any(|j| j.fact == *handle))
                    .unwrap_or(false);
                if !ok {
                    violations.push(format!(
                        "I3 violated: fact {} claims to support rule {}, which has no matching justification",
                        handle.id(),
                        dependent.id()
                    ));
                }
            }
        }
        for (handle, r) in &self.rules {
            for dependent in &r.supports_facts {
                let ok = self
                    .facts
                    .get(dependent)
                    .map(|df| df.supported_by.iter().any(|j| j.rule == *handle))
                    .unwrap_or(false);
                if !ok {
                    violations.push(format!(
                        "I3 violated: rule {} claims to support fact {}, which has no matching justification",
                        handle.id(),
                        dependent.id()
                    ));
                }
            }
            for dependent in &r.supports_rules {
                let ok = self
                    .rules
                    .get(dependent)
                    .map(|dr| dr.supported_by.iter().any(|j| j.rule == *handle))
                    .unwrap_or(false);
                if !ok {
                    violations.push(format!(
                        "I3 violated: rule {} claims to support rule {}, which has no matching justification",
                        handle.id(),
                        dependent.id()
                    ));
                }
            }
        }

        // I1: uniqueness (the dedup indices should make this structurally
        // impossible, but we verify rather than assume).
        if self.fact_index.len() != self.facts.len() {
            violations.push("I1 violated: fact_index and fact arena sizes disagree".to_string());
        }
        if self.rule_index.len() != self.rules.len() {
            violations.push("I1 violated: rule_index and rule arena sizes disagree".to_string());
        }

        violations
    }
}
