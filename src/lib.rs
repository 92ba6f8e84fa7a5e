//! # horn-kb
//!
//! A forward-chaining knowledge base for a function-free Horn-clause
//! fragment: ground facts, `if`-`then` rules over variables, unification-
//! driven inference, and a truth maintenance system that retracts derived
//! facts and rules once nothing justifies them anymore.
//!
//! ## Scope
//!
//! - **Facts** are ground (variable-free) statements: a predicate symbol
//!   followed by constant arguments, e.g. `(isa cube block)`.
//! - **Rules** are a non-empty conjunctive antecedent over variables plus a
//!   single consequent, e.g. `(isa ?x block) -> (movable ?x)`.
//! - Unification is restricted to constants and variables — there are no
//!   function symbols, so no occurs-check is needed.
//! - Every derived fact or rule carries the justification(s) that produced
//!   it; retracting a fact or rule cascades to anything that depended on it
//!   alone, and nothing is ever both derived and unsupported.
//!
//! Negation, disjunction, equality, arithmetic, and backward chaining are
//! out of scope for this crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use horn_kb::{Fact, KnowledgeBase, Rule, Statement, Term};
//!
//! fn main() -> horn_kb::Result<()> {
//!     let mut kb = KnowledgeBase::new();
//!
//!     let isa = |x: &str, y: &str| Statement::new(vec![
//!         Term::constant("isa"),
//!         Term::constant(x),
//!         Term::constant(y),
//!     ]);
//!
//!     // (isa ?x block) -> (movable ?x)
//!     kb.add(Rule::new(
//!         vec![Statement::new(vec![
//!             Term::constant("isa"),
//!             Term::variable("x"),
//!             Term::constant("block"),
//!         ])],
//!         Statement::new(vec![Term::constant("movable"), Term::variable("x")]),
//!     ))?;
//!
//!     kb.add(Fact::new(isa("cube", "block")))?;
//!
//!     let query = Statement::new(vec![Term::constant("movable"), Term::variable("what")]);
//!     let answers = kb.ask(&query)?;
//!     assert_eq!(answers.len(), 1);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Core Components
//!
//! - [`Term`] / [`Statement`]: the term and statement types.
//! - [`Binding`]: a variable-to-term substitution produced by unification.
//! - [`unify::unify_statements`]: most-general unification over this fragment.
//! - [`KnowledgeBase`]: ingest (`add`/`assert`), query (`ask`), and
//!   dependency-propagating retraction (`retract`).
//! - [`KnowledgeBaseError`]: the typed error surface.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Variable bindings produced by unification and queries
pub mod binding;
/// Knowledge base engine: facts, rules, justifications, and inference
pub mod engine;
/// Error types and the crate's `Result` alias
pub mod errors;
/// Terms and statements
pub mod term;
/// Unification over function-free terms
pub mod unify;

pub use binding::{Binding, BindingSet, ListOfBindings};
pub use engine::{
    Fact, FactHandle, FactView, Item, Justification, KnowledgeBase, KnowledgeBaseConfig,
    KnowledgeBaseStats, Rule, RuleHandle, RuleView,
};
pub use errors::{KnowledgeBaseError, Result};
pub use term::{Statement, Term};
