//! Variable bindings produced by unification and queries.

use crate::term::{Statement, Term};
use std::collections::HashMap;

/// A mapping from variable name to the term it is bound to.
///
/// Follows the teacher engine's `Bindings` (see `backward::unification`):
/// a thin `HashMap` wrapper rather than an association list, because
/// variable names are the natural key and lookups dominate construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Binding {
    map: HashMap<String, Term>,
}

impl Binding {
    /// An empty binding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the term a variable is bound to, if any.
    pub fn get(&self, var: &str) -> Option<&Term> {
        self.map.get(var)
    }

    /// True iff the variable has a binding.
    pub fn contains(&self, var: &str) -> bool {
        self.map.contains_key(var)
    }

    /// Extend the binding with `var ↦ term`.
    ///
    /// Callers (the unifier) are responsible for checking `var` is not
    /// already bound to something else; `Binding` itself does not reject
    /// overwrites, since the unifier's left-to-right walk already
    /// guarantees it never calls this after finding a conflicting entry.
    pub fn insert(&mut self, var: String, term: Term) {
        self.map.insert(var, term);
    }

    /// Number of bound variables.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True iff no variable is bound.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over `(variable, term)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Term)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Substitute every variable in `stmt` that is bound in `theta` with its
/// bound term; variables absent from `theta` are left untouched.
///
/// Pure and total: never mutates `stmt` or `theta`. Because the fragment is
/// function-free, a single linear pass over the term list suffices — there
/// is nothing to recurse into.
pub fn instantiate(stmt: &Statement, theta: &Binding) -> Statement {
    let terms = stmt
        .terms()
        .iter()
        .map(|term| match term {
            Term::Variable(name) => theta.get(name).cloned().unwrap_or_else(|| term.clone()),
            Term::Constant(_) => term.clone(),
        })
        .collect();
    Statement::new(terms)
}

/// One binding map paired with the facts it was derived against — in this
/// fragment, always the single witness fact matched during a query.
#[derive(Debug, Clone)]
pub struct BindingSet {
    /// The variable bindings.
    pub binding: Binding,
    /// The fact(s) the binding was derived against.
    pub facts: Vec<Statement>,
}

/// An ordered collection of [`BindingSet`]s, returned by
/// [`crate::engine::knowledge_base::KnowledgeBase::ask`].
pub type ListOfBindings = Vec<BindingSet>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Term;

    fn c(name: &str) -> Term {
        Term::constant(name)
    }

    fn v(name: &str) -> Term {
        Term::variable(name)
    }

    #[test]
    fn instantiate_replaces_bound_variables_only() {
        let stmt = Statement::new(vec![c("movable"), v("x"), v("y")]);
        let mut theta = Binding::new();
        theta.insert("x".to_string(), c("cube"));

        let result = instantiate(&stmt, &theta);
        assert_eq!(
            result,
            Statement::new(vec![c("movable"), c("cube"), v("y")])
        );
    }

    #[test]
    fn instantiate_is_pure() {
        let stmt = Statement::new(vec![c("p"), v("x")]);
        let mut theta = Binding::new();
        theta.insert("x".to_string(), c("a"));

        let before = stmt.clone();
        let _ = instantiate(&stmt, &theta);
        assert_eq!(stmt, before);
    }

    #[test]
    fn instantiate_on_ground_statement_is_identity() {
        let stmt = Statement::new(vec![c("isa"), c("cube"), c("block")]);
        let theta = Binding::new();
        assert_eq!(instantiate(&stmt, &theta), stmt);
    }
}
