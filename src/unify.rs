//! Most-general unification restricted to the function-free Horn-clause
//! fragment, grounded on the teacher engine's `backward::unification::Unifier`
//! but simplified: there are no comparisons, boolean connectives, or field
//! lookups to unify over here, only `Term`s.

use crate::binding::Binding;
use crate::term::{Statement, Term};

/// Attempt to unify two statements, accumulating bindings left to right.
///
/// Returns `None` if the statements have different lengths, if their
/// predicate symbols (first terms) are both constants and differ, or if
/// unification of any later term pair fails. Never mutates its inputs.
///
/// No occurs-check is performed: the fragment has no function symbols, so a
/// variable can never be bound to a term that contains it.
pub fn unify_statements(s1: &Statement, s2: &Statement) -> Option<Binding> {
    if s1.len() != s2.len() {
        return None;
    }

    if let (Some(Term::Constant(p1)), Some(Term::Constant(p2))) = (s1.predicate(), s2.predicate())
    {
        if p1 != p2 {
            return None;
        }
    }

    let mut theta = Binding::new();
    for (t1, t2) in s1.terms().iter().zip(s2.terms().iter()) {
        if !unify_terms(t1, t2, &mut theta) {
            return None;
        }
    }
    Some(theta)
}

fn unify_terms(t1: &Term, t2: &Term, theta: &mut Binding) -> bool {
    match (t1, t2) {
        (Term::Constant(a), Term::Constant(b)) => a == b,
        // Variable on the left (including var vs var: bind left to right).
        (Term::Variable(var), other) => bind_var(var, other, theta),
        // Variable on the right, constant on the left.
        (other, Term::Variable(var)) => bind_var(var, other, theta),
    }
}

/// Bind `var` to `term` in `theta`, or — if already bound — require the
/// existing binding to equal `term`.
fn bind_var(var: &str, term: &Term, theta: &mut Binding) -> bool {
    match theta.get(var) {
        Some(bound) => bound == term,
        None => {
            theta.insert(var.to_string(), term.clone());
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(name: &str) -> Term {
        Term::constant(name)
    }

    fn v(name: &str) -> Term {
        Term::variable(name)
    }

    #[test]
    fn const_vs_const_same_succeeds() {
        let s1 = Statement::new(vec![c("isa"), c("cube"), c("block")]);
        let s2 = Statement::new(vec![c("isa"), c("cube"), c("block")]);
        assert!(unify_statements(&s1, &s2).is_some());
    }

    #[test]
    fn const_vs_const_different_fails() {
        let s1 = Statement::new(vec![c("isa"), c("cube"), c("block")]);
        let s2 = Statement::new(vec![c("isa"), c("pyramid"), c("block")]);
        assert!(unify_statements(&s1, &s2).is_none());
    }

    #[test]
    fn different_predicates_fail() {
        let s1 = Statement::new(vec![c("isa"), c("cube"), c("block")]);
        let s2 = Statement::new(vec![c("likes"), c("cube"), c("block")]);
        assert!(unify_statements(&s1, &s2).is_none());
    }

    #[test]
    fn different_length_fails() {
        let s1 = Statement::new(vec![c("isa"), c("cube")]);
        let s2 = Statement::new(vec![c("isa"), c("cube"), c("block")]);
        assert!(unify_statements(&s1, &s2).is_none());
    }

    #[test]
    fn var_binds_to_constant() {
        let pattern = Statement::new(vec![c("isa"), v("x"), c("block")]);
        let fact = Statement::new(vec![c("isa"), c("cube"), c("block")]);
        let theta = unify_statements(&pattern, &fact).unwrap();
        assert_eq!(theta.get("x"), Some(&c("cube")));
    }

    #[test]
    fn repeated_variable_must_agree() {
        let pattern = Statement::new(vec![c("same"), v("x"), v("x")]);
        let ok = Statement::new(vec![c("same"), c("a"), c("a")]);
        let bad = Statement::new(vec![c("same"), c("a"), c("b")]);

        assert!(unify_statements(&pattern, &ok).is_some());
        assert!(unify_statements(&pattern, &bad).is_none());
    }

    #[test]
    fn var_vs_var_binds_left_to_right() {
        let s1 = Statement::new(vec![c("p"), v("x")]);
        let s2 = Statement::new(vec![c("p"), v("y")]);
        let theta = unify_statements(&s1, &s2).unwrap();
        assert_eq!(theta.get("x"), Some(&v("y")));
    }

    #[test]
    fn two_statement_query_grandparent_style() {
        // (parent ?x ?y) unified against (parent a b)
        let pattern = Statement::new(vec![c("parent"), v("x"), v("y")]);
        let fact = Statement::new(vec![c("parent"), c("a"), c("b")]);
        let theta = unify_statements(&pattern, &fact).unwrap();
        assert_eq!(theta.get("x"), Some(&c("a")));
        assert_eq!(theta.get("y"), Some(&c("b")));
    }

    #[test]
    fn unify_never_mutates_inputs() {
        let s1 = Statement::new(vec![c("isa"), v("x"), c("block")]);
        let s2 = Statement::new(vec![c("isa"), c("cube"), c("block")]);
        let before1 = s1.clone();
        let before2 = s2.clone();
        let _ = unify_statements(&s1, &s2);
        assert_eq!(s1, before1);
        assert_eq!(s2, before2);
    }
}
