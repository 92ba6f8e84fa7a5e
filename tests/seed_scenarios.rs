/// Integration tests for the six literal seed scenarios.

use horn_kb::{Fact, KnowledgeBase, Rule, Statement, Term};

fn c(name: &str) -> Term {
    Term::constant(name)
}

fn v(name: &str) -> Term {
    Term::variable(name)
}

fn stmt(terms: Vec<Term>) -> Statement {
    Statement::new(terms)
}

#[test]
fn scenario_1_movable_blocks() {
    let mut kb = KnowledgeBase::new();

    kb.add(Fact::new(stmt(vec![c("isa"), c("cube"), c("block")])))
        .unwrap();
    kb.add(Fact::new(stmt(vec![c("isa"), c("pyramid"), c("block")])))
        .unwrap();
    kb.add(Rule::new(
        vec![stmt(vec![c("isa"), v("x"), c("block")])],
        stmt(vec![c("movable"), v("x")]),
    ))
    .unwrap();

    let answers = kb.ask(&stmt(vec![c("movable"), v("x")])).unwrap();
    assert_eq!(answers.len(), 2);

    let bound: Vec<&Term> = answers.iter().map(|b| b.binding.get("x").unwrap()).collect();
    assert!(bound.contains(&&c("cube")));
    assert!(bound.contains(&&c("pyramid")));
}

#[test]
fn scenario_2_retract_cube_keeps_pyramid() {
    let mut kb = KnowledgeBase::new();

    kb.add(Fact::new(stmt(vec![c("isa"), c("cube"), c("block")])))
        .unwrap();
    kb.add(Fact::new(stmt(vec![c("isa"), c("pyramid"), c("block")])))
        .unwrap();
    kb.add(Rule::new(
        vec![stmt(vec![c("isa"), v("x"), c("block")])],
        stmt(vec![c("movable"), v("x")]),
    ))
    .unwrap();

    kb.retract(Fact::new(stmt(vec![c("isa"), c("cube"), c("block")])));

    let answers = kb.ask(&stmt(vec![c("movable"), v("x")])).unwrap();
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].binding.get("x"), Some(&c("pyramid")));
}

#[test]
fn scenario_3_grandparent_via_two_antecedents() {
    let mut kb = KnowledgeBase::new();

    kb.add(Rule::new(
        vec![
            stmt(vec![c("parent"), v("x"), v("y")]),
            stmt(vec![c("parent"), v("y"), v("z")]),
        ],
        stmt(vec![c("grandparent"), v("x"), v("z")]),
    ))
    .unwrap();
    kb.add(Fact::new(stmt(vec![c("parent"), c("a"), c("b")])))
        .unwrap();
    kb.add(Fact::new(stmt(vec![c("parent"), c("b"), c("c")])))
        .unwrap();

    let answers = kb
        .ask(&stmt(vec![c("grandparent"), v("x"), v("z")]))
        .unwrap();
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].binding.get("x"), Some(&c("a")));
    assert_eq!(answers[0].binding.get("z"), Some(&c("c")));
}

#[test]
fn scenario_4_reassert_derived_fact_survives_one_support_loss() {
    let mut kb = KnowledgeBase::new();

    kb.add(Rule::new(
        vec![stmt(vec![c("isa"), v("x"), c("block")])],
        stmt(vec![c("movable"), v("x")]),
    ))
    .unwrap();
    kb.add(Fact::new(stmt(vec![c("isa"), c("cube"), c("block")])))
        .unwrap();

    // (movable cube) is currently derived, with one justification.
    let movable = stmt(vec![c("movable"), c("cube")]);
    let before = kb
        .facts()
        .into_iter()
        .find(|f| f.statement == movable)
        .unwrap();
    assert!(!before.asserted);
    assert_eq!(before.justification_count, 1);

    // Re-assert it directly.
    kb.add(Fact::new(movable.clone())).unwrap();
    let after = kb
        .facts()
        .into_iter()
        .find(|f| f.statement == movable)
        .unwrap();
    assert!(after.asserted);

    // Retracting the sole supporting derivation must not remove it: it is
    // now independently asserted.
    kb.retract(Fact::new(stmt(vec![c("isa"), c("cube"), c("block")])));
    assert!(kb.facts().iter().any(|f| f.statement == movable));
}

#[test]
fn scenario_5_two_independent_supports_both_must_be_removed() {
    let mut kb = KnowledgeBase::new();

    // Two distinct rules deriving the same consequent `(safe x)` from the
    // same fact `(isa x block)`, via two distinct antecedent predicates that
    // both hold for `x`.
    kb.add(Rule::new(
        vec![stmt(vec![c("isa"), v("x"), c("block")])],
        stmt(vec![c("safe"), v("x")]),
    ))
    .unwrap();
    kb.add(Rule::new(
        vec![stmt(vec![c("solid"), v("x")])],
        stmt(vec![c("safe"), v("x")]),
    ))
    .unwrap();
    kb.add(Fact::new(stmt(vec![c("isa"), c("cube"), c("block")])))
        .unwrap();
    kb.add(Fact::new(stmt(vec![c("solid"), c("cube")])))
        .unwrap();

    let safe = stmt(vec![c("safe"), c("cube")]);
    let stored = kb.facts().into_iter().find(|f| f.statement == safe).unwrap();
    assert_eq!(stored.justification_count, 2);

    kb.retract(Fact::new(stmt(vec![c("isa"), c("cube"), c("block")])));
    assert!(kb.facts().iter().any(|f| f.statement == safe), "one remaining support keeps it");

    kb.retract(Fact::new(stmt(vec![c("solid"), c("cube")])));
    assert!(!kb.facts().iter().any(|f| f.statement == safe), "no remaining support removes it");
}

#[test]
fn scenario_6_non_ground_fact_rejected() {
    let mut kb = KnowledgeBase::new();
    let result = kb.add(Fact::new(stmt(vec![c("isa"), v("x"), c("block")])));
    assert!(result.is_err());
    assert_eq!(kb.facts().len(), 0);
}
