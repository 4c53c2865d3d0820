use crate::_test_util::{assert_equivalent, eval_all, mk_assignment};
use crate::*;
use std::thread;

#[test]
fn expression_double_negation() {
    assert_equivalent("¬¬p", "p", &['p']);
    assert_equivalent("¬¬¬p", "¬p", &['p']);
}

#[test]
fn expression_commutativity() {
    for op in &["∧", "∨", "⊕", "↑", "↓", "↔"] {
        assert_equivalent(
            &format!("p {} q", op),
            &format!("q {} p", op),
            &['p', 'q'],
        );
    }
}

#[test]
fn expression_non_commutative_implication() {
    assert_ne!(eval_all("p → q", &['p', 'q']), eval_all("q → p", &['p', 'q']));
    assert_equivalent("p ← q", "q → p", &['p', 'q']);
}

#[test]
fn expression_connective_identities() {
    let vars = ['p', 'q'];
    assert_equivalent("p → q", "¬p ∨ q", &vars);
    assert_equivalent("p ← q", "p ∨ ¬q", &vars);
    assert_equivalent("p ↑ q", "¬(p ∧ q)", &vars);
    assert_equivalent("p ↓ q", "¬(p ∨ q)", &vars);
    assert_equivalent("p ⊕ q", "¬(p ↔ q)", &vars);
    assert_equivalent("p ↔ q", "(p → q) ∧ (q → p)", &vars);
    assert_equivalent("¬(p ∧ q)", "¬p ∨ ¬q", &vars);
    assert_equivalent("¬(p ∨ q)", "¬p ∧ ¬q", &vars);
}

#[test]
fn expression_parentheses_change_grouping() {
    let assignment = mk_assignment(&[('p', true), ('q', false), ('r', false)]);
    assert_eq!(Ok(false), compile("(p ∨ q) ∧ r").unwrap().result(&assignment));
    assert_eq!(Ok(true), compile("p ∨ (q ∧ r)").unwrap().result(&assignment));
}

#[test]
fn expression_precedence_without_parentheses() {
    let vars = ['p', 'q', 'r'];
    assert_equivalent("p ∨ q ∧ r", "p ∨ (q ∧ r)", &vars);
    assert_equivalent("¬p ∧ q", "(¬p) ∧ q", &vars);
    assert_equivalent("p → q ∨ r", "p → (q ∨ r)", &vars);
    assert_equivalent("p ↔ q → r", "p ↔ (q → r)", &vars);
}

#[test]
fn expression_implication_chain_groups_right() {
    // (p → q) → r and p → (q → r) differ for p = 0, r = 0.
    let vars = ['p', 'q', 'r'];
    assert_equivalent("p → q → r", "p → (q → r)", &vars);
    assert_ne!(eval_all("p → q → r", &vars), eval_all("(p → q) → r", &vars));
    let assignment = mk_assignment(&[('p', false), ('q', false), ('r', false)]);
    assert_eq!(Ok(true), compile("p → q → r").unwrap().result(&assignment));
}

#[test]
fn expression_mixed_chain_groups_right() {
    // `∧` and `⊕` share precedence, so the leftmost one is the main connective.
    let vars = ['p', 'q', 'r'];
    assert_equivalent("p ∧ q ⊕ r", "p ∧ (q ⊕ r)", &vars);
    assert_ne!(eval_all("p ∧ q ⊕ r", &vars), eval_all("(p ∧ q) ⊕ r", &vars));
    assert_equivalent("p ↓ q ∨ r", "p ↓ (q ∨ r)", &vars);
    assert_equivalent("p ↑ q ↑ r", "p ↑ (q ↑ r)", &vars);
}

#[test]
fn expression_no_cross_contamination() {
    let e = compile("p ∧ q").unwrap();
    let copy = e.clone();
    let all_true = mk_assignment(&[('p', true), ('q', true)]);
    let all_false = mk_assignment(&[('p', false), ('q', false)]);
    assert_eq!(Ok(true), e.result(&all_true));
    assert_eq!(Ok(false), e.result(&all_false));
    assert_eq!(Ok(true), e.result(&all_true));
    assert_eq!(copy, e);
    // The assignment is not modified either.
    assert_eq!(mk_assignment(&[('p', true), ('q', true)]), all_true);
}

#[test]
fn expression_empty_operand_in_any_connective() {
    let assignment = mk_assignment(&[('p', true)]);
    assert!(lex("").is_empty());
    assert_eq!(Ok(None), parse(&lex("")));
    for op in BinaryOperator::ALL.iter() {
        let left = Expression::Binary(*op, None, Some(Box::new(Expression::mk_var('p'))));
        let right = Expression::Binary(*op, Some(Box::new(Expression::mk_var('p'))), None);
        assert_eq!(Err(ExpressionError::InvalidExpression), left.result(&assignment));
        assert_eq!(Err(ExpressionError::InvalidExpression), right.result(&assignment));
    }
    let not = Expression::Unary(UnaryOperator::Not, None);
    assert_eq!(Err(ExpressionError::InvalidExpression), not.result(&assignment));
}

#[test]
fn expression_mismatched_parentheses() {
    for text in &["(p", "p)", "((p)", "(p))", ")p(", "p ∧ (q ∨ r"] {
        assert!(
            matches!(
                parse(&lex(text)),
                Err(ExpressionError::MismatchedParenthesis { .. })
            ),
            "{}",
            text
        );
    }
}

#[test]
fn expression_parallel_evaluation() {
    let e = compile("(p ↔ q) ⊕ (r ↑ s)").unwrap();
    let expected = e.truth_table().unwrap();
    let variables = e.variables();
    let assignments: Vec<Assignment> = AssignmentIterator::new(variables).collect();
    let shared = &e;
    let results: Vec<bool> = thread::scope(|scope| {
        let handles: Vec<_> = assignments
            .iter()
            .map(|assignment| scope.spawn(move || shared.result(assignment).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    let expected: Vec<bool> = expected.rows().iter().map(|(_, r)| *r).collect();
    assert_eq!(expected, results);
}
