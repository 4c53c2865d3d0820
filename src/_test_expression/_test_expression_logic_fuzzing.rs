//!
//! Here, we have a small toolbox for fuzzing the whole compiler pipeline.
//! It allows us to create a random binary tree of operations, where
//! each leaf is a random variable and each tree node represents one
//! binary boolean operation, possibly negated.
//!
//! Each tree is printed as a fully parenthesised formula, compiled back and
//! the resulting `Expression` is checked both structurally and by exhaustively
//! comparing its value with a reference evaluation of the tree. To get
//! predictable test cases, we use a predefined set of randomness seeds.

use crate::*;
use rand::prelude::StdRng;
use rand::{RngCore, SeedableRng};

const VARIABLES: [char; 5] = ['p', 'q', 'r', 's', 't'];

#[derive(Debug)]
enum OpTree {
    Leaf(char),
    Node {
        op: BinaryOperator,
        negate: bool,
        left: Box<OpTree>,
        right: Box<OpTree>,
    },
}

impl OpTree {
    /// Create a new random tree with the given `height` (number of operator levels).
    fn new_random(height: u8, rand: &mut StdRng) -> OpTree {
        if height == 0 {
            let id = rand.next_u32() as usize % VARIABLES.len();
            return OpTree::Leaf(VARIABLES[id]);
        }
        let op = BinaryOperator::ALL[rand.next_u32() as usize % BinaryOperator::ALL.len()];
        let negate = rand.next_u32() % 2 == 0;
        // Make the tree irregular by sometimes cutting a branch short.
        let left_height = if rand.next_u32() % 4 == 0 { 0 } else { height - 1 };
        OpTree::Node {
            op,
            negate,
            left: Box::new(OpTree::new_random(left_height, rand)),
            right: Box::new(OpTree::new_random(height - 1, rand)),
        }
    }

    /// Print this tree as a formula. Every binary operation is enclosed in parentheses.
    fn to_formula(&self) -> String {
        match self {
            OpTree::Leaf(name) => name.to_string(),
            OpTree::Node {
                op,
                negate,
                left,
                right,
            } => {
                let formula = format!(
                    "({} {} {})",
                    left.to_formula(),
                    op.symbol(),
                    right.to_formula()
                );
                if *negate {
                    format!("¬{}", formula)
                } else {
                    formula
                }
            }
        }
    }

    /// Evaluate this tree in the given assignment, independently of `Expression`.
    fn eval_in(&self, assignment: &Assignment) -> bool {
        match self {
            OpTree::Leaf(name) => assignment.get_value(*name).unwrap(),
            OpTree::Node {
                op,
                negate,
                left,
                right,
            } => {
                let a = left.eval_in(assignment);
                let b = right.eval_in(assignment);
                let result = match op {
                    BinaryOperator::And => a && b,
                    BinaryOperator::Or => a || b,
                    BinaryOperator::Xor => a ^ b,
                    BinaryOperator::Nor => !(a || b),
                    BinaryOperator::Nand => !(a && b),
                    BinaryOperator::Implication => (!a) || b,
                    BinaryOperator::ReverseImplication => a || (!b),
                    BinaryOperator::BiImplication => a == b,
                };
                result != *negate
            }
        }
    }
}

fn fuzz_test(height: u8, seed: u64) {
    let mut rand = StdRng::seed_from_u64(seed);
    let tree = OpTree::new_random(height, &mut rand);
    let formula = tree.to_formula();
    let expression = compile(&formula).unwrap();

    // Printing is the inverse of compiling for trees without missing operands.
    assert_eq!(formula, expression.to_string());
    assert_eq!(Ok(expression.clone()), compile(&expression.to_string()));

    for assignment in AssignmentIterator::new(VARIABLES.to_vec()) {
        assert_eq!(
            Ok(tree.eval_in(&assignment)),
            expression.result(&assignment),
            "{} in {}",
            formula,
            assignment
        );
    }
}

#[test]
fn fuzz_small() {
    for seed in 0..100 {
        fuzz_test(2, seed);
    }
}

#[test]
fn fuzz_medium() {
    for seed in 0..50 {
        fuzz_test(4, seed);
    }
}

#[test]
fn fuzz_large() {
    for seed in 0..10 {
        fuzz_test(7, seed);
    }
}

#[test]
fn fuzz_whitespace_is_irrelevant() {
    for seed in 0..20 {
        let mut rand = StdRng::seed_from_u64(seed);
        let formula = OpTree::new_random(3, &mut rand).to_formula();
        let compact: String = formula.chars().filter(|c| !c.is_whitespace()).collect();
        let spread: String = formula.chars().flat_map(|c| vec![c, ' ', '\t']).collect();
        assert_eq!(compile(&formula), compile(&compact));
        assert_eq!(compile(&formula), compile(&spread));
    }
}
