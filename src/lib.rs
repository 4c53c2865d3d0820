//! # Propositional compiler
//!
//! This crate turns propositional formulas written with standard logical symbols into an
//! expression tree and evaluates that tree in a given assignment of truth values.
//!
//! The compilation proceeds in three steps, each available on its own:
//!
//!  - `lex` turns text into a flat vector of `Token`s.
//!  - `group` nests the tokens into a `TokenTree` according to parentheses.
//!  - `nodeify` splits every level of the tree at its *main connective* (the operator with the
//!    highest precedence value), producing an `Expression`.
//!
//! The `parse` and `compile` functions compose these steps. An `Expression` can be evaluated
//! repeatedly (and from multiple threads) using `Expression::result`.
//!
//! Recognized symbols are `¬` (not), `∧` (and), `∨` (or), `⊕` (xor), `↑` (nand), `↓` (nor),
//! `→` (implication), `←` (reverse implication) and `↔` (bi-implication). Parentheses group
//! sub-formulas, whitespace is ignored and any other character is a variable name.
//!
//! ```rust
//! use propositional_compiler::*;
//!
//! let formula = compile("(p ∨ q) ∧ ¬r").unwrap();
//! let assignment = Assignment::from_values(&[('p', true), ('q', false), ('r', false)]);
//! assert_eq!(Ok(true), formula.result(&assignment));
//!
//! // Missing variables are reported instead of silently treated as false.
//! let partial = Assignment::from_values(&[('p', true)]);
//! assert_eq!(Err(ExpressionError::UnknownVariable('q')), formula.result(&partial));
//!
//! // Every assignment of the formula's variables:
//! let table = formula.truth_table().unwrap();
//! assert_eq!(8, table.num_rows());
//! assert!(!formula.is_tautology().unwrap());
//! ```
//!
//! More examples can be found in the [tutorial module](./tutorial/index.html).

use fxhash::FxHashMap;

pub mod tutorial;

/// **(internal)** Operator precedence, symbols and the semantics of binary connectives.
mod _impl_operator;

/// **(internal)** Implementation of the `Token` and the lexer.
mod _impl_token;

/// **(internal)** Grouping of tokens into a `TokenTree` according to parentheses.
mod _impl_token_tree;

/// **(internal)** The precedence parser which turns a `TokenTree` into an `Expression`.
mod _impl_parser;

/// **(internal)** Evaluation and other utility methods of the `Expression`.
mod _impl_expression;

/// **(internal)** Implementation of the `Assignment`.
mod _impl_assignment;

/// **(internal)** Implementation of the `AssignmentIterator`.
mod _impl_assignment_iterator;

/// **(internal)** Implementation of the `TruthTable`.
mod _impl_truth_table;

/// **(internal)** Implementation of the `ExpressionError`.
mod _impl_expression_error;

/// **(internal)** A macro module for writing expression trees directly in Rust.
mod _macro_expr;

/// **(internal)** Logical laws and fuzzing scenarios for the whole pipeline.
#[cfg(test)]
mod _test_expression;


pub use _impl_parser::{compile, nodeify, parse};
pub use _impl_token::lex;
pub use _impl_token_tree::group;

/// A connective with exactly one operand.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum UnaryOperator {
    Not, // '¬'
}

/// A connective with exactly two operands.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BinaryOperator {
    And,                // '∧'
    Or,                 // '∨'
    Xor,                // '⊕'
    Nor,                // '↓'
    Nand,               // '↑'
    Implication,        // '→'
    ReverseImplication, // '←'
    BiImplication,      // '↔'
}

/// Tokens produced by the lexer. A vector of tokens has no inherent nesting, see `TokenTree`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Token {
    Variable(char),
    UnaryOperator(UnaryOperator),
    BinaryOperator(BinaryOperator),
    LeftParen,
    RightParen,
}

/// Tokens nested according to parentheses. Parenthesis tokens themselves are consumed
/// by the grouping and never appear in a `TokenTree`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TokenTree {
    Token(Token),
    Group(Vec<TokenTree>), // A block of tokens inside parentheses
}

/// An operand of a connective. `None` means the operand could not be parsed
/// (for example, `p ∧` has no right operand).
pub type Operand = Option<Box<Expression>>;

/// Recursive type for the propositional expression tree.
///
/// The tree can be incomplete (some operands are `None`) when created by `parse` or
/// `nodeify`. Evaluating such tree fails with `ExpressionError::InvalidExpression`.
/// Trees created by `compile` are always complete.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Expression {
    Variable(char),
    Unary(UnaryOperator, Operand),
    Binary(BinaryOperator, Operand, Operand),
}

/// Assigns truth values to variables. An `Expression` is evaluated in an assignment, but it
/// never stores or modifies it, so one expression can be evaluated in many assignments.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Assignment(FxHashMap<char, bool>);

/// Exhaustively iterates over all assignments of the given variables.
///
/// Be aware of the exponential time complexity of such operation!
#[derive(Clone, Debug)]
pub struct AssignmentIterator {
    variables: Vec<char>,
    next_values: Option<Vec<bool>>,
}

/// The value of an expression in every assignment of its variables.
///
/// Each row contains the values of `variables` (in the same order) and the result
/// of the expression.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TruthTable {
    variables: Vec<char>,
    rows: Vec<(Vec<bool>, bool)>,
}

/// Errors reported while compiling or evaluating an expression.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ExpressionError {
    /// A connective is missing an operand (for example `p ∧` or `∨ q`), or `compile` found
    /// an operand it cannot attach to any connective (for example `p ¬q`).
    InvalidExpression,
    /// A `)` without a matching `(`, or a `(` which is never closed.
    MismatchedParenthesis {
        /// Index of the offending parenthesis in the token vector.
        position: usize,
    },
    /// The assignment does not contain a value of the variable.
    UnknownVariable(char),
}
