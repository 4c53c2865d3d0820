//! # Formula syntax and compilation
//!
//! A formula is a string of single-character tokens. The recognized connectives are:
//!
//! | Symbol | Connective           | Precedence |
//! |--------|----------------------|------------|
//! | `¬`    | not                  | 1          |
//! | `∧`    | and                  | 2          |
//! | `↑`    | nand                 | 2          |
//! | `⊕`    | xor                  | 2          |
//! | `∨`    | or                   | 3          |
//! | `↓`    | nor                  | 3          |
//! | `→`    | implication          | 4          |
//! | `←`    | reverse implication  | 4          |
//! | `↔`    | bi-implication       | 5          |
//!
//! Lower precedence binds tighter. Parentheses `(` and `)` group sub-formulas, whitespace
//! is ignored and *every other character* is a variable. Variable names are therefore always
//! exactly one character long, `pq` are two variables.
//!
//! ## Compiling
//!
//! The simplest way to obtain an `Expression` is `compile` (or `Expression::from_str`):
//!
//! ```rust
//! use propositional_compiler::{compile, Expression};
//!
//! let e = compile("¬p ∨ q ∧ r").unwrap();
//! // `Display` prints the formula fully parenthesised.
//! assert_eq!("(¬p ∨ (q ∧ r))", e.to_string());
//!
//! let same: Expression = "¬p ∨ (q ∧ r)".parse().unwrap();
//! assert_eq!(e, same);
//! ```
//!
//! When several connectives share the highest precedence, the leftmost one becomes the main
//! connective. Chains of such connectives are thus grouped to the right:
//!
//! ```rust
//! use propositional_compiler::compile;
//!
//! assert_eq!("(p → (q → r))", compile("p → q → r").unwrap().to_string());
//! assert_eq!("(p ∧ (q ⊕ r))", compile("p ∧ q ⊕ r").unwrap().to_string());
//! ```
//!
//! ## Errors
//!
//! `compile` rejects unbalanced parentheses and connectives with missing operands:
//!
//! ```rust
//! use propositional_compiler::{compile, ExpressionError};
//!
//! assert_eq!(Err(ExpressionError::MismatchedParenthesis { position: 0 }), compile("(p ∧ q"));
//! assert_eq!(Err(ExpressionError::InvalidExpression), compile("p ∧"));
//! assert_eq!(Err(ExpressionError::InvalidExpression), compile(""));
//! ```
//!
//! ## Individual steps
//!
//! If you need the intermediate results, you can run each step separately. Here, `parse` is
//! more lenient than `compile`: it only checks parentheses, and missing operands stay in the
//! tree as `None` until the tree is evaluated.
//!
//! ```rust
//! use propositional_compiler::{group, lex, nodeify, parse, Expression, Token};
//!
//! let tokens = lex("(p ∧ q)");
//! assert_eq!(5, tokens.len());
//! assert_eq!(Token::LeftParen, tokens[0]);
//!
//! let tree = group(&tokens).unwrap();
//! assert_eq!(1, tree.len()); // a single parenthesised group
//! let expression = nodeify(&tree).unwrap();
//! assert!(expression.is_complete());
//!
//! let dangling = parse(&lex("p ∧")).unwrap().unwrap();
//! assert!(!dangling.is_complete());
//! assert_eq!("(p ∧ ())", dangling.to_string());
//! ```
//!
