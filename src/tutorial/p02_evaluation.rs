//! # Evaluating expressions
//!
//! An `Expression` is evaluated in an `Assignment` of truth values. The expression never
//! stores or modifies the assignment, so it can be evaluated as many times as needed:
//!
//! ```rust
//! use propositional_compiler::{compile, Assignment};
//!
//! let e = compile("p ⊕ q").unwrap();
//! let mut assignment = Assignment::from_values(&[('p', true), ('q', false)]);
//! assert_eq!(Ok(true), e.result(&assignment));
//!
//! assignment.set_value('q', true);
//! assert_eq!(Ok(false), e.result(&assignment));
//! ```
//!
//! Every variable of the expression needs a value. Otherwise, the evaluation fails:
//!
//! ```rust
//! use propositional_compiler::{compile, Assignment, ExpressionError};
//!
//! let e = compile("p ∨ q").unwrap();
//! let assignment = Assignment::from_values(&[('p', true)]);
//! assert_eq!(Err(ExpressionError::UnknownVariable('q')), e.result(&assignment));
//! ```
//!
//! ## All assignments
//!
//! `AssignmentIterator` visits every assignment of a list of variables in the usual truth
//! table order, and `TruthTable` collects the results of an expression:
//!
//! ```rust
//! use propositional_compiler::{compile, AssignmentIterator};
//!
//! let e = compile("p ↓ q").unwrap();
//! assert_eq!(vec!['p', 'q'], e.variables());
//! assert_eq!(4, AssignmentIterator::new(e.variables()).count());
//!
//! let table = e.truth_table().unwrap();
//! for (values, result) in table.rows() {
//!     assert_eq!(!(values[0] || values[1]), *result);
//! }
//!
//! assert_eq!(Ok(true), compile("(p → q) ↔ (¬p ∨ q)").unwrap().is_tautology());
//! assert_eq!(Ok(false), compile("p ∧ ¬p").unwrap().is_satisfiable());
//! ```
//!
//! Expressions are immutable, so one expression can also be evaluated from multiple threads
//! at the same time:
//!
//! ```rust
//! use propositional_compiler::{compile, AssignmentIterator};
//! use std::thread;
//!
//! let e = compile("(p ∧ q) → r").unwrap();
//! let results: Vec<bool> = thread::scope(|scope| {
//!     let e = &e;
//!     let handles: Vec<_> = AssignmentIterator::new(e.variables())
//!         .map(|assignment| scope.spawn(move || e.result(&assignment).unwrap()))
//!         .collect();
//!     handles.into_iter().map(|h| h.join().unwrap()).collect()
//! });
//! assert_eq!(7, results.iter().filter(|it| **it).count());
//! ```
//!
