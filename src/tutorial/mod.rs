//! This is a documentation-only module with several sub-modules describing how to use
//! this crate.
//!
//! Table of contents:
//!  - [Formula syntax and compilation](./p01_formula_syntax/index.html)
//!  - [Evaluating expressions](./p02_evaluation/index.html)
//!

pub mod p01_formula_syntax;
pub mod p02_evaluation;
