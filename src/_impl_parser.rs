//!
//! Expression parsing proceeds recursively by splitting a token tree at its *main connective*:
//! the operator with the highest precedence value in the root of the tree (operators nested in
//! parentheses are not considered). If several operators share the highest value, the leftmost
//! one wins. Binary operators take the parts to their left and right as operands, `¬` takes
//! the part to its right. Hence chains of operators with equal precedence group to the right:
//! `p ∧ q ∧ r` is parsed as `p ∧ (q ∧ r)`.

use crate::{
    group, lex, BinaryOperator, Expression, ExpressionError, Token, TokenTree, UnaryOperator,
};

/// Takes a `&str` and turns it into a complete `Expression`.
///
/// In addition to the parenthesis checks performed by `parse`, this fails with
/// `ExpressionError::InvalidExpression` when the formula is empty, some connective
/// is missing an operand, or a `¬` main connective has tokens to its left (which
/// `nodeify` would silently ignore).
pub fn compile(text: &str) -> Result<Expression, ExpressionError> {
    let tree = group(&lex(text))?;
    split(&tree, true)?.ok_or(ExpressionError::InvalidExpression)
}

/// Turn a vector of `Token`s into an `Expression`.
///
/// Fails only if the parentheses are not balanced. Returns `None` if the tokens do not form
/// any expression (for example, they are empty). The resulting tree can still miss some
/// operands, which is reported once the tree is evaluated.
pub fn parse(tokens: &[Token]) -> Result<Option<Expression>, ExpressionError> {
    let tree = group(tokens)?;
    Ok(nodeify(&tree))
}

/// Turn a (sub-)sequence of a `TokenTree` into an `Expression`, or `None` if the
/// sequence is not a valid expression.
pub fn nodeify(data: &[TokenTree]) -> Option<Expression> {
    // The lenient split never fails.
    split(data, false).ok().flatten()
}

/// **(internal)** Split the token tree at its main connective.
///
/// With `strict` set, any part that does not form an expression is reported as
/// `ExpressionError::InvalidExpression` instead of becoming a missing operand.
///
/// Only left operands are split recursively. Parenthesised groups, negations and right
/// operands are unwrapped in a loop, remembering the connectives seen on the way, and the
/// tree is assembled bottom-up afterwards. Long chains and deep nesting are common in
/// generated formulas and would overflow the stack otherwise.
fn split(data: &[TokenTree], strict: bool) -> Result<Option<Expression>, ExpressionError> {
    let mut data = data;
    let mut pending: Vec<Pending> = Vec::new();
    let innermost = loop {
        if let Some(index) = index_of_main_connective(data) {
            match &data[index] {
                TokenTree::Token(Token::UnaryOperator(op)) => {
                    if strict && index > 0 {
                        return Err(ExpressionError::InvalidExpression);
                    }
                    pending.push(Pending::Unary(*op));
                }
                TokenTree::Token(Token::BinaryOperator(op)) => {
                    let left = split(&data[..index], strict)?;
                    pending.push(Pending::Binary(*op, left));
                }
                _ => unreachable!("Only operator tokens can be a main connective."),
            }
            data = &data[(index + 1)..];
        } else {
            match data {
                [TokenTree::Group(nested)] => data = nested,
                [TokenTree::Token(Token::Variable(name))] => break Some(Expression::Variable(*name)),
                [TokenTree::Token(token)] => {
                    if cfg!(feature = "shields_up") {
                        panic!("Token `{}` should have been consumed by grouping.", token);
                    }
                    break None;
                }
                _ => break None, // Empty, or several operands without a connective.
            }
        }
    };

    if strict && innermost.is_none() {
        return Err(ExpressionError::InvalidExpression);
    }
    let result = pending.into_iter().rev().fold(innermost, |right, connective| {
        let right = right.map(Box::new);
        Some(match connective {
            Pending::Unary(op) => Expression::Unary(op, right),
            Pending::Binary(op, left) => Expression::Binary(op, left.map(Box::new), right),
        })
    });
    Ok(result)
}

/// **(internal)** A connective found by `split` which still waits for its right operand.
enum Pending {
    Unary(UnaryOperator),
    Binary(BinaryOperator, Option<Expression>),
}

/// **(internal)** Find the index of the first operator with the highest precedence value
/// in the root of the token tree.
fn index_of_main_connective(data: &[TokenTree]) -> Option<usize> {
    let mut main: Option<(usize, u8)> = None;
    for (index, item) in data.iter().enumerate() {
        if let TokenTree::Token(token) = item {
            if let Some(precedence) = token.precedence() {
                if main.map_or(true, |(_, best)| precedence > best) {
                    main = Some((index, precedence));
                }
            }
        }
    }
    main.map(|(index, _)| index)
}
