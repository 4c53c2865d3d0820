use crate::ExpressionError::MismatchedParenthesis;
use crate::{ExpressionError, Token, TokenTree};

/// Nest a vector of `Token`s into a tree according to parentheses.
///
/// The result is the top-level sequence of the tree. Every `(` starts a nested
/// `TokenTree::Group` which is closed by the matching `)`. Fails with
/// `ExpressionError::MismatchedParenthesis` when a `)` has no matching `(` or a `(`
/// is never closed.
pub fn group(tokens: &[Token]) -> Result<Vec<TokenTree>, ExpressionError> {
    let mut root = Vec::new();
    // Currently open groups together with the position of the `(` that opened them.
    let mut open: Vec<(usize, Vec<TokenTree>)> = Vec::new();
    for (position, token) in tokens.iter().enumerate() {
        match token {
            Token::LeftParen => open.push((position, Vec::new())),
            Token::RightParen => {
                let (_, closed) = open.pop().ok_or(MismatchedParenthesis { position })?;
                push_tree(&mut root, &mut open, TokenTree::Group(closed));
            }
            _ => push_tree(&mut root, &mut open, TokenTree::Token(*token)),
        }
    }

    if let Some((position, _)) = open.pop() {
        Err(MismatchedParenthesis { position })
    } else {
        Ok(root)
    }
}

/// **(internal)** Append a tree to the innermost open group, or to the root if no group is open.
fn push_tree(root: &mut Vec<TokenTree>, open: &mut [(usize, Vec<TokenTree>)], tree: TokenTree) {
    match open.last_mut() {
        Some((_, current)) => current.push(tree),
        None => root.push(tree),
    }
}

/// Dropping is iterative, otherwise deeply nested parentheses overflow the stack.
impl Drop for TokenTree {
    fn drop(&mut self) {
        if let TokenTree::Group(items) = self {
            let mut stack = std::mem::take(items);
            while let Some(mut tree) = stack.pop() {
                if let TokenTree::Group(items) = &mut tree {
                    stack.append(items);
                }
            }
        }
    }
}
