use crate::BinaryOperator::*;
use crate::{Token, UnaryOperator};
use std::fmt::{Display, Error, Formatter};

/// Takes a `&str` and turns it into a vector of `Token`s.
///
/// Lexing never fails: whitespace is skipped, operator symbols and parentheses are mapped
/// to their tokens and every other character is a variable (variable names are therefore
/// always exactly one character long).
pub fn lex(text: &str) -> Vec<Token> {
    let mut output = Vec::new();
    for c in text.chars() {
        match c {
            c if c.is_whitespace() => { /* skip whitespace */ }
            '¬' => output.push(Token::UnaryOperator(UnaryOperator::Not)),
            '∧' => output.push(Token::BinaryOperator(And)),
            '∨' => output.push(Token::BinaryOperator(Or)),
            '⊕' => output.push(Token::BinaryOperator(Xor)),
            '↓' => output.push(Token::BinaryOperator(Nor)),
            '↑' => output.push(Token::BinaryOperator(Nand)),
            '→' => output.push(Token::BinaryOperator(Implication)),
            '←' => output.push(Token::BinaryOperator(ReverseImplication)),
            '↔' => output.push(Token::BinaryOperator(BiImplication)),
            '(' => output.push(Token::LeftParen),
            ')' => output.push(Token::RightParen),
            _ => output.push(Token::Variable(c)),
        }
    }
    output
}

impl Token {
    /// Precedence value of an operator token, `None` for variables and parentheses.
    pub fn precedence(&self) -> Option<u8> {
        match self {
            Token::UnaryOperator(op) => Some(op.precedence()),
            Token::BinaryOperator(op) => Some(op.precedence()),
            _ => None,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            Token::Variable(name) => write!(f, "{}", name),
            Token::UnaryOperator(op) => write!(f, "{}", op),
            Token::BinaryOperator(op) => write!(f, "{}", op),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
        }
    }
}
