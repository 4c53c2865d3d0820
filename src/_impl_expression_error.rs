use crate::ExpressionError;
use std::fmt::{Display, Error, Formatter};

impl Display for ExpressionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            ExpressionError::InvalidExpression => {
                write!(
                    f,
                    "Invalid expression: a connective is missing an operand or an operand is misplaced."
                )
            }
            ExpressionError::MismatchedParenthesis { position } => {
                write!(f, "Mismatched parenthesis at token {}.", position)
            }
            ExpressionError::UnknownVariable(name) => {
                write!(f, "Variable `{}` has no value in the assignment.", name)
            }
        }
    }
}

impl std::error::Error for ExpressionError {}
