use crate::Expression::*;
use crate::{
    compile, Assignment, BinaryOperator, Expression, ExpressionError, Operand, UnaryOperator,
};
use std::convert::TryFrom;
use std::fmt::{Display, Error, Formatter};
use std::str::FromStr;

impl Expression {
    /// Create a variable expression.
    pub fn mk_var(name: char) -> Expression {
        Variable(name)
    }

    /// Create a negation of the given expression.
    pub fn mk_not(inner: Expression) -> Expression {
        Unary(UnaryOperator::Not, Some(Box::new(inner)))
    }

    /// Combine two expressions using a binary operator.
    pub fn mk_binary(op: BinaryOperator, left: Expression, right: Expression) -> Expression {
        Binary(op, Some(Box::new(left)), Some(Box::new(right)))
    }

    /// Evaluate this expression in the given `Assignment`.
    ///
    /// Fails with `ExpressionError::InvalidExpression` if a connective is missing an operand and
    /// with `ExpressionError::UnknownVariable` if the assignment has no value for some variable.
    /// Both operands of a binary connective are always evaluated (left first), so an unknown
    /// variable is reported regardless of the values of other variables.
    pub fn result(&self, assignment: &Assignment) -> Result<bool, ExpressionError> {
        // Evaluation uses explicit stacks so that deeply nested trees do not overflow.
        let mut tasks = vec![Task::Evaluate(self)];
        let mut values: Vec<bool> = Vec::new();
        while let Some(task) = tasks.pop() {
            match task {
                Task::Evaluate(Variable(name)) => {
                    let value = assignment
                        .get_value(*name)
                        .ok_or(ExpressionError::UnknownVariable(*name))?;
                    values.push(value);
                }
                Task::Evaluate(Unary(op, inner)) => {
                    let inner = operand(inner)?;
                    tasks.push(Task::ApplyUnary(*op));
                    tasks.push(Task::Evaluate(inner));
                }
                Task::Evaluate(Binary(op, left, right)) => {
                    let (left, right) = (operand(left)?, operand(right)?);
                    tasks.push(Task::ApplyBinary(*op));
                    tasks.push(Task::Evaluate(right));
                    tasks.push(Task::Evaluate(left));
                }
                Task::ApplyUnary(op) => {
                    let inner = pop_value(&mut values);
                    values.push(op.apply(inner));
                }
                Task::ApplyBinary(op) => {
                    let right = pop_value(&mut values);
                    let left = pop_value(&mut values);
                    values.push(op.apply(left, right));
                }
            }
        }
        Ok(pop_value(&mut values))
    }

    /// True if no connective in this expression is missing an operand.
    pub fn is_complete(&self) -> bool {
        self.check_operands().is_ok()
    }

    /// Fail with `ExpressionError::InvalidExpression` if some connective in this expression
    /// is missing an operand.
    pub fn check_operands(&self) -> Result<(), ExpressionError> {
        let mut stack = vec![self];
        while let Some(expression) = stack.pop() {
            match expression {
                Variable(_) => {}
                Unary(_, inner) => stack.push(operand(inner)?),
                Binary(_, left, right) => {
                    stack.push(operand(left)?);
                    stack.push(operand(right)?);
                }
            }
        }
        Ok(())
    }

    /// Distinct names of variables used in this expression, in the order of their first
    /// appearance (left to right).
    pub fn variables(&self) -> Vec<char> {
        let mut result = Vec::new();
        let mut stack = vec![self];
        while let Some(expression) = stack.pop() {
            match expression {
                Variable(name) => {
                    if !result.contains(name) {
                        result.push(*name);
                    }
                }
                Unary(_, inner) => stack.extend(inner.as_deref()),
                Binary(_, left, right) => {
                    // Right is pushed first to be visited last.
                    stack.extend(right.as_deref());
                    stack.extend(left.as_deref());
                }
            }
        }
        result
    }
}

/// **(internal)** Pending work of the iterative evaluation in `Expression::result`.
enum Task<'a> {
    Evaluate(&'a Expression),
    ApplyUnary(UnaryOperator),
    ApplyBinary(BinaryOperator),
}

/// **(internal)** Pending output of the iterative `Display` of an `Expression`.
enum Piece<'a> {
    Tree(&'a Expression),
    Missing,
    Connective(BinaryOperator),
    Close,
}

impl<'a> Piece<'a> {
    fn of(operand: &'a Operand) -> Piece<'a> {
        match operand.as_deref() {
            Some(inner) => Piece::Tree(inner),
            None => Piece::Missing,
        }
    }
}

/// **(internal)** Take the next operand value of an evaluation.
fn pop_value(values: &mut Vec<bool>) -> bool {
    match values.pop() {
        Some(value) => value,
        None => unreachable!("Every evaluated operand pushes exactly one value."),
    }
}

/// **(internal)** Unwrap an operand or report an invalid expression.
fn operand(operand: &Operand) -> Result<&Expression, ExpressionError> {
    operand.as_deref().ok_or(ExpressionError::InvalidExpression)
}

impl TryFrom<&str> for Expression {
    type Error = ExpressionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        compile(value)
    }
}

impl FromStr for Expression {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        compile(s)
    }
}

impl Display for Expression {
    /// Binary connectives are always enclosed in parentheses and a missing operand
    /// is written as `()`, so the text can be parsed back into the same tree.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        let mut stack = vec![Piece::Tree(self)];
        while let Some(piece) = stack.pop() {
            match piece {
                Piece::Tree(Variable(name)) => write!(f, "{}", name)?,
                Piece::Tree(Unary(op, inner)) => {
                    write!(f, "{}", op)?;
                    stack.push(Piece::of(inner));
                }
                Piece::Tree(Binary(op, left, right)) => {
                    write!(f, "(")?;
                    stack.push(Piece::Close);
                    stack.push(Piece::of(right));
                    stack.push(Piece::Connective(*op));
                    stack.push(Piece::of(left));
                }
                Piece::Missing => write!(f, "()")?,
                Piece::Connective(op) => write!(f, " {} ", op)?,
                Piece::Close => write!(f, ")")?,
            }
        }
        Ok(())
    }
}

/// Dropping is iterative, otherwise a deeply nested expression overflows the stack.
impl Drop for Expression {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Expression>> = Vec::new();
        take_operands(self, &mut stack);
        while let Some(mut expression) = stack.pop() {
            take_operands(&mut expression, &mut stack);
        }
    }
}

/// **(internal)** Move the operands of `expression` to the `stack`.
fn take_operands(expression: &mut Expression, stack: &mut Vec<Box<Expression>>) {
    match expression {
        Variable(_) => {}
        Unary(_, inner) => stack.extend(inner.take()),
        Binary(_, left, right) => {
            stack.extend(left.take());
            stack.extend(right.take());
        }
    }
}
