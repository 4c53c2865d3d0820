use crate::{BinaryOperator, UnaryOperator};
use std::fmt::{Display, Error, Formatter};

impl UnaryOperator {
    /// The character which represents this operator in a formula.
    pub fn symbol(self) -> char {
        match self {
            UnaryOperator::Not => '¬',
        }
    }

    /// Precedence value of the operator. Lower value binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            UnaryOperator::Not => 1,
        }
    }

    /// Apply this operator to the value of its operand.
    pub fn apply(self, value: bool) -> bool {
        match self {
            UnaryOperator::Not => !value,
        }
    }
}

impl BinaryOperator {
    /// All binary operators, mostly useful for exhaustive testing.
    pub const ALL: [BinaryOperator; 8] = [
        BinaryOperator::And,
        BinaryOperator::Or,
        BinaryOperator::Xor,
        BinaryOperator::Nor,
        BinaryOperator::Nand,
        BinaryOperator::Implication,
        BinaryOperator::ReverseImplication,
        BinaryOperator::BiImplication,
    ];

    /// The character which represents this operator in a formula.
    pub fn symbol(self) -> char {
        match self {
            BinaryOperator::And => '∧',
            BinaryOperator::Or => '∨',
            BinaryOperator::Xor => '⊕',
            BinaryOperator::Nor => '↓',
            BinaryOperator::Nand => '↑',
            BinaryOperator::Implication => '→',
            BinaryOperator::ReverseImplication => '←',
            BinaryOperator::BiImplication => '↔',
        }
    }

    /// Precedence value of the operator. Lower value binds tighter, so the operator
    /// with the highest value becomes the main connective of a formula.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOperator::And | BinaryOperator::Nand | BinaryOperator::Xor => 2,
            BinaryOperator::Or | BinaryOperator::Nor => 3,
            BinaryOperator::Implication | BinaryOperator::ReverseImplication => 4,
            BinaryOperator::BiImplication => 5,
        }
    }

    /// Apply this operator to the values of its two operands.
    pub fn apply(self, left: bool, right: bool) -> bool {
        match self {
            BinaryOperator::And => left && right,
            BinaryOperator::Nand => !(left && right),
            BinaryOperator::Or => left || right,
            BinaryOperator::Nor => !(left || right),
            BinaryOperator::Xor => left != right,
            BinaryOperator::BiImplication => left == right,
            BinaryOperator::Implication => !left || right,
            BinaryOperator::ReverseImplication => left || !right,
        }
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.symbol())
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.symbol())
    }
}
