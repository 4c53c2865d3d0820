use crate::{AssignmentIterator, Expression, ExpressionError, TruthTable};

impl TruthTable {
    /// Evaluate the `expression` in every assignment of the given `variables`.
    ///
    /// The rows follow the order of `AssignmentIterator`. Fails if the expression cannot be
    /// evaluated, for example because it uses a variable which is not listed.
    pub fn new(
        expression: &Expression,
        variables: Vec<char>,
    ) -> Result<TruthTable, ExpressionError> {
        let mut assignments = AssignmentIterator::new(variables.clone());
        let mut rows = Vec::new();
        while let Some(values) = assignments.next_values() {
            let assignment = variables.iter().cloned().zip(values.iter().cloned()).collect();
            let result = expression.result(&assignment)?;
            rows.push((values, result));
        }
        Ok(TruthTable { variables, rows })
    }

    /// The variables of the table, in the order of their values in each row.
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    /// Rows of the table: values of `variables` and the result of the expression.
    pub fn rows(&self) -> &[(Vec<bool>, bool)] {
        &self.rows
    }

    /// Number of rows of the table (`2^n` for `n` variables).
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }
}

/// Methods for evaluating an expression in all assignments of its variables.
impl Expression {
    /// Compute the `TruthTable` of this expression over its `variables`.
    pub fn truth_table(&self) -> Result<TruthTable, ExpressionError> {
        TruthTable::new(self, self.variables())
    }

    /// True if this expression is true in every assignment.
    pub fn is_tautology(&self) -> Result<bool, ExpressionError> {
        Ok(self.truth_table()?.rows().iter().all(|(_, result)| *result))
    }

    /// True if this expression is true in at least one assignment.
    pub fn is_satisfiable(&self) -> Result<bool, ExpressionError> {
        Ok(self.truth_table()?.rows().iter().any(|(_, result)| *result))
    }
}
