use crate::{Assignment, AssignmentIterator};
use std::mem::swap;

impl AssignmentIterator {
    /// Create a new iterator over all `2^n` assignments of the given `n` variables.
    ///
    /// The first assignment sets every variable to `false`. Then the assignments are visited
    /// as if counting in binary, with the first variable being the most significant bit
    /// (the usual order of rows in a truth table). For zero variables, exactly one (empty)
    /// assignment is produced.
    ///
    /// *Panics:* when `shields_up` is enabled, `variables` must not contain duplicates.
    pub fn new(variables: Vec<char>) -> AssignmentIterator {
        if cfg!(feature = "shields_up") {
            for (i, name) in variables.iter().enumerate() {
                if variables[(i + 1)..].contains(name) {
                    panic!("Variable {} appears multiple times.", name);
                }
            }
        }
        AssignmentIterator {
            next_values: Some(vec![false; variables.len()]),
            variables,
        }
    }

    /// The variables that are assigned by this iterator.
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    /// **(internal)** Values of the next assignment, or `None` once all assignments were visited.
    pub(crate) fn next_values(&mut self) -> Option<Vec<bool>> {
        if let Some(values) = &self.next_values {
            let mut result = increment(values);
            swap(&mut result, &mut self.next_values);
            result
        } else {
            None
        }
    }
}

/// **(internal)** "Increment" the values if possible. Interpret the values as a bit-vector with
/// the most significant bit first and perform a standard increment.
fn increment(values: &[bool]) -> Option<Vec<bool>> {
    let mut next = values.to_vec();
    let mut carry = true; // initially, we want to increment
    for bit in next.iter_mut().rev() {
        let new_carry = *bit && carry;
        *bit ^= carry;
        carry = new_carry;
        if !new_carry {
            break;
        } // if there is no carry, we can just break
    }

    if carry {
        None
    } else {
        Some(next)
    }
}

impl Iterator for AssignmentIterator {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        let values = self.next_values()?;
        Some(self.variables.iter().cloned().zip(values).collect())
    }
}
