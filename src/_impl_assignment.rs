use crate::Assignment;
use fxhash::FxHashMap;
use std::collections::HashMap;
use std::fmt::{Display, Error, Formatter};
use std::iter::FromIterator;

impl Assignment {
    /// Create an empty assignment without any variables set.
    pub fn new() -> Assignment {
        Assignment(FxHashMap::default())
    }

    /// Create an assignment from a list of variables and values.
    ///
    /// The order of variables in the slice can be arbitrary. If the slice contains multiple
    /// copies of the same variable, the last value is accepted.
    pub fn from_values(values: &[(char, bool)]) -> Assignment {
        values.iter().cloned().collect()
    }

    /// Values stored in this assignment, sorted by variable name.
    pub fn to_values(&self) -> Vec<(char, bool)> {
        let mut values: Vec<(char, bool)> = self.0.iter().map(|(k, v)| (*k, *v)).collect();
        values.sort_unstable();
        values
    }

    /// Get the value of the given variable, if any.
    pub fn get_value(&self, name: char) -> Option<bool> {
        self.0.get(&name).cloned()
    }

    /// Returns `true` if this assignment has the value of the `name` variable set.
    pub fn has_value(&self, name: char) -> bool {
        self.0.contains_key(&name)
    }

    /// Update the value of the given variable.
    pub fn set_value(&mut self, name: char, value: bool) {
        self.0.insert(name, value);
    }

    /// Remove the value of a variable from this assignment.
    ///
    /// If the value was not set, this operation has no effect.
    pub fn unset_value(&mut self, name: char) {
        self.0.remove(&name);
    }

    /// Number of variables with a value in this assignment.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no variable has a value in this assignment.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(char, bool)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (char, bool)>>(iter: T) -> Self {
        Assignment(iter.into_iter().collect())
    }
}

impl From<HashMap<char, bool>> for Assignment {
    fn from(values: HashMap<char, bool>) -> Self {
        values.into_iter().collect()
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{{")?;
        for (i, (name, value)) in self.to_values().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, if value { 1 } else { 0 })?;
        }
        write!(f, "}}")
    }
}
