use std::collections::HashMap;

use crate::value::Value;

/// A single table row: a mapping from column name to [Value].
///
/// A column that is missing from the map is not the same thing as a column
/// holding [Value::Null]; [Row::get] returns `None` for the former. Rows
/// built by the join operators are always schema-complete for their table,
/// so the distinction only matters for hand-built rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    fields: HashMap<String, Value>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a row from `(column, value)` pairs.
    ///
    /// # Example
    /// ```
    /// # use joinsteps::{Row, Value};
    /// let row = Row::from_pairs([("id", Value::Int(1))]);
    /// assert_eq!(row.get("id"), Some(&Value::Int(1)));
    /// ```
    pub fn from_pairs<S, I>(pairs: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Value)>,
    {
        Self {
            fields: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Returns the value stored under `column`, or `None` if the row has no
    /// such field at all.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields.get(column)
    }

    /// Stores `value` under `column`, replacing any previous value.
    pub fn set(&mut self, column: impl Into<String>, value: Value) {
        self.fields.insert(column.into(), value);
    }

    /// Merges two rows into a new one.
    ///
    /// Collision policy: on a shared column name the value from `other`
    /// (the right-hand side) overwrites the value from `self`. Joins rely
    /// on this rule being explicit and deterministic; callers that join
    /// tables with overlapping column names get last-write-wins fields.
    pub fn merge(&self, other: &Row) -> Row {
        let mut fields = self.fields.clone();
        fields.extend(
            other
                .fields
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        Row { fields }
    }

    /// Returns the number of fields in the row.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the row has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
