use crate::error::{JoinError, SchemaError};
use crate::row::Row;
use crate::value::Value;

/// An in-memory relational table: an ordered column schema, an optional
/// designated primary key and an ordered sequence of [Row]s.
///
/// Tables are immutable from the perspective of the join operators: every
/// join allocates and returns a new table, the operands are never touched.
/// The primary key is assumed unique-valued across the rows; this is a
/// caller contract, not something the engine enforces. Duplicate key values
/// make the outer joins match on the first key-equal row, which may pad
/// fewer rows than expected.
#[derive(Debug, Clone)]
pub struct Table {
    /// The name of the table, used in error messages and rendering.
    pub name: String,
    /// The ordered column schema. Unique for caller-constructed tables;
    /// join results keep the concatenated schema as-is, duplicates included.
    pub columns: Vec<String>,
    /// The column used as the identity of a row by the outer joins.
    pub primary_key: Option<String>,
    /// The rows, in insertion order.
    pub rows: Vec<Row>,
}

impl Table {
    /// Creates a new table.
    ///
    /// Rows are accepted as given; a row may omit columns (they project as
    /// [Value::Null] in [Table::rows_as_matrix]) and primary-key uniqueness
    /// is not checked.
    ///
    /// # Errors
    /// Returns [SchemaError::DuplicateColumn] if a column name repeats, and
    /// [SchemaError::UnknownPrimaryKey] if the primary key is not one of
    /// the columns.
    ///
    /// # Example
    /// ```
    /// # use joinsteps::{Row, Table, Value};
    /// let owners = Table::new(
    ///     "owners".into(),
    ///     vec!["id".into(), "first_name".into()],
    ///     Some("id".into()),
    ///     vec![Row::from_pairs([
    ///         ("id", Value::Int(1)),
    ///         ("first_name", Value::Text("Brian".into())),
    ///     ])],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(owners.row_count(), 1);
    /// ```
    pub fn new(
        name: String,
        columns: Vec<String>,
        primary_key: Option<String>,
        rows: Vec<Row>,
    ) -> Result<Self, SchemaError> {
        for (i, column) in columns.iter().enumerate() {
            if columns[..i].contains(column) {
                return Err(SchemaError::DuplicateColumn {
                    table: name,
                    column: column.clone(),
                });
            }
        }
        if let Some(key) = &primary_key
            && !columns.contains(key)
        {
            return Err(SchemaError::UnknownPrimaryKey {
                table: name,
                key: key.clone(),
            });
        }
        Ok(Self {
            name,
            columns,
            primary_key,
            rows,
        })
    }

    // Joins build their result through this path: a concatenated schema may
    // legitimately repeat a column name, so the construction checks do not
    // apply. Join results carry no primary key.
    fn join_result(&self, other: &Table, rows: Vec<Row>) -> Table {
        Table {
            name: format!("{}_{}", self.name, other.name),
            columns: self
                .columns
                .iter()
                .chain(other.columns.iter())
                .cloned()
                .collect(),
            primary_key: None,
            rows,
        }
    }

    /// Returns the number of rows in the table.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the Cartesian product of `self` and `other`.
    ///
    /// The result schema is `self.columns` followed by `other.columns`.
    /// Rows are emitted in nested order: every row of `other` combined with
    /// the first row of `self`, then every row of `other` with the second,
    /// and so on. Each pair is merged with [Row::merge], so on a shared
    /// column name the right operand's value wins.
    pub fn cross_join(&self, other: &Table) -> Table {
        let mut rows = Vec::with_capacity(self.rows.len() * other.rows.len());
        for left_row in &self.rows {
            for right_row in &other.rows {
                rows.push(left_row.merge(right_row));
            }
        }
        self.join_result(other, rows)
    }

    /// Returns the cross join filtered by `predicate`.
    ///
    /// The predicate sees every candidate pair in cross-join order and the
    /// result keeps that order (no re-sort); it is a subsequence of the
    /// cross join. A panicking predicate propagates to the caller.
    ///
    /// # Example
    /// ```
    /// # use joinsteps::{Row, Table, Value};
    /// let owners = Table::new(
    ///     "owners".into(),
    ///     vec!["id".into(), "first_name".into()],
    ///     Some("id".into()),
    ///     vec![Row::from_pairs([
    ///         ("id", Value::Int(1)),
    ///         ("first_name", Value::Text("Brian".into())),
    ///     ])],
    /// )
    /// .unwrap();
    /// let dogs = Table::new(
    ///     "dogs".into(),
    ///     vec!["name".into(), "owner_id".into()],
    ///     Some("name".into()),
    ///     vec![Row::from_pairs([
    ///         ("name", Value::Text("Lu".into())),
    ///         ("owner_id", Value::Int(1)),
    ///     ])],
    /// )
    /// .unwrap();
    ///
    /// let joined = owners.inner_join(&dogs, |owner, dog| {
    ///     owner.get("id") == dog.get("owner_id")
    /// });
    /// assert_eq!(joined.row_count(), 1);
    /// ```
    pub fn inner_join<P>(&self, other: &Table, predicate: P) -> Table
    where
        P: Fn(&Row, &Row) -> bool,
    {
        let mut rows = Vec::new();
        for left_row in &self.rows {
            for right_row in &other.rows {
                if predicate(left_row, right_row) {
                    rows.push(left_row.merge(right_row));
                }
            }
        }
        self.join_result(other, rows)
    }

    /// Returns the inner join plus a null-padded row for every row of
    /// `self` that found no match.
    ///
    /// A left row counts as matched when some result row carries the same
    /// value for `self`'s primary key; only that single field is compared,
    /// the predicate is not re-evaluated. Padded rows are the left row
    /// merged with [Table::create_null_row] of `other`, so the sentinel
    /// wins any shared column name. The whole result is stably sorted
    /// ascending by `self`'s primary key.
    ///
    /// # Errors
    /// Returns [JoinError::NoPrimaryKey] if `self` has no primary key.
    pub fn left_outer_join<P>(&self, other: &Table, predicate: P) -> Result<Table, JoinError>
    where
        P: Fn(&Row, &Row) -> bool,
    {
        let key = self
            .primary_key
            .as_deref()
            .ok_or_else(|| JoinError::NoPrimaryKey {
                table: self.name.clone(),
            })?;

        let mut joined = self.inner_join(other, predicate);
        let null_row = other.create_null_row();
        for left_row in &self.rows {
            let is_in_join = joined
                .rows
                .iter()
                .any(|join_row| join_row.get(key) == left_row.get(key));
            if !is_in_join {
                joined.rows.push(left_row.merge(&null_row));
            }
        }

        joined.rows.sort_by(|a, b| a.get(key).cmp(&b.get(key)));
        Ok(joined)
    }

    /// Returns the inner join plus a null-padded row for every row of
    /// `other` that found no match.
    ///
    /// Symmetric to [Table::left_outer_join], with the roles reversed for
    /// the padding step only: unmatched right rows are detected by
    /// `other`'s primary key, padded rows are `self`'s null row merged with
    /// the real right row (so the right operand's real values win any
    /// shared column name), and the final sort key is `other`'s primary
    /// key. The schema still places `self`'s columns first.
    ///
    /// # Errors
    /// Returns [JoinError::NoPrimaryKey] if `other` has no primary key.
    pub fn right_outer_join<P>(&self, other: &Table, predicate: P) -> Result<Table, JoinError>
    where
        P: Fn(&Row, &Row) -> bool,
    {
        let key = other
            .primary_key
            .as_deref()
            .ok_or_else(|| JoinError::NoPrimaryKey {
                table: other.name.clone(),
            })?;

        let mut joined = self.inner_join(other, predicate);
        let null_row = self.create_null_row();
        for right_row in &other.rows {
            let is_in_join = joined
                .rows
                .iter()
                .any(|join_row| join_row.get(key) == right_row.get(key));
            if !is_in_join {
                joined.rows.push(null_row.merge(right_row));
            }
        }

        joined.rows.sort_by(|a, b| a.get(key).cmp(&b.get(key)));
        Ok(joined)
    }

    /// Returns a row mapping every schema column to [Value::Null].
    pub fn create_null_row(&self) -> Row {
        self.columns
            .iter()
            .map(|column| (column.clone(), Value::Null))
            .collect()
    }

    /// Projects the rows into positional tuples following the schema's
    /// column order.
    ///
    /// [Value::Null] passes through unchanged; a column missing from a
    /// row's map also projects as [Value::Null].
    pub fn rows_as_matrix(&self) -> Vec<Vec<Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .map(|column| row.get(column).cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .collect()
    }
}
