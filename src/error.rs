use thiserror::Error;

/// Errors reported when constructing a [Table](crate::Table).
///
/// These invariants are validated at construction so that joins never have
/// to work with an ambiguous schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The same column name appears twice in the schema.
    #[error("duplicate column {column:?} in table {table:?}")]
    DuplicateColumn {
        /// Name of the table being constructed.
        table: String,
        /// The repeated column name.
        column: String,
    },
    /// The designated primary key is not one of the schema columns.
    #[error("primary key {key:?} is not a column of table {table:?}")]
    UnknownPrimaryKey {
        /// Name of the table being constructed.
        table: String,
        /// The unknown primary-key name.
        key: String,
    },
}

/// Errors reported by the outer-join operators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinError {
    /// An outer join needs the padded side's primary key to detect
    /// unmatched rows and to sort the result; the table has none.
    #[error("table {table:?} has no primary key to pad and sort by")]
    NoPrimaryKey {
        /// Name of the table missing a primary key.
        table: String,
    },
}
