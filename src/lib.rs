pub mod error;
pub mod render;
pub mod row;
pub mod table;
pub mod value;

pub use error::{JoinError, SchemaError};
pub use render::render_table;
pub use row::Row;
pub use table::Table;
pub use value::Value;
