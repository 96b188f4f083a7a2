//! Host-side sheet primitives: columns, cell values, and progress accounting.
//!
//! The loader translates decoded objects into these types; rendering, cursor
//! handling, and command dispatch stay with the embedding application.

pub mod column;
pub mod progress;
pub mod value;

pub use column::Column;
pub use column::ColumnType;
pub use progress::Progress;
pub use value::Value;
