//! # ROOT Sheet Loader
//!
//! Presents the contents of ROOT files, the binary object store used in
//! high-energy-physics analyses, as interactive sheets: directories
//! become entry listings, trees become columnar tables, histograms and
//! graphs become tables of derived per-bin and per-point quantities.
//!
//! ## Sheet categories
//!
//! - **Container**: one row per directory key, with type and item-count
//!   columns; rows drill into child sheets
//! - **Tabular tree**: one typed column per branch, one row per entry
//! - **Histogram 1-D**: `left, right, center, height, counts, width`
//!   columns, plus `error, variance` for weighted histograms
//! - **Histogram 2-D**: x bin labels down a key column, one height
//!   column per y bin, flow bins marked `x-`/`x+`/`y-`/`y+`
//! - **Point set**: `x, y` plus symmetric or asymmetric error columns
//!   by graph class
//!
//! ## Collaborators
//!
//! File parsing, decompression, and array decoding belong to a
//! [`Decoder`](rootfile::Decoder) implementation; rendering, cursor
//! handling, and key dispatch belong to the embedding application. This
//! crate only charts decoded objects into columns and lazily produced
//! rows, with progress reporting and a generic key-value view for
//! drill-down and metadata.

pub mod error;
pub mod loader;
pub mod rootfile;
pub mod sheet;

pub use crate::error::Error;
pub use crate::error::Result;
pub use crate::loader::ChildSheet;
pub use crate::loader::Command;
pub use crate::loader::KeyValueSheet;
pub use crate::loader::RootSheet;
pub use crate::loader::Row;
pub use crate::loader::RowIter;
pub use crate::loader::RowPayload;
pub use crate::loader::SheetError;
pub use crate::loader::SheetOptions;
pub use crate::loader::COMMANDS;
pub use crate::loader::ROWTYPE_ROWS;
pub use crate::loader::ROWTYPE_SHEETS;
pub use crate::rootfile::detect;
pub use crate::rootfile::DecodeError;
pub use crate::rootfile::Decoder;
pub use crate::rootfile::Directory;
pub use crate::rootfile::MemoryDecoder;
pub use crate::rootfile::RootObject;
pub use crate::sheet::Column;
pub use crate::sheet::ColumnType;
pub use crate::sheet::Progress;
pub use crate::sheet::Value;
