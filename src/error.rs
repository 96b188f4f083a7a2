use thiserror::Error;

/// Main error type for the crate.
/// Aggregates failures from detection, the decoder boundary, and the
/// sheet-charting layer behind one conversion surface.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Decode(#[from] crate::rootfile::DecodeError),

    #[error("{0}")]
    Sheet(#[from] crate::loader::SheetError),
}

pub type Result<T> = std::result::Result<T, Error>;
