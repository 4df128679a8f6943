use thiserror::Error;

/// Errors raised by range combinations whose operands do not fit together.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// The two ranges neither meet nor overlap, so there is no single range
    /// covering both of them without also covering the gap in between.
    #[error("this range {this} and other {other} do not meet nor overlap")]
    IllegalAdjacency { this: String, other: String },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RangeError>;
