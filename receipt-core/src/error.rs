//! Error types for receipt construction

use thiserror::Error;

/// Rejected add-item input
///
/// Raised before anything is appended, so the receipt is unchanged
/// whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Item name is empty after trimming
    #[error("Item name must not be empty")]
    EmptyName,

    /// Price text is empty or not a decimal number
    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),

    /// Price parsed but is below zero
    #[error("Price must not be negative: {0}")]
    NegativePrice(String),
}

/// Result type for receipt operations
pub type ReceiptResult<T> = Result<T, ValidationError>;
