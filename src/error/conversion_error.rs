#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents the failures reported by the conversion utilities.
pub enum ConversionError {
    /// The value could not be converted.
    #[error("Invalid input: {details}")]
    InvalidInput {
        /// The message of the underlying failure.
        details: String,
    },
    /// The bounds given for random generation are unusable.
    #[error("Invalid bounds: {details}")]
    InvalidBounds {
        /// Why the bounds were rejected.
        details: String,
    },
}
