use thiserror::Error;

/// Errors reported by the checked operations of [`DynamicArray`](crate::DynamicArray).
///
/// A failed operation never modifies the container.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// The supplied index lies outside the valid range of the operation.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// A value requested by [`DynamicArray::exchange`](crate::DynamicArray::exchange) is absent.
    #[error("value not found")]
    ValueNotFound,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
