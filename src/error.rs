use crate::prelude::*;

/// A specialized filter result type.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for filter configuration and usage.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Capacity must be at least one bit
    #[error("capacity cannot be zero")]
    ZeroCapacity,
    /// Builder has no hash functions to install
    #[error("at least one hash function required")]
    NoHashFunctions,
    /// More hash functions than bits in the filter
    #[error("hash function count {count} exceeds capacity {capacity}")]
    TooManyHashFunctions {
        /// Hash functions count after registration
        count: usize,
        /// Filter capacity
        capacity: usize,
    },
    /// Filter is used before any hash function was registered
    #[error("filter is not configured: at least one hash function required")]
    NotConfigured,
    /// Hash function produced a position outside of the bit field
    #[error("hash function returned position {position}, capacity is {capacity}")]
    PositionOutOfRange {
        /// Returned position
        position: usize,
        /// Filter capacity
        capacity: usize,
    },
}

/// A list specifying categories of filter errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input configuration is wrong, caller must fix it before building or registering.
    Configuration,
    /// Operation called on a filter that is not ready for it.
    InvalidState,
    /// Hash function broke its contract for the given argument.
    Argument,
}

impl Error {
    /// Returns the corresponding `ErrorKind` for this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ZeroCapacity | Self::NoHashFunctions | Self::TooManyHashFunctions { .. } => {
                ErrorKind::Configuration
            }
            Self::NotConfigured => ErrorKind::InvalidState,
            Self::PositionOutOfRange { .. } => ErrorKind::Argument,
        }
    }

    pub(crate) fn too_many_hash_functions(count: usize, capacity: usize) -> Self {
        Self::TooManyHashFunctions { count, capacity }
    }

    pub(crate) fn position_out_of_range(position: usize, capacity: usize) -> Self {
        Self::PositionOutOfRange { position, capacity }
    }
}
