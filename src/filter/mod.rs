mod bitfield;
/// Bloom filter
pub mod bloom;
/// Builder
pub mod builder;
/// Filter configuration
pub mod config;


use super::prelude::*;
use bitfield::BitField;
pub use bloom::*;
pub use builder::*;
pub use config::*;
use std::ops::Add;

/// Caller supplied mapping from an element to a bit position.
///
/// Must be deterministic and return a value in `[0, capacity)` of the filter it is
/// registered in.
pub type HashFunction<T> = Box<dyn Fn(&T) -> usize + Send + Sync>;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
/// Filter result
pub enum FilterResult {
    /// Need additional check
    NeedAdditionalCheck,
    /// Not contains
    NotContains,
}

impl Default for FilterResult {
    fn default() -> Self {
        Self::NeedAdditionalCheck
    }
}

impl From<bool> for FilterResult {
    fn from(may_contain: bool) -> Self {
        if may_contain {
            Self::NeedAdditionalCheck
        } else {
            Self::NotContains
        }
    }
}

/// Combines answers of two filters over the union of their elements.
impl Add for FilterResult {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (FilterResult::NotContains, FilterResult::NotContains) => FilterResult::NotContains,
            _ => FilterResult::NeedAdditionalCheck,
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
/// Filter configuration state
pub enum State {
    /// No hash functions registered, add and query are rejected
    Unconfigured,
    /// At least one hash function registered
    Ready,
}
