#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # bloomkit
//!
//! The `bloomkit` crate provides a fixed-capacity Bloom filter with caller supplied
//! hash functions. A filter answers "may this element have been added?" without false
//! negatives, at the price of occasional false positives.
//!
//! Filters are configured either through [`Builder`]:
//!
//! ```
//! use bloomkit::Builder;
//!
//! let mut filter = Builder::<str>::new()
//!     .with_capacity(64)?
//!     .with_hash_function(|s: &str| s.len() % 64)
//!     .with_hash_function(|s: &str| s.bytes().map(usize::from).sum::<usize>() % 64)
//!     .build()?;
//!
//! assert!(filter.try_add("hello")?);
//! assert!(filter.may_contain("hello")?);
//! # Ok::<(), bloomkit::Error>(())
//! ```
//!
//! or incrementally, registering hash functions on an existing filter with
//! [`BloomFilter::add_hash_function`].
//!
//! Every hash function must return a position in `[0, capacity)`. Positions outside of
//! this range are reported as [`Error::PositionOutOfRange`] and never touch the bits.

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

/// Build time, version and commit of the crate
pub mod build_info;
mod error;
/// Bloom filter, its builder and configuration
pub mod filter;

pub use error::{Error, ErrorKind, Result};
pub use filter::{
    BloomFilter, Builder, Config, FilterResult, HashFunction, State, DEFAULT_CAPACITY,
};

mod prelude {
    pub(crate) use crate::error::{Error, Result};
    pub(crate) use std::fmt::{Debug, Formatter, Result as FmtResult};
    pub(crate) use thiserror::Error;
}
