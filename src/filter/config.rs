use super::*;

/// Capacity used by [`Builder`] when none is set explicitly.
///
/// It is a convenience for experiments; real filters should set a capacity derived from
/// the expected number of elements and the acceptable false positive rate.
pub const DEFAULT_CAPACITY: usize = 10;

/// Bloom filter configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// number of bits in the filter, must be greater than zero.
    /// It also limits the number of hash functions: a filter can't have
    /// more hash functions than bits.
    pub capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl Config {
    /// Checks that the configuration can be used to create a filter
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            error!("zero capacity filter is useless");
            Err(Error::ZeroCapacity)
        } else {
            Ok(())
        }
    }

    pub(crate) fn check_hash_functions_count(&self, count: usize) -> Result<()> {
        if count > self.capacity {
            error!(
                "{} hash functions don't fit into {} bits",
                count, self.capacity
            );
            Err(Error::too_many_hash_functions(count, self.capacity))
        } else {
            Ok(())
        }
    }
}
