use super::*;

/// Bloom filter over elements of type `T`.
///
/// The filter owns a bit field of `capacity` bits and an ordered list of hash functions.
/// Adding an element sets the bit at every position produced by the hash functions,
/// querying checks that all of them are set. Bits are never cleared, so an added element
/// is always reported as possibly contained.
///
/// A filter created with [`BloomFilter::new`] has no hash functions and rejects adds and
/// queries with [`Error::NotConfigured`] until [`BloomFilter::add_hash_function`] is called.
/// Filters produced by [`Builder`] are ready right away.
///
/// The filter is meant for a single owner. `try_add` takes `&mut self`, so sharing it
/// between threads requires external synchronization, e.g. `RwLock`.
pub struct BloomFilter<T: ?Sized> {
    bits: BitField,
    hash_functions: Vec<HashFunction<T>>,
    config: Config,
}

impl<T: ?Sized> Debug for BloomFilter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        struct InnerDebug(usize, usize);
        impl Debug for InnerDebug {
            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                f.write_fmt(format_args!("{} ones from {}", self.0, self.1))
            }
        }
        f.debug_struct("BloomFilter")
            .field("bits", &InnerDebug(self.bits.count_ones(), self.bits.len()))
            .field("hash_functions", &self.hash_functions.len())
            .field("config", &self.config)
            .finish()
    }
}

impl<T: ?Sized> BloomFilter<T> {
    /// Create new filter without hash functions
    pub fn new(capacity: usize) -> Result<Self> {
        let config = Config { capacity };
        config.validate()?;
        Ok(Self::with_hash_functions(config, Vec::new()))
    }

    // Hash functions count must be validated by the caller
    pub(crate) fn with_hash_functions(
        config: Config,
        hash_functions: Vec<HashFunction<T>>,
    ) -> Self {
        debug!(
            "create bloom filter with capacity: {}, hash functions: {}",
            config.capacity,
            hash_functions.len()
        );
        Self {
            bits: BitField::new(config.capacity),
            hash_functions,
            config,
        }
    }

    /// Register one more hash function.
    /// Fails if the filter would get more hash functions than bits.
    pub fn add_hash_function<F>(&mut self, hash_function: F) -> Result<&mut Self>
    where
        F: Fn(&T) -> usize + Send + Sync + 'static,
    {
        self.config
            .check_hash_functions_count(self.hash_functions.len() + 1)?;
        self.hash_functions.push(Box::new(hash_function));
        debug!(
            "hash function registered, total: {}",
            self.hash_functions.len()
        );
        Ok(self)
    }

    /// Add item to filter.
    ///
    /// Positions of all hash functions are computed and validated before any bit is
    /// set, so a failed or rejected add leaves the filter unchanged. Returns `Ok(false)`
    /// if the item was rejected because the filter has more positions than bits,
    /// `Ok(true)` otherwise, whether or not the item was added before.
    pub fn try_add(&mut self, item: &T) -> Result<bool> {
        self.ensure_ready()?;
        let positions = self.positions(item)?;
        // Registration already limits hash functions count, checked again before commit
        if positions.len() > self.config.capacity {
            warn!(
                "{} positions don't fit into {} bits, item rejected",
                positions.len(),
                self.config.capacity
            );
            return Ok(false);
        }
        let fresh = positions
            .into_iter()
            .filter(|&position| !self.bits.set(position))
            .count();
        trace!("value added to bloom filter, {} new bits set", fresh);
        Ok(true)
    }

    /// Check if item may be in filter.
    ///
    /// All positions are validated first, so a hash function returning a position out of
    /// capacity is reported regardless of the filter contents. Then bits are checked
    /// until the first missing one. `Ok(false)` means the item was definitely never
    /// added. `Ok(true)` may be a false positive.
    pub fn may_contain(&self, item: &T) -> Result<bool> {
        self.ensure_ready()?;
        let positions = self.positions(item)?;
        match positions.into_iter().find(|&position| !self.bits.get(position)) {
            Some(position) => {
                trace!("item definitely missed, bit {} not set", position);
                Ok(false)
            }
            None => Ok(true),
        }
    }

    /// Same as [`BloomFilter::may_contain`], but answers with [`FilterResult`]
    pub fn check(&self, item: &T) -> Result<FilterResult> {
        self.may_contain(item).map(FilterResult::from)
    }

    /// Number of bits in the filter
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Filter configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of registered hash functions
    pub fn hash_functions_count(&self) -> usize {
        self.hash_functions.len()
    }

    /// Returns `State::Ready` once at least one hash function is registered
    pub fn state(&self) -> State {
        if self.hash_functions.is_empty() {
            State::Unconfigured
        } else {
            State::Ready
        }
    }

    /// Number of bits set
    pub fn ones_count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Get amount of memory allocated for filter bits
    pub fn memory_allocated(&self) -> usize {
        self.bits.size_in_mem()
    }

    fn ensure_ready(&self) -> Result<()> {
        match self.state() {
            State::Ready => Ok(()),
            State::Unconfigured => {
                error!("bloom filter used before any hash function was registered");
                Err(Error::NotConfigured)
            }
        }
    }

    fn positions(&self, item: &T) -> Result<Vec<usize>> {
        self.hash_functions
            .iter()
            .map(|hash_function| self.checked_position(hash_function(item)))
            .collect()
    }

    fn checked_position(&self, position: usize) -> Result<usize> {
        if position < self.config.capacity {
            Ok(position)
        } else {
            error!(
                "hash function returned position {} out of capacity {}",
                position, self.config.capacity
            );
            Err(Error::position_out_of_range(position, self.config.capacity))
        }
    }
}
