use super::*;

/// `Builder` used for initializing a `BloomFilter`.
///
/// Capacity defaults to [`DEFAULT_CAPACITY`]. Hash functions are accumulated in the order
/// they are passed and validated against the capacity only in [`Builder::build`].
/// # Examples
/// ```
/// use bloomkit::{Builder, Error};
///
/// let err = Builder::<u64>::new()
///     .with_capacity(2)?
///     .with_hash_function(|x: &u64| (*x % 2) as usize)
///     .with_hash_function(|x: &u64| (*x / 2 % 2) as usize)
///     .with_hash_function(|x: &u64| (*x / 4 % 2) as usize)
///     .build()
///     .unwrap_err();
/// assert_eq!(err, Error::TooManyHashFunctions { count: 3, capacity: 2 });
/// # Ok::<(), Error>(())
/// ```
pub struct Builder<T: ?Sized> {
    config: Config,
    hash_functions: Vec<HashFunction<T>>,
}

impl<T: ?Sized> Debug for Builder<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Builder")
            .field("config", &self.config)
            .field("hash_functions", &self.hash_functions.len())
            .finish()
    }
}

impl<T: ?Sized> Default for Builder<T> {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}

impl<T: ?Sized> Builder<T> {
    /// Initializes the `Builder` with defaults
    pub fn new() -> Self {
        Default::default()
    }

    /// Initializes the `Builder` with given configuration, e.g. loaded from a file.
    /// Configuration is validated in `build`.
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            hash_functions: Vec::new(),
        }
    }

    /// # Description
    /// Sets number of bits in the filter, latest call wins.
    /// Must be greater than zero
    pub fn with_capacity(mut self, capacity: usize) -> Result<Self> {
        let config = Config { capacity };
        config.validate()?;
        info!("bloom filter capacity set to: {}", capacity);
        self.config = config;
        Ok(self)
    }

    /// # Description
    /// Appends hash function to the list of filter hash functions.
    /// Function must return positions in `[0, capacity)`
    pub fn with_hash_function<F>(mut self, hash_function: F) -> Self
    where
        F: Fn(&T) -> usize + Send + Sync + 'static,
    {
        self.hash_functions.push(Box::new(hash_function));
        self
    }

    /// Creates `BloomFilter` based on given configuration
    pub fn build(self) -> Result<BloomFilter<T>> {
        self.config.validate()?;
        if self.hash_functions.is_empty() {
            error!("bloom filter without hash functions can't be built");
            return Err(Error::NoHashFunctions);
        }
        self.config
            .check_hash_functions_count(self.hash_functions.len())?;
        Ok(BloomFilter::with_hash_functions(
            self.config,
            self.hash_functions,
        ))
    }
}
