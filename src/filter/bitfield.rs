/// Fixed length bit array packed into `u64` words. Bits can only be set, never cleared.
pub(crate) struct BitField {
    data: Vec<u64>,
    bits_count: usize,
}

impl BitField {
    const ITEM_BYTES_SIZE: usize = 8;
    const ITEM_BITS_SIZE: usize = 64;

    const fn offset_and_mask(bit_index: usize) -> (usize, u64) {
        let mask = 1u64 << (bit_index & (Self::ITEM_BITS_SIZE - 1));
        let offset = bit_index >> 6;
        (offset, mask)
    }

    const fn items_count(bits_count: usize) -> usize {
        if bits_count > 0 {
            ((bits_count - 1) / Self::ITEM_BITS_SIZE) + 1
        } else {
            0
        }
    }

    pub(crate) fn new(bits_count: usize) -> Self {
        Self {
            data: vec![0; Self::items_count(bits_count)],
            bits_count,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.bits_count
    }

    pub(crate) fn size_in_mem(&self) -> usize {
        self.data.capacity() * Self::ITEM_BYTES_SIZE
    }

    pub(crate) fn count_ones(&self) -> usize {
        self.data.iter().map(|item| item.count_ones() as usize).sum()
    }

    #[inline]
    pub(crate) fn get(&self, index: usize) -> bool {
        debug_assert!(index < self.bits_count);

        let (offset, mask) = Self::offset_and_mask(index);
        self.data[offset] & mask != 0
    }

    /// Returns previous value of the bit
    #[inline]
    pub(crate) fn set(&mut self, index: usize) -> bool {
        debug_assert!(index < self.bits_count);

        let (offset, mask) = Self::offset_and_mask(index);
        let item = &mut self.data[offset];
        let prev = *item & mask != 0;
        *item |= mask;
        prev
    }
}
