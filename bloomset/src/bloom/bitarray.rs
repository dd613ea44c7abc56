// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

/// Fixed-length bit storage packed into `u64` words.
///
/// Bits can only be set, never cleared, which keeps every filter built on top of
/// it free of false negatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BitArray {
    num_bits: u64,
    words: Box<[u64]>,
}

impl BitArray {
    /// Allocates `num_bits` zeroed bits.
    pub(crate) fn new(num_bits: u64) -> Self {
        let num_words = num_bits.div_ceil(64) as usize;
        BitArray {
            num_bits,
            words: vec![0u64; num_words].into_boxed_slice(),
        }
    }

    /// Returns the number of addressable bits.
    pub(crate) fn len(&self) -> u64 {
        self.num_bits
    }

    /// Gets the value of a single bit.
    pub(crate) fn get(&self, bit_index: u64) -> bool {
        let (word_index, mask) = self.locate(bit_index);
        (self.words[word_index] & mask) != 0
    }

    /// Sets a single bit, returning whether it was previously unset.
    pub(crate) fn set(&mut self, bit_index: u64) -> bool {
        let (word_index, mask) = self.locate(bit_index);
        let was_unset = (self.words[word_index] & mask) == 0;
        self.words[word_index] |= mask;
        was_unset
    }

    /// Counts the bits set to one by scanning every word.
    pub(crate) fn count_ones(&self) -> u64 {
        self.words.iter().map(|w| u64::from(w.count_ones())).sum()
    }

    /// Returns the storage needed for the bits, `ceil(num_bits / 8)` bytes.
    pub(crate) fn size_in_bytes(&self) -> u64 {
        self.num_bits.div_ceil(8)
    }

    #[inline]
    fn locate(&self, bit_index: u64) -> (usize, u64) {
        debug_assert!(
            bit_index < self.num_bits,
            "IndexOutOfRange: bit index {bit_index} must be less than {}",
            self.num_bits
        );
        let word_index = (bit_index >> 6) as usize; // Equivalent to bit_index / 64
        let bit_offset = bit_index & 63; // Equivalent to bit_index % 64
        (word_index, 1u64 << bit_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::BitArray;

    #[test]
    fn test_new_is_zeroed() {
        let bits = BitArray::new(130);
        assert_eq!(bits.len(), 130);
        assert_eq!(bits.count_ones(), 0);
        assert_eq!(bits.size_in_bytes(), 17);
        assert!((0..130).all(|i| !bits.get(i)));
    }

    #[test]
    fn test_set_and_get() {
        let mut bits = BitArray::new(130);
        assert!(bits.set(0));
        assert!(bits.set(63));
        assert!(bits.set(64));
        assert!(bits.set(129));
        assert!(!bits.set(64));

        assert!(bits.get(0));
        assert!(bits.get(63));
        assert!(bits.get(64));
        assert!(bits.get(129));
        assert!(!bits.get(1));
        assert!(!bits.get(128));
        assert_eq!(bits.count_ones(), 4);
    }

    #[test]
    fn test_single_bit() {
        let mut bits = BitArray::new(1);
        assert_eq!(bits.size_in_bytes(), 1);
        assert!(!bits.get(0));
        bits.set(0);
        assert!(bits.get(0));
        assert_eq!(bits.count_ones(), 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "IndexOutOfRange")]
    fn test_out_of_range_in_last_word() {
        // index 100 still lives in the second word, only the debug check catches it
        let bits = BitArray::new(70);
        bits.get(100);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_past_storage() {
        let mut bits = BitArray::new(64);
        bits.set(64);
    }
}
