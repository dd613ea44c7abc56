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

use std::mem;

use super::bitarray::BitArray;
use super::BloomFilterBuilder;
use crate::error::Error;
use crate::hash;

/// A Bloom filter for probabilistic set membership testing.
///
/// Provides fast membership queries with:
/// - No false negatives (added items always return `true`)
/// - Tunable false positive rate
/// - Constant space usage
///
/// Items are arbitrary byte sequences. String items are hashed as their UTF-8 bytes, so
/// `filter.add("café")` and `filter.add("café".as_bytes())` are the same insertion.
///
/// Use [`BloomFilter::new`] or [`BloomFilterBuilder`] to construct instances.
#[derive(Debug, Clone, PartialEq)]
pub struct BloomFilter {
    /// Number of hash functions to use (k)
    pub(super) num_hashes: u16,
    /// Bit array of m bits
    pub(super) bit_array: BitArray,
}

impl BloomFilter {
    /// Creates an empty filter sized for `expected_items` items at false positive
    /// probability `fpp`.
    ///
    /// Shorthand for [`BloomFilterBuilder::with_accuracy`] followed by
    /// [`build`](BloomFilterBuilder::build).
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidParameter`](crate::error::ErrorKind::InvalidParameter) if
    /// `fpp` is not strictly between 0 and 1 or `expected_items` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomset::bloom::BloomFilter;
    /// let filter = BloomFilter::new(0.01, 1000)?;
    /// assert_eq!(filter.bit_count(), 9586);
    /// assert_eq!(filter.hash_count(), 7);
    ///
    /// assert!(BloomFilter::new(1.0, 1000).is_err());
    /// assert!(BloomFilter::new(0.01, 0).is_err());
    /// # Ok::<(), bloomset::error::Error>(())
    /// ```
    pub fn new(fpp: f64, expected_items: u64) -> Result<Self, Error> {
        Ok(BloomFilterBuilder::with_accuracy(expected_items, fpp)?.build())
    }

    /// Adds an item to the filter.
    ///
    /// After insertion, `contains(item)` will always return `true`. Adding the same item
    /// again leaves the bits unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomset::bloom::BloomFilter;
    /// let mut filter = BloomFilter::new(0.01, 100)?;
    ///
    /// filter.add("apple");
    /// filter.add(b"raw bytes");
    /// filter.add(vec![1u8, 2, 3]);
    ///
    /// assert!(filter.contains("apple"));
    /// # Ok::<(), bloomset::error::Error>(())
    /// ```
    pub fn add(&mut self, item: impl AsRef<[u8]>) {
        let item = item.as_ref();
        let num_bits = self.bit_count();
        for bit_index in hash::indices(item, self.num_hashes, num_bits) {
            self.bit_array.set(bit_index);
        }
    }

    /// Tests whether an item is possibly in the set.
    ///
    /// Returns:
    /// - `true`: Item was **possibly** added (or false positive)
    /// - `false`: Item was **definitely not** added
    ///
    /// Stops at the first unset bit.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomset::bloom::BloomFilter;
    /// let mut filter = BloomFilter::new(0.01, 100)?;
    /// filter.add("apple");
    ///
    /// assert!(filter.contains("apple"));
    /// assert!(!filter.contains("grape")); // never added
    /// # Ok::<(), bloomset::error::Error>(())
    /// ```
    pub fn contains(&self, item: impl AsRef<[u8]>) -> bool {
        let item = item.as_ref();
        hash::indices(item, self.num_hashes, self.bit_count())
            .all(|bit_index| self.bit_array.get(bit_index))
    }

    /// Tests and adds an item in a single operation.
    ///
    /// Returns whether the item was possibly already in the set before insertion.
    /// Each hash is computed once, instead of twice for `contains()` then `add()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomset::bloom::BloomFilter;
    /// let mut filter = BloomFilter::new(0.01, 100)?;
    ///
    /// assert!(!filter.contains_and_add("apple")); // first insertion
    /// assert!(filter.contains_and_add("apple")); // now it's in the set
    /// # Ok::<(), bloomset::error::Error>(())
    /// ```
    pub fn contains_and_add(&mut self, item: impl AsRef<[u8]>) -> bool {
        let item = item.as_ref();
        let num_bits = self.bit_count();
        let mut was_present = true;
        for bit_index in hash::indices(item, self.num_hashes, num_bits) {
            if self.bit_array.set(bit_index) {
                was_present = false;
            }
        }
        was_present
    }

    /// Returns the number of addressable bits (m), fixed at construction.
    pub fn bit_count(&self) -> u64 {
        self.bit_array.len()
    }

    /// Returns the number of hash functions (k), fixed at construction.
    pub fn hash_count(&self) -> u16 {
        self.num_hashes
    }

    /// Returns the number of bits currently set to 1.
    ///
    /// Computed by scanning the whole bit array.
    pub fn approx_set_bit_count(&self) -> u64 {
        self.bit_array.count_ones()
    }

    /// Returns whether no item has been added yet.
    pub fn is_empty(&self) -> bool {
        self.approx_set_bit_count() == 0
    }

    /// Returns the current load factor (fraction of bits set).
    ///
    /// A filter filled to its expected item count sits near 0.5.
    /// Values above 0.5 indicate degraded false positive rates.
    pub fn load_factor(&self) -> f64 {
        self.approx_set_bit_count() as f64 / self.bit_count() as f64
    }

    /// Estimates the current false positive probability.
    ///
    /// Uses the approximation: `load_factor^k`
    /// where:
    /// - load_factor = fraction of bits set (approx_set_bit_count / bit_count)
    /// - k = hash_count
    pub fn estimated_fpp(&self) -> f64 {
        self.load_factor().powi(i32::from(self.num_hashes))
    }

    /// Returns the memory footprint in bytes: `ceil(bit_count / 8)` for the bits plus the
    /// fixed size of the filter itself.
    ///
    /// This is the figure to compare against an exact set holding the same items.
    pub fn footprint_bytes(&self) -> u64 {
        self.bit_array.size_in_bytes() + mem::size_of::<Self>() as u64
    }
}
