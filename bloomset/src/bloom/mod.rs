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

//! Bloom filter implementation for probabilistic set membership testing.
//!
//! A Bloom filter is a space-efficient probabilistic data structure used to test whether
//! an element is a member of a set. False positive matches are possible, but false negatives
//! are not. In other words, a query returns either "possibly in set" or "definitely not in set".
//!
//! # Properties
//!
//! - **No false negatives**: If an item was added, `contains()` will always return `true`
//! - **Possible false positives**: `contains()` may return `true` for items never added
//! - **Fixed size**: bit count and hash count are derived once, at construction
//! - **Insert only**: bits are never cleared, there is no removal or reset
//!
//! # Usage
//!
//! ```rust
//! use bloomset::bloom::BloomFilter;
//!
//! // Create a filter sized for 1000 items with 1% false positive rate
//! let mut filter = BloomFilter::new(0.01, 1000)?;
//!
//! // Add items
//! filter.add("apple");
//! filter.add("banana");
//! filter.add(42_u64.to_le_bytes());
//!
//! // Check membership
//! assert!(filter.contains("apple")); // true - definitely added
//! assert!(!filter.contains("grape")); // false - never added (probably)
//!
//! // Get statistics
//! println!("Bits: {}", filter.bit_count());
//! println!("Hashes: {}", filter.hash_count());
//! println!("Bits set: {}", filter.approx_set_bit_count());
//! println!("Est. FPP: {:.4}%", filter.estimated_fpp() * 100.0);
//! # Ok::<(), bloomset::error::Error>(())
//! ```
//!
//! # Creating Filters
//!
//! ## By Accuracy (Recommended)
//!
//! Calculates the bit count `m = ceil(-n ln(p) / ln(2)^2)` and hash count
//! `k = ceil(-ln(p) / ln(2))`:
//!
//! ```rust
//! # use bloomset::bloom::BloomFilterBuilder;
//! let filter = BloomFilterBuilder::with_accuracy(
//!     10_000, // Expected items
//!     0.01,   // Target false positive probability (1%)
//! )?
//! .build();
//! # Ok::<(), bloomset::error::Error>(())
//! ```
//!
//! ## By Size (Manual)
//!
//! ```rust
//! # use bloomset::bloom::BloomFilterBuilder;
//! let filter = BloomFilterBuilder::with_size(
//!     95_851, // Number of bits
//!     7,      // Number of hash functions
//! )?
//! .build();
//! # Ok::<(), bloomset::error::Error>(())
//! ```
//!
//! # Sharing
//!
//! `add` takes `&mut self` and `contains` takes `&self`. To share a filter across threads,
//! wrap it in a [`std::sync::RwLock`] and take the write lock around `add`.
//!
//! # Implementation Details
//!
//! - Uses MurmurHash3 x86_32 for hashing, see [`crate::hash`]
//! - The `i`-th hash function is MurmurHash3 seeded with `i`, for `i` in `0..k`
//! - Bits packed in `u64` words
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/time trade-offs in hash coding with allowable errors"

mod bitarray;
mod builder;
mod sketch;

pub use self::builder::BloomFilterBuilder;
pub use self::builder::MAX_NUM_BITS;
pub use self::builder::MAX_NUM_HASHES;
pub use self::builder::MIN_NUM_BITS;
pub use self::builder::MIN_NUM_HASHES;
pub use self::sketch::BloomFilter;
