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

use std::f64::consts::LN_2;

use super::bitarray::BitArray;
use super::BloomFilter;
use crate::error::Error;

/// Smallest accepted bit count.
pub const MIN_NUM_BITS: u64 = 1;
/// Largest accepted bit count, `i32::MAX` words of 64 bits.
pub const MAX_NUM_BITS: u64 = i32::MAX as u64 * 64;
/// Smallest accepted hash count.
pub const MIN_NUM_HASHES: u16 = 1;
/// Largest accepted hash count.
pub const MAX_NUM_HASHES: u16 = i16::MAX as u16;

/// Builder for creating [`BloomFilter`] instances.
///
/// Provides two construction modes:
/// - [`with_accuracy()`](Self::with_accuracy): Specify expected items and false positive rate
///   (recommended)
/// - [`with_size()`](Self::with_size): Specify bit count and hash functions (manual)
///
/// Both validate their input, so [`build()`](Self::build) cannot fail.
#[derive(Debug, Clone)]
pub struct BloomFilterBuilder {
    num_bits: u64,
    num_hashes: u16,
}

impl BloomFilterBuilder {
    /// Creates a builder with optimal parameters for a target accuracy.
    ///
    /// The bit count comes from [`compute_bit_count`](Self::compute_bit_count) and the hash
    /// count from [`compute_hash_count`](Self::compute_hash_count).
    ///
    /// # Arguments
    ///
    /// - `max_items`: Expected number of distinct items, at least 1
    /// - `fpp`: Target false positive probability, strictly between 0 and 1
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidParameter`](crate::error::ErrorKind::InvalidParameter) if
    /// either argument is out of domain or the resulting filter would be too large.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomset::bloom::BloomFilterBuilder;
    /// let filter = BloomFilterBuilder::with_accuracy(10_000, 0.01)?.build();
    /// assert_eq!(filter.bit_count(), 95_851);
    /// assert_eq!(filter.hash_count(), 7);
    /// # Ok::<(), bloomset::error::Error>(())
    /// ```
    pub fn with_accuracy(max_items: u64, fpp: f64) -> Result<Self, Error> {
        let num_bits = Self::compute_bit_count(fpp, max_items)?;
        let num_hashes = Self::compute_hash_count(fpp)?;
        Ok(BloomFilterBuilder {
            num_bits,
            num_hashes,
        })
    }

    /// Creates a builder with manual size specification.
    ///
    /// Use this when working with pre-calculated parameters. The bit count is kept
    /// exactly as given (no rounding to whole words), since it is the modulus of every
    /// bit position.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidParameter`](crate::error::ErrorKind::InvalidParameter) if
    /// `num_bits` is not in `[MIN_NUM_BITS, MAX_NUM_BITS]` or `num_hashes` is not in
    /// `[MIN_NUM_HASHES, MAX_NUM_HASHES]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomset::bloom::BloomFilterBuilder;
    /// let filter = BloomFilterBuilder::with_size(10_000, 7)?.build();
    /// assert_eq!(filter.bit_count(), 10_000);
    /// # Ok::<(), bloomset::error::Error>(())
    /// ```
    pub fn with_size(num_bits: u64, num_hashes: u16) -> Result<Self, Error> {
        if !(MIN_NUM_BITS..=MAX_NUM_BITS).contains(&num_bits) {
            return Err(Error::out_of_range(
                "num_bits",
                num_bits,
                &format!("[{MIN_NUM_BITS}, {MAX_NUM_BITS}]"),
            ));
        }
        if !(MIN_NUM_HASHES..=MAX_NUM_HASHES).contains(&num_hashes) {
            return Err(Error::out_of_range(
                "num_hashes",
                num_hashes,
                &format!("[{MIN_NUM_HASHES}, {MAX_NUM_HASHES}]"),
            ));
        }

        Ok(BloomFilterBuilder {
            num_bits,
            num_hashes,
        })
    }

    /// Builds the Bloom filter with all bits unset.
    pub fn build(self) -> BloomFilter {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            num_bits = self.num_bits,
            num_hashes = self.num_hashes,
            "allocating bloom filter"
        );

        BloomFilter {
            num_hashes: self.num_hashes,
            bit_array: BitArray::new(self.num_bits),
        }
    }

    /// Computes the number of bits for `max_items` items at false positive probability `fpp`.
    ///
    /// Formula: `m = ceil(-(n * ln(p)) / (ln(2))^2)`
    /// where n = max_items, p = fpp
    ///
    /// # Errors
    ///
    /// Fails if `fpp` is not in `(0, 1)`, if `max_items` is 0, or if `m` exceeds
    /// [`MAX_NUM_BITS`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomset::bloom::BloomFilterBuilder;
    /// let bits = BloomFilterBuilder::compute_bit_count(0.01, 1000)?;
    /// assert_eq!(bits, 9586); // 9585.06 rounded up
    /// # Ok::<(), bloomset::error::Error>(())
    /// ```
    pub fn compute_bit_count(fpp: f64, max_items: u64) -> Result<u64, Error> {
        check_fpp(fpp)?;
        if max_items < 1 {
            return Err(Error::out_of_range("max_items", max_items, "[1, u64::MAX]"));
        }

        let n = max_items as f64;
        let bits = (-(n * fpp.ln()) / (LN_2 * LN_2)).ceil();
        if bits > MAX_NUM_BITS as f64 {
            return Err(Error::invalid_parameter(format!(
                "filter would need more than {MAX_NUM_BITS} bits"
            ))
            .with_context("fpp", fpp)
            .with_context("max_items", max_items));
        }

        // ln(p) < 0 for p < 1 so bits >= 1 except when the product underflows
        Ok((bits as u64).max(MIN_NUM_BITS))
    }

    /// Computes the number of hash functions for false positive probability `fpp`.
    ///
    /// Formula: `k = ceil(-ln(p) / ln(2))`
    ///
    /// # Errors
    ///
    /// Fails if `fpp` is not in `(0, 1)` or if `k` exceeds [`MAX_NUM_HASHES`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomset::bloom::BloomFilterBuilder;
    /// let hashes = BloomFilterBuilder::compute_hash_count(0.01)?;
    /// assert_eq!(hashes, 7); // 6.64 rounded up
    /// # Ok::<(), bloomset::error::Error>(())
    /// ```
    pub fn compute_hash_count(fpp: f64) -> Result<u16, Error> {
        check_fpp(fpp)?;

        // Ceil to avoid selecting too few hashes.
        let k = (-fpp.ln() / LN_2).ceil();
        if k > f64::from(MAX_NUM_HASHES) {
            return Err(Error::invalid_parameter(format!(
                "filter would need more than {MAX_NUM_HASHES} hash functions"
            ))
            .with_context("fpp", fpp));
        }

        Ok((k as u16).max(MIN_NUM_HASHES))
    }
}

fn check_fpp(fpp: f64) -> Result<(), Error> {
    // written so that NaN is rejected as well
    if fpp > 0.0 && fpp < 1.0 {
        Ok(())
    } else {
        Err(Error::out_of_range("fpp", fpp, "(0.0, 1.0)"))
    }
}
