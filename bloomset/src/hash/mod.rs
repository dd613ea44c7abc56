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

//! The seeded hash family used to address filter bits.
//!
//! A single MurmurHash3 x86_32 function is evaluated with seeds `0, 1, .., k - 1` to
//! stand in for `k` independent hash functions. Two items may collide under some
//! seeds; only a collision under every seed produces a false positive.

mod murmurhash;

use std::hash::Hasher;

pub use self::murmurhash::MurmurHash3X86_32;

/// Maps `item` to a bit position in `0..num_bits` for the given `seed`.
///
/// The 32-bit digest is read as a signed two's-complement value and reduced with a
/// Euclidean modulo, so the result is never negative. This matches the indices
/// produced by the common signed MurmurHash3 bindings, which lets filters built
/// elsewhere with the same bit count and hash count address the same bits.
///
/// The function is deterministic and accepts any byte sequence.
///
/// # Panics
///
/// Panics if `num_bits` is zero.
///
/// # Examples
///
/// ```
/// # use bloomset::hash::index;
/// let i = index(b"foo", 0, 1000);
/// assert_eq!(i, 488);
/// assert_eq!(index(b"foo", 0, 1000), i);
/// ```
pub fn index(item: &[u8], seed: u32, num_bits: u64) -> u64 {
    assert!(num_bits > 0, "num_bits must be positive");

    let mut hasher = MurmurHash3X86_32::with_seed(seed);
    hasher.write(item);
    let signed = i128::from(hasher.finish32() as i32);
    signed.rem_euclid(i128::from(num_bits)) as u64
}

/// Returns the iterator of all bit positions an item maps to, one per seed in
/// `0..num_hashes`. This is the item's fingerprint.
pub fn indices(item: &[u8], num_hashes: u16, num_bits: u64) -> impl Iterator<Item = u64> + '_ {
    (0..u32::from(num_hashes)).map(move |seed| index(item, seed, num_bits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_reduction() {
        // digest of "foo" is -156908512 with seed 0 and -1322301282 with seed 42
        assert_eq!(index(b"foo", 0, 1000), 488);
        assert_eq!(index(b"foo", 42, 1000), 718);
        // positive digest: "a" with seed 0 hashes to 0x3c2569b2
        assert_eq!(index(b"a", 0, 1 << 32), 0x3c2569b2);
    }

    #[test]
    fn test_index_in_range() {
        for num_bits in [1, 2, 7, 64, 65, 1000, 95_851] {
            for seed in 0..16 {
                let i = index(format!("item-{seed}").as_bytes(), seed, num_bits);
                assert!(i < num_bits);
            }
        }
        assert_eq!(index(b"anything", 3, 1), 0);
    }

    #[test]
    fn test_deterministic() {
        for seed in 0..8 {
            let first = index(b"user@example.com", seed, 9_586);
            for _ in 0..4 {
                assert_eq!(index(b"user@example.com", seed, 9_586), first);
            }
        }
    }

    #[test]
    fn test_seeds_differ() {
        let fingerprint: Vec<u64> = indices(b"user@example.com", 7, 1 << 20).collect();
        assert_eq!(fingerprint.len(), 7);
        let mut distinct = fingerprint.clone();
        distinct.sort_unstable();
        distinct.dedup();
        // seven positions out of a million are distinct in practice
        assert_eq!(distinct.len(), 7);
        assert_eq!(fingerprint[3], index(b"user@example.com", 3, 1 << 20));
    }

    #[test]
    #[should_panic(expected = "num_bits must be positive")]
    fn test_zero_bits() {
        index(b"foo", 0, 0);
    }
}
