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

mod common;

use std::sync::RwLock;
use std::thread;

use bloomset::bloom::BloomFilter;
use bloomset::bloom::BloomFilterBuilder;
use bloomset::error::ErrorKind;
use bloomset::hash;
use common::absent_items;
use common::inserted_items;
use googletest::assert_that;
use googletest::prelude::ge;
use googletest::prelude::lt;
use googletest::prelude::near;

const TARGET_FPP: f64 = 0.01;
const NUM_ITEMS: usize = 10_000;

#[test]
fn test_empty() {
    let filter = BloomFilter::new(TARGET_FPP, NUM_ITEMS as u64).unwrap();
    assert!(filter.is_empty());
    assert_eq!(filter.approx_set_bit_count(), 0);
    for item in inserted_items(100) {
        assert!(!filter.contains(&item));
    }
}

#[test]
fn test_no_false_negatives() {
    let mut filter = BloomFilter::new(TARGET_FPP, NUM_ITEMS as u64).unwrap();
    let items = inserted_items(NUM_ITEMS);

    for (i, item) in items.iter().enumerate() {
        filter.add(item);
        // everything added so far stays present
        if i % 1000 == 0 {
            assert!(items[..=i].iter().all(|seen| filter.contains(seen)));
        }
    }
    assert!(items.iter().all(|item| filter.contains(item)));
}

#[test]
fn test_false_positive_rate() {
    let mut filter = BloomFilter::new(TARGET_FPP, NUM_ITEMS as u64).unwrap();
    for item in inserted_items(NUM_ITEMS) {
        filter.add(item);
    }

    let false_positives = absent_items(NUM_ITEMS)
        .iter()
        .filter(|item| filter.contains(item))
        .count();
    let observed = false_positives as f64 / NUM_ITEMS as f64;
    assert_that!(observed, lt(3.0 * TARGET_FPP));

    // a filter filled to its expected item count sits at about half load
    assert_that!(filter.load_factor(), near(0.5, 0.05));
    assert_that!(filter.estimated_fpp(), near(TARGET_FPP, 0.002));
}

#[test]
fn test_small_filter_scenario() {
    let mut filter = BloomFilter::new(0.01, 3).unwrap();
    filter.add("a");
    filter.add("b");
    filter.add("c");

    assert!(filter.contains("a"));
    assert!(filter.contains("b"));
    assert!(filter.contains("c"));

    let first = filter.contains("d");
    for _ in 0..10 {
        assert_eq!(filter.contains("d"), first);
    }
}

#[test]
fn test_boundary_near_one_fpp() {
    let mut filter = BloomFilter::new(0.99, 1).unwrap();
    assert_that!(filter.bit_count(), ge(1));
    assert_that!(filter.hash_count(), ge(1));

    filter.add("only");
    assert!(filter.contains("only"));
    // a single bit is saturated by the first insertion
    assert!(filter.contains("anything else"));
}

#[test]
fn test_overfilled_filter_keeps_members() {
    let mut filter = BloomFilter::new(0.1, 10).unwrap();
    let items = inserted_items(1000);
    for item in &items {
        filter.add(item);
    }
    assert!(items.iter().all(|item| filter.contains(item)));
    assert_that!(filter.load_factor(), near(1.0, 0.01));
}

#[test]
fn test_bits_match_hash_family() {
    let mut filter = BloomFilterBuilder::with_size(4096, 5).unwrap().build();
    filter.add("user@example.com");

    let mut fingerprint: Vec<u64> =
        hash::indices(b"user@example.com", filter.hash_count(), filter.bit_count()).collect();
    fingerprint.sort_unstable();
    fingerprint.dedup();
    assert_eq!(filter.approx_set_bit_count(), fingerprint.len() as u64);
}

#[test]
fn test_bits_only_grow() {
    let mut filter = BloomFilter::new(TARGET_FPP, 1000).unwrap();
    let mut previous = 0;
    for item in inserted_items(1000) {
        filter.add(&item);
        let current = filter.approx_set_bit_count();
        assert_that!(current, ge(previous));
        previous = current;
    }
}

#[test]
fn test_invalid_construction() {
    for (fpp, n) in [(0.0, 10), (1.0, 10), (-1.0, 10), (f64::NAN, 10), (0.01, 0)] {
        let err = BloomFilter::new(fpp, n).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }
}

#[test]
fn test_shared_behind_rwlock() {
    let filter = RwLock::new(BloomFilter::new(TARGET_FPP, 4000).unwrap());
    let items = inserted_items(4000);

    thread::scope(|s| {
        for chunk in items.chunks(1000) {
            let filter = &filter;
            s.spawn(move || {
                for item in chunk {
                    filter.write().unwrap().add(item);
                }
            });
        }
    });

    let filter = filter.into_inner().unwrap();
    assert!(items.iter().all(|item| filter.contains(item)));
}
