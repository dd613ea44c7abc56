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

//! # bloomset
//!
//! A Bloom filter: a probabilistic set that answers "possibly present" or "definitely
//! absent", trading a bounded false positive rate for a large space saving over an exact
//! set.
//!
//! The crate is divided into modules that constitute distinct groups of functionality:
//!
//! - [`bloom`]: the filter, its builder and the sizing calculator
//! - [`hash`]: the seeded MurmurHash3 family that maps items to bit positions
//! - [`error`]: the error returned when a filter is configured with invalid parameters
//!
//! ```rust
//! use bloomset::bloom::BloomFilter;
//!
//! let mut filter = BloomFilter::new(0.01, 3)?;
//! filter.add("a");
//! filter.add("b");
//! filter.add("c");
//!
//! assert!(filter.contains("a"));
//! assert!(filter.contains("b"));
//! # Ok::<(), bloomset::error::Error>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

pub mod bloom;
pub mod error;
pub mod hash;
