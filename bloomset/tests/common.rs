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

/// Distinct email-like items, used as the inserted set.
#[allow(dead_code)] // false-positive
pub fn inserted_items(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("user{i}@example.com")).collect()
}

/// Distinct email-like items, disjoint from [`inserted_items`] by domain.
#[allow(dead_code)] // false-positive
pub fn absent_items(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("visitor{i}@example.org")).collect()
}
