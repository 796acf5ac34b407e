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

/// Default upper bound on a decoded collection count.
pub const DEFAULT_MAX_COLLECTION_SIZE: usize = 1 << 24;

/// Default nesting limit for polymorphic values.
pub const DEFAULT_MAX_DYN_DEPTH: u32 = 5;

/// Default nesting limit for versioned composites.
pub const DEFAULT_MAX_DEPTH: u32 = 64;

/// Configuration for arcodec serialization.
///
/// Owned by a [`Codec`](crate::codec::Codec) and borrowed by every
/// `WriteContext`/`ReadContext` it creates, so both directions of one codec
/// always agree on the limits.
#[derive(Clone, Debug)]
pub struct Config {
    /// Largest element count a collection header may carry.
    /// Larger counts are rejected on decode and refused on encode.
    pub max_collection_size: usize,
    /// Maximum nesting depth of polymorphic (`Box<dyn Any>`) values.
    pub max_dyn_depth: u32,
    /// Maximum nesting depth of versioned composites, e.g. a struct
    /// holding a `Vec` of itself.
    pub max_depth: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_collection_size: DEFAULT_MAX_COLLECTION_SIZE,
            max_dyn_depth: DEFAULT_MAX_DYN_DEPTH,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Config {
    #[inline(always)]
    pub fn max_collection_size(&self) -> usize {
        self.max_collection_size
    }

    #[inline(always)]
    pub fn max_dyn_depth(&self) -> u32 {
        self.max_dyn_depth
    }

    #[inline(always)]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }
}
