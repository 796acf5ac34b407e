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

use crate::error::Error;
use crate::resolver::context::ReadContext;
use crate::resolver::context::WriteContext;
use crate::serializer::collection::{read_map, write_map};
use crate::serializer::Serializer;
use crate::types::SIZE_OF_COUNT;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

// HashMap iteration order is unspecified, so two equal maps may encode to
// different byte sequences. BTreeMap output is deterministic.
impl<K: Serializer + Eq + Hash, V: Serializer> Serializer for HashMap<K, V> {
    fn serialize(&self, context: &mut WriteContext) -> Result<(), Error> {
        write_map(self, context)
    }

    fn deserialize(context: &mut ReadContext) -> Result<Self, Error> {
        read_map::<Self, K, V>(context)
    }

    fn min_encoded_size() -> usize {
        SIZE_OF_COUNT
    }
}

impl<K: Serializer + Ord, V: Serializer> Serializer for BTreeMap<K, V> {
    fn serialize(&self, context: &mut WriteContext) -> Result<(), Error> {
        write_map(self, context)
    }

    fn deserialize(context: &mut ReadContext) -> Result<Self, Error> {
        read_map::<Self, K, V>(context)
    }

    fn min_encoded_size() -> usize {
        SIZE_OF_COUNT
    }
}
