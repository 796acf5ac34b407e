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
use crate::serializer::Serializer;

// Fixed-size arrays carry no header, the length is part of the type.
impl<T: Serializer, const N: usize> Serializer for [T; N] {
    #[inline]
    fn serialize(&self, context: &mut WriteContext) -> Result<(), Error> {
        T::serialize_slice(self, context)
    }

    #[inline]
    fn deserialize(context: &mut ReadContext) -> Result<Self, Error> {
        let items = T::deserialize_vec(context, N)?;
        items.try_into().map_err(|items: Vec<T>| {
            Error::decode_error(format!(
                "Array length mismatch: expected {}, got {}",
                N,
                items.len()
            ))
        })
    }

    #[inline]
    fn min_encoded_size() -> usize {
        T::min_encoded_size().saturating_mul(N)
    }

    #[inline]
    fn reserved_space() -> usize {
        T::reserved_space().saturating_mul(N)
    }
}
