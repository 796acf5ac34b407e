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

//! Shared helpers for count-prefixed collections.
//!
//! Layout: `[count: i32][count × element]`. The count is validated by
//! [`ReadContext::read_count`] before the first element is decoded.

use crate::error::Error;
use crate::resolver::context::ReadContext;
use crate::resolver::context::WriteContext;
use crate::serializer::Serializer;

pub fn write_collection<'a, T, I>(iter: I, context: &mut WriteContext) -> Result<(), Error>
where
    T: Serializer + 'a,
    I: IntoIterator<Item = &'a T>,
    I::IntoIter: ExactSizeIterator,
{
    let iter = iter.into_iter();
    let len = iter.len();
    context.write_count(len)?;
    context
        .writer
        .reserve(T::reserved_space().saturating_mul(len));
    for item in iter {
        item.serialize(context)?;
    }
    Ok(())
}

pub fn read_collection<C, T>(context: &mut ReadContext) -> Result<C, Error>
where
    T: Serializer,
    C: FromIterator<T>,
{
    let len = context.read_count(T::min_encoded_size())?;
    (0..len)
        .map(|_| T::deserialize(context))
        .collect::<Result<C, Error>>()
}

pub fn write_map<'a, K, V, I>(iter: I, context: &mut WriteContext) -> Result<(), Error>
where
    K: Serializer + 'a,
    V: Serializer + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
    I::IntoIter: ExactSizeIterator,
{
    let iter = iter.into_iter();
    context.write_count(iter.len())?;
    for (key, value) in iter {
        key.serialize(context)?;
        value.serialize(context)?;
    }
    Ok(())
}

pub fn read_map<C, K, V>(context: &mut ReadContext) -> Result<C, Error>
where
    K: Serializer,
    V: Serializer,
    C: FromIterator<(K, V)>,
{
    let len = context.read_count(K::min_encoded_size() + V::min_encoded_size())?;
    (0..len)
        .map(|_| -> Result<(K, V), Error> {
            let key = K::deserialize(context)?;
            let value = V::deserialize(context)?;
            Ok((key, value))
        })
        .collect::<Result<C, Error>>()
}
