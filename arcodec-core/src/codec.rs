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

use crate::buffer::Writer;
use crate::config::Config;
use crate::error::Error;
use crate::resolver::context::{ReadContext, WriteContext};
use crate::resolver::type_resolver::TypeResolver;
use crate::serializer::Serializer;

/// Entry point of the serialization framework.
///
/// A `Codec` owns the serializer registry and the decode limits. Setup
/// (builder methods and [`Codec::register`]) takes `self` or `&mut self`; after
/// that the codec is only read, so one instance can be shared across threads
/// behind an `Arc` or a reference. Every call builds its own context.
///
/// No envelope is written around a value: the bytes of `serialize(&v)` are
/// exactly the bytes `v`'s serializer produces.
///
/// # Examples
///
/// ```rust
/// use arcodec_core::geometry::{Mesh, Vector2, Vector3};
/// use arcodec_core::Codec;
///
/// let codec = Codec::default();
/// let mesh = Mesh::new(
///     vec![Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0)],
///     vec![0, 1, 2],
///     vec![Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0), Vector2::new(0.0, 1.0)],
/// );
/// let bytes = codec.serialize(&mesh).unwrap();
/// let decoded: Mesh = codec.deserialize(&bytes).unwrap();
/// assert_eq!(decoded, mesh);
/// ```
///
/// Tighter limits for untrusted peers:
///
/// ```rust
/// use arcodec_core::Codec;
///
/// let codec = Codec::default().max_collection_size(4096).max_dyn_depth(2);
/// assert_eq!(codec.get_config().max_collection_size(), 4096);
/// ```
#[derive(Default)]
pub struct Codec {
    config: Config,
    type_resolver: TypeResolver,
}

impl Codec {
    /// Sets the largest element count a collection header may carry.
    ///
    /// Larger headers fail to decode with a decode error, and collections
    /// longer than this fail to encode. Defaults to `1 << 24`.
    pub fn max_collection_size(mut self, max_collection_size: usize) -> Self {
        self.config.max_collection_size = max_collection_size;
        self
    }

    /// Sets the maximum nesting depth of `Box<dyn Any>` values. Defaults to 5.
    pub fn max_dyn_depth(mut self, max_dyn_depth: u32) -> Self {
        self.config.max_dyn_depth = max_dyn_depth;
        self
    }

    /// Sets how deeply versioned composites may nest. Defaults to 64.
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    pub fn get_config(&self) -> &Config {
        &self.config
    }

    pub fn get_type_resolver(&self) -> &TypeResolver {
        &self.type_resolver
    }

    /// Registers `T` for polymorphic (`Box<dyn Any>`) encoding under `id`.
    ///
    /// Ids below [`TypeId::BOUND`](crate::types::TypeId::BOUND) are reserved
    /// for builtin types. Reusing an id, or registering a type twice, fails
    /// with `NotAllowed`.
    ///
    /// ```rust
    /// use arcodec_core::Codec;
    /// use std::any::Any;
    ///
    /// let mut codec = Codec::default();
    /// codec.register::<Vec<i32>>(100).unwrap();
    /// let value: Box<dyn Any> = Box::new(vec![1, 2, 3]);
    /// let bytes = codec.serialize(&value).unwrap();
    /// let decoded: Box<dyn Any> = codec.deserialize(&bytes).unwrap();
    /// assert_eq!(decoded.downcast_ref::<Vec<i32>>(), Some(&vec![1, 2, 3]));
    /// ```
    pub fn register<T: Serializer>(&mut self, id: u32) -> Result<(), Error> {
        self.type_resolver.register::<T>(id)
    }

    /// Serializes `record` into a new byte vector.
    pub fn serialize<T: Serializer>(&self, record: &T) -> Result<Vec<u8>, Error> {
        let mut bf = Vec::with_capacity(T::reserved_space());
        self.serialize_to(record, &mut bf)?;
        Ok(bf)
    }

    /// Appends the encoding of `record` to `bf` and returns the number of
    /// bytes written.
    ///
    /// On error `bf` is left with its original contents.
    pub fn serialize_to<T: Serializer>(&self, record: &T, bf: &mut Vec<u8>) -> Result<usize, Error> {
        tracing::trace!(type_name = std::any::type_name::<T>(), "serialize");
        let start = bf.len();
        let writer = Writer::from_vec(std::mem::take(bf));
        let mut context = WriteContext::with_writer(writer, &self.type_resolver, &self.config);
        let result = record.serialize(&mut context);
        *bf = context.into_bytes();
        match result {
            Ok(()) => Ok(bf.len() - start),
            Err(e) => {
                bf.truncate(start);
                Err(e)
            }
        }
    }

    /// Decodes a `T` from the start of `bf`.
    ///
    /// Bytes after the value are ignored.
    pub fn deserialize<T: Serializer>(&self, bf: &[u8]) -> Result<T, Error> {
        tracing::trace!(
            type_name = std::any::type_name::<T>(),
            len = bf.len(),
            "deserialize"
        );
        let mut context = ReadContext::new(bf, &self.type_resolver, &self.config);
        let value = T::deserialize(&mut context)?;
        let trailing = context.reader.remaining();
        if trailing > 0 {
            tracing::trace!(trailing, "ignoring trailing bytes");
        }
        Ok(value)
    }
}
