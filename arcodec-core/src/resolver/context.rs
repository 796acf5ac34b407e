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

use crate::buffer::{Reader, Writer};
use crate::config::Config;
use crate::error::Error;
use crate::resolver::type_resolver::{TypeInfo, TypeResolver};
use crate::types::SIZE_OF_COUNT;

/// Serialization state for one `serialize` call.
///
/// Passed by `&mut` through the whole chain of nested serializers, so every
/// primitive write lands in the same append-only buffer.
pub struct WriteContext<'a> {
    pub writer: Writer,
    type_resolver: &'a TypeResolver,
    config: &'a Config,
    current_depth: u32,
    composite_depth: u32,
}

impl<'a> WriteContext<'a> {
    pub fn new(type_resolver: &'a TypeResolver, config: &'a Config) -> WriteContext<'a> {
        Self::with_writer(Writer::default(), type_resolver, config)
    }

    pub fn with_writer(
        writer: Writer,
        type_resolver: &'a TypeResolver,
        config: &'a Config,
    ) -> WriteContext<'a> {
        WriteContext {
            writer,
            type_resolver,
            config,
            current_depth: 0,
            composite_depth: 0,
        }
    }

    #[inline(always)]
    pub fn get_type_resolver(&self) -> &'a TypeResolver {
        self.type_resolver
    }

    #[inline(always)]
    pub fn get_config(&self) -> &'a Config {
        self.config
    }

    /// Writes a collection header after checking `len` against the limits the
    /// reader will enforce.
    pub fn write_count(&mut self, len: usize) -> Result<(), Error> {
        if len > self.config.max_collection_size() {
            return Err(Error::encode_error(format!(
                "collection of {} elements exceeds max_collection_size {}",
                len,
                self.config.max_collection_size()
            )));
        }
        let count = i32::try_from(len).map_err(|_| {
            Error::encode_error(format!("collection of {} elements overflows i32", len))
        })?;
        self.writer.write_i32(count);
        Ok(())
    }

    /// Writes the registry id of `rs_type_id` and returns its type info.
    pub fn write_any_typeinfo(
        &mut self,
        rs_type_id: std::any::TypeId,
    ) -> Result<&'a TypeInfo, Error> {
        let type_info = self.type_resolver.get_type_info(&rs_type_id)?;
        self.writer.write_u32(type_info.get_type_id());
        Ok(type_info)
    }

    pub fn inc_depth(&mut self) -> Result<(), Error> {
        self.current_depth += 1;
        if self.current_depth > self.config.max_dyn_depth() {
            return Err(Error::depth_exceed(format!(
                "Maximum polymorphic nesting depth ({}) exceeded. Current depth: {}",
                self.config.max_dyn_depth(),
                self.current_depth
            )));
        }
        Ok(())
    }

    pub fn dec_depth(&mut self) {
        self.current_depth = self.current_depth.saturating_sub(1);
    }

    /// Enters one versioned composite. Fails once composites nest deeper
    /// than `max_depth`.
    pub fn inc_composite_depth(&mut self) -> Result<(), Error> {
        self.composite_depth += 1;
        if self.composite_depth > self.config.max_depth() {
            tracing::debug!(
                depth = self.composite_depth,
                limit = self.config.max_depth(),
                "composite nesting too deep"
            );
            return Err(Error::depth_exceed(format!(
                "Maximum composite nesting depth ({}) exceeded. Current depth: {}",
                self.config.max_depth(),
                self.composite_depth
            )));
        }
        Ok(())
    }

    pub fn dec_composite_depth(&mut self) {
        self.composite_depth = self.composite_depth.saturating_sub(1);
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.writer.into_bytes()
    }
}

/// Deserialization state for one `deserialize` call.
pub struct ReadContext<'a> {
    pub reader: Reader<'a>,
    type_resolver: &'a TypeResolver,
    config: &'a Config,
    current_depth: u32,
    composite_depth: u32,
}

impl<'a> ReadContext<'a> {
    pub fn new(
        bf: &'a [u8],
        type_resolver: &'a TypeResolver,
        config: &'a Config,
    ) -> ReadContext<'a> {
        ReadContext {
            reader: Reader::new(bf),
            type_resolver,
            config,
            current_depth: 0,
            composite_depth: 0,
        }
    }

    #[inline(always)]
    pub fn get_type_resolver(&self) -> &'a TypeResolver {
        self.type_resolver
    }

    #[inline(always)]
    pub fn get_config(&self) -> &'a Config {
        self.config
    }

    /// Reads a collection header and checks it before any element is decoded.
    ///
    /// A negative count or one above `max_collection_size` is a decode error.
    /// A count whose elements cannot fit in the remaining bytes, at
    /// `min_element_size` bytes each, fails right away as insufficient data.
    pub fn read_count(&mut self, min_element_size: usize) -> Result<usize, Error> {
        let offset = self.reader.get_cursor();
        let count = self.reader.read_i32()?;
        if count < 0 {
            tracing::debug!(offset, count, "rejecting negative collection count");
            return Err(Error::decode_error(format!(
                "negative collection count {} at offset {}",
                count, offset
            )));
        }
        let count = count as usize;
        let limit = self.config.max_collection_size();
        if count > limit {
            tracing::debug!(offset, count, limit, "rejecting oversized collection count");
            return Err(Error::decode_error(format!(
                "collection count {} at offset {} exceeds max_collection_size {}",
                count, offset, limit
            )));
        }
        let needed = count.saturating_mul(min_element_size);
        crate::ensure!(
            needed <= self.reader.remaining(),
            Error::insufficient_data(offset + SIZE_OF_COUNT, needed, self.reader.len())
        );
        Ok(count)
    }

    /// Reads a registry id and returns the matching type info.
    pub fn read_any_typeinfo(&mut self) -> Result<&'a TypeInfo, Error> {
        let type_id = self.reader.read_u32()?;
        self.type_resolver.get_type_info_by_id(type_id)
    }

    pub fn inc_depth(&mut self) -> Result<(), Error> {
        self.current_depth += 1;
        if self.current_depth > self.config.max_dyn_depth() {
            return Err(Error::depth_exceed(format!(
                "Maximum polymorphic nesting depth ({}) exceeded. Current depth: {}",
                self.config.max_dyn_depth(),
                self.current_depth
            )));
        }
        Ok(())
    }

    pub fn dec_depth(&mut self) {
        self.current_depth = self.current_depth.saturating_sub(1);
    }

    /// Enters one versioned composite. Fails once composites nest deeper
    /// than `max_depth`.
    pub fn inc_composite_depth(&mut self) -> Result<(), Error> {
        self.composite_depth += 1;
        if self.composite_depth > self.config.max_depth() {
            tracing::debug!(
                depth = self.composite_depth,
                limit = self.config.max_depth(),
                "composite nesting too deep"
            );
            return Err(Error::depth_exceed(format!(
                "Maximum composite nesting depth ({}) exceeded. Current depth: {}",
                self.config.max_depth(),
                self.composite_depth
            )));
        }
        Ok(())
    }

    pub fn dec_composite_depth(&mut self) {
        self.composite_depth = self.composite_depth.saturating_sub(1);
    }
}
