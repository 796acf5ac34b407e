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
use crate::resolver::context::{ReadContext, WriteContext};

/// Paired encode/decode strategy for one value type.
///
/// Implementations are stateless: everything they need travels in the
/// context. A composite calls the serializers of its parts in a fixed order,
/// and that order is the wire format, so `serialize` and `deserialize` must
/// visit the parts identically.
///
/// ```rust
/// use arcodec_core::error::Error;
/// use arcodec_core::resolver::context::{ReadContext, WriteContext};
/// use arcodec_core::{Codec, Serializer};
///
/// #[derive(Debug, PartialEq)]
/// struct Anchor {
///     id: u32,
///     name: String,
/// }
///
/// impl Serializer for Anchor {
///     fn serialize(&self, context: &mut WriteContext) -> Result<(), Error> {
///         self.id.serialize(context)?;
///         self.name.serialize(context)
///     }
///
///     fn deserialize(context: &mut ReadContext) -> Result<Self, Error> {
///         Ok(Anchor {
///             id: u32::deserialize(context)?,
///             name: String::deserialize(context)?,
///         })
///     }
/// }
///
/// let codec = Codec::default();
/// let anchor = Anchor { id: 7, name: "door".to_string() };
/// let bytes = codec.serialize(&anchor).unwrap();
/// assert_eq!(codec.deserialize::<Anchor>(&bytes).unwrap(), anchor);
/// ```
pub trait Serializer: Sized + 'static {
    /// Appends the encoding of `self` to the context's writer.
    fn serialize(&self, context: &mut WriteContext) -> Result<(), Error>;

    /// Consumes one encoded value from the context's reader.
    fn deserialize(context: &mut ReadContext) -> Result<Self, Error>;

    /// Lower bound on the encoded size of any value of this type.
    ///
    /// Collection headers are checked against it before any element is
    /// decoded. Types that can encode to zero bytes must return 0.
    #[inline(always)]
    fn min_encoded_size() -> usize {
        1
    }

    /// Expected encoded size, reserved ahead of bulk writes.
    #[inline(always)]
    fn reserved_space() -> usize {
        0
    }

    /// Writes consecutive elements without a header.
    #[inline(always)]
    fn serialize_slice(items: &[Self], context: &mut WriteContext) -> Result<(), Error> {
        context
            .writer
            .reserve(Self::reserved_space().saturating_mul(items.len()));
        for item in items {
            item.serialize(context)?;
        }
        Ok(())
    }

    /// Reads exactly `len` consecutive elements.
    #[inline(always)]
    fn deserialize_vec(context: &mut ReadContext, len: usize) -> Result<Vec<Self>, Error> {
        let mut items = Vec::with_capacity(len.min(context.reader.remaining()));
        for _ in 0..len {
            items.push(Self::deserialize(context)?);
        }
        Ok(items)
    }
}
