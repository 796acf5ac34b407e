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

//! Versioned composite serializers.
//!
//! A composite writes `[version: u16]` before its first field. The reader
//! consumes the tag first, maps it onto the type's [`FormatVersion`] and
//! decodes the field layout of that version. A tag with no matching version
//! fails with `UnsupportedVersion`; nothing falls back to the latest layout.
//!
//! ```rust
//! use arcodec_core::error::Error;
//! use arcodec_core::resolver::context::{ReadContext, WriteContext};
//! use arcodec_core::serializer::{FormatVersion, Serializer, VersionedSerializer};
//! use arcodec_core::{impl_versioned_serializer, Codec};
//!
//! #[derive(Clone, Copy, Debug, PartialEq)]
//! enum PeerVersion {
//!     V1,
//!     V2,
//! }
//!
//! impl FormatVersion for PeerVersion {
//!     const CURRENT: Self = PeerVersion::V2;
//!
//!     fn tag(self) -> u16 {
//!         match self {
//!             PeerVersion::V1 => 1,
//!             PeerVersion::V2 => 2,
//!         }
//!     }
//!
//!     fn from_tag(tag: u16) -> Option<Self> {
//!         match tag {
//!             1 => Some(PeerVersion::V1),
//!             2 => Some(PeerVersion::V2),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! #[derive(Debug, PartialEq)]
//! struct Peer {
//!     name: String,
//!     // added in V2
//!     score: i32,
//! }
//!
//! impl VersionedSerializer for Peer {
//!     type Version = PeerVersion;
//!
//!     fn serialize_fields(&self, context: &mut WriteContext) -> Result<(), Error> {
//!         self.name.serialize(context)?;
//!         self.score.serialize(context)
//!     }
//!
//!     fn deserialize_fields(context: &mut ReadContext, version: PeerVersion) -> Result<Self, Error> {
//!         let name = String::deserialize(context)?;
//!         let score = match version {
//!             PeerVersion::V1 => 0,
//!             PeerVersion::V2 => i32::deserialize(context)?,
//!         };
//!         Ok(Peer { name, score })
//!     }
//! }
//!
//! impl_versioned_serializer!(Peer);
//!
//! let codec = Codec::default();
//! let peer = Peer { name: "host".to_string(), score: 3 };
//! let bytes = codec.serialize(&peer).unwrap();
//! assert_eq!(&bytes[..2], &2u16.to_le_bytes());
//! assert_eq!(codec.deserialize::<Peer>(&bytes).unwrap(), peer);
//! ```

use crate::error::Error;
use crate::resolver::context::{ReadContext, WriteContext};

/// The known field layouts of one composite type.
pub trait FormatVersion: Copy + Sized + 'static {
    /// The layout written by this build.
    const CURRENT: Self;

    fn tag(self) -> u16;

    /// Maps a wire tag onto a known version, `None` for anything unknown.
    fn from_tag(tag: u16) -> Option<Self>;
}

/// A composite with exactly one layout, tagged `N`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SingleVersion<const N: u16>;

impl<const N: u16> FormatVersion for SingleVersion<N> {
    const CURRENT: Self = SingleVersion;

    #[inline(always)]
    fn tag(self) -> u16 {
        N
    }

    #[inline(always)]
    fn from_tag(tag: u16) -> Option<Self> {
        if tag == N {
            Some(SingleVersion)
        } else {
            None
        }
    }
}

pub trait VersionedSerializer: Sized + 'static {
    type Version: FormatVersion;

    /// Writes the fields of the current layout, after the tag.
    fn serialize_fields(&self, context: &mut WriteContext) -> Result<(), Error>;

    /// Reads the fields of the layout `version`, after the tag.
    fn deserialize_fields(context: &mut ReadContext, version: Self::Version)
        -> Result<Self, Error>;

    /// Lower bound on the encoded size of the fields, without the tag.
    #[inline(always)]
    fn min_fields_size() -> usize {
        0
    }
}

pub fn write_versioned<T: VersionedSerializer>(
    value: &T,
    context: &mut WriteContext,
) -> Result<(), Error> {
    context.inc_composite_depth()?;
    context.writer.write_u16(T::Version::CURRENT.tag());
    let result = value.serialize_fields(context);
    context.dec_composite_depth();
    result
}

/// Consumes a version tag and maps it onto `V`.
pub fn read_version<V: FormatVersion>(
    context: &mut ReadContext,
    type_name: &'static str,
) -> Result<V, Error> {
    let offset = context.reader.get_cursor();
    let tag = context.reader.read_u16()?;
    match V::from_tag(tag) {
        Some(version) => Ok(version),
        None => {
            tracing::debug!(offset, tag, type_name, "unsupported format version");
            Err(Error::unsupported_version(tag, type_name))
        }
    }
}

pub fn read_versioned<T: VersionedSerializer>(context: &mut ReadContext) -> Result<T, Error> {
    context.inc_composite_depth()?;
    let version = read_version::<T::Version>(context, std::any::type_name::<T>())?;
    let result = T::deserialize_fields(context, version);
    context.dec_composite_depth();
    result
}

/// Implements [`Serializer`](crate::serializer::Serializer) for a
/// [`VersionedSerializer`] by writing the version tag before its fields.
#[macro_export]
macro_rules! impl_versioned_serializer {
    ($ty:ty) => {
        impl $crate::serializer::Serializer for $ty {
            #[inline]
            fn serialize(
                &self,
                context: &mut $crate::resolver::context::WriteContext,
            ) -> ::std::result::Result<(), $crate::error::Error> {
                $crate::serializer::versioned::write_versioned(self, context)
            }

            #[inline]
            fn deserialize(
                context: &mut $crate::resolver::context::ReadContext,
            ) -> ::std::result::Result<Self, $crate::error::Error> {
                $crate::serializer::versioned::read_versioned(context)
            }

            #[inline]
            fn min_encoded_size() -> usize {
                $crate::types::SIZE_OF_VERSION
                    + <$ty as $crate::serializer::VersionedSerializer>::min_fields_size()
            }
        }
    };
}
