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

//! # arcodec
//!
//! A type-driven, versioned binary codec for the payloads an AR session moves
//! between its native layer and the engine: poses, transforms, meshes, anchors
//! and whatever composite types the application builds from them.
//!
//! ## Key Features
//!
//! - **Fixed little-endian wire format** with no envelope around a value
//! - **Versioned composites**: every struct carries a `u16` format version and
//!   readers refuse versions they do not know
//! - **Count-prefixed collections** checked against the remaining input before
//!   any element is decoded
//! - **Polymorphic values** (`Box<dyn Any>`) dispatched through a registry
//! - **Derive macro** for structs and fieldless enums
//!
//! ## Object Serialization
//!
//! ```rust
//! use arcodec::{Codec, Error, ItemObject};
//! use arcodec::geometry::{Pose, Quaternion, Vector3};
//!
//! #[derive(ItemObject, Debug, PartialEq)]
//! struct Anchor {
//!     id: u64,
//!     pose: Pose,
//!     label: Option<String>,
//!     state: TrackingState,
//! }
//!
//! #[derive(ItemObject, Debug, PartialEq)]
//! enum TrackingState {
//!     Tracking,
//!     Paused,
//!     Stopped,
//! }
//!
//! # fn main() -> Result<(), Error> {
//! let codec = Codec::default();
//! let anchor = Anchor {
//!     id: 42,
//!     pose: Pose::new(Vector3::new(0.0, 0.0, -1.0), Quaternion::IDENTITY),
//!     label: Some("table".to_string()),
//!     state: TrackingState::Tracking,
//! };
//! let bytes = codec.serialize(&anchor)?;
//! let decoded: Anchor = codec.deserialize(&bytes)?;
//! assert_eq!(anchor, decoded);
//! # Ok(())
//! # }
//! ```
//!
//! ## Schema Evolution
//!
//! A derived struct is written as `[version: u16][fields]`. Bump the version
//! with `#[item(version = N)]` when the field layout changes; peers still on
//! the old layout then fail with [`Error::UnsupportedVersion`] instead of
//! misreading the stream. Types that must keep reading older layouts implement
//! [`VersionedSerializer`] by hand and branch on the version, as
//! [`geometry::Mesh`] does.
//!
//! ## Polymorphic Values
//!
//! ```rust
//! use arcodec::{Codec, ItemObject};
//! use std::any::Any;
//!
//! #[derive(ItemObject, Debug, PartialEq)]
//! struct Marker(u32);
//!
//! let mut codec = Codec::default();
//! codec.register::<Marker>(100).unwrap();
//! let value: Box<dyn Any> = Box::new(Marker(3));
//! let bytes = codec.serialize(&value).unwrap();
//! let decoded: Box<dyn Any> = codec.deserialize(&bytes).unwrap();
//! assert_eq!(decoded.downcast_ref::<Marker>(), Some(&Marker(3)));
//! ```
//!
//! ## Supported Types
//!
//! - `bool`, `i8`..`i64`, `u8`..`u64`, `f32`, `f64`, `String`
//! - `Vec<T>`, `VecDeque<T>`, `[T; N]`, `HashMap`, `BTreeMap`, `HashSet`,
//!   `BTreeSet`, `Option<T>`
//! - `chrono::NaiveDate`, `chrono::NaiveDateTime`, `uuid::Uuid`
//! - the [`geometry`] types
//! - any type implementing [`Serializer`]
//!
//! ## Getting Started
//!
//! ```toml
//! [dependencies]
//! arcodec = "0.3"
//! arcodec-core = "0.3"
//! ```
//!
//! The derive expands to paths under `arcodec_core`, so both crates are needed.

pub use arcodec_core::{
    bail, ensure, error::Error, geometry, impl_versioned_serializer, resolver, types::TypeId,
    Codec, Config, FormatVersion, Serializer, SingleVersion, VersionedSerializer,
};
pub use arcodec_derive::ItemObject;
