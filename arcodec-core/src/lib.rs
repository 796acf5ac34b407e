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

//! # arcodec core
//!
//! Core of the arcodec binary serialization framework: the codecs an AR
//! integration layer uses to move engine payloads (poses, transforms, meshes,
//! identifiers) across a process or network boundary.
//!
//! ## Architecture
//!
//! - **`codec`**: the [`Codec`] entry point, `serialize` / `deserialize`
//! - **`buffer`**: little-endian primitive codecs over `Writer` / `Reader`
//! - **`serializer`**: the [`Serializer`] contract and its implementations for
//!   scalars, strings, collections and versioned composites
//! - **`resolver`**: per-call contexts and the type registry used for
//!   polymorphic (`Box<dyn Any>`) values
//! - **`geometry`**: vector, matrix, pose and mesh payload types
//! - **`config`**: decode limits
//! - **`types`**: builtin registry ids and wire widths
//! - **`error`**: the error taxonomy
//!
//! ## Wire format
//!
//! | value                 | layout                                  |
//! |-----------------------|-----------------------------------------|
//! | integers, floats      | fixed width, little-endian              |
//! | `bool`                | one byte, `0` or `1`                    |
//! | `String`              | `[len: u32][utf-8 bytes]`               |
//! | `Vec<T>`, sets, maps  | `[count: i32][elements]`                |
//! | versioned composite   | `[version: u16][fields]`                |
//! | `Box<dyn Any>`        | `[registered id: u32][value]`           |
//!
//! Nothing is written around the top-level value.
//!
//! ## Usage
//!
//! This crate is usually consumed through the `arcodec` crate, which adds
//! `#[derive(ItemObject)]`.
//!
//! ```rust
//! use arcodec_core::error::Error;
//! use arcodec_core::geometry::{Pose, Quaternion, Vector3};
//! use arcodec_core::Codec;
//!
//! let codec = Codec::default();
//! let pose = Pose::new(Vector3::new(0.0, 1.6, 0.0), Quaternion::IDENTITY);
//! let bytes = codec.serialize(&pose).unwrap();
//! assert_eq!(bytes.len(), 28);
//! assert_eq!(codec.deserialize::<Pose>(&bytes).unwrap(), pose);
//!
//! // a truncated stream is reported, never read past
//! let err = codec.deserialize::<Pose>(&bytes[..20]).unwrap_err();
//! assert!(matches!(err, Error::InsufficientData(..)));
//! ```

pub mod buffer;
pub mod codec;
pub mod config;
pub mod error;
pub mod geometry;
pub mod resolver;
pub mod serializer;
pub mod types;

pub use codec::Codec;
pub use config::Config;
pub use error::Error;
pub use serializer::{FormatVersion, Serializer, SingleVersion, VersionedSerializer};
pub use types::TypeId;
