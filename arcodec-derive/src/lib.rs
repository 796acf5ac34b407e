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

//! # arcodec derive macros
//!
//! `#[derive(ItemObject)]` generates an arcodec `Serializer` for a struct or a
//! fieldless enum.
//!
//! ## Structs
//!
//! A struct becomes a versioned composite: a `u16` format version followed by
//! every field in declaration order. The version defaults to 1 and is set with
//! `#[item(version = N)]`. A stream carrying any other version fails with
//! `UnsupportedVersion`. Named, tuple and unit structs are supported. Type
//! parameters get a `Serializer` bound.
//!
//! ```rust
//! use arcodec_derive::ItemObject;
//!
//! #[derive(ItemObject, Debug, PartialEq)]
//! #[item(version = 2)]
//! struct Anchor {
//!     id: u64,
//!     label: String,
//!     confidence: f32,
//! }
//!
//! #[derive(ItemObject, Debug, PartialEq)]
//! struct Sample<T>(u32, Vec<T>);
//! ```
//!
//! ## Enums
//!
//! Fieldless enums are written as the `i32` index of the variant in
//! declaration order. Explicit discriminants are not used. Reading an index
//! with no variant is a decode error.
//!
//! ```rust
//! use arcodec_derive::ItemObject;
//!
//! #[derive(ItemObject, Debug, PartialEq)]
//! enum TrackingState {
//!     Tracking,
//!     Limited,
//!     NotTracking,
//! }
//! ```
//!
//! The generated code refers to `::arcodec_core`, so the crate using the
//! derive must depend on `arcodec-core`.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod object;
mod util;

/// Derive macro generating an arcodec `Serializer`.
///
/// # Example
///
/// ```rust
/// use arcodec_derive::ItemObject;
///
/// #[derive(ItemObject, Debug, PartialEq)]
/// struct PlaneAnchor {
///     id: u64,
///     extent_x: f32,
///     extent_z: f32,
///     alignment: Alignment,
/// }
///
/// #[derive(ItemObject, Debug, PartialEq)]
/// enum Alignment {
///     Horizontal,
///     Vertical,
/// }
/// ```
#[proc_macro_derive(ItemObject, attributes(item))]
pub fn proc_macro_derive_item_object(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    object::derive_serializer(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
