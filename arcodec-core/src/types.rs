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

use std::mem;

/// Registry ids of the builtin serializers.
///
/// These ids are written in front of polymorphic values and are therefore part
/// of the wire format. Ids below [`TypeId::BOUND`] are reserved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
#[repr(u32)]
pub enum TypeId {
    BOOL = 1,
    INT8 = 2,
    INT16 = 3,
    INT32 = 4,
    INT64 = 5,
    UINT8 = 6,
    UINT16 = 7,
    UINT32 = 8,
    UINT64 = 9,
    FLOAT32 = 10,
    FLOAT64 = 11,
    STRING = 12,
    BINARY = 13,
    UUID = 14,
    TIMESTAMP = 15,
    LOCAL_DATE = 16,
    VECTOR2 = 20,
    VECTOR3 = 21,
    VECTOR4 = 22,
    QUATERNION = 23,
    COLOR = 24,
    MATRIX4X4 = 25,
    POSE = 26,
    MESH = 27,
    // first id available to user registrations
    BOUND = 64,
}

/// Width of a collection header.
pub const SIZE_OF_COUNT: usize = mem::size_of::<i32>();

/// Width of a format-version tag.
pub const SIZE_OF_VERSION: usize = mem::size_of::<u16>();

/// Width of the registry id in front of a polymorphic value.
pub const SIZE_OF_TYPE_ID: usize = mem::size_of::<u32>();

#[inline(always)]
pub fn is_reserved_type_id(id: u32) -> bool {
    id < TypeId::BOUND as u32
}
