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
use crate::serializer::Serializer;
use std::mem;

macro_rules! impl_f32_struct {
    ($name:ident { $($field:ident),+ $(,)? }) => {
        impl $name {
            #[inline(always)]
            pub const fn new($($field: f32),+) -> $name {
                $name { $($field),+ }
            }
        }

        impl Serializer for $name {
            #[inline(always)]
            fn serialize(&self, context: &mut WriteContext) -> Result<(), Error> {
                $(context.writer.write_f32(self.$field);)+
                Ok(())
            }

            #[inline(always)]
            fn deserialize(context: &mut ReadContext) -> Result<Self, Error> {
                Ok($name {
                    $($field: context.reader.read_f32()?,)+
                })
            }

            #[inline(always)]
            fn min_encoded_size() -> usize {
                mem::size_of::<$name>()
            }

            #[inline(always)]
            fn reserved_space() -> usize {
                mem::size_of::<$name>()
            }
        }
    };
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

/// A rotation, `w` last.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

/// Linear RGBA.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl_f32_struct!(Vector2 { x, y });
impl_f32_struct!(Vector3 { x, y, z });
impl_f32_struct!(Vector4 { x, y, z, w });
impl_f32_struct!(Quaternion { x, y, z, w });
impl_f32_struct!(Color { r, g, b, a });

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 1.0);
}

impl Default for Quaternion {
    fn default() -> Self {
        Quaternion::IDENTITY
    }
}

/// 4x4 matrix stored column-major, the order it is written in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix4x4 {
    pub m: [f32; 16],
}

impl Matrix4x4 {
    pub const IDENTITY: Matrix4x4 = Matrix4x4 {
        m: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    pub const fn from_cols_array(m: [f32; 16]) -> Matrix4x4 {
        Matrix4x4 { m }
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.m[col * 4 + row]
    }
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Matrix4x4::IDENTITY
    }
}

impl Serializer for Matrix4x4 {
    #[inline(always)]
    fn serialize(&self, context: &mut WriteContext) -> Result<(), Error> {
        self.m.serialize(context)
    }

    #[inline(always)]
    fn deserialize(context: &mut ReadContext) -> Result<Self, Error> {
        Ok(Matrix4x4 {
            m: <[f32; 16]>::deserialize(context)?,
        })
    }

    #[inline(always)]
    fn min_encoded_size() -> usize {
        mem::size_of::<Matrix4x4>()
    }

    #[inline(always)]
    fn reserved_space() -> usize {
        mem::size_of::<Matrix4x4>()
    }
}

/// Position and orientation of a tracked anchor or camera.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    pub position: Vector3,
    pub rotation: Quaternion,
}

impl Pose {
    pub const fn new(position: Vector3, rotation: Quaternion) -> Pose {
        Pose { position, rotation }
    }
}

impl Serializer for Pose {
    #[inline(always)]
    fn serialize(&self, context: &mut WriteContext) -> Result<(), Error> {
        self.position.serialize(context)?;
        self.rotation.serialize(context)
    }

    #[inline(always)]
    fn deserialize(context: &mut ReadContext) -> Result<Self, Error> {
        let position = Vector3::deserialize(context)?;
        let rotation = Quaternion::deserialize(context)?;
        Ok(Pose { position, rotation })
    }

    #[inline(always)]
    fn min_encoded_size() -> usize {
        Vector3::min_encoded_size() + Quaternion::min_encoded_size()
    }

    #[inline(always)]
    fn reserved_space() -> usize {
        Vector3::reserved_space() + Quaternion::reserved_space()
    }
}
