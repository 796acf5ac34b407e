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

use super::math::{Vector2, Vector3};
use crate::error::Error;
use crate::resolver::context::{ReadContext, WriteContext};
use crate::serializer::{FormatVersion, Serializer, VersionedSerializer};
use crate::types::SIZE_OF_COUNT;

/// Vertex count from which a mesh needs 32-bit indices.
pub const UINT32_INDEX_THRESHOLD: usize = 65536;

/// Width of the index buffer a mesh is uploaded with.
///
/// Derived from the vertex count, never written to the stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IndexFormat {
    UInt16,
    UInt32,
}

impl IndexFormat {
    #[inline(always)]
    pub fn for_vertex_count(count: usize) -> IndexFormat {
        if count >= UINT32_INDEX_THRESHOLD {
            IndexFormat::UInt32
        } else {
            IndexFormat::UInt16
        }
    }
}

impl Default for IndexFormat {
    fn default() -> Self {
        IndexFormat::UInt16
    }
}

/// Indices narrowed to the width of an [`IndexFormat`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IndexBuffer {
    U16(Vec<u16>),
    U32(Vec<u32>),
}

impl IndexBuffer {
    pub fn format(&self) -> IndexFormat {
        match self {
            IndexBuffer::U16(_) => IndexFormat::UInt16,
            IndexBuffer::U32(_) => IndexFormat::UInt32,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            IndexBuffer::U16(v) => v.len(),
            IndexBuffer::U32(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeshVersion {
    /// vertices, indices, uvs
    V1,
}

impl FormatVersion for MeshVersion {
    const CURRENT: Self = MeshVersion::V1;

    fn tag(self) -> u16 {
        match self {
            MeshVersion::V1 => 1,
        }
    }

    fn from_tag(tag: u16) -> Option<Self> {
        match tag {
            1 => Some(MeshVersion::V1),
            _ => None,
        }
    }
}

/// Triangle mesh reconstructed by the rendering side of a session.
///
/// Layout of version 1:
///
/// ```text
/// [version: u16 = 1]
/// [vertex count: i32][count x Vector3]
/// [index count: i32][count x i32]
/// [uv count: i32][count x Vector2]
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vector3>,
    indices: Vec<i32>,
    uvs: Vec<Vector2>,
    index_format: IndexFormat,
}

impl Mesh {
    pub fn new(vertices: Vec<Vector3>, indices: Vec<i32>, uvs: Vec<Vector2>) -> Mesh {
        let index_format = IndexFormat::for_vertex_count(vertices.len());
        Mesh {
            vertices,
            indices,
            uvs,
            index_format,
        }
    }

    #[inline(always)]
    pub fn vertices(&self) -> &[Vector3] {
        &self.vertices
    }

    #[inline(always)]
    pub fn indices(&self) -> &[i32] {
        &self.indices
    }

    #[inline(always)]
    pub fn uvs(&self) -> &[Vector2] {
        &self.uvs
    }

    #[inline(always)]
    pub fn index_format(&self) -> IndexFormat {
        self.index_format
    }

    pub fn into_parts(self) -> (Vec<Vector3>, Vec<i32>, Vec<Vector2>) {
        (self.vertices, self.indices, self.uvs)
    }

    /// Narrows the indices to the mesh's [`IndexFormat`].
    ///
    /// Fails with a decode error if an index is negative or does not fit.
    pub fn index_buffer(&self) -> Result<IndexBuffer, Error> {
        match self.index_format {
            IndexFormat::UInt16 => self
                .indices
                .iter()
                .map(|&i| {
                    u16::try_from(i).map_err(|_| {
                        Error::decode_error(format!("index {} does not fit a 16-bit buffer", i))
                    })
                })
                .collect::<Result<Vec<u16>, Error>>()
                .map(IndexBuffer::U16),
            IndexFormat::UInt32 => self
                .indices
                .iter()
                .map(|&i| {
                    u32::try_from(i).map_err(|_| {
                        Error::decode_error(format!("index {} does not fit a 32-bit buffer", i))
                    })
                })
                .collect::<Result<Vec<u32>, Error>>()
                .map(IndexBuffer::U32),
        }
    }
}

impl VersionedSerializer for Mesh {
    type Version = MeshVersion;

    fn serialize_fields(&self, context: &mut WriteContext) -> Result<(), Error> {
        self.vertices.serialize(context)?;
        self.indices.serialize(context)?;
        self.uvs.serialize(context)
    }

    fn deserialize_fields(context: &mut ReadContext, version: MeshVersion) -> Result<Self, Error> {
        match version {
            MeshVersion::V1 => {
                let vertices = Vec::<Vector3>::deserialize(context)?;
                let indices = Vec::<i32>::deserialize(context)?;
                let uvs = Vec::<Vector2>::deserialize(context)?;
                Ok(Mesh::new(vertices, indices, uvs))
            }
        }
    }

    fn min_fields_size() -> usize {
        3 * SIZE_OF_COUNT
    }
}

crate::impl_versioned_serializer!(Mesh);
