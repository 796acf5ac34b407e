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


use arcodec_core::error::Error;
use arcodec_core::geometry::{
    Color, IndexBuffer, IndexFormat, Matrix4x4, Mesh, Pose, Quaternion, Vector2, Vector3,
    Vector4, UINT32_INDEX_THRESHOLD,
};
use arcodec_core::Codec;
use test_helpers::{assert_prefixes_fail, le_i32, test_roundtrip};

fn quad() -> Mesh {
    Mesh::new(
        vec![
            Vector3::new(-0.5, 0.0, -0.5),
            Vector3::new(0.5, 0.0, -0.5),
            Vector3::new(0.5, 0.0, 0.5),
            Vector3::new(-0.5, 0.0, 0.5),
        ],
        vec![0, 1, 2, 0, 2, 3],
        vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(0.0, 1.0),
        ],
    )
}

fn mesh_bytes(vertex_count: usize) -> Vec<u8> {
    let mut bytes = 1u16.to_le_bytes().to_vec();
    bytes.extend_from_slice(&le_i32(vertex_count as i32));
    for i in 0..vertex_count {
        for c in [i as f32, 0.0, 1.0] {
            bytes.extend_from_slice(&c.to_le_bytes());
        }
    }
    // no indices, no uvs
    bytes.extend_from_slice(&le_i32(0));
    bytes.extend_from_slice(&le_i32(0));
    bytes
}

#[test]
fn test_quad_roundtrip() {
    let codec = Codec::default();
    let mesh = quad();
    let bytes = codec.serialize(&mesh).unwrap();
    assert_eq!(bytes.len(), 2 + (4 + 4 * 12) + (4 + 6 * 4) + (4 + 4 * 8));
    assert_eq!(&bytes[..2], &[1, 0]);
    assert_eq!(&bytes[2..6], &le_i32(4));
    assert_eq!(&bytes[54..58], &le_i32(6));
    assert_eq!(&bytes[82..86], &le_i32(4));

    let decoded: Mesh = codec.deserialize(&bytes).unwrap();
    assert_eq!(decoded.vertices(), mesh.vertices());
    assert_eq!(decoded.indices(), &[0, 1, 2, 0, 2, 3]);
    assert_eq!(decoded.uvs(), mesh.uvs());
    assert_eq!(decoded.index_format(), IndexFormat::UInt16);
    assert_eq!(
        decoded.index_buffer().unwrap(),
        IndexBuffer::U16(vec![0, 1, 2, 0, 2, 3])
    );
    test_roundtrip(&codec, mesh);
}

#[test]
fn test_empty_mesh() {
    let codec = Codec::default();
    let mesh = Mesh::default();
    let bytes = codec.serialize(&mesh).unwrap();
    assert_eq!(bytes, vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    test_roundtrip(&codec, mesh);
}

#[test]
fn test_index_format_threshold_on_decode() {
    let codec = Codec::default();
    let below: Mesh = codec
        .deserialize(&mesh_bytes(UINT32_INDEX_THRESHOLD - 1))
        .unwrap();
    assert_eq!(below.vertices().len(), 65535);
    assert_eq!(below.index_format(), IndexFormat::UInt16);

    let at: Mesh = codec.deserialize(&mesh_bytes(UINT32_INDEX_THRESHOLD)).unwrap();
    assert_eq!(at.vertices().len(), 65536);
    assert_eq!(at.index_format(), IndexFormat::UInt32);
}

#[test]
fn test_index_format_is_not_on_the_wire() {
    let codec = Codec::default();
    let small = codec.serialize(&Mesh::new(vec![], vec![7], vec![])).unwrap();
    assert_eq!(small.len(), 2 + 4 + 8 + 4);
}

#[test]
fn test_unsupported_mesh_version() {
    let codec = Codec::default();
    let mut bytes = codec.serialize(&quad()).unwrap();
    bytes[..2].copy_from_slice(&9999u16.to_le_bytes());
    assert!(matches!(
        codec.deserialize::<Mesh>(&bytes),
        Err(Error::UnsupportedVersion(9999, _))
    ));
}

#[test]
fn test_truncated_mesh() {
    let codec = Codec::default();
    let bytes = codec.serialize(&quad()).unwrap();
    assert_prefixes_fail::<Mesh>(&codec, &bytes);
}

#[test]
fn test_mesh_negative_count() {
    let codec = Codec::default();
    let mut bytes = codec.serialize(&quad()).unwrap();
    // index count
    bytes[54..58].copy_from_slice(&le_i32(-6));
    assert!(matches!(
        codec.deserialize::<Mesh>(&bytes),
        Err(Error::DecodeError(_))
    ));
}

#[test]
fn test_index_out_of_range_for_width() {
    let mesh = Mesh::new(vec![Vector3::default(); 3], vec![0, 1, 65536], vec![]);
    assert!(matches!(mesh.index_buffer(), Err(Error::DecodeError(_))));
    let (vertices, indices, uvs) = mesh.into_parts();
    assert_eq!((vertices.len(), indices.len(), uvs.len()), (3, 3, 0));
}

#[test]
fn test_math_types() {
    let codec = Codec::default();
    test_roundtrip(&codec, Vector2::new(1.0, -1.0));
    test_roundtrip(&codec, Vector4::new(1.0, 2.0, 3.0, 4.0));
    test_roundtrip(&codec, Quaternion::new(0.0, 0.7071, 0.0, 0.7071));
    test_roundtrip(&codec, Color::new(1.0, 0.5, 0.25, 1.0));
    test_roundtrip(&codec, Matrix4x4::IDENTITY);
    test_roundtrip(
        &codec,
        Pose::new(Vector3::new(0.1, 1.6, -0.3), Quaternion::IDENTITY),
    );
    assert_eq!(codec.serialize(&Color::default()).unwrap().len(), 16);
    assert_eq!(codec.serialize(&Matrix4x4::IDENTITY).unwrap().len(), 64);
}
