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
use arcodec_core::resolver::context::{ReadContext, WriteContext};
use arcodec_core::serializer::versioned::read_version;
use arcodec_core::{
    impl_versioned_serializer, Codec, FormatVersion, Serializer, SingleVersion,
    VersionedSerializer,
};
use arcodec_derive::ItemObject;
use test_helpers::{assert_prefixes_fail, test_roundtrip};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PlaneVersion {
    V1,
    V2,
}

impl FormatVersion for PlaneVersion {
    const CURRENT: Self = PlaneVersion::V2;

    fn tag(self) -> u16 {
        match self {
            PlaneVersion::V1 => 1,
            PlaneVersion::V2 => 2,
        }
    }

    fn from_tag(tag: u16) -> Option<Self> {
        match tag {
            1 => Some(PlaneVersion::V1),
            2 => Some(PlaneVersion::V2),
            _ => None,
        }
    }
}

/// V1 wrote `id, extent`; V2 appended `label`.
#[derive(Debug, PartialEq)]
struct Plane {
    id: u32,
    extent: [f32; 2],
    label: String,
}

impl VersionedSerializer for Plane {
    type Version = PlaneVersion;

    fn serialize_fields(&self, context: &mut WriteContext) -> Result<(), Error> {
        self.id.serialize(context)?;
        self.extent.serialize(context)?;
        self.label.serialize(context)
    }

    fn deserialize_fields(context: &mut ReadContext, version: PlaneVersion) -> Result<Self, Error> {
        let id = u32::deserialize(context)?;
        let extent = <[f32; 2]>::deserialize(context)?;
        let label = match version {
            PlaneVersion::V1 => String::from("unlabeled"),
            PlaneVersion::V2 => String::deserialize(context)?,
        };
        Ok(Plane { id, extent, label })
    }

    fn min_fields_size() -> usize {
        4 + 8
    }
}

impl_versioned_serializer!(Plane);

fn plane_v1_bytes(id: u32, extent: [f32; 2]) -> Vec<u8> {
    let mut bytes = 1u16.to_le_bytes().to_vec();
    bytes.extend_from_slice(&id.to_le_bytes());
    bytes.extend_from_slice(&extent[0].to_le_bytes());
    bytes.extend_from_slice(&extent[1].to_le_bytes());
    bytes
}

#[test]
fn test_writes_current_version() {
    let codec = Codec::default();
    let plane = Plane {
        id: 5,
        extent: [1.0, 2.0],
        label: "floor".to_string(),
    };
    let bytes = codec.serialize(&plane).unwrap();
    assert_eq!(&bytes[..2], &[2, 0]);
    assert_eq!(bytes.len(), 2 + 4 + 8 + 4 + 5);
    test_roundtrip(&codec, plane);
}

#[test]
fn test_reads_older_version() {
    let codec = Codec::default();
    let decoded: Plane = codec.deserialize(&plane_v1_bytes(9, [0.5, 4.0])).unwrap();
    assert_eq!(
        decoded,
        Plane {
            id: 9,
            extent: [0.5, 4.0],
            label: "unlabeled".to_string(),
        }
    );
    // re-encoding upgrades to the current layout
    let upgraded = codec.serialize(&decoded).unwrap();
    assert_eq!(&upgraded[..2], &[2, 0]);
}

#[test]
fn test_unknown_version_is_rejected() {
    let codec = Codec::default();
    for tag in [0u16, 3, 9999, u16::MAX] {
        let mut bytes = plane_v1_bytes(1, [1.0, 1.0]);
        bytes[..2].copy_from_slice(&tag.to_le_bytes());
        match codec.deserialize::<Plane>(&bytes) {
            Err(Error::UnsupportedVersion(found, type_name)) => {
                assert_eq!(found, tag);
                assert!(type_name.contains("Plane"));
            }
            other => panic!("tag {}: unexpected {:?}", tag, other),
        }
    }
}

#[test]
fn test_truncated_versioned_payload() {
    let codec = Codec::default();
    let plane = Plane {
        id: 1,
        extent: [3.0, 4.0],
        label: "wall".to_string(),
    };
    let bytes = codec.serialize(&plane).unwrap();
    assert_prefixes_fail::<Plane>(&codec, &bytes);
    assert_prefixes_fail::<Plane>(&codec, &plane_v1_bytes(1, [0.0, 0.0]));
}

#[test]
fn test_min_encoded_size_includes_tag() {
    assert_eq!(Plane::min_encoded_size(), 2 + 12);
}

#[test]
fn test_single_version() {
    type V7 = SingleVersion<7>;
    assert_eq!(V7::CURRENT.tag(), 7);
    assert_eq!(V7::from_tag(7), Some(SingleVersion));
    assert_eq!(V7::from_tag(1), None);
}

#[test]
fn test_read_version_reports_type_name() {
    let codec = Codec::default();
    let bytes = 4u16.to_le_bytes();
    let mut context = ReadContext::new(&bytes, codec.get_type_resolver(), codec.get_config());
    let result = read_version::<PlaneVersion>(&mut context, "Plane");
    assert!(matches!(result, Err(Error::UnsupportedVersion(4, ref name)) if name == "Plane"));
}

#[derive(ItemObject, Debug, PartialEq)]
struct Anchor {
    visible: bool,
}

#[derive(ItemObject, Debug, PartialEq)]
struct Scene {
    anchor: Anchor,
}

#[test]
fn test_nested_error_passes_through_unchanged() {
    let codec = Codec::default();
    // Scene tag, Anchor tag, then an invalid bool byte
    let bytes = [1, 0, 1, 0, 7];
    match codec.deserialize::<Scene>(&bytes) {
        Err(Error::DecodeError(msg)) => assert_eq!(msg.as_ref(), "invalid bool byte 7 at offset 4"),
        other => panic!("expected DecodeError, got {:?}", other),
    }
    match codec.deserialize::<Anchor>(&bytes[2..]) {
        Err(Error::DecodeError(msg)) => assert_eq!(msg.as_ref(), "invalid bool byte 7 at offset 2"),
        other => panic!("expected DecodeError, got {:?}", other),
    }
}
