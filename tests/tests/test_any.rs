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
use arcodec_core::geometry::{Mesh, Pose, Vector3};
use arcodec_core::types::TypeId;
use arcodec_core::Codec;
use arcodec_derive::ItemObject;
use chrono::NaiveDate;
use std::any::Any;
use std::collections::HashMap;
use test_helpers::test_box_any;
use uuid::Uuid;

#[derive(ItemObject, Debug, Clone, PartialEq)]
struct Hit {
    distance: f32,
    normal: Vector3,
}

#[derive(ItemObject, Debug)]
struct Container {
    value: i32,
    nested: Option<Box<dyn Any>>,
}

#[test]
fn test_builtin_types_through_any() {
    let codec = Codec::default();
    test_box_any(&codec, 42i32);
    test_box_any(&codec, true);
    test_box_any(&codec, u64::MAX);
    test_box_any(&codec, "hello".to_string());
    test_box_any(&codec, vec![1u8, 2, 3]);
    test_box_any(&codec, Uuid::from_u128(7));
    test_box_any(&codec, NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());
    test_box_any(&codec, Pose::default());
    test_box_any(&codec, Mesh::new(vec![Vector3::default()], vec![0], vec![]));
}

#[test]
fn test_any_layout() {
    let codec = Codec::default();
    let value: Box<dyn Any> = Box::new(7i32);
    let bytes = codec.serialize(&value).unwrap();
    let mut expected = (TypeId::INT32 as u32).to_le_bytes().to_vec();
    expected.extend_from_slice(&7i32.to_le_bytes());
    assert_eq!(bytes, expected);
}

#[test]
fn test_registered_user_type() {
    let mut codec = Codec::default();
    codec.register::<Hit>(100).unwrap();
    assert_eq!(codec.get_type_resolver().get_type_id::<Hit>(), Some(100));
    let hit = Hit {
        distance: 1.25,
        normal: Vector3::new(0.0, 1.0, 0.0),
    };
    test_box_any(&codec, hit.clone());
    let value: Box<dyn Any> = Box::new(hit);
    let bytes = codec.serialize(&value).unwrap();
    assert_eq!(&bytes[..4], &100u32.to_le_bytes());
}

#[test]
fn test_unregistered_type_on_write() {
    let codec = Codec::default();
    let value: Box<dyn Any> = Box::new(Hit {
        distance: 0.0,
        normal: Vector3::default(),
    });
    assert!(matches!(
        codec.serialize(&value),
        Err(Error::UnknownType(_))
    ));
    // collections are not registered unless asked for
    let value: Box<dyn Any> = Box::new(vec![1i32]);
    assert!(matches!(
        codec.serialize(&value),
        Err(Error::UnknownType(_))
    ));
}

#[test]
fn test_unknown_id_on_read() {
    let mut writer_codec = Codec::default();
    writer_codec.register::<Hit>(100).unwrap();
    let value: Box<dyn Any> = Box::new(Hit {
        distance: 2.0,
        normal: Vector3::default(),
    });
    let bytes = writer_codec.serialize(&value).unwrap();

    let reader_codec = Codec::default();
    assert!(matches!(
        reader_codec.deserialize::<Box<dyn Any>>(&bytes),
        Err(Error::UnknownType(_))
    ));
    assert!(matches!(
        reader_codec.deserialize::<Box<dyn Any>>(&63u32.to_le_bytes()),
        Err(Error::UnknownType(_))
    ));
}

#[test]
fn test_register_rejects_reserved_and_duplicates() {
    let mut codec = Codec::default();
    assert!(matches!(
        codec.register::<Hit>(TypeId::STRING as u32),
        Err(Error::NotAllowed(_))
    ));
    assert!(matches!(
        codec.register::<Hit>(TypeId::BOUND as u32 - 1),
        Err(Error::NotAllowed(_))
    ));
    codec.register::<Hit>(TypeId::BOUND as u32).unwrap();
    assert!(matches!(
        codec.register::<Hit>(200),
        Err(Error::NotAllowed(_))
    ));
    assert!(matches!(
        codec.register::<Vec<Hit>>(TypeId::BOUND as u32),
        Err(Error::NotAllowed(_))
    ));
    codec.register::<Vec<Hit>>(200).unwrap();
}

#[test]
fn test_any_inside_collections() {
    let mut codec = Codec::default();
    codec.register::<Hit>(100).unwrap();
    let values: Vec<Box<dyn Any>> = vec![
        Box::new(1i64),
        Box::new("two".to_string()),
        Box::new(Hit {
            distance: 3.0,
            normal: Vector3::new(1.0, 0.0, 0.0),
        }),
    ];
    let bytes = codec.serialize(&values).unwrap();
    let decoded: Vec<Box<dyn Any>> = codec.deserialize(&bytes).unwrap();
    assert_eq!(decoded.len(), 3);
    assert_eq!(decoded[0].downcast_ref::<i64>(), Some(&1));
    assert_eq!(decoded[1].downcast_ref::<String>().map(String::as_str), Some("two"));
    assert_eq!(decoded[2].downcast_ref::<Hit>().unwrap().distance, 3.0);

    let mut map: HashMap<String, Box<dyn Any>> = HashMap::new();
    map.insert("n".to_string(), Box::new(5u16));
    let decoded: HashMap<String, Box<dyn Any>> =
        codec.deserialize(&codec.serialize(&map).unwrap()).unwrap();
    assert_eq!(decoded["n"].downcast_ref::<u16>(), Some(&5));
}

fn nested(levels: i32) -> Container {
    let mut current = Container {
        value: levels,
        nested: None,
    };
    for value in (1..levels).rev() {
        current = Container {
            value,
            nested: Some(Box::new(current)),
        };
    }
    current
}

#[test]
fn test_max_dyn_depth_on_read() {
    if arcodec_core::error::should_panic_on_error() {
        return;
    }
    let mut writer_codec = Codec::default();
    writer_codec.register::<Container>(100).unwrap();
    let mut reader_codec = Codec::default().max_dyn_depth(2);
    reader_codec.register::<Container>(100).unwrap();

    let outer: Box<dyn Any> = Box::new(nested(3));
    let bytes = writer_codec.serialize(&outer).unwrap();
    let decoded: Box<dyn Any> = writer_codec.deserialize(&bytes).unwrap();
    assert_eq!(decoded.downcast_ref::<Container>().unwrap().value, 1);

    let result = reader_codec.deserialize::<Box<dyn Any>>(&bytes);
    assert!(matches!(result, Err(Error::DepthExceed(_))));
}

#[test]
fn test_max_dyn_depth_on_write() {
    if arcodec_core::error::should_panic_on_error() {
        return;
    }
    let mut codec = Codec::default().max_dyn_depth(2);
    codec.register::<Container>(100).unwrap();
    let ok: Box<dyn Any> = Box::new(nested(2));
    assert!(codec.serialize(&ok).is_ok());
    let too_deep: Box<dyn Any> = Box::new(nested(3));
    assert!(matches!(
        codec.serialize(&too_deep),
        Err(Error::DepthExceed(_))
    ));
}
