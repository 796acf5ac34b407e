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
use arcodec_core::Codec;
use chrono::{NaiveDate, NaiveDateTime};
use test_helpers::test_roundtrip;
use uuid::Uuid;

#[test]
fn test_scalars() {
    let codec = Codec::default();
    test_roundtrip(&codec, true);
    test_roundtrip(&codec, false);
    test_roundtrip(&codec, i8::MIN);
    test_roundtrip(&codec, i16::MAX);
    test_roundtrip(&codec, -123_456i32);
    test_roundtrip(&codec, i64::MIN);
    test_roundtrip(&codec, u8::MAX);
    test_roundtrip(&codec, 65_535u16);
    test_roundtrip(&codec, u32::MAX);
    test_roundtrip(&codec, u64::MAX);
    test_roundtrip(&codec, std::f32::consts::PI);
    test_roundtrip(&codec, -1.0e300f64);
}

#[test]
fn test_scalar_widths() {
    let codec = Codec::default();
    assert_eq!(codec.serialize(&true).unwrap(), vec![1]);
    assert_eq!(codec.serialize(&-1i16).unwrap(), vec![0xFF, 0xFF]);
    assert_eq!(codec.serialize(&1u64).unwrap(), vec![1, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(codec.serialize(&0.5f32).unwrap(), 0.5f32.to_le_bytes().to_vec());
}

#[test]
fn test_invalid_bool() {
    let codec = Codec::default();
    assert!(matches!(
        codec.deserialize::<bool>(&[2]),
        Err(Error::DecodeError(_))
    ));
    assert!(matches!(
        codec.deserialize::<bool>(&[]),
        Err(Error::InsufficientData(0, 1, 0))
    ));
}

#[test]
fn test_string() {
    let codec = Codec::default();
    test_roundtrip(&codec, String::new());
    test_roundtrip(&codec, "plane anchor".to_string());
    test_roundtrip(&codec, "平面 ✓".to_string());
    let bytes = codec.serialize(&"ab".to_string()).unwrap();
    assert_eq!(bytes, vec![2, 0, 0, 0, b'a', b'b']);
}

#[test]
fn test_string_invalid_utf8() {
    let codec = Codec::default();
    let bytes = [3, 0, 0, 0, b'a', 0xFF, b'b'];
    assert!(matches!(
        codec.deserialize::<String>(&bytes),
        Err(Error::EncodingError(_))
    ));
}

#[test]
fn test_option() {
    let codec = Codec::default();
    test_roundtrip(&codec, Some(7i32));
    test_roundtrip(&codec, Option::<String>::None);
    test_roundtrip(&codec, Some(Some("x".to_string())));
    assert_eq!(codec.serialize(&Option::<i32>::None).unwrap(), vec![0]);
    assert_eq!(codec.serialize(&Some(1u8)).unwrap(), vec![1, 1]);
    assert!(matches!(
        codec.deserialize::<Option<u8>>(&[5, 1]),
        Err(Error::DecodeError(_))
    ));
}

#[test]
fn test_uuid() {
    let codec = Codec::default();
    let id = Uuid::from_u128(0x0011_2233_4455_6677_8899_aabb_ccdd_eeff);
    let bytes = codec.serialize(&id).unwrap();
    assert_eq!(bytes.as_slice(), id.as_bytes());
    test_roundtrip(&codec, id);
    test_roundtrip(&codec, Uuid::nil());
    assert!(matches!(
        codec.deserialize::<Uuid>(&bytes[..15]),
        Err(Error::InsufficientData(..))
    ));
}

#[test]
fn test_datetime() {
    let codec = Codec::default();
    let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    test_roundtrip(&codec, date);
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
    assert_eq!(codec.serialize(&epoch).unwrap(), vec![0, 0, 0, 0]);
    let before = NaiveDate::from_ymd_opt(1969, 12, 31).unwrap();
    assert_eq!(codec.serialize(&before).unwrap(), (-1i32).to_le_bytes().to_vec());

    let ts: NaiveDateTime = date.and_hms_micro_opt(13, 45, 10, 123_456).unwrap();
    test_roundtrip(&codec, ts);
    let bytes = codec.serialize(&epoch.and_hms_opt(0, 0, 1).unwrap()).unwrap();
    assert_eq!(bytes, 1_000_000i64.to_le_bytes().to_vec());
}

#[test]
fn test_date_out_of_range() {
    let codec = Codec::default();
    assert!(matches!(
        codec.deserialize::<NaiveDate>(&i32::MAX.to_le_bytes()),
        Err(Error::DecodeError(_))
    ));
    assert!(matches!(
        codec.deserialize::<NaiveDateTime>(&i64::MIN.to_le_bytes()),
        Err(Error::DecodeError(_))
    ));
}
