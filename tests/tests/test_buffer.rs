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

use arcodec_core::buffer::{Reader, Writer};
use arcodec_core::error::Error;

#[test]
fn test_writer_appends_little_endian() {
    let mut writer = Writer::default();
    writer.write_u8(0xFE);
    writer.write_i16(-2);
    writer.write_u32(0x0102_0304);
    writer.write_i64(-1);
    writer.write_f32(1.5);
    writer.write_f64(-0.25);
    let bytes = writer.dump();
    assert_eq!(bytes.len(), 1 + 2 + 4 + 8 + 4 + 8);
    assert_eq!(&bytes[..3], &[0xFE, 0xFE, 0xFF]);
    assert_eq!(&bytes[3..7], &[0x04, 0x03, 0x02, 0x01]);
    assert_eq!(&bytes[7..15], &[0xFF; 8]);
    assert_eq!(&bytes[15..19], &1.5f32.to_le_bytes());
    assert_eq!(&bytes[19..27], &(-0.25f64).to_le_bytes());

    let mut reader = Reader::new(&bytes);
    assert_eq!(reader.read_u8().unwrap(), 0xFE);
    assert_eq!(reader.read_i16().unwrap(), -2);
    assert_eq!(reader.read_u32().unwrap(), 0x0102_0304);
    assert_eq!(reader.read_i64().unwrap(), -1);
    assert_eq!(reader.read_f32().unwrap(), 1.5);
    assert_eq!(reader.read_f64().unwrap(), -0.25);
    assert_eq!(reader.remaining(), 0);
}

#[test]
fn test_writer_from_vec_keeps_prefix() {
    let mut writer = Writer::from_vec(vec![9, 9]);
    writer.write_u16(1);
    assert_eq!(writer.into_bytes(), vec![9, 9, 1, 0]);
}

#[test]
fn test_string_and_blob() {
    let mut writer = Writer::default();
    writer.write_utf8_string("héllo").unwrap();
    writer.write_blob(&[1, 2, 3]).unwrap();
    writer.write_utf8_string("").unwrap();
    let bytes = writer.into_bytes();
    // 'é' is two bytes in utf-8
    assert_eq!(&bytes[..4], &6u32.to_le_bytes());

    let mut reader = Reader::new(&bytes);
    assert_eq!(reader.read_utf8_string().unwrap(), "héllo");
    assert_eq!(reader.read_blob().unwrap(), &[1, 2, 3]);
    assert_eq!(reader.read_utf8_string().unwrap(), "");
    assert!(reader.slice_after_cursor().is_empty());
}

#[test]
fn test_reader_reports_offset_and_length() {
    let bytes = [1u8, 2, 3];
    let mut reader = Reader::new(&bytes);
    reader.read_u8().unwrap();
    match reader.read_u32() {
        Err(Error::InsufficientData(offset, needed, len)) => {
            assert_eq!((offset, needed, len), (1, 4, 3));
        }
        other => panic!("unexpected {:?}", other),
    }
    // the failed read consumed nothing
    assert_eq!(reader.get_cursor(), 1);
    assert_eq!(reader.read_u16().unwrap(), 0x0302);
}

#[test]
fn test_string_length_beyond_input() {
    let mut bytes = 100u32.to_le_bytes().to_vec();
    bytes.extend_from_slice(b"short");
    let mut reader = Reader::new(&bytes);
    assert!(matches!(
        reader.read_utf8_string(),
        Err(Error::InsufficientData(4, 100, 9))
    ));
}

#[test]
fn test_invalid_utf8_is_encoding_error() {
    let mut bytes = 2u32.to_le_bytes().to_vec();
    bytes.extend_from_slice(&[0xC3, 0x28]);
    let mut reader = Reader::new(&bytes);
    assert!(matches!(
        reader.read_utf8_string(),
        Err(Error::EncodingError(_))
    ));
}
