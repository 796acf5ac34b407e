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

//! Primitive codecs over an append-only [`Writer`] and a bounds-checked [`Reader`].
//!
//! Every multi-byte integer and float is little-endian on both paths.
//! Strings are `[len: u32][utf-8 bytes]`.

use crate::error::Error;
use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};

#[derive(Default, Debug)]
pub struct Writer {
    pub(crate) bf: Vec<u8>,
}

impl Writer {
    pub fn with_capacity(capacity: usize) -> Writer {
        Writer {
            bf: Vec::with_capacity(capacity),
        }
    }

    /// Continues writing after the existing contents of `bf`.
    pub fn from_vec(bf: Vec<u8>) -> Writer {
        Writer { bf }
    }

    pub fn dump(&self) -> Vec<u8> {
        self.bf.clone()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bf
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bf
    }

    pub fn len(&self) -> usize {
        self.bf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bf.is_empty()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.bf.reserve(additional);
    }

    pub fn write_bytes(&mut self, v: &[u8]) -> usize {
        self.bf.extend_from_slice(v);
        v.len()
    }

    // Writes into a Vec<u8> cannot fail, the io::Result from byteorder is always Ok.

    pub fn write_bool(&mut self, value: bool) {
        self.bf.push(value as u8);
    }

    pub fn write_u8(&mut self, value: u8) {
        self.bf.push(value);
    }

    pub fn write_i8(&mut self, value: i8) {
        self.bf.push(value as u8);
    }

    pub fn write_u16(&mut self, value: u16) {
        let _ = self.bf.write_u16::<LittleEndian>(value);
    }

    pub fn write_i16(&mut self, value: i16) {
        let _ = self.bf.write_i16::<LittleEndian>(value);
    }

    pub fn write_u32(&mut self, value: u32) {
        let _ = self.bf.write_u32::<LittleEndian>(value);
    }

    pub fn write_i32(&mut self, value: i32) {
        let _ = self.bf.write_i32::<LittleEndian>(value);
    }

    pub fn write_u64(&mut self, value: u64) {
        let _ = self.bf.write_u64::<LittleEndian>(value);
    }

    pub fn write_i64(&mut self, value: i64) {
        let _ = self.bf.write_i64::<LittleEndian>(value);
    }

    pub fn write_f32(&mut self, value: f32) {
        let _ = self.bf.write_f32::<LittleEndian>(value);
    }

    pub fn write_f64(&mut self, value: f64) {
        let _ = self.bf.write_f64::<LittleEndian>(value);
    }

    /// Writes `[len: u32][bytes]`.
    pub fn write_blob(&mut self, v: &[u8]) -> Result<(), Error> {
        let len = u32::try_from(v.len()).map_err(|_| {
            Error::encode_error(format!(
                "blob of {} bytes exceeds the u32 length prefix",
                v.len()
            ))
        })?;
        self.write_u32(len);
        self.write_bytes(v);
        Ok(())
    }

    pub fn write_utf8_string(&mut self, s: &str) -> Result<(), Error> {
        self.write_blob(s.as_bytes())
    }
}

#[derive(Debug, Clone)]
pub struct Reader<'a> {
    bf: &'a [u8],
    cursor: usize,
}

impl<'a> Reader<'a> {
    pub fn new(bf: &'a [u8]) -> Reader<'a> {
        Reader { bf, cursor: 0 }
    }

    pub fn get_cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.bf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bf.is_empty()
    }

    /// Bytes left after the cursor.
    pub fn remaining(&self) -> usize {
        self.bf.len() - self.cursor
    }

    pub fn slice_after_cursor(&self) -> &'a [u8] {
        &self.bf[self.cursor..]
    }

    #[inline(always)]
    fn check_bound(&self, n: usize) -> Result<(), Error> {
        crate::ensure!(
            n <= self.remaining(),
            Error::insufficient_data(self.cursor, n, self.bf.len())
        );
        Ok(())
    }

    /// Returns the next `n` bytes and advances past them.
    #[inline(always)]
    fn take(&mut self, n: usize) -> Result<&'a [u8], Error> {
        self.check_bound(n)?;
        let s = &self.bf[self.cursor..self.cursor + n];
        self.cursor += n;
        Ok(s)
    }

    pub fn read_bool(&mut self) -> Result<bool, Error> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            other => crate::bail!("invalid bool byte {} at offset {}", other, self.cursor - 1),
        }
    }

    pub fn read_u8(&mut self) -> Result<u8, Error> {
        Ok(self.take(1)?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8, Error> {
        Ok(self.read_u8()? as i8)
    }

    pub fn read_u16(&mut self) -> Result<u16, Error> {
        Ok(LittleEndian::read_u16(self.take(2)?))
    }

    pub fn read_i16(&mut self) -> Result<i16, Error> {
        Ok(LittleEndian::read_i16(self.take(2)?))
    }

    pub fn read_u32(&mut self) -> Result<u32, Error> {
        Ok(LittleEndian::read_u32(self.take(4)?))
    }

    pub fn read_i32(&mut self) -> Result<i32, Error> {
        Ok(LittleEndian::read_i32(self.take(4)?))
    }

    pub fn read_u64(&mut self) -> Result<u64, Error> {
        Ok(LittleEndian::read_u64(self.take(8)?))
    }

    pub fn read_i64(&mut self) -> Result<i64, Error> {
        Ok(LittleEndian::read_i64(self.take(8)?))
    }

    pub fn read_f32(&mut self) -> Result<f32, Error> {
        Ok(LittleEndian::read_f32(self.take(4)?))
    }

    pub fn read_f64(&mut self) -> Result<f64, Error> {
        Ok(LittleEndian::read_f64(self.take(8)?))
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], Error> {
        self.take(len)
    }

    /// Reads `[len: u32][bytes]`.
    pub fn read_blob(&mut self) -> Result<&'a [u8], Error> {
        let len = self.read_u32()? as usize;
        self.take(len)
    }

    pub fn read_utf8_string(&mut self) -> Result<String, Error> {
        let start = self.cursor;
        let bytes = self.read_blob()?;
        match std::str::from_utf8(bytes) {
            Ok(s) => Ok(s.to_owned()),
            Err(e) => Err(Error::encoding_error(format!(
                "invalid utf-8 in string at offset {}: {}",
                start, e
            ))),
        }
    }
}
