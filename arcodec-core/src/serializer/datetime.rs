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
use crate::resolver::context::ReadContext;
use crate::resolver::context::WriteContext;
use crate::serializer::Serializer;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use std::mem;

/// `num_days_from_ce` of 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Microseconds since the Unix epoch, as `i64`.
impl Serializer for NaiveDateTime {
    fn serialize(&self, context: &mut WriteContext) -> Result<(), Error> {
        context.writer.write_i64(self.and_utc().timestamp_micros());
        Ok(())
    }

    fn deserialize(context: &mut ReadContext) -> Result<Self, Error> {
        let micros = context.reader.read_i64()?;
        DateTime::from_timestamp_micros(micros)
            .map(|dt| dt.naive_utc())
            .ok_or_else(|| {
                Error::decode_error(format!("timestamp {} micros is out of range", micros))
            })
    }

    fn min_encoded_size() -> usize {
        mem::size_of::<i64>()
    }

    fn reserved_space() -> usize {
        mem::size_of::<i64>()
    }
}

/// Days since the Unix epoch, as `i32`.
impl Serializer for NaiveDate {
    fn serialize(&self, context: &mut WriteContext) -> Result<(), Error> {
        context
            .writer
            .write_i32(self.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE);
        Ok(())
    }

    fn deserialize(context: &mut ReadContext) -> Result<Self, Error> {
        let days = context.reader.read_i32()?;
        days.checked_add(UNIX_EPOCH_DAYS_FROM_CE)
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .ok_or_else(|| Error::decode_error(format!("date {} days is out of range", days)))
    }

    fn min_encoded_size() -> usize {
        mem::size_of::<i32>()
    }

    fn reserved_space() -> usize {
        mem::size_of::<i32>()
    }
}
