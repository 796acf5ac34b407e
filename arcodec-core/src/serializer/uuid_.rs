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
use uuid::Uuid;

const UUID_LEN: usize = 16;

/// The 16 bytes of the uuid in RFC 4122 order.
impl Serializer for Uuid {
    fn serialize(&self, context: &mut WriteContext) -> Result<(), Error> {
        context.writer.write_bytes(self.as_bytes());
        Ok(())
    }

    fn deserialize(context: &mut ReadContext) -> Result<Self, Error> {
        let bytes = context.reader.read_bytes(UUID_LEN)?;
        Uuid::from_slice(bytes).map_err(|e| Error::decode_error(e.to_string()))
    }

    fn min_encoded_size() -> usize {
        UUID_LEN
    }

    fn reserved_space() -> usize {
        UUID_LEN
    }
}
