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
use crate::types::SIZE_OF_TYPE_ID;
use std::any::Any;

/// Polymorphic values dispatched through the type registry.
///
/// Layout: `[registered type id: u32][value]`. The concrete type must be
/// registered on both sides; otherwise the call fails with `UnknownType`
/// before anything of the value is written or read.
impl Serializer for Box<dyn Any> {
    fn serialize(&self, context: &mut WriteContext) -> Result<(), Error> {
        let value: &dyn Any = &**self;
        let type_info = context.write_any_typeinfo(value.type_id())?;
        context.inc_depth()?;
        (type_info.get_harness().get_write_fn())(value, context)?;
        context.dec_depth();
        Ok(())
    }

    fn deserialize(context: &mut ReadContext) -> Result<Self, Error> {
        let type_info = context.read_any_typeinfo()?;
        context.inc_depth()?;
        let value = (type_info.get_harness().get_read_fn())(context)?;
        context.dec_depth();
        Ok(value)
    }

    fn min_encoded_size() -> usize {
        SIZE_OF_TYPE_ID
    }
}
