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

use super::context::{ReadContext, WriteContext};
use crate::error::Error;
use crate::geometry::{Color, Matrix4x4, Mesh, Pose, Quaternion, Vector2, Vector3, Vector4};
use crate::serializer::Serializer;
use crate::types::{is_reserved_type_id, TypeId};
use chrono::{NaiveDate, NaiveDateTime};
use std::any::Any;
use std::collections::HashMap;
use uuid::Uuid;

type WriteFn = fn(&dyn Any, &mut WriteContext) -> Result<(), Error>;
type ReadFn = fn(&mut ReadContext) -> Result<Box<dyn Any>, Error>;

/// Type-erased serializer entry stored in the registry.
#[derive(Clone, Copy, Debug)]
pub struct Harness {
    write_fn: WriteFn,
    read_fn: ReadFn,
}

impl Harness {
    pub fn new(write_fn: WriteFn, read_fn: ReadFn) -> Harness {
        Harness { write_fn, read_fn }
    }

    #[inline(always)]
    pub fn get_write_fn(&self) -> WriteFn {
        self.write_fn
    }

    #[inline(always)]
    pub fn get_read_fn(&self) -> ReadFn {
        self.read_fn
    }
}

#[derive(Clone, Debug)]
pub struct TypeInfo {
    type_id: u32,
    type_name: &'static str,
    harness: Harness,
}

impl TypeInfo {
    #[inline(always)]
    pub fn get_type_id(&self) -> u32 {
        self.type_id
    }

    #[inline(always)]
    pub fn get_type_name(&self) -> &'static str {
        self.type_name
    }

    #[inline(always)]
    pub fn get_harness(&self) -> &Harness {
        &self.harness
    }
}

/// Maps Rust types to registry ids and serializers, in both directions.
///
/// Only function pointers are stored, so a resolver is `Send + Sync` and is
/// never mutated while a codec serializes.
pub struct TypeResolver {
    type_infos: Vec<TypeInfo>,
    index_by_rs_type: HashMap<std::any::TypeId, usize>,
    index_by_id: HashMap<u32, usize>,
}

impl Default for TypeResolver {
    fn default() -> Self {
        let mut resolver = TypeResolver {
            type_infos: Vec::new(),
            index_by_rs_type: HashMap::new(),
            index_by_id: HashMap::new(),
        };
        resolver.register_builtin_types();
        resolver
    }
}

impl TypeResolver {
    pub fn get_type_info(&self, rs_type_id: &std::any::TypeId) -> Result<&TypeInfo, Error> {
        match self.index_by_rs_type.get(rs_type_id) {
            Some(&index) => Ok(&self.type_infos[index]),
            None => {
                tracing::debug!(?rs_type_id, "no serializer registered for rust type");
                Err(Error::unknown_type(format!(
                    "{:?} has no registered serializer, maybe you forgot to register it",
                    rs_type_id
                )))
            }
        }
    }

    pub fn get_type_info_by_id(&self, id: u32) -> Result<&TypeInfo, Error> {
        match self.index_by_id.get(&id) {
            Some(&index) => Ok(&self.type_infos[index]),
            None => {
                tracing::debug!(id, "no serializer registered for type id");
                Err(Error::unknown_type(format!(
                    "type id {} has no registered serializer",
                    id
                )))
            }
        }
    }

    /// Returns the registry id of `T`, if registered.
    pub fn get_type_id<T: 'static>(&self) -> Option<u32> {
        self.index_by_rs_type
            .get(&std::any::TypeId::of::<T>())
            .map(|&index| self.type_infos[index].type_id)
    }

    pub fn is_registered<T: 'static>(&self) -> bool {
        self.index_by_rs_type
            .contains_key(&std::any::TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.type_infos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.type_infos.is_empty()
    }

    /// Registers `T` under a user id, which must be at least [`TypeId::BOUND`].
    pub fn register<T: Serializer>(&mut self, id: u32) -> Result<(), Error> {
        if is_reserved_type_id(id) {
            return Err(Error::not_allowed(format!(
                "type id {} is reserved for builtin types, user ids start at {}",
                id,
                TypeId::BOUND as u32
            )));
        }
        self.register_serializer::<T>(id)
    }

    fn register_builtin_types(&mut self) {
        macro_rules! builtin {
            ($($ty:ty => $id:expr),* $(,)?) => {
                $(
                    self.register_serializer::<$ty>($id as u32)
                        .expect("builtin type ids are unique");
                )*
            };
        }
        builtin!(
            bool => TypeId::BOOL,
            i8 => TypeId::INT8,
            i16 => TypeId::INT16,
            i32 => TypeId::INT32,
            i64 => TypeId::INT64,
            u8 => TypeId::UINT8,
            u16 => TypeId::UINT16,
            u32 => TypeId::UINT32,
            u64 => TypeId::UINT64,
            f32 => TypeId::FLOAT32,
            f64 => TypeId::FLOAT64,
            String => TypeId::STRING,
            Vec<u8> => TypeId::BINARY,
            Uuid => TypeId::UUID,
            NaiveDateTime => TypeId::TIMESTAMP,
            NaiveDate => TypeId::LOCAL_DATE,
            Vector2 => TypeId::VECTOR2,
            Vector3 => TypeId::VECTOR3,
            Vector4 => TypeId::VECTOR4,
            Quaternion => TypeId::QUATERNION,
            Color => TypeId::COLOR,
            Matrix4x4 => TypeId::MATRIX4X4,
            Pose => TypeId::POSE,
            Mesh => TypeId::MESH,
        );
    }

    fn register_serializer<T: Serializer>(&mut self, id: u32) -> Result<(), Error> {
        fn write<T2: Serializer>(this: &dyn Any, context: &mut WriteContext) -> Result<(), Error> {
            match this.downcast_ref::<T2>() {
                Some(v) => v.serialize(context),
                None => Err(Error::unknown_type(format!(
                    "Cast type to {} error when writing",
                    std::any::type_name::<T2>()
                ))),
            }
        }

        fn read<T2: Serializer>(context: &mut ReadContext) -> Result<Box<dyn Any>, Error> {
            Ok(Box::new(T2::deserialize(context)?))
        }

        let rs_type_id = std::any::TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();
        if self.index_by_rs_type.contains_key(&rs_type_id) {
            return Err(Error::not_allowed(format!(
                "{} is already registered",
                type_name
            )));
        }
        if self.index_by_id.contains_key(&id) {
            return Err(Error::not_allowed(format!(
                "Type id {} conflicts with an already registered type, please use a different id",
                id
            )));
        }

        let index = self.type_infos.len();
        self.type_infos.push(TypeInfo {
            type_id: id,
            type_name,
            harness: Harness::new(write::<T>, read::<T>),
        });
        self.index_by_rs_type.insert(rs_type_id, index);
        self.index_by_id.insert(id, index);
        tracing::debug!(id, type_name, "registered serializer");
        Ok(())
    }
}
