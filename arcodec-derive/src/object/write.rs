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

use crate::util::SourceField;
use proc_macro2::TokenStream;
use quote::quote;

pub fn gen_write_fields(source_fields: &[SourceField<'_>]) -> TokenStream {
    let writes = source_fields.iter().map(|sf| {
        let ty = &sf.field.ty;
        let member = &sf.member;
        quote! {
            <#ty as ::arcodec_core::serializer::Serializer>::serialize(&self.#member, context)?;
        }
    });
    quote! { #(#writes)* }
}

pub fn gen_reserved_space(source_fields: &[SourceField<'_>]) -> TokenStream {
    let reserved_size_expr: Vec<_> = source_fields
        .iter()
        .map(|sf| {
            let ty = &sf.field.ty;
            quote! { <#ty as ::arcodec_core::serializer::Serializer>::reserved_space() }
        })
        .collect();
    if reserved_size_expr.is_empty() {
        quote! { 0 }
    } else {
        quote! { #(#reserved_size_expr)+* }
    }
}
