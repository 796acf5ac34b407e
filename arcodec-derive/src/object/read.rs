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

pub fn gen_read_fields(source_fields: &[SourceField<'_>]) -> TokenStream {
    let reads = source_fields.iter().map(|sf| {
        let ty = &sf.field.ty;
        let binding = &sf.binding;
        quote! {
            let #binding = <#ty as ::arcodec_core::serializer::Serializer>::deserialize(context)?;
        }
    });
    quote! { #(#reads)* }
}

pub fn gen_min_fields_size(source_fields: &[SourceField<'_>]) -> TokenStream {
    let min_size_expr: Vec<_> = source_fields
        .iter()
        .map(|sf| {
            let ty = &sf.field.ty;
            quote! { <#ty as ::arcodec_core::serializer::Serializer>::min_encoded_size() }
        })
        .collect();
    if min_size_expr.is_empty() {
        quote! { 0 }
    } else {
        quote! { #(#min_size_expr)+* }
    }
}
