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

use crate::object::{derive_enum, read, write};
use crate::util::{self_construction, source_fields, ItemAttrs, DEFAULT_VERSION};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, Data, DataStruct, DeriveInput, GenericParam, Generics};

pub fn derive_serializer(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let attrs = ItemAttrs::parse(&ast.attrs)?;
    match &ast.data {
        Data::Struct(s) => derive_struct(ast, s, &attrs),
        Data::Enum(e) => {
            if attrs.version.is_some() {
                return Err(syn::Error::new_spanned(
                    &ast.ident,
                    "`#[item(version = N)]` only applies to structs",
                ));
            }
            derive_enum::derive_enum(ast, e)
        }
        Data::Union(_) => Err(syn::Error::new_spanned(
            &ast.ident,
            "ItemObject cannot be derived for unions",
        )),
    }
}

/// Adds a `Serializer` bound to every type parameter.
fn add_trait_bounds(generics: &Generics) -> Generics {
    let mut generics = generics.clone();
    for param in &mut generics.params {
        if let GenericParam::Type(tp) = param {
            tp.bounds
                .push(parse_quote!(::arcodec_core::serializer::Serializer));
        }
    }
    generics
}

fn derive_struct(ast: &DeriveInput, s: &DataStruct, attrs: &ItemAttrs) -> syn::Result<TokenStream> {
    let name = &ast.ident;
    let generics = add_trait_bounds(&ast.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let version = attrs.version.unwrap_or(DEFAULT_VERSION);

    let source_fields = source_fields(&s.fields);
    let write_fields_ts = write::gen_write_fields(&source_fields);
    let reserved_space_ts = write::gen_reserved_space(&source_fields);
    let read_fields_ts = read::gen_read_fields(&source_fields);
    let min_fields_size_ts = read::gen_min_fields_size(&source_fields);
    let construction_ts = self_construction(&s.fields, &source_fields);

    Ok(quote! {
        impl #impl_generics ::arcodec_core::serializer::VersionedSerializer for #name #ty_generics #where_clause {
            type Version = ::arcodec_core::serializer::SingleVersion<#version>;

            fn serialize_fields(
                &self,
                context: &mut ::arcodec_core::resolver::context::WriteContext,
            ) -> ::std::result::Result<(), ::arcodec_core::error::Error> {
                #write_fields_ts
                ::std::result::Result::Ok(())
            }

            fn deserialize_fields(
                context: &mut ::arcodec_core::resolver::context::ReadContext,
                _version: ::arcodec_core::serializer::SingleVersion<#version>,
            ) -> ::std::result::Result<Self, ::arcodec_core::error::Error> {
                #read_fields_ts
                ::std::result::Result::Ok(#construction_ts)
            }

            #[inline(always)]
            fn min_fields_size() -> usize {
                #min_fields_size_ts
            }
        }

        impl #impl_generics ::arcodec_core::serializer::Serializer for #name #ty_generics #where_clause {
            #[inline]
            fn serialize(
                &self,
                context: &mut ::arcodec_core::resolver::context::WriteContext,
            ) -> ::std::result::Result<(), ::arcodec_core::error::Error> {
                ::arcodec_core::serializer::versioned::write_versioned(self, context)
            }

            #[inline]
            fn deserialize(
                context: &mut ::arcodec_core::resolver::context::ReadContext,
            ) -> ::std::result::Result<Self, ::arcodec_core::error::Error> {
                ::arcodec_core::serializer::versioned::read_versioned(context)
            }

            #[inline(always)]
            fn min_encoded_size() -> usize {
                ::arcodec_core::types::SIZE_OF_VERSION
                    + <Self as ::arcodec_core::serializer::VersionedSerializer>::min_fields_size()
            }

            #[inline(always)]
            fn reserved_space() -> usize {
                ::arcodec_core::types::SIZE_OF_VERSION + #reserved_space_ts
            }
        }
    })
}
