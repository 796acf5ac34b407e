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

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DataEnum, DeriveInput, Fields};

pub fn derive_enum(ast: &DeriveInput, data_enum: &DataEnum) -> syn::Result<TokenStream> {
    if let Some(variant) = data_enum
        .variants
        .iter()
        .find(|v| !matches!(v.fields, Fields::Unit))
    {
        return Err(syn::Error::new_spanned(
            variant,
            "ItemObject enums must be fieldless",
        ));
    }
    let name = &ast.ident;
    let name_str = name.to_string();
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();
    let write_ts = gen_write(data_enum);
    let read_ts = gen_read(data_enum, &name_str);

    Ok(quote! {
        impl #impl_generics ::arcodec_core::serializer::Serializer for #name #ty_generics #where_clause {
            fn serialize(
                &self,
                context: &mut ::arcodec_core::resolver::context::WriteContext,
            ) -> ::std::result::Result<(), ::arcodec_core::error::Error> {
                #write_ts
            }

            fn deserialize(
                context: &mut ::arcodec_core::resolver::context::ReadContext,
            ) -> ::std::result::Result<Self, ::arcodec_core::error::Error> {
                #read_ts
            }

            #[inline(always)]
            fn min_encoded_size() -> usize {
                4
            }

            #[inline(always)]
            fn reserved_space() -> usize {
                4
            }
        }
    })
}

fn gen_write(data_enum: &DataEnum) -> TokenStream {
    let variant_idents: Vec<_> = data_enum.variants.iter().map(|v| &v.ident).collect();
    let variant_values: Vec<_> = (0..variant_idents.len()).map(|v| v as i32).collect();
    quote! {
        let index: i32 = match *self {
            #(
                Self::#variant_idents => #variant_values,
            )*
        };
        context.writer.write_i32(index);
        ::std::result::Result::Ok(())
    }
}

fn gen_read(data_enum: &DataEnum, name: &str) -> TokenStream {
    let variant_idents: Vec<_> = data_enum.variants.iter().map(|v| &v.ident).collect();
    let variant_values: Vec<_> = (0..variant_idents.len()).map(|v| v as i32).collect();
    quote! {
        let index = context.reader.read_i32()?;
        match index {
            #(
                #variant_values => ::std::result::Result::Ok(Self::#variant_idents),
            )*
            _ => ::arcodec_core::bail!("unknown variant index {} for enum {}", index, #name),
        }
    }
}
