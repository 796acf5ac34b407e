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
use quote::{format_ident, quote};
use syn::{Attribute, Field, Fields, LitInt};

/// Format version used when a struct carries no `#[item(version = N)]`.
pub const DEFAULT_VERSION: u16 = 1;

/// Options read from `#[item(...)]`.
pub struct ItemAttrs {
    pub version: Option<u16>,
}

impl ItemAttrs {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<ItemAttrs> {
        let mut version = None;
        for attr in attrs.iter().filter(|attr| attr.path().is_ident("item")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("version") {
                    let lit: LitInt = meta.value()?.parse()?;
                    version = Some(lit.base10_parse::<u16>()?);
                    Ok(())
                } else {
                    Err(meta.error("unsupported item attribute, expected `version = N`"))
                }
            })?;
        }
        Ok(ItemAttrs { version })
    }
}

/// A struct field with the names used to access and rebuild it.
pub struct SourceField<'a> {
    pub field: &'a Field,
    /// `self.<member>` accessor: the identifier or the tuple index.
    pub member: TokenStream,
    /// Local binding holding the decoded value.
    pub binding: syn::Ident,
}

/// Returns the fields in declaration order, which is their wire order.
pub fn source_fields(fields: &Fields) -> Vec<SourceField<'_>> {
    fields
        .iter()
        .enumerate()
        .map(|(idx, field)| match &field.ident {
            Some(ident) => SourceField {
                field,
                member: quote! { #ident },
                binding: format_ident!("__{}", ident),
            },
            None => {
                let index = syn::Index::from(idx);
                SourceField {
                    field,
                    member: quote! { #index },
                    binding: format_ident!("__field{}", idx),
                }
            }
        })
        .collect()
}

/// Generate Self construction syntax from the decoded bindings.
/// - named struct: `Self { a: __a, b: __b }`
/// - tuple struct: `Self(__field0, __field1)`
/// - unit struct: `Self`
pub fn self_construction(fields: &Fields, source_fields: &[SourceField<'_>]) -> TokenStream {
    let bindings = source_fields.iter().map(|sf| &sf.binding);
    match fields {
        Fields::Named(_) => {
            let members = source_fields.iter().map(|sf| &sf.member);
            quote! { Self { #(#members: #bindings),* } }
        }
        Fields::Unnamed(_) => quote! { Self( #(#bindings),* ) },
        Fields::Unit => quote! { Self },
    }
}
