// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Procedural macros for the `packed_result` crate.
//!
//! Provides the `#[derive(ErrorCode)]` macro for fieldless enums.
//!
//! ## License
//!
//! GPL-3.0-only

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

use proc_macro::TokenStream;
use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    Attribute, Data, DataEnum, DeriveInput, Expr, ExprLit, ExprUnary, Fields, Ident, Lit, LitStr,
    Meta, UnOp, parse_macro_input,
};

/// Derives `ErrorCode` for a fieldless enum.
///
/// Each variant's code is its discriminant: explicit integer literals are
/// honored, implicit ones count up from the previous variant (starting at 0).
/// `BITS` is the width of the largest code.
///
/// # Attributes
///
/// - `#[error_code(fallback)]` on one variant: returned by `from_code` for
///   codes that match no variant. Without it, the first variant is used.
///
/// # Requirements
///
/// - The enum must be `Copy` and have at least one variant
/// - Variants carry no data
/// - Discriminants are non-negative integer literals below `2^63`
///
/// # Example
///
/// ```rust,ignore
/// use packed_result::{ErrorCode, PackedResult};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, ErrorCode)]
/// enum IoError {
///     #[error_code(fallback)]
///     Unknown,
///     NotFound = 4,
///     Denied,
/// }
///
/// let result = PackedResult::<u64, IoError>::err(IoError::Denied);
/// assert_eq!(result.error(), IoError::Denied);
/// ```
#[proc_macro_derive(ErrorCode, attributes(error_code))]
pub fn derive_error_code(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input).unwrap_or_else(|e| e).into()
}

/// Finds the root crate path from a list of candidates.
///
/// Resolves to `packed_result_core` or `packed_result` depending on which one
/// the calling crate depends on.
pub(crate) fn find_root_with_candidates(candidates: &[&'static str]) -> TokenStream2 {
    for &candidate in candidates {
        match crate_name(candidate) {
            Ok(FoundCrate::Itself) => return quote!(crate),
            Ok(FoundCrate::Name(name)) => {
                let id = Ident::new(&name, Span::call_site());
                return quote!(#id);
            }
            Err(_) => continue,
        }
    }

    let msg = "ErrorCode: could not find packed-result or packed-result-core. Add packed-result to Cargo.toml.";
    let lit = LitStr::new(msg, Span::call_site());
    quote! { compile_error!(#lit); }
}

/// Checks if a variant has the `#[error_code(fallback)]` attribute.
fn has_error_code_fallback(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| match &attr.meta {
        Meta::List(meta_list) => {
            meta_list.path.is_ident("error_code")
                && meta_list.tokens.to_string().contains("fallback")
        }
        _ => false,
    })
}

/// Width in bits of the largest code.
pub(crate) fn code_width(max_code: u64) -> u32 {
    u64::BITS - max_code.leading_zeros()
}

/// Variant name and its code.
struct VariantCode<'a> {
    ident: &'a Ident,
    code: u64,
}

/// Resolves each variant's code, following Rust's discriminant numbering.
fn variant_codes(data: &DataEnum) -> Result<Vec<VariantCode<'_>>, TokenStream2> {
    let mut codes = Vec::with_capacity(data.variants.len());
    let mut next: Option<u64> = Some(0);

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                format!(
                    "variant `{}` carries data; ErrorCode can only be derived for fieldless enums.",
                    variant.ident
                ),
            )
            .to_compile_error());
        }

        let code = match &variant.discriminant {
            Some((_, expr)) => literal_discriminant(&variant.ident, expr)?,
            None => next.ok_or_else(|| {
                syn::Error::new_spanned(
                    &variant.ident,
                    format!("implicit discriminant of `{}` overflows u64", variant.ident),
                )
                .to_compile_error()
            })?,
        };

        next = code.checked_add(1);
        codes.push(VariantCode {
            ident: &variant.ident,
            code,
        });
    }

    Ok(codes)
}

/// Parses an explicit discriminant, which must be a non-negative integer literal.
fn literal_discriminant(ident: &Ident, expr: &Expr) -> Result<u64, TokenStream2> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(int), ..
        }) => int
            .base10_parse::<u64>()
            .map_err(|e| e.to_compile_error()),
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_), ..
        }) => Err(syn::Error::new_spanned(
            expr,
            format!("discriminant of `{}` is negative; error codes must be non-negative.", ident),
        )
        .to_compile_error()),
        _ => Err(syn::Error::new_spanned(
            expr,
            format!("discriminant of `{}` must be an integer literal.", ident),
        )
        .to_compile_error()),
    }
}

/// Expands the DeriveInput into the `ErrorCode` implementation.
fn expand(input: DeriveInput) -> Result<TokenStream2, TokenStream2> {
    let enum_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // 1) Resolve `packed_result_core` or `packed_result` (prefer core)
    let root = find_root_with_candidates(&["packed-result-core", "packed-result"]);

    // 2) Only enums
    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "ErrorCode can only be derived for fieldless enums.",
            )
            .to_compile_error());
        }
    };

    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "ErrorCode cannot be derived for an enum without variants.",
        )
        .to_compile_error());
    }

    // 3) Codes and width
    let codes = variant_codes(data)?;
    let max_code = codes.iter().map(|v| v.code).max().unwrap_or(0);
    let bits = code_width(max_code);

    if bits >= u64::BITS {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "error codes must fit in 63 bits.",
        )
        .to_compile_error());
    }

    // 4) Fallback variant: the marked one, else the first
    let marked: Vec<&Ident> = data
        .variants
        .iter()
        .filter(|v| has_error_code_fallback(&v.attrs))
        .map(|v| &v.ident)
        .collect();

    if marked.len() > 1 {
        return Err(syn::Error::new_spanned(
            marked[1],
            "only one variant can be marked `#[error_code(fallback)]`.",
        )
        .to_compile_error());
    }

    let fallback = marked.first().copied().unwrap_or(codes[0].ident);

    // 5) Emit
    let idents: Vec<&Ident> = codes.iter().map(|v| v.ident).collect();
    let values: Vec<u64> = codes.iter().map(|v| v.code).collect();

    Ok(quote! {
        impl #impl_generics #root::ErrorCode for #enum_name #ty_generics #where_clause {
            const BITS: u32 = #bits;

            #[inline]
            fn into_code(self) -> u64 {
                match self {
                    #( Self::#idents => #values, )*
                }
            }

            #[inline]
            fn from_code(code: u64) -> Self {
                match code {
                    #( #values => Self::#idents, )*
                    _ => Self::#fallback,
                }
            }
        }
    })
}
