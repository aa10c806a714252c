//! Implementation of the `#[derive(Construct)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, parse_macro_input};

/// Main implementation of the Construct derive macro.
pub fn derive_construct_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Struct(data_struct) => generate_construct(name, generics, &data_struct.fields),
        Data::Enum(_) => syn::Error::new_spanned(
            &input.ident,
            "Construct can only be derived for structs, not enums. Implement Construct by hand to pick a variant.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Construct cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// Generates the `Construct` impl taking the fields in declaration order.
fn generate_construct(name: &Ident, generics: &Generics, fields: &Fields) -> TokenStream2 {
    let field_types: Vec<_> = fields.iter().map(|field| &field.ty).collect();
    let bindings: Vec<Ident> = (0..field_types.len())
        .map(|position| format_ident!("field_{}", position))
        .collect();

    let body = match fields {
        Fields::Named(named_fields) => {
            let field_names = named_fields.named.iter().map(|field| &field.ident);
            quote! { Self { #(#field_names: #bindings),* } }
        }
        Fields::Unnamed(_) => quote! { Self(#(#bindings),*) },
        Fields::Unit => quote! { Self },
    };

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::fnkit::object::Construct<(#(#field_types,)*)> for #name #type_generics #where_clause {
            #[inline]
            #[allow(clippy::unused_unit)]
            fn construct((#(#bindings,)*): (#(#field_types,)*)) -> Self {
                #body
            }
        }
    }
}
