use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Fields, ItemStruct};

pub fn expand(input: ItemStruct) -> TokenStream {
    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(&input.generics, "feature slices cannot be generic")
            .to_compile_error();
    }

    let body = match &input.fields {
        Fields::Named(fields) => quote! { #fields },
        Fields::Unit => quote! { {} },
        Fields::Unnamed(fields) => {
            return syn::Error::new_spanned(fields, "feature slices must use named fields")
                .to_compile_error();
        }
    };

    let attrs = &input.attrs;
    let vis = &input.vis;
    let handle = &input.ident;
    let inner = format_ident!("{handle}Inner");

    quote! {
        #(#attrs)*
        #[derive(Debug, Clone)]
        #vis struct #inner #body

        #[derive(Debug, Clone)]
        #vis struct #handle {
            inner: ::std::sync::Arc<#inner>,
        }

        impl #handle {
            #[must_use]
            pub fn new(inner: #inner) -> Self {
                Self { inner: ::std::sync::Arc::new(inner) }
            }
        }

        impl ::std::ops::Deref for #handle {
            type Target = #inner;

            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }

        impl ::nshop_kernel::domain::registry::FeatureSlice for #handle {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }
    }
}
