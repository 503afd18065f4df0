extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, GenericArgument, ItemFn, PathArguments, ReturnType, Type};

/// #[result_box] - Make a `Result`-returning function return a `ResultBox`
///
/// The function body is moved into a hidden `_original_impl` function and
/// the public function runs it through `ResultBox::of`, so `?` inside the
/// body still works and any `Err` becomes a `Failure`.
///
/// Example:
/// ```rust,ignore
/// #[result_box]
/// fn parse_port(raw: &str) -> Result<u16, std::num::ParseIntError> {
///     raw.parse()
/// }
///
/// assert!(parse_port("80").is_success());
/// ```
///
/// The return type must be written as `Result<T, E>` (any path ending in
/// `Result` with two type arguments); `async fn` is rejected.
#[proc_macro_attribute]
pub fn result_box(args: TokenStream, item: TokenStream) -> TokenStream {
    if !args.is_empty() {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "#[result_box] takes no arguments",
        )
        .to_compile_error()
        .into();
    }

    let input_fn = parse_macro_input!(item as ItemFn);

    if let Some(asyncness) = &input_fn.sig.asyncness {
        return syn::Error::new_spanned(asyncness, "#[result_box] does not support async functions")
            .to_compile_error()
            .into();
    }

    let return_type = match &input_fn.sig.output {
        ReturnType::Type(_, ty) => ty,
        ReturnType::Default => {
            return syn::Error::new_spanned(
                &input_fn.sig,
                "Function must have an explicit `Result<T, E>` return type"
            ).to_compile_error().into();
        }
    };

    let (value_type, cause_type) = match result_arguments(return_type) {
        Some(arguments) => arguments,
        None => {
            return syn::Error::new_spanned(
                return_type,
                "#[result_box] expects a return type of the form `Result<T, E>`"
            ).to_compile_error().into();
        }
    };

    let attrs = &input_fn.attrs;
    // cfg and lint attributes must also gate the hidden implementation
    let shared_attrs = input_fn.attrs.iter().filter(|attr| {
        let path = attr.path();
        path.is_ident("cfg") || path.is_ident("cfg_attr") || path.is_ident("allow")
    });
    let fn_vis = &input_fn.vis;
    let fn_name = &input_fn.sig.ident;
    let fn_body = &input_fn.block;

    // Create hidden function name for original implementation
    let original_impl_name = syn::Ident::new(
        &format!("{}_original_impl", fn_name),
        fn_name.span()
    );

    let mut original_sig = input_fn.sig.clone();
    original_sig.ident = original_impl_name.clone();

    let mut public_sig = input_fn.sig.clone();
    public_sig.output = syn::parse_quote!(-> ::resultbox::ResultBox<#value_type, #cause_type>);

    let forwarded = match forwarded_arguments(&input_fn) {
        Ok(arguments) => arguments,
        Err(err) => return err.to_compile_error().into(),
    };

    let expanded = quote! {
        // Hidden original implementation
        #[doc(hidden)]
        #(#shared_attrs)*
        #original_sig #fn_body

        // Public function now returns ResultBox
        #(#attrs)*
        #fn_vis #public_sig {
            ::resultbox::ResultBox::of(|| #original_impl_name(#(#forwarded),*))
        }
    };

    TokenStream::from(expanded)
}

/// Pull `T` and `E` out of a `Result<T, E>` return type
fn result_arguments(ty: &Type) -> Option<(&Type, &Type)> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Result" {
        return None;
    }
    let PathArguments::AngleBracketed(arguments) = &segment.arguments else {
        return None;
    };

    let mut types = arguments.args.iter().filter_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
    });
    let value = types.next()?;
    let cause = types.next()?;
    if types.next().is_some() {
        return None;
    }
    Some((value, cause))
}

/// Argument expressions that forward the public function's parameters
fn forwarded_arguments(input_fn: &ItemFn) -> syn::Result<Vec<proc_macro2::TokenStream>> {
    input_fn
        .sig
        .inputs
        .iter()
        .map(|input| match input {
            syn::FnArg::Receiver(receiver) => Err(syn::Error::new_spanned(
                receiver,
                "#[result_box] only supports free functions",
            )),
            syn::FnArg::Typed(pat_type) => match &*pat_type.pat {
                syn::Pat::Ident(pat_ident) => {
                    let ident = &pat_ident.ident;
                    Ok(quote!(#ident))
                }
                other => Err(syn::Error::new_spanned(
                    other,
                    "#[result_box] needs plain identifier parameters",
                )),
            },
        })
        .collect()
}

// No tests in proc macro crate - they can't use the macros defined here
// Tests live in the resultbox crate's tests/ directory
