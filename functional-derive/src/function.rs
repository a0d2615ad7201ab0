//! Implementation of the `function!` and `curried!` procedural macros.
//!
//! # Supported Input Forms
//!
//! 1. Closure form: `function!(|a, b| body)`
//! 2. Function path + arity form: `function!(function_path, arity)`
//!
//! # Generated Code Structure
//!
//! ## Closure Form
//!
//! The arity is the number of closure parameters. Each named parameter is
//! bound to a clone of the matching argument, and `_` parameters count toward
//! the arity without binding anything. For `|left, right| body`:
//!
//! ```text
//! ::functional::Function::new(2usize, move |__functional_arguments: ::functional::Arguments<'_>|
//!     -> ::functional::Result<::functional::Value> {
//!     let left: ::functional::Value = Clone::clone(__functional_arguments.get(0usize));
//!     let right: ::functional::Value = Clone::clone(__functional_arguments.get(1usize));
//!     body
//! })
//! ```
//!
//! ## Function Path + Arity Form
//!
//! For `function!(body_function, 2)`:
//!
//! ```text
//! ::functional::Function::new(2usize, body_function)
//! ```
//!
//! `curried!` accepts the same forms and wraps the result in
//! `::functional::curry(&...)`.

use proc_macro2::{Ident, Span, TokenStream};
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::{Expr, ExprClosure, ExprLit, ExprPath, Lit, Pat, Token, Type, spanned::Spanned};

pub enum FunctionInput {
    Closure {
        parameters: Vec<Parameter>,
        body: Box<Expr>,
    },
    PathWithArity {
        function: ExprPath,
        arity: usize,
    },
}

impl FunctionInput {
    pub const fn arity(&self) -> usize {
        match self {
            Self::Closure { parameters, .. } => parameters.len(),
            Self::PathWithArity { arity, .. } => *arity,
        }
    }
}

pub enum Parameter {
    Named {
        identifier: Ident,
        mutable: bool,
        annotation: Option<Box<Type>>,
    },
    Ignored,
}

pub fn function_impl(input: TokenStream) -> TokenStream {
    match parse_function_input(input) {
        Ok(function_input) => generate_function(&function_input),
        Err(error) => error.to_compile_error(),
    }
}

pub fn curried_impl(input: TokenStream) -> TokenStream {
    match parse_function_input(input) {
        Ok(function_input) => {
            let function = generate_function(&function_input);
            quote! {
                ::functional::curry(&#function)
            }
        }
        Err(error) => error.to_compile_error(),
    }
}

pub fn parse_function_input(input: TokenStream) -> syn::Result<FunctionInput> {
    let parser = Punctuated::<Expr, Token![,]>::parse_terminated;
    let expressions: Punctuated<Expr, Token![,]> = syn::parse::Parser::parse2(parser, input)?;

    let mut iterator = expressions.into_iter();
    match (iterator.next(), iterator.next(), iterator.next()) {
        (Some(Expr::Closure(closure)), None, None) => parse_closure(closure),
        (Some(Expr::Path(path)), None, None) => Err(syn::Error::new(
            path.span(),
            "function! with a function path requires an arity: function!(path, 2)",
        )),
        (Some(first), Some(second), None) => parse_path_with_arity(first, second),
        _ => Err(syn::Error::new(
            Span::call_site(),
            "function! requires a closure or a function path with an arity",
        )),
    }
}

fn parse_closure(closure: ExprClosure) -> syn::Result<FunctionInput> {
    let parameters = closure
        .inputs
        .iter()
        .map(parse_parameter)
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(FunctionInput::Closure {
        parameters,
        body: closure.body,
    })
}

fn parse_parameter(pattern: &Pat) -> syn::Result<Parameter> {
    match pattern {
        Pat::Wild(_) => Ok(Parameter::Ignored),
        Pat::Ident(binding) if binding.by_ref.is_none() && binding.subpat.is_none() => {
            Ok(Parameter::Named {
                identifier: binding.ident.clone(),
                mutable: binding.mutability.is_some(),
                annotation: None,
            })
        }
        Pat::Type(typed) => match parse_parameter(&typed.pat)? {
            Parameter::Named {
                identifier,
                mutable,
                ..
            } => Ok(Parameter::Named {
                identifier,
                mutable,
                annotation: Some(typed.ty.clone()),
            }),
            Parameter::Ignored => Ok(Parameter::Ignored),
        },
        other => Err(syn::Error::new(
            other.span(),
            "function! parameters must be plain identifiers or `_`",
        )),
    }
}

fn parse_path_with_arity(first: Expr, second: Expr) -> syn::Result<FunctionInput> {
    let function = match first {
        Expr::Path(path) => path,
        other => {
            return Err(syn::Error::new(
                other.span(),
                "expected a function name or path",
            ));
        }
    };

    let arity = match second {
        Expr::Lit(ExprLit {
            lit: Lit::Int(literal_integer),
            ..
        }) => literal_integer.base10_parse::<usize>()?,
        other => {
            return Err(syn::Error::new(
                other.span(),
                "function! expected an integer literal for arity",
            ));
        }
    };

    Ok(FunctionInput::PathWithArity { function, arity })
}

fn generate_function(input: &FunctionInput) -> TokenStream {
    let arity = input.arity();

    match input {
        FunctionInput::PathWithArity { function, .. } => quote! {
            ::functional::Function::new(#arity, #function)
        },
        FunctionInput::Closure { parameters, body } => {
            let arguments = format_ident!("__functional_arguments");
            let bindings = parameters
                .iter()
                .enumerate()
                .filter_map(|(index, parameter)| generate_binding(&arguments, index, parameter));

            quote! {
                ::functional::Function::new(
                    #arity,
                    move |#arguments: ::functional::Arguments<'_>|
                        -> ::functional::Result<::functional::Value> {
                        #(#bindings)*
                        #body
                    },
                )
            }
        }
    }
}

fn generate_binding(arguments: &Ident, index: usize, parameter: &Parameter) -> Option<TokenStream> {
    match parameter {
        Parameter::Ignored => None,
        Parameter::Named {
            identifier,
            mutable,
            annotation,
        } => {
            let mutability = mutable.then(|| quote! { mut });
            let annotation = annotation
                .as_ref()
                .map_or_else(|| quote! { ::functional::Value }, |ty| quote! { #ty });
            Some(quote! {
                let #mutability #identifier: #annotation =
                    ::std::clone::Clone::clone(#arguments.get(#index));
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(quote! { |value| Ok(value) }, 1)]
    #[case(quote! { |left, right| Ok(left) }, 2)]
    #[case(quote! { |_, _, third| Ok(third) }, 3)]
    #[case(quote! { || Ok(::functional::Value::Null) }, 0)]
    #[case(quote! { some_body, 4 }, 4)]
    fn test_arity_is_read_from_input(#[case] input: TokenStream, #[case] expected: usize) {
        let parsed = parse_function_input(input).unwrap();
        assert_eq!(parsed.arity(), expected);
    }

    #[rstest]
    fn test_typed_parameter_keeps_its_annotation() {
        let parsed = parse_function_input(quote! { |mut value: Value| Ok(value) }).unwrap();
        let FunctionInput::Closure { parameters, .. } = parsed else {
            panic!("expected the closure form");
        };
        assert!(matches!(
            &parameters[0],
            Parameter::Named {
                mutable: true,
                annotation: Some(_),
                ..
            }
        ));
    }

    #[rstest]
    #[case(quote! { some_body })]
    #[case(quote! { some_body, "two" })]
    #[case(quote! { |(left, right)| Ok(left) })]
    #[case(quote! { 1 + 1 })]
    #[case(quote! { some_body, 2, 3 })]
    fn test_malformed_input_is_rejected(#[case] input: TokenStream) {
        assert!(parse_function_input(input).is_err());
    }
}
