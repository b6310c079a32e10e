use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Attribute,
    DeriveInput,
    Expr,
    Ident,
    Result,
    Token,
};

/// A single `tag = expr` pair inside the `error` attribute.
struct ErrorArg {
    tag: Ident,
    value: Expr,
}

impl Parse for ErrorArg {
    fn parse(input: ParseStream) -> Result<Self> {
        let tag = input.parse()?;
        input.parse::<Token![=]>()?;
        let value = input.parse()?;
        Ok(Self { tag, value })
    }
}

/// The arguments that can be passed to the `error` attribute.
#[derive(Debug, Default)]
struct ErrorArgs {
    message: Option<Expr>,
    labels: Option<Expr>,
    help: Option<Expr>,
    note: Option<Expr>,
}

impl Parse for ErrorArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = ErrorArgs::default();

        for ErrorArg { tag, value } in Punctuated::<ErrorArg, Token![,]>::parse_terminated(input)? {
            let slot = match tag.to_string().as_str() {
                "message" => &mut args.message,
                "labels" => &mut args.labels,
                "help" => &mut args.help,
                "note" => &mut args.note,
                other => {
                    return Err(syn::Error::new_spanned(&tag, format!("unknown tag `{}`", other)));
                },
            };

            if slot.replace(value).is_some() {
                return Err(syn::Error::new_spanned(&tag, format!("duplicate tag `{}`", tag)));
            }
        }

        Ok(args)
    }
}

impl ErrorArgs {
    /// Finds and parses the `error` attribute among the given attributes.
    fn from_attrs(attrs: &[Attribute], name: &Ident) -> Result<Self> {
        let attr = attrs.iter()
            .find(|attr| attr.path().is_ident("error"))
            .ok_or_else(|| syn::Error::new(name.span(), "missing `#[error(...)]` attribute"))?;
        let args = attr.parse_args::<ErrorArgs>()?;

        if args.message.is_none() {
            return Err(syn::Error::new_spanned(attr, "the `error` attribute requires a `message` tag"));
        }

        Ok(args)
    }
}

/// Generates the `Display` and `ErrorKind` implementations for the given type.
pub fn expand(input: DeriveInput) -> Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let ErrorArgs { message, labels, help, note } = ErrorArgs::from_attrs(&input.attrs, name)?;

    let labels = labels
        .map(|labels| quote! { #labels })
        .unwrap_or_else(|| quote! { ::std::vec::Vec::<::std::string::String>::new() });
    let help = help.map(|help| quote! { builder.set_help(#help); });
    let note = note.map(|note| quote! { builder.set_note(#note); });

    Ok(quote! {
        impl #impl_generics ::std::fmt::Display for #name #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", #message)
            }
        }

        impl #impl_generics ::symdiff_error::ErrorKind for #name #ty_generics #where_clause {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[::std::ops::Range<usize>],
            ) -> ::ariadne::Report<(&'a str, ::std::ops::Range<usize>)> {
                let offset = spans.first().map_or(0, |span| span.start);
                let labels = (#labels)
                    .into_iter()
                    .zip(spans.iter())
                    .map(|(text, span)| {
                        let text = ::std::string::ToString::to_string(&text);
                        let label = ::ariadne::Label::new((src_id, span.clone()))
                            .with_color(::symdiff_error::EXPR);

                        if text.is_empty() {
                            label
                        } else {
                            label.with_message(text)
                        }
                    })
                    .collect::<::std::vec::Vec<_>>();

                #[allow(unused_mut)]
                let mut builder = ::ariadne::Report::build(::ariadne::ReportKind::Error, src_id, offset)
                    .with_message(::std::string::ToString::to_string(self))
                    .with_labels(labels);

                #help
                #note
                builder.finish()
            }
        }
    })
}
