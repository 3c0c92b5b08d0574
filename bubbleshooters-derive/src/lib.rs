extern crate proc_macro;
use crate::proc_macro::TokenStream;

use case::CaseExt;
use proc_macro2::Span;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DataStruct, DeriveInput, Fields, FieldsNamed, Ident, Type};

/// Derives the runtime `Model` trait for an application model struct.
///
/// The first field must be named `ctx` and implement `Update`; every other
/// field must implement `UpdateWithCtx`. The target environment is given
/// with the `#[model(Env)]` attribute. A `<Name>Field` enum is generated
/// alongside the impl for per-field state change reporting.
#[proc_macro_derive(Model, attributes(model))]
pub fn model_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let env: Type = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("model"))
        .expect("#[model(Env)] attribute is required")
        .parse_args()
        .expect("#[model(Env)] expects an environment type");

    let core = match crate_name("bubbleshooters-core") {
        Ok(FoundCrate::Name(name)) => {
            let ident = Ident::new(&name.replace('-', "_"), Span::call_site());
            quote!(::#ident)
        }
        _ => quote!(crate),
    };

    let named = match input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(FieldsNamed { named, .. }),
            ..
        }) => named,
        _ => panic!("#[derive(Model)] is only defined for structs with named fields"),
    };

    let mut fields = named.iter();
    match fields.next().and_then(|field| field.ident.as_ref()) {
        Some(ident) if ident == "ctx" => {}
        _ => panic!("#[derive(Model)] expects the first field to be named `ctx`"),
    };
    let (idents, variants): (Vec<_>, Vec<_>) = fields
        .filter_map(|field| field.ident.as_ref())
        .map(|ident| {
            (
                ident.to_owned(),
                Ident::new(&ident.to_string().to_camel(), ident.span()),
            )
        })
        .unzip();

    let name = &input.ident;
    let vis = &input.vis;
    let field_name = format_ident!("{}Field", name);
    let expanded = quote! {
        #[derive(Clone, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "snake_case")]
        #vis enum #field_name {
            Ctx,
            #(#variants,)*
        }

        impl #core::runtime::Model<#env> for #name {
            type Field = #field_name;

            fn update(
                &mut self,
                msg: &#core::runtime::msg::Msg,
            ) -> (Vec<#core::runtime::Effect>, Vec<Self::Field>) {
                let mut effects = vec![];
                let mut fields = vec![];
                let ctx_effects =
                    #core::runtime::Update::<#env>::update(&mut self.ctx, msg);
                if ctx_effects.has_changed {
                    fields.push(#field_name::Ctx);
                };
                effects.extend(ctx_effects);
                #(
                    let field_effects = #core::runtime::UpdateWithCtx::<#env>::update(
                        &mut self.#idents,
                        msg,
                        &self.ctx,
                    );
                    if field_effects.has_changed {
                        fields.push(#field_name::#variants);
                    };
                    effects.extend(field_effects);
                )*
                (effects, fields)
            }

            fn update_field(
                &mut self,
                msg: &#core::runtime::msg::Msg,
                field: &Self::Field,
            ) -> (Vec<#core::runtime::Effect>, Vec<Self::Field>) {
                match field {
                    #field_name::Ctx => self.update(msg),
                    #(
                        #field_name::#variants => {
                            let mut effects = vec![];
                            let mut fields = vec![];
                            let field_effects = #core::runtime::UpdateWithCtx::<#env>::update(
                                &mut self.#idents,
                                msg,
                                &self.ctx,
                            );
                            if field_effects.has_changed {
                                fields.push(#field_name::#variants);
                            };
                            effects.extend(field_effects);
                            (effects, fields)
                        }
                    )*
                }
            }
        }
    };

    TokenStream::from(expanded)
}
