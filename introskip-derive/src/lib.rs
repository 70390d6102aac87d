extern crate proc_macro;
use crate::proc_macro::TokenStream;

use quote::{quote, quote_spanned};
use syn::spanned::Spanned;
use syn::{parse_macro_input, Data, DataStruct, DeriveInput, Fields, FieldsNamed};

/// Derives the root model `Update` impl for the environment named by the
/// `#[model(Env)]` attribute: `ctx` is updated first, every other field is
/// updated with `UpdateWithCtx` against the already updated `ctx`.
///
/// The generated impl refers to `crate::runtime`, so the derive is only
/// usable from within the `introskip-core` crate itself.
#[proc_macro_derive(Model, attributes(model))]
pub fn model_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let env = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("model"))
        .map(|attr| {
            attr.parse_args::<syn::Path>()
                .expect("#[model(...)] expects an environment type")
        })
        .expect("#[derive(Model)] requires a #[model(Env)] attribute");

    if let Data::Struct(DataStruct {
        fields: Fields::Named(FieldsNamed { named, .. }),
        ..
    }) = input.data
    {
        // @TODO: assert that the first field is named 'ctx'
        let name = &input.ident;
        let container_updates = named.iter().filter_map(|f| {
            let name = &f.ident;
            if name.as_ref().map_or(true, |n| n == "ctx") {
                return None;
            }
            Some(quote_spanned! {f.span() =>
                .join(crate::runtime::UpdateWithCtx::<#env>::update(&mut self.#name, msg, &self.ctx))
            })
        });
        let expanded = quote! {
            impl crate::runtime::Update<#env> for #name {
                fn update(&mut self, msg: &crate::runtime::msg::Msg) -> crate::runtime::Effects {
                    crate::runtime::Update::<#env>::update(&mut self.ctx, msg)
                        #(#container_updates)*
                }
            }
        };

        TokenStream::from(expanded)
    } else {
        panic!("#[derive(Model)] is only defined for structs with named fields");
    }
}
