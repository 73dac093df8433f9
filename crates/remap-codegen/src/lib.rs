mod expand;
mod schema;

use proc_macro2::TokenStream;

pub fn generate(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::DeriveInput = syn::parse2(input)?;

    if !item.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &item.generics,
            "Mappable cannot be derived for generic types",
        ));
    }

    match &item.data {
        syn::Data::Struct(data) => {
            let model = schema::Model::from_ast(&item, data)?;
            Ok(expand::model(&model))
        }
        syn::Data::Enum(data) => {
            let model = schema::EnumModel::from_ast(&item, data)?;
            Ok(expand::enum_model(&model))
        }
        syn::Data::Union(_) => Err(syn::Error::new_spanned(
            &item.ident,
            "Mappable cannot be derived for unions",
        )),
    }
}
