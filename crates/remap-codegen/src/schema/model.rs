use super::Field;

/// A struct the derive maps: its identifier and named fields.
pub(crate) struct Model {
    pub ident: syn::Ident,
    pub fields: Vec<Field>,
}

impl Model {
    pub(crate) fn from_ast(item: &syn::DeriveInput, data: &syn::DataStruct) -> syn::Result<Self> {
        let syn::Fields::Named(named) = &data.fields else {
            return Err(syn::Error::new_spanned(
                &item.ident,
                "Mappable requires a struct with named fields",
            ));
        };

        let fields = named
            .named
            .iter()
            .map(Field::from_ast)
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(Self {
            ident: item.ident.clone(),
            fields,
        })
    }

    pub(crate) fn mapped(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| !field.skip)
    }

    pub(crate) fn skipped(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| field.skip)
    }
}

/// A C-like enum the derive encodes by discriminant.
pub(crate) struct EnumModel {
    pub ident: syn::Ident,
    pub variants: Vec<syn::Ident>,
}

impl EnumModel {
    pub(crate) fn from_ast(item: &syn::DeriveInput, data: &syn::DataEnum) -> syn::Result<Self> {
        if data.variants.is_empty() {
            return Err(syn::Error::new_spanned(
                &item.ident,
                "Mappable requires at least one enum variant",
            ));
        }

        let variants = data
            .variants
            .iter()
            .map(|variant| match variant.fields {
                syn::Fields::Unit => Ok(variant.ident.clone()),
                _ => Err(syn::Error::new_spanned(
                    &variant.ident,
                    "Mappable supports only unit enum variants",
                )),
            })
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(Self {
            ident: item.ident.clone(),
            variants,
        })
    }
}
