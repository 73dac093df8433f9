/// One named struct field, as seen by the derive.
pub(crate) struct Field {
    pub ident: syn::Ident,
    pub ty: syn::Type,

    /// `#[mappable(skip)]`: excluded from the shape entirely; restored from
    /// `Default::default()` on decode.
    pub skip: bool,
}

impl Field {
    pub(crate) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let mut skip = false;

        for attr in &field.attrs {
            if attr.path().is_ident("mappable") {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("skip") {
                        skip = true;
                        Ok(())
                    } else {
                        Err(meta.error("unsupported `mappable` attribute"))
                    }
                })?;
            }
        }

        Ok(Self {
            ident: field
                .ident
                .clone()
                .expect("named fields are checked by the caller"),
            ty: field.ty.clone(),
            skip,
        })
    }
}
