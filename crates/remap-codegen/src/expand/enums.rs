use crate::schema::EnumModel;

use proc_macro2::TokenStream;
use quote::quote;

pub(crate) fn enum_model(model: &EnumModel) -> TokenStream {
    let ident = &model.ident;
    let name = ident.to_string();
    let first = &model.variants[0];

    let discriminant_arms = model.variants.iter().map(|variant| {
        quote!(#ident::#variant => #ident::#variant as i64,)
    });

    let load_arms = model.variants.iter().map(|variant| {
        quote!(v if v == #ident::#variant as i64 => StdResult::Ok(#ident::#variant),)
    });

    quote! {
        const _: () = {
            use remap::codegen_support::*;

            impl FieldType for #ident {
                fn ty() -> Type {
                    Type::Enum(EnumShape {
                        id: ShapeId::of::<#ident>(),
                        first: #ident::#first as i64,
                    })
                }

                fn to_value(&self) -> Value {
                    let variant = match self {
                        #(#discriminant_arms)*
                    };
                    Value::Enum(ValueEnum::new(variant))
                }

                fn load(value: Value) -> Result<Self> {
                    let variant = match value {
                        Value::Enum(value_enum) => value_enum.variant,
                        other => {
                            return StdResult::Err(Error::type_conversion(
                                ::std::format!("{:?}", other),
                                #name,
                            ))
                        }
                    };
                    match variant {
                        #(#load_arms)*
                        v => StdResult::Err(Error::type_conversion(
                            ::std::format!("discriminant {}", v),
                            #name,
                        )),
                    }
                }
            }
        };
    }
}
