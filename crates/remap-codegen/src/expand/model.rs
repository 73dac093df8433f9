use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

pub(crate) fn model(model: &Model) -> TokenStream {
    let ident = &model.ident;
    let name = ident.to_string();

    let shape_fields = model.mapped().map(|field| {
        let field_name = field.ident.to_string();
        let ty = &field.ty;
        quote! {
            FieldShape {
                name: #field_name,
                ty: <#ty as FieldType>::ty(),
                nullable: <#ty as FieldType>::NULLABLE,
                readable: true,
                writable: true,
            }
        }
    });

    let encode_fields = model.mapped().map(|field| {
        let field_ident = &field.ident;
        let ty = &field.ty;
        quote!(<#ty as FieldType>::to_value(&self.#field_ident))
    });

    let decode_fields = model.mapped().enumerate().map(|(index, field)| {
        let field_ident = &field.ident;
        let ty = &field.ty;
        quote!(#field_ident: <#ty as FieldType>::load(record.take(#index))?)
    });

    let default_fields = model.skipped().map(|field| {
        let field_ident = &field.ident;
        quote!(#field_ident: Default::default())
    });

    let write_arms = model.mapped().enumerate().map(|(index, field)| {
        let field_ident = &field.ident;
        let ty = &field.ty;
        quote!(#index => self.#field_ident = <#ty as FieldType>::load(value)?,)
    });

    let expected = model.mapped().count();

    quote! {
        const _: () = {
            use remap::codegen_support::*;

            impl Mappable for #ident {
                fn shape() -> TypeShape {
                    TypeShape {
                        id: ShapeId::of::<#ident>(),
                        name: #name,
                        fields: ::std::vec![#(#shape_fields),*],
                    }
                }

                fn to_value(&self) -> Value {
                    Value::record(::std::vec![#(#encode_fields),*])
                }

                fn load(value: Value) -> Result<Self> {
                    let mut record = value.into_record()?;
                    if record.len() != #expected {
                        return StdResult::Err(Error::type_conversion(
                            ::std::format!("record of {} members", record.len()),
                            #name,
                        ));
                    }
                    StdResult::Ok(Self {
                        #(#decode_fields,)*
                        #(#default_fields,)*
                    })
                }

                fn write_field(&mut self, index: usize, value: Value) -> Result<()> {
                    match index {
                        #(#write_arms)*
                        _ => {
                            return StdResult::Err(Error::type_conversion(
                                ::std::format!("member index {}", index),
                                #name,
                            ))
                        }
                    }
                    StdResult::Ok(())
                }
            }

            impl FieldType for #ident {
                fn ty() -> Type {
                    Type::Struct(ShapeRef::new::<#ident>(<#ident as Mappable>::shape))
                }

                fn to_value(&self) -> Value {
                    Mappable::to_value(self)
                }

                fn load(value: Value) -> Result<Self> {
                    Mappable::load(value)
                }
            }
        };
    }
}
