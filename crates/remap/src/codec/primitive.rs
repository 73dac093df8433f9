use super::FieldType;

use remap_core::expr::{Type, Value};
use remap_core::{Error, Result};

macro_rules! impl_scalar_field {
    ( $( $ty:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl FieldType for $ty {
                fn ty() -> Type {
                    Type::$variant
                }

                fn to_value(&self) -> Value {
                    Value::$variant(self.clone())
                }

                fn load(value: Value) -> Result<Self> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        other => Err(Error::type_conversion(
                            format!("{other:?}"),
                            stringify!($ty),
                        )),
                    }
                }
            }
        )*
    };
}

impl_scalar_field!(
    bool => Bool,
    char => Char,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
);

impl FieldType for String {
    fn ty() -> Type {
        Type::String
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            other => Err(Error::type_conversion(format!("{other:?}"), "String")),
        }
    }
}
