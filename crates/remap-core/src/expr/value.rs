use super::*;
use crate::{Error, Result};

/// Runtime representation of a mappable instance or member.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Character value
    Char(char),

    /// Value of a C-like enumerated type
    Enum(ValueEnum),

    /// Signed integers
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),

    /// Unsigned integers
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),

    /// Floating point
    F32(f32),
    F64(f64),

    /// Absent value (`None`)
    #[default]
    Null,

    /// A record of member values, in shape order
    Record(ValueRecord),

    /// A sequence of values of the same type
    List(Vec<Value>),

    /// String value
    String(String),
}

/// Discriminant of a C-like enum value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueEnum {
    pub variant: i64,
}

impl ValueEnum {
    pub fn new(variant: i64) -> Self {
        Self { variant }
    }
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn record(fields: Vec<Self>) -> Self {
        Self::Record(ValueRecord::from_vec(fields))
    }

    pub fn list(items: Vec<Self>) -> Self {
        Self::List(items)
    }

    pub fn as_record(&self) -> Option<&ValueRecord> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn into_record(self) -> Result<ValueRecord> {
        match self {
            Self::Record(record) => Ok(record),
            other => Err(Error::type_conversion(format!("{other:?}"), "record")),
        }
    }

    pub fn into_list(self) -> Result<Vec<Value>> {
        match self {
            Self::List(items) => Ok(items),
            other => Err(Error::type_conversion(format!("{other:?}"), "list")),
        }
    }

    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Short name of the value's shape, for diagnostics.
    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Char(_) => "char",
            Self::Enum(_) => "enum",
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::U32(_) => "u32",
            Self::U64(_) => "u64",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::Null => "null",
            Self::Record(_) => "record",
            Self::List(_) => "list",
            Self::String(_) => "string",
        }
    }
}

macro_rules! impl_from_scalar {
    ( $( $variant:ident($ty:ty) ),* $(,)? ) => {
        $(
            impl From<$ty> for Value {
                fn from(src: $ty) -> Self {
                    Self::$variant(src)
                }
            }
        )*
    };
}

impl_from_scalar!(
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    String(String),
);

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<ValueRecord> for Value {
    fn from(record: ValueRecord) -> Self {
        Self::Record(record)
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}
