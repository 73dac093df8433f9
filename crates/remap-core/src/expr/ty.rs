use super::{Value, ValueEnum};
use crate::schema::{ShapeId, ShapeRef};
use crate::{Error, Result};

/// Schema-level type of a member.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Character value
    Char,

    /// String type
    String,

    /// Signed integers
    I8,
    I16,
    I32,
    I64,

    /// Unsigned integers
    U8,
    U16,
    U32,
    U64,

    /// Floating point
    F32,
    F64,

    /// A C-like enumerated type
    Enum(EnumShape),

    /// A nested shaped type
    Struct(ShapeRef),

    /// A collection of a single item type
    Sequence(CollectionKind, Box<Type>),

    /// A type that could not be inferred (e.g. an opaque function result)
    Unknown,
}

/// Identity of a C-like enum plus its first declared discriminant, used as
/// the guard default.
#[derive(Debug, Clone, Copy)]
pub struct EnumShape {
    pub id: ShapeId,
    pub first: i64,
}

impl PartialEq for EnumShape {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for EnumShape {}

/// The concrete collection shapes a sequence member can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    /// The plain growable sequence (`Vec`)
    Vec,

    /// Hash set; unordered, deduplicated
    Set,

    /// Ordered set (`BTreeSet`)
    OrderedSet,

    /// Doubly linked list
    LinkedList,

    /// Double-ended queue (`VecDeque`)
    Deque,

    /// Frozen sequence (`Box<[T]>`)
    Boxed,
}

impl Type {
    pub fn sequence(kind: CollectionKind, item: impl Into<Self>) -> Self {
        Self::Sequence(kind, Box::new(item.into()))
    }

    /// Value types and strings, as opposed to nested objects and collections.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Self::Struct(_) | Self::Sequence(..) | Self::Unknown)
    }

    pub fn is_struct(&self) -> bool {
        matches!(self, Self::Struct(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(..))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::U8 | Self::U16 | Self::U32 | Self::U64
        )
    }

    /// The shape identity backing this type, when one exists. Sequences have
    /// no standalone identity.
    pub fn shape_id(&self) -> Option<ShapeId> {
        Some(match self {
            Self::Bool => ShapeId::of::<bool>(),
            Self::Char => ShapeId::of::<char>(),
            Self::String => ShapeId::of::<String>(),
            Self::I8 => ShapeId::of::<i8>(),
            Self::I16 => ShapeId::of::<i16>(),
            Self::I32 => ShapeId::of::<i32>(),
            Self::I64 => ShapeId::of::<i64>(),
            Self::U8 => ShapeId::of::<u8>(),
            Self::U16 => ShapeId::of::<u16>(),
            Self::U32 => ShapeId::of::<u32>(),
            Self::U64 => ShapeId::of::<u64>(),
            Self::F32 => ShapeId::of::<f32>(),
            Self::F64 => ShapeId::of::<f64>(),
            Self::Enum(shape) => shape.id,
            Self::Struct(shape) => shape.id,
            Self::Sequence(..) | Self::Unknown => return None,
        })
    }

    /// The zero value a target member takes when no stage binds it.
    pub fn default_value(&self) -> Value {
        match self {
            Self::Bool => Value::Bool(false),
            Self::Char => Value::Char('\0'),
            Self::String => Value::String(String::new()),
            Self::I8 => Value::I8(0),
            Self::I16 => Value::I16(0),
            Self::I32 => Value::I32(0),
            Self::I64 => Value::I64(0),
            Self::U8 => Value::U8(0),
            Self::U16 => Value::U16(0),
            Self::U32 => Value::U32(0),
            Self::U64 => Value::U64(0),
            Self::F32 => Value::F32(0.0),
            Self::F64 => Value::F64(0.0),
            Self::Enum(shape) => Value::Enum(ValueEnum::new(shape.first)),
            Self::Struct(shape) => {
                let shape = shape.shape();
                Value::record(
                    shape
                        .fields
                        .iter()
                        .map(|field| {
                            if field.nullable {
                                Value::Null
                            } else {
                                field.ty.default_value()
                            }
                        })
                        .collect(),
                )
            }
            Self::Sequence(..) => Value::List(vec![]),
            Self::Unknown => Value::Null,
        }
    }

    /// Convert a value to this type. Only the conversions the matcher admits
    /// are supported: identity, numeric widening, enum <-> integer. Absent
    /// values pass through.
    pub fn cast(&self, value: Value) -> Result<Value> {
        if value.is_null() {
            return Ok(Value::Null);
        }

        if let Self::Enum(_) = self {
            return match value {
                value @ Value::Enum(_) => Ok(value),
                other => match as_i64(&other) {
                    Some(variant) => Ok(Value::Enum(ValueEnum::new(variant))),
                    None => Err(conversion(&other, self)),
                },
            };
        }

        if let Value::Enum(value_enum) = value {
            return self.cast(Value::I64(value_enum.variant));
        }

        match self {
            Self::I8 => cast_integer(value, self, |v| i8::try_from(v).ok().map(Value::I8)),
            Self::I16 => cast_integer(value, self, |v| i16::try_from(v).ok().map(Value::I16)),
            Self::I32 => cast_integer(value, self, |v| i32::try_from(v).ok().map(Value::I32)),
            Self::I64 => cast_integer(value, self, |v| i64::try_from(v).ok().map(Value::I64)),
            Self::U8 => cast_integer(value, self, |v| u8::try_from(v).ok().map(Value::U8)),
            Self::U16 => cast_integer(value, self, |v| u16::try_from(v).ok().map(Value::U16)),
            Self::U32 => cast_integer(value, self, |v| u32::try_from(v).ok().map(Value::U32)),
            Self::U64 => cast_integer(value, self, |v| u64::try_from(v).ok().map(Value::U64)),
            Self::F32 => match as_f64(&value) {
                Some(v) => Ok(Value::F32(v as f32)),
                None => Err(conversion(&value, self)),
            },
            Self::F64 => match as_f64(&value) {
                Some(v) => Ok(Value::F64(v)),
                None => Err(conversion(&value, self)),
            },
            Self::Bool => match value {
                value @ Value::Bool(_) => Ok(value),
                other => Err(conversion(&other, self)),
            },
            Self::Char => match value {
                value @ Value::Char(_) => Ok(value),
                other => Err(conversion(&other, self)),
            },
            Self::String => match value {
                value @ Value::String(_) => Ok(value),
                other => Err(conversion(&other, self)),
            },
            Self::Struct(_) | Self::Sequence(..) | Self::Unknown => match value {
                value @ (Value::Record(_) | Value::List(_)) => Ok(value),
                other => Err(conversion(&other, self)),
            },
            Self::Enum(_) => unreachable!(),
        }
    }
}

fn cast_integer(
    value: Value,
    target: &Type,
    convert: impl FnOnce(i128) -> Option<Value>,
) -> Result<Value> {
    match as_i128(&value).and_then(convert) {
        Some(value) => Ok(value),
        None => Err(conversion(&value, target)),
    }
}

fn as_i128(value: &Value) -> Option<i128> {
    Some(match *value {
        Value::I8(v) => v as i128,
        Value::I16(v) => v as i128,
        Value::I32(v) => v as i128,
        Value::I64(v) => v as i128,
        Value::U8(v) => v as i128,
        Value::U16(v) => v as i128,
        Value::U32(v) => v as i128,
        Value::U64(v) => v as i128,
        Value::Char(v) => v as i128,
        _ => return None,
    })
}

fn as_i64(value: &Value) -> Option<i64> {
    as_i128(value).and_then(|v| i64::try_from(v).ok())
}

fn as_f64(value: &Value) -> Option<f64> {
    Some(match *value {
        Value::F32(v) => v as f64,
        Value::F64(v) => v,
        _ => as_i128(value)? as f64,
    })
}

fn conversion(value: &Value, target: &Type) -> Error {
    Error::type_conversion(format!("{value:?}"), format!("{target:?}"))
}
