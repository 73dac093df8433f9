use super::FieldType;

use remap_core::expr::{CollectionKind, Type, Value};
use remap_core::{Error, Result};

use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};
use std::hash::Hash;

impl<T: FieldType> FieldType for Option<T> {
    const NULLABLE: bool = true;

    fn ty() -> Type {
        T::ty()
    }

    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            other => Ok(Some(T::load(other)?)),
        }
    }
}

fn load_items<T: FieldType>(value: Value) -> Result<impl Iterator<Item = Result<T>>> {
    match value {
        Value::List(items) => Ok(items.into_iter().map(T::load)),
        other => Err(Error::type_conversion(format!("{other:?}"), "sequence")),
    }
}

macro_rules! impl_sequence_field {
    ( $( $ty:ident $( + $bound:ident )* => $kind:ident ),* $(,)? ) => {
        $(
            impl<T: FieldType $( + $bound )*> FieldType for $ty<T> {
                fn ty() -> Type {
                    Type::sequence(CollectionKind::$kind, T::ty())
                }

                fn to_value(&self) -> Value {
                    Value::List(self.iter().map(T::to_value).collect())
                }

                fn load(value: Value) -> Result<Self> {
                    load_items::<T>(value)?.collect()
                }
            }
        )*
    };
}

impl_sequence_field!(
    Vec => Vec,
    HashSet + Eq + Hash => Set,
    BTreeSet + Ord => OrderedSet,
    LinkedList => LinkedList,
    VecDeque => Deque,
);

impl<T: FieldType> FieldType for Box<[T]> {
    fn ty() -> Type {
        Type::sequence(CollectionKind::Boxed, T::ty())
    }

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(T::to_value).collect())
    }

    fn load(value: Value) -> Result<Self> {
        Ok(load_items::<T>(value)?.collect::<Result<Vec<T>>>()?.into())
    }
}
