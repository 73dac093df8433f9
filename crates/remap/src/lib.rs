mod codec;
pub use codec::FieldType;

mod from;
pub use from::CopyFrom;

mod iter;
pub use iter::{MapSequence, Mapped, SequenceCopy};

mod mappable;
pub use mappable::Mappable;

mod mapper;
pub use mapper::Mapper;

mod projection;
pub use projection::MappingExpr;

mod rules;
pub use rules::Rules;

pub use remap_core::matcher::NameRule;
pub use remap_core::{Error, Result};

pub use remap_macros::Mappable;

use std::sync::OnceLock;

/// The process-wide default mapper backing [`from`], [`scalars_from`] and
/// [`rules`]. Lazily initialized, append-only for the process lifetime.
/// Fully isolated from any [`Mapper`] instances created directly.
pub fn mapper() -> &'static Mapper {
    static DEFAULT_MAPPER: OnceLock<Mapper> = OnceLock::new();
    DEFAULT_MAPPER.get_or_init(Mapper::new)
}

/// Start a copy from the given source using the default mapper.
pub fn from<S: Mappable>(source: &S) -> CopyFrom<'_, S> {
    mapper().from(source)
}

/// As [`from`], but mapping only scalar source members.
pub fn scalars_from<S: Mappable>(source: &S) -> CopyFrom<'_, S> {
    mapper().scalars_from(source)
}

/// Register rules on the default mapper.
pub fn rules<S: FieldType, T: FieldType>() -> Rules<'static, S, T> {
    mapper().rules()
}

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::codec::FieldType;
    pub use crate::mappable::Mappable;
    pub use remap_core::expr::{EnumShape, Type, Value, ValueEnum};
    pub use remap_core::schema::{FieldShape, ShapeId, ShapeRef, TypeShape};
    pub use remap_core::{Error, Result};
    pub use std::{default::Default, option::Option, result::Result as StdResult, vec::Vec};
}
