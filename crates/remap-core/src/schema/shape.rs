use crate::expr::Type;

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Structural identity of a mappable type.
///
/// Two shapes are the same type exactly when their `TypeId`s are equal; the
/// name is carried for diagnostics only.
#[derive(Debug, Clone, Copy, Eq)]
pub struct ShapeId {
    type_id: TypeId,
    name: &'static str,
}

impl ShapeId {
    pub fn of<T: 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ShapeId {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Hash for ShapeId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

/// A reference to a shaped type: its identity plus a thunk producing the full
/// member description on demand. Carried inside [`Type`] so the plan compiler
/// can recurse into nested shapes without a global registry.
#[derive(Clone, Copy)]
pub struct ShapeRef {
    pub id: ShapeId,
    pub describe: fn() -> TypeShape,
}

impl ShapeRef {
    pub fn new<T: 'static>(describe: fn() -> TypeShape) -> Self {
        Self {
            id: ShapeId::of::<T>(),
            describe,
        }
    }

    pub fn shape(&self) -> TypeShape {
        (self.describe)()
    }
}

impl PartialEq for ShapeRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ShapeRef {}

impl fmt::Debug for ShapeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ShapeRef").field(&self.id.name()).finish()
    }
}

/// Derived, read-only view of a type: its ordered member descriptors.
#[derive(Debug, Clone)]
pub struct TypeShape {
    pub id: ShapeId,
    pub name: &'static str,
    pub fields: Vec<FieldShape>,
}

impl TypeShape {
    /// Position of the member with exactly the given name.
    pub fn field_named(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    pub fn field(&self, index: usize) -> &FieldShape {
        &self.fields[index]
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One member of a [`TypeShape`].
#[derive(Debug, Clone)]
pub struct FieldShape {
    /// The member name
    pub name: &'static str,

    /// The member's declared type
    pub ty: Type,

    /// True if the member can be absent (`None` in Rust).
    pub nullable: bool,

    /// True if the member can be read from a source instance.
    pub readable: bool,

    /// True if the member can be written on a target instance.
    pub writable: bool,
}

impl FieldShape {
    pub fn new(name: &'static str, ty: Type) -> Self {
        Self {
            name,
            ty,
            nullable: false,
            readable: true,
            writable: true,
        }
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn is_scalar(&self) -> bool {
        self.ty.is_scalar()
    }
}
