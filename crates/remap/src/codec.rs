mod container;
mod primitive;

use remap_core::expr::{Type, Value};
use remap_core::Result;

/// A type that can appear as a member of a mappable type: it knows its
/// schema-level [`Type`] and converts to and from [`Value`].
///
/// Implemented here for the scalars, strings, the supported collection
/// shapes and `Option` (which marks the member nullable); `#[derive(
/// Mappable)]` emits an implementation for every derived struct and C-like
/// enum.
pub trait FieldType: Sized + 'static {
    /// Whether the member can be absent. `Option<T>` is the only carrier.
    const NULLABLE: bool = false;

    fn ty() -> Type;

    fn to_value(&self) -> Value;

    fn load(value: Value) -> Result<Self>;
}
