use remap_core::expr::Value;
use remap_core::schema::{ShapeRef, TypeShape};
use remap_core::Result;

/// A type the engine can map to and from: it can describe its members,
/// encode an instance as a record value, decode one back, and overwrite a
/// single member in place.
///
/// Implemented with `#[derive(Mappable)]`; the matching and generation logic
/// operates purely on the resulting [`TypeShape`], never on the Rust type
/// itself.
pub trait Mappable: Sized + 'static {
    /// Member descriptions, in declaration order. Record field positions
    /// follow this order exactly.
    fn shape() -> TypeShape;

    /// Encode the instance as a record value.
    fn to_value(&self) -> Value;

    /// Decode an instance from a record value.
    fn load(value: Value) -> Result<Self>;

    /// Overwrite the member at `index` from a value, leaving every other
    /// member untouched.
    fn write_field(&mut self, index: usize, value: Value) -> Result<()>;
}

pub(crate) fn shape_ref<T: Mappable>() -> ShapeRef {
    ShapeRef::new::<T>(T::shape)
}
