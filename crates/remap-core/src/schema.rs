mod shape;
pub use shape::{FieldShape, ShapeId, ShapeRef, TypeShape};
