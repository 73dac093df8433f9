mod field;
pub(crate) use field::Field;

mod model;
pub(crate) use model::{EnumModel, Model};
