mod error;
pub use error::Error;

pub mod compiler;
pub use compiler::Planner;

pub mod expr;

pub mod generate;

pub mod matcher;

pub mod rules;
pub use rules::{MappingKey, RuleSet, RuleSource};

pub mod schema;
pub use schema::TypeShape;

/// A Result type alias that uses remap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
