mod assignments;
pub use assignments::Assignments;

mod compile;
pub use compile::CompiledFn;

mod eval;

mod expr_arg;
pub use expr_arg::ExprArg;

mod expr_cast;
pub use expr_cast::ExprCast;

mod expr_collect;
pub use expr_collect::ExprCollect;

mod expr_cond;
pub use expr_cond::ExprCond;

mod expr_construct;
pub use expr_construct::{Binding, ExprConstruct};

mod expr_func;
pub use expr_func::{ExprFunc, ValueFn};

mod expr_is_null;
pub use expr_is_null::ExprIsNull;

mod expr_map;
pub use expr_map::ExprMap;

mod expr_project;
pub use expr_project::ExprProject;

mod infer;
pub use infer::Inferred;

mod projection;
pub use projection::Projection;

mod ty;
pub use ty::{CollectionKind, EnumShape, Type};

mod value;
pub use value::{Value, ValueEnum};

mod value_record;
pub use value_record::ValueRecord;

use crate::Result;

use std::fmt;

/// A declarative transformation expression.
///
/// One plan is a tree of these; the same tree backs both the interpreted
/// (query-composable) form and the closure-compiled executable form.
#[derive(Clone)]
pub enum Expr {
    /// Positional plan input. Position 0 is the source root.
    Arg(ExprArg),

    /// Convert a value to a compatible type
    Cast(ExprCast),

    /// Materialize a sequence into a concrete collection shape
    Collect(ExprCollect),

    /// Conditional expression, produced by the null-guard pass
    Cond(ExprCond),

    /// Build a target record, assigning bound members over schema defaults
    Construct(ExprConstruct),

    /// Apply an opaque pure function to the result of an inner expression
    Func(ExprFunc),

    /// Whether an expression evaluates to an absent value
    IsNull(ExprIsNull),

    /// Apply an expression to each item of a sequence
    Map(ExprMap),

    /// Member access by index path
    Project(ExprProject),

    /// Evaluates to a constant value
    Value(Value),
}

impl Expr {
    pub fn null() -> Self {
        Self::Value(Value::Null)
    }

    /// Returns true if the expression is a constant value.
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(..))
    }

    pub fn is_arg(&self) -> bool {
        matches!(self, Self::Arg(_))
    }

    pub fn into_value(self) -> Result<Value> {
        match self {
            Self::Value(value) => Ok(value),
            _ => Err(crate::err!("expression is not a constant value")),
        }
    }

    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::Value(Value::Null))
    }
}

impl Default for Expr {
    fn default() -> Self {
        Self::Value(Value::default())
    }
}

// === Conversions ===

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::Value(value.into())
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Value(value.into())
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arg(e) => e.fmt(f),
            Self::Cast(e) => e.fmt(f),
            Self::Collect(e) => e.fmt(f),
            Self::Cond(e) => e.fmt(f),
            Self::Construct(e) => e.fmt(f),
            Self::Func(e) => e.fmt(f),
            Self::IsNull(e) => e.fmt(f),
            Self::Map(e) => e.fmt(f),
            Self::Project(e) => e.fmt(f),
            Self::Value(e) => e.fmt(f),
        }
    }
}
