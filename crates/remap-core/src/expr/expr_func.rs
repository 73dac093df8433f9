use super::*;
use crate::Result;

use std::fmt;
use std::sync::Arc;

/// An opaque pure function over a value. Carries user member rules and
/// custom construction rules; the engine never inspects its body, so its
/// result type is `Unknown` to inference.
pub type ValueFn = Arc<dyn Fn(Value) -> Result<Value> + Send + Sync>;

#[derive(Clone)]
pub struct ExprFunc {
    /// Expression producing the function's input
    pub input: Box<Expr>,

    /// The function body
    pub f: ValueFn,

    /// Diagnostic label (e.g. the rule's target member)
    pub label: String,
}

impl Expr {
    pub fn func(input: impl Into<Expr>, f: ValueFn, label: impl Into<String>) -> Self {
        ExprFunc {
            input: Box::new(input.into()),
            f,
            label: label.into(),
        }
        .into()
    }
}

impl From<ExprFunc> for Expr {
    fn from(value: ExprFunc) -> Self {
        Self::Func(value)
    }
}

impl fmt::Debug for ExprFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExprFunc")
            .field("input", &self.input)
            .field("f", &format_args!("<fn {}>", self.label))
            .finish()
    }
}
