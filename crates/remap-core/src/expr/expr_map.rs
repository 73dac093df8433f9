use super::*;

/// Apply an expression to each item of a sequence.
#[derive(Debug, Clone)]
pub struct ExprMap {
    /// Expression producing the sequence
    pub base: Box<Expr>,

    /// Per-item expression; sees the item as arg 0
    pub each: Box<Expr>,
}

impl Expr {
    pub fn map(base: impl Into<Self>, each: impl Into<Self>) -> Self {
        ExprMap {
            base: Box::new(base.into()),
            each: Box::new(each.into()),
        }
        .into()
    }
}

impl From<ExprMap> for Expr {
    fn from(value: ExprMap) -> Self {
        Self::Map(value)
    }
}
