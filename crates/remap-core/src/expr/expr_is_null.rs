use super::*;

/// Whether an expression evaluates to an absent value.
#[derive(Debug, Clone)]
pub struct ExprIsNull {
    pub expr: Box<Expr>,
}

impl Expr {
    pub fn is_null(expr: impl Into<Self>) -> Self {
        ExprIsNull {
            expr: Box::new(expr.into()),
        }
        .into()
    }
}

impl From<ExprIsNull> for Expr {
    fn from(value: ExprIsNull) -> Self {
        Self::IsNull(value)
    }
}
