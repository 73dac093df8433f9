use super::*;

/// Conditional expression. The null-guard pass emits these to short-circuit
/// member access through absent intermediates.
#[derive(Debug, Clone)]
pub struct ExprCond {
    pub test: Box<Expr>,
    pub then_expr: Box<Expr>,
    pub else_expr: Box<Expr>,
}

impl Expr {
    pub fn cond(test: impl Into<Self>, then_expr: impl Into<Self>, else_expr: impl Into<Self>) -> Self {
        ExprCond {
            test: Box::new(test.into()),
            then_expr: Box::new(then_expr.into()),
            else_expr: Box::new(else_expr.into()),
        }
        .into()
    }
}

impl From<ExprCond> for Expr {
    fn from(value: ExprCond) -> Self {
        Self::Cond(value)
    }
}
