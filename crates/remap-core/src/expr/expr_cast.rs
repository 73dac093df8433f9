use super::*;

/// Convert an inner expression's value to a compatible type.
#[derive(Debug, Clone)]
pub struct ExprCast {
    /// Expression to convert
    pub expr: Box<Expr>,

    /// Type to convert to
    pub ty: Type,
}

impl Expr {
    pub fn cast(expr: impl Into<Self>, ty: impl Into<Type>) -> Self {
        ExprCast {
            expr: Box::new(expr.into()),
            ty: ty.into(),
        }
        .into()
    }

    pub fn is_cast(&self) -> bool {
        matches!(self, Self::Cast(_))
    }
}

impl From<ExprCast> for Expr {
    fn from(value: ExprCast) -> Self {
        Self::Cast(value)
    }
}

impl From<&Type> for Type {
    fn from(value: &Type) -> Self {
        value.clone()
    }
}
