use super::*;

/// Materialize a sequence into a concrete collection shape. Set shapes
/// deduplicate by value equality; every other shape preserves order.
#[derive(Debug, Clone)]
pub struct ExprCollect {
    /// Expression producing the sequence
    pub base: Box<Expr>,

    /// The collection shape to build
    pub kind: CollectionKind,
}

impl Expr {
    pub fn collect(base: impl Into<Self>, kind: CollectionKind) -> Self {
        ExprCollect {
            base: Box::new(base.into()),
            kind,
        }
        .into()
    }
}

impl From<ExprCollect> for Expr {
    fn from(value: ExprCollect) -> Self {
        Self::Collect(value)
    }
}
