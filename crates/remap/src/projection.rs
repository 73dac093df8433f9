use crate::mappable::Mappable;

use remap_core::expr::Expr;
use remap_core::Result;

use std::marker::PhantomData;
use std::sync::Arc;

/// The declarative construction expression for one pair, detached from the
/// mapper so it can be composed into a larger evaluation pipeline (for
/// example as the per-element projection of a sequence handled by another
/// engine). Never contains after-copy actions.
pub struct MappingExpr<S, T> {
    expr: Arc<Expr>,
    _pair: PhantomData<fn(&S) -> T>,
}

impl<S: Mappable, T: Mappable> MappingExpr<S, T> {
    pub(crate) fn new(expr: Arc<Expr>) -> Self {
        Self {
            expr,
            _pair: PhantomData,
        }
    }

    /// The underlying plan expression.
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Interpret the expression against one source instance, without
    /// touching the compiled executable form.
    pub fn eval(&self, source: &S) -> Result<T> {
        T::load(self.expr.eval(&source.to_value())?)
    }
}

impl<S, T> Clone for MappingExpr<S, T> {
    fn clone(&self) -> Self {
        Self {
            expr: self.expr.clone(),
            _pair: PhantomData,
        }
    }
}
