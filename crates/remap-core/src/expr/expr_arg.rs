use super::Expr;

/// A positional plan input. Construction and update plans take the source
/// root at position 0; `Map` rebinds position 0 to the current element.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct ExprArg {
    pub position: usize,
}

impl Expr {
    pub fn arg(position: usize) -> Self {
        Self::Arg(ExprArg { position })
    }
}

impl ExprArg {
    pub fn new(position: usize) -> Self {
        Self { position }
    }
}

impl From<usize> for ExprArg {
    fn from(position: usize) -> Self {
        Self { position }
    }
}

impl From<ExprArg> for Expr {
    fn from(value: ExprArg) -> Self {
        Self::Arg(value)
    }
}
