use super::*;

/// Build a target record: start from the schema defaults and assign every
/// bound member. Members no stage bound keep their default.
#[derive(Debug, Clone)]
pub struct ExprConstruct {
    /// Per-field default values, in shape order
    pub defaults: Vec<Value>,

    /// Members bound by the generator pipeline
    pub bindings: Vec<Binding>,
}

/// One bound target member: the fundamental unit every generator stage
/// produces. Each target member is bound by at most one stage.
#[derive(Debug, Clone)]
pub struct Binding {
    /// Position of the target member
    pub field: usize,

    /// Expression producing the member's value
    pub expr: Expr,
}

impl Binding {
    pub fn new(field: usize, expr: Expr) -> Self {
        Self { field, expr }
    }
}

impl Expr {
    pub fn construct(defaults: Vec<Value>, bindings: Vec<Binding>) -> Self {
        ExprConstruct { defaults, bindings }.into()
    }
}

impl From<ExprConstruct> for Expr {
    fn from(value: ExprConstruct) -> Self {
        Self::Construct(value)
    }
}
