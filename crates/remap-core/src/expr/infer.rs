use super::{Expr, Type, Value};
use crate::{Error, Result};

/// The inferred type of a plan expression, plus whether it can evaluate to
/// an absent value. Nullability tracks the final member only; reaching
/// through an absent intermediate is a runtime concern, not a type-level one.
#[derive(Debug, Clone)]
pub struct Inferred {
    pub ty: Type,
    pub nullable: bool,
}

impl Inferred {
    pub fn new(ty: Type, nullable: bool) -> Self {
        Self { ty, nullable }
    }

    /// The value an absent result defaults to under null-guarding.
    pub fn default_value(&self) -> Value {
        if self.nullable {
            Value::Null
        } else {
            self.ty.default_value()
        }
    }
}

impl Expr {
    /// Infer the expression's type given what arg 0 denotes. Opaque function
    /// results are `Unknown` and exempt from configuration-time checking.
    pub fn infer(&self, scope: &Inferred) -> Result<Inferred> {
        match self {
            Expr::Arg(expr_arg) => {
                if expr_arg.position != 0 {
                    return Err(Error::config(format!(
                        "unresolved plan input {}",
                        expr_arg.position
                    )));
                }
                Ok(scope.clone())
            }
            Expr::Value(value) => Ok(value_ty(value)),
            Expr::Project(expr_project) => {
                let mut inferred = expr_project.base.infer(scope)?;
                for step in expr_project.projection.iter() {
                    inferred = match &inferred.ty {
                        Type::Struct(shape_ref) => {
                            let shape = shape_ref.shape();
                            let field = shape.fields.get(step).ok_or_else(|| {
                                Error::config(format!(
                                    "`{}` has no member at position {step}",
                                    shape.name
                                ))
                            })?;
                            Inferred::new(field.ty.clone(), field.nullable)
                        }
                        Type::Unknown => Inferred::new(Type::Unknown, false),
                        other => {
                            return Err(Error::config(format!(
                                "cannot project a member out of {other:?}"
                            )))
                        }
                    };
                }
                Ok(inferred)
            }
            Expr::Cast(expr_cast) => {
                let inner = expr_cast.expr.infer(scope)?;
                Ok(Inferred::new(expr_cast.ty.clone(), inner.nullable))
            }
            Expr::Func(expr_func) => {
                expr_func.input.infer(scope)?;
                Ok(Inferred::new(Type::Unknown, false))
            }
            Expr::Construct(_) => Ok(Inferred::new(Type::Unknown, false)),
            Expr::Map(expr_map) => {
                let base = expr_map.base.infer(scope)?;
                let (kind, item) = match &base.ty {
                    Type::Sequence(kind, item) => (*kind, (**item).clone()),
                    Type::Unknown => return Ok(Inferred::new(Type::Unknown, base.nullable)),
                    other => {
                        return Err(Error::config(format!("cannot map over {other:?}")))
                    }
                };
                let each = expr_map.each.infer(&Inferred::new(item, false))?;
                Ok(Inferred::new(Type::sequence(kind, each.ty), base.nullable))
            }
            Expr::Collect(expr_collect) => {
                let base = expr_collect.base.infer(scope)?;
                let item = match &base.ty {
                    Type::Sequence(_, item) => (**item).clone(),
                    _ => Type::Unknown,
                };
                Ok(Inferred::new(
                    Type::sequence(expr_collect.kind, item),
                    base.nullable,
                ))
            }
            Expr::IsNull(_) => Ok(Inferred::new(Type::Bool, false)),
            Expr::Cond(expr_cond) => {
                let then_inf = expr_cond.then_expr.infer(scope)?;
                let else_inf = expr_cond.else_expr.infer(scope)?;
                let ty = if matches!(else_inf.ty, Type::Unknown) {
                    then_inf.ty
                } else {
                    else_inf.ty
                };
                Ok(Inferred::new(ty, then_inf.nullable || else_inf.nullable))
            }
        }
    }
}

fn value_ty(value: &Value) -> Inferred {
    let ty = match value {
        Value::Bool(_) => Type::Bool,
        Value::Char(_) => Type::Char,
        Value::I8(_) => Type::I8,
        Value::I16(_) => Type::I16,
        Value::I32(_) => Type::I32,
        Value::I64(_) => Type::I64,
        Value::U8(_) => Type::U8,
        Value::U16(_) => Type::U16,
        Value::U32(_) => Type::U32,
        Value::U64(_) => Type::U64,
        Value::F32(_) => Type::F32,
        Value::F64(_) => Type::F64,
        Value::String(_) => Type::String,
        Value::Null => return Inferred::new(Type::Unknown, true),
        Value::Enum(_) | Value::Record(_) | Value::List(_) => Type::Unknown,
    };
    Inferred::new(ty, false)
}
