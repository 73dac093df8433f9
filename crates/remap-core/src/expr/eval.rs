use super::{CollectionKind, Expr, Value};
use crate::{Error, Result};

impl Expr {
    /// Interpret the expression against the given source root. The same tree
    /// can instead be folded once into a reusable closure with
    /// [`Expr::compile_fn`]; both forms produce identical results.
    pub fn eval(&self, input: &Value) -> Result<Value> {
        match self {
            Expr::Arg(expr_arg) => {
                if expr_arg.position != 0 {
                    crate::bail!("unresolved plan input {}", expr_arg.position);
                }
                Ok(input.clone())
            }
            Expr::Value(value) => Ok(value.clone()),
            Expr::Project(expr_project) => {
                let mut value = expr_project.base.eval(input)?;
                for step in expr_project.projection.iter() {
                    value = match value {
                        Value::Record(mut record) => record.take(step),
                        Value::Null => {
                            return Err(Error::null_traversal(format!("member {step}")))
                        }
                        other => {
                            crate::bail!("cannot project member {step} out of {}", other.kind_name())
                        }
                    };
                }
                Ok(value)
            }
            Expr::Cast(expr_cast) => expr_cast.ty.cast(expr_cast.expr.eval(input)?),
            Expr::Func(expr_func) => (*expr_func.f)(expr_func.input.eval(input)?),
            Expr::Construct(expr_construct) => {
                let mut fields = expr_construct.defaults.clone();
                for binding in &expr_construct.bindings {
                    fields[binding.field] = binding.expr.eval(input)?;
                }
                Ok(Value::record(fields))
            }
            Expr::Map(expr_map) => match expr_map.base.eval(input)? {
                Value::List(items) => items
                    .into_iter()
                    .map(|item| expr_map.each.eval(&item))
                    .collect::<Result<Vec<_>>>()
                    .map(Value::List),
                Value::Null => Err(Error::null_traversal("sequence")),
                other => Err(crate::err!("cannot map over {}", other.kind_name())),
            },
            Expr::Collect(expr_collect) => {
                let items = expr_collect.base.eval(input)?.into_list()?;
                Ok(Value::List(collect_items(items, expr_collect.kind)))
            }
            Expr::IsNull(expr_is_null) => {
                Ok(Value::Bool(expr_is_null.expr.eval(input)?.is_null()))
            }
            Expr::Cond(expr_cond) => match expr_cond.test.eval(input)? {
                Value::Bool(true) => expr_cond.then_expr.eval(input),
                Value::Bool(false) => expr_cond.else_expr.eval(input),
                other => Err(crate::err!("condition evaluated to {}", other.kind_name())),
            },
        }
    }
}

pub(super) fn collect_items(items: Vec<Value>, kind: CollectionKind) -> Vec<Value> {
    match kind {
        CollectionKind::Set | CollectionKind::OrderedSet => {
            let mut out: Vec<Value> = Vec::with_capacity(items.len());
            for item in items {
                if !out.contains(&item) {
                    out.push(item);
                }
            }
            out
        }
        _ => items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{Binding, Type};

    #[test]
    fn project_out_of_record() {
        let source = Value::record(vec![Value::I32(7), Value::String("x".into())]);
        let expr = Expr::project(Expr::arg(0), 1);
        assert_eq!(expr.eval(&source).unwrap(), Value::String("x".into()));
    }

    #[test]
    fn project_through_null_raises() {
        let source = Value::record(vec![Value::Null]);
        let expr = Expr::project(Expr::project(Expr::arg(0), 0), 1);
        let err = expr.eval(&source).unwrap_err();
        assert!(err.is_null_traversal());
    }

    #[test]
    fn construct_applies_defaults_then_bindings() {
        let source = Value::record(vec![Value::I32(5)]);
        let expr = Expr::construct(
            vec![Value::I64(0), Value::String(String::new())],
            vec![Binding::new(0, Expr::cast(Expr::project(Expr::arg(0), 0), Type::I64))],
        );
        let out = expr.eval(&source).unwrap().into_record().unwrap();
        assert_eq!(out[0], Value::I64(5));
        assert_eq!(out[1], Value::String(String::new()));
    }

    #[test]
    fn map_rebinds_arg_to_each_item() {
        let source = Value::record(vec![Value::list(vec![Value::I32(1), Value::I32(2)])]);
        let expr = Expr::map(
            Expr::project(Expr::arg(0), 0),
            Expr::cast(Expr::arg(0), Type::I64),
        );
        assert_eq!(
            expr.eval(&source).unwrap(),
            Value::list(vec![Value::I64(1), Value::I64(2)])
        );
    }

    #[test]
    fn collect_set_deduplicates() {
        let items = vec![Value::I32(1), Value::I32(1), Value::I32(2)];
        assert_eq!(
            collect_items(items, CollectionKind::Set),
            vec![Value::I32(1), Value::I32(2)]
        );
    }
}
