use super::eval::collect_items;
use super::{Expr, Value};
use crate::{Error, Result};

use std::sync::Arc;

/// The executable form of a plan expression: the tree folded once into a
/// closure so repeated invocations pay no tree walk. Shareable across
/// threads and cached per mapping pair.
pub type CompiledFn = Arc<dyn Fn(&Value) -> Result<Value> + Send + Sync>;

/// Node-level closures; boxed so the parent closure can own its children.
type Node = Box<dyn Fn(&Value) -> Result<Value> + Send + Sync>;

impl Expr {
    /// Fold the expression into its executable form. Derived from the
    /// declarative tree; semantics match [`Expr::eval`] exactly.
    pub fn compile_fn(&self) -> CompiledFn {
        Arc::from(compile(self))
    }
}

fn compile(expr: &Expr) -> Node {
    match expr {
        Expr::Arg(expr_arg) => {
            let position = expr_arg.position;
            Box::new(move |input| {
                if position != 0 {
                    crate::bail!("unresolved plan input {position}");
                }
                Ok(input.clone())
            })
        }
        Expr::Value(value) => {
            let value = value.clone();
            Box::new(move |_| Ok(value.clone()))
        }
        Expr::Project(expr_project) => {
            let base = compile(&expr_project.base);
            let steps: Vec<usize> = expr_project.projection.iter().collect();
            Box::new(move |input| {
                let mut value = base(input)?;
                for &step in &steps {
                    value = match value {
                        Value::Record(mut record) => record.take(step),
                        Value::Null => {
                            return Err(Error::null_traversal(format!("member {step}")))
                        }
                        other => crate::bail!(
                            "cannot project member {step} out of {}",
                            other.kind_name()
                        ),
                    };
                }
                Ok(value)
            })
        }
        Expr::Cast(expr_cast) => {
            let inner = compile(&expr_cast.expr);
            let ty = expr_cast.ty.clone();
            Box::new(move |input| ty.cast(inner(input)?))
        }
        Expr::Func(expr_func) => {
            let inner = compile(&expr_func.input);
            let f = expr_func.f.clone();
            Box::new(move |input| (*f)(inner(input)?))
        }
        Expr::Construct(expr_construct) => {
            let defaults = expr_construct.defaults.clone();
            let bindings: Vec<(usize, Node)> = expr_construct
                .bindings
                .iter()
                .map(|binding| (binding.field, compile(&binding.expr)))
                .collect();
            Box::new(move |input| {
                let mut fields = defaults.clone();
                for (field, expr) in &bindings {
                    fields[*field] = expr(input)?;
                }
                Ok(Value::record(fields))
            })
        }
        Expr::Map(expr_map) => {
            let base = compile(&expr_map.base);
            let each = compile(&expr_map.each);
            Box::new(move |input| match base(input)? {
                Value::List(items) => items
                    .into_iter()
                    .map(|item| each(&item))
                    .collect::<Result<Vec<_>>>()
                    .map(Value::List),
                Value::Null => Err(Error::null_traversal("sequence")),
                other => crate::bail!("cannot map over {}", other.kind_name()),
            })
        }
        Expr::Collect(expr_collect) => {
            let base = compile(&expr_collect.base);
            let kind = expr_collect.kind;
            Box::new(move |input| {
                let items = base(input)?.into_list()?;
                Ok(Value::List(collect_items(items, kind)))
            })
        }
        Expr::IsNull(expr_is_null) => {
            let inner = compile(&expr_is_null.expr);
            Box::new(move |input| Ok(Value::Bool(inner(input)?.is_null())))
        }
        Expr::Cond(expr_cond) => {
            let test = compile(&expr_cond.test);
            let then_expr = compile(&expr_cond.then_expr);
            let else_expr = compile(&expr_cond.else_expr);
            Box::new(move |input| match test(input)? {
                Value::Bool(true) => then_expr(input),
                Value::Bool(false) => else_expr(input),
                other => crate::bail!("condition evaluated to {}", other.kind_name()),
            })
        }
    }
}
