use crate::expr::{Expr, ExprConstruct, ExprProject, Inferred, Type, Value};
use crate::Result;

/// The null-guard post-pass: a purely structural rewrite over the plan that
/// short-circuits member access through absent intermediates to the member's
/// default value. Applied once at plan-build time.
pub(crate) fn apply(expr: &Expr, scope: &Inferred) -> Result<Expr> {
    Ok(match expr {
        Expr::Arg(_) | Expr::Value(_) => expr.clone(),
        Expr::Project(expr_project) => {
            let base_inferred = expr_project.base.infer(scope)?;
            let base = apply(&expr_project.base, scope)?;
            let projected: Expr = ExprProject {
                base: Box::new(base.clone()),
                projection: expr_project.projection.clone(),
            }
            .into();

            if base_inferred.nullable {
                let result = expr.infer(scope)?;
                Expr::cond(Expr::is_null(base), result.default_value(), projected)
            } else {
                projected
            }
        }
        Expr::Cast(expr_cast) => Expr::cast(
            apply(&expr_cast.expr, scope)?,
            expr_cast.ty.clone(),
        ),
        Expr::Func(expr_func) => Expr::func(
            apply(&expr_func.input, scope)?,
            expr_func.f.clone(),
            expr_func.label.clone(),
        ),
        Expr::Construct(expr_construct) => {
            let mut bindings = expr_construct.bindings.clone();
            for binding in &mut bindings {
                binding.expr = apply(&binding.expr, scope)?;
            }
            ExprConstruct {
                defaults: expr_construct.defaults.clone(),
                bindings,
            }
            .into()
        }
        Expr::Map(expr_map) => {
            let base_inferred = expr_map.base.infer(scope)?;
            let base = coalesce_sequence(apply(&expr_map.base, scope)?, &base_inferred);

            let item_scope = match &base_inferred.ty {
                Type::Sequence(_, item) => Inferred::new((**item).clone(), false),
                _ => Inferred::new(Type::Unknown, false),
            };
            let each = apply(&expr_map.each, &item_scope)?;

            Expr::map(base, each)
        }
        Expr::Collect(expr_collect) => {
            let base_inferred = expr_collect.base.infer(scope)?;
            let base = coalesce_sequence(apply(&expr_collect.base, scope)?, &base_inferred);
            Expr::collect(base, expr_collect.kind)
        }
        Expr::IsNull(expr_is_null) => Expr::is_null(apply(&expr_is_null.expr, scope)?),
        Expr::Cond(expr_cond) => Expr::cond(
            apply(&expr_cond.test, scope)?,
            apply(&expr_cond.then_expr, scope)?,
            apply(&expr_cond.else_expr, scope)?,
        ),
    })
}

/// An absent sequence guards to the empty sequence.
fn coalesce_sequence(base: Expr, inferred: &Inferred) -> Expr {
    if inferred.nullable {
        Expr::cond(Expr::is_null(base.clone()), Value::List(vec![]), base)
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::Binding;
    use crate::schema::{FieldShape, ShapeId, ShapeRef, TypeShape};

    struct Source;
    struct Child;

    fn child_shape() -> TypeShape {
        TypeShape {
            id: ShapeId::of::<Child>(),
            name: "Child",
            fields: vec![
                FieldShape::new("id", Type::I32),
                FieldShape::new("name", Type::String),
            ],
        }
    }

    fn source_shape() -> TypeShape {
        TypeShape {
            id: ShapeId::of::<Source>(),
            name: "Source",
            fields: vec![FieldShape::new(
                "child",
                Type::Struct(ShapeRef::new::<Child>(child_shape)),
            )
            .nullable(true)],
        }
    }

    fn scope() -> Inferred {
        Inferred::new(
            Type::Struct(ShapeRef::new::<Source>(source_shape)),
            false,
        )
    }

    #[test]
    fn absent_intermediate_defaults_instead_of_raising() {
        // source.child.name with child = None
        let expr = Expr::project(Expr::project(Expr::arg(0), 0), 1);
        let source = Value::record(vec![Value::Null]);

        assert!(expr.eval(&source).unwrap_err().is_null_traversal());

        let guarded = apply(&expr, &scope()).unwrap();
        assert_eq!(
            guarded.eval(&source).unwrap(),
            Value::String(String::new())
        );
    }

    #[test]
    fn present_intermediate_unaffected() {
        let expr = Expr::project(Expr::project(Expr::arg(0), 0), 0);
        let source = Value::record(vec![Value::record(vec![
            Value::I32(3),
            Value::String("x".into()),
        ])]);

        let guarded = apply(&expr, &scope()).unwrap();
        assert_eq!(guarded.eval(&source).unwrap(), Value::I32(3));
        assert_eq!(expr.eval(&source).unwrap(), Value::I32(3));
    }

    #[test]
    fn construct_bindings_are_guarded() {
        let construct = Expr::construct(
            vec![Value::String(String::new())],
            vec![Binding::new(
                0,
                Expr::project(Expr::project(Expr::arg(0), 0), 1),
            )],
        );
        let source = Value::record(vec![Value::Null]);

        let guarded = apply(&construct, &scope()).unwrap();
        let record = guarded.eval(&source).unwrap().into_record().unwrap();
        assert_eq!(record[0], Value::String(String::new()));
    }
}
