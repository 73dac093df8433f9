use super::{Cx, Generate, StageOutput};
use crate::expr::{Binding, Expr, Type};
use crate::matcher;
use crate::Result;

/// Binds a target member to a nested source member when the concatenated
/// source member + child member name equals the target member name, e.g.
/// `target.owner_name` from `source.owner.name`. One level only.
pub struct FlattenedMembers;

impl Generate for FlattenedMembers {
    fn name(&self) -> &'static str {
        "flatten"
    }

    fn generate(&self, cx: &mut Cx<'_, '_>, remaining: &[usize]) -> Result<StageOutput> {
        let mut bindings = vec![];
        let mut bound = vec![];

        for &target in remaining {
            let target_field = cx.target.field(target);
            if !target_field.writable {
                continue;
            }

            if let Some(expr) = flattened_source(cx, target) {
                bindings.push(Binding::new(target, expr));
                bound.push(target);
            }
        }

        Ok(StageOutput {
            remaining: super::without(remaining, &bound),
            bindings,
        })
    }
}

fn flattened_source(cx: &Cx<'_, '_>, target: usize) -> Option<Expr> {
    let target_field = cx.target.field(target);

    for &source in cx.source_fields {
        let source_field = cx.source.field(source);
        let Type::Struct(shape_ref) = &source_field.ty else {
            continue;
        };

        let child_shape = shape_ref.shape();
        for (child, child_field) in child_shape.fields.iter().enumerate() {
            if !child_field.readable {
                continue;
            }
            if !cx
                .comparer
                .flattened_eq(source_field.name, child_field.name, target_field.name)
            {
                continue;
            }
            if !matcher::is_compatible(&child_field.ty, &target_field.ty) {
                continue;
            }
            if child_field.nullable && !target_field.nullable {
                continue;
            }

            let mut expr = Expr::project(Expr::project(cx.root.clone(), source), child);
            if child_field.ty != target_field.ty {
                expr = Expr::cast(expr, target_field.ty.clone());
            }
            return Some(expr);
        }
    }

    None
}
