use super::{Cx, Generate, StageOutput};
use crate::expr::{Binding, Expr};
use crate::matcher;
use crate::Result;

/// Binds remaining scalar and string target members directly to compatible
/// source members of the same name. A conversion is inserted only when the
/// member types differ.
pub struct MatchedNames;

impl Generate for MatchedNames {
    fn name(&self) -> &'static str {
        "matched-names"
    }

    fn generate(&self, cx: &mut Cx<'_, '_>, remaining: &[usize]) -> Result<StageOutput> {
        let mut bindings = vec![];
        let mut bound = vec![];

        let matches = matcher::match_by_name(
            cx.source,
            cx.source_fields,
            cx.target,
            remaining,
            cx.comparer,
        );

        for member_match in matches {
            let source_field = cx.source.field(member_match.source);
            let target_field = cx.target.field(member_match.target);

            if !target_field.ty.is_scalar() {
                continue;
            }
            if !matcher::is_compatible(&source_field.ty, &target_field.ty) {
                continue;
            }
            if source_field.nullable && !target_field.nullable {
                continue;
            }

            let mut expr = Expr::project(cx.root.clone(), member_match.source);
            if source_field.ty != target_field.ty {
                expr = Expr::cast(expr, target_field.ty.clone());
            }

            bindings.push(Binding::new(member_match.target, expr));
            bound.push(member_match.target);
        }

        Ok(StageOutput {
            remaining: super::without(remaining, &bound),
            bindings,
        })
    }
}
