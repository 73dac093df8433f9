use super::{Cx, Generate, StageOutput};
use crate::expr::{Binding, CollectionKind, Expr, Type};
use crate::matcher;
use crate::Result;

/// Binds name-matched sequence members where the target is the plain
/// growable sequence: a per-element projection over the source sequence,
/// e.g. `target.children = source.children.iter().map(..)`.
pub struct ChildSequences;

impl Generate for ChildSequences {
    fn name(&self) -> &'static str {
        "child-sequences"
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

            let (Type::Sequence(_, source_item), Type::Sequence(CollectionKind::Vec, target_item)) =
                (&source_field.ty, &target_field.ty)
            else {
                continue;
            };

            let Some(each) = cx.planner.element_plan(source_item, target_item)? else {
                continue;
            };

            let base = Expr::project(cx.root.clone(), member_match.source);
            bindings.push(Binding::new(member_match.target, Expr::map(base, each)));
            bound.push(member_match.target);
        }

        Ok(StageOutput {
            remaining: super::without(remaining, &bound),
            bindings,
        })
    }
}
