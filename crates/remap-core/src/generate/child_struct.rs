use super::{Cx, Generate, StageOutput};
use crate::expr::{Binding, Expr, Type};
use crate::matcher;
use crate::rules::MappingKey;
use crate::Result;

/// Binds a name-matched struct-typed target member to a recursively
/// generated construction of the corresponding source child, e.g.
/// `target.owner = OwnerDto { id: source.owner.id, .. }`.
pub struct ChildStructs;

impl Generate for ChildStructs {
    fn name(&self) -> &'static str {
        "child-structs"
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

            let (Type::Struct(source_ref), Type::Struct(target_ref)) =
                (&source_field.ty, &target_field.ty)
            else {
                continue;
            };

            let child_rules = cx
                .planner
                .child_rules(&MappingKey::new(source_ref.id, target_ref.id));
            let root = Expr::project(cx.root.clone(), member_match.source);
            let expr = cx
                .planner
                .construct_body(*source_ref, *target_ref, &child_rules, root)?;

            bindings.push(Binding::new(member_match.target, expr));
            bound.push(member_match.target);
        }

        Ok(StageOutput {
            remaining: super::without(remaining, &bound),
            bindings,
        })
    }
}
