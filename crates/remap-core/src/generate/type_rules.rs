use super::{Cx, Generate, StageOutput};
use crate::expr::{Binding, Expr};
use crate::matcher;
use crate::rules::MappingKey;
use crate::Result;

/// For name-matched pairs whose member types carry a registered custom
/// construction rule, substitute that rule with the member access as its
/// input.
pub struct DefinedTypeRules;

impl Generate for DefinedTypeRules {
    fn name(&self) -> &'static str {
        "type-rules"
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

            let (Some(source_id), Some(target_id)) =
                (source_field.ty.shape_id(), target_field.ty.shape_id())
            else {
                continue;
            };

            let key = MappingKey::new(source_id, target_id);
            let Some(custom) = cx.planner.custom_rule(&key) else {
                continue;
            };

            let input = Expr::project(cx.root.clone(), member_match.source);
            bindings.push(Binding::new(
                member_match.target,
                Expr::func(input, custom, key.to_string()),
            ));
            bound.push(member_match.target);
        }

        Ok(StageOutput {
            remaining: super::without(remaining, &bound),
            bindings,
        })
    }
}
