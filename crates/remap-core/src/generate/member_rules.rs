use super::{Cx, Generate, StageOutput};
use crate::expr::{Binding, Expr, Inferred, Type};
use crate::matcher;
use crate::rules::MemberSource;
use crate::{Error, Result};

/// Binds each explicitly registered member rule. Highest-priority binding
/// stage: an explicit rule beats every match a later stage could find.
pub struct DefinedMemberRules;

impl Generate for DefinedMemberRules {
    fn name(&self) -> &'static str {
        "member-rules"
    }

    fn generate(&self, cx: &mut Cx<'_, '_>, remaining: &[usize]) -> Result<StageOutput> {
        let mut bindings = vec![];
        let mut bound = vec![];

        for rule in &cx.rules.member_rules {
            let target = cx.target.field_named(&rule.target).ok_or_else(|| {
                Error::config(format!(
                    "member rule targets `{}`: no such member on `{}`",
                    rule.target, cx.target.name
                ))
            })?;

            // An ignored member stays ignored; the ignore stage has already
            // removed it from consideration. The first rule for a member
            // wins over any later one.
            if !remaining.contains(&target) || bound.contains(&target) {
                continue;
            }

            let expr = resolve(cx, rule.target.as_str(), &rule.source, target)?;
            bindings.push(Binding::new(target, expr));
            bound.push(target);
        }

        Ok(StageOutput {
            remaining: super::without(remaining, &bound),
            bindings,
        })
    }
}

fn resolve(
    cx: &Cx<'_, '_>,
    rule_target: &str,
    source: &MemberSource,
    target: usize,
) -> Result<Expr> {
    let target_field = cx.target.field(target);
    if !target_field.writable {
        return Err(Error::config(format!(
            "member rule targets `{rule_target}`: member is not writable"
        )));
    }

    match source {
        MemberSource::Func(f) => Ok(Expr::func(cx.root.clone(), f.clone(), rule_target)),
        MemberSource::Path(path) => {
            let mut expr = cx.root.clone();
            let mut shape = cx.source.clone();

            let mut inferred = Inferred::new(Type::Struct(cx.source_ref), false);
            for (position, segment) in path.iter().enumerate() {
                let index = shape.field_named(segment).ok_or_else(|| {
                    Error::config(format!(
                        "member rule for `{rule_target}`: `{}` has no member named `{segment}`",
                        shape.name
                    ))
                })?;
                let field = shape.field(index);
                if !field.readable {
                    return Err(Error::config(format!(
                        "member rule for `{rule_target}`: `{}.{segment}` is not readable",
                        shape.name
                    )));
                }
                inferred = Inferred::new(field.ty.clone(), field.nullable);
                expr = Expr::project(expr, index);

                if position + 1 < path.len() {
                    shape = match &inferred.ty {
                        Type::Struct(shape_ref) => shape_ref.shape(),
                        other => {
                            return Err(Error::config(format!(
                                "member rule for `{rule_target}`: cannot walk into \
                                 `{segment}` of type {other:?}"
                            )))
                        }
                    };
                }
            }

            if !matches!(inferred.ty, Type::Unknown)
                && !matcher::is_compatible(&inferred.ty, &target_field.ty)
            {
                return Err(Error::config(format!(
                    "member rule for `{rule_target}`: {:?} is not compatible with {:?}",
                    inferred.ty, target_field.ty
                )));
            }

            if inferred.nullable && !target_field.nullable {
                return Err(Error::config(format!(
                    "member rule for `{rule_target}`: source path is optional but the \
                     target member is not"
                )));
            }

            if inferred.ty != target_field.ty && !matches!(inferred.ty, Type::Unknown) {
                expr = Expr::cast(expr, target_field.ty.clone());
            }

            Ok(expr)
        }
    }
}
