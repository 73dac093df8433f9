use super::{Cx, Generate, StageOutput};
use crate::{Error, Result};

/// Removes explicitly ignored target members from consideration before any
/// binding is attempted. Produces no bindings.
pub struct IgnoredTargets;

impl Generate for IgnoredTargets {
    fn name(&self) -> &'static str {
        "ignore"
    }

    fn generate(&self, cx: &mut Cx<'_, '_>, remaining: &[usize]) -> Result<StageOutput> {
        let mut ignored = Vec::with_capacity(cx.rules.ignored_targets.len());

        for name in &cx.rules.ignored_targets {
            let index = cx.target.field_named(name).ok_or_else(|| {
                Error::config(format!(
                    "cannot ignore `{name}`: no such member on `{}`",
                    cx.target.name
                ))
            })?;
            ignored.push(index);
        }

        Ok(StageOutput {
            bindings: vec![],
            remaining: super::without(remaining, &ignored),
        })
    }
}
