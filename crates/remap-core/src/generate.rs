mod ignore;
pub use ignore::IgnoredTargets;

mod member_rules;
pub use member_rules::DefinedMemberRules;

mod type_rules;
pub use type_rules::DefinedTypeRules;

mod matched_names;
pub use matched_names::MatchedNames;

mod flatten;
pub use flatten::FlattenedMembers;

mod child_struct;
pub use child_struct::ChildStructs;

mod child_sequence;
pub use child_sequence::ChildSequences;

mod child_collection;
pub use child_collection::ChildCollections;

use crate::compiler::Planner;
use crate::expr::{Binding, Expr};
use crate::matcher::NameComparer;
use crate::rules::{Flags, RuleSet};
use crate::schema::{ShapeRef, TypeShape};
use crate::Result;

/// Everything one stage can see while generating bindings at one nesting
/// level.
pub struct Cx<'a, 'r> {
    pub planner: &'a mut Planner<'r>,

    pub source: &'a TypeShape,
    pub source_ref: ShapeRef,
    pub target: &'a TypeShape,

    /// Readable source members, filtered to scalars when the pair is in
    /// scalar-only mode.
    pub source_fields: &'a [usize],

    pub rules: &'a RuleSet,
    pub comparer: &'a NameComparer,

    /// The expression producing the source value at this level.
    pub root: &'a Expr,
}

/// Bindings one stage produced, plus the target members left for the stages
/// after it.
pub struct StageOutput {
    pub bindings: Vec<Binding>,
    pub remaining: Vec<usize>,
}

/// One strategy in the generator pipeline. Stages run in a fixed order; a
/// target member bound by an earlier stage never reaches a later one.
pub trait Generate {
    fn name(&self) -> &'static str;

    fn generate(&self, cx: &mut Cx<'_, '_>, remaining: &[usize]) -> Result<StageOutput>;
}

/// The pipeline for one rule set: the four unconditional stages followed by
/// the structural stages its flags enable.
pub fn pipeline(flags: &Flags) -> Vec<Box<dyn Generate>> {
    let mut stages: Vec<Box<dyn Generate>> = vec![
        Box::new(IgnoredTargets),
        Box::new(DefinedMemberRules),
        Box::new(DefinedTypeRules),
        Box::new(MatchedNames),
    ];

    add_if(flags.flatten_child_objects, &mut stages, FlattenedMembers);
    add_if(flags.map_child_structs, &mut stages, ChildStructs);
    add_if(flags.map_child_sequences, &mut stages, ChildSequences);
    add_if(flags.map_child_collections, &mut stages, ChildCollections);

    stages
}

fn add_if(condition: bool, stages: &mut Vec<Box<dyn Generate>>, stage: impl Generate + 'static) {
    if condition {
        stages.push(Box::new(stage));
    }
}

/// Remove bound target positions from the remaining set, preserving order.
pub(crate) fn without(remaining: &[usize], bound: &[usize]) -> Vec<usize> {
    remaining
        .iter()
        .copied()
        .filter(|index| !bound.contains(index))
        .collect()
}
