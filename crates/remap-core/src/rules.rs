use crate::expr::ValueFn;
use crate::matcher::NameRule;
use crate::schema::ShapeId;

use std::fmt;

/// Identity of one (source type, target type) mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MappingKey {
    pub source: ShapeId,
    pub target: ShapeId,
}

impl MappingKey {
    pub fn new(source: ShapeId, target: ShapeId) -> Self {
        Self { source, target }
    }

    pub fn of<S: 'static, T: 'static>() -> Self {
        Self::new(ShapeId::of::<S>(), ShapeId::of::<T>())
    }
}

impl fmt::Display for MappingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source.name(), self.target.name())
    }
}

/// Structural toggles for one mapping pair. Everything defaults on except
/// null checking and the scalar-only source filter.
#[derive(Debug, Clone, Copy)]
pub struct Flags {
    pub flatten_child_objects: bool,
    pub map_child_structs: bool,
    pub map_child_sequences: bool,
    pub map_child_collections: bool,
    pub add_null_checking: bool,
    pub scalar_only: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            flatten_child_objects: true,
            map_child_structs: true,
            map_child_sequences: true,
            map_child_collections: true,
            add_null_checking: false,
            scalar_only: false,
        }
    }
}

/// Where an explicit member rule draws its value from.
#[derive(Clone)]
pub enum MemberSource {
    /// A dotted member path over the source root, resolved against the
    /// source shape when the plan is built.
    Path(Vec<String>),

    /// An opaque pure function of the source root.
    Func(ValueFn),
}

impl fmt::Debug for MemberSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => f.debug_tuple("Path").field(&path.join(".")).finish(),
            Self::Func(_) => f.write_str("Func(<fn>)"),
        }
    }
}

/// An explicit rule for a single target member. The most specific user
/// intent; wins over every later stage.
#[derive(Debug, Clone)]
pub struct MemberRule {
    pub target: String,
    pub source: MemberSource,
}

/// All the rules registered for one mapping pair. Mutable until the pair's
/// plan is first built; the plan snapshots whatever is present then.
#[derive(Clone, Default)]
pub struct RuleSet {
    /// Target members excluded from every stage
    pub ignored_targets: Vec<String>,

    /// Explicit per-member rules, in registration order
    pub member_rules: Vec<MemberRule>,

    /// (source member, target member) name equivalences
    pub renames: Vec<(String, String)>,

    /// Full construction rule; bypasses the generator pipeline entirely
    pub custom: Option<ValueFn>,

    pub flags: Flags,

    pub name_rule: NameRule,
}

impl RuleSet {
    /// Append an ignored target member. Reapplying the same ignore is
    /// harmless.
    pub fn ignore(&mut self, member: impl Into<String>) {
        let member = member.into();
        if !self.ignored_targets.contains(&member) {
            self.ignored_targets.push(member);
        }
    }

    pub fn for_member(&mut self, target: impl Into<String>, source: MemberSource) {
        self.member_rules.push(MemberRule {
            target: target.into(),
            source,
        });
    }

    pub fn rename(&mut self, source: impl Into<String>, target: impl Into<String>) {
        let pair = (source.into(), target.into());
        if !self.renames.contains(&pair) {
            self.renames.push(pair);
        }
    }

    pub fn set_custom(&mut self, f: ValueFn) {
        self.custom = Some(f);
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("ignored_targets", &self.ignored_targets)
            .field("member_rules", &self.member_rules)
            .field("renames", &self.renames)
            .field("custom", &self.custom.as_ref().map(|_| "<fn>"))
            .field("flags", &self.flags)
            .field("name_rule", &self.name_rule)
            .finish()
    }
}

/// The registry seam the plan compiler consults when it recurses into a
/// nested pair: the rules registered for that pair, if any.
pub trait RuleSource {
    fn rules_for(&self, key: &MappingKey) -> Option<RuleSet>;
}

/// A source with no registered rules; every pair maps with defaults.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRules;

impl RuleSource for NoRules {
    fn rules_for(&self, _key: &MappingKey) -> Option<RuleSet> {
        None
    }
}
