use crate::expr::Type;
use crate::schema::TypeShape;

/// Case policy for member name matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameRule {
    /// Case-insensitive comparison (the default)
    #[default]
    Insensitive,

    /// Exact comparison
    Sensitive,
}

impl NameRule {
    fn eq(&self, a: &str, b: &str) -> bool {
        match self {
            Self::Insensitive => a.eq_ignore_ascii_case(b),
            Self::Sensitive => a == b,
        }
    }
}

/// Member name comparer: the active case rule plus the rename equivalences
/// registered for the pair. A rename establishes name equality for exactly
/// its (source, target) pair, ahead of the case rule.
#[derive(Debug, Clone, Default)]
pub struct NameComparer {
    rule: NameRule,
    equivalences: Vec<(String, String)>,
}

impl NameComparer {
    pub fn new(rule: NameRule, equivalences: Vec<(String, String)>) -> Self {
        Self { rule, equivalences }
    }

    /// Whether a source member name pairs with a target member name.
    pub fn members_eq(&self, source: &str, target: &str) -> bool {
        if self
            .equivalences
            .iter()
            .any(|(s, t)| s == source && t == target)
        {
            return true;
        }
        self.rule.eq(source, target)
    }

    /// Whether a concatenated source member + child member name pairs with a
    /// target member name, joined directly (`OwnerName`) or with the
    /// snake_case underscore (`owner_name`). Renames do not participate in
    /// flattening.
    pub fn flattened_eq(&self, outer: &str, inner: &str, target: &str) -> bool {
        if outer.len() + inner.len() == target.len() {
            if let (Some(head), Some(tail)) = (target.get(..outer.len()), target.get(outer.len()..))
            {
                return self.rule.eq(head, outer) && self.rule.eq(tail, inner);
            }
        }

        if outer.len() + 1 + inner.len() == target.len() {
            if let (Some(head), Some(sep), Some(tail)) = (
                target.get(..outer.len()),
                target.get(outer.len()..outer.len() + 1),
                target.get(outer.len() + 1..),
            ) {
                return sep == "_" && self.rule.eq(head, outer) && self.rule.eq(tail, inner);
            }
        }

        false
    }
}

/// A name-matched member pair: positions into the source and target shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberMatch {
    pub source: usize,
    pub target: usize,
}

/// Pair readable source members with writable target members whose names
/// compare equal. Each target member pairs with at most one source member,
/// the first that matches.
pub fn match_by_name(
    source_shape: &TypeShape,
    source_fields: &[usize],
    target_shape: &TypeShape,
    target_fields: &[usize],
    comparer: &NameComparer,
) -> Vec<MemberMatch> {
    let mut matches = vec![];

    for &target in target_fields {
        let target_field = target_shape.field(target);
        if !target_field.writable {
            continue;
        }

        let matched = source_fields.iter().copied().find(|&source| {
            let source_field = source_shape.field(source);
            source_field.readable && comparer.members_eq(source_field.name, target_field.name)
        });

        if let Some(source) = matched {
            matches.push(MemberMatch { source, target });
        }
    }

    matches
}

/// Whether a source member type can feed a target member type: identical
/// types, a documented numeric widening, or an enum and its underlying
/// integer representation (either direction). Never narrowing. Not matching
/// is not a failure, just non-eligibility.
pub fn is_compatible(source: &Type, target: &Type) -> bool {
    if source == target {
        return true;
    }

    if widens(source, target) {
        return true;
    }

    // A C-like enum converts to and from any integer type wide enough for
    // its discriminant; discriminants are i64 at most.
    match (source, target) {
        (Type::Enum(_), _) => matches!(target, Type::I64),
        (_, Type::Enum(_)) => source.is_integer(),
        _ => false,
    }
}

/// The conventional numeric promotion table. Promotion only; a narrowing
/// conversion never matches.
fn widens(from: &Type, to: &Type) -> bool {
    use Type::*;

    match from {
        I8 => matches!(to, I16 | I32 | I64 | F32 | F64),
        U8 => matches!(to, I16 | U16 | I32 | U32 | I64 | U64 | F32 | F64),
        I16 => matches!(to, I32 | I64 | F32 | F64),
        U16 => matches!(to, I32 | U32 | I64 | U64 | F32 | F64),
        I32 => matches!(to, I64 | F32 | F64),
        U32 => matches!(to, I64 | U64 | F32 | F64),
        I64 => matches!(to, F32 | F64),
        U64 => matches!(to, F32 | F64),
        Char => matches!(to, U32 | U64 | I32 | I64 | F32 | F64),
        F32 => matches!(to, F64),
        _ => false,
    }
}
