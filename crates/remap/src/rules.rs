use crate::codec::FieldType;
use crate::mappable::Mappable;
use crate::mapper::Mapper;
use crate::NameRule;

use remap_core::expr::Value;
use remap_core::rules::{MappingKey, MemberSource};
use remap_core::Result;

use std::marker::PhantomData;
use std::sync::Arc;

/// Fluent rule registration for one mapping pair. Rules take effect on the
/// pair's first use; register them before mapping.
pub struct Rules<'a, S, T> {
    mapper: &'a Mapper,
    _pair: PhantomData<fn(&S) -> T>,
}

impl<'a, S: FieldType, T: FieldType> Rules<'a, S, T> {
    pub(crate) fn new(mapper: &'a Mapper) -> Self {
        Self {
            mapper,
            _pair: PhantomData,
        }
    }

    fn key() -> MappingKey {
        MappingKey::of::<S, T>()
    }

    /// Exclude a target member from every stage. Reapplying the same ignore
    /// is harmless.
    pub fn ignore(self, member: &str) -> Self {
        self.mapper
            .with_rules(Self::key(), |rules| rules.ignore(member));
        self
    }

    /// Bind a target member to a dotted member path over the source, e.g.
    /// `.for_member("owner_name", "owner.name")`. Validated when the pair's
    /// plan is first built.
    pub fn for_member(self, target: &str, source_path: &str) -> Self {
        let path: Vec<String> = source_path.split('.').map(str::to_string).collect();
        self.mapper.with_rules(Self::key(), |rules| {
            rules.for_member(target, MemberSource::Path(path));
        });
        self
    }

    /// Bind a target member to a pure function of the source.
    pub fn for_member_with<R: FieldType>(
        self,
        target: &str,
        f: impl Fn(&S) -> R + Send + Sync + 'static,
    ) -> Self {
        let f = Arc::new(move |value: Value| -> Result<Value> {
            let source = S::load(value)?;
            Ok(f(&source).to_value())
        });
        self.mapper.with_rules(Self::key(), |rules| {
            rules.for_member(target, MemberSource::Func(f));
        });
        self
    }

    /// Map one source member directly to a differently named target member.
    pub fn map_member_to(self, source: &str, target: &str) -> Self {
        self.mapper
            .with_rules(Self::key(), |rules| rules.rename(source, target));
        self
    }

    /// Replace the whole construction with a custom rule. Generator stages
    /// are bypassed entirely for this pair; in-place updates are unaffected.
    pub fn set_custom(self, f: impl Fn(&S) -> T + Send + Sync + 'static) -> Self {
        let f = Arc::new(move |value: Value| -> Result<Value> {
            let source = S::load(value)?;
            Ok(f(&source).to_value())
        });
        self.mapper
            .with_rules(Self::key(), |rules| rules.set_custom(f));
        self
    }

    pub fn flatten_child_objects(self, enabled: bool) -> Self {
        self.mapper.with_rules(Self::key(), |rules| {
            rules.flags.flatten_child_objects = enabled;
        });
        self
    }

    pub fn map_child_structs(self, enabled: bool) -> Self {
        self.mapper.with_rules(Self::key(), |rules| {
            rules.flags.map_child_structs = enabled;
        });
        self
    }

    pub fn map_child_sequences(self, enabled: bool) -> Self {
        self.mapper.with_rules(Self::key(), |rules| {
            rules.flags.map_child_sequences = enabled;
        });
        self
    }

    pub fn map_child_collections(self, enabled: bool) -> Self {
        self.mapper.with_rules(Self::key(), |rules| {
            rules.flags.map_child_collections = enabled;
        });
        self
    }

    /// Trade absent-intermediate failures for default values: member-access
    /// chains short-circuit to the member's zero/empty value instead of
    /// raising.
    pub fn null_checking(self, enabled: bool) -> Self {
        self.mapper.with_rules(Self::key(), |rules| {
            rules.flags.add_null_checking = enabled;
        });
        self
    }

    /// Map only scalar (value-typed and string) source members.
    pub fn scalar_only(self, enabled: bool) -> Self {
        self.mapper.with_rules(Self::key(), |rules| {
            rules.flags.scalar_only = enabled;
        });
        self
    }

    /// Case policy for member name matching; case-insensitive by default.
    pub fn name_rule(self, rule: NameRule) -> Self {
        self.mapper
            .with_rules(Self::key(), |rules| rules.name_rule = rule);
        self
    }
}

impl<'a, S: Mappable, T: Mappable> Rules<'a, S, T> {
    /// A side-effecting callback run after each instance-producing copy.
    /// Never embedded in the query-projection form.
    pub fn after_copy(self, action: impl Fn(&S, &mut T) + Send + Sync + 'static) -> Self {
        self.mapper.push_after_copy::<S, T>(Arc::new(action));
        self
    }

    /// Force compilation of both plans and their executable forms now.
    /// Rules registered after this call have no effect on the pair.
    pub fn precompile(&self) -> Result<()> {
        self.mapper.construct_fn::<S, T>()?;
        self.mapper.update_fns::<S, T>()?;
        Ok(())
    }
}
