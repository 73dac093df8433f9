use crate::codec::FieldType;
use crate::from::CopyFrom;
use crate::mappable::{shape_ref, Mappable};
use crate::projection::MappingExpr;
use crate::rules::Rules;

use remap_core::expr::{Assignments, CompiledFn, Expr};
use remap_core::rules::{MappingKey, RuleSet, RuleSource};
use remap_core::{Planner, Result};

use indexmap::IndexMap;
use log::debug;
use std::any::Any;
use std::sync::{Arc, Mutex, OnceLock};

/// An isolated holder of rule sets and compiled plans for a family of
/// type-pair mappings. Two mappers never share rules or plans.
///
/// Compilation happens at most once per pair per mapper, on first use;
/// rules registered after a pair's first use have no effect on it.
pub struct Mapper {
    registry: Registry,
}

impl Mapper {
    pub fn new() -> Self {
        Self {
            registry: Registry::default(),
        }
    }

    /// Start a copy from the given source instance.
    pub fn from<'a, S: Mappable>(&'a self, source: &'a S) -> CopyFrom<'a, S> {
        CopyFrom::new(self, source, false)
    }

    /// As [`Mapper::from`], but mapping only scalar source members.
    pub fn scalars_from<'a, S: Mappable>(&'a self, source: &'a S) -> CopyFrom<'a, S> {
        CopyFrom::new(self, source, true)
    }

    /// Register rules for one mapping pair.
    pub fn rules<S: FieldType, T: FieldType>(&self) -> Rules<'_, S, T> {
        Rules::new(self)
    }

    /// Construct a new target instance from the source.
    pub fn map<S: Mappable, T: Mappable>(&self, source: &S) -> Result<T> {
        let construct = self.construct_fn::<S, T>()?;
        let value = (*construct)(&source.to_value())?;
        let mut target = T::load(value)?;
        self.run_after_copy(source, &mut target);
        Ok(target)
    }

    /// Populate an existing target instance from the source. Members the
    /// plan does not bind are left untouched.
    pub fn map_into<S: Mappable, T: Mappable>(&self, source: &S, target: &mut T) -> Result<()> {
        let assignments = self.update_fns::<S, T>()?;
        let source_value = source.to_value();
        for (field, assignment) in assignments.iter() {
            target.write_field(*field, (**assignment)(&source_value)?)?;
        }
        self.run_after_copy(source, target);
        Ok(())
    }

    /// The declarative construction expression for the pair, composable
    /// into other evaluation pipelines. Never contains after-copy actions.
    pub fn projection<S: Mappable, T: Mappable>(&self) -> Result<MappingExpr<S, T>> {
        Ok(MappingExpr::new(self.construct_expr::<S, T>()?))
    }

    // === Plan cache ===

    pub(crate) fn construct_expr<S: Mappable, T: Mappable>(&self) -> Result<Arc<Expr>> {
        let key = MappingKey::of::<S, T>();
        let plans = self.registry.plans(key);

        if let Some(plan) = plans.construct.get() {
            return Ok(plan.expr.clone());
        }

        let rules = self.registry.rules_snapshot(key);
        let mut planner = Planner::new(&self.registry);
        let built = planner.construct_plan(shape_ref::<S>(), shape_ref::<T>(), &rules)?;

        // Single winner: a racing thread's result is dropped in favor of
        // whichever published first.
        let plan = plans.construct.get_or_init(|| ConstructPlan {
            expr: Arc::new(built),
            compiled: OnceLock::new(),
        });
        Ok(plan.expr.clone())
    }

    pub(crate) fn construct_fn<S: Mappable, T: Mappable>(&self) -> Result<CompiledFn> {
        let key = MappingKey::of::<S, T>();
        self.construct_expr::<S, T>()?;

        let plans = self.registry.plans(key);
        let plan = plans.construct.get().expect("construction plan published");
        Ok(plan
            .compiled
            .get_or_init(|| {
                debug!("compiled executable construction for {key}");
                plan.expr.compile_fn()
            })
            .clone())
    }

    pub(crate) fn update_assignments<S: Mappable, T: Mappable>(&self) -> Result<Arc<Assignments>> {
        let key = MappingKey::of::<S, T>();
        let plans = self.registry.plans(key);

        if let Some(plan) = plans.update.get() {
            return Ok(plan.assignments.clone());
        }

        let rules = self.registry.rules_snapshot(key);
        let mut planner = Planner::new(&self.registry);
        let built = planner.update_plan(shape_ref::<S>(), shape_ref::<T>(), &rules)?;

        let plan = plans.update.get_or_init(|| UpdatePlan {
            assignments: Arc::new(built),
            compiled: OnceLock::new(),
        });
        Ok(plan.assignments.clone())
    }

    pub(crate) fn update_fns<S: Mappable, T: Mappable>(&self) -> Result<Arc<[(usize, CompiledFn)]>> {
        let key = MappingKey::of::<S, T>();
        self.update_assignments::<S, T>()?;

        let plans = self.registry.plans(key);
        let plan = plans.update.get().expect("update plan published");
        Ok(plan
            .compiled
            .get_or_init(|| {
                plan.assignments
                    .iter()
                    .map(|binding| (binding.field, binding.expr.compile_fn()))
                    .collect()
            })
            .clone())
    }

    // === Rule registration support ===

    pub(crate) fn with_rules(&self, key: MappingKey, f: impl FnOnce(&mut RuleSet)) {
        self.registry.with_entry(key, |entry| f(&mut entry.rules));
    }

    pub(crate) fn push_after_copy<S: Mappable, T: Mappable>(&self, action: AfterCopy<S, T>) {
        let key = MappingKey::of::<S, T>();
        self.registry.with_entry(key, |entry| {
            let extras = entry
                .extras
                .get_or_insert_with(|| Box::new(Extras::<S, T>::default()));
            extras
                .downcast_mut::<Extras<S, T>>()
                .expect("extras registered under a different pair")
                .after
                .push(action);
        });
    }

    pub(crate) fn set_scalar_only<S: Mappable, T: Mappable>(&self) {
        self.with_rules(MappingKey::of::<S, T>(), |rules| {
            rules.flags.scalar_only = true;
        });
    }

    pub(crate) fn run_after_copy<S: Mappable, T: Mappable>(&self, source: &S, target: &mut T) {
        let key = MappingKey::of::<S, T>();
        let actions = self.registry.after_copy::<S, T>(key);
        for action in actions {
            (*action)(source, target);
        }
    }
}

impl Default for Mapper {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) type AfterCopy<S, T> = Arc<dyn Fn(&S, &mut T) + Send + Sync>;

/// Typed per-pair state that cannot be expressed in the erased rule set:
/// the after-copy actions, applied only on instance-producing calls.
struct Extras<S, T> {
    after: Vec<AfterCopy<S, T>>,
}

impl<S, T> Default for Extras<S, T> {
    fn default() -> Self {
        Self { after: vec![] }
    }
}

/// Per-mapper registry: rules, typed extras and the compute-once plan cell
/// for every pair that has been touched.
#[derive(Default)]
struct Registry {
    entries: Mutex<IndexMap<MappingKey, Entry>>,
}

struct Entry {
    rules: RuleSet,
    extras: Option<Box<dyn Any + Send + Sync>>,
    plans: Arc<PlanCell>,
}

impl Entry {
    fn new() -> Self {
        Self {
            rules: RuleSet::default(),
            extras: None,
            plans: Arc::new(PlanCell::default()),
        }
    }
}

impl Registry {
    fn with_entry<R>(&self, key: MappingKey, f: impl FnOnce(&mut Entry) -> R) -> R {
        let mut entries = self.entries.lock().unwrap();
        f(entries.entry(key).or_insert_with(Entry::new))
    }

    fn plans(&self, key: MappingKey) -> Arc<PlanCell> {
        self.with_entry(key, |entry| entry.plans.clone())
    }

    fn rules_snapshot(&self, key: MappingKey) -> RuleSet {
        self.with_entry(key, |entry| entry.rules.clone())
    }

    fn after_copy<S: Mappable, T: Mappable>(&self, key: MappingKey) -> Vec<AfterCopy<S, T>> {
        let entries = self.entries.lock().unwrap();
        entries
            .get(&key)
            .and_then(|entry| entry.extras.as_ref())
            .and_then(|extras| extras.downcast_ref::<Extras<S, T>>())
            .map(|extras| extras.after.clone())
            .unwrap_or_default()
    }
}

impl RuleSource for Registry {
    fn rules_for(&self, key: &MappingKey) -> Option<RuleSet> {
        let entries = self.entries.lock().unwrap();
        entries.get(key).map(|entry| entry.rules.clone())
    }
}

/// The compute-once cell for one pair's plans. The construction and update
/// plans are separately lazy, and each executable form derives lazily from
/// its declarative plan.
#[derive(Default)]
struct PlanCell {
    construct: OnceLock<ConstructPlan>,
    update: OnceLock<UpdatePlan>,
}

struct ConstructPlan {
    expr: Arc<Expr>,
    compiled: OnceLock<CompiledFn>,
}

struct UpdatePlan {
    assignments: Arc<Assignments>,
    compiled: OnceLock<Arc<[(usize, CompiledFn)]>>,
}
