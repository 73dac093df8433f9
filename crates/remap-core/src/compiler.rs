mod guard;

use crate::expr::{Assignments, Binding, Expr, Inferred, Type, Value, ValueFn};
use crate::generate::{self, Cx};
use crate::matcher::{self, NameComparer};
use crate::rules::{MappingKey, RuleSet, RuleSource};
use crate::schema::ShapeRef;
use crate::{Error, Result};

use log::{debug, trace};

/// Builds declarative plans for one mapping pair by running the generator
/// pipeline, recursing into nested pairs through the rule source.
pub struct Planner<'a> {
    rule_source: &'a dyn RuleSource,

    /// Pairs currently being generated, to reject recursive mappings.
    stack: Vec<MappingKey>,
}

impl<'a> Planner<'a> {
    pub fn new(rule_source: &'a dyn RuleSource) -> Self {
        Self {
            rule_source,
            stack: vec![],
        }
    }

    /// The construction plan: allocates a new target and assigns every
    /// resolvable member in one pass. A registered custom rule is used
    /// verbatim and never combined with generator bindings.
    pub fn construct_plan(
        &mut self,
        source: ShapeRef,
        target: ShapeRef,
        rules: &RuleSet,
    ) -> Result<Expr> {
        let key = MappingKey::new(source.id, target.id);

        let mut expr = if let Some(custom) = &rules.custom {
            debug!("using custom construction rule for {key}");
            Expr::func(Expr::arg(0), custom.clone(), key.to_string())
        } else {
            self.construct_body(source, target, rules, Expr::arg(0))?
        };

        if rules.flags.add_null_checking {
            expr = guard::apply(&expr, &root_scope(source))?;
        }

        debug!("compiled construction plan for {key}");
        Ok(expr)
    }

    /// The update plan: assignments applied to an existing target instance.
    /// Members no stage binds are left untouched.
    pub fn update_plan(
        &mut self,
        source: ShapeRef,
        target: ShapeRef,
        rules: &RuleSet,
    ) -> Result<Assignments> {
        let key = MappingKey::new(source.id, target.id);

        let mut bindings = self.bindings(source, target, rules, Expr::arg(0))?;

        if rules.flags.add_null_checking {
            let scope = root_scope(source);
            for binding in &mut bindings {
                binding.expr = guard::apply(&binding.expr, &scope)?;
            }
        }

        debug!("compiled update plan for {key}: {} assignments", bindings.len());
        Ok(Assignments::new(bindings))
    }

    /// A nested construction body rooted at an arbitrary source expression.
    pub(crate) fn construct_body(
        &mut self,
        source: ShapeRef,
        target: ShapeRef,
        rules: &RuleSet,
        root: Expr,
    ) -> Result<Expr> {
        let bindings = self.bindings(source, target, rules, root)?;

        let defaults = target
            .shape()
            .fields
            .iter()
            .map(|field| {
                if field.nullable {
                    Value::Null
                } else {
                    field.ty.default_value()
                }
            })
            .collect();

        Ok(Expr::construct(defaults, bindings))
    }

    fn bindings(
        &mut self,
        source: ShapeRef,
        target: ShapeRef,
        rules: &RuleSet,
        root: Expr,
    ) -> Result<Vec<Binding>> {
        let key = MappingKey::new(source.id, target.id);
        if self.stack.contains(&key) {
            return Err(Error::config(format!(
                "recursive mapping: {key} nests inside itself"
            )));
        }

        self.stack.push(key);
        let result = self.bindings_inner(source, target, rules, root);
        self.stack.pop();
        result
    }

    fn bindings_inner(
        &mut self,
        source: ShapeRef,
        target: ShapeRef,
        rules: &RuleSet,
        root: Expr,
    ) -> Result<Vec<Binding>> {
        let key = MappingKey::new(source.id, target.id);
        let source_shape = source.shape();
        let target_shape = target.shape();

        for (rename_source, rename_target) in &rules.renames {
            if source_shape.field_named(rename_source).is_none() {
                return Err(Error::config(format!(
                    "rename maps `{rename_source}`: no such member on `{}`",
                    source_shape.name
                )));
            }
            if target_shape.field_named(rename_target).is_none() {
                return Err(Error::config(format!(
                    "rename maps to `{rename_target}`: no such member on `{}`",
                    target_shape.name
                )));
            }
        }

        let comparer = NameComparer::new(rules.name_rule, rules.renames.clone());

        let source_fields: Vec<usize> = source_shape
            .fields
            .iter()
            .enumerate()
            .filter(|(_, field)| {
                field.readable && (!rules.flags.scalar_only || field.is_scalar())
            })
            .map(|(index, _)| index)
            .collect();

        let mut remaining: Vec<usize> = (0..target_shape.len()).collect();
        let mut bindings = vec![];

        for stage in generate::pipeline(&rules.flags) {
            let mut cx = Cx {
                planner: self,
                source: &source_shape,
                source_ref: source,
                target: &target_shape,
                source_fields: &source_fields,
                rules,
                comparer: &comparer,
                root: &root,
            };

            let output = stage.generate(&mut cx, &remaining)?;
            trace!(
                "stage `{}` bound {} members for {key}",
                stage.name(),
                output.bindings.len()
            );

            bindings.extend(output.bindings);
            remaining = output.remaining;
        }

        Ok(bindings)
    }

    pub(crate) fn child_rules(&self, key: &MappingKey) -> RuleSet {
        self.rule_source.rules_for(key).unwrap_or_default()
    }

    pub(crate) fn custom_rule(&self, key: &MappingKey) -> Option<ValueFn> {
        self.rule_source.rules_for(key).and_then(|rules| rules.custom)
    }

    /// The per-element expression for sequence members: identity or a
    /// conversion for compatible scalars, a nested construction for shaped
    /// items, nothing otherwise.
    pub(crate) fn element_plan(
        &mut self,
        source_item: &Type,
        target_item: &Type,
    ) -> Result<Option<Expr>> {
        if source_item.is_scalar()
            && target_item.is_scalar()
            && matcher::is_compatible(source_item, target_item)
        {
            return Ok(Some(if source_item == target_item {
                Expr::arg(0)
            } else {
                Expr::cast(Expr::arg(0), target_item.clone())
            }));
        }

        match (source_item, target_item) {
            (Type::Struct(source_ref), Type::Struct(target_ref)) => {
                let rules = self.child_rules(&MappingKey::new(source_ref.id, target_ref.id));
                let body = self.construct_body(*source_ref, *target_ref, &rules, Expr::arg(0))?;
                Ok(Some(body))
            }
            _ => Ok(None),
        }
    }
}

fn root_scope(source: ShapeRef) -> Inferred {
    Inferred::new(Type::Struct(source), false)
}
