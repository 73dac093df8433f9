use pretty_assertions::assert_eq;
use remap::{Mappable, Mapper};
use remap_core::expr::{Expr, Value};
use tests::*;

#[test]
fn expression_and_function_paths_agree() {
    let mapper = Mapper::new();

    let projection = mapper.projection::<Order, OrderDto>().unwrap();
    let via_expression: OrderDto = projection.eval(&order()).unwrap();
    let via_function: OrderDto = mapper.map(&order()).unwrap();

    assert_eq!(via_expression.id, via_function.id);
    assert_eq!(via_expression.name, via_function.name);
    assert_eq!(via_expression.child, via_function.child);
    assert_eq!(via_expression.child_id, via_function.child_id);
    assert_eq!(via_expression.children, via_function.children);
}

#[test]
fn projection_never_carries_after_copy_actions() {
    let mapper = Mapper::new();
    mapper
        .rules::<Child, ChildDto>()
        .after_copy(|_, target| target.name.push('!'));

    let with_actions: ChildDto = mapper.map(&child(1, "x")).unwrap();
    assert_eq!(with_actions.name, "x!");

    let projection = mapper.projection::<Child, ChildDto>().unwrap();
    let without_actions: ChildDto = projection.eval(&child(1, "x")).unwrap();
    assert_eq!(without_actions.name, "x");
}

#[test]
fn projection_is_memoized_per_pair() {
    let mapper = Mapper::new();

    let first = mapper.projection::<Child, ChildDto>().unwrap();
    let second = mapper.projection::<Child, ChildDto>().unwrap();

    assert!(std::ptr::eq(first.expr(), second.expr()));
}

#[test]
fn projection_composes_into_a_sequence_pipeline() {
    let mapper = Mapper::new();
    let projection = mapper.projection::<Child, ChildDto>().unwrap();

    // Push the per-element transform into a foreign evaluation of a list,
    // the way a query translator would append a select stage.
    let items = Value::list(vec![
        child(1, "a").to_value(),
        child(2, "b").to_value(),
    ]);
    let pipeline = Expr::map(Expr::arg(0), projection.expr().clone());

    let mapped = pipeline.eval(&items).unwrap().into_list().unwrap();
    let dtos: Vec<ChildDto> = mapped
        .into_iter()
        .map(|value| ChildDto::load(value).unwrap())
        .collect();

    assert_eq!(
        dtos,
        vec![
            ChildDto { id: 1, name: "a".to_string() },
            ChildDto { id: 2, name: "b".to_string() },
        ]
    );
}
