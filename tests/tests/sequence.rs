use pretty_assertions::assert_eq;
use remap::{MapSequence, Mapper};
use tests::*;

#[test]
fn maps_each_element_with_the_shared_plan() {
    let mapper = Mapper::new();
    let children = vec![child(1, "a"), child(2, "b"), child(3, "c")];

    let dtos: Vec<ChildDto> = children
        .iter()
        .copy_each(&mapper)
        .to()
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(dtos.len(), 3);
    assert_eq!(dtos[0], ChildDto { id: 1, name: "a".to_string() });
    assert_eq!(dtos[2], ChildDto { id: 3, name: "c".to_string() });
}

#[test]
fn adaptor_is_restartable_when_the_iterator_is_cloneable() {
    let mapper = Mapper::new();
    let children = vec![child(1, "a"), child(2, "b")];

    let mapped = children.iter().copy_each(&mapper).to().unwrap();
    let rerun = mapped.clone();

    let first: Vec<ChildDto> = mapped.map(Result::unwrap).collect();
    let second: Vec<ChildDto> = rerun.map(Result::unwrap).collect();
    assert_eq!(first, second);
}

#[test]
fn after_copy_actions_apply_per_element() {
    let mapper = Mapper::new();
    mapper
        .rules::<Child, ChildDto>()
        .after_copy(|source, target| target.id += i64::from(source.id));

    let children = vec![child(1, "a")];
    let dtos: Vec<ChildDto> = children
        .iter()
        .copy_each(&mapper)
        .to()
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(dtos[0].id, 2);
}

#[test]
fn configuration_errors_surface_when_the_adaptor_is_built() {
    let mapper = Mapper::new();
    mapper.rules::<Child, ChildDto>().ignore("missing");

    let children = vec![child(1, "a")];
    let result = children.iter().copy_each(&mapper).to::<Child, ChildDto>();
    assert!(result.unwrap_err().is_config());
}
