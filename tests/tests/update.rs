use pretty_assertions::assert_eq;
use remap::Mapper;
use tests::*;

#[test]
fn update_overwrites_only_bound_members() {
    let mapper = Mapper::new();

    let mut existing = FlatDto {
        id: 0,
        child_id: 7,
        child_name: "Child".to_string(),
    };
    mapper
        .from(&IdOnly { id: 10 })
        .to_existing(&mut existing)
        .unwrap();

    assert_eq!(existing.id, 10);
    assert_eq!(existing.child_id, 7);
    assert_eq!(existing.child_name, "Child");
}

#[test]
fn update_applies_nested_and_flattened_members() {
    let mapper = Mapper::new();

    let mut existing = OrderDto::default();
    mapper.from(&order()).to_existing(&mut existing).unwrap();

    assert_eq!(existing.id, 10);
    assert_eq!(existing.child.id, 5);
    assert_eq!(existing.child_id, 5);
    assert_eq!(existing.children.len(), 3);
}

#[test]
fn after_copy_runs_on_update_too() {
    let mapper = Mapper::new();
    mapper
        .rules::<IdOnly, FlatDto>()
        .after_copy(|source, target| target.child_id = source.id * 2);

    let mut existing = FlatDto::default();
    mapper
        .from(&IdOnly { id: 3 })
        .to_existing(&mut existing)
        .unwrap();

    assert_eq!(existing.id, 3);
    assert_eq!(existing.child_id, 6);
}

#[test]
fn repeated_updates_are_deterministic() {
    let mapper = Mapper::new();

    let mut first = OrderDto::default();
    let mut second = OrderDto::default();
    mapper.from(&order()).to_existing(&mut first).unwrap();
    mapper.from(&order()).to_existing(&mut second).unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(first.child_name, second.child_name);
    assert_eq!(first.children, second.children);
}
