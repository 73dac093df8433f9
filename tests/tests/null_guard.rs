use pretty_assertions::assert_eq;
use remap::Mapper;
use tests::*;

#[test]
fn absent_child_raises_by_default() {
    let mapper = Mapper::new();
    let source = MaybeParent { id: 1, child: None };

    let err = mapper.map::<MaybeParent, FlatDto>(&source).unwrap_err();
    assert!(err.is_null_traversal());
}

#[test]
fn absent_child_flattens_to_defaults_when_guarded() {
    let mapper = Mapper::new();
    mapper.rules::<MaybeParent, FlatDto>().null_checking(true);

    let source = MaybeParent { id: 1, child: None };
    let dto: FlatDto = mapper.map(&source).unwrap();

    assert_eq!(dto.id, 1);
    assert_eq!(dto.child_id, 0);
    assert_eq!(dto.child_name, "");
}

#[test]
fn present_child_is_unaffected_by_guards() {
    let mapper = Mapper::new();
    mapper.rules::<MaybeParent, FlatDto>().null_checking(true);

    let source = MaybeParent {
        id: 1,
        child: Some(child(5, "x")),
    };
    let dto: FlatDto = mapper.map(&source).unwrap();

    assert_eq!(dto.child_id, 5);
    assert_eq!(dto.child_name, "x");
}

#[test]
fn absent_child_nested_construction_defaults_when_guarded() {
    let mapper = Mapper::new();
    mapper.rules::<MaybeParent, NestedDto>().null_checking(true);

    let source = MaybeParent { id: 2, child: None };
    let dto: NestedDto = mapper.map(&source).unwrap();

    assert_eq!(dto.id, 2);
    assert_eq!(dto.child, ChildDto::default());
}

#[test]
fn absent_child_nested_construction_raises_unguarded() {
    let mapper = Mapper::new();
    let source = MaybeParent { id: 2, child: None };

    let err = mapper.map::<MaybeParent, NestedDto>(&source).unwrap_err();
    assert!(err.is_null_traversal());
}

#[test]
fn absent_sequence_guards_to_empty() {
    let mapper = Mapper::new();
    mapper.rules::<MaybeList, ListDto>().null_checking(true);

    let dto: ListDto = mapper.map(&MaybeList { items: None }).unwrap();
    assert!(dto.items.is_empty());

    let err = Mapper::new()
        .map::<MaybeList, ListDto>(&MaybeList { items: None })
        .unwrap_err();
    assert!(err.is_null_traversal());
}

#[test]
fn guards_apply_to_update_plans_too() {
    let mapper = Mapper::new();
    mapper.rules::<MaybeParent, FlatDto>().null_checking(true);

    let mut existing = FlatDto {
        id: 0,
        child_id: 9,
        child_name: "old".to_string(),
    };
    mapper
        .from(&MaybeParent { id: 3, child: None })
        .to_existing(&mut existing)
        .unwrap();

    assert_eq!(existing.id, 3);
    // Guarded flattened members are overwritten with their defaults.
    assert_eq!(existing.child_id, 0);
    assert_eq!(existing.child_name, "");
}
