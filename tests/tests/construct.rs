use pretty_assertions::assert_eq;
use remap::{Mappable, Mapper};
use tests::*;

#[test]
fn scalar_members_copy_with_widening() {
    let mapper = Mapper::new();
    let dto: OrderDto = mapper.map(&order()).unwrap();

    assert_eq!(dto.id, 10);
    assert_eq!(dto.name, "Test");
}

#[test]
fn nested_child_maps_recursively() {
    let mapper = Mapper::new();
    let dto: OrderDto = mapper.map(&order()).unwrap();

    assert_eq!(dto.child, ChildDto { id: 5, name: "Inner".to_string() });
}

#[test]
fn child_members_flatten_by_concatenated_name() {
    let mapper = Mapper::new();
    let dto: OrderDto = mapper.map(&order()).unwrap();

    assert_eq!(dto.child_id, 5);
    assert_eq!(dto.child_name, "Inner");
}

#[test]
fn child_sequence_maps_each_element() {
    let mapper = Mapper::new();
    let dto: OrderDto = mapper.map(&order()).unwrap();

    assert_eq!(
        dto.children,
        vec![
            ChildDto { id: 1, name: "a".to_string() },
            ChildDto { id: 2, name: "b".to_string() },
            ChildDto { id: 3, name: "c".to_string() },
        ]
    );
}

#[test]
fn unmatched_target_members_keep_defaults() {
    let mapper = Mapper::new();
    let dto: FlatDto = mapper.map(&child(9, "x")).unwrap();

    assert_eq!(dto.id, 9);
    assert_eq!(dto.child_id, 0);
    assert_eq!(dto.child_name, "");
}

#[test]
fn enum_member_converts_to_integer() {
    let mapper = Mapper::new();
    let source = Painted { id: 1, color: Color::Green };
    let dto: PaintedDto = mapper.map(&source).unwrap();

    assert_eq!(dto.id, 1);
    assert_eq!(dto.color, 1);
}

#[test]
fn integer_member_converts_back_to_enum() {
    let mapper = Mapper::new();
    let source = PaintedDto { id: 9, color: 2 };
    let painted: Painted = mapper.map(&source).unwrap();

    assert_eq!(painted.color, Color::Blue);
    // i64 never narrows back into the i32 member.
    assert_eq!(painted.id, 0);
}

#[test]
fn scalar_only_skips_structural_members() {
    let mapper = Mapper::new();
    let dto: OrderDto = mapper.scalars_from(&order()).to().unwrap();

    assert_eq!(dto.id, 10);
    assert_eq!(dto.name, "Test");
    assert_eq!(dto.child, ChildDto::default());
    assert_eq!(dto.child_id, 0);
    assert_eq!(dto.child_name, "");
    assert!(dto.children.is_empty());
}

#[test]
fn to_with_runs_on_the_new_instance() {
    let mapper = Mapper::new();
    let dto: ChildDto = mapper
        .from(&child(1, "a"))
        .to_with(|dto: &mut ChildDto| dto.id += 100)
        .unwrap();

    assert_eq!(dto.id, 101);
}

#[test]
fn skipped_members_stay_out_of_the_shape() {
    let mapper = Mapper::new();
    let audited: Audited = mapper.map(&child(3, "x")).unwrap();

    assert_eq!(audited.id, 3);
    assert!(!audited.seen);
}

#[test]
fn derive_round_trips_values() {
    let source = order();
    let restored = Order::load(source.to_value()).unwrap();

    assert_eq!(restored.id, source.id);
    assert_eq!(restored.name, source.name);
    assert_eq!(restored.child, source.child);
    assert_eq!(restored.children, source.children);
}

#[test]
fn default_mapper_surface_works() {
    let dto: ChildDto = remap::from(&child(4, "d")).to().unwrap();
    assert_eq!(dto, ChildDto { id: 4, name: "d".to_string() });
}

#[test]
fn repeated_maps_reuse_the_cached_plan() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mapper = Mapper::new();
    let first: OrderDto = mapper.map(&order()).unwrap();
    let second: OrderDto = mapper.map(&order()).unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(first.children, second.children);
}
