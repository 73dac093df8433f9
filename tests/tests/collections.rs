use pretty_assertions::assert_eq;
use remap::Mapper;
use tests::*;

fn basket() -> Basket {
    Basket {
        items: vec![child(1, "a"), child(2, "b"), child(3, "c")],
        tags: vec!["red".to_string(), "blue".to_string(), "red".to_string()],
        codes: vec![4, 5, 6],
    }
}

#[test]
fn sequence_to_linked_list_preserves_order() {
    let mapper = Mapper::new();
    let dto: BasketDto = mapper.map(&basket()).unwrap();

    let ids: Vec<i64> = dto.items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    let names: Vec<&str> = dto.items.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn sequence_to_set_deduplicates() {
    let mapper = Mapper::new();
    let dto: BasketDto = mapper.map(&basket()).unwrap();

    assert_eq!(dto.tags.len(), 2);
    assert!(dto.tags.contains("red"));
    assert!(dto.tags.contains("blue"));
}

#[test]
fn scalar_sequence_widens_each_element() {
    let mapper = Mapper::new();
    let dto: BasketDto = mapper.map(&basket()).unwrap();

    assert_eq!(dto.codes, vec![4i64, 5, 6]);
}

#[test]
fn ordered_set_deque_and_boxed_targets() {
    let mapper = Mapper::new();
    let dto: BasketSorted = mapper.map(&basket()).unwrap();

    let tags: Vec<&str> = dto.tags.iter().map(String::as_str).collect();
    assert_eq!(tags, vec!["blue", "red"]);

    let codes: Vec<i64> = dto.codes.iter().copied().collect();
    assert_eq!(codes, vec![4, 5, 6]);

    let ids: Vec<i64> = dto.items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn element_count_is_preserved() {
    let mapper = Mapper::new();
    let source = Basket {
        items: (0..100).map(|i| child(i, "n")).collect(),
        tags: vec![],
        codes: vec![],
    };
    let dto: BasketDto = mapper.map(&source).unwrap();

    assert_eq!(dto.items.len(), 100);
}
