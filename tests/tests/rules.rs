use pretty_assertions::assert_eq;
use remap::{Mappable, Mapper, NameRule};
use tests::*;

#[test]
fn ignored_member_keeps_its_default() {
    let mapper = Mapper::new();
    mapper.rules::<Child, ChildDto>().ignore("name");

    let dto: ChildDto = mapper.map(&child(1, "kept out")).unwrap();
    assert_eq!(dto.id, 1);
    assert_eq!(dto.name, "");
}

#[test]
fn member_rule_path_overrides_name_match() {
    let mapper = Mapper::new();
    mapper.rules::<Order, FlatDto>().for_member("id", "child.id");

    let dto: FlatDto = mapper.map(&order()).unwrap();
    // The explicit rule wins over the same-name `id` match.
    assert_eq!(dto.id, 5);
}

#[test]
fn member_rule_function_computes_the_value() {
    let mapper = Mapper::new();
    mapper
        .rules::<Child, ChildDto>()
        .for_member_with("name", |source: &Child| {
            format!("{}-{}", source.name, source.id)
        });

    let dto: ChildDto = mapper.map(&child(7, "x")).unwrap();
    assert_eq!(dto.name, "x-7");
}

#[derive(Debug, Clone, Default, Mappable)]
struct RenamedDto {
    code: i64,
}

#[test]
fn rename_maps_between_differently_named_members() {
    let mapper = Mapper::new();
    mapper.rules::<Child, RenamedDto>().map_member_to("id", "code");

    let dto: RenamedDto = mapper.map(&child(12, "n")).unwrap();
    assert_eq!(dto.code, 12);
}

#[test]
fn custom_rule_replaces_the_whole_construction() {
    let mapper = Mapper::new();
    mapper.rules::<Child, ChildDto>().set_custom(|source| ChildDto {
        id: i64::from(source.id) * 10,
        name: "custom".to_string(),
    });

    let dto: ChildDto = mapper.map(&child(4, "ignored")).unwrap();
    assert_eq!(dto.id, 40);
    assert_eq!(dto.name, "custom");
}

#[test]
fn custom_rule_applies_to_name_matched_members_of_its_pair() {
    let mapper = Mapper::new();
    mapper.rules::<Child, ChildDto>().set_custom(|source| ChildDto {
        id: i64::from(source.id) + 1000,
        name: source.name.to_uppercase(),
    });

    // The child member of the outer pair is converted through the
    // registered (Child, ChildDto) rule rather than the generator stages.
    let dto: OrderDto = mapper.map(&order()).unwrap();
    assert_eq!(dto.child.id, 1005);
    assert_eq!(dto.child.name, "INNER");
}

#[test]
fn after_copy_applies_to_new_instances() {
    let mapper = Mapper::new();
    mapper
        .rules::<Child, ChildDto>()
        .after_copy(|_, target| target.name.push('!'));

    let dto: ChildDto = mapper.map(&child(1, "hello")).unwrap();
    assert_eq!(dto.name, "hello!");
}

#[test]
fn mappers_are_fully_isolated() {
    let strict = Mapper::new();
    strict.rules::<Child, ChildDto>().ignore("name");

    let lax = Mapper::new();

    let from_strict: ChildDto = strict.map(&child(1, "x")).unwrap();
    let from_lax: ChildDto = lax.map(&child(1, "x")).unwrap();

    assert_eq!(from_strict.name, "");
    assert_eq!(from_lax.name, "x");
}

#[test]
fn rules_after_precompile_have_no_effect() {
    let mapper = Mapper::new();
    mapper.rules::<Child, ChildDto>().precompile().unwrap();
    mapper.rules::<Child, ChildDto>().ignore("name");

    let dto: ChildDto = mapper.map(&child(1, "still here")).unwrap();
    assert_eq!(dto.name, "still here");
}

#[test]
fn unknown_member_is_a_deterministic_config_error() {
    let mapper = Mapper::new();
    mapper.rules::<Child, ChildDto>().ignore("missing");

    let first = mapper.map::<Child, ChildDto>(&child(1, "x")).unwrap_err();
    assert!(first.is_config());

    // The cached rule set still names the bad member; the failure recurs
    // identically until it is corrected.
    let second = mapper.map::<Child, ChildDto>(&child(1, "x")).unwrap_err();
    assert!(second.is_config());
}

#[test]
fn incompatible_member_rule_is_a_config_error() {
    let mapper = Mapper::new();
    mapper.rules::<Child, ChildDto>().for_member("id", "name");

    let err = mapper.map::<Child, ChildDto>(&child(1, "x")).unwrap_err();
    assert!(err.is_config());
}

#[allow(non_snake_case)]
mod case {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, Mappable)]
    pub struct CaseSource {
        pub Id: i32,
    }

    #[derive(Debug, Clone, Default, Mappable)]
    pub struct CaseDto {
        pub id: i64,
    }

    #[test]
    fn insensitive_by_default_sensitive_on_request() {
        let relaxed = Mapper::new();
        let dto: CaseDto = relaxed.map(&CaseSource { Id: 3 }).unwrap();
        assert_eq!(dto.id, 3);

        let strict = Mapper::new();
        strict
            .rules::<CaseSource, CaseDto>()
            .name_rule(NameRule::Sensitive);
        let dto: CaseDto = strict.map(&CaseSource { Id: 3 }).unwrap();
        assert_eq!(dto.id, 0);
    }
}
