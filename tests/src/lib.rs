//! Shared model types for the integration suites.

use remap::Mappable;

use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};

#[derive(Debug, Clone, PartialEq, Mappable)]
pub struct Child {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Mappable)]
pub struct ChildDto {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Mappable)]
pub struct Order {
    pub id: u16,
    pub name: String,
    pub child: Child,
    pub children: Vec<Child>,
}

#[derive(Debug, Clone, Default, Mappable)]
pub struct OrderDto {
    pub id: i32,
    pub name: String,
    pub child: ChildDto,
    pub child_id: i32,
    pub child_name: String,
    pub children: Vec<ChildDto>,
}

#[derive(Debug, Clone, Mappable)]
pub struct MaybeParent {
    pub id: i32,
    pub child: Option<Child>,
}

#[derive(Debug, Clone, Default, Mappable)]
pub struct FlatDto {
    pub id: i32,
    pub child_id: i32,
    pub child_name: String,
}

#[derive(Debug, Clone, Mappable)]
pub struct Basket {
    pub items: Vec<Child>,
    pub tags: Vec<String>,
    pub codes: Vec<i32>,
}

#[derive(Debug, Clone, Mappable)]
pub struct BasketDto {
    pub items: LinkedList<ChildDto>,
    pub tags: HashSet<String>,
    pub codes: Vec<i64>,
}

#[derive(Debug, Clone, Mappable)]
pub struct BasketSorted {
    pub tags: BTreeSet<String>,
    pub codes: VecDeque<i64>,
    pub items: Box<[ChildDto]>,
}

#[derive(Debug, Clone, Mappable)]
pub struct IdOnly {
    pub id: i32,
}

#[derive(Debug, Clone, Mappable)]
pub struct Audited {
    pub id: i32,
    #[mappable(skip)]
    pub seen: bool,
}

#[derive(Debug, Clone, Default, Mappable)]
pub struct NestedDto {
    pub id: i64,
    pub child: ChildDto,
}

#[derive(Debug, Clone, Mappable)]
pub struct MaybeList {
    pub items: Option<Vec<Child>>,
}

#[derive(Debug, Clone, Default, Mappable)]
pub struct ListDto {
    pub items: Vec<ChildDto>,
}

#[derive(Debug, Clone, Copy, PartialEq, Mappable)]
pub enum Color {
    Red,
    Green,
    Blue,
}

#[derive(Debug, Clone, Mappable)]
pub struct Painted {
    pub id: i32,
    pub color: Color,
}

#[derive(Debug, Clone, Default, Mappable)]
pub struct PaintedDto {
    pub id: i64,
    pub color: i64,
}

pub fn child(id: i32, name: &str) -> Child {
    Child {
        id,
        name: name.to_string(),
    }
}

pub fn order() -> Order {
    Order {
        id: 10,
        name: "Test".to_string(),
        child: child(5, "Inner"),
        children: vec![child(1, "a"), child(2, "b"), child(3, "c")],
    }
}
