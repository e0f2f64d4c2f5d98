//! Registry behaviour driven through the public API: gender normalization,
//! overwrite semantics, one-way edges and the loose relationship vocabulary.

use kinship_core::{
    CountedKind, FamilyError, FamilyTree, Gender, PersonName, RelationshipKind,
};
use rstest::rstest;

fn name(s: &str) -> PersonName {
    PersonName::from(s)
}

fn tree_with(names: &[&str]) -> FamilyTree {
    let mut tree = FamilyTree::new();
    for n in names {
        tree.add_person(name(n), Gender::Unknown);
    }
    tree
}

// ---------------------------------------------------------------------------
// 1. Gender normalization
// ---------------------------------------------------------------------------

#[rstest]
#[case("female", Gender::Female)]
#[case("male", Gender::Male)]
#[case("F", Gender::Female)]
#[case("Male", Gender::Male)]
#[case("FM", Gender::Female)]
#[case("mf", Gender::Female)]
#[case("Mf", Gender::Male)]
#[case("woman", Gender::Male)]
#[case("", Gender::Unknown)]
#[case("x", Gender::Other("x".to_owned()))]
#[case("unknown", Gender::Other("unknown".to_owned()))]
fn gender_normalization(#[case] raw: &str, #[case] expected: Gender) {
    assert_eq!(Gender::normalize(raw), expected);
}

#[test]
fn passthrough_gender_displays_raw_token() {
    assert_eq!(Gender::normalize("nb").to_string(), "nb");
    assert_eq!(Gender::normalize("").to_string(), "unknown");
}

// ---------------------------------------------------------------------------
// 2. Registry operations
// ---------------------------------------------------------------------------

#[test]
fn added_person_has_no_buckets() {
    let tree = tree_with(&["Alice"]);
    assert_eq!(tree.count(CountedKind::Sons, &name("Alice")), Ok(None));
    assert!(tree.father_of(&name("Alice")).expect("exists").is_none());
}

#[test]
fn readding_resets_relationships() {
    let mut tree = tree_with(&["Bob", "Carl"]);
    tree.connect(&name("Bob"), RelationshipKind::from("son"), &name("Carl"))
        .expect("connect");
    assert_eq!(tree.count(CountedKind::Sons, &name("Bob")), Ok(Some(1)));

    tree.add_person(name("Bob"), Gender::Male);
    assert_eq!(tree.count(CountedKind::Sons, &name("Bob")), Ok(None));
}

#[test]
fn father_edge_is_not_reciprocal() {
    let mut tree = tree_with(&["A", "B"]);
    tree.connect(&name("B"), RelationshipKind::father(), &name("A"))
        .expect("connect");

    let father = tree.father_of(&name("B")).expect("B").expect("father");
    assert_eq!(father.name, name("A"));
    assert!(tree.father_of(&name("A")).expect("A").is_none());
}

#[test]
fn first_father_wins() {
    let mut tree = tree_with(&["Kid", "Dad1", "Dad2"]);
    for dad in ["Dad1", "Dad2"] {
        tree.connect(&name("Kid"), RelationshipKind::father(), &name(dad))
            .expect("connect");
    }
    let father = tree.father_of(&name("Kid")).expect("Kid").expect("father");
    assert_eq!(father.name, name("Dad1"));
}

#[test]
fn counts_include_duplicates() {
    let mut tree = tree_with(&["B", "S"]);
    for _ in 0..2 {
        tree.connect(&name("B"), RelationshipKind::from("son"), &name("S"))
            .expect("connect");
    }
    assert_eq!(tree.count(CountedKind::Sons, &name("B")), Ok(Some(2)));
}

#[rstest]
#[case("Ghost", "Bob")]
#[case("Bob", "Ghost")]
fn connect_with_unknown_person_fails(#[case] from: &str, #[case] to: &str) {
    let mut tree = tree_with(&["Bob"]);
    let err = tree
        .connect(&name(from), RelationshipKind::from("son"), &name(to))
        .unwrap_err();
    assert!(matches!(err, FamilyError::PersonNotFound { .. }));
    assert_eq!(err.to_string(), "Person not found in the family tree.");
    assert_eq!(tree.count(CountedKind::Sons, &name("Bob")), Ok(None));
}

#[test]
fn connect_accepts_kinds_outside_vocabulary() {
    let mut tree = tree_with(&["A", "B"]);
    let kind = RelationshipKind::from("hiking");
    assert!(FamilyTree::validate_relationship(&kind).is_err());
    tree.connect(&name("A"), kind.clone(), &name("B"))
        .expect("connect is not gated on the vocabulary");
    let a = tree.get(&name("A")).expect("A");
    assert_eq!(a.bucket(&kind).map(|b| b.len()), Some(1));
}

#[test]
fn queries_on_unknown_person_fail() {
    let tree = FamilyTree::new();
    assert!(tree.is_empty());
    assert!(matches!(
        tree.count(CountedKind::Wives, &name("Nobody")),
        Err(FamilyError::PersonNotFound { .. })
    ));
    assert!(tree.father_of(&name("Nobody")).is_err());
}
