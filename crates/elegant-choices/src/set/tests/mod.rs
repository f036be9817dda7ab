
use crate::{
    choice::{Choice, ChoiceValue},
    error::MissingChoiceError,
    set::ChoiceSet,
};
use serde_json::json;

fn simple() -> ChoiceSet {
    ChoiceSet::builder("SimpleChoices")
        .choice("FIRST", Choice::new(1, "First"))
        .choice("SECOND", Choice::new(2, "Second"))
        .choice("THIRD", Choice::new(3, "Third"))
        .build()
}

fn metadata() -> ChoiceSet {
    ChoiceSet::builder("MetadataChoices")
        .choice(
            "FIRST",
            Choice::with_meta(1, "First", [("alternative_value", "a")]),
        )
        .choice(
            "SECOND",
            Choice::with_meta(2, "Second", [("alternative_value", "b")]),
        )
        .choice(
            "THIRD",
            Choice::with_meta(3, "Third", [("alternative_value", "c")]),
        )
        .build()
}

fn values(set: &ChoiceSet) -> Vec<ChoiceValue> {
    set.choices().iter().map(Choice::value).collect()
}

#[test]
fn build_sorts_and_names() {
    let set = ChoiceSet::builder("Status")
        .choice("INACTIVE", Choice::new(2, "Inactive"))
        .choice("ACTIVE", Choice::new(1, "Active"))
        .choice("ARCHIVED", Choice::new(9, "Archived"))
        .build();

    assert_eq!(set.name(), "Status");
    assert_eq!(values(&set), vec![1, 2, 9]);

    let names: Vec<_> = set.choices().iter().map(Choice::name).collect();
    assert_eq!(
        names,
        vec![Some("ACTIVE"), Some("INACTIVE"), Some("ARCHIVED")]
    );
}

#[test]
fn simple_choices_scenario() {
    let set = simple();

    assert_eq!(values(&set), vec![1, 2, 3]);
    assert_eq!(set.choices()[0].name(), Some("FIRST"));

    let pairs: Vec<(ChoiceValue, &str)> = set
        .iter()
        .map(|(choice, label)| (choice.value(), label))
        .collect();
    assert_eq!(pairs, vec![(1, "First"), (2, "Second"), (3, "Third")]);

    assert_eq!(
        set.to_pairs(),
        vec![
            (1, "First".to_string()),
            (2, "Second".to_string()),
            (3, "Third".to_string()),
        ]
    );
}

#[test]
fn iteration_pairs_behave_like_value_label() {
    let set = simple();

    for ((choice, label), expected) in set.iter().zip(set.choices()) {
        assert!(std::ptr::eq(choice, expected));
        assert_eq!(*choice, expected.value());
        assert_eq!(label, expected.label());
    }

    let mut pairs = (&set).into_iter();
    assert_eq!(pairs.len(), 3);
    assert_eq!(pairs.next_back().map(|(c, _)| c.value()), Some(3));
    assert_eq!(pairs.len(), 2);
}

#[test]
fn choices_by_value_points_into_choices() {
    let set = simple();
    let by_value = set.choices_by_value();

    assert_eq!(by_value.len(), 3);
    for choice in set.choices() {
        assert!(std::ptr::eq(&by_value[choice.value()], choice));
    }
    assert_eq!(by_value[2].name(), Some("SECOND"));
    assert!(by_value.contains(3));
    assert!(!by_value.contains(4));
    assert!(by_value.get(4).is_none());

    let keys: Vec<ChoiceValue> = by_value.iter().map(|(value, _)| value).collect();
    assert_eq!(keys, vec![1, 2, 3]);
}

#[test]
fn duplicate_values_keep_both_and_later_wins_index() {
    let set = ChoiceSet::builder("Dupes")
        .choice("EARLY", Choice::new(5, "Early"))
        .choice("LOW", Choice::new(1, "Low"))
        .choice("LATE", Choice::new(5, "Late"))
        .build();

    assert_eq!(values(&set), vec![1, 5, 5]);
    assert_eq!(set.choices()[1].name(), Some("EARLY"));
    assert_eq!(set.choices()[2].name(), Some("LATE"));

    let by_value = set.choices_by_value();
    assert_eq!(by_value.len(), 2);
    assert_eq!(by_value[5].name(), Some("LATE"));
    assert!(std::ptr::eq(&by_value[5], &set.choices()[2]));

    assert_eq!(set.duplicate_values(), vec![5]);
    assert!(simple().duplicate_values().is_empty());
}

#[test]
fn empty_set() {
    let set = ChoiceSet::builder("Empty").build();

    assert!(set.is_empty());
    assert!(set.choices().is_empty());
    assert!(set.choices_by_value().is_empty());
    assert_eq!(set.iter().count(), 0);
    assert!(matches!(
        set.get_choice_by_meta_value("alternative_value", "a"),
        Err(MissingChoiceError::MetaValue { .. })
    ));
}

#[test]
fn meta_lookup_returns_first_match() {
    let set = metadata();

    let found = set
        .get_choice_by_meta_value("alternative_value", "a")
        .unwrap();
    assert_eq!(found.name(), Some("FIRST"));
    assert!(std::ptr::eq(found, &set.choices()[0]));

    let found = set
        .get_choice_by_meta_value("alternative_value", "c")
        .unwrap();
    assert_eq!(found.value(), 3);
}

#[test]
fn meta_lookup_scans_in_value_order() {
    let set = ChoiceSet::builder("Shared")
        .choice("B", Choice::with_meta(2, "B", [("group", "x")]))
        .choice("A", Choice::with_meta(1, "A", [("group", "x")]))
        .build();

    let found = set.get_choice_by_meta_value("group", "x").unwrap();
    assert_eq!(found.name(), Some("A"));
}

#[test]
fn meta_lookup_misses() {
    let err = metadata()
        .get_choice_by_meta_value("alternative_value", "z")
        .unwrap_err();

    assert_eq!(
        err,
        MissingChoiceError::MetaValue {
            key: "alternative_value".to_string(),
            value: json!("z"),
        }
    );
    assert_eq!(err.to_string(), "z is not an available choice!");

    // no metadata at all
    assert!(
        simple()
            .get_choice_by_meta_value("alternative_value", "a")
            .is_err()
    );

    // absent key never matches null
    assert!(
        metadata()
            .get_choice_by_meta_value("missing", json!(null))
            .is_err()
    );
}

#[test]
fn meta_lookup_compares_typed_values() {
    let set = ChoiceSet::builder("Typed")
        .choice("ONE", Choice::with_meta(1, "One", [("weight", 10)]))
        .choice("TWO", Choice::with_meta(2, "Two", [("weight", json!("10"))]))
        .build();

    assert_eq!(set.get_choice_by_meta_value("weight", 10).unwrap().value(), 1);
    assert_eq!(
        set.get_choice_by_meta_value("weight", "10").unwrap().value(),
        2
    );
}

#[test]
fn meta_lookup_matches_numbers_across_representations() {
    let set = ChoiceSet::builder("Weights")
        .choice("LIGHT", Choice::with_meta(1, "Light", [("w", 1)]))
        .choice("HEAVY", Choice::with_meta(2, "Heavy", [("w", 2.5)]))
        .build();

    assert_eq!(set.get_choice_by_meta_value("w", 1.0).unwrap().value(), 1);
    assert_eq!(set.get_choice_by_meta_value("w", 1_u8).unwrap().value(), 1);
    assert_eq!(set.get_choice_by_meta_value("w", 2.5).unwrap().value(), 2);
    assert!(set.get_choice_by_meta_value("w", 3.0).is_err());
}

#[test]
fn redeclaring_a_copy_leaves_the_original_named() {
    let first = simple();
    let copy = first.choices()[0].clone();

    let second = ChoiceSet::builder("Other").choice("OTHER", copy).build();

    assert_eq!(first.choices()[0].name(), Some("FIRST"));
    assert_eq!(second.choices()[0].name(), Some("OTHER"));
    assert_eq!(second.choices()[0], first.choices()[0]);
}

#[test]
fn lookup_by_value_and_name() {
    let set = simple();

    assert_eq!(set.get(2).unwrap().label(), "Second");
    assert_eq!(
        set.get(7).unwrap_err(),
        MissingChoiceError::Value { value: 7 }
    );

    assert_eq!(set.by_name("THIRD").unwrap().value(), 3);
    assert!(matches!(
        set.by_name("FOURTH"),
        Err(MissingChoiceError::Name { .. })
    ));

    assert_eq!(set.label_for(1), Some("First"));
    assert_eq!(set.label_for(0), None);
}

#[test]
fn builder_accepts_bulk_declarations() {
    let mut builder = ChoiceSet::builder("Bulk").choices([
        ("B", Choice::new(2, "B")),
        ("A", Choice::new(1, "A")),
    ]);
    builder.extend([("C", Choice::new(3, "C"))]);
    let set = builder.build();

    assert_eq!(values(&set), vec![1, 2, 3]);
    assert_eq!(set.by_name("C").unwrap().value(), 3);
}

#[test]
fn serializes_name_and_sorted_choices() {
    let set = ChoiceSet::builder("Status")
        .choice("INACTIVE", Choice::new(2, "Inactive"))
        .choice("ACTIVE", Choice::new(1, "Active"))
        .build();

    assert_eq!(
        serde_json::to_value(&set).unwrap(),
        json!({
            "name": "Status",
            "choices": [
                { "value": 1, "label": "Active", "name": "ACTIVE" },
                { "value": 2, "label": "Inactive", "name": "INACTIVE" },
            ],
        })
    );
}
