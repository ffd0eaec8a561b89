use std::collections::HashMap;

use barviz_sort_core::{
    error::SortError,
    step::Trace,
    strategies::{merge, quick, Strategy},
};

fn is_sorted(values: &[i32]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

fn counts(values: &[i32]) -> HashMap<i32, usize> {
    let mut map = HashMap::new();
    for v in values {
        *map.entry(*v).or_insert(0) += 1;
    }
    map
}

fn fixture(name: &str) -> Vec<i32> {
    barviz_test_fixtures::arrays::load(name).expect("fixture should load")
}

#[test]
fn all_strategies_sort_all_fixtures() {
    for name in barviz_test_fixtures::arrays::keys() {
        let input = fixture(&name);
        for strategy in Strategy::ALL {
            let mut values = input.clone();
            let _ = strategy.sort(&mut values);
            assert!(
                is_sorted(&values),
                "{} left fixture '{name}' unsorted: {values:?}",
                strategy.name()
            );
            assert_eq!(
                counts(&values),
                counts(&input),
                "{} changed the multiset of fixture '{name}'",
                strategy.name()
            );
        }
    }
}

#[test]
fn empty_and_singleton_produce_empty_traces() {
    for strategy in Strategy::ALL {
        let mut empty: [i32; 0] = [];
        assert!(strategy.sort(&mut empty).is_empty());

        let mut one = [9];
        assert!(strategy.sort(&mut one).is_empty());
        assert_eq!(one, [9]);
    }
}

#[test]
fn all_equal_elements_survive_every_strategy() {
    for strategy in Strategy::ALL {
        let mut values = fixture("all-equal");
        let _ = strategy.sort(&mut values);
        assert_eq!(values, fixture("all-equal"));
    }
}

#[test]
fn bubble_step_count_and_result() {
    let mut values = fixture("small-mixed");
    let trace = Strategy::Bubble.sort(&mut values);
    assert_eq!(values, [1, 3, 5, 8]);
    assert_eq!(trace.len(), 6); // n(n-1)/2 for n = 4
}

#[test]
fn bubble_on_sorted_input_only_compares() {
    let mut values = fixture("sorted-8");
    let trace = Strategy::Bubble.sort(&mut values);
    assert!(trace.iter().all(|s| !s.swap));
    assert_eq!(trace.len(), 8 * 7 / 2);
}

#[test]
fn resorting_sorted_output_is_identity() {
    for strategy in Strategy::ALL {
        let mut values = fixture("shuffled-32");
        let _ = strategy.sort(&mut values);
        let sorted = values.clone();
        let _ = strategy.sort(&mut values);
        assert_eq!(values, sorted, "{} is not idempotent", strategy.name());
    }
}

#[test]
fn quick_two_element_scenario() {
    // array[start] >= array[end] must pick end's value as pivot, land it at
    // index 0, and leave the pair ascending.
    let mut values = [2, 1];
    let trace = Strategy::Quick.sort(&mut values);
    assert_eq!(values, [1, 2]);
    assert_eq!(trace.len(), 3);
    assert_eq!(trace.steps[0].indices, Some((1, 1)));
    assert!(trace.steps[1].is_marker());
    assert_eq!(trace.steps[2].indices, Some((0, 1)));
    assert!(trace.steps[2].swap);
}

#[test]
fn range_entry_points_validate() {
    let mut values = [3, 1, 2];
    assert_eq!(
        merge::sort_range(&mut values, 0, 3).unwrap_err(),
        SortError::InvalidRange {
            start: 0,
            end: 3,
            len: 3
        }
    );
    assert_eq!(
        quick::sort_range(&mut values, 2, 1).unwrap_err(),
        SortError::InvalidRange {
            start: 2,
            end: 1,
            len: 3
        }
    );
    // Failed validation must not touch the sequence.
    assert_eq!(values, [3, 1, 2]);

    // A singleton range is a valid no-op.
    let trace: Trace = merge::sort_range(&mut values, 1, 1).unwrap();
    assert!(trace.is_empty());
    assert_eq!(values, [3, 1, 2]);
}

#[test]
fn sub_range_sorts_leave_the_rest_alone() {
    let input = fixture("reverse-16");

    let mut values = input.clone();
    let _ = merge::sort_range(&mut values, 4, 11).unwrap();
    assert!(is_sorted(&values[4..=11]));
    assert_eq!(values[..4], input[..4]);
    assert_eq!(values[12..], input[12..]);

    let mut values = input.clone();
    let _ = quick::sort_range(&mut values, 4, 11).unwrap();
    assert!(is_sorted(&values[4..=11]));
    assert_eq!(values[..4], input[..4]);
    assert_eq!(values[12..], input[12..]);
}
