//! Difference engine scenarios: emptiness, normalization, leaves, dates,
//! arrays, objects and nested paths.
//!
//! All tests are pure; values are built from `json!` literals.

mod common;

use chrono::{TimeZone, Utc};
use common::{inspection_rows, v};
use serde_json::json;
use sheetdiff_core::options::DEFAULT_ABSENT_MARKER;
use sheetdiff_core::{
    compare, find_differences, find_differences_at, is_equal, DiffClassification, Difference,
    DifferenceKind, Value,
};

// ---------------------------------------------------------------------------
// Emptiness
// ---------------------------------------------------------------------------

fn empty_values() -> Vec<Value> {
    vec![
        Value::Null,
        v(json!("")),
        v(json!([])),
        v(json!({})),
        v(json!([null, ""])),
        v(json!({"a": null, "b": ""})),
    ]
}

#[test]
fn test_all_empty_values_are_pairwise_equal() {
    let empties = empty_values();
    for x in &empties {
        for y in &empties {
            assert!(is_equal(x, y), "{:?} should equal {:?}", x, y);
        }
    }
}

#[test]
fn test_nested_empty_composites_are_empty() {
    assert!(is_equal(&v(json!({"rows": [{}, [null]]})), &Value::Null));
}

#[test]
fn test_zero_and_false_are_not_empty() {
    assert!(!is_equal(&v(json!(0)), &Value::Null));
    assert!(!is_equal(&v(json!(false)), &v(json!(""))));
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

#[test]
fn test_number_equals_its_string_spelling() {
    assert!(is_equal(&v(json!(5)), &v(json!("5"))));
    assert!(is_equal(&v(json!(2.5)), &v(json!("2.5"))));
}

#[test]
fn test_string_spellings_are_not_normalized() {
    let diffs = find_differences(&v(json!("5")), &v(json!("05")));
    assert_eq!(diffs, vec![Difference::changed("", v(json!("5")), v(json!("05")))]);
}

#[test]
fn test_bool_does_not_equal_its_string_spelling() {
    assert!(!is_equal(&v(json!(true)), &v(json!("true"))));
    assert!(is_equal(&v(json!(true)), &v(json!(true))));
}

#[test]
fn test_leaf_records_keep_raw_values() {
    let diffs = find_differences(&v(json!(5)), &v(json!("6")));
    assert_eq!(diffs.len(), 1);
    assert_eq!(diffs[0].original, Value::Number(5.0));
    assert_eq!(diffs[0].current, Value::String("6".to_string()));
}

// ---------------------------------------------------------------------------
// Leaves and type mismatches
// ---------------------------------------------------------------------------

#[test]
fn test_null_against_non_empty_composite_is_one_record() {
    let diffs = find_differences(&Value::Null, &v(json!({"a": {"b": 1}})));
    assert_eq!(diffs.len(), 1);
    assert_eq!(diffs[0].path, "");
    assert_eq!(diffs[0].original, Value::Null);
}

#[test]
fn test_scalar_against_composite_stops_recursion() {
    let diffs = find_differences(&v(json!({"a": 1})), &v(json!({"a": [1, 2]})));
    assert_eq!(diffs.len(), 1);
    assert_eq!(diffs[0].path, "a");
    assert_eq!(diffs[0].current, v(json!([1, 2])));
}

#[test]
fn test_array_against_object_is_leaf_mismatch() {
    let diffs = find_differences(&v(json!({"x": [1, 2]})), &v(json!({"x": {"0": 1, "1": 2}})));
    assert_eq!(diffs.len(), 1);
    assert_eq!(diffs[0].path, "x");
    assert_eq!(diffs[0].kind, DifferenceKind::Changed);
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

#[test]
fn test_different_dates_reported_as_iso_strings() {
    let a = Value::Date(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    let b = Value::Date(Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap());

    let diffs = find_differences(&a, &b);
    assert_eq!(
        diffs,
        vec![Difference::changed(
            "",
            v(json!("2024-01-01T00:00:00.000Z")),
            v(json!("2024-01-02T00:00:00.000Z"))
        )]
    );
}

#[test]
fn test_equal_instants_have_no_difference() {
    let at = Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap();
    assert!(is_equal(&Value::Date(at), &Value::Date(at)));
}

#[test]
fn test_date_against_iso_string_is_leaf_with_raw_date() {
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let diffs = find_differences(&Value::Date(at), &v(json!("2024-01-01T00:00:00.000Z")));
    assert_eq!(diffs.len(), 1);
    assert_eq!(diffs[0].original, Value::Date(at));
}

#[test]
fn test_date_against_array_is_leaf_mismatch() {
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let diffs = find_differences(&Value::Date(at), &v(json!([1])));
    assert_eq!(diffs.len(), 1);
    assert_eq!(diffs[0].path, "");
}

// ---------------------------------------------------------------------------
// Arrays
// ---------------------------------------------------------------------------

#[test]
fn test_trailing_empty_element_tolerated() {
    assert!(is_equal(&v(json!([1, 2])), &v(json!([1, 2, null]))));
    assert!(is_equal(&v(json!([1, 2, ""])), &v(json!([1, 2]))));
}

#[test]
fn test_extra_element_reported_at_index() {
    let diffs = find_differences(&v(json!([1, 2])), &v(json!([1, 2, 3])));
    assert_eq!(diffs, vec![Difference::changed("[2]", Value::Null, v(json!(3)))]);
}

#[test]
fn test_array_differences_in_ascending_index_order() {
    let diffs = find_differences(&v(json!([1, 2, 3, 4])), &v(json!([9, 2, 8])));
    let paths: Vec<&str> = diffs.iter().map(|d| d.path.as_str()).collect();
    assert_eq!(paths, vec!["[0]", "[2]", "[3]"]);
    assert_eq!(diffs[2].current, Value::Null);
}

// ---------------------------------------------------------------------------
// Objects
// ---------------------------------------------------------------------------

#[test]
fn test_absent_key_against_empty_value_tolerated() {
    assert!(find_differences(&v(json!({"a": 1})), &v(json!({"a": 1, "b": ""}))).is_empty());
    assert!(find_differences(&v(json!({"a": 1, "b": [null]})), &v(json!({"a": 1}))).is_empty());
}

#[test]
fn test_key_added_on_current_side() {
    let diffs = find_differences(&v(json!({"a": 1})), &v(json!({"a": 1, "b": 2})));
    assert_eq!(
        diffs,
        vec![Difference {
            path: "b".to_string(),
            kind: DifferenceKind::MissingInOriginal,
            original: Value::from(DEFAULT_ABSENT_MARKER),
            current: v(json!(2)),
        }]
    );
}

#[test]
fn test_key_removed_on_current_side() {
    let diffs = find_differences(&v(json!({"a": 1, "b": {"c": 3}})), &v(json!({"a": 1})));
    assert_eq!(diffs.len(), 1);
    assert_eq!(diffs[0].kind, DifferenceKind::MissingInCurrent);
    assert_eq!(diffs[0].original, v(json!({"c": 3})));
    assert_eq!(diffs[0].current, Value::from(DEFAULT_ABSENT_MARKER));
    assert_eq!(diffs[0].current, Value::from("属性不存在"));
}

#[test]
fn test_tiny_and_huge_numbers_match_their_exponent_text() {
    assert!(is_equal(&Value::from(1e-7), &Value::from("1e-7")));
    assert!(!is_equal(&Value::from(1e-7), &Value::from("0.0000001")));
    assert!(is_equal(&Value::from(1e21), &Value::from("1e+21")));
    assert!(is_equal(&Value::from(0.000001), &Value::from("0.000001")));
}

#[test]
fn test_object_keys_visited_in_sorted_order() {
    let diffs = find_differences(
        &v(json!({"zeta": 1, "alpha": 1, "mid": 1})),
        &v(json!({"mid": 2, "zeta": 2, "alpha": 2})),
    );
    let paths: Vec<&str> = diffs.iter().map(|d| d.path.as_str()).collect();
    assert_eq!(paths, vec!["alpha", "mid", "zeta"]);
}

// ---------------------------------------------------------------------------
// Paths
// ---------------------------------------------------------------------------

#[test]
fn test_nested_path_through_array_and_object() {
    let diffs = find_differences(&v(json!({"x": [{"y": 1}]})), &v(json!({"x": [{"y": 2}]})));
    assert_eq!(diffs, vec![Difference::changed("x[0].y", v(json!(1)), v(json!(2)))]);
}

#[test]
fn test_explicit_prefix_is_kept() {
    let diffs = find_differences_at(&v(json!([1])), &v(json!([2])), "rows");
    assert_eq!(diffs[0].path, "rows[0]");
}

// ---------------------------------------------------------------------------
// Reports over realistic sheet data
// ---------------------------------------------------------------------------

#[test]
fn test_unchanged_snapshot_is_identical() {
    let rows = v(inspection_rows());
    let report = compare(&rows, &rows.clone());
    assert_eq!(report.classification, DiffClassification::Identical);
    assert!(!report.is_changed());
}

#[test]
fn test_cleared_cells_and_retyped_ids_are_equivalent() {
    let original = inspection_rows();
    let mut current = original.clone();
    // Editor writes "" where the backend sent null, adds an empty optional
    // cell and stores numeric ids as text.
    current[2]["itemValues"][0]["inspectValue"] = json!("");
    current[1]["itemValues"][0]["sampleIdentification"] = json!("");
    current[0]["itemValues"][0]["id"] = json!("47");

    let report = compare(&v(original), &v(current));
    assert_eq!(report.classification, DiffClassification::Equivalent);
    assert!(report.is_empty());
}

#[test]
fn test_edited_cells_are_located() {
    let original = inspection_rows();
    let mut current = original.clone();
    current[0]["itemValues"][1]["checkConclusion"] = json!("1");
    current[2]["itemValues"][1]["inspectValue"] = json!("3.2");
    current[1]["itemValues"][0]["sampleIdentification"] = json!("标识2");

    let report = compare(&v(original), &v(current));
    assert_eq!(report.classification, DiffClassification::Changed);
    assert_eq!(
        report.changed_paths(),
        vec![
            "[0].itemValues[1].checkConclusion",
            "[1].itemValues[0].sampleIdentification",
            "[2].itemValues[1].inspectValue",
        ]
    );
    assert_eq!(report.touched_roots(), vec!["[0]", "[1]", "[2]"]);
    assert_eq!(
        report.differences[1].kind,
        DifferenceKind::MissingInOriginal
    );
    assert_eq!(report.differences_under("[2]").count(), 1);
}

#[test]
fn test_removed_row_reported_once() {
    let original = inspection_rows();
    let mut current = original.clone();
    if let Some(rows) = current.as_array_mut() {
        rows.pop();
    }

    let diffs = find_differences(&v(original.clone()), &v(current));
    assert_eq!(diffs.len(), 1);
    assert_eq!(diffs[0].path, "[2]");
    assert_eq!(diffs[0].original, v(original[2].clone()));
    assert_eq!(diffs[0].current, Value::Null);
}
