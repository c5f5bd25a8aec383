use adapt_types::felt::FIELD_PRIME;
use adapt_types::num_bigint::BigInt;
use adapt_types::value::CairoValue;
use indexmap::IndexMap;
use serde_json::json;

use crate::common::fixtures::{cairo_0_adapter, cairo_1_adapter};
use crate::common::utils::{as_raw_response, value};

#[test]
fn plain_struct_round_trip() {
    let adapter = cairo_0_adapter();
    let input = value(json!({
        "line": { "start": { "x": 1, "y": 2 }, "end": { "x": 3, "y": 4 } }
    }));

    let adapted = adapter.adapt_input("echo_line", &input).unwrap();
    let restored = adapter.adapt_output("echo_line", &as_raw_response(&adapted)).unwrap();
    assert_eq!(restored, input);
}

#[test]
fn negative_inputs_come_back_as_field_residues() {
    let adapter = cairo_0_adapter();
    let adapted = adapter.adapt_input("identity", &value(json!({ "a": -1, "b": 2 }))).unwrap();
    let restored = adapter.adapt_output("identity", &as_raw_response(&adapted)).unwrap();

    let residue = &*FIELD_PRIME - 1_u8;
    let mut expected = IndexMap::new();
    expected.insert("a".to_string(), CairoValue::Number(residue));
    expected.insert("b".to_string(), CairoValue::Number(BigInt::from(2)));
    assert_eq!(restored, CairoValue::Object(expected));
}

#[test]
fn legacy_array_round_trip() {
    let adapter = cairo_0_adapter();
    let adapted = adapter.adapt_input("echo_array", &value(json!({ "items": [1, 2, 3] }))).unwrap();
    assert_eq!(adapted, ["3", "1", "2", "3"]);

    // the output object additionally exposes the length holder
    let restored = adapter.adapt_output("echo_array", &as_raw_response(&adapted)).unwrap();
    assert_eq!(restored, value(json!({ "items_len": 3, "items": [1, 2, 3] })));
}

#[test]
fn named_tuple_round_trip() {
    let adapter = cairo_0_adapter();
    let input = value(json!({ "pt": { "x": 1, "y": 2 } }));
    let adapted = adapter.adapt_input("echo_named_tuple", &input).unwrap();
    assert_eq!(adapted, ["1", "2"]);

    let restored = adapter.adapt_output("echo_named_tuple", &as_raw_response(&adapted)).unwrap();
    assert_eq!(restored, input);
}

#[test]
fn nested_tuple_round_trip() {
    let adapter = cairo_0_adapter();
    let input = value(json!({ "pair": [5, [6, 7]] }));
    let adapted = adapter.adapt_input("echo_nested_tuple", &input).unwrap();
    let restored = adapter.adapt_output("echo_nested_tuple", &as_raw_response(&adapted)).unwrap();
    assert_eq!(restored, input);
}

#[test]
fn modern_array_of_structs_round_trip() {
    let adapter = cairo_1_adapter();
    let input = value(json!({ "points": [{ "x": 1, "y": 2 }, { "x": 3, "y": 4 }] }));
    let adapted = adapter.adapt_input("echo_points", &input).unwrap();
    let restored = adapter.adapt_output("echo_points", &as_raw_response(&adapted)).unwrap();
    assert_eq!(restored, input);
}

#[test]
fn u256_round_trip_across_the_whole_range() {
    let adapter = cairo_1_adapter();
    for amount in [
        BigInt::from(0_u8),
        BigInt::from(1_u8),
        BigInt::from(1_u8) << 128,
        (BigInt::from(1_u8) << 256) - 1_u8,
    ] {
        let mut args = IndexMap::new();
        args.insert("amount".to_string(), CairoValue::Number(amount.clone()));
        let adapted =
            adapter.adapt_input("echo_supply", &CairoValue::Object(args.clone())).unwrap();
        let restored = adapter.adapt_output("echo_supply", &as_raw_response(&adapted)).unwrap();
        assert_eq!(restored, CairoValue::Object(args), "failed for {amount}");
    }
}

#[test]
fn bool_round_trip() {
    let adapter = cairo_1_adapter();
    for flag in [true, false] {
        let input = value(json!({ "flag": flag }));
        let adapted = adapter.adapt_input("toggle", &input).unwrap();
        let restored = adapter.adapt_output("toggle", &as_raw_response(&adapted)).unwrap();
        assert_eq!(restored, input);
    }
}
