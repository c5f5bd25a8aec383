use adapt_core::error::Error;
use serde_json::json;

use crate::common::fixtures::{cairo_0_adapter, cairo_1_adapter};
use crate::common::utils::value;

#[test]
fn legacy_event_decodes_its_data_parameters() {
    let decoded = cairo_0_adapter().decode_event("points_changed", "1 2 10").unwrap();
    assert_eq!(decoded.name, "points_changed");
    assert_eq!(decoded.data, value(json!({ "pt": { "x": 1, "y": 2 }, "amount": 10 })));
}

#[test]
fn modern_event_decodes_its_input_parameters() {
    let decoded =
        cairo_1_adapter().decode_event("contract::contract::PointChanged", "3 4").unwrap();
    assert_eq!(decoded.data, value(json!({ "new_point": { "x": 3, "y": 4 } })));
}

#[test]
fn unknown_event_is_reported_by_name() {
    match cairo_0_adapter().decode_event("no_such_event", "") {
        Err(Error::MissingEntry { kind, name }) => {
            assert_eq!(kind, "Event");
            assert_eq!(name, "no_such_event");
        }
        other => panic!("Wrong result: {other:?}"),
    }
}

#[test]
fn truncated_event_data_is_rejected() {
    match cairo_0_adapter().decode_event("points_changed", "1 2") {
        Err(Error::UnparseableRawResponse { .. }) => {}
        other => panic!("Wrong result: {other:?}"),
    }
}
