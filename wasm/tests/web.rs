//! Browser-side tests, run with `wasm-pack test --headless --chrome`

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn invalid_json_becomes_js_error() {
    let err = agriguru_wasm::summarize_week_json("{").unwrap_err();
    let message = err.as_string().unwrap();
    assert!(message.starts_with("Invalid forecast JSON"));
}

#[wasm_bindgen_test]
fn unknown_rating_becomes_js_error() {
    assert!(agriguru_wasm::soil_health_emoji("Superb").is_err());
}

#[wasm_bindgen_test]
fn local_tomorrow_runs_in_browser() {
    assert_eq!(agriguru_wasm::summarize_tomorrow_local_json("[]").unwrap(), "null");
}
