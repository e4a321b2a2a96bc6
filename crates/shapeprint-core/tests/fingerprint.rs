use shapeprint_canonical::sha256_hex;
use shapeprint_core::{
    fingerprint, fingerprint_id, json_keys, sql_fingerprint, sql_fingerprint_id, ERROR, NONE,
};

#[test]
fn blank_input_short_circuits_to_none() {
    assert_eq!(fingerprint_id(""), NONE);
    assert_eq!(fingerprint_id("   "), NONE);
    assert_eq!(json_keys("\t\n"), NONE);
    assert_eq!(fingerprint(""), NONE);
}

#[test]
fn malformed_json_collapses_to_error() {
    assert_eq!(fingerprint_id("{"), ERROR);
    assert_eq!(json_keys("{\"a\":"), ERROR);
    assert_eq!(fingerprint("not json"), ERROR);
}

#[test]
fn keys_are_sorted_and_joined() {
    assert_eq!(json_keys(r#"{"a":1,"b":2}"#), "a,b");
}

#[test]
fn field_order_is_irrelevant() {
    assert_eq!(json_keys(r#"{"b":2,"a":1}"#), "a,b");
    assert_eq!(
        fingerprint_id(r#"{"b":2,"a":1}"#),
        fingerprint_id(r#"{"a":1,"b":2}"#)
    );
}

#[test]
fn scalar_only_array_collapses_to_one_index() {
    assert_eq!(json_keys(r#"{"a":[1,2,3]}"#), "a.0");
}

#[test]
fn distinct_shapes_in_arrays_keep_their_indices() {
    assert_eq!(json_keys(r#"{"a":[{"x":1},{"y":1}]}"#), "a.0.x,a.1.y");
}

#[test]
fn empty_object_and_empty_array_are_asymmetric() {
    assert_eq!(json_keys(r#"{"a":{}}"#), "a");
    assert_eq!(json_keys(r#"{"a":[]}"#), "");
}

#[test]
fn degenerate_roots_hash_the_empty_key_list() {
    assert_eq!(json_keys("{}"), "");
    assert_eq!(json_keys("[]"), "");
    assert_eq!(fingerprint_id("{}"), sha256_hex(b""));
}

#[test]
fn scalar_root_has_no_keys_but_still_canonicalizes() {
    assert_eq!(json_keys("5"), ERROR);
    assert_eq!(fingerprint_id("5"), ERROR);
    assert_eq!(fingerprint("5"), "\"?\"");
}

#[test]
fn leaf_values_do_not_affect_the_identifier() {
    let d1 = r#"{"user":{"id":1,"name":"ann","tags":["a","b"]},"ts":"2024-01-01"}"#;
    let d2 = r#"{"user":{"id":99,"name":"zoe","tags":["x"]},"ts":"2031-12-31"}"#;
    assert_eq!(fingerprint_id(d1), fingerprint_id(d2));
    assert_eq!(json_keys(d1), json_keys(d2));
}

#[test]
fn identifier_is_the_hash_of_the_keys_output() {
    let doc = r#"{"a":[{"x":1},{"y":1}],"b":{"c":true}}"#;
    assert_eq!(fingerprint_id(doc), sha256_hex(json_keys(doc).as_bytes()));
}

#[test]
fn canonical_form_is_value_blind() {
    assert_eq!(fingerprint(r#"{"a":1,"b":"txt"}"#), r#"{"a":"?","b":"?"}"#);
    assert_eq!(fingerprint(r#"{"a":[1,2,3]}"#), r#"{"a":["?"]}"#);
}

#[test]
fn sql_blank_input_short_circuits_to_none() {
    assert_eq!(sql_fingerprint_id(""), NONE);
    assert_eq!(sql_fingerprint_id("   "), NONE);
    assert_eq!(sql_fingerprint("\n"), NONE);
}

#[test]
fn sql_parse_failure_collapses_to_error() {
    assert_eq!(sql_fingerprint_id("SELEKT everything"), ERROR);
    assert_eq!(sql_fingerprint("SELEKT everything"), ERROR);
}

#[test]
fn sql_literals_are_parameterized() {
    assert_eq!(
        sql_fingerprint("SELECT * FROM users WHERE id = 42"),
        "SELECT * FROM users WHERE id = ?"
    );
}

#[test]
fn sql_identifier_is_the_hash_of_the_parameterized_text() {
    let sql = "SELECT * FROM users WHERE id = 42";
    let parameterized = sql_fingerprint(sql);
    assert_eq!(
        sql_fingerprint_id(sql),
        sha256_hex(parameterized.as_bytes())
    );
}

#[test]
fn sql_literal_values_do_not_affect_the_identifier() {
    assert_eq!(
        sql_fingerprint_id("SELECT * FROM t WHERE x = 1 AND y = 'a'"),
        sql_fingerprint_id("SELECT * FROM t WHERE x = 2 AND y = 'b'")
    );
}
