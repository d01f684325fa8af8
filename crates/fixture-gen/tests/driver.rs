//! Integration tests for the fixture driver, exercising the full
//! read-annotate-write pipeline through real files.

use fixture_gen::driver;
use fixture_gen::MoveKind;
use serde_json::{json, Value};
use std::fs;

const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
const EP_POSITION: &str = "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3";

#[test]
fn pipeline_annotates_every_test_case() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tests.json");
    let output = dir.path().join("fixtures.json");

    let definitions = json!([
        {"name": "starting position", "fen": STARTPOS},
        {"fen": EP_POSITION, "source": "double push to d5"},
    ]);
    fs::write(&input, serde_json::to_string(&definitions).unwrap()).unwrap();

    driver::run(&input, &output, false).unwrap();

    let fixtures: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let cases = fixtures.as_array().unwrap();
    assert_eq!(cases.len(), 2);

    // Pre-existing fields survive, moves are added.
    assert_eq!(cases[0]["name"], "starting position");
    assert_eq!(cases[0]["fen"], STARTPOS);
    assert_eq!(cases[0]["moves"].as_array().unwrap().len(), 20);
    assert_eq!(cases[1]["source"], "double push to d5");

    // Every startpos record is Basic with null capture/promotion.
    for record in cases[0]["moves"].as_array().unwrap() {
        assert_eq!(record["move"]["type"], "Basic");
        assert_eq!(record["move"]["capture"], Value::Null);
        assert_eq!(record["move"]["promotion"], Value::Null);
    }

    // The en passant case carries the bypassed pawn.
    let ep = cases[1]["moves"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["move"]["type"] == "EnPassant")
        .expect("en passant record present");
    assert_eq!(ep["move"]["to"], "d6");
    assert_eq!(ep["move"]["capture"], "p");
    assert_eq!(ep["uci"], "e5d6");
}

#[test]
fn minified_output_has_no_whitespace() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tests.json");
    let pretty_out = dir.path().join("pretty.json");
    let minified_out = dir.path().join("min.json");

    fs::write(
        &input,
        serde_json::to_string(&json!([{"fen": STARTPOS}])).unwrap(),
    )
    .unwrap();

    driver::run(&input, &pretty_out, false).unwrap();
    driver::run(&input, &minified_out, true).unwrap();

    let pretty = fs::read_to_string(&pretty_out).unwrap();
    let minified = fs::read_to_string(&minified_out).unwrap();

    assert!(pretty.contains('\n'));
    assert!(!minified.contains('\n'));
    assert!(!minified.contains(": "));
    assert!(minified.len() < pretty.len());

    // Both spellings parse back to the same data.
    let a: Value = serde_json::from_str(&pretty).unwrap();
    let b: Value = serde_json::from_str(&minified).unwrap();
    assert_eq!(a, b);
}

#[test]
fn rerun_on_own_output_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tests.json");
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");

    fs::write(
        &input,
        serde_json::to_string(&json!([{"fen": EP_POSITION}])).unwrap(),
    )
    .unwrap();

    driver::run(&input, &first, true).unwrap();
    // Feeding the output back in recomputes the same moves.
    driver::run(&first, &second, true).unwrap();

    assert_eq!(
        fs::read_to_string(&first).unwrap(),
        fs::read_to_string(&second).unwrap()
    );
}

#[test]
fn missing_input_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = driver::run(
        &dir.path().join("does-not-exist.json"),
        &dir.path().join("out.json"),
        false,
    );
    assert!(matches!(result, Err(driver::DriverError::Io(_))));
}

#[test]
fn malformed_json_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tests.json");
    fs::write(&input, "this is not json").unwrap();

    let result = driver::run(&input, &dir.path().join("out.json"), false);
    assert!(matches!(result, Err(driver::DriverError::Json(_))));
}

#[test]
fn typed_records_roundtrip_through_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tests.json");
    let output = dir.path().join("fixtures.json");

    fs::write(
        &input,
        serde_json::to_string(&json!([
            {"fen": "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1"}
        ]))
        .unwrap(),
    )
    .unwrap();

    driver::run(&input, &output, false).unwrap();

    let tests = driver::read_tests(&output).unwrap();
    let moves = tests[0].moves.as_ref().unwrap();
    assert!(moves
        .iter()
        .any(|r| r.detail.kind == MoveKind::KingSideCastle && r.san == "O-O"));
    assert!(moves
        .iter()
        .any(|r| r.detail.kind == MoveKind::QueenSideCastle && r.san == "O-O-O"));
}
