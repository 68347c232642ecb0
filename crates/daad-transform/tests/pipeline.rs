//! # End-to-End Pipeline Tests
//!
//! Feeds complete export documents through `run_streams` and checks the
//! written collection as a downstream consumer would see it: parsed back
//! from JSON, keyed by the output field names.

use daad_transform::{run_streams, OutputOptions, TransformError};
use serde_json::{json, Value};

fn transform(document: &Value, options: &OutputOptions) -> (String, Value) {
    let input = serde_json::to_vec(document).expect("fixture serializes");
    let mut out = Vec::new();
    run_streams(input.as_slice(), &mut out, options).expect("pipeline should succeed");
    let text = String::from_utf8(out).expect("output is utf-8");
    let parsed = serde_json::from_str(&text).expect("output is valid json");
    (text, parsed)
}

fn export() -> Value {
    json!({
        "courses": [
            {
                "id": 4711,
                "courseType": 1,
                "subject": "Mechanical Engineering / Process Engineering",
                "academy": "Hochschule f\\u00fcr Technik Stuttgart",
                "city": "Stuttgart",
                "courseName": "Mechanical Engineering",
                "courseNameShort": "Maschinenbau",
                "languages": ["German"],
                "languageLevelGerman": "C1",
                "date": [
                    {
                        "start": "2020-09-01",
                        "end": "2022-03-01",
                        "costs": 500,
                        "registrationDeadline": "2020-06-30"
                    }
                ],
                "applicationDeadline": "15 July",
                "isElearning": false,
                "supportInternationalStudents": {"buddyProgramme": true},
                "image": "/abc.png",
                "link": "https://www.hft-stuttgart.de",
                "requestLanguage": "de"
            },
            null,
            {
                "courseType": 7,
                "courseNameShort": "Sommerschule",
                "date": []
            }
        ],
        "numResults": 3
    })
}

#[test]
fn null_entries_are_dropped_and_order_kept() {
    let (_, out) = transform(&export(), &OutputOptions::default());
    let records = out.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["id"], json!(4711));
    assert_eq!(records[1]["courseType"], json!("Short course"));
}

#[test]
fn first_record_fully_resolved() {
    let (_, out) = transform(&export(), &OutputOptions::default());
    let r = &out[0];
    assert_eq!(r["image"], json!("https://www2.daad.de/abc.png"));
    assert_eq!(r["programDuration"], json!("18 months"));
    assert_eq!(r["totalSemester"], json!(3));
    assert_eq!(r["courseType"], json!("Bachelor's degree"));
    assert_eq!(r["subject"], json!("Engineering"));
    assert_eq!(r["subSubjectId"], json!(15));
    assert_eq!(r["subSubjectName"], json!("Mechanical Engineering / Process Engineering"));
    assert_eq!(r["academy"], json!("Hochschule f\\u00fcr Technik Stuttgart"));
    assert_eq!(r["originalAcademy"], json!("Hochschule für Technik Stuttgart"));
    assert_eq!(r["languageLevelEnglish"], json!("null"));
    assert_eq!(r["supportInternationalStudents"], json!(true));
    assert_eq!(r["cursorNumber"], json!(4711));
    assert_eq!(
        r["date"],
        json!([{
            "start": "2020-09-01",
            "end": "2022-03-01",
            "costs": "€500",
            "registrationDeadline": "2020-06-30",
            "selectHskHwk": "N/A"
        }])
    );
}

#[test]
fn sparse_record_gets_defaults() {
    let (_, out) = transform(&export(), &OutputOptions::default());
    let r = &out[1];
    assert_eq!(r["id"], json!("Unknown ID"));
    assert_eq!(r["cursorNumber"], json!(1));
    assert_eq!(r["image"], Value::Null);
    assert_eq!(r["programDuration"], json!("Unknown"));
    assert_eq!(r["totalSemester"], json!(0));
    assert_eq!(r["courseName"], json!("Unknown Course Name"));
    assert_eq!(r["courseNameShort"], json!("Sommerschule"));
    assert_eq!(r["originalAcademy"], json!("Unknown Short Name"));
    assert_eq!(r["subject"], json!("Unknown subject"));
    assert_eq!(r["subSubjectId"], Value::Null);
    assert_eq!(r["subSubjectName"], json!("Unknown subSubject"));
    assert_eq!(r["supportInternationalStudents"], json!(false));
    assert_eq!(r["date"], json!([]));
    assert_eq!(r.as_object().unwrap().len(), 24);
}

#[test]
fn default_output_is_ascii_with_four_space_indent() {
    let (text, _) = transform(&export(), &OutputOptions::default());
    assert!(text.is_ascii());
    assert!(text.starts_with("[\n    {\n        \"id\": 4711,"));
    assert!(text.contains("\"costs\": \"\\u20ac500\""));
    assert!(text.contains("\"originalAcademy\": \"Hochschule f\\u00fcr Technik Stuttgart\""));
}

#[test]
fn unicode_output_keeps_characters() {
    let options = OutputOptions {
        indent: 2,
        ensure_ascii: false,
    };
    let (text, _) = transform(&export(), &options);
    assert!(text.contains("\"costs\": \"€500\""));
    assert!(text.starts_with("[\n  {\n    \"id\": 4711,"));
}

#[test]
fn empty_course_list_writes_empty_array() {
    let (text, out) = transform(&json!({"courses": []}), &OutputOptions::default());
    assert_eq!(text, "[]");
    assert_eq!(out, json!([]));
}

#[test]
fn structural_failures_are_errors() {
    let mut sink = Vec::new();
    let err = run_streams(&b"[]"[..], &mut sink, &OutputOptions::default()).unwrap_err();
    assert!(matches!(err, TransformError::InvalidDocument { .. }));

    let err = run_streams(&b"{\"courses\": 3}"[..], &mut sink, &OutputOptions::default())
        .unwrap_err();
    assert!(matches!(err, TransformError::CoursesNotArray { found: "number" }));

    let err = run_streams(&b"not json"[..], &mut sink, &OutputOptions::default()).unwrap_err();
    assert!(matches!(err, TransformError::Json(_)));
    assert!(sink.is_empty());
}
