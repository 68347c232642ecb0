//! # Record Mapper
//!
//! Maps one [`RawCourse`] to one [`NormalizedCourse`]. Mapping never fails:
//! every absent or unusable field degrades to a fixed default.
//!
//! ## Field Rules
//!
//! | Output key | Source | Default |
//! |------------|--------|---------|
//! | `id` | `id` | `"Unknown ID"` |
//! | `image` | `image`, prefixed with [`IMAGE_ORIGIN`] | `null` |
//! | `programDuration` | first `date` entry | `"Unknown"` |
//! | `totalSemester` | duration / 6 | `0` |
//! | `courseName`, `courseNameShort` | same keys | `"Unknown Course Name"` |
//! | `originalShortCourseName` | decoded `courseNameShort` | `"Unknown Short Name"` |
//! | `academy` | `academy` | `"Unknown Academy"` |
//! | `originalAcademy` | decoded `academy` | `"Unknown Short Name"` |
//! | `city` | `city` | `"Unknown City"` |
//! | `languages` | `languages` | `["Unknown"]` |
//! | `languageLevelGerman`, `languageLevelEnglish` | same keys | `"null"` |
//! | `courseType` | `courseType` via table | `"Unknown course type"` |
//! | `cursorNumber` | `id` | `1` |
//! | `isElearning` | `isElearning` | `false` |
//! | `applicationDeadline` | same key | `"Unknown"` |
//! | `subject`, `subSubjectId`, `subSubjectName` | `subject` via table | `"Unknown subject"`, `null`, `"Unknown subSubject"` |
//! | `supportInternationalStudents` | presence of a non-null value | `false` |
//! | `link` | `link` | `""` |
//! | `requestLanguage` | same key | `"Unknown"` |
//!
//! The two defaults for an absent `id` differ (`"Unknown ID"` versus `1`).
//! Both are kept as is.

use daad_core::{
    decode_unicode_escapes, is_truthy, months_between, render_scalar, semesters_for, CourseDate,
    CourseError, NormalizedCourse, RawCourse, ReferenceTables, UNKNOWN_COURSE_TYPE,
    UNKNOWN_SUBJECT, UNKNOWN_SUB_SUBJECT,
};
use serde_json::{json, Value};

/// Origin prepended to relative image paths.
pub const IMAGE_ORIGIN: &str = "https://www2.daad.de";

const UNKNOWN: &str = "Unknown";

/// Normalize a course against the compiled-in reference tables.
pub fn normalize(course: &RawCourse) -> NormalizedCourse {
    normalize_with(course, &ReferenceTables::STANDARD)
}

/// Normalize a course against the given reference tables.
pub fn normalize_with(course: &RawCourse, tables: &ReferenceTables) -> NormalizedCourse {
    let course_type = course
        .get("courseType")
        .and_then(|v| tables.course_type(v))
        .map_or(UNKNOWN_COURSE_TYPE, |t| t.label());

    let subject = course
        .str_field("subject")
        .and_then(|name| tables.resolve_subject(name));

    let months = program_months(course);

    NormalizedCourse {
        id: course.get_or("id", "Unknown ID"),
        image: image_url(course),
        program_duration: if months != 0 {
            format!("{months} months")
        } else {
            UNKNOWN.to_string()
        },
        total_semester: semesters_for(months),
        course_name: course.get_or("courseName", "Unknown Course Name"),
        course_name_short: course.get_or("courseNameShort", "Unknown Course Name"),
        original_short_course_name: decoded(course, "courseNameShort", "Unknown Short Name"),
        academy: course.get_or("academy", "Unknown Academy"),
        original_academy: decoded(course, "academy", "Unknown Short Name"),
        city: course.get_or("city", "Unknown City"),
        languages: course.get_or("languages", json!([UNKNOWN])),
        language_level_german: course.get_or("languageLevelGerman", "null"),
        language_level_english: course.get_or("languageLevelEnglish", "null"),
        date: course.dates().iter().map(format_date).collect(),
        course_type: course_type.to_string(),
        cursor_number: course.get_or("id", 1),
        is_elearning: course.get_or("isElearning", false),
        application_deadline: course.get_or("applicationDeadline", UNKNOWN),
        subject: subject.map_or(UNKNOWN_SUBJECT, |m| m.category).to_string(),
        sub_subject_id: subject.map(|m| m.id),
        sub_subject_name: subject.map_or(UNKNOWN_SUB_SUBJECT, |m| m.name).to_string(),
        support_international_students: course.has_non_null("supportInternationalStudents"),
        link: course.get_or("link", ""),
        request_language: course.get_or("requestLanguage", UNKNOWN),
    }
}

/// Normalize one entry of the `date` array.
///
/// A non-object entry is treated as an object with no keys.
pub fn format_date(entry: &Value) -> CourseDate {
    let field = |key: &str| entry.as_object().and_then(|o| o.get(key));
    let or_default = |key: &str, default: &str| {
        field(key)
            .cloned()
            .unwrap_or_else(|| Value::String(default.to_string()))
    };

    CourseDate {
        start: field("start").cloned().unwrap_or(Value::Null),
        end: field("end").cloned().unwrap_or(Value::Null),
        costs: match field("costs") {
            Some(cost) if is_truthy(cost) => format!("€{}", render_scalar(cost)),
            _ => UNKNOWN.to_string(),
        },
        registration_deadline: or_default("registrationDeadline", UNKNOWN),
        select_hsk_hwk: or_default("selectHskHwk", "N/A"),
    }
}

/// Months spanned by the first date entry, or 0 when there is none.
///
/// A malformed first entry is logged and counts as 0.
fn program_months(course: &RawCourse) -> i64 {
    let Some(first) = course.dates().first() else {
        return 0;
    };
    match first_entry_months(first) {
        Ok(months) => months,
        Err(e) => {
            let id = render_scalar(&course.get_or("id", Value::Null));
            tracing::warn!(
                id = %id,
                error = %e,
                "cannot compute program duration; reporting it as unknown"
            );
            0
        }
    }
}

fn first_entry_months(entry: &Value) -> Result<i64, CourseError> {
    let text = |key: &'static str| {
        entry
            .get(key)
            .and_then(Value::as_str)
            .ok_or(CourseError::MissingDateField(key))
    };
    months_between(text("start")?, text("end")?)
}

fn image_url(course: &RawCourse) -> Option<String> {
    course
        .get("image")
        .filter(|v| is_truthy(v))
        .map(|v| format!("{IMAGE_ORIGIN}{}", render_scalar(v)))
}

/// Decode `\uXXXX` escapes in a string field. Non-string values pass through.
fn decoded(course: &RawCourse, key: &str, default: &str) -> Value {
    match course.get(key) {
        None => Value::String(decode_unicode_escapes(default).into_owned()),
        Some(Value::String(s)) => Value::String(decode_unicode_escapes(s).into_owned()),
        Some(other) => other.clone(),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Arbitrary date text never panics, and the semester count always
        /// follows from the reported duration.
        #[test]
        fn arbitrary_dates_are_absorbed(start in "\\PC{0,12}", end in "\\PC{0,12}") {
            let course = RawCourse::from_value(json!({
                "id": 1,
                "date": [{"start": start, "end": end}]
            }))
            .unwrap();
            let out = normalize(&course);
            let months = match out.program_duration.strip_suffix(" months") {
                Some(n) => n.parse::<i64>().unwrap(),
                None => {
                    prop_assert_eq!(out.program_duration.as_str(), "Unknown");
                    0
                }
            };
            prop_assert_eq!(out.total_semester, months.div_euclid(6));
        }

        /// Well-formed year-month pairs produce the calendar month difference.
        #[test]
        fn well_formed_dates_count_months(
            y1 in 1990i64..2040, m1 in 1i64..=12,
            y2 in 1990i64..2040, m2 in 1i64..=12
        ) {
            let course = RawCourse::from_value(json!({
                "date": [{
                    "start": format!("{y1:04}-{m1:02}-01"),
                    "end": format!("{y2:04}-{m2:02}-28")
                }]
            }))
            .unwrap();
            let expected = (y2 - y1) * 12 + (m2 - m1);
            let out = normalize(&course);
            if expected == 0 {
                prop_assert_eq!(out.program_duration.as_str(), "Unknown");
            } else {
                prop_assert_eq!(out.program_duration, format!("{expected} months"));
            }
            prop_assert_eq!(out.total_semester, expected.div_euclid(6));
        }
    }
}
