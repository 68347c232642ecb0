//! # Course Type: Program Level Classification
//!
//! DAAD classifies every course with an integer code from 1 to 7. This
//! module is the single definition of those codes and their English labels.
//! Every `match` on [`CourseType`] is exhaustive, so adding a code forces
//! every consumer to handle it.
//!
//! | Code | Variant | Label |
//! |------|---------|-------|
//! | 1 | Bachelor | Bachelor's degree |
//! | 2 | Master | Master's degree |
//! | 3 | Doctorate | PhD / Doctorate |
//! | 4 | GraduateSchool | Cross-faculty graduate and research school |
//! | 5 | PrepCourse | Prep course |
//! | 6 | LanguageCourse | Language course |
//! | 7 | ShortCourse | Short course |

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Label emitted when a record's course-type code is absent or unknown.
pub const UNKNOWN_COURSE_TYPE: &str = "Unknown course type";

/// Total number of course types. Used for compile-time assertions.
pub const COURSE_TYPE_COUNT: usize = 7;

/// Program level of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseType {
    /// Undergraduate degree program.
    Bachelor,
    /// Graduate degree program.
    Master,
    /// Doctoral program.
    Doctorate,
    /// Structured doctoral or research school spanning faculties.
    GraduateSchool,
    /// Preparatory course ahead of degree studies.
    PrepCourse,
    /// Language course.
    LanguageCourse,
    /// Short course, summer school, or similar.
    ShortCourse,
}

impl CourseType {
    /// All course types in code order.
    pub const ALL: [CourseType; COURSE_TYPE_COUNT] = [
        Self::Bachelor,
        Self::Master,
        Self::Doctorate,
        Self::GraduateSchool,
        Self::PrepCourse,
        Self::LanguageCourse,
        Self::ShortCourse,
    ];

    /// Returns all course types in code order.
    pub fn all() -> &'static [CourseType] {
        &Self::ALL
    }

    /// The DAAD integer code for this course type.
    pub fn code(&self) -> i64 {
        match self {
            Self::Bachelor => 1,
            Self::Master => 2,
            Self::Doctorate => 3,
            Self::GraduateSchool => 4,
            Self::PrepCourse => 5,
            Self::LanguageCourse => 6,
            Self::ShortCourse => 7,
        }
    }

    /// The English label written to normalized records.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bachelor => "Bachelor's degree",
            Self::Master => "Master's degree",
            Self::Doctorate => "PhD / Doctorate",
            Self::GraduateSchool => "Cross-faculty graduate and research school",
            Self::PrepCourse => "Prep course",
            Self::LanguageCourse => "Language course",
            Self::ShortCourse => "Short course",
        }
    }

    /// Look up a course type by its integer code.
    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.code() == code)
    }
}

impl std::fmt::Display for CourseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Extract an integral code from a JSON number.
pub(crate) fn code_of(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}
