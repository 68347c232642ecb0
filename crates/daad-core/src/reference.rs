//! # Reference Tables
//!
//! Bundles the course-type and subject tables the mapper resolves against.
//! [`ReferenceTables::STANDARD`] points at the compiled-in DAAD data; a
//! different bundle can be injected for tests.

use serde_json::Value;

use crate::course_type::{code_of, CourseType};
use crate::subject::{self, SubjectCategory, SubjectMatch, SUBJECTS};

/// Read-only lookup tables used during normalization.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceTables {
    /// Recognized course types.
    pub course_types: &'static [CourseType],
    /// Subject hierarchy.
    pub subjects: &'static [SubjectCategory],
}

impl ReferenceTables {
    /// The compiled-in DAAD tables.
    pub const STANDARD: Self = Self {
        course_types: &CourseType::ALL,
        subjects: SUBJECTS,
    };

    /// Resolve a raw `courseType` value to its course type.
    pub fn course_type(&self, value: &Value) -> Option<CourseType> {
        CourseType::from_code(code_of(value)?).filter(|t| self.course_types.contains(t))
    }

    /// Resolve a sub-subject name to its category, id, and name.
    pub fn resolve_subject(&self, name: &str) -> Option<SubjectMatch> {
        subject::resolve_in(self.subjects, name)
    }
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self::STANDARD
    }
}
