//! # Subject Table: Two-Level Field Classification
//!
//! Top-level subject categories, each owning an ordered list of
//! sub-subjects with a stable integer id. Raw course records carry only the
//! sub-subject name; [`resolve_in`] recovers the owning category and id.
//!
//! ## Invariant
//!
//! Sub-subject names and ids are unique across the whole table, so a
//! reverse lookup by name is unambiguous. Lookup still returns the first
//! match in table order should a custom table ever break this.

use serde::Serialize;

/// Category name emitted when a record's subject does not resolve.
pub const UNKNOWN_SUBJECT: &str = "Unknown subject";

/// Sub-subject name emitted when a record's subject does not resolve.
pub const UNKNOWN_SUB_SUBJECT: &str = "Unknown subSubject";

/// A specific field of study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SubSubject {
    /// Stable DAAD identifier.
    pub id: u32,
    /// English name, matched verbatim against raw records.
    pub name: &'static str,
}

/// A top-level subject category and its sub-subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubjectCategory {
    /// Category name.
    pub name: &'static str,
    /// Sub-subjects in table order.
    pub sub_subjects: &'static [SubSubject],
}

/// Result of resolving a sub-subject name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectMatch {
    /// Name of the owning category.
    pub category: &'static str,
    /// Id of the matched sub-subject.
    pub id: u32,
    /// Name of the matched sub-subject.
    pub name: &'static str,
}

const fn sub(id: u32, name: &'static str) -> SubSubject {
    SubSubject { id, name }
}

/// The DAAD subject table.
pub static SUBJECTS: &[SubjectCategory] = &[
    SubjectCategory {
        name: "Engineering",
        sub_subjects: &[
            sub(11, "Engineering in general"),
            sub(12, "Architecture"),
            sub(13, "Civil Engineering"),
            sub(14, "Electrical Engineering"),
            sub(15, "Mechanical Engineering / Process Engineering"),
            sub(16, "Mining, Metallurgy"),
            sub(17, "Surveying"),
            sub(18, "Town and Country Planning"),
            sub(19, "Transport Engineering, Nautical Science"),
        ],
    },
    SubjectCategory {
        name: "Languages and Cultural Studies",
        sub_subjects: &[
            sub(20, "Languages and Cultural Studies in general"),
            sub(21, "Catholic Theology"),
            sub(22, "Civilisation Studies in the narrower sense"),
            sub(23, "Classical Philology"),
            sub(24, "Education"),
            sub(25, "English Studies, American Studies"),
            sub(26, "General and Comparative Literature and Linguistics"),
            sub(
                27,
                "German Language and Literature (German, Germanic Languages except English)",
            ),
            sub(28, "History"),
            sub(29, "Library, Documentation and Media Studies"),
            sub(30, "Other / Non-European Languages and Cultural Studies"),
            sub(31, "Philosophy"),
            sub(32, "Protestant Theology"),
            sub(33, "Psychology"),
            sub(34, "Romance Languages"),
            sub(35, "Slavonic, Baltic, Finno-Ugrian Studies"),
            sub(36, "Special Education"),
        ],
    },
    SubjectCategory {
        name: "Law, Economics and Social Sciences",
        sub_subjects: &[
            sub(37, "Law, Economics and Social Sciences in general"),
            sub(38, "Business and Economics"),
            sub(39, "Industrial Engineering"),
            sub(40, "Law"),
            sub(41, "Political Science"),
            sub(42, "Public Administration"),
            sub(43, "Regional Studies"),
            sub(44, "Social Science"),
            sub(45, "Social Services"),
        ],
    },
    SubjectCategory {
        name: "Mathematics, Natural Sciences",
        sub_subjects: &[
            sub(46, "Mathematics, Natural Sciences in general"),
            sub(47, "Biology"),
            sub(48, "Chemistry"),
            sub(49, "Computer Science"),
            sub(50, "Earth Sciences (excluding Geography)"),
            sub(51, "Geography"),
            sub(52, "Mathematics"),
            sub(53, "Pharmacy"),
            sub(54, "Physics, Astronomy"),
        ],
    },
    SubjectCategory {
        name: "Medicine",
        sub_subjects: &[
            sub(55, "Medicine in general"),
            sub(56, "Clinical, Practical Medicine (excluding Dentistry)"),
            sub(57, "Clinical, Theoretical Medicine (including Dentistry)"),
            sub(58, "Dentistry (Clinical, Practical)"),
            sub(59, "Pre-clinical Medical Studies (including Dentistry)"),
        ],
    },
    SubjectCategory {
        name: "Sport",
        sub_subjects: &[sub(60, "Sport")],
    },
    SubjectCategory {
        name: "Veterinary Medicine",
        sub_subjects: &[
            sub(61, "Veterinary Medicine in general"),
            sub(62, "Clinical Practical Veterinary Medicine"),
            sub(63, "Clinical Theoretical Veterinary Medicine"),
            sub(64, "Pre-clinical Veterinary Medicine"),
        ],
    },
    SubjectCategory {
        name: "German Language",
        sub_subjects: &[
            sub(
                65,
                "German Language Course (including Literature and Culture Studies)",
            ),
            sub(66, "Preparatory Course for German Language Examinations"),
            sub(67, "Didactics of German as a Foreign Language"),
            sub(68, "Translation and Interpretation"),
            sub(69, "German as a Technical Language"),
            sub(71, "German as an Academic Language"),
        ],
    },
];

/// Find the first sub-subject in `table` whose name equals `name` exactly.
///
/// Comparison is case-sensitive with no trimming.
pub fn resolve_in(table: &'static [SubjectCategory], name: &str) -> Option<SubjectMatch> {
    table.iter().find_map(|category| {
        category
            .sub_subjects
            .iter()
            .find(|s| s.name == name)
            .map(|s| SubjectMatch {
                category: category.name,
                id: s.id,
                name: s.name,
            })
    })
}

/// Iterate every sub-subject of `table` together with its category name.
pub fn flatten(
    table: &'static [SubjectCategory],
) -> impl Iterator<Item = (&'static str, SubSubject)> {
    table
        .iter()
        .flat_map(|c| c.sub_subjects.iter().map(move |s| (c.name, *s)))
}
