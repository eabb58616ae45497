//! Pattern-based syllabus extraction.
//!
//! [`parse`] is total: every field degrades to its documented default rather
//! than failing, so any input text yields a record that passes [`validate`].

pub mod fields;
pub mod modules;
pub mod validate;

use tracing::debug;

use crate::models::SyllabusRecord;

pub use validate::{validate, validate_record};

/// Extract a [`SyllabusRecord`] from already-decoded document text.
pub fn parse(text: &str) -> SyllabusRecord {
    let record = SyllabusRecord {
        course_name: fields::COURSE_NAME.extract(text),
        instructor: fields::INSTRUCTOR.extract(text),
        term: fields::TERM.extract(text),
        description: fields::DESCRIPTION.extract(text),
        modules: modules::extract_modules(text),
        prerequisites: fields::PREREQUISITES.extract(text),
        objectives: fields::OBJECTIVES.extract(text),
    };

    debug!(
        "parsed syllabus '{}' with {} module(s)",
        record.course_name,
        record.modules.len()
    );
    record
}
