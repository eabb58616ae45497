//! Labelled scalar fields.
//!
//! Every field is a compiled pattern plus the value used when the label never
//! appears. Only the first occurrence of a label is considered.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::syllabus::{
    NO_DESCRIPTION_PROVIDED, NO_MODULE_DESCRIPTION, NO_OBJECTIVES_PROVIDED, NO_PREREQUISITES,
    UNKNOWN, UNKNOWN_DURATION, UNKNOWN_MODULE,
};

/// A label pattern with a fixed fallback.
pub struct FieldPattern {
    regex: Regex,
    default: &'static str,
}

impl FieldPattern {
    /// `<label>[:\s]*` followed by the rest of that line.
    fn single_line(label: &str, default: &'static str) -> Self {
        let regex = Regex::new(&format!(r"(?i){}[:\s]*(.*)", regex::escape(label)))
            .expect("single-line field pattern is valid");
        Self { regex, default }
    }

    /// `<label>[:\s]*` followed by everything up to the first stop word or end of text.
    fn until(label: &str, stops: &[&str], default: &'static str) -> Self {
        let stops = stops
            .iter()
            .map(|s| regex::escape(s))
            .collect::<Vec<_>>()
            .join("|");
        let regex = Regex::new(&format!(
            r"(?is){}[:\s]*(.*?)(?:{}|$)",
            regex::escape(label),
            stops
        ))
        .expect("multi-line field pattern is valid");
        Self { regex, default }
    }

    /// Trimmed capture of the first match, or the default.
    pub fn extract(&self, text: &str) -> String {
        self.find(text)
            .map(str::to_string)
            .unwrap_or_else(|| self.default.to_string())
    }

    /// Trimmed capture of the first match, if the label occurs at all.
    pub fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
    }
}

pub static COURSE_NAME: LazyLock<FieldPattern> =
    LazyLock::new(|| FieldPattern::single_line("Course Name", UNKNOWN));

pub static INSTRUCTOR: LazyLock<FieldPattern> =
    LazyLock::new(|| FieldPattern::single_line("Instructor", UNKNOWN));

pub static TERM: LazyLock<FieldPattern> =
    LazyLock::new(|| FieldPattern::single_line("Term", UNKNOWN));

pub static DESCRIPTION: LazyLock<FieldPattern> = LazyLock::new(|| {
    FieldPattern::until("Description", &["Module", "Instructor"], NO_DESCRIPTION_PROVIDED)
});

pub static PREREQUISITES: LazyLock<FieldPattern> =
    LazyLock::new(|| FieldPattern::single_line("Prerequisites", NO_PREREQUISITES));

pub static OBJECTIVES: LazyLock<FieldPattern> =
    LazyLock::new(|| FieldPattern::until("Objectives", &["Module"], NO_OBJECTIVES_PROVIDED));

// Module-level fields are single-line, applied inside one module span.

pub static MODULE_NAME: LazyLock<FieldPattern> =
    LazyLock::new(|| FieldPattern::single_line("Module Name", UNKNOWN_MODULE));

pub static MODULE_DESCRIPTION: LazyLock<FieldPattern> =
    LazyLock::new(|| FieldPattern::single_line("Description", NO_MODULE_DESCRIPTION));

pub static MODULE_DURATION: LazyLock<FieldPattern> =
    LazyLock::new(|| FieldPattern::single_line("Duration", UNKNOWN_DURATION));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_field_stops_at_line_end() {
        let text = "Course Name: Intro to Rust\nInstructor: Dr. Ferris\n";
        assert_eq!(COURSE_NAME.extract(text), "Intro to Rust");
        assert_eq!(INSTRUCTOR.extract(text), "Dr. Ferris");
    }

    #[test]
    fn label_case_does_not_matter() {
        for text in [
            "COURSE NAME: Systems",
            "course name: Systems",
            "Course Name: Systems",
        ] {
            assert_eq!(COURSE_NAME.extract(text), "Systems");
        }
    }

    #[test]
    fn only_first_occurrence_is_used() {
        let text = "Term: Fall 2024\nTerm: Spring 2025\n";
        assert_eq!(TERM.extract(text), "Fall 2024");
    }

    #[test]
    fn separator_may_span_blank_lines() {
        let text = "Instructor:\n\n  Grace Hopper  \n";
        assert_eq!(INSTRUCTOR.extract(text), "Grace Hopper");
    }

    #[test]
    fn missing_label_yields_default() {
        assert_eq!(COURSE_NAME.extract("nothing here"), "Unknown");
        assert_eq!(PREREQUISITES.extract(""), "No prerequisites");
        assert_eq!(DESCRIPTION.extract("x"), "No description provided");
        assert_eq!(OBJECTIVES.extract("x"), "No objectives provided");
    }

    #[test]
    fn description_runs_across_lines_until_instructor() {
        let text = "Description: Learn ownership\nand borrowing.\nInstructor: Ferris";
        assert_eq!(
            DESCRIPTION.extract(text),
            "Learn ownership\nand borrowing."
        );
    }

    #[test]
    fn description_stops_at_first_module_keyword() {
        let text = "Description: A survey course.\nModule 1: Basics";
        assert_eq!(DESCRIPTION.extract(text), "A survey course.");
    }

    #[test]
    fn objectives_run_to_end_of_text_without_module() {
        let text = "Objectives:\n- read code\n- write code\n";
        assert_eq!(OBJECTIVES.extract(text), "- read code\n- write code");
    }

    #[test]
    fn label_matches_inside_longer_words() {
        // "Determine" contains "term"; first occurrence wins even mid-word.
        let text = "Determine your goals\nTerm: Winter";
        assert_eq!(TERM.extract(text), "ine your goals");
    }

    #[test]
    fn empty_capture_is_kept_when_label_present() {
        assert_eq!(COURSE_NAME.extract("Course Name:"), "");
        assert_eq!(COURSE_NAME.find("no label"), None);
    }
}
