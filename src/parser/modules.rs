//! Module segmentation and per-module extraction.
//!
//! A module span starts right after a `Module` marker and ends at the next
//! boundary keyword (`Objectives`, `Prerequisites`, `Module`) or end of text.
//! The terminating keyword is left in place, so a following `Module` marker
//! opens the next span. Boundary words inside prose (e.g. "see Module 2" in a
//! description, or the `Module Name` label itself) cut the span short; that is
//! a known limitation of keyword segmentation.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::fields::{MODULE_DESCRIPTION, MODULE_DURATION, MODULE_NAME};
use crate::models::syllabus::NO_RESOURCES;
use crate::models::{ModuleRecord, TopicRecord};

static MODULE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Module[:\s]*").expect("module marker pattern is valid")
});

static MODULE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Objectives|Prerequisites|Module").expect("module boundary pattern is valid")
});

static TOPIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Topic[:\s]*(.*)").expect("topic pattern is valid")
});

static RESOURCES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Resources[:\s]*(.*)").expect("resources pattern is valid")
});

/// Split `text` into trimmed module spans, in document order.
pub fn segment(text: &str) -> Vec<&str> {
    let mut spans = Vec::new();
    let mut pos = 0;

    while let Some(marker) = MODULE_MARKER.find_at(text, pos) {
        let start = marker.end();
        let end = MODULE_BOUNDARY
            .find_at(text, start)
            .map_or(text.len(), |m| m.start());

        spans.push(text[start..end].trim());
        pos = end;
    }

    debug!("segmented {} module span(s)", spans.len());
    spans
}

/// Build every module found in `text`.
pub fn extract_modules(text: &str) -> Vec<ModuleRecord> {
    segment(text).into_iter().map(extract_module).collect()
}

/// Build one module from its span. Each field falls back independently.
pub fn extract_module(span: &str) -> ModuleRecord {
    ModuleRecord {
        name: MODULE_NAME.extract(span),
        description: MODULE_DESCRIPTION.extract(span),
        duration: MODULE_DURATION.extract(span),
        topics: extract_topics(span),
        resources: extract_resources(span),
    }
}

/// One topic per `Topic` label, in order, duplicates kept.
pub fn extract_topics(span: &str) -> Vec<TopicRecord> {
    TOPIC
        .captures_iter(span)
        .filter_map(|caps| caps.get(1))
        .map(|m| TopicRecord::named(m.as_str().trim()))
        .collect()
}

/// Comma-separated entries of the first `Resources` line.
///
/// An absent label and a label with no usable entries both produce the
/// single `"No resources"` marker, so the list is never empty.
pub fn extract_resources(span: &str) -> Vec<String> {
    let line = RESOURCES
        .captures(span)
        .and_then(|caps| caps.get(1))
        .map_or("", |m| m.as_str());

    let resources: Vec<String> = line
        .split(',')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(str::to_string)
        .collect();

    if resources.is_empty() {
        vec![NO_RESOURCES.to_string()]
    } else {
        resources
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::syllabus::{
        TOPIC_DESCRIPTION_PLACEHOLDER, TOPIC_DURATION_PLACEHOLDER, UNKNOWN_DURATION,
        UNKNOWN_MODULE,
    };

    #[test]
    fn resources_are_split_trimmed_and_compacted() {
        let span = "Resources: Book A, Book B,  ,Book C";
        assert_eq!(extract_resources(span), vec!["Book A", "Book B", "Book C"]);
    }

    #[test]
    fn resources_only_read_one_line() {
        let span = "Resources: Slides\nVideo, Notes";
        assert_eq!(extract_resources(span), vec!["Slides"]);
    }

    #[test]
    fn missing_resources_yield_marker() {
        assert_eq!(extract_resources("Topic: X"), vec!["No resources"]);
        assert_eq!(extract_resources("Resources: , ,"), vec!["No resources"]);
    }

    #[test]
    fn topics_keep_order_and_placeholders() {
        let topics = extract_topics("Topic: Intro\nTopic: Loops\n");
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].name, "Intro");
        assert_eq!(topics[1].name, "Loops");
        for topic in &topics {
            assert!(!topic.completed);
            assert_eq!(topic.description, TOPIC_DESCRIPTION_PLACEHOLDER);
            assert_eq!(topic.duration, TOPIC_DURATION_PLACEHOLDER);
        }
    }

    #[test]
    fn duplicate_topics_are_kept() {
        let topics = extract_topics("Topic: Loops\ntopic: Loops\n");
        let names: Vec<_> = topics.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Loops", "Loops"]);
    }

    #[test]
    fn two_markers_give_two_spans() {
        let text = "Module 1: Basics\nTopic: Syntax\nModule 2: Advanced\nTopic: Traits\n";
        let spans = segment(text);
        assert_eq!(spans, vec!["1: Basics\nTopic: Syntax", "2: Advanced\nTopic: Traits"]);
    }

    #[test]
    fn span_stops_at_objectives_and_prerequisites() {
        let text = "Module: Basics\nDuration: 2 weeks\nObjectives: learn\nPrerequisites: none";
        let spans = segment(text);
        assert_eq!(spans, vec!["Basics\nDuration: 2 weeks"]);
    }

    #[test]
    fn no_marker_means_no_spans() {
        assert!(segment("Course Name: Algebra\nTerm: Fall").is_empty());
        assert!(extract_modules("").is_empty());
    }

    #[test]
    fn boundary_word_in_prose_truncates_span() {
        let text = "Module: Graphs\nDescription: builds on Module 1 material\n";
        let spans = segment(text);
        assert_eq!(spans[0], "Graphs\nDescription: builds on");
        assert_eq!(spans.len(), 2);
    }

    #[test]
    fn module_fields_fall_back_independently() {
        let module = extract_module("Description: Pointers and references\nTopic: Borrowing");
        assert_eq!(module.name, UNKNOWN_MODULE);
        assert_eq!(module.description, "Pointers and references");
        assert_eq!(module.duration, UNKNOWN_DURATION);
        assert_eq!(module.topics.len(), 1);
        assert_eq!(module.resources, vec!["No resources"]);
    }

    #[test]
    fn module_span_fields_are_extracted() {
        let span = "Module Name: Ownership\nDescription: Moves and borrows\nDuration: 3 weeks\nTopic: Moves\nResources: The Book, Rustlings";
        let module = extract_module(span);
        assert_eq!(module.name, "Ownership");
        assert_eq!(module.description, "Moves and borrows");
        assert_eq!(module.duration, "3 weeks");
        assert_eq!(module.topics[0].name, "Moves");
        assert_eq!(module.resources, vec!["The Book", "Rustlings"]);
    }

    #[test]
    fn module_name_label_is_case_insensitive() {
        let module = extract_module("MODULE NAME:   Lifetimes  \nDuration: 1 week");
        assert_eq!(module.name, "Lifetimes");
    }

    #[test]
    fn module_name_label_is_cut_by_segmentation() {
        // The marker inside "Module Name" opens its own span.
        let modules = extract_modules("module name: X\nmodule: Y");
        assert_eq!(modules.len(), 2);
        assert!(modules.iter().all(|m| m.name == UNKNOWN_MODULE));
    }
}
