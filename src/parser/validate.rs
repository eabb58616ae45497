//! Presence-only structural check over the serialized record.
//!
//! Values are not type-checked beyond `modules` and `topics` being arrays.

use serde_json::{Map, Value};

use crate::models::SyllabusRecord;

const SYLLABUS_FIELDS: [&str; 7] = [
    "courseName",
    "instructor",
    "term",
    "description",
    "modules",
    "prerequisites",
    "objectives",
];

const MODULE_FIELDS: [&str; 5] = ["name", "description", "duration", "topics", "resources"];

const TOPIC_FIELDS: [&str; 4] = ["name", "description", "duration", "completed"];

fn has_all(object: &Map<String, Value>, fields: &[&str]) -> bool {
    fields.iter().all(|field| object.contains_key(*field))
}

/// True when `value` carries every required key at every level.
pub fn validate(value: &Value) -> bool {
    let Some(syllabus) = value.as_object() else {
        return false;
    };
    if !has_all(syllabus, &SYLLABUS_FIELDS) {
        return false;
    }

    let Some(modules) = syllabus.get("modules").and_then(Value::as_array) else {
        return false;
    };

    modules.iter().all(|module| {
        let Some(module) = module.as_object() else {
            return false;
        };
        if !has_all(module, &MODULE_FIELDS) {
            return false;
        }

        match module.get("topics").and_then(Value::as_array) {
            Some(topics) => topics
                .iter()
                .all(|topic| topic.as_object().is_some_and(|t| has_all(t, &TOPIC_FIELDS))),
            None => false,
        }
    })
}

/// Validate a typed record through its wire representation.
pub fn validate_record(record: &SyllabusRecord) -> bool {
    serde_json::to_value(record).is_ok_and(|value| validate(&value))
}
