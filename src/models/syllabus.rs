use serde::{Deserialize, Serialize};

pub const UNKNOWN: &str = "Unknown";
pub const NO_DESCRIPTION_PROVIDED: &str = "No description provided";
pub const NO_PREREQUISITES: &str = "No prerequisites";
pub const NO_OBJECTIVES_PROVIDED: &str = "No objectives provided";

pub const UNKNOWN_MODULE: &str = "Unknown module";
pub const NO_MODULE_DESCRIPTION: &str = "No description";
pub const UNKNOWN_DURATION: &str = "Unknown duration";
pub const NO_RESOURCES: &str = "No resources";

pub const TOPIC_DESCRIPTION_PLACEHOLDER: &str = "Description for this topic";
pub const TOPIC_DURATION_PLACEHOLDER: &str = "Duration for this topic";

/// Structured view of one syllabus document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyllabusRecord {
    pub course_name: String,
    pub instructor: String,
    pub term: String,
    pub description: String,
    pub modules: Vec<ModuleRecord>,
    pub prerequisites: String,
    pub objectives: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRecord {
    pub name: String,
    pub description: String,
    pub duration: String,
    pub topics: Vec<TopicRecord>,
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRecord {
    pub name: String,
    pub description: String,
    pub duration: String,
    pub completed: bool,
}

impl TopicRecord {
    /// A freshly extracted topic: only the name comes from the document.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: TOPIC_DESCRIPTION_PLACEHOLDER.to_string(),
            duration: TOPIC_DURATION_PLACEHOLDER.to_string(),
            completed: false,
        }
    }
}
