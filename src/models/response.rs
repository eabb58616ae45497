use serde::{Deserialize, Serialize};

use super::syllabus::SyllabusRecord;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResponse {
    pub status: String,
    pub syllabus_data: SyllabusRecord,
    pub metadata: ParseMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseMetadata {
    pub file_name: Option<String>,
    pub file_type: String,
    pub course_name: String,
    pub instructor: String,
    pub term: String,
    pub parsed_at: String,
}

impl ParseResponse {
    pub fn success(record: SyllabusRecord, file_name: Option<String>, file_type: String) -> Self {
        let metadata = ParseMetadata {
            file_name,
            file_type,
            course_name: record.course_name.clone(),
            instructor: record.instructor.clone(),
            term: record.term.clone(),
            parsed_at: chrono::Utc::now().to_rfc3339(),
        };

        Self {
            status: "success".to_string(),
            syllabus_data: record,
            metadata,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseTextRequest {
    pub text: String,
}
