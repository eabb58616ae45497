pub mod response;
pub mod syllabus;

pub use response::{HealthResponse, ParseMetadata, ParseResponse, ParseTextRequest};
pub use syllabus::{ModuleRecord, SyllabusRecord, TopicRecord};
