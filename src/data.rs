//! Loading assessment records and course catalogs from JSON files.
//!
//! Validation happens here, at the edge: the aggregator trusts every record
//! it is handed.

use campus_models::{AssessmentRecord, Course, NewAssessmentRecord};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};
use validator::Validate;

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Record {index} is invalid: {source}")]
    Validation {
        index: usize,
        #[source]
        source: validator::ValidationErrors,
    },

    #[error("Record {index} has a non-finite {field}")]
    NonFinite { index: usize, field: &'static str },
}

fn read(path: &Path) -> Result<String, DataError> {
    std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses and validates a JSON array of assessment records.
pub fn parse_records(content: &str) -> Result<Vec<AssessmentRecord>, DataError> {
    let payloads: Vec<NewAssessmentRecord> = serde_json::from_str(content)?;

    payloads
        .into_iter()
        .enumerate()
        .map(|(index, payload)| {
            if !payload.score.is_finite() {
                return Err(DataError::NonFinite {
                    index,
                    field: "score",
                });
            }
            if !payload.weight.is_finite() {
                return Err(DataError::NonFinite {
                    index,
                    field: "weight",
                });
            }
            payload
                .validate()
                .map_err(|source| DataError::Validation { index, source })?;
            Ok(AssessmentRecord::from(payload))
        })
        .collect()
}

#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_records(path: &Path) -> Result<Vec<AssessmentRecord>, DataError> {
    let records = parse_records(&read(path)?)?;
    debug!(count = records.len(), "Loaded assessment records");
    Ok(records)
}

#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_courses(path: &Path) -> Result<Vec<Course>, DataError> {
    let courses: Vec<Course> = serde_json::from_str(&read(path)?)?;
    debug!(count = courses.len(), "Loaded course catalog");
    Ok(courses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_models::{AssessmentKind, StudentId};

    #[test]
    fn test_parse_records() {
        let records = parse_records(
            r#"[
                {"student_id":1,"course_id":2,"assessment_type":"CA","score":72.5,"term":"Spring 2026"},
                {"student_id":1,"course_id":2,"assessment_type":"Final","is_resit":true,"score":61,"weight":2.0}
            ]"#,
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].student_id, StudentId::new(1));
        assert_eq!(records[0].term, "Spring 2026");
        assert_eq!(records[1].kind, AssessmentKind::FinalExam { is_resit: true });
        assert_eq!(records[1].weight, 2.0);
    }

    #[test]
    fn test_out_of_range_score_rejected() {
        let err = parse_records(
            r#"[
                {"student_id":1,"course_id":2,"assessment_type":"CA","score":70},
                {"student_id":1,"course_id":2,"assessment_type":"Final","score":101}
            ]"#,
        )
        .unwrap_err();
        assert!(matches!(err, DataError::Validation { index: 1, .. }));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let err = parse_records(
            r#"[{"student_id":1,"course_id":2,"assessment_type":"CA","score":70,"weight":-1}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, DataError::Validation { index: 0, .. }));
    }

    #[test]
    fn test_unknown_assessment_type_rejected() {
        let err = parse_records(
            r#"[{"student_id":1,"course_id":2,"assessment_type":"Quiz","score":70}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, DataError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_records(Path::new("/nonexistent/records.json")).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }
}
