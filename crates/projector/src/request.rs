//! The `{ data, fields }` request envelope.

use serde::Deserialize;

use crate::Result;
use crate::projector::{ProjectedRecord, Projector, Record};

/// A select request: the records to project and the fields to keep.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SelectRequest {
    pub data: Vec<Record>,
    pub fields: Vec<String>,
}

impl SelectRequest {
    /// Creates a request from already-decoded parts.
    pub fn new(data: Vec<Record>, fields: Vec<String>) -> Self {
        Self { data, fields }
    }

    /// Decodes a request from a JSON body.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Builds the projector for this request's field list.
    pub fn projector(&self) -> Projector {
        Projector::new(self.fields.iter().cloned())
    }

    /// Runs the projection described by this request.
    pub fn project(&self) -> Vec<ProjectedRecord> {
        self.projector().project(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProjectorError;

    #[test]
    fn decodes_envelope() {
        let req = SelectRequest::from_slice(
            br#"{"data": [{"name": "abdelkrim", "age": 10}], "fields": ["name"]}"#,
        )
        .unwrap();
        assert_eq!(req.data.len(), 1);
        assert_eq!(req.fields, vec!["name".to_string()]);
    }

    #[test]
    fn decoded_records_keep_key_order() {
        let req = SelectRequest::from_slice(br#"{"data": [{"z": 1, "a": 2}], "fields": []}"#)
            .unwrap();
        let keys: Vec<&str> = req.data[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn missing_fields_member_is_rejected() {
        let err = SelectRequest::from_slice(br#"{"data": []}"#).unwrap_err();
        assert!(matches!(err, ProjectorError::Decode(_)));
        assert!(err.to_string().contains("fields"));
    }

    #[test]
    fn missing_data_member_is_rejected() {
        let err = SelectRequest::from_slice(br#"{"fields": []}"#).unwrap_err();
        assert!(err.to_string().contains("data"));
    }

    #[test]
    fn non_object_records_are_rejected() {
        assert!(SelectRequest::from_slice(br#"{"data": [1, 2], "fields": []}"#).is_err());
    }

    #[test]
    fn non_string_fields_are_rejected() {
        assert!(SelectRequest::from_slice(br#"{"data": [], "fields": [1]}"#).is_err());
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(SelectRequest::from_slice(b"{\"data\": [").is_err());
    }

    #[test]
    fn project_uses_request_fields() {
        let req = SelectRequest::from_slice(
            br#"{"data": [{"name": "abdelkrim", "age": 10, "birthplace": "Algeria"}],
                 "fields": ["name", "age"]}"#,
        )
        .unwrap();
        let out = serde_json::to_string(&req.project()).unwrap();
        assert_eq!(out, r#"[{"name":"abdelkrim","age":10}]"#);
    }

    #[test]
    fn new_request_projects_like_decoded_one() {
        let decoded =
            SelectRequest::from_slice(br#"{"data": [{"a": 1}], "fields": ["a", "b"]}"#).unwrap();
        let record: Record = serde_json::from_value(serde_json::json!({"a": 1})).unwrap();
        let built = SelectRequest::new(vec![record], vec!["a".into(), "b".into()]);
        assert_eq!(built, decoded);
        assert_eq!(built.projector().fields(), &["a".to_string(), "b".to_string()]);
        assert_eq!(built.project(), decoded.project());
    }
}
