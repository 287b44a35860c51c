//! Generic JSON tree layer: document text → `serde_json::Value`, rooted at an
//! object. All-or-nothing: malformed text or a non-object root fails the whole
//! stage; there is no partial-parse recovery.

use serde_json::{Map, Value};

use crate::error::StageError;

/// Parse a document and peel off the root object.
/// Parse failures carry JSON-path context in their message.
pub fn parse_document(text: &str) -> Result<Map<String, Value>, StageError> {
    let de = &mut serde_json::Deserializer::from_str(text);
    let root: Value =
        serde_path_to_error::deserialize(de).map_err(|err| StageError::Parse {
            path: err.path().to_string(),
            source: err.into_inner(),
        })?;
    match root {
        Value::Object(map) => Ok(map),
        other => Err(StageError::RootShape {
            found: kind_of(&other),
        }),
    }
}

/// Human name for a JSON value's kind, for diagnostics.
pub fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_root_parses() {
        let root = parse_document(r#"{"people": [], "extra": 1}"#).unwrap();
        assert_eq!(root.len(), 2);
        assert!(root.get("people").unwrap().is_array());
    }

    #[test]
    fn malformed_text_is_a_parse_error() {
        let err = parse_document(r#"{"people": ["#).unwrap_err();
        assert!(matches!(err, StageError::Parse { .. }));
    }

    #[test]
    fn parse_errors_name_the_json_path() {
        // the bad token sits inside people[0]
        let err = parse_document(r#"{"people": [{"name": nope}]}"#).unwrap_err();
        match err {
            StageError::Parse { path, .. } => assert!(path.starts_with("people[0]")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn array_root_is_a_shape_error() {
        let err = parse_document(r#"[{"name": "Ada"}]"#).unwrap_err();
        match err {
            StageError::RootShape { found } => assert_eq!(found, "an array"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_text_is_a_parse_error() {
        assert!(matches!(
            parse_document("").unwrap_err(),
            StageError::Parse { .. }
        ));
    }
}
