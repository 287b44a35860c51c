use serde_json::{Map, Value};

use crate::error::StageError;
use crate::tree::kind_of;

/// The one key this tool knows about. No fallback search for alternates.
pub const PEOPLE_KEY: &str = "people";

/// Pull the `"people"` array out of the root object.
pub fn people_array(root: &Map<String, Value>) -> Result<Vec<Value>, StageError> {
    match root.get(PEOPLE_KEY) {
        None => Err(StageError::MissingKey { key: PEOPLE_KEY }),
        Some(Value::Array(elements)) => Ok(elements.clone()),
        Some(other) => Err(StageError::KeyShape {
            key: PEOPLE_KEY,
            found: kind_of(other),
        }),
    }
}

// ------------------------------- Tests ------------------------------------ //
