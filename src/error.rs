//! Stage error taxonomy.
//!
//! One variant per way a pipeline stage can fail. Every variant is caught at
//! its stage boundary, reported once, and masked with the stage's default
//! value; none of these ever reaches the process exit status.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StageError {
    /// Stage 1: the input file could not be read.
    #[error("failed to read `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stage 2: the document text is not well-formed JSON.
    #[error("document is not well-formed JSON (at JSON path {path})")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Stage 2: the document parsed, but its root is not an object.
    #[error("document root is {found}, expected an object")]
    RootShape { found: &'static str },

    /// Stage 3: the root object has no entry for the array key.
    #[error("key `{key}` is missing from the root object")]
    MissingKey { key: &'static str },

    /// Stage 3: the array key is present but holds something else.
    #[error("key `{key}` holds {found}, expected an array")]
    KeyShape { key: &'static str, found: &'static str },

    /// Stage 4: an array element is not an object.
    #[error("element {index} is {found}, expected an object")]
    ElementShape { index: usize, found: &'static str },

    /// Stage 4: a record field is present with a non-string value.
    #[error("element {index}: field `{field}` holds {found}, expected a string")]
    FieldShape {
        index: usize,
        field: &'static str,
        found: &'static str,
    },
}
