use std::path::Path;

use crate::error::StageError;

/// Read the whole document into memory as text.
/// The file handle closes on every path, success or failure.
pub fn read_file(path: &Path) -> Result<String, StageError> {
    std::fs::read_to_string(path).map_err(|source| StageError::Read {
        path: path.to_path_buf(),
        source,
    })
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_full_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("file.txt");
        std::fs::write(&path, "{\"people\": []}").unwrap();
        assert_eq!(read_file(&path).unwrap(), "{\"people\": []}");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_file(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, StageError::Read { .. }));
        assert!(err.to_string().contains("nope.txt"));
    }
}
