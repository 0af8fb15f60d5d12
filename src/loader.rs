use crate::error::{CheckError, LoadCause};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read and parse a mandatory JSON document.
pub fn load_document(path: &Path) -> Result<Value, CheckError> {
    debug!(path = %path.display(), "loading document");

    let load_err = |source: LoadCause| CheckError::Load {
        path: path.to_path_buf(),
        source,
    };

    let content = fs::read_to_string(path).map_err(|e| load_err(e.into()))?;
    let doc: Value = serde_json::from_str(&content).map_err(|e| load_err(e.into()))?;
    Ok(doc)
}
