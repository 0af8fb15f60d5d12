use std::path::PathBuf;
use thiserror::Error;

/// Every way a check run can stop early.
///
/// All kinds share exit status 1; callers that need to tell them apart
/// match on the variant (or parse the printed line).
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("configuration directory does not exist: {}", .0.display())]
    DirectoryMissing(PathBuf),

    #[error("failed to load JSON file: {}, error: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: LoadCause,
    },

    #[error("missing configuration: {path}")]
    FieldMissing { path: String },

    #[error("{file} is missing field {path}")]
    FieldMissingIn { file: String, path: String },

    #[error("invalid configuration: {field} should be a {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
    },

    #[error("chip architecture config file not found: {0}")]
    ArchFileMissing(String),

    #[error("configuration rejected, exiting.")]
    Rejected,

    #[error("input closed before an answer was given")]
    InputClosed,

    #[error("failed to read operator input: {0}")]
    Input(#[source] std::io::Error),

    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

#[derive(Debug, Error)]
pub enum LoadCause {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

impl CheckError {
    pub fn exit_code(&self) -> i32 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_item() {
        let e = CheckError::FieldMissing {
            path: "chip_simulate_fake_data".into(),
        };
        assert!(e.to_string().contains("chip_simulate_fake_data"));

        let e = CheckError::ArchFileMissing("ChipArchConfig_D72.json".into());
        assert!(e.to_string().contains("ChipArchConfig_D72.json"));

        let e = CheckError::TypeMismatch {
            field: "chip_simulate_fake_data".into(),
            expected: "boolean (True/False)",
        };
        assert!(e.to_string().contains("boolean"));
    }

    #[test]
    fn every_kind_exits_with_one() {
        assert_eq!(CheckError::Rejected.exit_code(), 1);
        assert_eq!(CheckError::InputClosed.exit_code(), 1);
        assert_eq!(CheckError::DirectoryMissing("./Config".into()).exit_code(), 1);
    }
}
