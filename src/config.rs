use crate::error::Error;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_INSTRUCTIONS: &str = "Answer user queries concisely but correctly; at the end \
     of each response include in parentheses a better written version of the prompt to help the \
     user get better at prompting.";

/// Credentials loaded once at startup from a JSON secret file.
#[derive(Debug, Deserialize)]
pub struct Secret {
    pub open_ai_api_key: String,
}

impl Secret {
    pub fn from_filepath(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path).map_err(|source| Error::SecretRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| Error::SecretParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_secret() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"open_ai_api_key": "sk-test"}}"#).unwrap();

        let secret = Secret::from_filepath(file.path()).unwrap();
        assert_eq!(secret.open_ai_api_key, "sk-test");
    }

    #[test]
    fn test_missing_secret_file() {
        let result = Secret::from_filepath(Path::new("/nonexistent/.env"));
        assert!(matches!(result, Err(Error::SecretRead { .. })));
    }

    #[test]
    fn test_malformed_secret_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = Secret::from_filepath(file.path());
        assert!(matches!(result, Err(Error::SecretParse { .. })));
    }
}
