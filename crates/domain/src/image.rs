use std::fmt::{Display, Formatter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Location of a displayable image, either a web URL or a `file://` URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageId(String);

impl ImageId {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::EmptyImageId);
        }
        Ok(Self(value))
    }

    pub fn from_file_path(path: &Path) -> Result<Self, DomainError> {
        let display = path.to_string_lossy().replace('\\', "/");
        if display.is_empty() {
            return Err(DomainError::EmptyImageId);
        }
        if display.starts_with('/') {
            Self::new(format!("file://{display}"))
        } else {
            Self::new(format!("file:///{display}"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ImageId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ImageId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ImageId> for String {
    fn from(value: ImageId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_id_must_not_be_blank() {
        assert!(ImageId::new("https://example.com/a.jpeg").is_ok());
        assert!(matches!(ImageId::new(""), Err(DomainError::EmptyImageId)));
        assert!(matches!(ImageId::new("  "), Err(DomainError::EmptyImageId)));
    }

    #[test]
    fn file_paths_become_file_uris() {
        let id = ImageId::from_file_path(Path::new("/photos/food/a.jpg")).expect("valid path");
        assert_eq!(id.as_str(), "file:///photos/food/a.jpg");
    }

    #[test]
    fn deserialization_rejects_blank_ids() {
        let parsed: Result<ImageId, _> = serde_json::from_str("\"\"");
        assert!(parsed.is_err());
        let parsed: ImageId = serde_json::from_str("\"https://x/y.jpg\"").expect("valid id");
        assert_eq!(parsed.as_str(), "https://x/y.jpg");
    }
}
