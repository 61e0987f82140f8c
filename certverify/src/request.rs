use serde::{Deserialize, Serialize};
use std::path::Path;

/// Identifying fields a user can supply instead of uploading a document.
/// Both are optional here; the backend decides whether the combination is enough.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualVerificationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_url: Option<String>,
}

impl ManualVerificationRequest {
    pub fn by_certificate_id(certificate_id: impl Into<String>) -> Self {
        Self {
            certificate_id: Some(certificate_id.into()),
            issuer_url: None,
        }
    }

    pub fn with_issuer_url(mut self, issuer_url: impl Into<String>) -> Self {
        self.issuer_url = Some(issuer_url.into());
        self
    }
}

/// Credential document to upload, with the file name it is declared under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, anyhow::Error> {
        let content = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .ok_or_else(|| anyhow::anyhow!("{} does not name a file", path.display()))?
            .to_string_lossy()
            .into_owned();
        Ok(Self { file_name, content })
    }
}
