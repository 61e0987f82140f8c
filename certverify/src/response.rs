use serde::{Deserialize, Serialize};

/// Fields the backend managed to read from the submitted credential.
/// Each one is independently optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_org: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationMessage {
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub extraction: Extraction,
    pub verification: VerificationMessage,
    pub final_verdict: String,
}

/// Error payload the backend returns alongside a non-success status.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

impl ErrorBody {
    /// The backend-supplied `detail`, if the body carries a usable one.
    pub(crate) fn parse(body: &[u8]) -> Option<String> {
        serde_json::from_slice::<ErrorBody>(body)
            .ok()?
            .detail
            .filter(|detail| !detail.is_empty())
    }
}
