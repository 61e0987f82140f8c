use crate::{
    error::VerificationRequestError,
    request::{ManualVerificationRequest, UploadFile},
    response::{ErrorBody, VerificationResult},
    utils::{
        API_URL_ENV, DEFAULT_API_URL, MANUAL_FALLBACK_MESSAGE, MANUAL_VERIFY_PATH,
        UPLOAD_FALLBACK_MESSAGE, UPLOAD_FIELD_NAME, VERIFY_PATH,
    },
};
use log::{debug, info, warn};
use reqwest::{
    multipart::{Form, Part},
    Client, RequestBuilder,
};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use url::Url;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_base_url: Url,
}

impl ClientConfig {
    pub fn new(api_base_url: Url) -> Self {
        Self { api_base_url }
    }

    /// The local development backend at `http://localhost:8000`.
    pub fn local() -> Result<Self, url::ParseError> {
        Ok(Self::new(Url::parse(DEFAULT_API_URL)?))
    }

    /// Reads the base URL from `CERTVERIFY_API_URL`, falling back to the
    /// local development backend when it is unset or blank.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        match std::env::var(API_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => Ok(Self::new(Url::parse(value.trim())?)),
            _ => Ok(Self::local()?),
        }
    }
}

pub struct VerificationClient {
    config: ClientConfig,
    http: Client,
}

impl VerificationClient {
    pub fn new(config: ClientConfig) -> Result<Self, anyhow::Error> {
        debug!("Creating new VerificationClient for {}", config.api_base_url);
        let http = Client::builder().build()?;
        Ok(Self { config, http })
    }

    /// Uploads a credential document for extraction and verification.
    pub async fn verify_by_upload(
        &self,
        file: UploadFile,
    ) -> Result<VerificationResult, VerificationRequestError> {
        debug!(
            "Uploading {} ({} bytes) for verification",
            file.file_name,
            file.content.len()
        );
        let part = Part::bytes(file.content).file_name(file.file_name);
        let form = Form::new().part(UPLOAD_FIELD_NAME, part);
        let request = self.http.post(self.endpoint(VERIFY_PATH)?).multipart(form);
        self.send(request, UPLOAD_FALLBACK_MESSAGE).await
    }

    /// Verifies a credential from identifiers alone, without a document.
    pub async fn verify_manually(
        &self,
        request: &ManualVerificationRequest,
    ) -> Result<VerificationResult, VerificationRequestError> {
        debug!(
            "Requesting manual verification (certificate_id: {:?}, issuer_url: {:?})",
            request.certificate_id, request.issuer_url
        );
        let builder = self
            .http
            .post(self.endpoint(MANUAL_VERIFY_PATH)?)
            .json(request);
        self.send(builder, MANUAL_FALLBACK_MESSAGE).await
    }

    async fn send(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> Result<VerificationResult, VerificationRequestError> {
        let start = Instant::now();
        let resp = request.send().await.map_err(|e| {
            warn!("Verification request failed to send: {}", e);
            VerificationRequestError::from(e)
        })?;
        let status = resp.status();
        debug!("Received {} from backend in {:?}", status, start.elapsed());

        if !status.is_success() {
            let body = resp.bytes().await.unwrap_or_default();
            let message = ErrorBody::parse(&body).unwrap_or_else(|| fallback.to_string());
            warn!("Backend rejected verification with {}: {}", status, message);
            return Err(VerificationRequestError::new(message));
        }

        let body = resp.bytes().await?;
        let result: VerificationResult = serde_json::from_slice(&body).map_err(|e| {
            warn!("Backend returned an unreadable verification result: {}", e);
            VerificationRequestError::new(format!(
                "The verification service returned an unreadable result: {}",
                e
            ))
        })?;
        info!("Verification completed with verdict {}", result.final_verdict);
        Ok(result)
    }

    fn endpoint(&self, path: &str) -> Result<Url, VerificationRequestError> {
        let mut base = self.config.api_base_url.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        base.join(path).map_err(|e| {
            VerificationRequestError::new(format!("Invalid verification service URL: {}", e))
        })
    }

    pub fn get_api_base_url(&self) -> &Url {
        &self.config.api_base_url
    }
}
