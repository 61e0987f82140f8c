//! URL-embeddable encoding of a [`VerificationResult`].
//!
//! A token is the JSON form of the result, base64-encoded with the URL-safe
//! alphabet and no padding, so it can sit in a query parameter untouched.

use crate::{error::DecodeFailure, response::VerificationResult};
use base64::{
    alphabet,
    engine::{
        general_purpose::URL_SAFE_NO_PAD, DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig,
    },
    Engine as _,
};
use log::debug;
use std::fmt;

const LENIENT_CONFIG: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT_CONFIG);
// Links built by browser `btoa` use the standard alphabet.
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT_CONFIG);

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DecodeStage {
    Transport,
    Structure,
}

pub fn encode(result: &VerificationResult) -> Result<Token, serde_json::Error> {
    let json = serde_json::to_vec(result)?;
    Ok(Token(URL_SAFE_NO_PAD.encode(json)))
}

pub fn decode(token: &str) -> Result<VerificationResult, DecodeFailure> {
    decode_staged(token).map_err(|stage| {
        debug!("Discarding certificate token: {:?} stage failed", stage);
        DecodeFailure
    })
}

pub(crate) fn decode_staged(token: &str) -> Result<VerificationResult, DecodeStage> {
    // Form decoding turns a standard-alphabet `+` into a space.
    let token = token.trim().replace(' ', "+");
    let bytes = URL_SAFE_LENIENT
        .decode(&token)
        .or_else(|_| STANDARD_LENIENT.decode(&token))
        .map_err(|_| DecodeStage::Transport)?;
    serde_json::from_slice(&bytes).map_err(|_| DecodeStage::Structure)
}
