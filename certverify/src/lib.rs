//! # certverify - credential verification client and shareable certificates
//!
//! A Rust library for checking whether a credential (a certificate document, or just its
//! identifier) is authentic against a remote verification service, and for turning the
//! verdict into a self-contained "verification certificate" link. The whole result travels
//! inside the link, so the certificate page never has to look anything up.
//!
//! ## Quick Start
//!
//! Add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! certverify = "0.1.0"
//! tokio = { version = "1", features = ["full"] }
//! ```
//!
//! ## Basic Usage
//!
//! ### 1. Verify a Credential
//!
//! Point a [`client::VerificationClient`] at the verification service and either upload the
//! document or look it up by identifier:
//!
//! ```no_run
//! use std::path::Path;
//! use certverify::client::{ClientConfig, VerificationClient};
//! use certverify::request::{ManualVerificationRequest, UploadFile};
//!
//! # async fn run() -> Result<(), anyhow::Error> {
//! let client = VerificationClient::new(ClientConfig::from_env()?)?;
//!
//! let result = client
//!     .verify_by_upload(UploadFile::from_path(Path::new("diploma.pdf"))?)
//!     .await?;
//! println!("{}: {}", result.final_verdict, result.verification.message);
//!
//! let request = ManualVerificationRequest::by_certificate_id("ABC123")
//!     .with_issuer_url("https://coursera.org/verify/ABC123");
//! let result = client.verify_manually(&request).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. Share the Result
//!
//! Encode the result into a URL-safe token and build the certificate link:
//!
//! ```
//! use certverify::{codec, utils::certificate_link};
//! # use certverify::response::{Extraction, VerificationMessage, VerificationResult};
//! # let result = VerificationResult {
//! #     extraction: Extraction::default(),
//! #     verification: VerificationMessage { message: "Verified".to_string() },
//! #     final_verdict: "PASS".to_string(),
//! # };
//!
//! let token = codec::encode(&result).unwrap();
//! let link = certificate_link("http://localhost:3000", token.as_str());
//! assert_eq!(codec::decode(token.as_str()), Ok(result));
//! ```
//!
//! ### 3. Serve the Certificate Page
//!
//! ```no_run
//! use certverify::server::{ServerApp, ServerConfig};
//!
//! # async fn run() -> std::io::Result<()> {
//! ServerApp::new(ServerConfig::default()).run().await
//! # }
//! ```

pub mod client;
pub mod codec;
pub mod error;
pub mod request;
pub mod response;
pub mod server;
pub mod utils;
pub mod view;
