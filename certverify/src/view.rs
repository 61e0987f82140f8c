use crate::{
    codec,
    response::VerificationResult,
    utils::{escape_html, qr_code_url, DEFAULT_QR_TARGET},
};
use chrono::{DateTime, Duration, TimeZone};
use url::Url;

/// A certificate stays valid for three 365-day years from the day it is shown.
pub const CERTIFICATE_VALIDITY_DAYS: i64 = 3 * 365;

const DATE_FORMAT: &str = "%B %-d, %Y";

/// What the certificate page shows for a given `data` parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CertificateView {
    NoData,
    Certificate(CertificateDetails),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificateDetails {
    pub result: VerificationResult,
    pub verification_date: String,
    pub expiry_date: String,
    pub qr_code_url: String,
}

impl CertificateView {
    /// Builds the view for an optional token. A missing or undecodable token
    /// both give [`CertificateView::NoData`].
    pub fn from_token<Tz>(token: Option<&str>, now: DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        match token.map(codec::decode) {
            Some(Ok(result)) => Self::Certificate(CertificateDetails::new(result, now)),
            _ => Self::NoData,
        }
    }

    pub fn render_html(&self) -> String {
        match self {
            Self::NoData => NO_DATA_PAGE.to_string(),
            Self::Certificate(details) => details.render_html(),
        }
    }
}

impl CertificateDetails {
    pub fn new<Tz>(result: VerificationResult, now: DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let expiry = now.clone() + Duration::days(CERTIFICATE_VALIDITY_DAYS);
        let qr_target = present(&result.extraction.issuer_url).unwrap_or(DEFAULT_QR_TARGET);
        Self {
            qr_code_url: qr_code_url(qr_target),
            verification_date: now.format(DATE_FORMAT).to_string(),
            expiry_date: expiry.format(DATE_FORMAT).to_string(),
            result,
        }
    }

    fn render_html(&self) -> String {
        let extraction = &self.result.extraction;
        let mut sidebar = String::new();
        let mut body = String::new();

        sidebar.push_str(&field("Date of Verification", &self.verification_date));
        sidebar.push_str(&field("Expiry Date", &self.expiry_date));
        if let Some(id) = present(&extraction.certificate_id) {
            sidebar.push_str(&field("CFT ID", &format!("#{}", id)));
        }
        if let Some(url) = present(&extraction.issuer_url) {
            sidebar.push_str(&issuer_link(url));
        }
        if let Some(org) = present(&extraction.issuer_org) {
            sidebar.push_str(&field("Organization", org));
        }

        if let Some(name) = present(&extraction.candidate_name) {
            body.push_str(&field("Issued To", name));
        }
        if let Some(org) = present(&extraction.issuer_org) {
            body.push_str(&field("Issuing Organization", org));
        }
        body.push_str(&field("Verification Status", &self.result.verification.message));

        let mut footer = format!(
            "<p>Status: <span class=\"verdict\">{}</span></p>",
            escape_html(&self.result.final_verdict)
        );
        if let Some(id) = present(&extraction.certificate_id) {
            footer.push_str(&format!("<p>ID: {}</p>", escape_html(id)));
        }

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>SkillKendra Verification Certificate</title>
</head>
<body>
<aside>
<img src="{qr}" alt="Verification QR Code" width="160" height="160">
<p>Official Document</p>
<h2>Verified and Authenticated by SkillKendra</h2>
{sidebar}</aside>
<main>
<h1>Certificate of Verification</h1>
<p>This document certifies that the credential has been verified and authenticated.</p>
{body}<footer>{footer}</footer>
</main>
</body>
</html>
"#,
            qr = escape_html(&self.qr_code_url),
        )
    }
}

/// An extracted value worth showing; empty strings count as absent.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Only http(s) issuer URLs become clickable; anything else is shown as text.
fn issuer_link(url: &str) -> String {
    let linkable = Url::parse(url)
        .map(|parsed| matches!(parsed.scheme(), "http" | "https"))
        .unwrap_or(false);
    if !linkable {
        return field("CFT URL", url);
    }
    let url = escape_html(url);
    format!(
        "<div class=\"field\"><p class=\"label\">CFT URL</p><a href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\">{url}</a></div>\n"
    )
}

fn field(label: &str, value: &str) -> String {
    format!(
        "<div class=\"field\"><p class=\"label\">{}</p><p>{}</p></div>\n",
        label,
        escape_html(value)
    )
}

const NO_DATA_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>SkillKendra Verification Certificate</title>
</head>
<body>
<p>No certificate data available</p>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::{Extraction, VerificationMessage};
    use chrono::Utc;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    fn result(extraction: Extraction) -> VerificationResult {
        VerificationResult {
            extraction,
            verification: VerificationMessage {
                message: "Verified".to_string(),
            },
            final_verdict: "PASS".to_string(),
        }
    }

    #[test]
    fn missing_token_is_no_data() {
        let view = CertificateView::from_token(None, now());
        assert_eq!(view, CertificateView::NoData);
        assert!(view.render_html().contains("No certificate data available"));
    }

    #[test]
    fn undecodable_token_is_no_data() {
        assert_eq!(
            CertificateView::from_token(Some("%%%"), now()),
            CertificateView::NoData
        );
    }

    #[test]
    fn dates_are_derived_from_render_time() {
        let details = CertificateDetails::new(result(Extraction::default()), now());
        assert_eq!(details.verification_date, "October 19, 2026");
        // 1095 days later; 2028 is a leap year.
        assert_eq!(details.expiry_date, "October 18, 2029");
    }

    #[test]
    fn qr_falls_back_to_default_target() {
        let details = CertificateDetails::new(result(Extraction::default()), now());
        assert_eq!(
            details.qr_code_url,
            "https://api.qrserver.com/v1/create-qr-code/?size=160x160&data=https%3A%2F%2Fskillkendra.com"
        );
    }

    #[test]
    fn qr_uses_issuer_url() {
        let details = CertificateDetails::new(
            result(Extraction {
                issuer_url: Some("https://issuer.example/c/42".to_string()),
                ..Default::default()
            }),
            now(),
        );
        assert!(details
            .qr_code_url
            .ends_with("data=https%3A%2F%2Fissuer.example%2Fc%2F42"));
    }

    #[test]
    fn renders_present_fields_only() {
        let token = codec::encode(&result(Extraction {
            candidate_name: Some("Jane Doe".to_string()),
            certificate_id: Some("ABC123".to_string()),
            ..Default::default()
        }))
        .unwrap();
        let html = CertificateView::from_token(Some(token.as_str()), now()).render_html();
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("#ABC123"));
        assert!(html.contains("ID: ABC123"));
        assert!(html.contains("October 19, 2026"));
        assert!(!html.contains("Issuing Organization"));
        assert!(!html.contains("CFT URL"));
    }

    #[test]
    fn empty_fields_count_as_absent() {
        let details = CertificateDetails::new(
            result(Extraction {
                candidate_name: Some(String::new()),
                issuer_org: Some(String::new()),
                issuer_url: Some(String::new()),
                certificate_id: Some(String::new()),
            }),
            now(),
        );
        assert!(details
            .qr_code_url
            .ends_with("data=https%3A%2F%2Fskillkendra.com"));

        let html = CertificateView::Certificate(details).render_html();
        assert!(!html.contains("CFT ID"));
        assert!(!html.contains("CFT URL"));
        assert!(!html.contains("Organization"));
        assert!(!html.contains("Issued To"));
        assert!(!html.contains("ID: "));
    }

    #[test]
    fn issuer_url_links_only_for_http() {
        let render = |url: &str| {
            CertificateView::Certificate(CertificateDetails::new(
                result(Extraction {
                    issuer_url: Some(url.to_string()),
                    ..Default::default()
                }),
                now(),
            ))
            .render_html()
        };

        let html = render("javascript:alert(document.cookie)");
        assert!(!html.contains("<a href"));
        assert!(html.contains("<p>javascript:alert(document.cookie)</p>"));

        let html = render("not a url");
        assert!(!html.contains("<a href"));

        let html = render("https://coursera.org/verify/ABC123");
        assert!(html.contains(r#"<a href="https://coursera.org/verify/ABC123""#));
    }

    #[test]
    fn escapes_backend_text() {
        let details = CertificateDetails::new(
            result(Extraction {
                candidate_name: Some("<script>alert(1)</script>".to_string()),
                ..Default::default()
            }),
            now(),
        );
        let html = CertificateView::Certificate(details).render_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }
}
