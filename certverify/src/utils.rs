pub(crate) const VERIFY_PATH: &str = "verify";
pub(crate) const MANUAL_VERIFY_PATH: &str = "manual-verify";
pub const CERTIFICATE_PATH: &str = "/validation-certificate";
pub const CERTIFICATE_QUERY_PARAM: &str = "data";

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const API_URL_ENV: &str = "CERTVERIFY_API_URL";

pub(crate) const UPLOAD_FIELD_NAME: &str = "file";
pub(crate) const UPLOAD_FALLBACK_MESSAGE: &str = "Upload failed. Please try again.";
pub(crate) const MANUAL_FALLBACK_MESSAGE: &str = "Manual verification failed. Please try again.";

pub const DEFAULT_QR_TARGET: &str = "https://skillkendra.com";
const QR_SERVICE_URL: &str = "https://api.qrserver.com/v1/create-qr-code/?size=160x160&data=";

/// Image-service URL rendering a QR code that points at `target`.
pub fn qr_code_url(target: &str) -> String {
    format!("{}{}", QR_SERVICE_URL, urlencoding::encode(target))
}

/// Shareable link to the certificate view for an encoded result.
pub fn certificate_link(view_base: &str, token: &str) -> String {
    format!(
        "{}{}?{}={}",
        view_base.trim_end_matches('/'),
        CERTIFICATE_PATH,
        CERTIFICATE_QUERY_PARAM,
        token
    )
}

pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qr_url_percent_encodes_target() {
        assert_eq!(
            qr_code_url("https://issuer.example/cert?id=1&x=y"),
            "https://api.qrserver.com/v1/create-qr-code/?size=160x160&data=https%3A%2F%2Fissuer.example%2Fcert%3Fid%3D1%26x%3Dy"
        );
    }

    #[test]
    fn certificate_link_joins_without_double_slash() {
        assert_eq!(
            certificate_link("http://localhost:3000/", "abc"),
            "http://localhost:3000/validation-certificate?data=abc"
        );
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<a href="x">O'Neil & co</a>"#),
            "&lt;a href=&quot;x&quot;&gt;O&#39;Neil &amp; co&lt;/a&gt;"
        );
    }
}
