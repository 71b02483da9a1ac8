//! Toast signaling protocol: the three `X-Toast-*` response headers and their
//! page meta tag equivalents, read on the client and written on the server.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use resumo_core::Toast;
use scraper::{Html, Selector};
use thiserror::Error;

pub const TOAST_MESSAGE_HEADER: &str = "x-toast-message";
pub const TOAST_TYPE_HEADER: &str = "x-toast-type";
pub const TOAST_DURATION_HEADER: &str = "x-toast-duration";

// Meta tag names mirror the header names.
const META_NAMES: [&str; 3] = [TOAST_MESSAGE_HEADER, TOAST_TYPE_HEADER, TOAST_DURATION_HEADER];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignalError {
    #[error("toast message cannot be sent as a header value")]
    InvalidHeaderValue,
}

/// Reads a toast from response headers. No message header, or an empty one,
/// means no toast.
pub fn toast_from_headers(headers: &HeaderMap) -> Option<Toast> {
    let message = header_text(headers, TOAST_MESSAGE_HEADER)?;
    if message.is_empty() {
        return None;
    }
    let kind = header_text(headers, TOAST_TYPE_HEADER);
    let duration = header_text(headers, TOAST_DURATION_HEADER);
    Some(Toast::from_signal(
        &message,
        kind.as_deref(),
        duration.as_deref(),
    ))
}

fn header_text(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}

/// Reads a toast from `<meta name="x-toast-*">` tags in the page head.
pub fn toast_from_meta(html: &str) -> Option<Toast> {
    let doc = Html::parse_document(html);
    let [message, kind, duration] = META_NAMES.map(|name| meta_content(&doc, name));
    let message = message.filter(|m| !m.is_empty())?;
    Some(Toast::from_signal(
        &message,
        kind.as_deref(),
        duration.as_deref(),
    ))
}

fn meta_content(doc: &Html, name: &str) -> Option<String> {
    let selector = Selector::parse(&format!(r#"head meta[name="{name}"]"#)).ok()?;
    doc.select(&selector)
        .next()
        .and_then(|node| node.value().attr("content"))
        .map(ToOwned::to_owned)
}

/// Writes the three toast headers onto an outgoing response.
pub fn apply_toast_headers(headers: &mut HeaderMap, toast: &Toast) -> Result<(), SignalError> {
    let message = HeaderValue::from_bytes(toast.message.as_bytes())
        .map_err(|_| SignalError::InvalidHeaderValue)?;
    headers.insert(HeaderName::from_static(TOAST_MESSAGE_HEADER), message);
    headers.insert(
        HeaderName::from_static(TOAST_TYPE_HEADER),
        HeaderValue::from_static(toast.kind.as_str()),
    );
    headers.insert(
        HeaderName::from_static(TOAST_DURATION_HEADER),
        HeaderValue::from(toast.duration_ms),
    );
    Ok(())
}

/// Renders the meta tags that carry a toast across a full page navigation.
pub fn toast_meta_tags(toast: &Toast) -> String {
    format!(
        "<meta name=\"{}\" content=\"{}\">\n<meta name=\"{}\" content=\"{}\">\n<meta name=\"{}\" content=\"{}\">",
        TOAST_MESSAGE_HEADER,
        html_escape::encode_double_quoted_attribute(&toast.message),
        TOAST_TYPE_HEADER,
        toast.kind.as_str(),
        TOAST_DURATION_HEADER,
        toast.duration_ms,
    )
}

/// Inserts a script that shows `toast` once the page has loaded, just before
/// the last `</body>`. Pages without `</body>` are returned unchanged.
pub fn inject_toast_script(html: &str, toast: &Toast) -> String {
    let Some(index) = html.rfind("</body>") else {
        return html.to_string();
    };
    let message = serde_json::Value::String(toast.message.clone())
        .to_string()
        .replace("</", "<\\/");
    let script = format!(
        "<script>\ndocument.addEventListener('DOMContentLoaded', function() {{\n    \
         if (window.showToast) {{\n        window.showToast({message}, \"{}\", {});\n    }}\n}});\n</script>\n",
        toast.kind.as_str(),
        toast.duration_ms,
    );
    let mut out = String::with_capacity(html.len() + script.len());
    out.push_str(&html[..index]);
    out.push_str(&script);
    out.push_str(&html[index..]);
    out
}
