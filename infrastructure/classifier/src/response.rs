//! Mapping of classification service responses to `SubmissionResult`.
//!
//! The service reports rejections as `422 {"detail": "<text>"}` and encodes
//! the kind of rejection in the text itself. The vendor list embedded after
//! `Valid vendors:` is parsed structurally; the text is never evaluated.

use business::domain::receipt::submission::{ReceiptData, SubmissionResult};
use serde::Deserialize;
use serde_json::Value;

pub const VALID_VENDORS_MARKER: &str = "Valid vendors:";
pub const UNAUTHORIZED_VENDOR_MARKER: &str =
    "does not contain a receipt from an authorized vendor";

#[derive(Debug, Default, Deserialize)]
struct SuccessBody {
    #[serde(default)]
    response_data: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
struct UnprocessableBody {
    #[serde(default)]
    detail: Option<Value>,
}

/// Maps a 200 body. Missing or malformed fields are reported as absent.
pub fn parse_success(body: &[u8]) -> SubmissionResult {
    let data = serde_json::from_slice::<SuccessBody>(body)
        .ok()
        .and_then(|b| b.response_data)
        .unwrap_or(Value::Null);

    SubmissionResult::Success(ReceiptData {
        vendor_name: field(&data, "vendor_name"),
        transaction_id: field(&data, "transaction_id"),
        date_time: field(&data, "date_time"),
        currency: field(&data, "currency"),
        total_amount: field(&data, "total_amount"),
    })
}

fn field(data: &Value, name: &str) -> Option<String> {
    match data.get(name)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Maps a 422 body by inspecting its `detail` text.
pub fn parse_unprocessable(body: &[u8]) -> SubmissionResult {
    let detail = serde_json::from_slice::<UnprocessableBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .map(|d| match d {
            Value::String(s) => s,
            other => other.to_string(),
        })
        .unwrap_or_default();

    classify_detail(detail)
}

fn classify_detail(detail: String) -> SubmissionResult {
    if let Some((_, vendors)) = detail.split_once(VALID_VENDORS_MARKER) {
        let valid_vendors = parse_vendor_list(vendors);
        return SubmissionResult::ValidationError {
            message: detail,
            valid_vendors,
        };
    }

    if detail.contains(UNAUTHORIZED_VENDOR_MARKER) {
        return SubmissionResult::UnauthorizedVendorError { message: detail };
    }

    SubmissionResult::GenericError {
        status_code: 422,
        message: detail,
    }
}

/// Any status other than 200 or 422. The body is not looked at.
pub fn generic_status(status_code: u16) -> SubmissionResult {
    SubmissionResult::GenericError {
        status_code,
        message: format!("Receipt service responded with status {}", status_code),
    }
}

/// Parses a list literal such as `['A', "B", C]`. Quoted items may contain
/// backslash escapes. Anything that is not a well-formed bracketed list
/// yields an empty list.
pub fn parse_vendor_list(raw: &str) -> Vec<String> {
    let inner = regex::Regex::new(r"^\s*\[(?s)(.*)\]\s*$")
        .ok()
        .and_then(|re| re.captures(raw))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str());

    inner.and_then(split_items).unwrap_or_default()
}

type ListChars<'a> = std::iter::Peekable<std::str::Chars<'a>>;

/// Walks the comma separated items between the brackets. `None` on the first
/// malformed item.
fn split_items(inner: &str) -> Option<Vec<String>> {
    let mut items = Vec::new();
    let mut chars = inner.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        let item = match chars.peek().copied() {
            None => break,
            Some(quote @ ('\'' | '"')) => {
                chars.next();
                quoted_item(&mut chars, quote)?
            }
            Some(_) => bare_item(&mut chars)?,
        };

        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        match chars.next() {
            None => {
                push_item(&mut items, item);
                break;
            }
            Some(',') => push_item(&mut items, item),
            Some(_) => return None,
        }
    }

    Some(items)
}

fn quoted_item(chars: &mut ListChars<'_>, quote: char) -> Option<String> {
    let mut item = String::new();
    loop {
        match chars.next()? {
            '\\' => item.push(chars.next()?),
            c if c == quote => return Some(item),
            c => item.push(c),
        }
    }
}

fn bare_item(chars: &mut ListChars<'_>) -> Option<String> {
    let mut item = String::new();
    while let Some(c) = chars.next_if(|c| *c != ',') {
        if matches!(c, '\'' | '"' | '[' | ']' | '\\') {
            return None;
        }
        item.push(c);
    }
    Some(item)
}

fn push_item(items: &mut Vec<String>, item: String) {
    let item = item.trim();
    if !item.is_empty() {
        items.push(item.to_string());
    }
}
