use actix_web::{dev::Payload, FromRequest, HttpRequest};
use futures::future::{ok, Ready};

use crate::errors::AppError;

/// The `{id}` path segment of a resource route.
///
/// Extraction never fails. `value` is `None` when the segment has no leading
/// integer, and each resource decides what that means: users reject it with
/// 400, transactions and categories treat it as an id that matches nothing.
#[derive(Debug, Clone)]
pub struct RecordId {
    pub raw: String,
    pub value: Option<i64>,
}

impl FromRequest for RecordId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = req.match_info().get("id").unwrap_or_default().to_string();
        let value = parse_leading_int(&raw);

        ok(RecordId { raw, value })
    }
}

/// Reads the integer at the start of `input`, ignoring anything after it.
///
/// Leading whitespace and a single sign are accepted, so `" 12"`, `"+12"` and
/// `"12abc"` all give 12. Returns `None` when no digit follows. Values outside
/// the `i64` range saturate; no record can hold such an id.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = &digits[..digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len())];
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });

    Some(if negative { -magnitude } else { magnitude })
}
