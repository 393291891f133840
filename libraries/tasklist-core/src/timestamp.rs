//! Timestamp helpers.
//!
//! Task timestamps are stored with millisecond precision in the shape
//! produced by JavaScript's `Date.prototype.toISOString`
//! (`2023-11-14T22:13:20.000Z`). Any RFC 3339 string is accepted on input.

use chrono::{DateTime, Duration, SecondsFormat, SubsecRound, Utc};
use serde::Serializer;
use serde_json::{Map, Value};

/// Current time, truncated to millisecond precision
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Format a timestamp the way it is persisted
pub fn format(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse any RFC 3339 timestamp into UTC
pub fn parse(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc))
}

/// Smallest stamp that is both `>= now` and strictly after `previous`.
///
/// Two edits inside the same millisecond would otherwise share a stamp.
pub fn after(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    let floor = previous + Duration::milliseconds(1);
    if now < floor {
        floor
    } else {
        now
    }
}

/// `serialize_with` support for optional timestamp fields
pub fn serialize<S>(ts: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match ts {
        Some(ts) => serializer.serialize_str(&format(ts)),
        None => serializer.serialize_none(),
    }
}

/// Remove `key` from `fields` if it holds a parseable timestamp
///
/// Anything else (a number, `null`, free text) stays in `fields` untouched.
pub fn take(fields: &mut Map<String, Value>, key: &str) -> Option<DateTime<Utc>> {
    let parsed = fields.get(key)?.as_str().and_then(|raw| parse(raw).ok())?;
    fields.remove(key);
    Some(parsed)
}
