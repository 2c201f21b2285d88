use fancy_regex::Regex;

use crate::types::InAppInfo;

/// Marker a host app appends to its web view user-agent.  The body runs up
/// to the first closing parenthesis.
pub(crate) const IN_APP_MARKER: &str = r"NAVER\((.+?)\)";

const FIELD_SEPARATOR: &str = "; ";

/// Extract the `NAVER(...)` fields from `ua` using the compiled marker regex.
pub(crate) fn parse_in_app(marker: &Regex, ua: &str) -> InAppInfo {
    let body = match marker.captures(ua) {
        Ok(Some(caps)) => caps.get(1).map(|m| m.as_str()),
        _ => None,
    };
    let Some(body) = body else {
        return InAppInfo::default();
    };

    let mut fields = body.split(FIELD_SEPARATOR).map(str::to_owned);
    let mut next = || fields.next().unwrap_or_default();

    InAppInfo {
        is_host_app: true,
        browser_engine: next(),
        service_code: next(),
        browser_service_code: next(),
        service_version: next(),
        engine_version: next(),
    }
}
