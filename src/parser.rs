use aho_corasick::AhoCorasick;
use fancy_regex::Regex;

use crate::error::Result;
use crate::helpers::{parse_float_prefix, parse_int_prefix};
use crate::in_app::{parse_in_app, IN_APP_MARKER};
use crate::types::{AgentInfo, InAppInfo, OsInfo};

const ANDROID_VERSION: &str = r"Android ([\d|.]+)";
const IOS_VERSION: &str = r"(iPhone )?OS ([\d|_]+)";

/// Device family markers, in the order of [`DeviceFamily`].
const FAMILY_MARKERS: [&str; 3] = ["iPod", "iPhone", "iPad"];

/// First browser service code shipped with WKWebView.
const IPHONE_MODERN_WEB_VIEW_CODE: i64 = 560;
const IPAD_MODERN_WEB_VIEW_CODE: i64 = 134;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeviceFamily {
    IPod,
    IPhone,
    IPad,
}

impl DeviceFamily {
    fn from_pattern_index(idx: usize) -> Option<Self> {
        match idx {
            0 => Some(Self::IPod),
            1 => Some(Self::IPhone),
            2 => Some(Self::IPad),
            _ => None,
        }
    }
}

/// Compiled pattern set turning a user-agent string into an [`AgentInfo`].
///
/// Building compiles every pattern once; [`AgentParser::parse`] never fails
/// and falls back to empty/false values for anything it cannot recognise.
pub struct AgentParser {
    android: Regex,
    ios: Regex,
    in_app_marker: Regex,
    families: AhoCorasick,
}

impl AgentParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            android: Regex::new(ANDROID_VERSION)?,
            ios: Regex::new(IOS_VERSION)?,
            in_app_marker: Regex::new(IN_APP_MARKER)?,
            families: AhoCorasick::new(FAMILY_MARKERS)?,
        })
    }

    /// Parse `ua` without touching any cache.
    pub fn parse(&self, ua: &str) -> AgentInfo {
        let os = self.parse_os(ua);

        let (mut is_ipod, mut is_iphone, mut is_ipad) = (false, false, false);
        for m in self.families.find_iter(ua) {
            match DeviceFamily::from_pattern_index(m.pattern().as_usize()) {
                Some(DeviceFamily::IPod) => is_ipod = true,
                Some(DeviceFamily::IPhone) => is_iphone = true,
                Some(DeviceFamily::IPad) => is_ipad = true,
                None => {}
            }
        }

        let in_app = parse_in_app(&self.in_app_marker, ua);
        let is_legacy_web_view = os.is_ios
            && in_app.is_host_app
            && is_legacy_service_code(&in_app, is_iphone, is_ipad);

        let info = AgentInfo {
            os,
            is_ipod,
            is_iphone,
            is_ipad,
            in_app,
            is_legacy_web_view,
        };
        tracing::debug!(?info, "parsed user agent");
        info
    }

    fn parse_os(&self, ua: &str) -> OsInfo {
        // Android wins the version when both patterns match.
        let android_version = first_capture(&self.android, ua, 1);
        let ios_version = first_capture(&self.ios, ua, 2);

        let version = match (android_version, ios_version) {
            (Some(v), _) => parse_float_prefix(v),
            (None, Some(v)) => parse_float_prefix(&v.replacen('_', ".", 1)),
            (None, None) => None,
        };

        OsInfo {
            is_android: android_version.is_some(),
            is_ios: ios_version.is_some(),
            version,
        }
    }
}

/// Text of capture `group` of the first match of `re`, treating regex
/// runtime errors as no match.
fn first_capture<'a>(re: &Regex, ua: &'a str, group: usize) -> Option<&'a str> {
    match re.captures(ua) {
        Ok(Some(caps)) => caps.get(group).map(|m| m.as_str()),
        _ => None,
    }
}

/// A code that is not a number never counts as legacy.
fn is_legacy_service_code(in_app: &InAppInfo, is_iphone: bool, is_ipad: bool) -> bool {
    let Some(code) = parse_int_prefix(&in_app.browser_service_code) else {
        return false;
    };
    (is_iphone && code < IPHONE_MODERN_WEB_VIEW_CODE)
        || (is_ipad && code < IPAD_MODERN_WEB_VIEW_CODE)
}
