use serde::Serialize;

/// Web engine used by the host app to render the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserEngine {
    /// The operating system's default web view.
    InApp,
    /// The host app's own web engine.
    Higgs,
}

impl BrowserEngine {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "inapp" => Some(Self::InApp),
            "higgs" => Some(Self::Higgs),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InApp => "inapp",
            Self::Higgs => "higgs",
        }
    }
}

/// Fields of the `NAVER(...)` marker a host app appends to its user-agent.
///
/// Every field holds the raw token; missing tokens are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InAppInfo {
    /// Whether the marker was present at all.
    pub is_host_app: bool,
    /// `inapp` or `higgs`; see [`InAppInfo::engine`].
    pub browser_engine: String,
    /// Lowercase identifier of the service using the in-app browser (`search`, `navermap`).
    pub service_code: String,
    /// Numeric browser service code, `100` unless the app assigns another one.
    pub browser_service_code: String,
    /// Version of the host app.
    pub service_version: String,
    /// Version of the host app's own engine; only present with `higgs`.
    pub engine_version: String,
}

impl InAppInfo {
    pub fn engine(&self) -> Option<BrowserEngine> {
        BrowserEngine::from_str(&self.browser_engine)
    }
}
