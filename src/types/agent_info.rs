use serde::Serialize;

use super::{InAppInfo, OsInfo};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AgentInfo {
    pub os: OsInfo,
    pub is_ipod: bool,
    pub is_iphone: bool,
    pub is_ipad: bool,
    pub in_app: InAppInfo,
    /// iOS host app still rendering through the legacy web view, i.e. a
    /// browser service code below the first WKWebView release (iPhone 560,
    /// iPad 134).
    pub is_legacy_web_view: bool,
}

impl AgentInfo {
    pub fn is_animation_supported(&self) -> bool {
        self.os.is_animation_supported()
    }
}
