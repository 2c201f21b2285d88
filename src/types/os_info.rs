use serde::Serialize;

/// Android releases below this major version have no usable CSS animation support.
const MIN_ANIMATED_ANDROID_VERSION: f64 = 5.0;

/// Operating system facts derived from the user-agent string.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OsInfo {
    pub is_android: bool,
    pub is_ios: bool,
    /// Leading numeric part of the OS version (`"4.4.2"` → `4.4`), if any.
    pub version: Option<f64>,
}

impl OsInfo {
    /// `false` only for Android with a detected version below 5.
    pub fn is_animation_supported(&self) -> bool {
        !(self.is_android
            && self
                .version
                .map_or(false, |v| v < MIN_ANIMATED_ANDROID_VERSION))
    }
}
